use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;

use crate::cloud::{select, FrequencyTable};
use crate::error::{CloudError, Result};
use crate::input::load_document;
use crate::prompt::{prompt_count, prompt_line};
use crate::render::write_page;

/// Command-line surface. Every value is optional; whatever is missing is
/// asked for on the console, in the same order the questions have always
/// been asked.
#[derive(Parser, Debug)]
#[command(
    name = "cumulus",
    about = "Generate an HTML tag cloud from a plain-text document"
)]
pub struct Args {
    /// Text document to count words in
    pub input: Option<String>,

    /// HTML file to write the cloud to
    pub output: Option<String>,

    /// Number of words to include in the cloud
    #[arg(short = 'n', long = "words")]
    pub words: Option<usize>,
}

/// Resolves the missing arguments on the real console and builds the
/// cloud page.
pub fn run(args: &Args) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_console(args, &mut stdin.lock(), &mut stdout.lock())
}

/// [`run`] against arbitrary console streams.
///
/// Both paths are resolved first and the document is loaded before the
/// count question; a bad input path fails here without asking anything
/// further. Ends by reporting what was written.
pub fn run_with_console<R: BufRead, W: Write>(
    args: &Args,
    console_in: &mut R,
    console_out: &mut W,
) -> Result<()> {
    let input_path = match &args.input {
        Some(path) => path.clone(),
        None => prompt_line("Input file: ", console_in, console_out)?,
    };
    let output_path = match &args.output {
        Some(path) => path.clone(),
        None => prompt_line("Output file: ", console_in, console_out)?,
    };

    let lines = load_document(&input_path)?;

    let requested = match args.words {
        Some(count) => count,
        None => prompt_count(console_in, console_out)?,
    };

    let included = write_cloud(&input_path, &output_path, &lines, requested)?;
    writeln!(console_out, "Wrote {} ({} words).", output_path, included)?;
    Ok(())
}

/// Runs the whole pipeline for one document: load lines, accumulate
/// frequencies, pick the top `requested` words, render the page. Returns
/// how many words the page contains.
pub fn generate(input_path: &str, output_path: &str, requested: usize) -> Result<usize> {
    let lines = load_document(input_path)?;
    write_cloud(input_path, output_path, &lines, requested)
}

fn write_cloud(
    source_name: &str,
    output_path: &str,
    lines: &[String],
    requested: usize,
) -> Result<usize> {
    let mut table = FrequencyTable::new();
    for line in lines {
        table.accumulate_line(line);
    }

    let selection = select(&table, requested);

    let write_failed = |source: io::Error| CloudError::Write {
        path: output_path.to_string(),
        source,
    };
    let file = File::create(output_path).map_err(write_failed)?;
    let mut out = BufWriter::new(file);
    write_page(&mut out, source_name, &selection).map_err(write_failed)?;
    out.flush().map_err(write_failed)?;

    Ok(selection.len())
}
