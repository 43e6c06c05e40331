use clap::Parser;

use cumulus::app::{run, Args};

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("cumulus: error: {}", err);
        std::process::exit(1);
    }
}
