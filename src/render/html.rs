use std::io::{self, Write};

use crate::cloud::font::font_size;
use crate::cloud::selector::Selection;

/// Writes the complete cloud page: header naming the source document, one
/// span per selected word in the selection's alphabetical order, closing
/// tags. Each span carries its font size as a `f{size}` class and the
/// exact count as a tooltip.
pub fn write_page<W: Write>(out: &mut W, source: &str, selection: &Selection) -> io::Result<()> {
    write_header(out, source)?;
    for entry in selection.iter() {
        let size = font_size(selection.max, selection.min, entry.count);
        writeln!(
            out,
            "        <span style=\"cursor:default\" class=\"f{}\" title=\"count: {}\">{}</span>",
            size,
            entry.count,
            escape_text(&entry.word)
        )?;
    }
    write_footer(out)
}

fn write_header<W: Write>(out: &mut W, source: &str) -> io::Result<()> {
    let heading = format!("Words Counted in {}", escape_text(source));
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>{}</title>", heading)?;
    writeln!(
        out,
        "<link href=\"tagcloud.css\" rel=\"stylesheet\" type=\"text/css\">"
    )?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "    <h2>{}</h2>", heading)?;
    writeln!(out, "    <hr/>")?;
    writeln!(out, "    <div class=\"cdiv\">")?;
    writeln!(out, "    <p class=\"cbox\">")
}

fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "    </p>")?;
    writeln!(out, "    </div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

/// Escapes text for literal placement in markup or an attribute value.
///
/// The separator set already keeps `<`, `>`, `"` and `'` out of words, but
/// `&` is not a separator and source file names can contain anything.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::selector::SelectedEntry;

    fn page_for(source: &str, selection: &Selection) -> String {
        let mut out = Vec::new();
        write_page(&mut out, source, selection).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn selection(entries: &[(&str, usize)], max: usize, min: usize) -> Selection {
        Selection {
            entries: entries
                .iter()
                .map(|&(word, count)| SelectedEntry {
                    word: word.to_string(),
                    count,
                })
                .collect(),
            max,
            min,
        }
    }

    #[test]
    fn test_page_shape() {
        let page = page_for("data.txt", &selection(&[("and", 1), ("the", 3)], 3, 1));
        assert!(page.starts_with("<html>\n<head>\n"));
        assert!(page.contains("<title>Words Counted in data.txt</title>"));
        assert!(page.contains("<h2>Words Counted in data.txt</h2>"));
        assert!(page.contains("tagcloud.css"));
        assert!(page.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_each_entry_gets_a_sized_span() {
        let page = page_for("data.txt", &selection(&[("and", 1), ("the", 3)], 3, 1));
        assert!(page.contains("<span style=\"cursor:default\" class=\"f11\" title=\"count: 1\">and</span>"));
        assert!(page.contains("<span style=\"cursor:default\" class=\"f48\" title=\"count: 3\">the</span>"));
    }

    #[test]
    fn test_spans_follow_selection_order() {
        let page = page_for(
            "data.txt",
            &selection(&[("apple", 2), ("pear", 2), ("plum", 2)], 2, 2),
        );
        let apple = page.find(">apple<").unwrap();
        let pear = page.find(">pear<").unwrap();
        let plum = page.find(">plum<").unwrap();
        assert!(apple < pear && pear < plum);
    }

    #[test]
    fn test_empty_selection_renders_no_spans() {
        let page = page_for(
            "empty.txt",
            &Selection {
                entries: Vec::new(),
                max: 0,
                min: 0,
            },
        );
        assert!(!page.contains("<span"));
        assert!(page.contains("<title>Words Counted in empty.txt</title>"));
    }

    #[test]
    fn test_words_are_escaped() {
        let page = page_for("notes.txt", &selection(&[("r&d", 4)], 4, 4));
        assert!(page.contains(">r&amp;d</span>"));
        assert!(!page.contains(">r&d<"));
    }

    #[test]
    fn test_source_name_is_escaped() {
        let page = page_for("a<b>&c.txt", &selection(&[("word", 1)], 1, 1));
        assert!(page.contains("<title>Words Counted in a&lt;b&gt;&amp;c.txt</title>"));
    }

    #[test]
    fn test_escape_text_covers_markup_chars() {
        assert_eq!(escape_text("a&b"), "a&amp;b");
        assert_eq!(escape_text("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_text("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape_text("it's"), "it&#39;s");
        assert_eq!(escape_text("plain"), "plain");
    }
}
