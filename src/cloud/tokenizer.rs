use super::separators::SeparatorSet;

/// A maximal run of input characters, classified against a separator set.
///
/// A token never mixes classes and is never empty; concatenating the tokens
/// of a text in order reconstructs the text exactly.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'a> {
    Word(&'a str),
    Separator(&'a str),
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Token::Word(text) | Token::Separator(text) => text,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

/// Returns the maximal run starting at byte offset `position`: all
/// separators if the character there is a separator, all non-separators
/// otherwise. The caller resumes segmentation at `position + run.len()`;
/// a run always ends on a char boundary.
///
/// `position` must be in range and on a char boundary; violations panic.
pub fn next_token<'a>(text: &'a str, position: usize, separators: &SeparatorSet) -> &'a str {
    assert!(
        position < text.len(),
        "position {} out of range for text of length {}",
        position,
        text.len()
    );
    let rest = &text[position..];
    let first_is_separator = rest
        .chars()
        .next()
        .map_or(false, |c| separators.is_separator(c));
    let end = rest
        .char_indices()
        .find(|&(_, c)| separators.is_separator(c) != first_is_separator)
        .map_or(rest.len(), |(idx, _)| idx);
    &rest[..end]
}

/// Iterator over the tokens of a text, in order, from offset zero.
pub struct Tokens<'a> {
    text: &'a str,
    position: usize,
    separators: &'a SeparatorSet,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str, separators: &'a SeparatorSet) -> Self {
        Tokens {
            text,
            position: 0,
            separators,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.position >= self.text.len() {
            return None;
        }
        let run = next_token(self.text, self.position, self.separators);
        self.position += run.len();
        // A run is never empty, so its first char decides the class.
        let is_separator = run
            .chars()
            .next()
            .map_or(false, |c| self.separators.is_separator(c));
        Some(if is_separator {
            Token::Separator(run)
        } else {
            Token::Word(run)
        })
    }
}
