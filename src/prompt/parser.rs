/// Parses the word count typed at the console.
///
/// Accepts only non-empty, all-ASCII-digit input (after trimming), so the
/// pipeline never sees a negative or malformed count. Digits that overflow
/// `usize` are rejected the same way as letters: by asking again.
pub fn parse_count(input: &str) -> Option<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}
