//! Text length rules for saved items

/// Maximum length for a task's text, in characters.
pub const TASK_TEXT_MAX: usize = 500;

/// Maximum length for a note's text, in characters.
pub const NOTE_TEXT_MAX: usize = 1000;

/// Clip a string to at most `max` characters.
///
/// Operates on char boundaries, so multi-byte text never gets split
/// mid-character. Returns the input unchanged when it already fits.
pub fn clip(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
