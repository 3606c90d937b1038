/// Thematic break (`---`, `***`, `___`).
pub struct Rule;

impl Rule {
    pub const CHARS: [u8; 3] = [b'-', b'*', b'_'];
    pub const MIN_RUN: usize = 3;

    /// True when the line is 3+ of one rule character, optionally followed
    /// by trailing whitespace.
    pub fn detect(line: &str) -> bool {
        let body = line.trim_end();
        let b = body.as_bytes();
        let Some(&first) = b.first() else {
            return false;
        };
        Self::CHARS.contains(&first) && b.len() >= Self::MIN_RUN && b.iter().all(|&c| c == first)
    }
}
