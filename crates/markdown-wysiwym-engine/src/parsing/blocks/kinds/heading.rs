/// ATX heading type with owned delimiter constant.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Matches `1-6 '#', one or more spaces, non-empty text`.
    ///
    /// Returns `(level, marker_end)` where `marker_end` is the byte offset of
    /// the first content character. The level is the length of the longest
    /// `#` run; a run longer than six is not a heading.
    pub fn detect(line: &str) -> Option<(u8, usize)> {
        let b = line.as_bytes();
        let level = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }

        let spaces = b[level..].iter().take_while(|&&c| c == b' ').count();
        if spaces == 0 {
            return None;
        }

        let marker_end = level + spaces;
        if line[marker_end..].trim().is_empty() {
            return None;
        }
        Some((level as u8, marker_end))
    }
}
