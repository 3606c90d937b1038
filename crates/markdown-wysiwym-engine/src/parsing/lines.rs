/// A single line of the document with its 0-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    pub index: usize,
    /// Line text without the `\n` terminator or a trailing `\r`.
    pub text: &'a str,
}

/// Returns an iterator over the `\n`-separated lines of `text`.
///
/// A trailing newline yields a final empty line, so the number of lines
/// matches what an editor displays.
pub fn lines(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    text.split('\n').enumerate().map(|(index, raw)| LineRef {
        index,
        text: raw.strip_suffix('\r').unwrap_or(raw),
    })
}
