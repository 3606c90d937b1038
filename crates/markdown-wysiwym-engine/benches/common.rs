// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic*, ~~old~~ and `code`.\n\n- Bullet point with [a link](https://example.com)\n- [ ] task 📅 2024-05-01 🔁 every week\n\n> quoted <u>text</u>\n\n```rust\nfn example() {\n    println!(\"**Hello**\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

/// `count` tagged ranges of `width` lines with `gap` untagged lines between them.
#[allow(dead_code)]
pub fn generate_ranges(count: usize, width: usize, gap: usize) -> Vec<(i64, i64)> {
    (0..count)
        .map(|i| {
            let start = (i * (width + gap)) as i64;
            (start, start + width as i64 - 1)
        })
        .collect()
}
