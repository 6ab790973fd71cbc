// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_message(size: usize) -> String {
    let base = "## Estimate\n\nHere is the **updated** total, see [terms](#help:terms) and [site](https://example.com/a).\n\n- Cabinets `x2`\n  fitted on site\n- Labour\n\n1. Sign\n2. Pay deposit\n\n> Valid for 30 days.\n\n```budget-summary\n{\"title\": \"Refit\", \"total\": 18500, \"lines\": [{\"label\": \"Cabinets\", \"amount\": 7200}]}\n```\n\n";
    base.repeat(size)
}

/// A single paragraph full of markers that never close, the worst case for
/// the inline scanner.
#[allow(dead_code)]
pub fn generate_unclosed_markers(count: usize) -> String {
    let mut content = String::with_capacity(count * 8);
    for i in 0..count {
        match i % 3 {
            0 => content.push_str("`tick "),
            1 => content.push_str("**open "),
            _ => content.push_str("[label "),
        }
    }
    content
}

#[allow(dead_code)]
pub fn generate_long_list(items: usize) -> String {
    let mut content = String::new();
    for i in 0..items {
        content.push_str(&format!("- Item {i} with [link](/items/{i}) and **bold**\n"));
        if i % 4 == 0 {
            content.push_str("  continued on the next line\n");
        }
    }
    content
}
