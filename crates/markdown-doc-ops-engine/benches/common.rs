// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n  - Nested item\n- Another item\n\n> Quoted text\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_tables(count: usize, rows: usize, cols: usize) -> String {
    let mut content = String::new();
    for table in 0..count {
        content.push_str(&format!("Table {table}\n\n"));
        let header: Vec<String> = (0..cols).map(|c| format!("H{c}")).collect();
        content.push_str(&format!("| {} |\n", header.join(" | ")));
        content.push_str(&format!("|{}\n", "---|".repeat(cols)));
        for row in 0..rows {
            let cells: Vec<String> = (0..cols).map(|c| format!("r{row}c{c}")).collect();
            content.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        content.push('\n');
    }
    content
}

#[allow(dead_code)]
pub fn generate_nested_lists(lists: usize, depth: usize) -> String {
    let mut content = String::new();
    for list in 0..lists {
        for level in 0..depth {
            content.push_str(&format!("{}- item {list}.{level}\n", "  ".repeat(level)));
        }
        content.push_str("\nBetween lists.\n\n");
    }
    content
}
