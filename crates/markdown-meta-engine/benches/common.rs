// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_front_matter(keys: usize) -> String {
    let mut content = String::from("---\n");
    for i in 0..keys {
        match i % 3 {
            0 => content.push_str(&format!("key{i}: value {i}\n")),
            1 => content.push_str(&format!("list{i}:\n  - a\n  - b\n")),
            _ => content.push_str(&format!("map{i}:\n  inner: {i}\n")),
        }
    }
    content.push_str("---\n");
    content
}

#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with `some` content.\n\n> Quoted line\n> continues\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_document(keys: usize, size: usize) -> String {
    generate_front_matter(keys) + &generate_markdown_content(size)
}
