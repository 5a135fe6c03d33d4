/// Extension used when a language tag is empty or not in the table.
pub const FALLBACK_EXTENSION: &str = "txt";

/// Map a fenced block's language tag to a file extension.
///
/// Lookup is case-insensitive and ignores surrounding whitespace. The same
/// table is used for writing code files and for naming archive members.
pub fn extension_for(language_tag: &str) -> &'static str {
    let tag = language_tag.trim().to_ascii_lowercase();
    match tag.as_str() {
        "python" => "py",
        "javascript" => "js",
        "java" => "java",
        "c" => "c",
        "c++" => "cpp",
        "go" => "go",
        "ruby" => "rb",
        "bash" => "sh",
        "html" => "html",
        "css" => "css",
        "typescript" => "ts",
        "php" => "php",
        "rust" => "rs",
        "swift" => "swift",
        "kotlin" => "kt",
        "sql" => "sql",
        _ => FALLBACK_EXTENSION,
    }
}
