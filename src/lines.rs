/// Splits text into lines, accepting both `\n` and `\r\n` endings.
///
/// ## Example
///
/// ```not_rust
/// "a\nb" -> ["a", "b"]
/// "a\r\nb\n" -> ["a", "b", ""]
/// ```
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
