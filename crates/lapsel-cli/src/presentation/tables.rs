//! Table formatting utilities for CLI output.

/// Truncates a string to a maximum character count, adding "..." if needed.
///
/// Counts characters rather than bytes; descriptions and component names
/// come from store listings and are not ASCII-only.
///
/// # Examples
///
/// ```rust
/// use lapsel_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    let keep = max_len.saturating_sub(3);
    let cut = s
        .char_indices()
        .nth(keep)
        .map_or(s.len(), |(offset, _)| offset);
    format!("{}...", &s[..cut])
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}
