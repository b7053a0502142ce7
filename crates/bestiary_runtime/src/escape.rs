//! Escape sequence expansion for input lines.

/// Expands the two-character sequences `\n` and `\t` into a newline and a
/// tab.
///
/// `\n` is expanded first, then `\t`.
#[must_use]
pub fn expand_escapes(line: &str) -> String {
    line.replace("\\n", "\n").replace("\\t", "\t")
}
