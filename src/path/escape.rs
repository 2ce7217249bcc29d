//! Converting between raw node names and path components.

use super::syntax::PathSyntax;

/// Escapes a raw node name so it forms exactly one path component.
///
/// Every delimiter and every escape character in `name` is prefixed with the
/// escape character.
///
/// # Example
///
/// ```
/// use nodepath::path::{escape_component, PathSyntax};
///
/// let syntax = PathSyntax::default();
/// assert_eq!(escape_component("v1.2", &syntax), r"v1\.2");
/// assert_eq!(escape_component(r"C:\tmp", &syntax), r"C:\\tmp");
/// ```
pub fn escape_component(name: &str, syntax: &PathSyntax) -> String {
    let mut escaped = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch == syntax.delimiter() || ch == syntax.escape() {
            escaped.push(syntax.escape());
        }
        escaped.push(ch);
    }
    escaped
}

/// Recovers the raw node name from a single component.
///
/// Each escape character is dropped and the character after it kept as-is.
/// A trailing escape with nothing to bind to is kept.
pub fn unescape_component(component: &str, syntax: &PathSyntax) -> String {
    let mut name = String::with_capacity(component.len());
    let mut chars = component.chars();
    while let Some(ch) = chars.next() {
        if ch == syntax.escape() {
            match chars.next() {
                Some(bound) => name.push(bound),
                None => name.push(ch),
            }
        } else {
            name.push(ch);
        }
    }
    name
}
