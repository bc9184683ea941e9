//! Template minification.
//!
//! Templates are normalized before transmission: runs of whitespace
//! collapse to a single space, whitespace between adjacent tags is
//! dropped, and the result is trimmed. Purely a byte-saving step with no
//! semantic effect on the rendered HTML.

/// Minify a template for storage.
///
/// Idempotent: minifying an already-minified template returns it
/// unchanged.
pub fn minify_template(template: &str) -> String {
    let mut collapsed = String::with_capacity(template.len());
    let mut pending_space = false;
    for ch in template.chars() {
        if ch.is_whitespace() {
            pending_space = !collapsed.is_empty();
            continue;
        }
        if pending_space {
            // Whitespace between a closing '>' and an opening '<' is
            // dropped entirely, everything else collapses to one space.
            if !(collapsed.ends_with('>') && ch == '<') {
                collapsed.push(' ');
            }
            pending_space = false;
        }
        collapsed.push(ch);
    }
    collapsed
}
