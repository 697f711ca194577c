//! Graph serializers.
//!
//! Both serializers are deliberately hand-rolled string builders over
//! the in-memory graph: the output shapes are small and fixed, and
//! building them directly keeps the wire text auditable line by line.
//!
//! | Module | Format |
//! |--------|--------|
//! | [`turtle`] | Turtle 1.1 with prefix header and subject grouping |
//! | [`ntriples`] | N-Triples, one triple per line |

pub mod ntriples;
pub mod turtle;

/// Escapes a string for use inside a double-quoted literal.
///
/// Covers the escape set shared by Turtle and N-Triples.
#[must_use]
pub(crate) fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}
