//! Positional template rendering
//!
//! Templates use `{0}`, `{1}`, ... placeholders. `{{` and `}}` produce
//! literal braces. A placeholder whose index has no argument, or any brace
//! sequence that is not a placeholder, is copied through unchanged.

use std::collections::BTreeSet;
use std::fmt::Display;

const BRACES: &[char] = &['{', '}'];

/// Substitute positional placeholders in `template` with `args`
pub fn render(template: &str, args: &[&dyn Display]) -> String {
    let mut output = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(pos) = rest.find(BRACES) {
        output.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if rest.starts_with("{{") || rest.starts_with("}}") {
            output.push_str(&rest[..1]);
            rest = &rest[2..];
            continue;
        }

        match parse_placeholder(rest) {
            Some((index, len)) => {
                match args.get(index) {
                    Some(arg) => output.push_str(&arg.to_string()),
                    None => output.push_str(&rest[..len]),
                }
                rest = &rest[len..];
            }
            None => {
                output.push_str(&rest[..1]);
                rest = &rest[1..];
            }
        }
    }

    output.push_str(rest);
    output
}

/// Distinct placeholder indices used by `template`, ascending
pub fn placeholder_indices(template: &str) -> Vec<usize> {
    let mut found = BTreeSet::new();
    let mut rest = template;

    while let Some(pos) = rest.find(BRACES) {
        rest = &rest[pos..];
        if rest.starts_with("{{") || rest.starts_with("}}") {
            rest = &rest[2..];
            continue;
        }
        match parse_placeholder(rest) {
            Some((index, len)) => {
                found.insert(index);
                rest = &rest[len..];
            }
            None => rest = &rest[1..],
        }
    }

    found.into_iter().collect()
}

/// Parse `{digits}` at the start of `s`; returns the index and byte length.
fn parse_placeholder(s: &str) -> Option<(usize, usize)> {
    let body = s.strip_prefix('{')?;
    let close = body.find('}')?;
    let digits = &body[..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = digits.parse().ok()?;
    Some((index, close + 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_placeholder() {
        assert_eq!(render("[{0}] ", &[&"Main"]), "[Main] ");
    }

    #[test]
    fn test_render_two_placeholders_any_order() {
        assert_eq!(render("{1}-{0}-{1}", &[&1, &2]), "2-1-2");
    }

    #[test]
    fn test_render_escaped_braces() {
        assert_eq!(render("{{{0}}}", &[&7]), "{7}");
    }

    #[test]
    fn test_render_keeps_unknown_index_and_stray_braces() {
        assert_eq!(render("{2} {x} }", &[&"a"]), "{2} {x} }");
    }

    #[test]
    fn test_placeholder_indices_are_distinct_and_sorted() {
        assert_eq!(placeholder_indices("{1} {0} {1}"), vec![0, 1]);
        assert_eq!(placeholder_indices("no placeholders {{0}}"), Vec::<usize>::new());
    }
}
