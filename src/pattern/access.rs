use super::escape::{backslash_escape, dollar_escape, has_dot_notation_banned_char};
use regex::Regex;

/// The reference syntaxes recognized inside expression text. One variant per
/// syntax keeps the literal-escaping and replacement-escaping rules local to
/// each case instead of spreading them through one giant pattern.
#[derive(Debug, Clone, Copy)]
enum AccessPattern {
    /// `$node["name"]` / `$node['name']`
    NodeBracket { quote: char },
    /// `$node.name` (only valid for names without dot-notation-banned chars)
    NodeDot,
    /// `$items("name")` / `$items("name", index)`
    ItemsCall { quote: char },
    /// `$("name")` / `$('name')`
    DollarCall { quote: char },
}

impl AccessPattern {
    fn all() -> [AccessPattern; 7] {
        [
            Self::NodeBracket { quote: '"' },
            Self::NodeBracket { quote: '\'' },
            Self::NodeDot,
            Self::ItemsCall { quote: '"' },
            Self::ItemsCall { quote: '\'' },
            Self::DollarCall { quote: '"' },
            Self::DollarCall { quote: '\'' },
        ]
    }

    /// Matcher for renaming occurrences of `name` in place. `None` when the
    /// syntax cannot express this name at all.
    fn rename_matcher(&self, name: &str) -> Option<Regex> {
        let escaped = backslash_escape(name);
        let pattern = match self {
            Self::NodeBracket { quote } => {
                format!(r"\$node\[\s*{quote}{escaped}{quote}\s*\]")
            }
            Self::NodeDot => {
                if has_dot_notation_banned_char(name) {
                    return None;
                }
                // The boundary character keeps `$node.name` from matching a
                // prefix of a longer identifier; it is re-emitted via ${1}.
                format!(r"\$node\.{escaped}(?:([^A-Za-z0-9_$])|$)")
            }
            Self::ItemsCall { quote } => format!(r"\$items\(\s*{quote}{escaped}{quote}"),
            Self::DollarCall { quote } => format!(r"\$\(\s*{quote}{escaped}{quote}\s*\)"),
        };
        Some(literal_matcher(&pattern))
    }

    /// Replacement template carrying `new_name`, escaped for substitution.
    fn rename_replacement(&self, new_name: &str) -> String {
        let escaped = dollar_escape(new_name);
        match self {
            Self::NodeBracket { .. } => format!(r#"$$node["{escaped}"]"#),
            Self::NodeDot => {
                if has_dot_notation_banned_char(new_name) {
                    format!(r#"$$node["{escaped}"]${{1}}"#)
                } else {
                    format!(r"$$node.{escaped}${{1}}")
                }
            }
            Self::ItemsCall { quote } => format!(r"$$items({quote}{escaped}{quote}"),
            Self::DollarCall { quote } => format!(r"$$({quote}{escaped}{quote})"),
        }
    }

    /// Matcher locating reference heads to `name` for the occurrence scanner.
    /// Group 1 always wraps the head itself; trailing context stays outside.
    fn scan_matcher(&self, name: &str) -> Option<Regex> {
        let escaped = backslash_escape(name);
        let pattern = match self {
            Self::NodeBracket { quote } => {
                format!(r"(\$node\[\s*{quote}{escaped}{quote}\s*\])")
            }
            Self::NodeDot => {
                if has_dot_notation_banned_char(name) {
                    return None;
                }
                format!(r"(\$node\.{escaped})(?:[^A-Za-z0-9_$]|$)")
            }
            Self::ItemsCall { quote } => {
                format!(r"(\$items\(\s*{quote}{escaped}{quote}\s*(?:,[^)]*)?\))")
            }
            Self::DollarCall { quote } => format!(r"(\$\(\s*{quote}{escaped}{quote}\s*\))"),
        };
        Some(literal_matcher(&pattern))
    }

    /// Name-agnostic matcher capturing the referenced name of any head in this
    /// syntax, used to validate references against the workflow name list.
    fn generic_matcher(&self) -> Regex {
        let pattern = match self {
            Self::NodeBracket { quote } => {
                format!(r"\$node\[\s*{quote}({}){quote}\s*\]", quoted_class(*quote))
            }
            Self::NodeDot => r"\$node\.([A-Za-z_][A-Za-z0-9_]*)".to_string(),
            Self::ItemsCall { quote } => {
                format!(r"\$items\(\s*{quote}({}){quote}", quoted_class(*quote))
            }
            Self::DollarCall { quote } => {
                format!(r"\$\(\s*{quote}({}){quote}\s*\)", quoted_class(*quote))
            }
        };
        literal_matcher(&pattern)
    }
}

/// Character class matching the interior of a quoted name literal, tolerating
/// backslash-escaped quotes inside the name.
fn quoted_class(quote: char) -> &'static str {
    match quote {
        '"' => r#"(?:\\.|[^"\\])*"#,
        _ => r"(?:\\.|[^'\\])*",
    }
}

fn literal_matcher(pattern: &str) -> Regex {
    Regex::new(pattern).expect("patterns built from escaped literals are valid")
}

/// Rewrites every reference to node `previous_name` inside `expression` so it
/// refers to `new_name` instead, across all supported reference syntaxes.
/// Bracket access always comes out in bracket form; dot access falls back to
/// bracket form when the new name cannot be dot-accessed; call syntaxes keep
/// their original quote style. Text that merely mentions the name (e.g. as an
/// argument to an unrelated function) is left intact.
pub fn apply_access_patterns(expression: &str, previous_name: &str, new_name: &str) -> String {
    let mut expression = expression.to_string();
    for pattern in AccessPattern::all() {
        let Some(matcher) = pattern.rename_matcher(previous_name) else {
            continue;
        };
        let replacement = pattern.rename_replacement(new_name);
        expression = matcher
            .replace_all(&expression, replacement.as_str())
            .into_owned();
    }
    expression
}

/// Compiled head matchers for one specific node name, all syntaxes.
pub(crate) fn head_matchers(name: &str) -> Vec<Regex> {
    AccessPattern::all()
        .into_iter()
        .filter_map(|pattern| pattern.scan_matcher(name))
        .collect()
}

/// Compiled name-agnostic head matchers, one per syntax.
pub(crate) fn generic_head_matchers() -> Vec<Regex> {
    AccessPattern::all()
        .into_iter()
        .map(|pattern| pattern.generic_matcher())
        .collect()
}
