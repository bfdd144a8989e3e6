/// Characters that carry meaning inside a regular expression and must be
/// escaped to embed a node name as a literal match target.
const REGEX_METACHARS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Escapes every regex metacharacter in `name` with a backslash, so the name
/// can be embedded as a literal inside a dynamically built pattern.
pub fn backslash_escape(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if REGEX_METACHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Doubles every `$` in `name`, so the name can be embedded in a regex
/// replacement string (where a lone `$` introduces a group reference).
pub fn dollar_escape(name: &str) -> String {
    name.replace('$', "$$")
}

/// Whether `name` cannot be used as a bare dot-accessed identifier: it is
/// empty, starts with a digit, or contains any character outside
/// `[A-Za-z0-9_]`.
pub fn has_dot_notation_banned_char(name: &str) -> bool {
    match name.chars().next() {
        None => true,
        Some(first) if first.is_ascii_digit() => true,
        Some(_) => name.chars().any(|c| !c.is_ascii_alphanumeric() && c != '_'),
    }
}
