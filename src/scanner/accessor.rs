use std::fmt;

/// The data-selection method applied to a referenced node's output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Accessor {
    Item,
    First,
    Last,
    All,
    /// `itemMatching(<expr>)` with the raw argument source text. The argument
    /// is never evaluated, only carried along.
    ItemMatching { argument: String },
}

impl Accessor {
    /// Parses the accessor immediately following a reference head, returning
    /// it together with the number of bytes consumed. Absence of an explicit
    /// accessor is an implicit `.item` consuming nothing.
    pub(crate) fn parse(rest: &str) -> (Accessor, usize) {
        for (token, accessor) in [
            (".first()", Accessor::First),
            (".last()", Accessor::Last),
            (".all()", Accessor::All),
        ] {
            if rest.starts_with(token) {
                return (accessor, token.len());
            }
        }

        const ITEM_MATCHING: &str = ".itemMatching(";
        if rest.starts_with(ITEM_MATCHING) {
            if let Some(close) = find_closing_paren(rest, ITEM_MATCHING.len()) {
                let argument = rest[ITEM_MATCHING.len()..close].trim().to_string();
                return (Accessor::ItemMatching { argument }, close + 1);
            }
        }

        const ITEM: &str = ".item";
        if rest.starts_with(ITEM) {
            let next = rest[ITEM.len()..].chars().next();
            if !next.is_some_and(is_identifier_char) {
                return (Accessor::Item, ITEM.len());
            }
        }

        (Accessor::Item, 0)
    }

    /// The suffix this accessor contributes to a synthesized variable key.
    pub fn key_suffix(&self) -> String {
        match self {
            Accessor::Item => String::new(),
            Accessor::First => "_first".to_string(),
            Accessor::Last => "_last".to_string(),
            Accessor::All => "_all".to_string(),
            Accessor::ItemMatching { argument } => format!("_itemMatching_{argument}"),
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Item => write!(f, ".item"),
            Accessor::First => write!(f, ".first()"),
            Accessor::Last => write!(f, ".last()"),
            Accessor::All => write!(f, ".all()"),
            Accessor::ItemMatching { argument } => write!(f, ".itemMatching({argument})"),
        }
    }
}

pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Parses the `.json.a.b` field-access chain following an accessor, returning
/// the segments and the bytes consumed. A segment immediately followed by `(`
/// is a method call and stops the chain; a chain without at least one plain
/// segment is left unconsumed entirely.
pub(crate) fn parse_field_path(rest: &str) -> (Vec<String>, usize) {
    const DATA_ROOT: &str = ".json";
    if !rest.starts_with(DATA_ROOT) {
        return (Vec::new(), 0);
    }
    let mut segments = Vec::new();
    let mut consumed = DATA_ROOT.len();
    loop {
        let tail = &rest[consumed..];
        let Some(after_dot) = tail.strip_prefix('.') else {
            break;
        };
        let segment: String = after_dot
            .chars()
            .take_while(|c| is_identifier_char(*c))
            .collect();
        if segment.is_empty() || after_dot[segment.len()..].starts_with('(') {
            break;
        }
        consumed += 1 + segment.len();
        segments.push(segment);
    }
    if segments.is_empty() {
        (Vec::new(), 0)
    } else {
        (segments, consumed)
    }
}

/// Finds the `)` closing the paren opened just before `from`, skipping over
/// string literals (with backslash escapes) so parens inside quoted arguments
/// do not unbalance the scan.
fn find_closing_paren(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 1usize;
    let mut quote: Option<u8> = None;
    let mut i = from;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' {
                    i += 1;
                } else if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'"' | b'\'' | b'`' => quote = Some(b),
                b'(' => depth += 1,
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            },
        }
        i += 1;
    }
    None
}
