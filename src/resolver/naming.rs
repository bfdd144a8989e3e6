use crate::scanner::Accessor;
use itertools::Itertools;

/// Reduces an arbitrary node name to a fragment usable as a dot-accessed
/// segment of a synthesized variable name: `[A-Za-z0-9_$]` is kept, spaces
/// become underscores, everything else (punctuation, non-ASCII letters) is
/// dropped.
pub fn sanitize_node_name(name: &str) -> String {
    name.chars()
        .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | ' '))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// The canonical identity of one external reference: two occurrences with the
/// same signature always share a synthesized variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceSignature {
    pub node_name: String,
    pub field_path: Vec<String>,
    pub accessor: Accessor,
}

impl ReferenceSignature {
    /// First-attempt variable key: the joined field path, or the sanitized
    /// node name when the reference stops at the accessor itself, plus the
    /// accessor suffix.
    pub fn base_key(&self) -> String {
        let root = if self.field_path.is_empty() {
            sanitize_node_name(&self.node_name)
        } else {
            self.field_path.iter().join("_")
        };
        format!("{}{}", root, self.accessor.key_suffix())
    }
}
