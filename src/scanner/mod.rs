pub mod accessor;

pub use accessor::Accessor;

use crate::pattern::{generic_head_matchers, head_matchers};
use accessor::parse_field_path;
use ahash::AHashSet;
use regex::Regex;
use std::cmp::Reverse;
use std::ops::Range;

/// A single reference found inside one parameter's expression text.
#[derive(Debug, Clone)]
pub struct ReferenceOccurrence {
    pub referenced_node: String,
    pub accessor: Accessor,
    pub field_path: Vec<String>,
    /// Byte span of the matched text inside the parameter value.
    pub span: Range<usize>,
    /// The exact matched source text. For references without a field-access
    /// chain this stops right after the accessor; everything beyond stays
    /// untouched in the parameter.
    pub raw: String,
    /// Whether the referenced node is itself part of the subgraph.
    pub internal: bool,
}

struct NameMatcher {
    name: String,
    internal: bool,
    heads: Vec<Regex>,
}

/// Locates node references in expression text for a fixed name universe.
/// Matchers are compiled once per extraction call and reused across every
/// scanned parameter.
pub(crate) struct Scanner {
    matchers: Vec<NameMatcher>,
    generic: Vec<Regex>,
    known: AHashSet<String>,
}

impl Scanner {
    pub(crate) fn new(node_names: &[String], subgraph_names: &AHashSet<String>) -> Self {
        let matchers = node_names
            .iter()
            .map(|name| NameMatcher {
                name: name.clone(),
                internal: subgraph_names.contains(name),
                heads: head_matchers(name),
            })
            .collect();
        Self {
            matchers,
            generic: generic_head_matchers(),
            known: node_names.iter().cloned().collect(),
        }
    }

    /// Returns the first referenced node name that is not part of the
    /// workflow, if any.
    pub(crate) fn find_unknown_reference(&self, text: &str) -> Option<String> {
        for matcher in &self.generic {
            for captures in matcher.captures_iter(text) {
                let name = &captures[1];
                if !self.known.contains(name) {
                    return Some(name.to_string());
                }
            }
        }
        None
    }

    /// Finds every reference occurrence in `text`, in source order and
    /// non-overlapping. When occurrences nest (a head inside another
    /// occurrence's `itemMatching` argument), the outermost one wins.
    pub(crate) fn scan(&self, text: &str) -> Vec<ReferenceOccurrence> {
        let mut found = Vec::new();
        for matcher in &self.matchers {
            for head in &matcher.heads {
                for captures in head.captures_iter(text) {
                    let Some(head_match) = captures.get(1) else {
                        continue;
                    };
                    let head_range = head_match.range();
                    let (accessor, accessor_len) = Accessor::parse(&text[head_range.end..]);
                    let after_accessor = head_range.end + accessor_len;
                    let (field_path, field_len) = parse_field_path(&text[after_accessor..]);
                    let end = after_accessor + field_len;
                    found.push(ReferenceOccurrence {
                        referenced_node: matcher.name.clone(),
                        accessor,
                        field_path,
                        span: head_range.start..end,
                        raw: text[head_range.start..end].to_string(),
                        internal: matcher.internal,
                    });
                }
            }
        }

        found.sort_by_key(|occurrence| (occurrence.span.start, Reverse(occurrence.span.end)));
        let mut cursor = 0;
        found.retain(|occurrence| {
            if occurrence.span.start < cursor {
                return false;
            }
            cursor = occurrence.span.end;
            true
        });
        found
    }
}
