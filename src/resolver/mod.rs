pub mod naming;

pub use naming::{ReferenceSignature, sanitize_node_name};

use ahash::AHashMap;
use indexmap::IndexMap;

/// Assigns collision-free variable names to reference signatures, scoped to a
/// single extraction call. Names are handed out in first-seen order; a
/// signature seen twice reuses its earlier name.
#[derive(Default)]
pub struct VariableResolver {
    assigned: AHashMap<ReferenceSignature, String>,
    taken: AHashMap<String, ReferenceSignature>,
    variables: IndexMap<String, String>,
}

impl VariableResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the variable name for `signature`, reusing an earlier
    /// assignment or escalating until an unbound candidate is found. `raw` is
    /// the original matched expression text recorded for a fresh binding.
    pub fn resolve(&mut self, signature: &ReferenceSignature, raw: &str) -> String {
        if let Some(existing) = self.assigned.get(signature) {
            return existing.clone();
        }
        let name = self.next_free_name(signature);
        self.taken.insert(name.clone(), signature.clone());
        self.assigned.insert(signature.clone(), name.clone());
        self.variables.insert(name.clone(), raw.to_string());
        name
    }

    /// Escalation: bare key, then node-prefixed, then numeric suffixes.
    fn next_free_name(&self, signature: &ReferenceSignature) -> String {
        let base = signature.base_key();
        if !self.taken.contains_key(&base) {
            return base;
        }
        let prefixed = format!("{}_{}", sanitize_node_name(&signature.node_name), base);
        if !self.taken.contains_key(&prefixed) {
            return prefixed;
        }
        let mut counter = 1usize;
        loop {
            let candidate = format!("{prefixed}_{counter}");
            if !self.taken.contains_key(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    /// The accumulated `variable name -> original expression text` map.
    pub fn into_variables(self) -> IndexMap<String, String> {
        self.variables
    }
}
