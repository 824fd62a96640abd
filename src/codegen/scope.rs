//! Declaration tracking for one statement sequence

use rustc_hash::FxHashSet;

/// Names already introduced with a typed declaration
#[derive(Debug, Clone, Default)]
pub struct Scope {
    declared: FxHashSet<String>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Independent scope for a function body, with every parameter declared
    pub fn for_function(params: &[String]) -> Self {
        Scope {
            declared: params.iter().cloned().collect(),
        }
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Mark `name` declared. Returns `true` only on the first call for `name`.
    pub fn declare(&mut self, name: &str) -> bool {
        let fresh = self.declared.insert(name.to_string());
        if fresh {
            log::trace!("declaring '{}'", name);
        }
        fresh
    }
}
