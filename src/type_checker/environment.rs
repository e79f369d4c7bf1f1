use std::collections::HashMap;

use super::types::Type;

#[derive(Debug, Default)]
struct Scope {
    variable_lookup: HashMap<String, Type>,
}

/// Chained name-to-type scopes, held as an owned stack of frames.
///
/// The first frame is the global scope and is never popped. Lookups walk from
/// the innermost frame outwards; declarations only touch the innermost frame.
#[derive(Debug)]
pub struct Environment {
    frames: Vec<Scope>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            frames: vec![Scope::default()],
        }
    }

    pub fn push_scope(&mut self) {
        self.frames.push(Scope::default());
    }

    pub fn pop_scope(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Number of live frames, the global frame included.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Binds `variable_name` in the innermost frame, replacing any binding of
    /// the same name there. Returns the replaced type.
    pub fn declare_variable(&mut self, variable_name: &str, variable_type: Type) -> Option<Type> {
        self.frames
            .last_mut()
            .and_then(|scope| scope.variable_lookup.insert(variable_name.to_string(), variable_type))
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<Type> {
        self.frames
            .iter()
            .rev()
            .find_map(|scope| scope.variable_lookup.get(variable_name))
            .copied()
    }
}
