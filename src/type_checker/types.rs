use std::fmt::Display;

/// The closed set of types the checker assigns. Types are compared by tag
/// only: there is no subtyping and no unification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Number,
    String,
    Function,
    Any,
    Void,
    /// Produced after a diagnostic so checking can continue.
    Unknown,
}

impl Type {
    /// Resolves a written annotation name.
    pub fn from_annotation(name: &str) -> Option<Type> {
        match name {
            "number" => Some(Type::Number),
            "string" => Some(Type::String),
            "any" => Some(Type::Any),
            "void" => Some(Type::Void),
            "Function" | "function" => Some(Type::Function),
            _ => None,
        }
    }

    /// `any` and `unknown` are compatible with every other type.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Type::Any | Type::Unknown)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Number => "number",
            Type::String => "string",
            Type::Function => "function",
            Type::Any => "any",
            Type::Void => "void",
            Type::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}
