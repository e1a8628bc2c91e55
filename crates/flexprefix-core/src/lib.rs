// crates/flexprefix-core/src/lib.rs
pub mod flexbox;
pub mod prefixer;
pub mod properties;
pub mod property_registry;
pub mod style;

pub use flexbox::*;
pub use prefixer::*;
pub use properties::*;
pub use property_registry::*;
pub use style::*;

#[derive(Debug, thiserror::Error)]
pub enum PrefixError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object of style declarations, found {0}")]
    NotAnObject(&'static str),

    #[error("Unsupported value for '{key}': expected a string, number, null or array of strings, found {found}")]
    InvalidValue { key: String, found: &'static str },
}

pub type Result<T> = std::result::Result<T, PrefixError>;
