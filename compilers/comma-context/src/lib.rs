pub mod bundle;
pub mod comma;
pub mod context;
pub mod error;
pub mod notation;
pub mod role;

pub use bundle::AnnotationBundle;
pub use comma::Comma;
pub use context::{CommaContext, SENTENCE_END, SENTENCE_START};
pub use error::{CommaError, Result};
pub use notation::{Labeled, NULL_NOTATION};
pub use role::normalize_role;

// Callers usually need the configuration and record types alongside the queries
pub use comma_protocol::{CommaConfig, Constituent, Lexicalization, TextAnnotation};
pub use comma_tree::ParseNode;

#[cfg(test)]
mod properties;
