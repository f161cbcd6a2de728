#![no_std] // Records stay usable from embedded and wasm hosts

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod span;
pub mod model;
pub mod annotation;
pub mod config;
pub mod corpus;

// Re-export core types for convenience
pub use ids::NodeId;
pub use span::Span;
pub use model::*;
pub use annotation::{TextAnnotation, ViewName};
pub use config::{CommaConfig, Lexicalization};
pub use corpus::{CommaRecord, Corpus, SentenceRecord};
