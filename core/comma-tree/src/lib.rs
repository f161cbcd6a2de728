pub mod bracket;
pub mod error;
pub mod tree;

pub use bracket::{parse_bracketed, Bracketed};
pub use error::TreeError;
pub use tree::{ParseNode, ParseTree};

impl ParseTree {
    /// Read bracket notation straight into an indexed tree.
    pub fn parse_bracketed(input: &str) -> Result<Self, TreeError> {
        let bracketed = parse_bracketed(input)?;
        Self::from_record(&bracketed.tree)
    }
}
