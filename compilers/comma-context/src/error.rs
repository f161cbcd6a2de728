use comma_protocol::ViewName;
use comma_tree::TreeError;
use thiserror::Error;

/// Annotation data that does not fit the sentence it was attached to.
///
/// Every variant means the input is inconsistent; callers are expected to
/// stop the run rather than skip the comma.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommaError {
    #[error("comma position {position} is outside the {len}-token sentence")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("annotation has no {0} view")]
    MissingView(ViewName),

    #[error("{view} view has {len} labels but token {index} was requested")]
    ViewTooShort { view: ViewName, index: usize, len: usize },

    #[error("no parse tree node covers the comma at token {position}")]
    CommaNotInTree { position: usize },

    #[error("invalid parse tree: {0}")]
    Tree(#[from] TreeError),
}

pub type Result<T> = std::result::Result<T, CommaError>;
