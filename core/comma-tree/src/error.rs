use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("parse tree has no nodes")]
    Empty,

    #[error("root {root} is outside the {len} tree nodes")]
    RootOutOfRange { root: u32, len: usize },

    #[error("node {parent} lists child {child}, which does not exist")]
    DanglingChild { parent: u32, child: u32 },

    #[error("node {child} has more than one parent")]
    MultipleParents { child: u32 },

    #[error("root node {0} is listed as a child")]
    RootHasParent(u32),

    #[error("parse tree contains a cycle")]
    Cycle,

    #[error("node {0} is not reachable from the root")]
    Detached(u32),

    #[error("children of node {parent} are not ordered left to right")]
    SiblingsOutOfOrder { parent: u32 },

    #[error("span of node {child} is not inside its parent {parent}")]
    ChildOutsideParent { parent: u32, child: u32 },

    #[error("bracket syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },
}
