/// Which node a navigation call failed to find
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    #[error("parent of <{name}> does not exist")]
    Parent { name: String },
    #[error("node with label {label:?} not found")]
    Label { label: String },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("node not found: {0}")]
    NodeNotFound(#[from] NotFound),
    #[error("number of times must be positive, got {count}")]
    InvalidArgument { count: i64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
