use thiserror::Error;

/// Failure to pull a typed input out of an [`Arguments`](crate::args::Arguments) bundle.
#[derive(Error, Debug)]
pub enum ArgumentError {
    #[error("missing positional argument at index {index}")]
    MissingPositional { index: usize },

    #[error("missing named argument `{name}`")]
    MissingNamed { name: String },

    #[error("argument {what} has an unexpected type: {source}")]
    InvalidType {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ArgumentError {
    pub fn missing_positional(index: usize) -> Self {
        Self::MissingPositional { index }
    }

    pub fn missing_named<S: ToString>(name: S) -> Self {
        Self::MissingNamed { name: name.to_string() }
    }

    pub fn invalid_type<S: ToString>(what: S, source: serde_json::Error) -> Self {
        Self::InvalidType { what: what.to_string(), source }
    }
}
