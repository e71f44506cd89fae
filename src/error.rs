use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Input file '{}' not found", path.display())]
    InputNotFound { path: PathBuf },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] yaml_rust2::EmitError),

    #[error("Realm export is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Realm export field '{field}' must be a {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn reason(&self) -> &str {
        match self {
            Error::InputNotFound { .. } => "NotFound",
            Error::Io { .. } => "IOError",
            Error::Parse { .. } => "ParseError",
            Error::Serialization(_) => "SerializationError",
            Error::Yaml(_) => "SerializationError",
            Error::MissingField(_) => "MissingField",
            Error::InvalidField { .. } => "InvalidField",
        }
    }

    pub(crate) fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::InputNotFound { path }
        } else {
            Error::Io { path, source }
        }
    }
}
