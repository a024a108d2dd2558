use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_size(name: impl Into<String>, size: i64) -> Error {
        Error(
            ErrorKind::InvalidSize {
                name: name.into(),
                size,
            }
            .into(),
        )
    }

    pub fn is_invalid_size(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidSize { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid size {size} for resource '{name}': size must be non-negative and fit in memory")]
    InvalidSize { name: String, size: i64 },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
