use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    InvalidSlotId(String),
    UnsupportedFileType(String),
    FileTooLarge { size: u64, limit: u64 },
    MalformedDataUri(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSlotId(value) => write!(f, "slot id must not be empty, got {value:?}"),
            Self::UnsupportedFileType(name) => {
                write!(f, "file {name:?} is not a supported photo type")
            }
            Self::FileTooLarge { size, limit } => {
                write!(f, "file is {size} bytes, limit is {limit}")
            }
            Self::MalformedDataUri(reason) => write!(f, "malformed image data uri: {reason}"),
        }
    }
}

impl std::error::Error for DomainError {}
