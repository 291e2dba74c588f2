use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPathSegment { field: &'static str, input: String },
    InvalidEmail { input: String },
    InvalidFlag { field: &'static str, input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPathSegment { field, input } => {
                write!(f, "{field} is not a valid path segment: {input}")
            }
            Self::InvalidEmail { input } => write!(f, "invalid email address: {input}"),
            Self::InvalidFlag { field, input } => {
                write!(f, "{field} is not a boolean flag: {input}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
