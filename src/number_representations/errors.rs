use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    TooWide { bits: u64, width: usize },
}

impl Display for PatternError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::TooWide { bits, width } => write!(
                f,
                "Pattern error: {:#x} does not fit in {} bits",
                bits, width
            ),
        }
    }
}

impl std::error::Error for PatternError {}
