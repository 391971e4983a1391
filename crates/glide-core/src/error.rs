use thiserror::Error;

/// Why a set of control points was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomainFault {
    /// Fewer than two breakpoints.
    TooFewPoints { len: usize },
    /// Breakpoint at `index` is not strictly greater than the one before it.
    NotIncreasing { index: usize },
    /// Breakpoint at `index` is NaN or infinite.
    NonFinite { index: usize },
}

impl std::fmt::Display for DomainFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainFault::TooFewPoints { len } => {
                write!(f, "need at least 2 control points, got {len}")
            }
            DomainFault::NotIncreasing { index } => {
                write!(f, "breakpoint {index} does not increase")
            }
            DomainFault::NonFinite { index } => write!(f, "breakpoint {index} is not finite"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("invalid interpolation domain: {0}")]
    InvalidDomain(DomainFault),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
