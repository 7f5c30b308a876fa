use core::fmt;

/// An error returned when an exact result does not fit in
/// a `u64`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OverflowError {
    kind: ErrorKind,
}

impl OverflowError {
    pub(crate) const fn pow() -> Self {
        Self {
            kind: ErrorKind::Pow,
        }
    }

    pub(crate) const fn binomial() -> Self {
        Self {
            kind: ErrorKind::Binomial,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OverflowError {}

impl fmt::Display for OverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ErrorKind {
    Pow,
    Binomial,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pow => write!(f, "integer power overflows u64"),
            Self::Binomial => write!(f, "binomial coefficient overflows u64"),
        }
    }
}
