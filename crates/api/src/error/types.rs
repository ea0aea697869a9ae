//! Error type definitions for key-import operations

#[cfg(feature = "std")]
use std::string::String;

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

/// Primary error type for eckey operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input bytes match none of the supported wire encodings, or the
    /// decoded value violates an encoding-level rule (zero scalar, point
    /// off the curve)
    InvalidEncoding {
        /// Operation that rejected the input
        context: &'static str,
        #[cfg(feature = "std")]
        /// Additional detail about the rejection
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error (malformed curve descriptor constants)
    InvalidParameter {
        /// Context where the parameter error occurred
        context: &'static str,
        #[cfg(feature = "std")]
        /// Additional detail about the invalid parameter
        message: String,
    },

    /// Failure reported by the big-number arithmetic layer, passed through
    /// without reinterpretation
    ArithmeticError {
        /// Arithmetic operation that failed
        context: &'static str,
        #[cfg(feature = "std")]
        /// Additional detail from the arithmetic layer
        message: String,
    },

    /// Other error
    Other {
        /// Context of the failure
        context: &'static str,
        #[cfg(feature = "std")]
        /// Additional detail
        message: String,
    },
}

/// Result type for eckey operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidEncoding { .. } => Self::InvalidEncoding {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::ArithmeticError { .. } => Self::ArithmeticError {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Error::InvalidEncoding { context, message } => {
                write!(f, "Invalid encoding in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::InvalidEncoding { context } => {
                write!(f, "Invalid encoding in {}", context)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::InvalidParameter { context } => {
                write!(f, "Invalid parameter in {}", context)
            }
            #[cfg(feature = "std")]
            Error::ArithmeticError { context, message } => {
                write!(f, "Arithmetic failure in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::ArithmeticError { context } => {
                write!(f, "Arithmetic failure in {}", context)
            }
            #[cfg(feature = "std")]
            Error::Other { context, message } => {
                write!(f, "Error in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::Other { context } => {
                write!(f, "Error in {}", context)
            }
        }
    }
}
