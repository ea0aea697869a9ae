//! Error handling for arithmetic and key-import operations

use alloc::borrow::Cow;
use core::fmt;

use eckey_api::Error as ApiError;

/// The error type for arithmetic and key-import operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Malformed wire encoding (unknown tag, mismatched layout, values that
    /// decode but violate an encoding-level rule)
    Encoding {
        /// Operation that rejected the input
        context: &'static str,
        /// Additional details about the rejection
        details: &'static str,
    },

    /// Failure reported by the big-number layer. Callers pass these through
    /// verbatim; they are never reinterpreted as encoding errors.
    Arithmetic {
        /// Arithmetic operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for arithmetic and key-import operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
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
            Error::Encoding { context, details } => {
                write!(f, "Invalid encoding in {}: {}", context, details)
            }
            Error::Arithmetic { operation, details } => {
                write!(f, "Arithmetic failure in {}: {}", operation, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => ApiError::InvalidParameter {
                context: "curve parameter",
                #[cfg(feature = "std")]
                message: alloc::format!("{}: {}", name, reason),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => ApiError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Encoding { context, details } => ApiError::InvalidEncoding {
                context,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
            Error::Arithmetic { operation, details } => ApiError::ArithmeticError {
                context: operation,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
            Error::Other(msg) => ApiError::Other {
                context: "algorithms",
                #[cfg(feature = "std")]
                message: msg.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
