//! Error types for the unsound fixtures.
//!
//! Only the preconditions are errors: allocation failure, a missing or
//! malformed argument, an invalid buffer configuration and failure to
//! write the result. The injected memory faults are never reported here.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors detected by [`BufferConfig::validate()`](crate::BufferConfig::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The heap block would be zero bytes long.
    ZeroCapacity,
    /// The overflow margin is zero, so the write would stay in bounds.
    NoOverrun,
    /// `capacity + overflow_margin` does not fit in `usize`.
    SizeOverflow {
        /// Configured capacity.
        capacity: usize,
        /// Configured overflow margin.
        overflow_margin: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "buffer capacity must be at least 1 byte"),
            Self::NoOverrun => write!(f, "overflow margin must be at least 1 byte"),
            Self::SizeOverflow {
                capacity,
                overflow_margin,
            } => write!(
                f,
                "capacity {capacity} plus overflow margin {overflow_margin} overflows usize"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Errors that stop a sample before (or instead of) its vulnerable sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SampleError {
    /// The allocator returned null.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
    /// A required positional argument was not supplied.
    MissingArgument {
        /// Program name as invoked (`argv[0]`).
        program: String,
    },
    /// The supplied argument cannot be passed to a C string primitive.
    InvalidArgument {
        /// Why the argument was rejected.
        reason: String,
    },
    /// The buffer configuration failed validation.
    Config(ConfigError),
    /// Writing the result to the output sink failed.
    Output {
        /// Kind of the underlying I/O error.
        kind: io::ErrorKind,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "allocation of {requested} bytes failed")
            }
            Self::MissingArgument { program } => write!(f, "Usage: {program} <input>"),
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Output { kind } => write!(f, "failed to write output: {kind}"),
        }
    }
}

impl Error for SampleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SampleError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for SampleError {
    fn from(e: io::Error) -> Self {
        Self::Output { kind: e.kind() }
    }
}
