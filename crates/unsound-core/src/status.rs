//! Process exit status for the sample binaries.
//!
//! [`SampleStatus`] is a `repr(u8)` enum: `Ok` = 0 for a completed run
//! (tainted or not), `PreconditionFailed` = 1 for every handled error.

use std::process::ExitCode;

use crate::error::SampleError;

/// Exit status returned by every sample binary. Values are stable.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleStatus {
    /// The sample ran to completion.
    Ok = 0,
    /// Allocation failed, an argument was missing or malformed, or the
    /// result could not be written.
    PreconditionFailed = 1,
}

impl From<&SampleError> for SampleStatus {
    fn from(e: &SampleError) -> Self {
        match e {
            SampleError::AllocationFailed { .. }
            | SampleError::MissingArgument { .. }
            | SampleError::InvalidArgument { .. }
            | SampleError::Config(_)
            | SampleError::Output { .. } => SampleStatus::PreconditionFailed,
        }
    }
}

impl From<SampleStatus> for ExitCode {
    fn from(status: SampleStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
