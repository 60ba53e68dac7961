//! Use after free: read a heap block through its handle after release.

#![allow(unsafe_code)]

use std::ffi::CStr;
use std::io::Write;

use unsound_core::{RawMemory, SampleError};

/// Contents written before the block is released.
pub const SENSITIVE_DATA: &CStr = c"Sensitive Data";

/// Allocate `capacity` bytes, copy [`SENSITIVE_DATA`] in, release the
/// block and print what the released handle still points at.
///
/// Nothing is allocated between the release and the read.
pub fn run(
    mem: &mut impl RawMemory,
    out: &mut dyn Write,
    capacity: usize,
) -> Result<(), SampleError> {
    let buffer = mem
        .allocate(capacity)
        .ok_or(SampleError::AllocationFailed {
            requested: capacity,
        })?;

    unsafe {
        mem.copy_str(buffer, SENSITIVE_DATA);
        mem.release(buffer);
    }

    write!(out, "Buffer: ")?;
    // UNSOUND: `buffer` was released above.
    unsafe { mem.write_str(buffer, out)? };
    writeln!(out)?;
    Ok(())
}
