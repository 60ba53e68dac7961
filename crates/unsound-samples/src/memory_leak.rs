//! Memory leak: a heap block that is never released.

#![allow(unsafe_code)]

use std::ffi::CStr;
use std::io::Write;

use unsound_core::{RawMemory, SampleError};

/// Contents of the leaked block.
pub const LEAKED_DATA: &CStr = c"Leaked Data";

/// Allocate `capacity` bytes, copy [`LEAKED_DATA`] in, print it and drop
/// the only handle without releasing the block.
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

    unsafe { mem.copy_str(buffer, LEAKED_DATA) };

    write!(out, "Buffer: ")?;
    unsafe { mem.write_str(buffer, out)? };
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unsound_test_utils::{MemoryEvent, RecordingMemory};

    #[test]
    fn block_is_never_released() {
        let mut mem = RecordingMemory::new();
        let mut out = Vec::new();
        run(&mut mem, &mut out, 20).unwrap();

        let addr = mem.events()[0].addr();
        assert_eq!(mem.leaked(), vec![addr]);
        assert!(!mem
            .events()
            .iter()
            .any(|e| matches!(e, MemoryEvent::Release { .. })));
        assert_eq!(out, b"Buffer: Leaked Data\n");
    }

    #[test]
    fn allocation_failure_reported() {
        let mut mem = RecordingMemory::failing();
        let err = run(&mut mem, &mut Vec::<u8>::new(), 20).unwrap_err();
        assert_eq!(err, SampleError::AllocationFailed { requested: 20 });
    }
}
