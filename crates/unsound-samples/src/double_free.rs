//! Double free: one block, two releases.

#![allow(unsafe_code)]

use std::io::Write;

use unsound_core::{RawMemory, SampleError};

/// Allocate `capacity` bytes, release the block, then release it again.
///
/// No allocation happens between the two releases, so the second one
/// targets memory the allocator already owns.
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
        mem.release(buffer);
        // UNSOUND: `buffer` was released on the line above.
        mem.release(buffer);
    }

    writeln!(out, "Double free performed.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unsound_core::BufferConfig;
    use unsound_test_utils::{MemoryEvent, RecordingMemory};

    #[test]
    fn releases_same_block_twice() {
        let mut mem = RecordingMemory::new();
        let mut out = Vec::new();
        run(&mut mem, &mut out, BufferConfig::DEFAULT_CAPACITY).unwrap();

        let addr = mem.events()[0].addr();
        assert_eq!(
            mem.events(),
            &[
                MemoryEvent::Allocate { addr, len: 20 },
                MemoryEvent::Release { addr },
                MemoryEvent::Release { addr },
            ]
        );
        assert_eq!(mem.releases_of(addr), 2);
        assert_eq!(out, b"Double free performed.\n");
    }

    #[test]
    fn allocation_failure_stops_before_release() {
        let mut mem = RecordingMemory::failing();
        let mut out = Vec::new();
        let err = run(&mut mem, &mut out, 20).unwrap_err();
        assert_eq!(err, SampleError::AllocationFailed { requested: 20 });
        assert!(mem.events().is_empty());
        assert!(out.is_empty());
    }
}
