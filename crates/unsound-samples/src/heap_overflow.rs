//! Heap buffer overflow: `capacity + overflow_margin` bytes into a
//! `capacity`-byte block.

#![allow(unsafe_code)]

use std::io::Write;

use unsound_core::{BufferConfig, RawMemory, SampleError};

/// Byte the overflow writes.
pub const FILL_BYTE: u8 = b'B';

/// Allocate `config.capacity` bytes and fill `config.overrun_len()` of them.
///
/// After the overrun a NUL is stored at the last in-bounds index and the
/// contents are printed. The block is released once, even if printing fails.
pub fn run(
    mem: &mut impl RawMemory,
    out: &mut dyn Write,
    config: &BufferConfig,
) -> Result<(), SampleError> {
    config.validate()?;
    let written = config.overrun_len()?;
    let buffer = mem
        .allocate(config.capacity)
        .ok_or(SampleError::AllocationFailed {
            requested: config.capacity,
        })?;

    unsafe {
        // UNSOUND: writes `overflow_margin` bytes past the end of `buffer`.
        mem.fill(buffer, FILL_BYTE, written);
        mem.store(buffer, config.capacity - 1, 0);
    }

    let printed = write!(out, "Buffer: ")
        .and_then(|()| unsafe { mem.write_str(buffer, &mut *out) })
        .and_then(|_| writeln!(out));
    unsafe { mem.release(buffer) };
    printed?;
    Ok(())
}
