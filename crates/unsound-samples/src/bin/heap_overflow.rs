//! Writes 30 bytes into a 20-byte heap block.

use std::process::ExitCode;

use unsound_core::{BufferConfig, SampleKind};
use unsound_samples::heap_overflow;

fn main() -> ExitCode {
    unsound_samples::launch(SampleKind::HeapOverflow, |mem, out| {
        heap_overflow::run(mem, out, &BufferConfig::default())
    })
}
