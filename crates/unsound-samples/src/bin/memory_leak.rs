//! Allocates a 20-byte heap block and never releases it.

use std::process::ExitCode;

use unsound_core::{BufferConfig, SampleKind};
use unsound_samples::memory_leak;

fn main() -> ExitCode {
    unsound_samples::launch(SampleKind::MemoryLeak, |mem, out| {
        memory_leak::run(mem, out, BufferConfig::DEFAULT_CAPACITY)
    })
}
