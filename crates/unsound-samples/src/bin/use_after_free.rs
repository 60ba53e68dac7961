//! Reads a 20-byte heap block after releasing it.

use std::process::ExitCode;

use unsound_core::{BufferConfig, SampleKind};
use unsound_samples::use_after_free;

fn main() -> ExitCode {
    unsound_samples::launch(SampleKind::UseAfterFree, |mem, out| {
        use_after_free::run(mem, out, BufferConfig::DEFAULT_CAPACITY)
    })
}
