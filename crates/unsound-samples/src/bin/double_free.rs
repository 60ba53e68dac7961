//! Releases a 20-byte heap block twice.

use std::process::ExitCode;

use unsound_core::{BufferConfig, SampleKind};
use unsound_samples::double_free;

fn main() -> ExitCode {
    unsound_samples::launch(SampleKind::DoubleFree, |mem, out| {
        double_free::run(mem, out, BufferConfig::DEFAULT_CAPACITY)
    })
}
