//! Reads a local buffer through a pointer returned from its dead frame.

use std::process::ExitCode;

use unsound_core::SampleKind;
use unsound_samples::use_after_return;

fn main() -> ExitCode {
    unsound_samples::launch(SampleKind::UseAfterReturn, |mem, out| {
        use_after_return::run(mem, out)
    })
}
