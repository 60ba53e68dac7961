//! Copies the first argument into a 20-byte stack buffer with `strcpy`.
//!
//! Usage: `stack_overflow <input>`. Inputs of 20 bytes or more overflow.

use std::env;
use std::process::ExitCode;

use unsound_core::SampleKind;
use unsound_samples::stack_overflow;

fn main() -> ExitCode {
    unsound_samples::launch(SampleKind::StackOverflow, |mem, out| {
        let input = stack_overflow::parse_input(env::args_os())?;
        stack_overflow::run(mem, out, &input)
    })
}
