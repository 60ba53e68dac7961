//! Deliberately unsound programs, one per classic memory-safety bug.
//!
//! Each module holds one demonstration routine written against
//! [`RawMemory`](unsound_core::RawMemory) and an output sink. The binaries
//! in `src/bin/` run those routines against
//! [`LibcMemory`](unsound_core::LibcMemory) through [`launch`], which
//! reproduces the undefined behaviour for an external analyzer to find.
//! Tests run the same routines against a recording implementation.
//!
//! | Module               | Fault                                    |
//! |----------------------|------------------------------------------|
//! | [`double_free`]      | second `free` of the same block          |
//! | [`heap_overflow`]    | `memset` 10 bytes past a 20-byte block   |
//! | [`stack_overflow`]   | `strcpy` of argv\[1\] into `[u8; 20]`    |
//! | [`use_after_free`]   | read through a released block            |
//! | [`use_after_return`] | read through a dead stack frame          |
//! | [`memory_leak`]      | block never released                     |
//!
//! Nothing here is sound. Do not reuse it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod double_free;
pub mod heap_overflow;
pub mod memory_leak;
pub mod stack_overflow;
pub mod use_after_free;
pub mod use_after_return;

use std::io::{self, Write};
use std::process::ExitCode;

use unsound_core::{LibcMemory, SampleError, SampleKind, SampleStatus};

/// Entry point shared by the sample binaries.
///
/// Initialises logging, runs `body` against the C library primitives and
/// locked stdout, and maps the outcome to an exit code. Handled errors are
/// printed to stderr.
pub fn launch<F>(kind: SampleKind, body: F) -> ExitCode
where
    F: FnOnce(&mut LibcMemory, &mut dyn Write) -> Result<(), SampleError>,
{
    env_logger::init();
    log::debug!("running {} sample ({kind})", kind.binary_name());

    let mut mem = LibcMemory::new();
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let out: &mut dyn Write = &mut lock;
    let result = body(&mut mem, &mut *out).and_then(|()| out.flush().map_err(SampleError::from));

    match result {
        Ok(()) => {
            log::debug!("{} sample completed", kind.binary_name());
            SampleStatus::Ok.into()
        }
        Err(e) => {
            log::info!("{} sample stopped: {e}", kind.binary_name());
            eprintln!("{e}");
            SampleStatus::from(&e).into()
        }
    }
}
