//! Stack buffer overflow: `strcpy` of the first argument into a
//! fixed `[u8; STACK_BUFFER_LEN]`.

#![allow(unsafe_code)]

use std::ffi::{CStr, CString, OsString};
use std::io::Write;
use std::ptr::NonNull;

use unsound_core::{RawMemory, SampleError, SampleKind, STACK_BUFFER_LEN};

/// Whether an input of `input_len` bytes (terminator excluded) writes past
/// the stack buffer once copied.
pub const fn overflows_stack_buffer(input_len: usize) -> bool {
    input_len >= STACK_BUFFER_LEN
}

/// Extract the input string from an argument vector.
///
/// The first item is the program name, used in the usage message when
/// the input is missing. Extra arguments are ignored.
pub fn parse_input<I>(args: I) -> Result<CString, SampleError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let program = args
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| SampleKind::StackOverflow.binary_name().to_owned());
    let input = args
        .next()
        .ok_or(SampleError::MissingArgument { program })?;
    CString::new(arg_bytes(input)?).map_err(|e| SampleError::InvalidArgument {
        reason: e.to_string(),
    })
}

#[cfg(unix)]
fn arg_bytes(arg: OsString) -> Result<Vec<u8>, SampleError> {
    use std::os::unix::ffi::OsStringExt;
    Ok(arg.into_vec())
}

#[cfg(not(unix))]
fn arg_bytes(arg: OsString) -> Result<Vec<u8>, SampleError> {
    arg.into_string()
        .map(String::into_bytes)
        .map_err(|arg| SampleError::InvalidArgument {
            reason: format!("{arg:?} is not valid unicode"),
        })
}

/// Copy `input` into a stack buffer with no length check and print it.
pub fn run(
    mem: &mut impl RawMemory,
    out: &mut dyn Write,
    input: &CStr,
) -> Result<(), SampleError> {
    let mut buffer = [0u8; STACK_BUFFER_LEN];
    let dst = NonNull::from(&mut buffer).cast::<u8>();

    // UNSOUND: `input` may be longer than `buffer`.
    unsafe { mem.copy_str(dst, input) };

    write!(out, "Input: ")?;
    unsafe { mem.write_str(dst, out)? };
    writeln!(out)?;
    Ok(())
}
