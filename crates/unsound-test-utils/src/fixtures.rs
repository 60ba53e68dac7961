//! Input builders shared by the sample tests.

use std::ffi::{CString, OsString};

/// A C string of `len` copies of `A`.
pub fn input_of_len(len: usize) -> CString {
    CString::new(vec![b'A'; len]).expect("'A' is never NUL")
}

/// An argument vector as `std::env::args_os()` would yield it.
pub fn argv(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}
