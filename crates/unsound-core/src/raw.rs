//! The raw memory escape hatch.
//!
//! Every sample performs its vulnerable sequence through [`RawMemory`]
//! rather than through safe Rust, so that the exact sequence of C-level
//! primitives reaches the analyzer. [`LibcMemory`] forwards each call to
//! the C library; test code substitutes a recording implementation.
//!
//! None of the `unsafe` methods check liveness or bounds. That is the
//! behaviour under test.

#![allow(unsafe_code)]

use std::ffi::CStr;
use std::io::{self, Write};
use std::ptr::NonNull;

/// C-level memory primitives with no liveness or bounds checking.
pub trait RawMemory {
    /// Allocate `len` bytes (`malloc`). Returns `None` if the allocator
    /// returns null.
    fn allocate(&mut self, len: usize) -> Option<NonNull<u8>>;

    /// Return a block to the allocator (`free`).
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`allocate`](Self::allocate) on the same
    /// memory and must not have been released already.
    unsafe fn release(&mut self, ptr: NonNull<u8>);

    /// Set `count` bytes starting at `dst` to `byte` (`memset`).
    ///
    /// # Safety
    ///
    /// `dst..dst + count` must lie inside one live allocation.
    unsafe fn fill(&mut self, dst: NonNull<u8>, byte: u8, count: usize);

    /// Write a single byte at `dst + offset`.
    ///
    /// # Safety
    ///
    /// `dst + offset` must lie inside a live allocation.
    unsafe fn store(&mut self, dst: NonNull<u8>, offset: usize, byte: u8);

    /// Copy `src` including its NUL terminator to `dst` (`strcpy`).
    ///
    /// # Safety
    ///
    /// `dst` must be live and have room for `src.to_bytes_with_nul().len()`
    /// bytes. Nothing here verifies that.
    unsafe fn copy_str(&mut self, dst: NonNull<u8>, src: &CStr);

    /// Read the NUL-terminated string at `src` straight into `out`.
    ///
    /// No intermediate buffer is allocated, so nothing can land in a block
    /// that was released just before the read. Returns the number of bytes
    /// read, terminator excluded.
    ///
    /// # Safety
    ///
    /// `src` must point to a live, NUL-terminated byte sequence.
    unsafe fn write_str(&mut self, src: NonNull<u8>, out: &mut dyn Write) -> io::Result<usize>;

    /// Mark the stack region `ptr..ptr + len` as belonging to a frame that
    /// is about to return.
    fn scope_ended(&mut self, ptr: NonNull<u8>, len: usize) {
        let _ = (ptr, len);
    }
}

/// [`RawMemory`] backed by the C library allocator and string routines.
#[derive(Clone, Copy, Debug, Default)]
pub struct LibcMemory;

impl LibcMemory {
    /// Create a handle to the C library primitives.
    pub fn new() -> Self {
        LibcMemory
    }
}

impl RawMemory for LibcMemory {
    fn allocate(&mut self, len: usize) -> Option<NonNull<u8>> {
        // SAFETY: malloc has no preconditions; a null result maps to None.
        NonNull::new(unsafe { libc::malloc(len) }.cast::<u8>())
    }

    unsafe fn release(&mut self, ptr: NonNull<u8>) {
        unsafe { libc::free(ptr.as_ptr().cast::<libc::c_void>()) };
    }

    unsafe fn fill(&mut self, dst: NonNull<u8>, byte: u8, count: usize) {
        unsafe {
            libc::memset(
                dst.as_ptr().cast::<libc::c_void>(),
                libc::c_int::from(byte),
                count,
            )
        };
    }

    unsafe fn store(&mut self, dst: NonNull<u8>, offset: usize, byte: u8) {
        unsafe { dst.as_ptr().add(offset).write(byte) };
    }

    unsafe fn copy_str(&mut self, dst: NonNull<u8>, src: &CStr) {
        unsafe { libc::strcpy(dst.as_ptr().cast::<libc::c_char>(), src.as_ptr()) };
    }

    unsafe fn write_str(&mut self, src: NonNull<u8>, out: &mut dyn Write) -> io::Result<usize> {
        let bytes = unsafe { CStr::from_ptr(src.as_ptr().cast::<libc::c_char>()) }.to_bytes();
        out.write_all(bytes)?;
        Ok(bytes.len())
    }
}
