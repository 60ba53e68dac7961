//! Event-logging [`RawMemory`] over shadow storage.
//!
//! Allocations are backed by real boxed slices that live until the
//! recorder is dropped, so addresses are unique and never reused while
//! a test inspects them. Writes never touch those slices; they go to a
//! per-address shadow buffer that grows as far as the write reaches.
//!
//! `RawMemory` declares its pointer primitives as `unsafe fn`, so
//! implementing them needs this module's `unsafe_code` allowance. The
//! bodies never dereference the pointers they are given; they only record
//! their addresses.

#![allow(unsafe_code)]

use std::ffi::CStr;
use std::io::{self, Write};
use std::ptr::NonNull;

use indexmap::IndexMap;
use smallvec::SmallVec;
use unsound_core::RawMemory;

/// One primitive call observed by [`RecordingMemory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryEvent {
    Allocate { addr: usize, len: usize },
    Release { addr: usize },
    Fill { addr: usize, byte: u8, count: usize },
    Store { addr: usize, offset: usize, byte: u8 },
    /// `len` includes the NUL terminator.
    CopyStr { addr: usize, len: usize },
    /// `len` excludes the NUL terminator.
    Read { addr: usize, len: usize },
    ScopeEnded { addr: usize, len: usize },
}

impl MemoryEvent {
    /// Address the event targets.
    pub fn addr(&self) -> usize {
        match *self {
            Self::Allocate { addr, .. }
            | Self::Release { addr }
            | Self::Fill { addr, .. }
            | Self::Store { addr, .. }
            | Self::CopyStr { addr, .. }
            | Self::Read { addr, .. }
            | Self::ScopeEnded { addr, .. } => addr,
        }
    }
}

/// Records primitive calls instead of performing them.
#[derive(Default)]
pub struct RecordingMemory {
    events: SmallVec<[MemoryEvent; 8]>,
    blocks: IndexMap<usize, Box<[u8]>>,
    shadow: IndexMap<usize, Vec<u8>>,
    fail_allocations: bool,
}

impl RecordingMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose every allocation fails.
    pub fn failing() -> Self {
        Self {
            fail_allocations: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> &[MemoryEvent] {
        &self.events
    }

    /// Requested size of the block at `addr`, if it was allocated here.
    pub fn capacity_of(&self, addr: usize) -> Option<usize> {
        self.events.iter().find_map(|e| match *e {
            MemoryEvent::Allocate { addr: a, len } if a == addr => Some(len),
            _ => None,
        })
    }

    /// Number of times `addr` was released.
    pub fn releases_of(&self, addr: usize) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MemoryEvent::Release { addr: a } if *a == addr))
            .count()
    }

    /// Addresses of blocks allocated but never released, in allocation order.
    pub fn leaked(&self) -> Vec<usize> {
        self.blocks
            .keys()
            .copied()
            .filter(|&addr| self.releases_of(addr) == 0)
            .collect()
    }

    /// Bytes last written at `addr`, including anything past the block end.
    pub fn shadow(&self, addr: usize) -> Option<&[u8]> {
        self.shadow.get(&addr).map(|v| v.as_slice())
    }

    /// Position of the first event matching `pred`.
    pub fn position(&self, pred: impl Fn(&MemoryEvent) -> bool) -> Option<usize> {
        self.events.iter().position(pred)
    }

    fn shadow_mut(&mut self, addr: usize, min_len: usize) -> &mut Vec<u8> {
        let bytes = self.shadow.entry(addr).or_default();
        if bytes.len() < min_len {
            bytes.resize(min_len, 0);
        }
        bytes
    }
}

fn addr_of(ptr: NonNull<u8>) -> usize {
    ptr.as_ptr() as usize
}

impl RawMemory for RecordingMemory {
    fn allocate(&mut self, len: usize) -> Option<NonNull<u8>> {
        if self.fail_allocations {
            return None;
        }
        let mut block = vec![0u8; len.max(1)].into_boxed_slice();
        let ptr = NonNull::new(block.as_mut_ptr())?;
        let addr = addr_of(ptr);
        self.blocks.insert(addr, block);
        self.shadow.insert(addr, vec![0; len]);
        self.events.push(MemoryEvent::Allocate { addr, len });
        Some(ptr)
    }

    unsafe fn release(&mut self, ptr: NonNull<u8>) {
        self.events.push(MemoryEvent::Release {
            addr: addr_of(ptr),
        });
    }

    unsafe fn fill(&mut self, dst: NonNull<u8>, byte: u8, count: usize) {
        let addr = addr_of(dst);
        self.shadow_mut(addr, count)[..count].fill(byte);
        self.events.push(MemoryEvent::Fill { addr, byte, count });
    }

    unsafe fn store(&mut self, dst: NonNull<u8>, offset: usize, byte: u8) {
        let addr = addr_of(dst);
        self.shadow_mut(addr, offset + 1)[offset] = byte;
        self.events.push(MemoryEvent::Store { addr, offset, byte });
    }

    unsafe fn copy_str(&mut self, dst: NonNull<u8>, src: &CStr) {
        let addr = addr_of(dst);
        let bytes = src.to_bytes_with_nul();
        self.shadow_mut(addr, bytes.len())[..bytes.len()].copy_from_slice(bytes);
        self.events.push(MemoryEvent::CopyStr {
            addr,
            len: bytes.len(),
        });
    }

    unsafe fn write_str(&mut self, src: NonNull<u8>, out: &mut dyn Write) -> io::Result<usize> {
        let addr = addr_of(src);
        let len = match self.shadow.get(&addr) {
            Some(bytes) => {
                let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
                out.write_all(&bytes[..end])?;
                end
            }
            None => 0,
        };
        self.events.push(MemoryEvent::Read { addr, len });
        Ok(len)
    }

    fn scope_ended(&mut self, ptr: NonNull<u8>, len: usize) {
        self.events.push(MemoryEvent::ScopeEnded {
            addr: addr_of(ptr),
            len,
        });
    }
}
