//! Test utilities for the unsound samples.
//!
//! Provides [`RecordingMemory`], a [`RawMemory`](unsound_core::RawMemory)
//! implementation that logs every primitive call and keeps the written
//! bytes in shadow storage, so the vulnerable sequences can run inside a
//! test without corrupting the test process. [`fixtures`] holds small
//! input builders.

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod recording;

pub use recording::{MemoryEvent, RecordingMemory};
