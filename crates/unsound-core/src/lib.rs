//! Core types for the unsound memory-safety fixtures.
//!
//! This is the leaf crate of the workspace. It defines the raw memory
//! escape hatch every sample is written against, the error and exit
//! status types, buffer configuration and the sample catalog.
//!
//! # Architecture
//!
//! ```text
//! unsound-samples (one routine + one binary per bug class)
//! ├── RawMemory (trait)
//! │   ├── LibcMemory        — real malloc/free/memset/strcpy, used by binaries
//! │   └── RecordingMemory   — shadow memory + event log, used by tests
//! ├── BufferConfig          — heap block size and overflow margin
//! ├── SampleError → SampleStatus → ExitCode
//! └── SampleKind            — catalog metadata for external analyzers
//! ```
//!
//! `unsafe` is denied crate-wide except in `raw.rs`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod raw;
pub mod status;

pub use catalog::SampleKind;
pub use config::{BufferConfig, STACK_BUFFER_LEN};
pub use error::{ConfigError, SampleError};
pub use raw::{LibcMemory, RawMemory};
pub use status::SampleStatus;
