//! Buffer sizing for the samples.

use crate::error::ConfigError;

/// Size of the fixed stack buffer in the stack-overflow and
/// use-after-return samples, NUL terminator included.
pub const STACK_BUFFER_LEN: usize = 20;

/// Sizing of the heap block used by the heap samples.
///
/// Validated before use; all values are plain data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferConfig {
    /// Bytes requested from the allocator.
    ///
    /// Default: 20.
    pub capacity: usize,

    /// How many bytes past the end of the block the heap overflow writes.
    ///
    /// Default: 10, for 30 bytes written into a 20-byte block.
    pub overflow_margin: usize,
}

impl BufferConfig {
    /// Default heap block size in bytes.
    pub const DEFAULT_CAPACITY: usize = 20;

    /// Default overrun past the end of the block in bytes.
    pub const DEFAULT_OVERFLOW_MARGIN: usize = 10;

    /// Create a config with the given capacity and overflow margin.
    pub fn new(capacity: usize, overflow_margin: usize) -> Self {
        Self {
            capacity,
            overflow_margin,
        }
    }

    /// Check the invariants the heap samples rely on.
    ///
    /// The capacity must be non-zero (the overflow stores a NUL at
    /// `capacity - 1`), the margin must be non-zero so the write really
    /// leaves the block, and their sum must be representable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.overflow_margin == 0 {
            return Err(ConfigError::NoOverrun);
        }
        self.overrun_len().map(|_| ())
    }

    /// Total number of bytes the heap overflow writes.
    pub fn overrun_len(&self) -> Result<usize, ConfigError> {
        self.capacity
            .checked_add(self.overflow_margin)
            .ok_or(ConfigError::SizeOverflow {
                capacity: self.capacity,
                overflow_margin: self.overflow_margin,
            })
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY, Self::DEFAULT_OVERFLOW_MARGIN)
    }
}
