//! Catalog of the samples and the analyzer settings each one pairs with.
//!
//! Purely descriptive: an external harness can use it to find the binary
//! for a bug class, the input to feed it and the `ASAN_OPTIONS` to run it
//! under.

use std::fmt;

/// One deliberately unsound sample program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleKind {
    /// Releases the same heap block twice.
    DoubleFree,
    /// Writes past the end of a heap block.
    HeapOverflow,
    /// Copies an unbounded argument into a fixed stack buffer.
    StackOverflow,
    /// Reads a heap block after releasing it.
    UseAfterFree,
    /// Reads a stack buffer after its frame has returned.
    UseAfterReturn,
    /// Never releases a heap block.
    MemoryLeak,
}

impl SampleKind {
    /// All samples, in catalog order.
    pub const ALL: [SampleKind; 6] = [
        SampleKind::DoubleFree,
        SampleKind::HeapOverflow,
        SampleKind::StackOverflow,
        SampleKind::UseAfterFree,
        SampleKind::UseAfterReturn,
        SampleKind::MemoryLeak,
    ];

    /// Length of the analyzer input for [`SampleKind::StackOverflow`].
    pub const STACK_OVERFLOW_INPUT_LEN: usize = 100;

    /// Name of the binary target.
    pub fn binary_name(self) -> &'static str {
        match self {
            Self::DoubleFree => "double_free",
            Self::HeapOverflow => "heap_overflow",
            Self::StackOverflow => "stack_overflow",
            Self::UseAfterFree => "use_after_free",
            Self::UseAfterReturn => "use_after_return",
            Self::MemoryLeak => "memory_leak",
        }
    }

    /// Human-readable name of the bug class.
    pub fn checker_name(self) -> &'static str {
        match self {
            Self::DoubleFree => "Double Free",
            Self::HeapOverflow => "Heap Buffer Overflow",
            Self::StackOverflow => "Stack Buffer Overflow",
            Self::UseAfterFree => "Use After Free",
            Self::UseAfterReturn => "Use After Return",
            Self::MemoryLeak => "Memory Leak",
        }
    }

    /// Whether the binary requires a positional input argument.
    pub fn expects_input(self) -> bool {
        matches!(self, Self::StackOverflow)
    }

    /// Input an analyzer should pass to trigger the bug. Empty when the
    /// sample takes no input.
    pub fn analyzer_input(self) -> String {
        match self {
            Self::StackOverflow => "A".repeat(Self::STACK_OVERFLOW_INPUT_LEN),
            _ => String::new(),
        }
    }

    /// `ASAN_OPTIONS` value to run the binary under.
    pub fn sanitizer_options(self) -> &'static str {
        match self {
            Self::HeapOverflow | Self::StackOverflow => "detect_stack_use_after_return=1",
            Self::UseAfterFree => "detect_stack_use_after_return=1,halt_on_error=0",
            Self::DoubleFree | Self::UseAfterReturn | Self::MemoryLeak => {
                "halt_on_error=0,detect_stack_use_after_return=1,detect_leaks=1"
            }
        }
    }

    /// Look a sample up by its binary name.
    pub fn from_binary_name(name: &str) -> Option<SampleKind> {
        Self::ALL.into_iter().find(|k| k.binary_name() == name)
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.checker_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STACK_BUFFER_LEN;
    use std::collections::HashSet;

    #[test]
    fn binary_names_round_trip() {
        for kind in SampleKind::ALL {
            assert_eq!(SampleKind::from_binary_name(kind.binary_name()), Some(kind));
        }
        assert_eq!(SampleKind::from_binary_name("segfault"), None);
    }

    #[test]
    fn binary_names_are_unique() {
        let names: HashSet<_> = SampleKind::ALL.iter().map(|k| k.binary_name()).collect();
        assert_eq!(names.len(), SampleKind::ALL.len());
    }

    #[test]
    fn only_stack_overflow_takes_input() {
        for kind in SampleKind::ALL {
            assert_eq!(kind.expects_input(), kind == SampleKind::StackOverflow);
            assert_eq!(kind.analyzer_input().is_empty(), !kind.expects_input());
        }
    }

    #[test]
    fn analyzer_input_overflows_stack_buffer() {
        let input = SampleKind::StackOverflow.analyzer_input();
        assert!(input.len() >= STACK_BUFFER_LEN);
        assert!(input.bytes().all(|b| b == b'A'));
    }

    #[test]
    fn leak_detection_enabled_where_needed() {
        assert!(SampleKind::MemoryLeak
            .sanitizer_options()
            .contains("detect_leaks=1"));
        assert!(SampleKind::UseAfterReturn
            .sanitizer_options()
            .contains("detect_stack_use_after_return=1"));
    }

    #[test]
    fn display_uses_checker_name() {
        assert_eq!(SampleKind::HeapOverflow.to_string(), "Heap Buffer Overflow");
    }
}
