//! Use after return: dereference the address of a local whose frame is gone.

#![allow(unsafe_code)]

use std::ffi::CStr;
use std::io::Write;
use std::ptr::NonNull;

use unsound_core::{RawMemory, SampleError, STACK_BUFFER_LEN};

/// Contents of the helper's local buffer.
pub const LOCAL_DATA: &CStr = c"Local Data";

/// Fill a local `[u8; STACK_BUFFER_LEN]` and return its address.
///
/// The returned pointer dangles as soon as this function returns. Kept
/// out of line so the local lives in a frame of its own.
#[inline(never)]
pub fn local_buffer(mem: &mut impl RawMemory) -> NonNull<u8> {
    let mut local = [0u8; STACK_BUFFER_LEN];
    let ptr = NonNull::from(&mut local).cast::<u8>();
    unsafe { mem.copy_str(ptr, LOCAL_DATA) };
    mem.scope_ended(ptr, STACK_BUFFER_LEN);
    ptr
}

/// Print the string behind the pointer [`local_buffer`] returned.
pub fn run(mem: &mut impl RawMemory, out: &mut dyn Write) -> Result<(), SampleError> {
    let ptr = local_buffer(mem);

    write!(out, "Returned Buffer: ")?;
    // UNSOUND: `ptr` points into the returned frame of `local_buffer`.
    unsafe { mem.write_str(ptr, out)? };
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unsound_test_utils::{MemoryEvent, RecordingMemory};

    #[test]
    fn read_targets_dead_local() {
        let mut mem = RecordingMemory::new();
        let mut out = Vec::new();
        run(&mut mem, &mut out).unwrap();

        let [copy, ended, read] = mem.events() else {
            panic!("unexpected events {:?}", mem.events());
        };
        let addr = copy.addr();
        assert_eq!(*copy, MemoryEvent::CopyStr { addr, len: 11 });
        assert_eq!(
            *ended,
            MemoryEvent::ScopeEnded {
                addr,
                len: STACK_BUFFER_LEN
            }
        );
        assert_eq!(*read, MemoryEvent::Read { addr, len: 10 });
        assert_eq!(out, b"Returned Buffer: Local Data\n");
    }

    #[test]
    fn helper_never_touches_the_heap() {
        let mut mem = RecordingMemory::new();
        let ptr = local_buffer(&mut mem);
        assert_eq!(mem.capacity_of(ptr.as_ptr() as usize), None);
        assert!(mem.leaked().is_empty());
    }
}
