//! Task Control Block handle
//!
//! The TCB belongs to the kernel. The port only ever sees a pointer to it,
//! hands that pointer to the application hooks and never looks inside.

use core::marker::{PhantomData, PhantomPinned};
use core::ptr::NonNull;

/// Kernel task control block (`OS_TCB`), opaque to the port
#[repr(C)]
pub struct OsTcb {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

/// Reference to a kernel-owned TCB, passed to hooks unchanged
pub type TcbRef = NonNull<OsTcb>;
