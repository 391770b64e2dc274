//! Core type definitions shared between the kernel and the port
//!
//! Widths follow the SH-2A: every stack slot is one 32-bit register.

use core::ffi::c_void;

/// Stack element type (`OS_STK`)
pub type OsStk = u32;

/// Option flags passed through task creation
pub type OsOpt = u16;

/// Task entry point, called with its argument in R4
pub type OsTaskFn = extern "C" fn(pdata: *mut c_void);

/// Task creation options
pub mod opt {
    use super::OsOpt;

    pub const TASK_NONE: OsOpt = 0x0000;
    /// Enable stack checking for the task
    pub const TASK_STK_CHK: OsOpt = 0x0001;
    /// Clear the stack when the task is created
    pub const TASK_STK_CLR: OsOpt = 0x0002;
    /// Save the floating-point registers
    pub const TASK_SAVE_FP: OsOpt = 0x0004;
}
