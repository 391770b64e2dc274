//! μC/OS-II CPU port for the Renesas SH-2A
//!
//! The hardware adaptation layer the kernel calls into:
//! - Initial task stack frames matching the context restore routine
//! - Kernel hooks, forwarding to application callbacks or compiled out
//! - Software timer tick derived from the hardware tick
//!
//! With the `c-abi` feature the port is also exported under the C symbol
//! names (`OSTaskStkInit`, `OSTaskCreateHook`, ...) the kernel links against.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

// ============ Modules ============

pub mod log;

pub mod core;
pub mod port;

// ============ Re-exports ============

pub use crate::core::config;
pub use crate::core::config::*;
pub use crate::core::hooks;
pub use crate::core::hooks::{AppHooks, TmrSignal};
pub use crate::core::tcb;
pub use crate::core::tcb::{OsTcb, TcbRef};
pub use crate::core::types;
pub use crate::core::types::*;
pub use port::{os_task_stk_init, CpuHooks, OsTmrDivider, StkFrame, TmrTickDivider};
