//! Port layer - CPU-specific implementations
//!
//! Task stack frame construction, the kernel hook table and the software
//! timer tick divider for the SH-2A.

pub mod sh2a;

pub use sh2a::*;
