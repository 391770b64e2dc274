//! Kernel-facing definitions
//!
//! Configuration, shared types, the TCB handle and the application hook traits.

pub mod config;
pub mod hooks;
pub mod tcb;
pub mod types;
