//! Compile-time configuration for the μC/OS-II port
//!
//! Hook and timer switches come from Cargo features; frequencies and the kernel
//! version are plain constants. Everything here is resolved at build time.

/// Kernel version this port is built against (V2.93.00)
pub const OS_VERSION: u32 = 29300;

/// Hardware tick rate in Hz
pub const OS_TICKS_PER_SEC: u32 = 1000;

/// Software timer tick rate in Hz
pub const OS_TMR_CFG_TICKS_PER_SEC: u32 = 100;

/// Hardware ticks per software timer tick
pub const OS_TMR_TICK_RATIO: u16 = (OS_TICKS_PER_SEC / OS_TMR_CFG_TICKS_PER_SEC) as u16;

const _: () = assert!(OS_TMR_CFG_TICKS_PER_SEC > 0, "software timer rate must be non-zero");
const _: () = assert!(
    OS_TICKS_PER_SEC / OS_TMR_CFG_TICKS_PER_SEC > 0,
    "software timer rate exceeds the hardware tick rate"
);
const _: () = assert!(
    OS_TICKS_PER_SEC / OS_TMR_CFG_TICKS_PER_SEC <= u16::MAX as u32,
    "timer tick ratio does not fit the tick counter"
);

// ============ Version gates ============

/// Init begin/end and TCB init hooks exist after V2.03
pub const VERSION_INIT_HOOKS: u32 = 20300;

/// Idle task hook exists from V2.51
pub const VERSION_IDLE_HOOK: u32 = 25100;

/// Software timer module exists from V2.81
pub const VERSION_TMR: u32 = 28100;

// ============ Feature switches ============

/// `OS_CPU_HOOKS_EN`
pub const OS_CPU_HOOKS_EN: bool = cfg!(feature = "hooks");

/// `OS_APP_HOOKS_EN`
pub const OS_APP_HOOKS_EN: bool = cfg!(feature = "app-hooks");

/// `OS_TASK_SW_HOOK_EN`
pub const OS_TASK_SW_HOOK_EN: bool = cfg!(feature = "task-sw-hook");

/// `OS_TIME_TICK_HOOK_EN`
pub const OS_TIME_TICK_HOOK_EN: bool = cfg!(feature = "time-tick-hook");

/// `OS_TMR_EN`
pub const OS_TMR_EN: bool = cfg!(feature = "tmr");

// ============ Derived hook presence ============

pub const INIT_HOOKS_EN: bool = OS_CPU_HOOKS_EN && OS_VERSION > VERSION_INIT_HOOKS;

pub const TCB_INIT_HOOK_EN: bool = OS_CPU_HOOKS_EN && OS_VERSION > VERSION_INIT_HOOKS;

pub const IDLE_HOOK_EN: bool = OS_CPU_HOOKS_EN && OS_VERSION >= VERSION_IDLE_HOOK;

pub const TASK_SW_HOOK_EN: bool = OS_CPU_HOOKS_EN && OS_TASK_SW_HOOK_EN;

pub const TIME_TICK_HOOK_EN: bool = OS_CPU_HOOKS_EN && OS_TIME_TICK_HOOK_EN;

/// Tick counter and divider are compiled in
pub const TMR_DIVIDER_EN: bool = OS_TMR_EN && OS_VERSION >= VERSION_TMR;
