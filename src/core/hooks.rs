//! Application hook surface
//!
//! The kernel never calls these directly. The port's [`CpuHooks`] forwards to
//! them when application hooks are enabled. Every method defaults to doing
//! nothing, so an application only overrides the moments it cares about.
//!
//! [`CpuHooks`]: crate::port::CpuHooks

use crate::tcb::TcbRef;

/// Callbacks supplied by the application (`App_*Hook`)
pub trait AppHooks {
    /// Start of `OSInit()`. Interrupts are disabled.
    fn init_begin_hook(&mut self) {}

    /// End of `OSInit()`. Interrupts are disabled.
    fn init_end_hook(&mut self) {}

    /// A task was created. Interrupts are disabled.
    fn task_create_hook(&mut self, _ptcb: TcbRef) {}

    /// A task is being deleted. Interrupts are disabled.
    fn task_del_hook(&mut self, _ptcb: TcbRef) {}

    /// Every pass of the idle task. Interrupts are enabled, so this is the
    /// place to put the CPU to sleep.
    fn task_idle_hook(&mut self) {}

    /// Once per second from the statistics task.
    fn task_stat_hook(&mut self) {}

    /// The TCB is populated but the task is not yet ready.
    fn tcb_init_hook(&mut self, _ptcb: TcbRef) {}

    /// Every context switch. Interrupts are disabled.
    fn task_sw_hook(&mut self) {}

    /// Every hardware tick.
    fn time_tick_hook(&mut self) {}
}

/// No application hooks
impl AppHooks for () {}

/// Software timer subsystem notification (`OSTmrSignal`)
pub trait TmrSignal {
    /// One software timer period has elapsed
    fn signal(&mut self);
}

/// Timer module not linked
impl TmrSignal for () {
    #[inline(always)]
    fn signal(&mut self) {}
}
