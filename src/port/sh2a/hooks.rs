//! Kernel hook table
//!
//! The kernel calls one of these at each lifecycle moment. Which hooks exist
//! is fixed by Cargo features and the configured kernel version; whether they
//! forward to the application is fixed by `app-hooks`. The application is a
//! type parameter, so a disabled or empty hook compiles down to nothing.

#[cfg(feature = "hooks")]
use crate::config;
use crate::hooks::{AppHooks, TmrSignal};
#[cfg(feature = "hooks")]
use crate::tcb::TcbRef;

#[cfg(feature = "tmr")]
use super::tmr::{os_tmr_tick, OsTmrDivider};

/// CPU hook table (`OS*Hook`)
pub struct CpuHooks<A: AppHooks = (), S: TmrSignal = ()> {
    app: A,
    tmr: S,
    #[cfg(feature = "tmr")]
    tmr_ctr: OsTmrDivider,
}

impl<A: AppHooks, S: TmrSignal> CpuHooks<A, S> {
    /// Create the hook table
    ///
    /// # Arguments
    /// * `app` - Application callbacks
    /// * `tmr` - Timer subsystem notified on every software timer tick
    pub const fn new(app: A, tmr: S) -> Self {
        CpuHooks {
            app,
            tmr,
            #[cfg(feature = "tmr")]
            tmr_ctr: OsTmrDivider::new(),
        }
    }

    /// Application callbacks
    #[inline]
    pub fn app(&self) -> &A {
        &self.app
    }

    /// Application callbacks, mutably
    #[inline]
    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    /// Timer subsystem handle
    #[inline]
    pub fn tmr(&self) -> &S {
        &self.tmr
    }

    /// Tick divider state
    #[cfg(feature = "tmr")]
    #[inline]
    pub fn tmr_ctr(&self) -> &OsTmrDivider {
        &self.tmr_ctr
    }

    /// Count one hardware tick without signalling the timer subsystem
    ///
    /// Returns `true` when a software timer tick is due. For callers that must
    /// release the table before running `OSTmrSignal()`.
    #[cfg(feature = "tmr")]
    #[must_use]
    pub fn tmr_tick(&mut self) -> bool {
        crate::config::TMR_DIVIDER_EN && self.tmr_ctr.tick()
    }

    /// Called by `OSInit()` at the beginning of `OSInit()`
    ///
    /// Interrupts should be disabled during this call.
    #[cfg(feature = "hooks")]
    pub fn os_init_hook_begin(&mut self) {
        if !config::INIT_HOOKS_EN {
            return;
        }

        #[cfg(feature = "tmr")]
        if config::TMR_DIVIDER_EN {
            self.tmr_ctr.reset();
            crate::debug!("init: tmr ratio {=u16}", self.tmr_ctr.ratio());
        }

        #[cfg(feature = "app-hooks")]
        self.app.init_begin_hook();
    }

    /// Called by `OSInit()` at the end of `OSInit()`
    ///
    /// Interrupts should be disabled during this call.
    #[cfg(feature = "hooks")]
    pub fn os_init_hook_end(&mut self) {
        if !config::INIT_HOOKS_EN {
            return;
        }

        #[cfg(feature = "app-hooks")]
        self.app.init_end_hook();
    }

    /// Called when a task is created. Interrupts are disabled.
    #[cfg(feature = "hooks")]
    pub fn os_task_create_hook(&mut self, ptcb: TcbRef) {
        #[cfg(feature = "app-hooks")]
        self.app.task_create_hook(ptcb);
        #[cfg(not(feature = "app-hooks"))]
        let _ = ptcb;
    }

    /// Called when a task is deleted. Interrupts are disabled.
    #[cfg(feature = "hooks")]
    pub fn os_task_del_hook(&mut self, ptcb: TcbRef) {
        #[cfg(feature = "app-hooks")]
        self.app.task_del_hook(ptcb);
        #[cfg(not(feature = "app-hooks"))]
        let _ = ptcb;
    }

    /// Called by the idle task. Interrupts are enabled during this call.
    #[cfg(feature = "hooks")]
    pub fn os_task_idle_hook(&mut self) {
        if !config::IDLE_HOOK_EN {
            return;
        }

        #[cfg(feature = "app-hooks")]
        self.app.task_idle_hook();
    }

    /// Called every second by the statistics task
    #[cfg(feature = "hooks")]
    pub fn os_task_stat_hook(&mut self) {
        #[cfg(feature = "app-hooks")]
        self.app.task_stat_hook();
    }

    /// Called by `OS_TCBInit()` after most of the TCB is set up
    ///
    /// Interrupts may or may not be enabled during this call.
    #[cfg(feature = "hooks")]
    pub fn os_tcb_init_hook(&mut self, ptcb: TcbRef) {
        if !config::TCB_INIT_HOOK_EN {
            return;
        }

        #[cfg(feature = "app-hooks")]
        self.app.tcb_init_hook(ptcb);
        #[cfg(not(feature = "app-hooks"))]
        let _ = ptcb;
    }

    /// Called when a task switch is performed
    ///
    /// Interrupts are disabled. The kernel's current TCB is the task being
    /// switched out and its high-ready TCB the one being switched in.
    #[cfg(all(feature = "hooks", feature = "task-sw-hook"))]
    pub fn os_task_sw_hook(&mut self) {
        #[cfg(feature = "app-hooks")]
        self.app.task_sw_hook();
    }

    /// Called every hardware tick
    ///
    /// Also drives the software timer divider. Interrupts may or may not be
    /// enabled; the kernel never re-enters this hook.
    #[cfg(all(feature = "hooks", feature = "time-tick-hook"))]
    pub fn os_time_tick_hook(&mut self) {
        #[cfg(feature = "app-hooks")]
        self.app.time_tick_hook();

        #[cfg(feature = "tmr")]
        if config::TMR_DIVIDER_EN {
            os_tmr_tick(&mut self.tmr_ctr, &mut self.tmr);
        }
    }
}

impl<A: AppHooks + Default, S: TmrSignal + Default> Default for CpuHooks<A, S> {
    fn default() -> Self {
        Self::new(A::default(), S::default())
    }
}
