//! C linkage for the kernel
//!
//! Exports the port under the names a C build of the kernel calls and forwards
//! to the C application's `App_*Hook` functions and `OSTmrSignal()`.
//!
//! Only the tick divider carries state. It lives in one global table guarded by
//! a critical section, taken on the two paths that touch it (init begin and the
//! tick) and held only while the divider itself is read or written. No C code
//! runs inside it. Every other hook runs on a stateless table so the idle hook
//! keeps interrupts enabled. The final image must provide a `critical-section`
//! implementation for the target.

#![allow(non_snake_case)]

use core::cell::RefCell;
use core::ffi::c_void;
#[cfg(feature = "hooks")]
use core::ptr::NonNull;

use critical_section::Mutex;

use super::hooks::CpuHooks;
use crate::hooks::{AppHooks, TmrSignal};
use crate::tcb::OsTcb;
#[cfg(feature = "app-hooks")]
use crate::tcb::TcbRef;
use crate::types::{OsOpt, OsStk, OsTaskFn};

extern "C" {
    #[cfg(feature = "app-hooks")]
    fn App_TaskCreateHook(ptcb: *mut OsTcb);
    #[cfg(feature = "app-hooks")]
    fn App_TaskDelHook(ptcb: *mut OsTcb);
    #[cfg(feature = "app-hooks")]
    fn App_TaskIdleHook();
    #[cfg(feature = "app-hooks")]
    fn App_TaskStatHook();
    #[cfg(feature = "app-hooks")]
    fn App_TCBInitHook(ptcb: *mut OsTcb);
    #[cfg(all(feature = "app-hooks", feature = "task-sw-hook"))]
    fn App_TaskSwHook();
    #[cfg(all(feature = "app-hooks", feature = "time-tick-hook"))]
    fn App_TimeTickHook();

    #[cfg(feature = "tmr")]
    fn OSTmrSignal() -> u8;
}

/// The C application's `App_*Hook` functions
pub struct CApp;

#[cfg(feature = "app-hooks")]
impl AppHooks for CApp {
    fn task_create_hook(&mut self, ptcb: TcbRef) {
        unsafe { App_TaskCreateHook(ptcb.as_ptr()) }
    }

    fn task_del_hook(&mut self, ptcb: TcbRef) {
        unsafe { App_TaskDelHook(ptcb.as_ptr()) }
    }

    fn task_idle_hook(&mut self) {
        unsafe { App_TaskIdleHook() }
    }

    fn task_stat_hook(&mut self) {
        unsafe { App_TaskStatHook() }
    }

    fn tcb_init_hook(&mut self, ptcb: TcbRef) {
        unsafe { App_TCBInitHook(ptcb.as_ptr()) }
    }

    #[cfg(feature = "task-sw-hook")]
    fn task_sw_hook(&mut self) {
        unsafe { App_TaskSwHook() }
    }

    #[cfg(feature = "time-tick-hook")]
    fn time_tick_hook(&mut self) {
        unsafe { App_TimeTickHook() }
    }
}

#[cfg(not(feature = "app-hooks"))]
impl AppHooks for CApp {}

/// The kernel's `OSTmrSignal()`
pub struct CTmr;

impl TmrSignal for CTmr {
    #[inline]
    fn signal(&mut self) {
        // OSTmrSignal() reports a semaphore post error; there is no one to hand it to.
        #[cfg(feature = "tmr")]
        let _ = unsafe { OSTmrSignal() };
    }
}

type CHooks = CpuHooks<CApp, CTmr>;

/// Hook table owning the tick divider
static HOOKS: Mutex<RefCell<CHooks>> = Mutex::new(RefCell::new(CpuHooks::new(CApp, CTmr)));

#[inline(always)]
fn stateless() -> CHooks {
    CpuHooks::new(CApp, CTmr)
}

/// `OSTaskStkInit()`
///
/// # Safety
/// See [`os_task_stk_init`](super::os_task_stk_init).
#[no_mangle]
pub unsafe extern "C" fn OSTaskStkInit(
    task: OsTaskFn,
    pdata: *mut c_void,
    ptos: *mut OsStk,
    opt: OsOpt,
) -> *mut OsStk {
    unsafe { super::os_task_stk_init(task, pdata, ptos, opt) }
}

// CApp has no init hooks, so nothing foreign runs under the lock here.
#[cfg(feature = "hooks")]
#[no_mangle]
pub extern "C" fn OSInitHookBegin() {
    critical_section::with(|cs| HOOKS.borrow_ref_mut(cs).os_init_hook_begin());
}

#[cfg(feature = "hooks")]
#[no_mangle]
pub extern "C" fn OSInitHookEnd() {
    stateless().os_init_hook_end();
}

#[cfg(feature = "hooks")]
#[no_mangle]
pub extern "C" fn OSTaskCreateHook(ptcb: *mut OsTcb) {
    match NonNull::new(ptcb) {
        Some(ptcb) => stateless().os_task_create_hook(ptcb),
        None => {
            crate::warn!("OSTaskCreateHook: null TCB dropped");
        }
    }
}

#[cfg(feature = "hooks")]
#[no_mangle]
pub extern "C" fn OSTaskDelHook(ptcb: *mut OsTcb) {
    match NonNull::new(ptcb) {
        Some(ptcb) => stateless().os_task_del_hook(ptcb),
        None => {
            crate::warn!("OSTaskDelHook: null TCB dropped");
        }
    }
}

#[cfg(feature = "hooks")]
#[no_mangle]
pub extern "C" fn OSTaskIdleHook() {
    stateless().os_task_idle_hook();
}

#[cfg(feature = "hooks")]
#[no_mangle]
pub extern "C" fn OSTaskStatHook() {
    stateless().os_task_stat_hook();
}

#[cfg(feature = "hooks")]
#[no_mangle]
pub extern "C" fn OSTCBInitHook(ptcb: *mut OsTcb) {
    match NonNull::new(ptcb) {
        Some(ptcb) => stateless().os_tcb_init_hook(ptcb),
        None => {
            crate::warn!("OSTCBInitHook: null TCB dropped");
        }
    }
}

#[cfg(all(feature = "hooks", feature = "task-sw-hook"))]
#[no_mangle]
pub extern "C" fn OSTaskSwHook() {
    stateless().os_task_sw_hook();
}

#[cfg(all(feature = "hooks", feature = "time-tick-hook"))]
#[no_mangle]
pub extern "C" fn OSTimeTickHook() {
    #[cfg(feature = "app-hooks")]
    CApp.time_tick_hook();

    // OSTmrSignal() posts a semaphore and may reach the scheduler, so it runs
    // after the divider is released.
    #[cfg(feature = "tmr")]
    if critical_section::with(|cs| HOOKS.borrow_ref_mut(cs).tmr_tick()) {
        crate::trace!("tmr signal");
        CTmr.signal();
    }
}

/// Hardware ticks counted towards the next software timer tick
#[cfg(feature = "tmr")]
pub fn tmr_ctr() -> u16 {
    critical_section::with(|cs| HOOKS.borrow_ref(cs).tmr_ctr().count())
}
