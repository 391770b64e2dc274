//! Renesas SH-2A port implementation
//!
//! Builds the register frame a new task is first dispatched from. The context
//! restore routine pops R0..R14, PR, GBR, MACH and MACL in that order, then
//! `rte` pops PC and SR. The frame below must match it word for word.

mod hooks;
mod tmr;

#[cfg(all(feature = "c-abi", not(test)))]
pub mod ffi;

pub use hooks::CpuHooks;
pub use tmr::{os_tmr_tick, OsTmrDivider, TmrTickDivider};

use core::ffi::c_void;
use core::mem::{offset_of, size_of};

use crate::types::{OsOpt, OsStk, OsTaskFn};

// ============ Status register ============

/// SR interrupt mask field (I3..I0)
pub const SR_IMASK: u32 = 0x0000_00F0;

/// SR with every interrupt level accepted
///
/// The OS must not mask the interrupts a ROM monitor debugger (e.g. HMON)
/// needs, so tasks always start with the mask cleared.
pub const SR_INT_MASK_ON: u32 = 0x0000_0000;

/// SR with every maskable level blocked
pub const SR_INT_MASK_OFF: u32 = SR_IMASK;

// ============ Register sentinels ============

pub const MACL_INIT: OsStk = 0xA0;
pub const MACH_INIT: OsStk = 0xA1;
pub const GBR_INIT: OsStk = 0xA2;
pub const PR_INIT: OsStk = 0xA3;

// ============ Frame layout ============

/// Saved register, numbered by its word slot counted up from the stack pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum StkReg {
    R0 = 0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    Pr,
    Gbr,
    Mach,
    Macl,
    Pc,
    Sr,
}

impl StkReg {
    /// Word offset of this register from the saved stack pointer
    #[inline(always)]
    pub const fn slot(self) -> usize {
        self as usize
    }
}

/// Number of words in a saved context
pub const STK_FRAME_WORDS: usize = 21;

/// Saved context, lowest address first. Shared with the restore routine.
pub const STK_FRAME_LAYOUT: [StkReg; STK_FRAME_WORDS] = [
    StkReg::R0,
    StkReg::R1,
    StkReg::R2,
    StkReg::R3,
    StkReg::R4,
    StkReg::R5,
    StkReg::R6,
    StkReg::R7,
    StkReg::R8,
    StkReg::R9,
    StkReg::R10,
    StkReg::R11,
    StkReg::R12,
    StkReg::R13,
    StkReg::R14,
    StkReg::Pr,
    StkReg::Gbr,
    StkReg::Mach,
    StkReg::Macl,
    StkReg::Pc,
    StkReg::Sr,
];

/// Context structure stored on stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(4))]
pub struct StkFrame {
    pub r0: OsStk,
    pub r1: OsStk,
    pub r2: OsStk,
    pub r3: OsStk,
    /// First argument register
    pub r4: OsStk,
    pub r5: OsStk,
    pub r6: OsStk,
    pub r7: OsStk,
    pub r8: OsStk,
    pub r9: OsStk,
    pub r10: OsStk,
    pub r11: OsStk,
    pub r12: OsStk,
    pub r13: OsStk,
    pub r14: OsStk,
    pub pr: OsStk,
    pub gbr: OsStk,
    pub mach: OsStk,
    pub macl: OsStk,
    pub pc: OsStk,
    pub sr: OsStk,
}

const _: () = assert!(size_of::<StkFrame>() == STK_FRAME_WORDS * size_of::<OsStk>());

// Code and data addresses are stored as single stack words. Host builds keep
// the low 32 bits, which is all the tests compare.
#[cfg(target_os = "none")]
const _: () = assert!(
    size_of::<usize>() == size_of::<OsStk>(),
    "the SH-2A port needs 32-bit pointers"
);

const _: () = {
    let mut i = 0;
    while i < STK_FRAME_WORDS {
        assert!(STK_FRAME_LAYOUT[i].slot() == i);
        i += 1;
    }
};

macro_rules! assert_frame_slots {
    ($($field:ident => $reg:ident),* $(,)?) => {
        $(
            const _: () = assert!(
                offset_of!(StkFrame, $field) == StkReg::$reg.slot() * size_of::<OsStk>()
            );
        )*
    };
}

assert_frame_slots! {
    r0 => R0, r1 => R1, r2 => R2, r3 => R3, r4 => R4,
    r5 => R5, r6 => R6, r7 => R7, r8 => R8, r9 => R9,
    r10 => R10, r11 => R11, r12 => R12, r13 => R13, r14 => R14,
    pr => Pr, gbr => Gbr, mach => Mach, macl => Macl,
    pc => Pc, sr => Sr,
}

impl StkFrame {
    /// Initial context for `task`, entered with `pdata` in R4
    ///
    /// General registers that carry nothing hold their own number, which makes
    /// a freshly started task easy to spot in a debugger.
    ///
    /// `task` and `pdata` are stored as 32-bit words. Only targets with 32-bit
    /// pointers are supported; on a 64-bit host the upper half is dropped.
    pub fn new(task: OsTaskFn, pdata: *mut c_void) -> Self {
        StkFrame {
            r0: 0,
            r1: 1,
            r2: 2,
            r3: 3,
            r4: pdata as usize as OsStk,
            r5: 5,
            r6: 6,
            r7: 7,
            r8: 8,
            r9: 9,
            r10: 10,
            r11: 11,
            r12: 12,
            r13: 13,
            r14: 14,
            pr: PR_INIT,
            gbr: GBR_INIT,
            mach: MACH_INIT,
            macl: MACL_INIT,
            pc: task as usize as OsStk,
            sr: SR_INT_MASK_ON,
        }
    }

    /// Read back a saved context
    ///
    /// # Safety
    /// `psp` must point at `STK_FRAME_WORDS` readable, 4-byte aligned words.
    pub unsafe fn from_sp(psp: *const OsStk) -> Self {
        unsafe { psp.cast::<StkFrame>().read() }
    }

    /// Saved value of `reg`
    pub fn reg(&self, reg: StkReg) -> OsStk {
        match reg {
            StkReg::R0 => self.r0,
            StkReg::R1 => self.r1,
            StkReg::R2 => self.r2,
            StkReg::R3 => self.r3,
            StkReg::R4 => self.r4,
            StkReg::R5 => self.r5,
            StkReg::R6 => self.r6,
            StkReg::R7 => self.r7,
            StkReg::R8 => self.r8,
            StkReg::R9 => self.r9,
            StkReg::R10 => self.r10,
            StkReg::R11 => self.r11,
            StkReg::R12 => self.r12,
            StkReg::R13 => self.r13,
            StkReg::R14 => self.r14,
            StkReg::Pr => self.pr,
            StkReg::Gbr => self.gbr,
            StkReg::Mach => self.mach,
            StkReg::Macl => self.macl,
            StkReg::Pc => self.pc,
            StkReg::Sr => self.sr,
        }
    }
}

/// Initialize task stack
///
/// Stores a full [`StkFrame`] directly below `ptos` and returns the new top
/// of stack for the TCB. The word at `ptos` itself is left untouched. `opt` is
/// accepted for the kernel's benefit and not interpreted.
///
/// # Safety
/// `ptos` must be 4-byte aligned with at least `STK_FRAME_WORDS` writable
/// words below it, all inside one stack allocation.
pub unsafe fn os_task_stk_init(
    task: OsTaskFn,
    pdata: *mut c_void,
    ptos: *mut OsStk,
    _opt: OsOpt,
) -> *mut OsStk {
    unsafe {
        let psp = ptos.sub(STK_FRAME_WORDS);
        psp.cast::<StkFrame>().write(StkFrame::new(task, pdata));

        crate::trace!(
            "stk init: ptos={=usize:#x} psp={=usize:#x}",
            ptos as usize,
            psp as usize
        );

        psp
    }
}
