//! Software timer tick divider
//!
//! The timer task runs at `OS_TMR_CFG_TICKS_PER_SEC`, slower than the hardware
//! tick. The divider counts hardware ticks and reports every `RATIO`-th one.

use crate::config::OS_TMR_TICK_RATIO;
use crate::hooks::TmrSignal;

/// Counts hardware ticks in `[0, RATIO)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmrTickDivider<const RATIO: u16> {
    ctr: u16,
}

/// Divider at the configured hardware/software tick ratio
pub type OsTmrDivider = TmrTickDivider<OS_TMR_TICK_RATIO>;

impl<const RATIO: u16> TmrTickDivider<RATIO> {
    /// Create a divider with the counter at zero
    pub const fn new() -> Self {
        const { assert!(RATIO > 0, "timer tick ratio must be non-zero") };
        Self { ctr: 0 }
    }

    /// Hardware ticks per software tick
    #[inline(always)]
    pub const fn ratio(&self) -> u16 {
        RATIO
    }

    /// Hardware ticks since the last software tick
    #[inline(always)]
    pub const fn count(&self) -> u16 {
        self.ctr
    }

    /// Restart counting, called at kernel init
    #[inline]
    pub fn reset(&mut self) {
        self.ctr = 0;
    }

    /// Count one hardware tick
    ///
    /// Returns `true` when a software tick is due; the counter is back at
    /// zero at that point.
    #[inline]
    #[must_use]
    pub fn tick(&mut self) -> bool {
        self.ctr += 1;
        if self.ctr >= RATIO {
            self.ctr = 0;
            true
        } else {
            false
        }
    }
}

impl<const RATIO: u16> Default for TmrTickDivider<RATIO> {
    fn default() -> Self {
        Self::new()
    }
}

/// Count one hardware tick on `ctr` and signal the timer task when its period
/// has elapsed
///
/// Must only run from the tick path, which the kernel never re-enters.
#[inline]
pub fn os_tmr_tick<const RATIO: u16, S>(ctr: &mut TmrTickDivider<RATIO>, tmr: &mut S)
where
    S: TmrSignal + ?Sized,
{
    if ctr.tick() {
        crate::trace!("tmr signal");
        tmr.signal();
    }
}
