/// Conway's rule: born with 3 neighbors, survives with 2 or 3.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// A totalistic life rule over the 8-cell neighborhood.
///
/// Bit `n` of `births` means a dead cell with `n` live neighbors comes alive. Bit `n` of
/// `survivals` means a live cell with `n` live neighbors stays alive. Only bits 0 through 8 mean
/// anything.
///
/// ```notrust
/// B3/S23:  births    0_0000_1000
///          survivals 0_0000_1100
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSet {
    births: u16,
    survivals: u16,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Neighbor counts above 8 can't happen, so their bits are dropped.
    pub const fn new(births: u16, survivals: u16) -> Self {
        Self {
            births: births & 0x1FF,
            survivals: survivals & 0x1FF,
        }
    }

    pub fn births(&self) -> u16 {
        self.births
    }

    pub fn survivals(&self) -> u16 {
        self.survivals
    }

    /// Whether a cell is alive next generation, given its state now and its live neighbor count.
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        let Some(bit) = 1u16.checked_shl(neighbors as u32) else {
            return false;
        };

        let counts = if alive { self.survivals } else { self.births };

        counts & bit != 0
    }
}
