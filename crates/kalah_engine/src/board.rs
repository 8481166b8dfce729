//! Reference Kalah board
//!
//! A plain value-type board implementing [`GameState`] with standard Kalah
//! rules, used by the agent binary, the benchmarks and the search tests.
//!
//! ## Layout
//!
//! Each side owns a row of `size` pits and one store. Sowing runs
//! counter-clockwise: from the chosen pit towards the mover's store, then
//! along the opponent's row, skipping the opponent's store. Pit `i` of one
//! side faces pit `size - 1 - i` of the other.
//!
//! ## Text Form
//!
//! Boards read and print in the KGP `state` notation:
//!
//! ```text
//! <size,near_store,far_store,near_pit_1,...,near_pit_n,far_pit_1,...,far_pit_n>
//! ```

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};
use crate::state::GameState;
use crate::types::{Score, Side};

/// Kalah position, indexed by [`Side`] for store totals
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pits: [Vec<u32>; 2],
    stores: [u32; 2],
}

impl Board {
    /// Opening position: `size` pits per side holding `stones` each
    pub fn new(size: usize, stones: u32) -> Self {
        Self {
            pits: [vec![stones; size], vec![stones; size]],
            stores: [0, 0],
        }
    }

    /// Pits per side
    pub fn size(&self) -> usize {
        self.pits[0].len()
    }

    /// Stone counts of `side`'s row
    pub fn pits(&self, side: Side) -> &[u32] {
        &self.pits[side.index()]
    }

    /// Stones in one pit, or `None` if out of range
    pub fn pit(&self, side: Side, pit: usize) -> Option<u32> {
        self.pits[side.index()].get(pit).copied()
    }

    /// Same position seen from the other side of the table
    pub fn mirrored(&self) -> Self {
        let [near, far] = self.pits.clone();
        Self {
            pits: [far, near],
            stores: [self.stores[1], self.stores[0]],
        }
    }

    /// Sow with validation, for moves that come from outside the engine
    pub fn play(&self, side: Side, pit: usize) -> EngineResult<(Board, bool)> {
        if self.is_final() {
            return Err(EngineError::GameOver);
        }
        match self.pit(side, pit) {
            Some(stones) if stones > 0 => Ok(self.sow(side, &pit)),
            _ => Err(EngineError::IllegalMove { side, pit }),
        }
    }

    fn row_empty(&self, side: Side) -> bool {
        self.pits[side.index()].iter().all(|&stones| stones == 0)
    }

    // Each side banks whatever is left in its own row.
    fn sweep(&mut self) {
        for side in [Side::Near, Side::Far] {
            let row = &mut self.pits[side.index()];
            let remaining: u32 = row.iter().sum();
            row.iter_mut().for_each(|stones| *stones = 0);
            self.stores[side.index()] += remaining;
        }
    }
}

impl GameState for Board {
    type Move = usize;

    fn legal_moves(&self, side: Side) -> Vec<usize> {
        self.pits[side.index()]
            .iter()
            .enumerate()
            .filter(|&(_, &stones)| stones > 0)
            .map(|(pit, _)| pit)
            .collect()
    }

    fn sow(&self, side: Side, mv: &usize) -> (Self, bool) {
        let size = self.size();
        let own = side.index();
        let opp = side.other().index();
        let mut next = self.clone();

        // Slots 0..size are own pits, `size` is own store, the rest are the
        // opponent's pits. The opponent's store is not on the ring.
        let ring = 2 * size + 1;
        let mut stones = std::mem::take(&mut next.pits[own][*mv]);
        let mut slot = *mv;
        while stones > 0 {
            slot = (slot + 1) % ring;
            if slot < size {
                next.pits[own][slot] += 1;
            } else if slot == size {
                next.stores[own] += 1;
            } else {
                next.pits[opp][slot - size - 1] += 1;
            }
            stones -= 1;
        }

        let again = slot == size;

        if slot < size {
            let opposite = size - 1 - slot;
            if next.pits[own][slot] == 1 && next.pits[opp][opposite] > 0 {
                let captured = next.pits[own][slot] + next.pits[opp][opposite];
                next.pits[own][slot] = 0;
                next.pits[opp][opposite] = 0;
                next.stores[own] += captured;
            }
        }

        if next.row_empty(Side::Near) || next.row_empty(Side::Far) {
            next.sweep();
        }

        (next, again)
    }

    fn is_final(&self) -> bool {
        self.row_empty(Side::Near) || self.row_empty(Side::Far)
    }

    fn store(&self, side: Side) -> u32 {
        self.stores[side.index()]
    }
}

impl Index<Side> for Board {
    type Output = u32;

    fn index(&self, side: Side) -> &u32 {
        &self.stores[side.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{},{}", self.size(), self.stores[0], self.stores[1])?;
        for stones in self.pits[0].iter().chain(self.pits[1].iter()) {
            write!(f, ",{}", stones)?;
        }
        f.write_str(">")
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(input: &str) -> EngineResult<Self> {
        let fail = |reason: &str| EngineError::ParseBoard {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let body = input
            .trim()
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or_else(|| fail("expected <...>"))?;

        let numbers = body
            .split(',')
            .map(|field| field.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| fail(&e.to_string()))?;

        let (&size, rest) = numbers
            .split_first()
            .ok_or_else(|| fail("missing size"))?;
        let size = size as usize;
        if rest.len() != 2 + 2 * size {
            return Err(fail(&format!(
                "expected {} fields after the size, found {}",
                2 + 2 * size,
                rest.len()
            )));
        }

        // Any store may end up holding every stone, and scores are store
        // differences in `Score`.
        let total: u64 = rest.iter().map(|&stones| u64::from(stones)).sum();
        if total > Score::MAX as u64 {
            return Err(fail(&format!(
                "{} stones in play, at most {} supported",
                total,
                Score::MAX
            )));
        }

        Ok(Self {
            pits: [
                rest[2..2 + size].to_vec(),
                rest[2 + size..].to_vec(),
            ],
            stores: [rest[0], rest[1]],
        })
    }
}
