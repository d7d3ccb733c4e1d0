use crate::core::data::colour::Colour;
use crate::core::escape_time::Escape;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Number of entries in the escape colour table. Iteration counts index it
/// modulo this size, so memory stays bounded no matter how high the
/// iteration budget is pushed.
pub const COLOUR_TABLE_SIZE: usize = 512;

/// Fixed seed so every run (and every test) builds the identical table.
const COLOUR_TABLE_SEED: u64 = 0x5594_1197;

/// Lookup table from escape iteration to colour. Built once per session,
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourTable {
    entries: Vec<Colour>,
}

impl ColourTable {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Colour {
        self.entries[index % self.entries.len()]
    }

    /// Resolves an escape-time result to a colour: escaped points cycle
    /// through the table by iteration count, bounded points get the
    /// interior colour.
    #[must_use]
    pub fn colour_for(&self, escape: Escape) -> Colour {
        match escape {
            Escape::Escaped(iteration) => self.entry(iteration as usize),
            Escape::Bounded => Colour::INTERIOR,
        }
    }
}

/// Builds the colour table from the fixed seed: four pseudo-random bytes
/// per entry assigned to red/green/blue/alpha, with alpha then forced to
/// fully opaque. Deterministic: same seed, same table, always.
///
/// A table always holds at least one entry, so modulo indexing in
/// [`ColourTable::entry`] stays well defined; a requested size of 0 is
/// clamped to 1.
#[must_use]
pub fn build_colour_table(size: usize) -> ColourTable {
    let size = size.max(1);
    let mut rng = StdRng::seed_from_u64(COLOUR_TABLE_SEED);
    let mut entries = Vec::with_capacity(size);

    for _ in 0..size {
        let mut bytes = [0u8; 4];
        rng.fill_bytes(&mut bytes);
        entries.push(Colour::from_channels(
            bytes[0],
            bytes[1],
            bytes[2],
            Colour::ALPHA_OPAQUE,
        ));
    }

    ColourTable { entries }
}
