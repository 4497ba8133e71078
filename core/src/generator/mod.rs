use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// Produces freshly populated boards.
pub trait GridGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Board>;
}

/// Input to a seeded generator, the same seed always yields the same boards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(u64);

impl Seed {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Seed named by arbitrary text, hashed with 64-bit FNV-1a.
    pub fn from_text(text: &str) -> Self {
        const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;

        let hash = text.bytes().fold(OFFSET_BASIS, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(PRIME)
        });
        Self(hash)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Generates one board for `config`, a pure function of its inputs.
pub fn generate_board(config: GameConfig, seed: Seed) -> Result<Board> {
    RandomGridGenerator::new(seed).generate(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_seeds_use_fnv1a() {
        assert_eq!(Seed::from_text("").value(), 0xcbf2_9ce4_8422_2325);
        assert_eq!(Seed::from_text("a").value(), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(Seed::from_text("testing").value(), 0xc2fe_2fb7_7ae8_39bb);
        assert_eq!(Seed::from("testing"), Seed::from_text("testing"));
        assert_ne!(Seed::from_text("testing"), Seed::from_text("hakvoort!"));
    }

    #[test]
    fn seed_displays_as_hex() {
        assert_eq!(alloc::format!("{}", Seed::new(255)), "0x00000000000000ff");
    }
}
