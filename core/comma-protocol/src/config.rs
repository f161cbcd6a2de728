#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

bitflags! {
    /// Extra information appended to phrase and chunk notations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct Lexicalization: u8 {
        const NAMED_ENTITY = 1;
        const PART_OF_SPEECH = 2;
    }
}

impl Default for Lexicalization {
    fn default() -> Self {
        Lexicalization::empty()
    }
}

/// Settings shared by every comma of a run. Fixed before the first comma is
/// built and never changed afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct CommaConfig {
    /// Prefer gold annotations (when a comma carries them) over predicted ones.
    pub use_gold: bool,
    pub lexicalize: Lexicalization,
}

impl CommaConfig {
    pub const fn new(use_gold: bool, lexicalize: Lexicalization) -> Self {
        Self { use_gold, lexicalize }
    }

    pub fn lexicalize_ner(&self) -> bool {
        self.lexicalize.contains(Lexicalization::NAMED_ENTITY)
    }

    pub fn lexicalize_pos(&self) -> bool {
        self.lexicalize.contains(Lexicalization::PART_OF_SPEECH)
    }
}
