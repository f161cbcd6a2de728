use rkyv::{Archive, Deserialize, Serialize};
use crate::annotation::TextAnnotation;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct CommaRecord {
    pub position: usize,
    /// Gold role label as spelled in the corpus.
    pub role: Option<String>,
}

/// A sentence with its predicted annotation, optional gold annotation, and
/// the commas to classify.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct SentenceRecord {
    pub annotation: TextAnnotation,
    pub gold: Option<TextAnnotation>,
    pub commas: Vec<CommaRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Corpus {
    #[cfg_attr(feature = "serde", serde(default))]
    pub version: u32,
    pub sentences: Vec<SentenceRecord>,
}

impl Corpus {
    pub fn comma_count(&self) -> usize {
        self.sentences.iter().map(|s| s.commas.len()).sum()
    }
}
