use rkyv::{Archive, Deserialize, Serialize};
use crate::model::{ParseTreeRecord, PredicateArgumentView, SpanLabelView, TokenLabelView};
use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Names of the views an annotation bundle can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewName {
    Pos,
    ShallowParse,
    NamedEntities,
    Parse,
    SrlVerb,
    SrlNom,
    SrlPrep,
}

impl ViewName {
    pub const fn as_str(self) -> &'static str {
        match self {
            ViewName::Pos => "POS",
            ViewName::ShallowParse => "SHALLOW_PARSE",
            ViewName::NamedEntities => "NER",
            ViewName::Parse => "PARSE",
            ViewName::SrlVerb => "SRL_VERB",
            ViewName::SrlNom => "SRL_NOM",
            ViewName::SrlPrep => "SRL_PREP",
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every annotation produced for one sentence. Views the pipeline did not
/// produce are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct TextAnnotation {
    /// Whitespace-tokenized sentence text.
    pub text: String,
    pub pos: Option<TokenLabelView>,
    pub shallow_parse: Option<SpanLabelView>,
    pub named_entities: Option<SpanLabelView>,
    pub parse: Option<ParseTreeRecord>,
    pub srl_verb: Option<PredicateArgumentView>,
    pub srl_nom: Option<PredicateArgumentView>,
    pub srl_prep: Option<PredicateArgumentView>,
}

impl TextAnnotation {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }
}
