use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::NodeId;
use crate::span::Span;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A labeled span: a chunk, a named entity, or a flattened tree node.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Constituent {
    pub label: String,
    pub span: Span,
}

impl Constituent {
    pub fn new(label: impl Into<String>, span: Span) -> Self {
        Self { label: label.into(), span }
    }
}

/// One label per token (part-of-speech tags).
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[archive(check_bytes)]
pub struct TokenLabelView {
    pub labels: Vec<String>,
}

impl TokenLabelView {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn label(&self, token: usize) -> Option<&str> {
        self.labels.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Labeled spans over the token sequence (shallow parse chunks, named entities).
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[archive(check_bytes)]
pub struct SpanLabelView {
    pub constituents: Vec<Constituent>,
}

impl SpanLabelView {
    pub fn new(constituents: Vec<Constituent>) -> Self {
        Self { constituents }
    }

    /// Constituents whose first token lies in `[start, end)`, in storage order.
    pub fn starting_in(&self, start: usize, end: usize) -> Vec<&Constituent> {
        self.constituents
            .iter()
            .filter(|c| c.span.start >= start && c.span.start < end)
            .collect()
    }

    /// Labels of every constituent sharing at least one token with `span`, in storage order.
    pub fn labels_overlapping(&self, span: &Span) -> Vec<&str> {
        self.constituents
            .iter()
            .filter(|c| c.span.overlaps(span))
            .map(|c| c.label.as_str())
            .collect()
    }
}

/// A single argument of a predicate, e.g. `A0` over tokens 3..5.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Argument {
    pub relation: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Predicate {
    pub lemma: String,
    pub span: Span,
    pub arguments: Vec<Argument>,
}

/// Semantic role structure: predicates with their labeled argument spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[archive(check_bytes)]
pub struct PredicateArgumentView {
    pub predicates: Vec<Predicate>,
}

impl PredicateArgumentView {
    pub fn new(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    /// `(lemma, argument)` pairs in predicate order, then argument order.
    pub fn relations(&self) -> impl Iterator<Item = (&str, &Argument)> {
        self.predicates
            .iter()
            .flat_map(|p| p.arguments.iter().map(move |a| (p.lemma.as_str(), a)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct TreeNodeRecord {
    pub label: String,
    pub span: Span,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<NodeId>,
}

/// Flat, serializable form of a constituency tree. Preterminals are the
/// leaves; each covers exactly one token.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ParseTreeRecord {
    pub root: NodeId,
    pub nodes: Vec<TreeNodeRecord>,
}
