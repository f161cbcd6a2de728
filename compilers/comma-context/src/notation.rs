use comma_protocol::{Constituent, Span};
use comma_tree::ParseNode;

use crate::context::{pos_label, CommaContext};
use crate::error::Result;

/// Rendering of an absent chunk or phrase, and of a span with no named entity.
pub const NULL_NOTATION: &str = "NULL";

/// Anything with a label over a token span: chunks and parse tree nodes.
pub trait Labeled {
    fn label(&self) -> &str;
    fn span(&self) -> Span;
}

impl Labeled for Constituent {
    fn label(&self) -> &str {
        &self.label
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl Labeled for ParseNode {
    fn label(&self) -> &str {
        &self.label
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl<'a> CommaContext<'a> {
    /// Feature string for a chunk or phrase.
    ///
    /// `label`, then ` -<entities>` when named entities are lexicalized, then
    /// ` -` followed by ` <tag>` per covered token when tags are lexicalized:
    /// `"NP -PER - DT NN"`.
    pub fn notation<N: Labeled + ?Sized>(&self, node: Option<&N>) -> Result<String> {
        let node = match node {
            Some(node) => node,
            None => return Ok(NULL_NOTATION.to_string()),
        };

        let mut notation = node.label().to_string();

        if self.config().lexicalize_ner() {
            notation.push_str(" -");
            notation.push_str(&self.named_entity_tag(node)?);
        }

        if self.config().lexicalize_pos() {
            notation.push_str(" -");
            let pos = self.selected_pos()?;
            for token in node.span().tokens() {
                notation.push(' ');
                notation.push_str(pos_label(pos, token)?);
            }
        }

        Ok(notation)
    }

    /// Space-joined labels of the predicted named entities on any token of `node`.
    pub fn named_entity_tag<N: Labeled + ?Sized>(&self, node: &N) -> Result<String> {
        let entities = self.predicted_bundle().named_entities()?;
        let tags = entities.labels_overlapping(&node.span());
        if tags.is_empty() {
            Ok(NULL_NOTATION.to_string())
        } else {
            Ok(tags.join(" "))
        }
    }
}
