use comma_protocol::{PredicateArgumentView, SpanLabelView, TextAnnotation, TokenLabelView, ViewName};
use comma_tree::ParseTree;

use crate::error::{CommaError, Result};

/// A sentence annotation with its parse tree indexed for traversal.
///
/// Built once per sentence and shared by every comma in it.
#[derive(Debug, Clone)]
pub struct AnnotationBundle {
    annotation: TextAnnotation,
    parse: Option<ParseTree>,
}

impl AnnotationBundle {
    pub fn new(annotation: TextAnnotation) -> Result<Self> {
        let parse = annotation.parse.as_ref().map(ParseTree::from_record).transpose()?;

        let tokens = annotation.token_count();
        if let Some(pos) = &annotation.pos {
            if pos.len() != tokens {
                log::warn!(
                    "POS view has {} labels for {} tokens in {:?}",
                    pos.len(),
                    tokens,
                    annotation.text
                );
            }
        }

        Ok(Self { annotation, parse })
    }

    pub fn text(&self) -> &str {
        &self.annotation.text
    }

    pub fn pos(&self) -> Result<&TokenLabelView> {
        self.annotation.pos.as_ref().ok_or(CommaError::MissingView(ViewName::Pos))
    }

    pub fn shallow_parse(&self) -> Result<&SpanLabelView> {
        self.annotation
            .shallow_parse
            .as_ref()
            .ok_or(CommaError::MissingView(ViewName::ShallowParse))
    }

    pub fn named_entities(&self) -> Result<&SpanLabelView> {
        self.annotation
            .named_entities
            .as_ref()
            .ok_or(CommaError::MissingView(ViewName::NamedEntities))
    }

    pub fn parse_tree(&self) -> Result<&ParseTree> {
        self.parse.as_ref().ok_or(CommaError::MissingView(ViewName::Parse))
    }

    /// One of the three predicate-argument views.
    pub fn srl(&self, view: ViewName) -> Result<&PredicateArgumentView> {
        let found = match view {
            ViewName::SrlVerb => self.annotation.srl_verb.as_ref(),
            ViewName::SrlNom => self.annotation.srl_nom.as_ref(),
            ViewName::SrlPrep => self.annotation.srl_prep.as_ref(),
            _ => None,
        };
        found.ok_or(CommaError::MissingView(view))
    }
}
