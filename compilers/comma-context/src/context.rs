use comma_protocol::{CommaConfig, Constituent, NodeId, Span, TokenLabelView, ViewName};
use comma_tree::{ParseNode, ParseTree};

use crate::bundle::AnnotationBundle;
use crate::comma::Comma;
use crate::error::{CommaError, Result};

/// Stand-in word and tag for positions before the first token.
pub const SENTENCE_START: &str = "$$$";
/// Stand-in word and tag for positions past the last token.
pub const SENTENCE_END: &str = "###";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

/// Directional queries around one comma.
///
/// Tags, chunks, trees and verb/nominal roles come from the gold bundle when
/// the configuration asks for gold and the comma carries one. Named entities
/// and prepositional roles always come from the predicted bundle.
#[derive(Debug, Clone, Copy)]
pub struct CommaContext<'a> {
    comma: &'a Comma,
    config: CommaConfig,
    gold: Option<&'a AnnotationBundle>,
}

impl<'a> CommaContext<'a> {
    pub fn new(comma: &'a Comma, config: CommaConfig) -> Self {
        let gold = if config.use_gold {
            if comma.gold().is_none() {
                log::debug!(
                    "gold annotations requested for comma at {} but none attached; using predicted views",
                    comma.position()
                );
            }
            comma.gold()
        } else {
            None
        };
        Self { comma, config, gold }
    }

    pub fn comma(&self) -> &'a Comma {
        self.comma
    }

    pub fn config(&self) -> CommaConfig {
        self.config
    }

    pub fn uses_gold(&self) -> bool {
        self.gold.is_some()
    }

    /// Bundle for views that honor the gold setting.
    fn selected(&self) -> &'a AnnotationBundle {
        match self.gold {
            Some(gold) => gold,
            None => self.comma.annotation(),
        }
    }

    fn predicted(&self) -> &'a AnnotationBundle {
        self.comma.annotation()
    }

    fn token_index(&self, distance: usize, direction: Direction) -> std::result::Result<usize, &'static str> {
        let position = self.comma.position();
        match direction {
            Direction::Left => position.checked_sub(distance).ok_or(SENTENCE_START),
            Direction::Right => position
                .checked_add(distance)
                .filter(|&i| i < self.comma.tokens().len())
                .ok_or(SENTENCE_END),
        }
    }

    // ---- words ----

    pub fn word_to_left(&self, distance: usize) -> &'a str {
        self.word_at(distance, Direction::Left)
    }

    pub fn word_to_right(&self, distance: usize) -> &'a str {
        self.word_at(distance, Direction::Right)
    }

    fn word_at(&self, distance: usize, direction: Direction) -> &'a str {
        match self.token_index(distance, direction) {
            Ok(index) => &self.comma.tokens()[index],
            Err(sentinel) => sentinel,
        }
    }

    // ---- part-of-speech tags ----

    /// Tag of the token `distance` places left of the comma, or [`SENTENCE_START`].
    pub fn pos_to_left(&self, distance: usize) -> Result<&'a str> {
        self.pos_at(distance, Direction::Left)
    }

    /// Tag of the token `distance` places right of the comma, or [`SENTENCE_END`].
    pub fn pos_to_right(&self, distance: usize) -> Result<&'a str> {
        self.pos_at(distance, Direction::Right)
    }

    fn pos_at(&self, distance: usize, direction: Direction) -> Result<&'a str> {
        match self.token_index(distance, direction) {
            Ok(index) => pos_label(self.selected().pos()?, index),
            Err(sentinel) => Ok(sentinel),
        }
    }

    // ---- shallow parse chunks ----

    /// The `distance`-th chunk starting after the comma, nearest first.
    pub fn chunk_to_right(&self, distance: usize) -> Result<Option<&'a Constituent>> {
        let start = self.comma.position() + 1;
        let mut chunks = self.selected().shallow_parse()?.starting_in(start, self.comma.tokens().len());
        chunks.sort_by_key(|c| c.span.start);
        Ok(nth_nearest(&chunks, distance))
    }

    /// The `distance`-th chunk starting at or before the comma, nearest first.
    pub fn chunk_to_left(&self, distance: usize) -> Result<Option<&'a Constituent>> {
        let mut chunks = self.selected().shallow_parse()?.starting_in(0, self.comma.position() + 1);
        chunks.sort_by(|a, b| b.span.start.cmp(&a.span.start));
        Ok(nth_nearest(&chunks, distance))
    }

    // ---- parse tree phrases ----

    pub fn phrase_to_left_of_comma(&self, distance: usize) -> Result<Option<&'a ParseNode>> {
        let (tree, comma) = self.comma_node()?;
        Ok(walk_siblings(tree, comma, distance, Direction::Left))
    }

    pub fn phrase_to_right_of_comma(&self, distance: usize) -> Result<Option<&'a ParseNode>> {
        let (tree, comma) = self.comma_node()?;
        Ok(walk_siblings(tree, comma, distance, Direction::Right))
    }

    pub fn phrase_to_left_of_parent(&self, distance: usize) -> Result<Option<&'a ParseNode>> {
        let (tree, comma) = self.comma_node()?;
        Ok(tree
            .parent(comma)
            .and_then(|parent| walk_siblings(tree, parent, distance, Direction::Left)))
    }

    pub fn phrase_to_right_of_parent(&self, distance: usize) -> Result<Option<&'a ParseNode>> {
        let (tree, comma) = self.comma_node()?;
        Ok(tree
            .parent(comma)
            .and_then(|parent| walk_siblings(tree, parent, distance, Direction::Right)))
    }

    /// The tree node spanning exactly the comma token.
    ///
    /// A tree without one does not belong to this sentence, which is reported
    /// as [`CommaError::CommaNotInTree`].
    pub fn comma_node(&self) -> Result<(&'a ParseTree, NodeId)> {
        let tree = self.selected().parse_tree()?;
        let position = self.comma.position();
        match tree.find_exact(Span::token(position)) {
            Some(node) => Ok((tree, node)),
            None => {
                log::error!(
                    "parse tree of {:?} has no node over the comma at token {}",
                    self.selected().text(),
                    position
                );
                Err(CommaError::CommaNotInTree { position })
            }
        }
    }

    // ---- semantic roles ----

    /// `lemma + relation` for every role argument that starts at or after the
    /// comma and ends past it, over verb, nominal and prepositional predicates.
    pub fn containing_srls(&self) -> Result<Vec<String>> {
        let position = self.comma.position();
        let sources = [
            (self.selected(), ViewName::SrlVerb),
            (self.selected(), ViewName::SrlNom),
            (self.predicted(), ViewName::SrlPrep),
        ];

        let mut roles = Vec::new();
        for (bundle, view) in sources {
            for (lemma, argument) in bundle.srl(view)?.relations() {
                if argument.span.end > position && argument.span.start >= position {
                    roles.push(format!("{}{}", lemma, argument.relation));
                }
            }
        }
        Ok(roles)
    }

    // ---- accessors used by notation ----

    pub(crate) fn selected_pos(&self) -> Result<&'a TokenLabelView> {
        self.selected().pos()
    }

    pub(crate) fn predicted_bundle(&self) -> &'a AnnotationBundle {
        self.predicted()
    }
}

pub(crate) fn pos_label(view: &TokenLabelView, index: usize) -> Result<&str> {
    view.label(index).ok_or(CommaError::ViewTooShort {
        view: ViewName::Pos,
        index,
        len: view.len(),
    })
}

fn nth_nearest<'a>(sorted: &[&'a Constituent], distance: usize) -> Option<&'a Constituent> {
    distance.checked_sub(1).and_then(|i| sorted.get(i).copied())
}

/// Step `distance` times across adjacent siblings; `None` at the first gap.
fn walk_siblings(tree: &ParseTree, anchor: NodeId, distance: usize, direction: Direction) -> Option<&ParseNode> {
    let mut current = anchor;
    for _ in 0..distance {
        current = match direction {
            Direction::Left => tree.left_sibling(current)?,
            Direction::Right => tree.right_sibling(current)?,
        };
    }
    Some(tree.node(current))
}
