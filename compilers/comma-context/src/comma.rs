use std::sync::Arc;

use crate::bundle::AnnotationBundle;
use crate::error::{CommaError, Result};
use crate::role::normalize_role;

/// One comma occurrence awaiting role classification.
#[derive(Debug, Clone)]
pub struct Comma {
    position: usize,
    role: Option<String>,
    tokens: Vec<String>,
    annotation: Arc<AnnotationBundle>,
    gold: Option<Arc<AnnotationBundle>>,
    /// Set by `for_prediction`; such a comma never takes a gold bundle.
    predicting: bool,
}

impl Comma {
    /// Training constructor: `role` is the gold label, if the corpus has one.
    pub fn new(
        position: usize,
        role: Option<&str>,
        sentence: &str,
        annotation: Arc<AnnotationBundle>,
    ) -> Result<Self> {
        let tokens: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
        if position >= tokens.len() {
            return Err(CommaError::PositionOutOfRange { position, len: tokens.len() });
        }
        if tokens[position] != "," {
            log::debug!("token {} of {:?} is {:?}, not a comma", position, sentence, tokens[position]);
        }

        Ok(Self {
            position,
            role: role.map(|r| normalize_role(r).to_string()),
            tokens,
            annotation,
            gold: None,
            predicting: false,
        })
    }

    /// Prediction constructor: no gold label and no gold annotations.
    pub fn for_prediction(position: usize, sentence: &str, annotation: Arc<AnnotationBundle>) -> Result<Self> {
        let mut comma = Self::new(position, None, sentence, annotation)?;
        comma.predicting = true;
        Ok(comma)
    }

    /// Attach gold-standard annotations for training and evaluation.
    ///
    /// Ignored for a comma built with [`Comma::for_prediction`].
    pub fn with_gold(mut self, gold: Arc<AnnotationBundle>) -> Self {
        if self.predicting {
            log::warn!("ignoring gold annotations for prediction comma at {}", self.position);
            return self;
        }
        self.gold = Some(gold);
        self
    }

    pub fn is_prediction(&self) -> bool {
        self.predicting
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn annotation(&self) -> &AnnotationBundle {
        &self.annotation
    }

    pub fn gold(&self) -> Option<&AnnotationBundle> {
        self.gold.as_deref()
    }
}
