use std::sync::Arc;

use anyhow::{Context, Result};
use comma_context::{AnnotationBundle, Comma, CommaConfig, CommaContext};
use comma_protocol::SentenceRecord;
use serde::Serialize;

/// Query results for one comma, at distances `1..=N` in each direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommaFeatures {
    pub sentence: usize,
    pub position: usize,
    pub role: Option<String>,
    pub words_left: Vec<String>,
    pub words_right: Vec<String>,
    pub pos_left: Vec<String>,
    pub pos_right: Vec<String>,
    pub chunks_left: Vec<String>,
    pub chunks_right: Vec<String>,
    pub phrases_left: Vec<String>,
    pub phrases_right: Vec<String>,
    pub parent_left: Vec<String>,
    pub parent_right: Vec<String>,
    pub srls: Vec<String>,
}

/// Run every query for one comma.
pub fn describe(ctx: &CommaContext<'_>, sentence: usize, max_distance: usize) -> comma_context::Result<CommaFeatures> {
    let comma = ctx.comma();
    let distances = 1..=max_distance;

    let mut features = CommaFeatures {
        sentence,
        position: comma.position(),
        role: comma.role().map(str::to_string),
        words_left: distances.clone().map(|d| ctx.word_to_left(d).to_string()).collect(),
        words_right: distances.clone().map(|d| ctx.word_to_right(d).to_string()).collect(),
        pos_left: Vec::with_capacity(max_distance),
        pos_right: Vec::with_capacity(max_distance),
        chunks_left: Vec::with_capacity(max_distance),
        chunks_right: Vec::with_capacity(max_distance),
        phrases_left: Vec::with_capacity(max_distance),
        phrases_right: Vec::with_capacity(max_distance),
        parent_left: Vec::with_capacity(max_distance),
        parent_right: Vec::with_capacity(max_distance),
        srls: ctx.containing_srls()?,
    };

    for d in distances {
        features.pos_left.push(ctx.pos_to_left(d)?.to_string());
        features.pos_right.push(ctx.pos_to_right(d)?.to_string());
        features.chunks_left.push(ctx.notation(ctx.chunk_to_left(d)?)?);
        features.chunks_right.push(ctx.notation(ctx.chunk_to_right(d)?)?);
        features.phrases_left.push(ctx.notation(ctx.phrase_to_left_of_comma(d)?)?);
        features.phrases_right.push(ctx.notation(ctx.phrase_to_right_of_comma(d)?)?);
        features.parent_left.push(ctx.notation(ctx.phrase_to_left_of_parent(d)?)?);
        features.parent_right.push(ctx.notation(ctx.phrase_to_right_of_parent(d)?)?);
    }

    Ok(features)
}

/// Build the commas of one sentence and describe each of them.
///
/// The first annotation mismatch aborts the sentence with context naming it.
pub fn describe_sentence(
    index: usize,
    record: SentenceRecord,
    config: CommaConfig,
    max_distance: usize,
) -> Result<Vec<CommaFeatures>> {
    let text = record.annotation.text.clone();
    let bundle = Arc::new(
        AnnotationBundle::new(record.annotation).with_context(|| format!("sentence {}: predicted annotation", index))?,
    );
    let gold = record
        .gold
        .map(AnnotationBundle::new)
        .transpose()
        .with_context(|| format!("sentence {}: gold annotation", index))?
        .map(Arc::new);

    let mut described = Vec::with_capacity(record.commas.len());
    for entry in &record.commas {
        let mut comma = Comma::new(entry.position, entry.role.as_deref(), &text, Arc::clone(&bundle))
            .with_context(|| format!("sentence {}: comma at {}", index, entry.position))?;
        if let Some(gold) = &gold {
            comma = comma.with_gold(Arc::clone(gold));
        }

        let ctx = CommaContext::new(&comma, config);
        let features = describe(&ctx, index, max_distance)
            .with_context(|| format!("sentence {} {:?}: comma at {}", index, text, entry.position))?;
        described.push(features);
    }
    Ok(described)
}
