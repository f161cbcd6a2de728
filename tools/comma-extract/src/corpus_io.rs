use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use comma_protocol::Corpus;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::AlignedVec;

/// Extension that marks a corpus as an rkyv archive rather than JSON.
pub const ARCHIVE_EXTENSION: &str = "rkyv";

pub fn is_archive(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == ARCHIVE_EXTENSION)
}

pub fn read_json(path: &Path) -> Result<Corpus> {
    let input = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&input).with_context(|| format!("parsing corpus JSON {}", path.display()))
}

/// Validate and deserialize an archive written by [`write_archive`].
pub fn read_archive(path: &Path) -> Result<Corpus> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    // Archived data must be aligned before validation
    let mut bytes = AlignedVec::with_capacity(raw.len());
    bytes.extend_from_slice(&raw);

    rkyv::from_bytes::<Corpus>(&bytes)
        .map_err(|e| anyhow!("invalid corpus archive {}: {:?}", path.display(), e))
}

pub fn read_corpus(path: &Path) -> Result<Corpus> {
    if is_archive(path) {
        read_archive(path)
    } else {
        read_json(path)
    }
}

pub fn write_archive(corpus: &Corpus, path: &Path) -> Result<usize> {
    let mut serializer = AllocSerializer::<4096>::default();
    serializer
        .serialize_value(corpus)
        .map_err(|e| anyhow!("serializing corpus: {:?}", e))?;
    let bytes = serializer.into_serializer().into_inner();

    fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(bytes.len())
}
