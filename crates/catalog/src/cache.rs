use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use embedding::{Embedding, ScaledEmbedding, Scaler};

use crate::error::CatalogError;

/// Immutable, process-lifetime mapping from jewelry-item name to its scaled
/// embedding, plus the ordered name sequence the ranker indexes into.
///
/// Names are unique and stored in the load-time order (lexicographic); the
/// scoring network must emit one value per position in exactly that order.
pub struct CatalogCache {
    names: Vec<String>,
    embeddings: Vec<ScaledEmbedding>,
}

impl CatalogCache {
    /// Load the raw catalog artifact: a JSON object mapping item name to a
    /// D-dimensional vector (or null). Entries that are null, non-numeric,
    /// or of the wrong dimensionality are dropped, not surfaced.
    pub fn load(path: impl AsRef<Path>, scaler: &Scaler) -> Result<Self, CatalogError> {
        let bytes = std::fs::read(path.as_ref())?;
        let raw: BTreeMap<String, Value> =
            serde_json::from_slice(&bytes).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let entries = raw
            .into_iter()
            .map(|(name, value)| (name, parse_vector(&value)));
        Ok(Self::from_raw(entries, scaler))
    }

    /// Build the cache from already-parsed raw vectors, applying the same
    /// drop-and-scale rules as [`load`](Self::load). Entry order is kept
    /// as-is and becomes the positional contract with the scoring network;
    /// [`load`](Self::load) always supplies lexicographic name order, so the
    /// network's output layout must be keyed the same way at export time.
    pub fn from_raw<I>(entries: I, scaler: &Scaler) -> Self
    where
        I: IntoIterator<Item = (String, Option<Vec<f32>>)>,
    {
        let mut names = Vec::new();
        let mut embeddings = Vec::new();
        let mut dropped = 0usize;

        for (name, vector) in entries {
            let Some(vector) = vector else {
                dropped += 1;
                continue;
            };
            if vector.len() != scaler.dim() {
                dropped += 1;
                continue;
            }
            match scaler.transform(Embedding::new(vector)) {
                Ok(scaled) => {
                    names.push(name);
                    embeddings.push(scaled);
                }
                Err(_) => dropped += 1,
            }
        }

        if dropped > 0 {
            warn!(dropped, kept = names.len(), "dropped malformed catalog entries");
        } else {
            debug!(kept = names.len(), "catalog built");
        }

        Self { names, embeddings }
    }

    /// Test/bootstrap constructor for entries that are already scaled.
    pub fn from_entries(entries: Vec<(String, ScaledEmbedding)>) -> Self {
        let (names, embeddings) = entries.into_iter().unzip();
        Self { names, embeddings }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The ordered name sequence; position `i` here corresponds to the
    /// scoring network's output position `i`.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn embedding(&self, name: &str) -> Option<&ScaledEmbedding> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.embeddings[i])
    }

    pub fn get(&self, index: usize) -> Option<(&str, &ScaledEmbedding)> {
        self.names
            .get(index)
            .map(|n| (n.as_str(), &self.embeddings[index]))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScaledEmbedding)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.embeddings.iter())
    }
}

/// Interpret one raw JSON value as a finite f32 vector. Anything else — null,
/// scalars, arrays with non-numeric elements — becomes `None` and is dropped
/// by the caller.
fn parse_vector(value: &Value) -> Option<Vec<f32>> {
    let items = value.as_array()?;
    let mut vector = Vec::with_capacity(items.len());
    for item in items {
        vector.push(item.as_f64()? as f32);
    }
    Some(vector)
}
