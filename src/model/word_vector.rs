use std::collections::BTreeMap;

use crate::foundation::error::{CloudError, CloudResult};

/// Word weights of one timestamp, rankable by descending weight.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct WordVector {
    weights: BTreeMap<String, f64>,
}

impl WordVector {
    /// Empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight of `word`, replacing any earlier value.
    pub fn add(&mut self, word: impl Into<String>, weight: f64) {
        self.weights.insert(word.into(), weight);
    }

    /// Add several `(word, weight)` pairs.
    pub fn add_multiple<I, S>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        for (word, weight) in pairs {
            self.add(word, weight);
        }
    }

    /// Build from `(word, weight)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut out = Self::new();
        out.add_multiple(pairs);
        out
    }

    /// Weight of `word`, if present.
    pub fn get_weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// `true` when no word has a weight.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Slice `[start, end)` of the ranking, heaviest first. Equal weights are
    /// ordered by word text. `end` past the length is clamped.
    pub fn ranking(&self, start: usize, end: usize) -> Vec<(String, f64)> {
        let mut ranked: Vec<(&String, f64)> = self.weights.iter().map(|(w, v)| (w, *v)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let end = end.min(ranked.len());
        if start >= end {
            return Vec::new();
        }
        ranked[start..end]
            .iter()
            .map(|(w, v)| ((*w).clone(), *v))
            .collect()
    }

    /// Reject weights that cannot be ranked.
    pub fn validate(&self) -> CloudResult<()> {
        for (word, weight) in &self.weights {
            if !weight.is_finite() {
                return Err(CloudError::validation(format!(
                    "weight of word '{word}' must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Word weights at one named point in time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeFrame {
    /// Time label shown for this timestamp.
    pub label: String,
    /// Word weights at this timestamp.
    pub weights: WordVector,
}

impl TimeFrame {
    /// Build a time frame.
    pub fn new(label: impl Into<String>, weights: WordVector) -> Self {
        Self {
            label: label.into(),
            weights,
        }
    }
}

/// Ordered series of [`TimeFrame`]s; the input of the whole pipeline.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TimelapseWordVector {
    timeframes: Vec<TimeFrame>,
}

impl TimelapseWordVector {
    /// Empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a timestamp.
    pub fn add_time_frame(&mut self, frame: TimeFrame) {
        self.timeframes.push(frame);
    }

    /// Build from `(label, [(word, weight)])` tuples.
    pub fn from_pairs<L, I, S>(data: impl IntoIterator<Item = (L, I)>) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut out = Self::new();
        for (label, pairs) in data {
            out.add_time_frame(TimeFrame::new(label, WordVector::from_pairs(pairs)));
        }
        out
    }

    /// Timestamp at `index`.
    pub fn get(&self, index: usize) -> Option<&TimeFrame> {
        self.timeframes.get(index)
    }

    /// Number of timestamps.
    pub fn len(&self) -> usize {
        self.timeframes.len()
    }

    /// `true` when there is no timestamp.
    pub fn is_empty(&self) -> bool {
        self.timeframes.is_empty()
    }

    /// Timestamps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimeFrame> {
        self.timeframes.iter()
    }

    /// Validate every timestamp's weights.
    pub fn validate(&self) -> CloudResult<()> {
        for frame in &self.timeframes {
            frame.weights.validate().map_err(|e| {
                CloudError::validation(format!("timestamp '{}': {e}", frame.label))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/word_vector.rs"]
mod tests;
