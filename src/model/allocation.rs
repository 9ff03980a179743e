use std::collections::BTreeMap;

use crate::foundation::core::{Point, Rect, Size};
use crate::foundation::error::{CloudError, CloudResult};

/// Where and how large one word is drawn in a frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WordPlacement {
    /// Font size used to draw the word.
    pub font_size: f64,
    /// Left-top corner of the word's text box.
    pub left_top: Point,
}

impl WordPlacement {
    /// Build a placement.
    pub fn new(font_size: f64, left_top: Point) -> Self {
        Self {
            font_size,
            left_top,
        }
    }

    /// Text box of this placement for a word measuring `size`.
    pub fn rect(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.left_top, size)
    }
}

/// Placements of every word in one frame.
///
/// Entries are append-only: a word can be added once and is never changed or
/// removed afterwards. Iteration is ordered by word text.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AllocationInFrame {
    is_static_keyframe: bool,
    words: BTreeMap<String, WordPlacement>,
}

impl AllocationInFrame {
    /// Empty frame with an explicit keyframe flag.
    pub fn new(is_static_keyframe: bool) -> Self {
        Self {
            is_static_keyframe,
            words: BTreeMap::new(),
        }
    }

    /// Empty static keyframe (one per timestamp).
    pub fn keyframe() -> Self {
        Self::new(true)
    }

    /// Empty synthetic transition frame.
    pub fn transition() -> Self {
        Self::new(false)
    }

    /// `true` for per-timestamp frames, `false` for interpolated ones.
    pub fn is_static_keyframe(&self) -> bool {
        self.is_static_keyframe
    }

    /// Add `word`. Fails if the word is already present.
    pub fn insert(&mut self, word: impl Into<String>, placement: WordPlacement) -> CloudResult<()> {
        let word = word.into();
        if self.words.contains_key(&word) {
            return Err(CloudError::validation(format!(
                "word '{word}' is already allocated in this frame"
            )));
        }
        self.words.insert(word, placement);
        Ok(())
    }

    /// Convenience over [`Self::insert`].
    pub fn add(
        &mut self,
        word: impl Into<String>,
        font_size: f64,
        left_top: Point,
    ) -> CloudResult<()> {
        self.insert(word, WordPlacement::new(font_size, left_top))
    }

    /// Placement of `word`, if allocated.
    pub fn get(&self, word: &str) -> Option<&WordPlacement> {
        self.words.get(word)
    }

    /// Whether `word` is allocated.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of allocated words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// `true` when no word is allocated.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in text order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    /// `(word, placement)` pairs in text order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordPlacement)> {
        self.words.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// One labelled frame of a timelapse.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LabeledFrame {
    /// Time label, e.g. `"2021"` or `"2021_to_2022"` for transitions.
    pub label: String,
    /// Word placements of the frame.
    pub allocation: AllocationInFrame,
}

/// Chronological, append-only sequence of labelled frames.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AllocationTimelapse {
    frames: Vec<LabeledFrame>,
}

impl AllocationTimelapse {
    /// Empty timelapse.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame at the end.
    pub fn push(&mut self, label: impl Into<String>, allocation: AllocationInFrame) {
        self.frames.push(LabeledFrame {
            label: label.into(),
            allocation,
        });
    }

    /// Frame at `index`.
    pub fn get_frame(&self, index: usize) -> Option<&AllocationInFrame> {
        self.frames.get(index).map(|f| &f.allocation)
    }

    /// Label of the frame at `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.frames.get(index).map(|f| f.label.as_str())
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when no frame was pushed.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames in insertion order.
    pub fn frames(&self) -> &[LabeledFrame] {
        &self.frames
    }

    /// Number of static keyframes.
    pub fn keyframe_count(&self) -> usize {
        self.frames
            .iter()
            .filter(|f| f.allocation.is_static_keyframe())
            .count()
    }
}

impl IntoIterator for AllocationTimelapse {
    type Item = LabeledFrame;
    type IntoIter = std::vec::IntoIter<LabeledFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

impl<'a> IntoIterator for &'a AllocationTimelapse {
    type Item = &'a LabeledFrame;
    type IntoIter = std::slice::Iter<'a, LabeledFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/allocation.rs"]
mod tests;
