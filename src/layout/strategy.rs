use crate::{
    foundation::collision::rects_overlap_strict,
    foundation::core::Canvas,
    foundation::error::CloudResult,
    foundation::math::RandomSource,
    layout::magnetic::MagneticAllocator,
    layout::peripheral::place_peripheral,
    layout::random::allocate_randomly,
    model::allocation::{AllocationInFrame, WordPlacement},
    model::word::{Word, estimate_text_size},
};

/// Strategy selector as written in configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Pack words against the growing mass at the canvas center.
    #[default]
    Magnetic,
    /// Scatter every word around the canvas, outside of it.
    Random,
}

/// Result of one static allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticAllocation {
    /// Keyframe of the current timestamp.
    pub frame: AllocationInFrame,
    /// Provisional off-canvas placements of words that were missing from the
    /// previous frame. Appending them to the previous keyframe makes those
    /// words fly in instead of popping up.
    pub entry_anchors: Vec<(String, WordPlacement)>,
}

/// Closed set of static allocation strategies behind one entry point.
#[derive(Clone, Debug)]
pub enum AllocationStrategy {
    /// See [`MagneticAllocator`].
    Magnetic(MagneticAllocator),
    /// See [`allocate_randomly`].
    Random {
        /// Canvas the words are scattered around.
        canvas: Canvas,
    },
}

impl AllocationStrategy {
    /// Allocate ranked `words` (heaviest first) for one timestamp.
    ///
    /// `previous` is the keyframe of the preceding timestamp and is only read.
    pub fn allocate(
        &self,
        words: &[Word],
        previous: &AllocationInFrame,
        rng: &mut dyn RandomSource,
    ) -> CloudResult<AllocationInFrame> {
        self.allocate_with_anchors(words, previous, rng)
            .map(|out| out.frame)
    }

    /// Like [`Self::allocate`], also returning the entry anchors of new words.
    pub fn allocate_with_anchors(
        &self,
        words: &[Word],
        previous: &AllocationInFrame,
        rng: &mut dyn RandomSource,
    ) -> CloudResult<StaticAllocation> {
        match self {
            Self::Magnetic(m) => m.allocate(words, previous, rng),
            Self::Random { canvas } => {
                let mut frame = allocate_randomly(words, *canvas, rng)?;
                append_exits(&mut frame, previous, *canvas, rng)?;
                Ok(StaticAllocation {
                    frame,
                    entry_anchors: Vec::new(),
                })
            }
        }
    }

    /// Canvas the strategy allocates for.
    pub fn canvas(&self) -> Canvas {
        match self {
            Self::Magnetic(m) => m.canvas(),
            Self::Random { canvas } => *canvas,
        }
    }
}

/// Off-canvas provisional placements for words absent from `previous`, in
/// rank order.
pub(crate) fn entry_anchors(
    words: &[Word],
    previous: &AllocationInFrame,
    canvas: Canvas,
    rng: &mut dyn RandomSource,
) -> Vec<(String, WordPlacement)> {
    words
        .iter()
        .filter(|w| !previous.contains(&w.text))
        .map(|w| {
            let left_top = place_peripheral(canvas, w.text_size, rng);
            (w.text.clone(), WordPlacement::new(w.font_size, left_top))
        })
        .collect()
}

/// Append every word of `previous` missing from `frame` at an off-canvas
/// position, keeping its previous font size, so it leaves the cloud smoothly.
///
/// Words already parked outside the canvas keep their placement, so they do
/// not cross the canvas again in later transitions.
pub(crate) fn append_exits(
    frame: &mut AllocationInFrame,
    previous: &AllocationInFrame,
    canvas: Canvas,
    rng: &mut dyn RandomSource,
) -> CloudResult<()> {
    let bounds = canvas.bounds();
    let missing: Vec<(&str, WordPlacement)> = previous
        .iter()
        .filter(|(text, _)| !frame.contains(text))
        .map(|(text, p)| (text, *p))
        .collect();

    let mut leaving = 0_usize;
    for (text, placement) in missing {
        let size = estimate_text_size(text, placement.font_size);
        if !rects_overlap_strict(&placement.rect(size), &bounds) {
            frame.insert(text, placement)?;
            continue;
        }
        leaving += 1;
        let left_top = place_peripheral(canvas, size, rng);
        frame.add(text, placement.font_size, left_top)?;
    }
    if leaving > 0 {
        tracing::trace!(leaving, "parking words that left the ranking");
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/strategy.rs"]
mod tests;
