use crate::{
    foundation::core::Canvas,
    foundation::error::CloudResult,
    foundation::math::RandomSource,
    layout::peripheral::place_peripheral,
    model::allocation::AllocationInFrame,
    model::word::Word,
};

/// Keyframe with every word parked just outside the canvas.
///
/// Used for the opening frame, so the first timestamp's words fly in.
pub fn allocate_randomly(
    words: &[Word],
    canvas: Canvas,
    rng: &mut dyn RandomSource,
) -> CloudResult<AllocationInFrame> {
    let mut out = AllocationInFrame::keyframe();
    for word in words {
        let left_top = place_peripheral(canvas, word.text_size, rng);
        out.add(word.text.as_str(), word.font_size, left_top)?;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/random.rs"]
mod tests;
