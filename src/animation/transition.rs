//! Synthetic frames between consecutive keyframes.

use crate::{
    animation::interp::InterpolationMethod,
    foundation::error::CloudResult,
    model::allocation::{AllocationInFrame, AllocationTimelapse},
};

/// Both frames of a pair completed with the words only the other one has,
/// copied from the other frame, so every word has a start and an end.
fn reconcile(from: &AllocationInFrame, to: &AllocationInFrame) -> CloudResult<(AllocationInFrame, AllocationInFrame)> {
    let mut from_full = from.clone();
    let mut to_full = to.clone();
    for (word, placement) in to.iter() {
        if !from_full.contains(word) {
            from_full.insert(word, *placement)?;
        }
    }
    for (word, placement) in from.iter() {
        if !to_full.contains(word) {
            to_full.insert(word, *placement)?;
        }
    }
    Ok((from_full, to_full))
}

/// Synthetic frames strictly between `from` and `to`.
pub fn transition_frames(
    from: &AllocationInFrame,
    to: &AllocationInFrame,
    frames_per_transition: usize,
    method: InterpolationMethod,
) -> CloudResult<Vec<AllocationInFrame>> {
    let (from_full, to_full) = reconcile(from, to)?;
    let mut out = Vec::with_capacity(frames_per_transition);
    for step in 1..=frames_per_transition {
        let mut frame = AllocationInFrame::transition();
        for (word, start) in from_full.iter() {
            let Some(end) = to_full.get(word) else {
                continue;
            };
            frame.insert(word, method.placement(start, end, step, frames_per_transition))?;
        }
        out.push(frame);
    }
    Ok(out)
}

/// Insert `frames_per_transition` synthetic frames between every pair of
/// consecutive frames of `static_frames`.
///
/// Static frames are copied unchanged and each appears exactly once. A
/// synthetic frame is labelled `from_label + separator + to_label`.
#[tracing::instrument(skip(static_frames), fields(keyframes = static_frames.len()))]
pub fn interpolate(
    static_frames: &AllocationTimelapse,
    frames_per_transition: usize,
    separator: &str,
    method: InterpolationMethod,
) -> CloudResult<AllocationTimelapse> {
    let frames = static_frames.frames();
    let mut out = AllocationTimelapse::new();
    let Some(first) = frames.first() else {
        return Ok(out);
    };
    out.push(first.label.as_str(), first.allocation.clone());

    for pair in frames.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let label = format!("{}{separator}{}", from.label, to.label);
        for frame in transition_frames(&from.allocation, &to.allocation, frames_per_transition, method)? {
            out.push(label.as_str(), frame);
        }
        out.push(to.label.as_str(), to.allocation.clone());
    }
    tracing::debug!(frames = out.len(), "interpolation done");
    Ok(out)
}

/// [`interpolate`] with the method given by name; an unknown name fails
/// before any frame is produced.
pub fn interpolate_named(
    static_frames: &AllocationTimelapse,
    frames_per_transition: usize,
    separator: &str,
    method: &str,
) -> CloudResult<AllocationTimelapse> {
    let method: InterpolationMethod = method.parse()?;
    interpolate(static_frames, frames_per_transition, separator, method)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
