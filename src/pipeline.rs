use crate::{
    animation::transition::interpolate,
    config::CloudConfig,
    foundation::error::CloudResult,
    foundation::math::{RandomSource, Rng64},
    layout::random::allocate_randomly,
    layout::strategy::StaticAllocation,
    model::allocation::{AllocationInFrame, AllocationTimelapse},
    model::word::{TextMeasurer, Word, calculate_font_size},
    model::word_vector::{TimelapseWordVector, WordVector},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Every frame of an animation together with its display time.
pub struct AnimationOutput {
    /// Keyframes and transition frames in display order.
    pub frames: AllocationTimelapse,
    /// Display time of each frame in milliseconds, aligned with `frames`.
    pub durations_ms: Vec<u64>,
}

/// Ranked words of one timestamp: the `max_words` heaviest, each with its
/// font size and measured text box.
pub fn build_words(vector: &WordVector, config: &CloudConfig, measurer: &dyn TextMeasurer) -> Vec<Word> {
    let ranked = vector.ranking(0, config.max_words);
    let (Some(heaviest), Some(lightest)) = (ranked.first(), ranked.last()) else {
        return Vec::new();
    };
    let (weight_max, weight_min) = (heaviest.1, lightest.1);
    if vector.len() > ranked.len() {
        tracing::debug!(dropped = vector.len() - ranked.len(), "lighter words dropped");
    }

    ranked
        .into_iter()
        .map(|(text, weight)| {
            let font_size = calculate_font_size(
                weight,
                weight_max,
                weight_min,
                config.max_font_size,
                config.min_font_size,
            );
            let text_size = measurer.measure(&text, font_size);
            Word::new(text, weight, font_size, text_size)
        })
        .collect()
}

/// Opening keyframe: the first timestamp's words at the minimum font size,
/// parked off-canvas.
fn opening_frame(
    first: &WordVector,
    config: &CloudConfig,
    measurer: &dyn TextMeasurer,
    rng: &mut dyn RandomSource,
) -> CloudResult<AllocationInFrame> {
    let words: Vec<Word> = build_words(first, config, measurer)
        .into_iter()
        .map(|w| {
            let size = measurer.measure(&w.text, config.min_font_size);
            Word::new(w.text, w.weight, config.min_font_size, size)
        })
        .collect();
    allocate_randomly(&words, config.canvas, rng)
}

/// One keyframe per timestamp, preceded by the opening frame when
/// `config.starting_label` is set.
///
/// New words enter from outside the canvas: their entry anchors are appended
/// to the keyframe before the one that introduces them.
#[tracing::instrument(skip(timelapse, config, measurer, rng), fields(timestamps = timelapse.len()))]
pub fn allocate_all(
    timelapse: &TimelapseWordVector,
    config: &CloudConfig,
    measurer: &dyn TextMeasurer,
    rng: &mut dyn RandomSource,
) -> CloudResult<AllocationTimelapse> {
    let strategy = config.strategy()?;
    let mut out = AllocationTimelapse::new();
    let Some(first) = timelapse.get(0) else {
        return Ok(out);
    };

    let mut previous: Option<(String, AllocationInFrame)> = match &config.starting_label {
        Some(label) => Some((label.clone(), opening_frame(&first.weights, config, measurer, rng)?)),
        None => None,
    };

    let empty = AllocationInFrame::keyframe();
    for timeframe in timelapse.iter() {
        let words = build_words(&timeframe.weights, config, measurer);
        let prev_frame = previous.as_ref().map_or(&empty, |(_, f)| f);
        let StaticAllocation {
            frame,
            entry_anchors,
        } = strategy.allocate_with_anchors(&words, prev_frame, rng)?;

        if let Some((label, mut prev)) = previous.take() {
            for (word, placement) in entry_anchors {
                if !prev.contains(&word) {
                    prev.insert(word, placement)?;
                }
            }
            out.push(label, prev);
        }
        tracing::debug!(label = %timeframe.label, words = frame.len(), "keyframe allocated");
        previous = Some((timeframe.label.clone(), frame));
    }
    if let Some((label, frame)) = previous {
        out.push(label, frame);
    }
    Ok(out)
}

/// Full animation: keyframes for every timestamp plus the transition frames
/// between them.
///
/// The interpolation method is checked before any allocation runs.
#[tracing::instrument(skip(timelapse, config, measurer))]
pub fn animate(
    timelapse: &TimelapseWordVector,
    config: &CloudConfig,
    measurer: &dyn TextMeasurer,
) -> CloudResult<AllocationTimelapse> {
    let method = config.interpolation()?;
    config.validate()?;
    timelapse.validate()?;

    let mut rng = Rng64::new(config.seed);
    let keyframes = allocate_all(timelapse, config, measurer, &mut rng)?;
    interpolate(
        &keyframes,
        config.n_frames_for_interpolation,
        &config.transition_symbol,
        method,
    )
}

/// Display time of every frame: keyframes are held for
/// `keyframe_duration_ms`, transition frames last `duration_per_frame_ms`.
pub fn frame_durations(timelapse: &AllocationTimelapse, config: &CloudConfig) -> Vec<u64> {
    timelapse
        .frames()
        .iter()
        .map(|f| {
            if f.allocation.is_static_keyframe() {
                config.keyframe_duration_ms
            } else {
                config.duration_per_frame_ms
            }
        })
        .collect()
}

/// [`animate`] plus [`frame_durations`].
pub fn animate_with_durations(
    timelapse: &TimelapseWordVector,
    config: &CloudConfig,
    measurer: &dyn TextMeasurer,
) -> CloudResult<AnimationOutput> {
    let frames = animate(timelapse, config, measurer)?;
    let durations_ms = frame_durations(&frames, config);
    Ok(AnimationOutput {
        frames,
        durations_ms,
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
