//! Layout engine for animated word clouds.
//!
//! The input is a [`TimelapseWordVector`]: word weights at a series of
//! labelled timestamps. The output is an [`AllocationTimelapse`]: where every
//! word is drawn, and how large, in every frame of the animation.
//!
//! # Pipeline overview
//!
//! 1. **Rank**: the heaviest `max_words` words of a timestamp get a font size
//!    and a measured text box ([`build_words`]).
//! 2. **Allocate**: one static keyframe per timestamp. The magnetic strategy
//!    puts the heaviest word at the canvas center and docks every further word
//!    against the frontier of the mass, close to its previous position
//!    ([`MagneticAllocator`]). Words entering or leaving the cloud are parked
//!    just outside the canvas ([`place_peripheral`]).
//! 3. **Interpolate**: synthetic frames between consecutive keyframes; the
//!    keyframes themselves are kept bit for bit ([`interpolate`]).
//!
//! [`animate`] runs all three steps. Rasterizing the frames and assembling
//! them into a video are left to the caller.
//!
//! The core does no IO, and a given config and seed always produce the same
//! frames.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod foundation;
mod layout;
mod model;
mod pipeline;

pub use animation::interp::InterpolationMethod;
pub use animation::transition::{interpolate, interpolate_named, transition_frames};
pub use config::CloudConfig;
pub use foundation::collision::{
    first_hitting_pair, point_hits_rect, rect_overlaps_any, rects_hit, rects_overlap_strict,
};
pub use foundation::core::{Canvas, Point, Rect, Size, Vec2, rect_at, rect_centered};
pub use foundation::error::{CloudError, CloudResult};
pub use foundation::math::{FixedSequence, RandomSource, Rng64};
pub use layout::frontier::{FrontierGrid, MagnetOuterFrontier, ScanDirection};
pub use layout::magnetic::{Candidate, MagneticAllocator, MagneticSettings};
pub use layout::peripheral::place_peripheral;
pub use layout::random::allocate_randomly;
pub use layout::strategy::{AllocationStrategy, StaticAllocation, StrategyKind};
pub use model::allocation::{AllocationInFrame, AllocationTimelapse, LabeledFrame, WordPlacement};
pub use model::word::{
    EstimatedTextMeasurer, TextMeasurer, Word, calculate_font_size, estimate_text_size,
};
pub use model::word_vector::{TimeFrame, TimelapseWordVector, WordVector};
pub use pipeline::{
    AnimationOutput, allocate_all, animate, animate_with_durations, build_words, frame_durations,
};
