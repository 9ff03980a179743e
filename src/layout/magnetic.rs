//! Magnetic static allocation: the heaviest word sits at the canvas center and
//! every following word docks against the outer frontier of the words placed
//! before it, at the position that keeps it closest to where it was in the
//! previous frame and to the canvas center.

use rayon::prelude::*;

use crate::{
    foundation::collision::rect_overlaps_any,
    foundation::core::{Canvas, Point, Rect, Size, Vec2, rect_centered},
    foundation::error::{CloudError, CloudResult},
    foundation::math::{RandomSource, distance_sq},
    layout::frontier::{FrontierGrid, MagnetOuterFrontier, ScanDirection},
    layout::strategy::{StaticAllocation, append_exits, entry_anchors},
    model::allocation::{AllocationInFrame, WordPlacement},
    model::word::Word,
};

/// Tunables of [`MagneticAllocator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticSettings {
    /// Frontier resolution: steps per canvas axis.
    pub image_division: u32,
    /// Free margin kept around every placed word, in pixels.
    pub collision_buffer: f64,
    /// Weight of the squared distance to the word's previous center.
    pub movement_weight: f64,
    /// Weight of the squared distance to the canvas center.
    pub center_weight: f64,
    /// Search the four sides on the rayon pool.
    pub parallel_sides: bool,
    /// Reject candidates that would stick out of the canvas.
    pub confine_to_canvas: bool,
}

impl Default for MagneticSettings {
    fn default() -> Self {
        Self {
            image_division: 300,
            collision_buffer: 1.0,
            movement_weight: 1.0,
            center_weight: 1.0,
            parallel_sides: false,
            confine_to_canvas: true,
        }
    }
}

/// Scored docking position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Center of the word if placed here.
    pub center: Point,
    /// Smaller is better.
    pub score: f64,
}

// Sides are searched in this order; on equal scores the earlier side wins.
const SIDE_ORDER: [ScanDirection; 4] = [
    ScanDirection::FromBelow,
    ScanDirection::FromAbove,
    ScanDirection::FromLeft,
    ScanDirection::FromRight,
];

/// Center offsets from a frontier point for one side: corner, edge, corner.
fn docking_offsets(dir: ScanDirection, half: Vec2) -> [Vec2; 3] {
    let (hx, hy) = (half.x, half.y);
    match dir {
        ScanDirection::FromBelow => [Vec2::new(hx, hy), Vec2::new(0.0, hy), Vec2::new(-hx, hy)],
        ScanDirection::FromAbove => [
            Vec2::new(hx, -hy),
            Vec2::new(0.0, -hy),
            Vec2::new(-hx, -hy),
        ],
        ScanDirection::FromLeft => [
            Vec2::new(-hx, -hy),
            Vec2::new(-hx, 0.0),
            Vec2::new(-hx, hy),
        ],
        ScanDirection::FromRight => [Vec2::new(hx, -hy), Vec2::new(hx, 0.0), Vec2::new(hx, hy)],
    }
}

/// Keep the first candidate with the strictly smallest score.
fn better(best: Option<Candidate>, next: Option<Candidate>) -> Option<Candidate> {
    match (best, next) {
        (Some(b), Some(n)) if n.score < b.score => Some(n),
        (None, n) => n,
        (b, _) => b,
    }
}

/// Frontier-packing allocator for one canvas.
#[derive(Clone, Debug)]
pub struct MagneticAllocator {
    grid: FrontierGrid,
    settings: MagneticSettings,
}

impl MagneticAllocator {
    /// Allocator for `canvas`.
    pub fn new(canvas: Canvas, settings: MagneticSettings) -> CloudResult<Self> {
        let grid = FrontierGrid::new(canvas, settings.image_division)?;
        for (name, v) in [
            ("collision_buffer", settings.collision_buffer),
            ("movement_weight", settings.movement_weight),
            ("center_weight", settings.center_weight),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(CloudError::validation(format!("{name} must be finite and >= 0")));
            }
        }
        Ok(Self { grid, settings })
    }

    /// Canvas this allocator packs into.
    pub fn canvas(&self) -> Canvas {
        self.grid.canvas()
    }

    /// Settings in use.
    pub fn settings(&self) -> &MagneticSettings {
        &self.settings
    }

    /// Allocate ranked `words` against the keyframe `previous`.
    ///
    /// Words new to this timestamp get an off-canvas entry anchor (returned in
    /// [`StaticAllocation::entry_anchors`]) that serves as their previous
    /// position. Words of `previous` that are no longer ranked are appended
    /// off-canvas with their previous font size.
    #[tracing::instrument(skip(self, words, previous, rng), fields(words = words.len()))]
    pub fn allocate(
        &self,
        words: &[Word],
        previous: &AllocationInFrame,
        rng: &mut dyn RandomSource,
    ) -> CloudResult<StaticAllocation> {
        let canvas = self.canvas();
        let mut frame = AllocationInFrame::keyframe();
        let Some((first, rest)) = words.split_first() else {
            append_exits(&mut frame, previous, canvas, rng)?;
            return Ok(StaticAllocation {
                frame,
                entry_anchors: Vec::new(),
            });
        };

        let anchors = entry_anchors(words, previous, canvas, rng);

        let first_rect = rect_centered(canvas.center(), first.text_size);
        frame.add(first.text.as_str(), first.font_size, first_rect.origin())?;
        let mut placed = vec![first_rect];
        let mut frontier = MagnetOuterFrontier::default();

        for word in rest {
            if let Some(last) = placed.last() {
                frontier = frontier.updated(&self.grid, &placed, last);
            }
            let origin = previous_center(word, previous, &anchors);
            let best = self
                .best_candidate(&frontier, &placed, word.text_size, origin)
                .ok_or_else(|| CloudError::space_exhausted(word.text.as_str()))?;

            let rect = rect_centered(best.center, word.text_size);
            frame.add(word.text.as_str(), word.font_size, rect.origin())?;
            placed.push(rect);
        }
        tracing::debug!(placed = placed.len(), frontier = frontier.len(), "magnetic pass done");

        append_exits(&mut frame, previous, canvas, rng)?;
        Ok(StaticAllocation {
            frame,
            entry_anchors: anchors,
        })
    }

    /// Score of a word centered at `center` whose previous center was `origin`.
    pub fn score(&self, center: Point, origin: Point) -> f64 {
        self.settings.movement_weight * distance_sq(center, origin)
            + self.settings.center_weight * distance_sq(center, self.canvas().center())
    }

    /// Half extents between a frontier point and the docked word's center.
    fn docking_half(&self, size: Size) -> Vec2 {
        let buffer = self.settings.collision_buffer;
        Vec2::new(
            size.width / 2.0 + self.grid.interval_x() + buffer,
            size.height / 2.0 + self.grid.interval_y() + buffer,
        )
    }

    fn fits(&self, rect: &Rect, placed: &[Rect]) -> bool {
        if self.settings.confine_to_canvas {
            let bounds = self.canvas().bounds();
            if rect.x0 < bounds.x0 || rect.y0 < bounds.y0 || rect.x1 > bounds.x1 || rect.y1 > bounds.y1
            {
                return false;
            }
        }
        let b = self.settings.collision_buffer;
        !rect_overlaps_any(&rect.inflate(b, b), placed)
    }

    /// Best collision-free candidate docked on one side of the frontier.
    fn best_on_side(
        &self,
        dir: ScanDirection,
        frontier: &MagnetOuterFrontier,
        placed: &[Rect],
        size: Size,
        origin: Point,
    ) -> Option<Candidate> {
        let offsets = docking_offsets(dir, self.docking_half(size));
        let mut best = None;
        for &p in frontier.side(dir) {
            for off in offsets {
                let center = p + off;
                if !self.fits(&rect_centered(center, size), placed) {
                    continue;
                }
                let next = Candidate {
                    center,
                    score: self.score(center, origin),
                };
                best = better(best, Some(next));
            }
        }
        best
    }

    /// Best candidate over all sides; `None` when every candidate collides.
    pub(crate) fn best_candidate(
        &self,
        frontier: &MagnetOuterFrontier,
        placed: &[Rect],
        size: Size,
        origin: Point,
    ) -> Option<Candidate> {
        let per_side: Vec<Option<Candidate>> = if self.settings.parallel_sides {
            SIDE_ORDER[..]
                .par_iter()
                .map(|dir| self.best_on_side(*dir, frontier, placed, size, origin))
                .collect()
        } else {
            SIDE_ORDER
                .iter()
                .map(|dir| self.best_on_side(*dir, frontier, placed, size, origin))
                .collect()
        };
        per_side.into_iter().fold(None, better)
    }
}

/// Center of `word` in the previous frame, at its current text size scaled by
/// the font-size ratio. New words fall back to their entry anchor.
fn previous_center(word: &Word, previous: &AllocationInFrame, anchors: &[(String, WordPlacement)]) -> Point {
    let placement = previous.get(&word.text).or_else(|| {
        anchors
            .iter()
            .find(|(text, _)| *text == word.text)
            .map(|(_, p)| p)
    });
    let Some(placement) = placement else {
        return Point::new(0.0, 0.0);
    };
    let scale = if word.font_size > 0.0 {
        placement.font_size / word.font_size
    } else {
        1.0
    };
    placement.left_top
        + Vec2::new(
            word.text_size.width * scale / 2.0,
            word.text_size.height * scale / 2.0,
        )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/magnetic.rs"]
mod tests;
