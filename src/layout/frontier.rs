//! Outer silhouette ("frontier") of the placed-word mass.
//!
//! A launcher line sweeps along one canvas border in fixed steps. From every
//! launcher position a ray advances across the canvas in the same fixed steps
//! and stops at the first sample strictly inside a placed rectangle; that
//! sample is the frontier point of the launcher.

use crate::foundation::collision::point_hits_rect;
use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::{CloudError, CloudResult};

/// Border the launcher sweeps along, i.e. where rays come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanDirection {
    /// Rays start at the top border and travel down.
    FromAbove,
    /// Rays start at the bottom border and travel up.
    FromBelow,
    /// Rays start at the left border and travel right.
    FromLeft,
    /// Rays start at the right border and travel left.
    FromRight,
}

impl ScanDirection {
    /// All directions, in frontier storage order.
    pub const ALL: [ScanDirection; 4] = [
        ScanDirection::FromAbove,
        ScanDirection::FromBelow,
        ScanDirection::FromLeft,
        ScanDirection::FromRight,
    ];

    /// `true` when the launcher moves along x (rays are vertical).
    pub fn launcher_moves_along_x(self) -> bool {
        matches!(self, Self::FromAbove | Self::FromBelow)
    }

    /// Coordinate a frontier list is sorted by.
    pub fn transverse(self, p: Point) -> f64 {
        if self.launcher_moves_along_x() {
            p.x
        } else {
            p.y
        }
    }

    /// Ray travel sign along its axis.
    fn ray_sign(self) -> f64 {
        match self {
            Self::FromAbove | Self::FromLeft => 1.0,
            Self::FromBelow | Self::FromRight => -1.0,
        }
    }
}

/// Sampling resolution of the frontier scan over one canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontierGrid {
    canvas: Canvas,
    interval_x: f64,
    interval_y: f64,
}

// Launchers and rays start one pixel inside the border so the first sample is
// already inside the canvas.
const BORDER_INSET: f64 = 1.0;

impl FrontierGrid {
    /// Divide each canvas axis into `division` steps.
    pub fn new(canvas: Canvas, division: u32) -> CloudResult<Self> {
        canvas.validate()?;
        if division == 0 {
            return Err(CloudError::validation("image division must be >= 1"));
        }
        Ok(Self {
            canvas,
            interval_x: canvas.width / f64::from(division),
            interval_y: canvas.height / f64::from(division),
        })
    }

    /// Canvas being scanned.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Step between samples along x.
    pub fn interval_x(&self) -> f64 {
        self.interval_x
    }

    /// Step between samples along y.
    pub fn interval_y(&self) -> f64 {
        self.interval_y
    }

    fn launcher_step(&self, dir: ScanDirection) -> f64 {
        if dir.launcher_moves_along_x() {
            self.interval_x
        } else {
            self.interval_y
        }
    }

    fn ray_step(&self, dir: ScanDirection) -> f64 {
        if dir.launcher_moves_along_x() {
            self.interval_y
        } else {
            self.interval_x
        }
    }

    fn launcher_extent(&self, dir: ScanDirection) -> f64 {
        if dir.launcher_moves_along_x() {
            self.canvas.width
        } else {
            self.canvas.height
        }
    }

    fn ray_extent(&self, dir: ScanDirection) -> f64 {
        if dir.launcher_moves_along_x() {
            self.canvas.height
        } else {
            self.canvas.width
        }
    }

    /// Transverse coordinate of launcher `k`.
    fn launcher_coord(&self, dir: ScanDirection, k: usize) -> f64 {
        BORDER_INSET + self.launcher_step(dir) * k as f64
    }

    /// Number of launcher positions strictly inside the canvas.
    fn launcher_count(&self, dir: ScanDirection) -> usize {
        let extent = self.launcher_extent(dir);
        let step = self.launcher_step(dir);
        let mut n = ((extent - BORDER_INSET) / step).ceil().max(0.0) as usize;
        while n > 0 && self.launcher_coord(dir, n - 1) >= extent {
            n -= 1;
        }
        while self.launcher_coord(dir, n) < extent {
            n += 1;
        }
        n
    }

    /// Launchers whose coordinate lies within `[lo, hi]`.
    fn launchers_within(&self, dir: ScanDirection, lo: f64, hi: f64) -> std::ops::Range<usize> {
        let count = self.launcher_count(dir);
        let step = self.launcher_step(dir);
        let mut first = (((lo - BORDER_INSET) / step).floor().max(0.0) as usize).min(count);
        while first > 0 && self.launcher_coord(dir, first - 1) >= lo {
            first -= 1;
        }
        while first < count && self.launcher_coord(dir, first) < lo {
            first += 1;
        }
        let mut end = first;
        while end < count && self.launcher_coord(dir, end) <= hi {
            end += 1;
        }
        first..end
    }

    fn ray_start(&self, dir: ScanDirection) -> f64 {
        if dir.ray_sign() > 0.0 {
            BORDER_INSET
        } else {
            self.ray_extent(dir) - BORDER_INSET
        }
    }

    fn ray_sample(&self, dir: ScanDirection, j: usize) -> f64 {
        self.ray_start(dir) + dir.ray_sign() * self.ray_step(dir) * j as f64
    }

    fn point(&self, dir: ScanDirection, transverse: f64, along: f64) -> Point {
        if dir.launcher_moves_along_x() {
            Point::new(transverse, along)
        } else {
            Point::new(along, transverse)
        }
    }

    /// First sample index of the ray inside `rect`, if the ray enters it
    /// before leaving the canvas.
    fn first_sample_inside(&self, dir: ScanDirection, transverse: f64, rect: &Rect) -> Option<usize> {
        let (t_lo, t_hi, lo, hi) = if dir.launcher_moves_along_x() {
            (rect.x0, rect.x1, rect.y0, rect.y1)
        } else {
            (rect.y0, rect.y1, rect.x0, rect.x1)
        };
        if !(t_lo < transverse && transverse < t_hi) {
            return None;
        }

        let sign = dir.ray_sign();
        let step = self.ray_step(dir);
        let start = self.ray_start(dir);
        let entered = |c: f64| if sign > 0.0 { c > lo } else { c < hi };

        let extent = self.ray_extent(dir);
        let gap = if sign > 0.0 { lo - start } else { start - hi };
        // the ray leaves the canvas before reaching the rectangle
        if gap.is_nan() || gap > extent {
            return None;
        }
        let mut j = if gap < 0.0 {
            0
        } else {
            (gap / step).floor() as usize + 1
        };
        while j > 0 && entered(self.ray_sample(dir, j - 1)) {
            j -= 1;
        }
        while !entered(self.ray_sample(dir, j)) {
            j += 1;
        }

        let c = self.ray_sample(dir, j);
        if point_hits_rect(self.point(dir, transverse, c), rect) && 0.0 < c && c < extent {
            Some(j)
        } else {
            None
        }
    }

    /// Fire the ray of the launcher at `transverse` against `rects`.
    fn launch_ray(&self, dir: ScanDirection, transverse: f64, rects: &[Rect]) -> Option<Point> {
        rects
            .iter()
            .filter_map(|r| self.first_sample_inside(dir, transverse, r))
            .min()
            .map(|j| self.point(dir, transverse, self.ray_sample(dir, j)))
    }
}

/// Frontier points of the placed mass, one list per scan direction, each
/// sorted by the coordinate transverse to its rays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MagnetOuterFrontier {
    /// Top silhouette (rays travelling down), sorted by x.
    pub from_up: Vec<Point>,
    /// Bottom silhouette (rays travelling up), sorted by x.
    pub from_down: Vec<Point>,
    /// Left silhouette (rays travelling right), sorted by y.
    pub from_left: Vec<Point>,
    /// Right silhouette (rays travelling left), sorted by y.
    pub from_right: Vec<Point>,
}

impl MagnetOuterFrontier {
    /// Frontier list of one direction.
    pub fn side(&self, dir: ScanDirection) -> &[Point] {
        match dir {
            ScanDirection::FromAbove => &self.from_up,
            ScanDirection::FromBelow => &self.from_down,
            ScanDirection::FromLeft => &self.from_left,
            ScanDirection::FromRight => &self.from_right,
        }
    }

    fn side_mut(&mut self, dir: ScanDirection) -> &mut Vec<Point> {
        match dir {
            ScanDirection::FromAbove => &mut self.from_up,
            ScanDirection::FromBelow => &mut self.from_down,
            ScanDirection::FromLeft => &mut self.from_left,
            ScanDirection::FromRight => &mut self.from_right,
        }
    }

    /// Total number of frontier points.
    pub fn len(&self) -> usize {
        ScanDirection::ALL.iter().map(|d| self.side(*d).len()).sum()
    }

    /// `true` when no ray hit anything.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full scan of `rects` from every launcher position.
    pub fn scan(grid: &FrontierGrid, rects: &[Rect]) -> Self {
        let mut out = Self::default();
        for dir in ScanDirection::ALL {
            let side = out.side_mut(dir);
            for k in 0..grid.launcher_count(dir) {
                let t = grid.launcher_coord(dir, k);
                if let Some(p) = grid.launch_ray(dir, t, rects) {
                    side.push(p);
                }
            }
        }
        out
    }

    /// Frontier after `added` joined the mass. `rects` must already contain
    /// `added`; `self` must be the frontier of `rects` without it.
    ///
    /// Only launchers overlapping `added` are rescanned; the result equals a
    /// full [`Self::scan`] of `rects`.
    pub fn updated(&self, grid: &FrontierGrid, rects: &[Rect], added: &Rect) -> Self {
        let mut out = self.clone();
        for dir in ScanDirection::ALL {
            let (lo, hi) = if dir.launcher_moves_along_x() {
                (added.x0, added.x1)
            } else {
                (added.y0, added.y1)
            };
            let side = out.side_mut(dir);
            for k in grid.launchers_within(dir, lo, hi) {
                let t = grid.launcher_coord(dir, k);
                splice(side, dir, t, grid.launch_ray(dir, t, rects));
            }
        }
        out
    }
}

/// Put `found` at its ordered slot, replacing the stale point of launcher `t`.
fn splice(side: &mut Vec<Point>, dir: ScanDirection, t: f64, found: Option<Point>) {
    match side.binary_search_by(|p| dir.transverse(*p).total_cmp(&t)) {
        Ok(idx) => match found {
            Some(p) => side[idx] = p,
            None => {
                side.remove(idx);
            }
        },
        Err(idx) => {
            if let Some(p) = found {
                side.insert(idx, p);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/frontier.rs"]
mod tests;
