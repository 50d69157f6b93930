// Stroke rasterizer: turns two pointer samples into a gap-free run of stamps.

use crate::sprite::BrushSprite;
use crate::surface::Surface;
use crate::types::Point;

/// Every pixel on the Bresenham line from `p0` to `p1`, both ends included,
/// in p0 -> p1 order.
///
/// The walk always starts at the smaller endpoint so swapping the arguments
/// gives the same pixels (just reversed).
pub fn line_points(p0: Point, p1: Point) -> Vec<Point> {
    let mut points: Vec<_> = Line::new(p0, p1).collect();
    if p1 < p0 {
        points.reverse();
    }
    points
}

/// Bresenham walk with separate x/y error tests, so diagonal steps don't drop
/// a corner. Stops on reaching the end point, not after a step count.
///
/// Deltas and the error term live in i64: any two i32 points fit.
#[derive(Clone, Debug)]
pub struct Line {
    x: i64,
    y: i64,
    to_x: i64,
    to_y: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl Line {
    /// Walks from the smaller endpoint, whichever way round they're given.
    pub fn new(p0: Point, p1: Point) -> Self {
        let (from, to) = if p1 < p0 { (p1, p0) } else { (p0, p1) };
        let (x, y) = (from.x as i64, from.y as i64);
        let (to_x, to_y) = (to.x as i64, to.y as i64);
        let dx = (to_x - x).abs();
        let dy = -(to_y - y).abs();
        Self {
            x,
            y,
            to_x,
            to_y,
            dx,
            dy,
            sx: if x < to_x { 1 } else { -1 },
            sy: if y < to_y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        // always between the endpoints, so back in i32 range
        let p = Point::new(self.x as i32, self.y as i32);
        if self.x == self.to_x && self.y == self.to_y {
            self.done = true;
            return Some(p);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(p)
    }
}

/// Stamp `sprite` centered on every point of the segment p0..=p1, walked in
/// [`Line`] order.
/// Visual: a solid brush-wide stroke appears between the two samples.
///
/// Points whose stamp can't touch the surface are skipped, and the walk stops
/// once it has passed through the surface: x and y only ever move one way,
/// so the visible stretch is one contiguous run.
pub fn draw_segment<S: Surface + ?Sized>(
    surface: &mut S,
    sprite: &BrushSprite,
    opacity: f32,
    p0: Point,
    p1: Point,
) {
    let half_w = (sprite.width() / 2) as i64;
    let half_h = (sprite.height() / 2) as i64;
    let (w, h) = surface.size();

    // centers whose stamp rectangle overlaps the surface
    let min_x = half_w - sprite.width() as i64 + 1;
    let min_y = half_h - sprite.height() as i64 + 1;
    let max_x = w as i64 - 1 + half_w;
    let max_y = h as i64 - 1 + half_h;
    let visible = |p: Point| {
        let (x, y) = (p.x as i64, p.y as i64);
        (min_x..=max_x).contains(&x) && (min_y..=max_y).contains(&y)
    };

    // whole segment off to one side
    let (lo_x, hi_x) = (p0.x.min(p1.x) as i64, p0.x.max(p1.x) as i64);
    let (lo_y, hi_y) = (p0.y.min(p1.y) as i64, p0.y.max(p1.y) as i64);
    if hi_x < min_x || lo_x > max_x || hi_y < min_y || lo_y > max_y {
        tracing::trace!(?p0, ?p1, "segment off surface");
        return;
    }

    tracing::trace!(?p0, ?p1, "draw segment");
    let mut entered = false;
    for p in Line::new(p0, p1) {
        if !visible(p) {
            if entered {
                break;
            }
            continue;
        }
        entered = true;
        surface.stamp(sprite, p.x - half_w as i32, p.y - half_h as i32, opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn grid() -> impl Iterator<Item = Point> {
        (-6..=6).flat_map(|x| (-6..=6).map(move |y| Point::new(x, y)))
    }

    #[test]
    fn horizontal_run() {
        let pts = line_points(Point::new(10, 10), Point::new(13, 10));
        assert_eq!(
            pts,
            vec![Point::new(10, 10), Point::new(11, 10), Point::new(12, 10), Point::new(13, 10)]
        );
    }

    #[test]
    fn single_point_when_endpoints_match() {
        let p = Point::new(-3, 7);
        assert_eq!(line_points(p, p), vec![p]);
    }

    #[test]
    fn pure_diagonal_has_no_extra_corners() {
        let pts = line_points(Point::new(0, 0), Point::new(4, -4));
        assert_eq!(pts.len(), 5);
        for (i, p) in pts.iter().enumerate() {
            assert_eq!(*p, Point::new(i as i32, -(i as i32)));
        }
    }

    #[test]
    fn every_line_is_connected_and_hits_both_ends() {
        let origin = Point::new(0, 0);
        let starts = [origin, Point::new(3, -2), Point::new(-5, 4)];
        for p0 in starts {
            for p1 in grid() {
                let pts = line_points(p0, p1);
                assert_eq!(pts.first(), Some(&p0));
                assert_eq!(pts.last(), Some(&p1));
                for pair in pts.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    assert!((a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1, "{p0:?}->{p1:?} jumps {a:?}->{b:?}");
                    assert_ne!(a, b);
                }
                // one pixel per step along the major axis
                let major = (p1.x - p0.x).abs().max((p1.y - p0.y).abs());
                assert_eq!(pts.len() as i32, major + 1);
            }
        }
    }

    #[test]
    fn reversed_segment_covers_the_same_pixels() {
        for p0 in grid().step_by(7) {
            for p1 in grid() {
                let forward: BTreeSet<_> = line_points(p0, p1).into_iter().collect();
                let backward: BTreeSet<_> = line_points(p1, p0).into_iter().collect();
                assert_eq!(forward, backward, "{p0:?} <-> {p1:?}");
            }
        }
    }

    /// Records stamp positions instead of painting.
    struct Recorder(Vec<Point>);

    impl Surface for Recorder {
        fn size(&self) -> (usize, usize) {
            (100, 100)
        }
        fn offset(&self) -> Point {
            Point::default()
        }
        fn stamp(&mut self, _: &BrushSprite, x: i32, y: i32, _: f32) {
            self.0.push(Point::new(x, y));
        }
        fn clear(&mut self) {
            self.0.clear();
        }
    }

    #[test]
    fn stamps_are_centered_on_each_point() {
        let sprite = BrushSprite::generate(crate::types::Color::rgb(0, 0, 0), 4);
        let mut rec = Recorder(Vec::new());
        draw_segment(&mut rec, &sprite, 1.0, Point::new(5, 5), Point::new(6, 7));
        assert_eq!(rec.0, vec![Point::new(3, 3), Point::new(4, 4), Point::new(4, 5)]);
    }

    #[test]
    fn extreme_coordinates_walk_without_overflow() {
        let start: Vec<_> = Line::new(Point::new(i32::MIN + 1, 0), Point::new(i32::MAX, 0)).take(3).collect();
        assert_eq!(start, vec![Point::new(i32::MIN + 1, 0), Point::new(i32::MIN + 2, 0), Point::new(i32::MIN + 3, 0)]);

        let diag: Vec<_> = Line::new(Point::new(i32::MAX, i32::MAX), Point::new(i32::MIN, i32::MIN)).take(2).collect();
        assert_eq!(diag, vec![Point::new(i32::MIN, i32::MIN), Point::new(i32::MIN + 1, i32::MIN + 1)]);

        let tail = Line::new(Point::new(i32::MAX - 2, i32::MAX), Point::new(i32::MAX, i32::MAX));
        assert_eq!(tail.last(), Some(Point::new(i32::MAX, i32::MAX)));
    }

    #[test]
    fn long_segments_only_stamp_the_visible_stretch() {
        let sprite = BrushSprite::generate(crate::types::Color::rgb(0, 0, 0), 1);
        let mut rec = Recorder(Vec::new());
        draw_segment(&mut rec, &sprite, 1.0, Point::new(0, 0), Point::new(0, 50_000_000));
        assert_eq!(rec.0.len(), 100);
        assert_eq!(rec.0.first(), Some(&Point::new(0, 0)));
        assert_eq!(rec.0.last(), Some(&Point::new(0, 99)));
    }

    #[test]
    fn segments_beside_the_surface_stamp_nothing() {
        let sprite = BrushSprite::generate(crate::types::Color::rgb(0, 0, 0), 4);
        let mut rec = Recorder(Vec::new());
        draw_segment(&mut rec, &sprite, 1.0, Point::new(i32::MIN + 1, i32::MAX), Point::new(i32::MAX, i32::MAX));
        draw_segment(&mut rec, &sprite, 1.0, Point::new(-3, -3), Point::new(-3, 200));
        assert!(rec.0.is_empty());

        // a 4px brush centered at x=-2 covers columns -4..=-1, at x=-1 it reaches column 0
        draw_segment(&mut rec, &sprite, 1.0, Point::new(-2, 10), Point::new(-1, 10));
        assert_eq!(rec.0, vec![Point::new(-3, 8)]);
    }
}
