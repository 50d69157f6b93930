// End-to-end: config -> whiteboard -> pointer events -> pixels.

use whiteboard::{BrushSprite, Canvas, Color, Point, Surface, SurfaceConfig, Whiteboard};

const WHITE: Color = Color::rgb(255, 255, 255);

fn green_config(size: u32, opacity: f32) -> SurfaceConfig {
    SurfaceConfig {
        width: 100,
        height: 100,
        stroke_color: "#00FF00".into(),
        stroke_size: size,
        stroke_opacity: opacity,
    }
}

/// Remembers where each stamp's center went.
struct StampLog {
    centers: Vec<Point>,
    half: i32,
}

impl Surface for StampLog {
    fn size(&self) -> (usize, usize) {
        (100, 100)
    }
    fn offset(&self) -> Point {
        Point::new(0, 0)
    }
    fn stamp(&mut self, _sprite: &BrushSprite, x: i32, y: i32, _opacity: f32) {
        self.centers.push(Point::new(x + self.half, y + self.half));
    }
    fn clear(&mut self) {}
}

#[test]
fn green_four_pixel_brush() {
    let board = Whiteboard::new(Canvas::new(100, 100, WHITE), &green_config(4, 1.0)).unwrap();
    let sprite = board.sprite();
    assert_eq!((sprite.width(), sprite.height()), (4, 4));
    assert_eq!(sprite.rgba(0, 0)[3], 0);
    assert_eq!(sprite.rgba(2, 2), [0, 255, 0, 255]);
}

#[test]
fn click_then_short_drag_stamps_four_points() {
    let log = StampLog { centers: Vec::new(), half: 2 };
    let mut board = Whiteboard::new(log, &green_config(4, 1.0)).unwrap();
    board.pointer_down(Point::new(10, 10));
    assert!(board.surface().centers.is_empty());
    board.pointer_move(Point::new(13, 10));
    assert_eq!(
        board.surface().centers,
        vec![Point::new(10, 10), Point::new(11, 10), Point::new(12, 10), Point::new(13, 10)]
    );
}

#[test]
fn a_full_stroke_paints_only_along_its_path() {
    let mut board = Whiteboard::new(Canvas::new(100, 100, WHITE), &green_config(1, 1.0)).unwrap();
    board.pointer_down(Point::new(10, 10));
    board.pointer_move(Point::new(13, 10));
    board.pointer_up();
    board.pointer_move(Point::new(50, 50));

    let frame = board.surface().frame();
    let green = Color::rgb(0, 255, 0).to_u32();
    let painted: Vec<_> = (0..100)
        .flat_map(|y| (0..100).map(move |x| (x, y)))
        .filter(|&(x, y)| frame.get(x, y) == Some(green))
        .collect();
    assert_eq!(painted, vec![(10, 10), (11, 10), (12, 10), (13, 10)]);
}

#[test]
fn default_opacity_is_a_light_wash() {
    let mut board = Whiteboard::new(Canvas::new(100, 100, WHITE), &green_config(1, 0.1)).unwrap();
    board.pointer_down(Point::new(5, 5));
    board.pointer_move(Point::new(5, 5));
    let c = Color::from_u32(board.surface().frame().get(5, 5).unwrap());
    // 255 - 255 * 0.1 on the channels green doesn't have
    assert!((229..=230).contains(&c.r) && (229..=230).contains(&c.b), "{c:?}");
    assert_eq!(c.g, 255);
}

#[test]
fn overlapping_stamps_build_up() {
    let mut board = Whiteboard::new(Canvas::new(100, 100, WHITE), &green_config(1, 0.5)).unwrap();
    board.pointer_down(Point::new(5, 5));
    board.pointer_move(Point::new(5, 5));
    board.pointer_move(Point::new(5, 5));
    let c = Color::from_u32(board.surface().frame().get(5, 5).unwrap());
    assert!(c.r < 100, "two half-strength stamps should be darker than one: {c:?}");
}
