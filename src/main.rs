// What you SEE:
// • A HUD strip on top, the white canvas underneath.
// • Hold Left Mouse and drag: a round-brush stroke follows the pointer.
// • A gray ring shows the brush size under the cursor.
// • C clears the canvas. ESC quits.

use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use whiteboard::draw::{blit_frame, draw_text_5x7, fill_rect, Drawer, PointerEvent};
use whiteboard::{BrushSprite, Canvas, Color, Error, FrameBuffer, Point, Surface, SurfaceConfig, Whiteboard};

/// Height of the HUD strip; the canvas starts right below it.
const HUD_HEIGHT: usize = 20;
const HUD_BG: u32 = 0x0020_2020;
const HUD_FG: u32 = 0x00FF_FFFF;
const PAPER: Color = Color::rgb(255, 255, 255);

#[derive(Parser, Debug)]
#[command(name = "whiteboard", about = "Draw freehand strokes with a round brush")]
struct Args {
    /// TOML file with width/height/strokeColor/strokeSize/strokeOpacity.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the generated brush to this PNG and exit.
    #[arg(long, value_name = "PNG")]
    dump_brush: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => SurfaceConfig::load(path)?,
        None => SurfaceConfig::default(),
    };
    // bad options fail here, before a window or whiteboard exists
    let settings = config.validate()?;

    /* --- Brush dump ---
       Needs no window and no whiteboard: just the brush. */
    if let Some(path) = &args.dump_brush {
        let sprite = BrushSprite::generate(settings.color, settings.size);
        std::fs::write(path, sprite.to_png()?)?;
        tracing::info!(path = %path.display(), "wrote brush sprite");
        return Ok(());
    }

    /* --- Window ---
       Fails here if there's no display to draw on, before any stroke state exists. */
    let (w, h) = (settings.width, settings.height + HUD_HEIGHT);
    let mut drawer = Drawer::new("Whiteboard", w, h)?;

    /* --- Canvas + whiteboard ---
       The canvas sits below the HUD, so window pixels != canvas pixels. */
    let canvas = Canvas::new(config.width, config.height, PAPER).with_offset(Point::new(0, HUD_HEIGHT as i32));
    let mut board = Whiteboard::new(canvas, &config)?;

    let mut screen = FrameBuffer::filled(w, h, Color::from_u32(HUD_BG));
    // canvas copy with the cursor ring on top (never painted into the canvas)
    let mut view = board.surface().frame().clone();

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        if drawer.c_pressed_once() {
            board.clear();
        }

        for event in drawer.pointer_events() {
            match event {
                PointerEvent::Down(p) => board.pointer_down(p),
                PointerEvent::Move(p) => board.pointer_move(p),
                PointerEvent::Up => board.pointer_up(),
            }
        }

        view.pixels.copy_from_slice(&board.surface().frame().pixels);
        if let Some(p) = drawer.mouse_pos() {
            board.preview_cursor(p, &mut view);
        }
        blit_frame(&mut screen, &view, board.surface().offset());

        let status = if board.state().is_active() { "DRAW" } else { "IDLE" };
        let hud = format!("{status} | C: CLEAR | ESC: QUIT | {hud_fps_text}");
        fill_rect(&mut screen, 0, 0, w, HUD_HEIGHT, HUD_BG);
        draw_text_5x7(&mut screen, 8, 7, &hud, HUD_FG);

        drawer.present(&screen)?;

        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            tracing::trace!(fps, "frame rate");
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
