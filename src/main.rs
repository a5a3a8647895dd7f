// What you SEE:
// • The image on the left, a magnified grid of the pixels around the focus on the right.
// • Move the mouse: focus follows it. Click: focus is pinned until you move 8+ pixels away.
// • Numpad 1-9: nudge the focus one pixel (pins it). Enter: record the focus.
// • C clears the recorded coordinates. ESC quits and prints them.

use clap::Parser;
use log::{info, warn};
use pixel_picker::cli::Cli;
use pixel_picker::draw::{
    blit_image, draw_crosshair, draw_markup, draw_text_5x7, Drawer, MagnifierView, MarkupElement,
};
use pixel_picker::input::{nudge_for_key, PointerTracker, NUDGE_KEYS};
use pixel_picker::loader::load_path;
use pixel_picker::session::Session;
use pixel_picker::types::FrameBuffer;
use pixel_picker::{Error, FocusEvent, Magnifier, PixelSource, Region};

const PANEL_GAP: usize = 8;   // space between image and magnifier panel
const HUD_HEIGHT: usize = 24; // two lines of 5x7 text
const BACKGROUND: u32 = 0x00_30_30_30;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    /* --- Decode the image once; it never changes during the session --- */
    let image = load_path(&cli.image)?;
    let extent = image.extent();
    let region = Region::whole(&image);

    let mut session = Session::new();
    session.load(extent);

    /* --- Layout: image at the origin, magnifier to its right, HUD below both --- */
    let magnifier = Magnifier::new(cli.margin);
    let panel_x = extent.width as usize + PANEL_GAP;
    let view = MagnifierView { x: panel_x as i64, y: 0, cell_size: cli.cell_size };
    let panel = view.extent(&magnifier);
    let width = panel_x + panel;
    let height = (extent.height as usize).max(panel) + HUD_HEIGHT;

    let mut drawer = Drawer::new("Pixel Picker", width, height)?;
    let mut screen = FrameBuffer::new(width, height);
    let mut pointer = PointerTracker::new();
    info!("Window {}x{}, magnifier margin {}", width, height, cli.margin);

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Inputs -> focus events, in the order they happened */
        if let Some(loaded) = session.extent() {
            for event in pointer.sample(drawer.mouse_pos(), drawer.left_mouse_down(), loaded) {
                session.handle(event);
            }
        }
        for key in NUDGE_KEYS {
            if drawer.key_pressed(key) {
                if let Some(direction) = nudge_for_key(key) {
                    session.handle(FocusEvent::Nudge(direction));
                }
            }
        }
        if drawer.enter_pressed_once() && session.enter().is_none() {
            warn!("Enter ignored: no image loaded");
        }
        if drawer.c_pressed_once() {
            session.clear();
            info!("Cleared entered coordinates");
        }

        let state = session.state();
        let focus = state.focus;

        /* 2) Base image */
        screen.fill(BACKGROUND);
        blit_image(&mut screen, &image, 0, 0);

        /* 3) Markup: line from the last recorded point to the focus */
        if let Some(last) = session.last_entered() {
            draw_markup(&mut screen, 0, 0, &[MarkupElement::Line { from: last, to: focus, color: 0x00_33_CC_FF }]);
        }
        let cross = if state.is_anchored() { 0x00_FF_33_33 } else { 0x00_FF_CC_33 };
        draw_crosshair(&mut screen, focus.x as i32, focus.y as i32, 10, cross);

        /* 4) Magnifier panel */
        view.draw(&mut screen, &magnifier, focus, &region);

        /* 5) HUD */
        let mode = if state.is_anchored() { "ANCHORED" } else { "FREE" };
        let hud_y = height as i32 - HUD_HEIGHT as i32 + 4;
        let line1 = format!("X: {}  Y: {}  {}  PICKED: {}", focus.x, focus.y, mode, session.entered().len());
        draw_text_5x7(&mut screen, 4, hud_y, &line1, 0x00_FF_FF_FF);
        draw_text_5x7(&mut screen, 4, hud_y + 10, "NUMPAD: NUDGE  ENTER: PICK  C: CLEAR", 0x00_A0_A0_A0);

        /* 6) Present */
        drawer.present(&screen)?;
    }

    let picked = session.coordinates_text();
    info!("Exiting with {} coordinate(s)", session.entered().len());
    if !picked.is_empty() {
        println!("{picked}");
    }
    Ok(())
}
