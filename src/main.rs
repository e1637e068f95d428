mod deck;
mod diag;
mod input;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use deck::actions::NAV_SLIDE_BASE;
use deck::session::{self, HashSync};
use deck::DeckApp;
use input::{
    pixel_x_to_col, pixel_y_to_row, ClickState, Gesture, GestureTracker, InputEvent, KeyInput,
};
use time::{FrameClock, TICKS_PER_SEC};

/// Query the grid container's bounding rect and convert page-pixel
/// coordinates to a terminal cell.
fn grid_cell_at(page_x: f64, page_y: f64, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_x_to_col(page_x - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(page_y - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

/// Normalize a ratzilla key event; keys the deck ignores map to `None`.
fn normalize_key(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Esc => Some(KeyInput::Escape),
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = DeckApp::new()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    let app = Rc::new(RefCell::new(app));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let gesture = Rc::new(RefCell::new(GestureTracker::new()));
    let clock = Rc::new(RefCell::new(FrameClock::new(TICKS_PER_SEC)));
    let hash_sync = Rc::new(RefCell::new(HashSync::new()));

    // Startup slide: deep link beats the stored session, which beats 0.
    {
        let total = app.borrow().state.total();
        let mut sync = hash_sync.borrow_mut();
        let start = session::initial_slide(&mut sync, total);
        if start != 0 {
            app.borrow_mut()
                .handle_input(&InputEvent::Click(NAV_SLIDE_BASE + start as u16));
        }
        sync.note_written(&session::format_fragment(app.borrow().state.current));
    }

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch handler: presses feed the gesture tracker; releases
    // resolve into a swipe or a hit-tested click.
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        let gesture = gesture.clone();
        move |mouse_event| {
            if mouse_event.button != MouseButton::Left {
                return;
            }
            let (x, y) = (mouse_event.x as f64, mouse_event.y as f64);
            match mouse_event.event {
                MouseEventKind::Pressed => {
                    gesture.borrow_mut().press(x, y);
                }
                MouseEventKind::Released => {
                    let resolved = gesture.borrow_mut().release(x, y);
                    match resolved {
                        Some(Gesture::Swipe(dir)) => {
                            app.borrow_mut().handle_input(&InputEvent::Swipe(dir));
                        }
                        Some(Gesture::Click { x, y }) => {
                            let cs = click_state.borrow();
                            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                                return;
                            }
                            let Some((col, row)) = grid_cell_at(x, y, &cs) else {
                                return;
                            };
                            let matched = cs.hit_test(col, row);
                            drop(cs);

                            if let Some(action_id) = matched {
                                app.borrow_mut().handle_input(&InputEvent::Click(action_id));
                            }
                        }
                        None => {}
                    }
                }
                _ => {}
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            if let Some(key) = normalize_key(key_event.code) {
                app.borrow_mut().handle_input(&InputEvent::Key(key));
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            // Advance tick-based timers from wall-clock time
            let now = web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.now())
                .unwrap_or(0.0);
            let ticks = clock.borrow_mut().update(now);
            if ticks > 0 {
                app.borrow_mut().tick(ticks);
            }

            // Browser back/forward and hand-edited fragments come in as
            // external hash changes; route them through the dispatcher
            // like any other random-access navigation.
            let total = app.borrow().state.total();
            if let Some(index) = hash_sync.borrow_mut().poll(total) {
                app.borrow_mut()
                    .handle_input(&InputEvent::Click(NAV_SLIDE_BASE + index as u16));
            }
            hash_sync.borrow_mut().record(app.borrow().state.current);

            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            app.borrow().render(f, size, &click_state);
        }
    });

    Ok(())
}
