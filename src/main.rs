use std::{cell::RefCell, io, rc::Rc};

use incremental_clicker::app::ClickerApp;
use incremental_clicker::config::{GameConfig, CONFIG_ELEMENT_ID};
use incremental_clicker::input::{pixel_to_cell, ClickState, InputEvent};
use incremental_clicker::logging;
use incremental_clicker::scheduler::Scheduler;
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

/// Milliseconds from `performance.now()`, falling back to the wall clock.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Read the optional JSON config embedded in the page. Invalid config is
/// logged and replaced by defaults.
fn load_config() -> GameConfig {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    match json {
        Some(json) => GameConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("ignoring page config: {e}");
            GameConfig::default()
        }),
        None => GameConfig::default(),
    }
}

/// Map a mouse position to a terminal cell using the grid container's bounds.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let document = web_sys::window()?.document()?;
    // DomBackend renders into a <div> directly under <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_to_cell(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_to_cell(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    // Install at info first so config problems are visible.
    logging::init(log::LevelFilter::Info);
    let config = load_config();
    if let Ok(level) = config.level_filter() {
        logging::init(level);
    }
    log::info!("starting with tick={}ms", config.tick_ms);

    let app = Rc::new(RefCell::new(ClickerApp::new()));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let mut scheduler = Scheduler::from_config(&config);
    scheduler.start();
    let scheduler = Rc::new(RefCell::new(scheduler));

    if let Ok(json) = app.borrow().game.snapshot().to_json() {
        log::debug!("initial snapshot: {json}");
    }

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch: hit-test against targets registered by the last render.
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let action = {
                let cs = click_state.borrow();
                if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                    return;
                }
                dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                    .and_then(|(col, row)| cs.hit_test(col, row))
            };

            if let Some(id) = action {
                app.borrow_mut().handle_input(&InputEvent::Click(id));
            }
        }
    });

    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            if let KeyCode::Char(c) = key_event.code {
                app.borrow_mut().handle_input(&InputEvent::Key(c));
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let now = now_ms();
            let mut app = app.borrow_mut();
            app.set_clock(now);
            scheduler.borrow_mut().pump(now, |secs| app.tick(secs));

            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }
            app.render(f, size, &click_state);
        }
    });

    Ok(())
}
