//! Frog Crossing entry point
//!
//! In the browser this wires the keyboard and a timer to a `Session` and
//! redraws after every event. Natively it plays a short scripted run.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use frog_crossing::platform::{InputMapper, Session};
    use frog_crossing::renderer::SvgRenderer;
    use frog_crossing::{Event, Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session,
        input: InputMapper,
        renderer: SvgRenderer,
    }

    impl Game {
        fn handle(&mut self, event: Event) {
            let state = self.session.dispatch(event);
            self.renderer.render(state);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Frog Crossing starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::default();
        let tuning = Tuning::default();
        let renderer = SvgRenderer::new(document).expect("no #svgCanvas element");

        let game = Game {
            input: InputMapper::new(&settings, &tuning),
            session: Session::new(tuning),
            renderer,
        };
        game.renderer.render(game.session.state());
        let game = Rc::new(RefCell::new(game));

        setup_keyboard(&window, game.clone());
        setup_timer(&window, game, settings.tick_interval_ms);

        log::info!("Frog Crossing running!");
    }

    fn setup_keyboard(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut g = game.borrow_mut();
            if let Some(e) = g.input.map_key(&event.code(), event.repeat()) {
                g.handle(e);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_timer(window: &web_sys::Window, game: Rc<RefCell<Game>>, interval_ms: u32) {
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = game.borrow_mut();
            let tick = g.session.next_tick();
            g.handle(tick);
        });
        let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms as i32,
        );
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use frog_crossing::Tuning;

    env_logger::init();
    log::info!("Frog Crossing (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to play in the browser");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match load_tuning(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    demo_run(tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> Result<frog_crossing::Tuning, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(frog_crossing::Tuning::from_json(&json)?)
}

/// Hop up every few ticks until the frog dies or the run times out
#[cfg(not(target_arch = "wasm32"))]
fn demo_run(tuning: frog_crossing::Tuning) {
    use frog_crossing::Settings;
    use frog_crossing::platform::{Feed, InputMapper, Session};

    let input = InputMapper::new(&Settings::default(), &tuning);
    let mut session = Session::new(tuning);

    let up = input.map_key("ArrowUp", false);
    for n in 0..600 {
        if let Some(up) = up.filter(|_| n % 3 == 0) {
            session.dispatch(up);
        }
        let tick = session.next_tick();
        session.dispatch(tick);
        if session.feed() == Feed::RestartOnly {
            break;
        }
    }

    let state = session.state();
    log::info!(
        "Run finished at tick {}: score {}, frog at ({}, {})",
        state.game_time,
        state.score,
        state.frog.pos.x,
        state.frog.pos.y
    );
    match serde_json::to_string(state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize state: {}", e),
    }
}
