pub mod config;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod input;
pub mod level;
pub mod physics;
pub mod render;
pub mod session;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Event, HtmlButtonElement, HtmlCanvasElement, HtmlElement, KeyboardEvent, Window,
};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::input::InputState;
use crate::level::{FIELD_HEIGHT, FIELD_WIDTH, LEVELS};
use crate::physics::PhysicsParams;
use crate::render::CanvasSurface;
use crate::session::{Completion, Phase, Session, TickOutcome};

const CANVAS_ID: &str = "game";
const HIDDEN_CLASS: &str = "hidden";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Start,
    Playing,
    Message,
}

struct Screens {
    start: HtmlElement,
    game: HtmlElement,
    message: HtmlElement,
    message_text: HtmlElement,
    next_button: HtmlButtonElement,
}

impl Screens {
    /// The game screen stays up behind the end-of-level message.
    fn show(&self, screen: Screen) -> Result<(), GameError> {
        set_hidden(&self.start, screen != Screen::Start)?;
        set_hidden(&self.game, screen == Screen::Start)?;
        set_hidden(&self.message, screen != Screen::Message)?;
        Ok(())
    }
}

struct AppState {
    document: Document,
    session: Session,
    input: InputState,
    surface: CanvasSurface,
    screens: Screens,
    diagnostics: Option<HtmlElement>,
    frame_pending: bool,
    frames: u64,
    last_event: String,
}

fn window() -> Result<Window, GameError> {
    web_sys::window().ok_or_else(|| GameError::Js("missing window".to_string()))
}

fn element<T: JsCast>(document: &Document, id: &'static str) -> Result<T, GameError> {
    document
        .get_element_by_id(id)
        .ok_or(GameError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| GameError::MissingElement(id))
}

fn set_hidden(el: &HtmlElement, hidden: bool) -> Result<(), GameError> {
    let classes = el.class_list();
    if hidden {
        classes.add_1(HIDDEN_CLASS)?;
    } else {
        classes.remove_1(HIDDEN_CLASS)?;
    }
    Ok(())
}

fn status_name(phase: Phase) -> &'static str {
    match phase {
        Phase::NotStarted => "ready",
        Phase::Running => "playing",
        Phase::Completed(Completion::Level) => "level_complete",
        Phase::Completed(Completion::Game) => "game_complete",
    }
}

fn set_status(document: &Document, status: &str) {
    if let Some(el) = document.document_element() {
        let _ = el.set_attribute("data-game-status", status);
    }
}

fn update_diagnostics(state: &AppState) {
    let Some(diagnostics) = &state.diagnostics else {
        return;
    };

    let session = &state.session;
    let player = session.player();
    let lines = [
        format!("status: {}", status_name(session.phase())),
        format!("event: {}", state.last_event),
        format!("phase: {}", session.phase()),
        format!(
            "level: {}/{}",
            session.level_index() + 1,
            session.level_count()
        ),
        format!(
            "coins: {}/{}",
            session.collected_count(),
            session.coins().len()
        ),
        format!("player: ({:.1}, {:.1})", player.rect.x, player.rect.y),
        format!("velocity: ({:.2}, {:.2})", player.vx, player.vy),
        format!("on_ground: {}", player.on_ground),
        format!(
            "input: left={} right={} jump={}",
            state.input.left, state.input.right, state.input.jump
        ),
        format!("frames: {}", state.frames),
    ];

    diagnostics.set_text_content(Some(&lines.join("\n")));
}

fn request_frame(state: &mut AppState, frame_cb: &FrameCallback) -> Result<(), GameError> {
    if state.frame_pending {
        return Ok(());
    }

    let holder = frame_cb.borrow();
    let Some(cb) = holder.as_ref() else {
        return Err(GameError::Js("frame callback not installed".to_string()));
    };
    let function: &Function = cb.as_ref().unchecked_ref();
    window()?.request_animation_frame(function)?;
    state.frame_pending = true;
    Ok(())
}

/// Runs a session transition and, if it was accepted, puts the playing screen
/// up and kicks off the frame loop.
fn enter_level(
    state: &mut AppState,
    frame_cb: &FrameCallback,
    transition: fn(&mut Session) -> Result<(), GameError>,
) -> Result<(), GameError> {
    transition(&mut state.session)?;
    state.screens.show(Screen::Playing)?;
    set_status(&state.document, status_name(state.session.phase()));
    request_frame(state, frame_cb)
}

fn show_completion(state: &mut AppState, completion: Completion) -> Result<(), GameError> {
    let screens = &state.screens;
    screens.message_text.set_text_content(Some(completion.message()));
    screens
        .next_button
        .set_text_content(Some(completion.button_label()));
    screens.show(Screen::Message)?;
    set_status(&state.document, status_name(state.session.phase()));
    state.last_event = status_name(state.session.phase()).to_string();
    Ok(())
}

fn run_frame(state: &mut AppState, frame_cb: &FrameCallback) -> Result<(), GameError> {
    state.frame_pending = false;
    state.frames += 1;

    match state.session.frame(&state.input, &mut state.surface) {
        TickOutcome::Continue => request_frame(state, frame_cb),
        TickOutcome::Completed(completion) => show_completion(state, completion),
        TickOutcome::Idle => Ok(()),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = web_sys::window()
        .and_then(|win| win.location().search().ok())
        .map(|search| GameConfig::from_query(&search))
        .unwrap_or_default();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger: {}", err)));
    }

    if let Err(err) = start_impl(config) {
        let message = format!("fatal: {}", err);
        log::error!("{}", message);

        if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
            set_status(&doc, "error");
            if let Some(diag) = doc.get_element_by_id("diagnostics") {
                diag.set_text_content(Some(&message));
                let _ = diag.class_list().remove_1(HIDDEN_CLASS);
            }
        }

        web_sys::console::error_1(&JsValue::from(err));
    }
}

fn start_impl(config: GameConfig) -> Result<(), GameError> {
    let win = window()?;
    let document = win
        .document()
        .ok_or_else(|| GameError::Js("missing document".to_string()))?;

    let canvas: HtmlCanvasElement = element(&document, CANVAS_ID)?;
    let surface = CanvasSurface::new(&canvas, CANVAS_ID, FIELD_WIDTH, FIELD_HEIGHT)?;

    let screens = Screens {
        start: element(&document, "start-screen")?,
        game: element(&document, "game-screen")?,
        message: element(&document, "message-screen")?,
        message_text: element(&document, "message")?,
        next_button: element(&document, "next-btn")?,
    };
    let start_button: HtmlButtonElement = element(&document, "start-btn")?;

    let diagnostics = if config.diagnostics {
        let el = element::<HtmlElement>(&document, "diagnostics").ok();
        if let Some(el) = &el {
            set_hidden(el, false)?;
        }
        el
    } else {
        None
    };

    let session = Session::new(LEVELS, PhysicsParams::default(), config.start_level)?;
    screens.show(Screen::Start)?;
    set_status(&document, status_name(session.phase()));
    log::info!(
        "ready: {} levels, starting at level {}",
        session.level_count(),
        config.start_level
    );

    let state = Rc::new(RefCell::new(AppState {
        document: document.clone(),
        session,
        input: InputState::default(),
        surface,
        screens,
        diagnostics,
        frame_pending: false,
        frames: 0,
        last_event: "init".to_string(),
    }));
    update_diagnostics(&state.borrow());

    let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
    {
        let state_frame = Rc::clone(&state);
        let frame_cb_loop = Rc::clone(&frame_cb);
        *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            let mut st = state_frame.borrow_mut();
            if let Err(err) = run_frame(&mut st, &frame_cb_loop) {
                log::error!("frame: {}", err);
            }
            update_diagnostics(&st);
        }) as Box<dyn FnMut(f64)>));
    }

    let state_start = Rc::clone(&state);
    let frame_cb_start = Rc::clone(&frame_cb);
    let on_start = Closure::wrap(Box::new(move |_event: Event| {
        let mut st = state_start.borrow_mut();
        st.last_event = "start".to_string();
        if let Err(err) = enter_level(&mut st, &frame_cb_start, Session::start) {
            log::warn!("start ignored: {}", err);
        }
        update_diagnostics(&st);
    }) as Box<dyn FnMut(_)>);
    start_button.add_event_listener_with_callback("click", on_start.as_ref().unchecked_ref())?;
    on_start.forget();

    let state_next = Rc::clone(&state);
    let frame_cb_next = Rc::clone(&frame_cb);
    let on_next = Closure::wrap(Box::new(move |_event: Event| {
        let mut st = state_next.borrow_mut();
        st.last_event = "continue".to_string();
        if let Err(err) = enter_level(&mut st, &frame_cb_next, Session::continue_game) {
            log::warn!("continue ignored: {}", err);
        }
        update_diagnostics(&st);
    }) as Box<dyn FnMut(_)>);
    state
        .borrow()
        .screens
        .next_button
        .add_event_listener_with_callback("click", on_next.as_ref().unchecked_ref())?;
    on_next.forget();

    let state_keydown = Rc::clone(&state);
    let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let mut st = state_keydown.borrow_mut();
        // Keep Space from scrolling the page mid-level.
        if st.input.apply_key(&event.code(), true) && st.session.phase() == Phase::Running {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();

    let state_keyup = Rc::clone(&state);
    let on_keyup = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        state_keyup
            .borrow_mut()
            .input
            .apply_key(&event.code(), false);
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("keyup", on_keyup.as_ref().unchecked_ref())?;
    on_keyup.forget();

    let state_blur = Rc::clone(&state);
    let on_blur = Closure::wrap(Box::new(move |_event: Event| {
        let mut st = state_blur.borrow_mut();
        st.input.clear();
        st.last_event = "blur".to_string();
        update_diagnostics(&st);
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
    on_blur.forget();

    Ok(())
}
