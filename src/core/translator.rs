use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::{
    core::{
        msg::{
            explorer::ExplorerMsg, reveal::RevealMsg, stats::StatsMsg, system::SystemMsg,
            ui::UiMsg, Msg,
        },
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::ui::Pane,
    presentation::{
        config::{keybindings::normalize_key, Action},
        layout::PageLayout,
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Init => vec![Msg::System(SystemMsg::Init)],
        RawMsg::Tick => vec![Msg::System(SystemMsg::Tick)],
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on focus and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        // Timer-driven services
        RawMsg::RevealProgress { slot, snapshot } => {
            vec![Msg::Reveal(RevealMsg::Progress { slot, snapshot })]
        }
        RawMsg::StarsTick(n) => vec![Msg::Stats(StatsMsg::AddStars(n))],
        RawMsg::Loaded => vec![Msg::System(SystemMsg::Loaded)],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Rendering is driven by AppRunner
        RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Get keybindings from config state (flat mapping)
    match state.config.config.keybindings.get(&vec![normalize_key(key)]) {
        Some(action) => translate_action_to_msg(*action, state),
        None => vec![],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    let focus = state.ui.focus;
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::ScrollUp => scroll(focus, ScrollDirection::Up),
        Action::ScrollDown => scroll(focus, ScrollDirection::Down),
        Action::ScrollToTop => match focus {
            Pane::Files => vec![Msg::Explorer(ExplorerMsg::CursorFirst)],
            Pane::Readme => vec![Msg::Ui(UiMsg::ScrollReadmeTop)],
            Pane::Code => vec![],
        },
        Action::ScrollToBottom => match focus {
            Pane::Files => vec![Msg::Explorer(ExplorerMsg::CursorLast)],
            Pane::Readme => vec![Msg::Ui(UiMsg::ScrollReadmeBottom)],
            Pane::Code => vec![],
        },
        Action::Open => match focus {
            Pane::Files => vec![Msg::Explorer(ExplorerMsg::Open)],
            Pane::Code | Pane::Readme => vec![],
        },
        Action::Close => vec![Msg::Explorer(ExplorerMsg::Close)],
        Action::FocusNext => vec![Msg::Ui(UiMsg::FocusNext)],
        Action::Replay => vec![Msg::Reveal(RevealMsg::Replay)],
    }
}

#[derive(Debug, Clone, Copy)]
enum ScrollDirection {
    Up,
    Down,
}

fn scroll(pane: Pane, direction: ScrollDirection) -> Vec<Msg> {
    let msg = match (pane, direction) {
        (Pane::Files, ScrollDirection::Up) => Msg::Explorer(ExplorerMsg::CursorUp),
        (Pane::Files, ScrollDirection::Down) => Msg::Explorer(ExplorerMsg::CursorDown),
        (Pane::Code, ScrollDirection::Up) => Msg::Explorer(ExplorerMsg::ScrollCodeUp),
        (Pane::Code, ScrollDirection::Down) => Msg::Explorer(ExplorerMsg::ScrollCodeDown),
        (Pane::Readme, ScrollDirection::Up) => Msg::Ui(UiMsg::ScrollReadmeUp),
        (Pane::Readme, ScrollDirection::Down) => Msg::Ui(UiMsg::ScrollReadmeDown),
    };
    vec![msg]
}

/// Mouse input is hit-tested against the same layout the renderer uses
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    match mouse.kind {
        MouseEventKind::ScrollUp => scroll(state.ui.focus, ScrollDirection::Up),
        MouseEventKind::ScrollDown => scroll(state.ui.focus, ScrollDirection::Down),
        MouseEventKind::Down(MouseButton::Left) => {
            let Some((width, height)) = state.system.terminal_size else {
                return vec![];
            };
            let layout = PageLayout::new(Rect::new(0, 0, width, height), state.explorer.show_code);
            let (column, row) = (mouse.column, mouse.row);

            if let Some(index) = layout.file_at(column, row, state.explorer.cursor) {
                return vec![Msg::Explorer(ExplorerMsg::OpenAt(index))];
            }
            let at = Position::new(column, row);
            if layout.code.is_some_and(|code| code.contains(at)) {
                vec![Msg::Ui(UiMsg::Focus(Pane::Code))]
            } else if layout.readme.contains(at) {
                vec![Msg::Ui(UiMsg::Focus(Pane::Readme))]
            } else {
                vec![]
            }
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::{
            reveal::{RevealDelay, RevealState, RunId},
            ui::RevealSlot,
        },
        infrastructure::config::Config,
        presentation::config::KeyBindings,
    };

    fn create_test_state() -> AppState {
        let mut config = Config::default();
        let mut bindings = HashMap::new();
        for (code, modifiers, action) in [
            (KeyCode::Char('q'), KeyModifiers::NONE, Action::Quit),
            (KeyCode::Char('j'), KeyModifiers::NONE, Action::ScrollDown),
            (KeyCode::Char('k'), KeyModifiers::NONE, Action::ScrollUp),
            (KeyCode::Char('g'), KeyModifiers::NONE, Action::ScrollToTop),
            (KeyCode::Char('G'), KeyModifiers::SHIFT, Action::ScrollToBottom),
            (KeyCode::Enter, KeyModifiers::NONE, Action::Open),
            (KeyCode::Esc, KeyModifiers::NONE, Action::Close),
            (KeyCode::Tab, KeyModifiers::NONE, Action::FocusNext),
            (KeyCode::Char('r'), KeyModifiers::NONE, Action::Replay),
        ] {
            bindings.insert(vec![KeyEvent::new(code, modifiers)], action);
        }
        config.keybindings = KeyBindings(bindings);

        AppState::new(config)
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> RawMsg {
        RawMsg::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_translate_system_events() {
        let state = create_test_state();

        let result = translate_raw_to_domain(RawMsg::Quit, &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Quit)]);

        let result = translate_raw_to_domain(RawMsg::Init, &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Init)]);

        let result = translate_raw_to_domain(RawMsg::Resize(100, 50), &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Resize(100, 50))]);

        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }

    #[test]
    fn test_translate_service_events() {
        let state = create_test_state();
        let snapshot = RevealState::new(RunId::default(), "ONLINE", RevealDelay::ZERO).snapshot();

        let result = translate_raw_to_domain(
            RawMsg::RevealProgress {
                slot: RevealSlot::Status,
                snapshot: snapshot.clone(),
            },
            &state,
        );
        assert_eq!(
            result,
            vec![Msg::Reveal(RevealMsg::Progress {
                slot: RevealSlot::Status,
                snapshot
            })]
        );

        let result = translate_raw_to_domain(RawMsg::StarsTick(2), &state);
        assert_eq!(result, vec![Msg::Stats(StatsMsg::AddStars(2))]);

        let result = translate_raw_to_domain(RawMsg::Loaded, &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Loaded)]);
    }

    #[test]
    fn test_translate_navigation_follows_focus() {
        let mut state = create_test_state();

        let result = translate_raw_to_domain(key(KeyCode::Char('j')), &state);
        assert_eq!(result, vec![Msg::Explorer(ExplorerMsg::CursorDown)]);

        state.ui.focus = Pane::Readme;
        let result = translate_raw_to_domain(key(KeyCode::Char('j')), &state);
        assert_eq!(result, vec![Msg::Ui(UiMsg::ScrollReadmeDown)]);

        state.ui.focus = Pane::Code;
        let result = translate_raw_to_domain(key(KeyCode::Char('k')), &state);
        assert_eq!(result, vec![Msg::Explorer(ExplorerMsg::ScrollCodeUp)]);
    }

    #[test]
    fn test_translate_uppercase_key_without_shift() {
        let state = create_test_state();

        // some terminals report `G` without the shift modifier
        let result = translate_raw_to_domain(key(KeyCode::Char('G')), &state);
        assert_eq!(result, vec![Msg::Explorer(ExplorerMsg::CursorLast)]);
    }

    #[test]
    fn test_translate_actions() {
        let state = create_test_state();

        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Enter), &state),
            vec![Msg::Explorer(ExplorerMsg::Open)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Esc), &state),
            vec![Msg::Explorer(ExplorerMsg::Close)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Tab), &state),
            vec![Msg::Ui(UiMsg::FocusNext)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('r')), &state),
            vec![Msg::Reveal(RevealMsg::Replay)]
        );
        assert!(translate_raw_to_domain(key(KeyCode::Char('x')), &state).is_empty());
    }

    #[test]
    fn test_translate_global_keys() {
        let state = AppState::default();

        let ctrl_c = RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_raw_to_domain(ctrl_c, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );

        let ctrl_z = RawMsg::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_raw_to_domain(ctrl_z, &state),
            vec![Msg::System(SystemMsg::Suspend)]
        );
    }

    #[test]
    fn test_translate_click_on_file_row() {
        let mut state = create_test_state();
        state.system.terminal_size = Some((120, 40));
        let layout = PageLayout::new(Rect::new(0, 0, 120, 40), false);
        let rows = layout.file_rows();

        let result = translate_raw_to_domain(click(rows.x + 3, rows.y + 5), &state);
        assert_eq!(result, vec![Msg::Explorer(ExplorerMsg::OpenAt(5))]);

        let result = translate_raw_to_domain(click(layout.readme.x + 2, layout.readme.y + 2), &state);
        assert_eq!(result, vec![Msg::Ui(UiMsg::Focus(Pane::Readme))]);

        assert!(translate_raw_to_domain(click(0, 0), &state).is_empty());
    }

    #[test]
    fn test_translate_click_before_resize_is_ignored() {
        let state = create_test_state();
        assert!(translate_raw_to_domain(click(10, 10), &state).is_empty());
    }

    #[test]
    fn test_translate_wheel_scrolls_focused_pane() {
        let mut state = create_test_state();
        state.ui.focus = Pane::Readme;

        let wheel = RawMsg::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            translate_raw_to_domain(wheel, &state),
            vec![Msg::Ui(UiMsg::ScrollReadmeDown)]
        );
    }
}
