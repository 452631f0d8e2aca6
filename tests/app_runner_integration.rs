use std::{sync::Arc, time::Duration};

use clonkbot::{
    domain::{
        repo::{self, CODE_FILE},
        ui::Pane,
    },
    infrastructure::{
        config::Config,
        tui::{event_source::SharedTui, Event, EventSource, TestTui},
    },
    integration::app_runner::AppRunner,
    presentation::layout::PageLayout,
};
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pretty_assertions::assert_eq;
use ratatui::layout::Rect;
use tokio::sync::Mutex;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click_file(index: usize) -> Event {
    let layout = PageLayout::new(Rect::new(0, 0, WIDTH, HEIGHT), false);
    let rows = layout.file_rows();
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rows.x + 3,
        row: rows.y + index as u16,
        modifiers: KeyModifiers::NONE,
    })
}

async fn create_runner(events: Vec<Event>) -> (AppRunner, Arc<Mutex<TestTui>>) {
    let test_tui = Arc::new(Mutex::new(TestTui::new(WIDTH, HEIGHT).unwrap()));
    let tui: SharedTui = test_tui.clone();
    let config = Config::embedded().expect("embedded config");
    let runner = AppRunner::new_with_config(config, tui, EventSource::test(events))
        .await
        .expect("failed to create AppRunner");
    (runner, test_tui)
}

#[tokio::test]
async fn test_click_opens_code_viewer() {
    let brain = repo::file_index(CODE_FILE).unwrap();
    let (mut runner, test_tui) = create_runner(vec![
        Event::Init,
        click_file(brain),
        key(KeyCode::Tab),
        key(KeyCode::Char('j')),
        key(KeyCode::Char('j')),
        Event::Render,
    ])
    .await;

    runner.run().await.unwrap();

    let state = runner.runtime().state();
    assert_eq!(state.explorer.selected_file, Some(CODE_FILE));
    assert!(state.explorer.show_code);
    assert_eq!(state.explorer.cursor, brain);
    assert_eq!(state.ui.focus, Pane::Code);
    assert_eq!(state.explorer.code_scroll, 2);
    assert!(test_tui.lock().await.screen().contains("class ClonkBot"));
}

#[tokio::test]
async fn test_escape_closes_viewer_and_quit_stops_loop() {
    let brain = repo::file_index(CODE_FILE).unwrap();
    let (mut runner, test_tui) = create_runner(vec![
        Event::Init,
        click_file(brain),
        key(KeyCode::Tab),
        key(KeyCode::Esc),
        key(KeyCode::Char('q')),
        // never reached
        key(KeyCode::Char('j')),
    ])
    .await;

    runner.run().await.unwrap();

    let state = runner.runtime().state();
    assert!(state.system.should_quit);
    assert!(!state.explorer.show_code);
    assert_eq!(state.ui.focus, Pane::Files);
    assert_eq!(state.explorer.cursor, brain);
    assert!(!test_tui.lock().await.is_entered());
}

#[tokio::test]
async fn test_clicking_a_folder_does_not_show_code() {
    let (mut runner, _) = create_runner(vec![Event::Init, click_file(0)]).await;

    runner.run().await.unwrap();

    let state = runner.runtime().state();
    assert_eq!(state.explorer.selected_file, Some(repo::FILES[0].name));
    assert!(!state.explorer.show_code);
}

#[tokio::test]
async fn test_readme_scrolls_after_focus_moves() {
    let (mut runner, _) = create_runner(vec![
        Event::Init,
        key(KeyCode::Tab),
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Up),
        key(KeyCode::End),
    ])
    .await;

    runner.run().await.unwrap();

    let state = runner.runtime().state();
    assert_eq!(state.ui.focus, Pane::Readme);
    assert_eq!(state.ui.readme_scroll, repo::readme::max_scroll());
    assert_eq!(state.explorer.cursor, 0);
}

#[tokio::test(start_paused = true)]
async fn test_reveals_and_fade_in_follow_the_clock() {
    let (mut runner, test_tui) = create_runner(vec![]).await;
    runner.start().await.unwrap();
    runner.handle_event(Event::Init).await.unwrap();
    assert!(!runner.runtime().state().system.loaded);

    tokio::time::sleep(Duration::from_millis(150)).await;
    runner.handle_event(Event::Render).await.unwrap();
    {
        let state = runner.runtime().state();
        assert!(state.system.loaded);
        assert_eq!(state.reveals.status.visible, "O");
    }

    tokio::time::sleep(Duration::from_secs(3)).await;
    runner.handle_event(Event::Render).await.unwrap();
    let state = runner.runtime().state();
    assert_eq!(state.reveals.status.visible, repo::STATUS_TEXT);
    assert_eq!(state.reveals.description.visible, repo::DESCRIPTION);
    assert!((42_069..=42_071).contains(&state.stats.stars));

    let screen = test_tui.lock().await.screen();
    assert!(screen.contains("ONLINE_"));
    assert!(screen.contains("Fork at your own risk._"));
}

#[tokio::test(start_paused = true)]
async fn test_replay_restarts_both_reveals() {
    let (mut runner, _) = create_runner(vec![]).await;
    runner.start().await.unwrap();
    runner.handle_event(Event::Init).await.unwrap();
    tokio::time::sleep(Duration::from_secs(5)).await;
    runner.handle_event(Event::Tick).await.unwrap();
    assert!(runner.runtime().state().reveals.status.complete);

    runner.handle_event(key(KeyCode::Char('r'))).await.unwrap();
    {
        let state = runner.runtime().state();
        assert_eq!(state.reveals.status.visible, "");
        assert!(!state.reveals.description.complete);
    }

    tokio::time::sleep(Duration::from_millis(250)).await;
    runner.handle_event(Event::Tick).await.unwrap();
    assert_eq!(runner.runtime().state().reveals.status.visible, "ON");
}

#[tokio::test]
async fn test_ctrl_c_quits_from_any_pane() {
    let (mut runner, _) = create_runner(vec![
        Event::Init,
        key(KeyCode::Tab),
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        key(KeyCode::Tab),
    ])
    .await;

    runner.run().await.unwrap();

    let state = runner.runtime().state();
    assert!(state.system.should_quit);
    assert_eq!(state.ui.focus, Pane::Readme);
}
