use std::time::Duration;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    /// False until the fade-in timer fires
    pub loaded: bool,
    pub load_delay: Duration,
    /// Frames seen since start; drives cosmetic animation
    pub ticks: u64,
    pub terminal_size: Option<(u16, u16)>,
    pub status_message: Option<String>,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            should_quit: false,
            should_suspend: false,
            loaded: false,
            load_delay: Duration::from_millis(100),
            ticks: 0,
            terminal_size: None,
            status_message: None,
        }
    }
}

impl SystemState {
    pub fn new(load_delay: Duration) -> Self {
        Self {
            load_delay,
            ..Default::default()
        }
    }

    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Init => {
                self.loaded = false;
                vec![Cmd::ScheduleLoaded {
                    after: self.load_delay,
                }]
            }

            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                self.terminal_size = Some((width, height));
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::Tick => {
                self.ticks = self.ticks.wrapping_add(1);
                vec![]
            }

            SystemMsg::Loaded => {
                self.loaded = true;
                vec![Cmd::RequestRender]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }
        }
    }
}
