use color_eyre::eyre::Result;
use tokio::{
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
    time,
};

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
    },
    infrastructure::reveal_service::RevealService,
};

/// Command executor that turns Elm commands into timers, reveals and host requests
pub struct CmdExecutor {
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    reveals: RevealService,
    loaded_timer: Option<JoinHandle<()>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::Sender<()>>,
}

impl CmdExecutor {
    /// Create an executor whose services report back through `raw_tx`
    pub fn new(raw_tx: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            reveals: RevealService::new(raw_tx.clone()),
            raw_tx,
            loaded_timer: None,
            tui_sender: None,
            render_req_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::Sender<()>) {
        self.render_req_sender = Some(sender);
    }

    pub fn reveals(&self) -> &RevealService {
        &self.reveals
    }

    /// Execute a single command
    pub fn execute_command(&mut self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::StartReveal {
                slot,
                run,
                target,
                delay,
            } => {
                self.reveals.start(*slot, *run, target, *delay);
            }

            Cmd::CancelReveal { slot } => self.reveals.cancel(*slot),

            Cmd::CancelAllReveals => self.reveals.cancel_all(),

            Cmd::ScheduleLoaded { after } => {
                if let Some(previous) = self.loaded_timer.take() {
                    previous.abort();
                }
                let raw_tx = self.raw_tx.clone();
                let after = *after;
                self.loaded_timer = Some(tokio::spawn(async move {
                    time::sleep(after).await;
                    let _ = raw_tx.send(RawMsg::Loaded);
                }));
            }

            Cmd::RequestRender => {
                if let Some(sender) = &self.render_req_sender {
                    match sender.try_send(()) {
                        // A pending request already covers this one
                        Ok(()) | Err(TrySendError::Full(())) => {}
                        Err(TrySendError::Closed(())) => {
                            log::debug!("CmdExecutor: render request channel closed");
                        }
                    }
                } else {
                    log::trace!("CmdExecutor: no render sender configured; dropping request");
                }
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    })?;
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&mut self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }

    /// Stop every timer owned by the executor
    pub fn shutdown(&mut self) {
        self.reveals.shutdown();
        if let Some(timer) = self.loaded_timer.take() {
            timer.abort();
        }
    }
}

impl Drop for CmdExecutor {
    fn drop(&mut self) {
        if let Some(timer) = self.loaded_timer.take() {
            timer.abort();
        }
    }
}
