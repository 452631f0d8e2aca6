use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        stats_service::StatsService,
        tui::{event_source::SharedTui, Event, EventSource},
    },
    integration::{
        coalescer::Coalescer, renderer::Renderer, runtime::Runtime,
        update_executor::UpdateExecutor,
    },
};

/// Drives the page: terminal events in, Elm update cycle, coalesced rendering out
pub struct AppRunner {
    runtime: Runtime,
    tui: SharedTui,
    events: EventSource,
    renderer: Renderer,
    coalescer: Coalescer,
    render_req_rx: mpsc::Receiver<()>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    stats_token: CancellationToken,
    stats_task: Option<JoinHandle<()>>,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Create a runner whose events come from `events` and frames go to `tui`.
    pub async fn new_with_config(config: Config, tui: SharedTui, events: EventSource) -> Result<Self> {
        let mut runtime = Runtime::new_with_executor(AppState::new(config.clone()));

        // Capacity 1: any number of requests between two frames collapse into one
        let (render_req_tx, render_req_rx) = mpsc::channel(1);
        runtime.add_render_request_sender(render_req_tx).map_err(|e| eyre!(e))?;

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx).map_err(|e| eyre!(e))?;

        let (stats_token, stats_service) = StatsService::new(&config.stats, runtime.get_raw_sender());
        let stats_task = Some(stats_service.run());

        Ok(Self {
            runtime,
            tui,
            events,
            renderer: Renderer::new(),
            coalescer: Coalescer::default(),
            render_req_rx,
            tui_cmd_rx,
            stats_token,
            stats_task,
        })
    }

    /// Create a runner that reads events from the terminal it draws to.
    pub async fn new_with_real(config: Config, tui: SharedTui) -> Result<Self> {
        let events = EventSource::real(tui.clone());
        Self::new_with_config(config, tui, events).await
    }

    /// Run until quit is requested or the event source runs dry.
    pub async fn run(&mut self) -> Result<()> {
        self.start().await?;

        while let Some(event) = self.events.next().await {
            self.handle_event(event).await?;
            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.shutdown().await
    }

    /// Enter the terminal and seed the page with its current size.
    pub async fn start(&mut self) -> Result<()> {
        let size = {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            tui.size()?
        };
        self.coalescer.request_resize(size.width, size.height);
        Ok(())
    }

    /// Process one terminal event through a full update cycle.
    pub async fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Some(raw) = self.translate_event(event) {
            self.runtime.send_raw_msg(raw);
        }

        UpdateExecutor::process_update_cycle(&mut self.runtime, &mut self.coalescer);
        self.apply_tui_commands().await?;

        if self.runtime.state().system.should_suspend {
            self.suspend().await?;
        }

        while self.render_req_rx.try_recv().is_ok() {
            self.coalescer.request_render();
        }
        if self.coalescer.take_render() {
            self.renderer.render(&self.tui, self.runtime.state()).await?;
        }
        Ok(())
    }

    fn translate_event(&mut self, event: Event) -> Option<RawMsg> {
        match event {
            Event::Init => Some(RawMsg::Init),
            Event::Quit | Event::Closed => Some(RawMsg::Quit),
            Event::Error => Some(RawMsg::Error("terminal event stream failed".to_string())),
            Event::Tick => Some(RawMsg::Tick),
            Event::Render => {
                self.coalescer.request_render();
                Some(RawMsg::Render)
            }
            Event::Resize(width, height) => {
                self.coalescer.request_resize(width, height);
                None
            }
            Event::Key(key) => Some(RawMsg::Key(key)),
            Event::Mouse(mouse) => Some(RawMsg::Mouse(mouse)),
            Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
        }
    }

    async fn apply_tui_commands(&mut self) -> Result<()> {
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui.lock().await.resize(Rect::new(0, 0, width, height))?;
                    self.coalescer.request_render();
                }
            }
        }
        Ok(())
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("suspending");
        let size = {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
            tui.size()?
        };
        log::info!("resumed");

        self.runtime.send_raw_msg(RawMsg::Resume);
        self.coalescer.request_resize(size.width, size.height);
        UpdateExecutor::process_update_cycle(&mut self.runtime, &mut self.coalescer);
        self.apply_tui_commands().await
    }

    /// Stop every timer and leave the terminal.
    pub async fn shutdown(&mut self) -> Result<()> {
        self.stats_token.cancel();
        if let Some(task) = self.stats_task.take() {
            if let Err(e) = task.await {
                log::warn!("star ticker ended abnormally: {e}");
            }
        }
        self.runtime.shutdown();
        self.tui.lock().await.exit()
    }
}

impl Drop for AppRunner {
    fn drop(&mut self) {
        self.stats_token.cancel();
    }
}
