use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::TuiCommand,
        raw_msg::RawMsg,
        state::AppState,
        update::UpdateContext,
    },
    infrastructure::{
        config::Config,
        countdown_service::CountdownService,
        tui::{self, event_source::EventSource, real::RealTui},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the Elm runtime: terminal events in, update cycle, commands out, render.
/// The terminal is injected so tests can run against a `TestTui`.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    event_source: EventSource,
    renderer: Renderer,
    render_req_rx: mpsc::UnboundedReceiver<()>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    countdown_cancel: CancellationToken,
    countdown_task: Option<JoinHandle<()>>,
}

impl AppRunner {
    /// Create a runner reading the system clock and the random thermal probe
    pub async fn new_with_config(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        event_source: EventSource,
    ) -> Result<Self> {
        Self::new_with_context(config, tui, event_source, UpdateContext::system()).await
    }

    /// Create a runner with injected clock and sensors
    pub async fn new_with_context(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        event_source: EventSource,
        ctx: UpdateContext<'static>,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config);
        let mut runtime = Runtime::new_with_context(initial_state, ctx);

        // Countdown ticks come back as raw messages
        let (countdown_tx, countdown_cancel, countdown_service) =
            CountdownService::new(runtime.get_raw_sender());
        let countdown_task = countdown_service.run();
        runtime.add_countdown_sender(countdown_tx);

        let (render_req_tx, render_req_rx) = mpsc::unbounded_channel();
        runtime.add_render_request_sender(render_req_tx);
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx);

        Ok(Self {
            runtime,
            tui,
            event_source,
            renderer: Renderer::new(),
            render_req_rx,
            tui_cmd_rx,
            countdown_cancel,
            countdown_task: Some(countdown_task),
        })
    }

    /// Create a runner on the real terminal, which is also the event source
    pub async fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Result<Self> {
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = tui;
        let event_source = EventSource::real(tui.clone());
        Self::new_with_config(config, tui, event_source).await
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Run the main loop until quit is requested or the event source is exhausted
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        let result = self.run_loop().await;

        self.shutdown().await;
        self.tui.lock().await.exit()?;
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        loop {
            let more = self.run_one_cycle().await?;
            if self.state().system.should_quit {
                log::info!("quit requested");
                return Ok(());
            }
            if !more {
                log::info!("event source exhausted");
                return Ok(());
            }
        }
    }

    /// Handle one terminal event, or one countdown tick, and everything it causes.
    /// Returns `false` once the event source has nothing more to deliver.
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let (event, more) = tokio::select! {
            biased;
            event = self.event_source.next() => {
                let more = event.is_some();
                (event, more)
            }
            true = self.runtime.wait_raw_msg() => (None, true),
        };
        let saw_tui_render = match event {
            Some(event) => self.handle_event(event),
            None => false,
        };

        self.update_cycle();

        if self.state().system.should_suspend {
            self.suspend().await?;
        }

        let mut resizes = Vec::new();
        while let Ok(TuiCommand::Resize { width, height }) = self.tui_cmd_rx.try_recv() {
            resizes.push((width, height));
        }
        let resize = Coalescer::decide_resize(&resizes);
        if let Some((width, height)) = resize {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
        }

        let mut render_reqs = 0;
        while self.render_req_rx.try_recv().is_ok() {
            render_reqs += 1;
        }
        if Coalescer::decide_render(render_reqs, saw_tui_render, resize.is_some()) {
            self.render().await?;
        }

        Ok(more)
    }

    /// Forward a terminal event to the runtime. Returns whether it was a render tick.
    fn handle_event(&mut self, event: tui::Event) -> bool {
        match event {
            tui::Event::Quit | tui::Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            tui::Event::Render => return true,
            tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("terminal event error".to_string())),
            tui::Event::Init | tui::Event::FocusGained | tui::Event::FocusLost => {}
        }
        false
    }

    fn update_cycle(&mut self) {
        match self.runtime.run_update_cycle() {
            Ok(log) => {
                for line in log.iter().filter(|l| l.starts_with('✗')) {
                    log::warn!("{line}");
                }
            }
            Err(e) => {
                log::error!("Runtime error: {e}");
                // Surface the error via RawMsg on the next cycle
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }
        }
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("suspending");
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.update_cycle();
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state().clone();
        self.renderer.render(&self.tui, &state).await
    }

    /// Stop the countdown service and wait for it to finish
    pub async fn shutdown(&mut self) {
        self.countdown_cancel.cancel();
        if let Some(task) = self.countdown_task.take() {
            if let Err(e) = task.await {
                log::warn!("countdown service ended abnormally: {e}");
            }
        }
    }
}

impl Drop for AppRunner {
    fn drop(&mut self) {
        self.countdown_cancel.cancel();
    }
}
