use std::collections::VecDeque;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::{CmdExecutor, CmdExecutorStats},
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    infrastructure::countdown_service::TimerOperation,
};

/// Owns the state and the message/command queues, and drives update cycles
pub struct Runtime {
    ctx: UpdateContext<'static>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    /// Create a new Runtime reading the system clock and the random thermal probe
    pub fn new(initial_state: AppState) -> Self {
        Self::new_with_context(initial_state, UpdateContext::system())
    }

    /// Create a new Runtime with injected clock and sensors
    pub fn new_with_context(initial_state: AppState, ctx: UpdateContext<'static>) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            ctx,
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: CmdExecutor::new(),
        }
    }

    /// Route countdown commands to the countdown service
    pub fn add_countdown_sender(&mut self, sender: mpsc::UnboundedSender<TimerOperation>) {
        self.cmd_executor.set_countdown_sender(sender);
    }

    /// Add TUI command sender (for TuiCommand execution)
    pub fn add_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(sender);
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.cmd_executor.set_render_request_sender(sender);
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender, used by background services
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Take the pending commands out of the queue
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(vec![]);
        }
        self.cmd_executor.execute_commands(&commands)
    }

    /// Execute a single command immediately
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        self.cmd_executor.execute_command(cmd)
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("processing {msg:?}");
        }
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update_with_context(msg, state, &self.ctx);
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate queued raw messages and process every resulting message
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages are translated against the state at the time they are handled,
        // so a key press following a reset sees the reset state.
        while let Some(raw_msg) = self.next_raw_msg() {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                all_commands.extend(self.process_message(msg));
            }
        }

        // Process domain messages in internal queue
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        // Process domain messages from external sources
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Wait for a background service to deliver a raw message and queue it.
    /// Returns `false` once every raw sender is gone.
    pub async fn wait_raw_msg(&mut self) -> bool {
        match self.raw_msg_rx.recv().await {
            Some(raw_msg) => {
                self.raw_msg_queue.push_back(raw_msg);
                true
            }
            None => false,
        }
    }

    fn next_raw_msg(&mut self) -> Option<RawMsg> {
        self.raw_msg_queue
            .pop_front()
            .or_else(|| self.raw_msg_rx.try_recv().ok())
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            log_entries: self.state.console.log.len(),
            sequence_id: self.state.console.sequence_id,
            executor: self.cmd_executor.get_stats(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub log_entries: usize,
    pub sequence_id: u64,
    pub executor: CmdExecutorStats,
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            msg::{console::ConsoleMsg, system::SystemMsg},
            sensors::FixedClock,
        },
        domain::{diagnostics::FixedThermalProbe, status::DiagnosticsStatus},
        infrastructure::config::Config,
    };

    static CLOCK: FixedClock = FixedClock::at(1_709_642_096);
    static PROBE: FixedThermalProbe = FixedThermalProbe(42.0);

    fn create_test_runtime() -> Runtime {
        let config = Config::defaults().expect("embedded config parses");
        Runtime::new_with_context(
            AppState::new_with_config(config),
            UpdateContext {
                clock: &CLOCK,
                thermal: &PROBE,
            },
        )
    }

    #[test]
    fn test_runtime_creation() {
        let runtime = create_test_runtime();
        let stats = runtime.get_stats();

        assert_eq!(stats.queued_messages, 0);
        assert_eq!(stats.queued_commands, 0);
        assert_eq!(stats.log_entries, 0);
        assert!(!stats.executor.has_countdown_sender);
    }

    #[test]
    fn test_send_and_process_message() {
        let mut runtime = create_test_runtime();

        runtime.send_msg(Msg::Console(ConsoleMsg::RunDiagnostics));
        let commands = runtime.process_all_messages();

        assert_eq!(commands, vec![Cmd::RequestRender]);
        assert_eq!(
            runtime.state().console.diagnostics_status,
            Some(DiagnosticsStatus::Passed)
        );
        assert_eq!(runtime.get_stats().queued_commands, 1);
    }

    #[test]
    fn test_raw_message_translation() {
        let mut runtime = create_test_runtime();

        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::F(2),
            KeyModifiers::NONE,
        )));
        runtime.process_all_messages();

        assert_eq!(
            runtime.state().console.diagnostics_status,
            Some(DiagnosticsStatus::Passed)
        );
    }

    #[test]
    fn test_raw_sender_feeds_runtime() {
        let mut runtime = create_test_runtime();
        let raw_tx = runtime.get_raw_sender();

        raw_tx.send(RawMsg::Quit).expect("runtime alive");
        runtime.process_all_messages();

        assert!(runtime.state().system.should_quit);
    }

    #[tokio::test]
    async fn test_wait_raw_msg_queues_delivery() {
        let mut runtime = create_test_runtime();
        let raw_tx = runtime.get_raw_sender();

        raw_tx.send(RawMsg::Quit).expect("runtime alive");
        assert!(runtime.wait_raw_msg().await);
        assert_eq!(runtime.get_stats().queued_raw_messages, 1);

        runtime.process_all_messages();
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_external_msg_sender() {
        let mut runtime = create_test_runtime();
        let tx = runtime.get_sender();

        tx.send(Msg::System(SystemMsg::UpdateStatusMessage("ready".into())))
            .expect("runtime alive");
        runtime.process_all_messages();

        assert_eq!(runtime.state().system.status_message.as_deref(), Some("ready"));
    }

    #[test]
    fn test_run_update_cycle_routes_countdown() {
        let mut runtime = create_test_runtime();
        let (op_tx, mut op_rx) = mpsc::unbounded_channel();
        runtime.add_countdown_sender(op_tx);

        runtime.send_msg(Msg::Console(ConsoleMsg::AuthorizationCodeChanged(
            "00000000".into(),
        )));
        runtime.send_msg(Msg::Console(ConsoleMsg::InitiateSequence));
        let log = runtime.run_update_cycle().expect("cycle");

        assert!(log.iter().any(|l| l == "✓ Executed: Countdown(Schedule)"));
        assert!(matches!(
            op_rx.try_recv(),
            Ok(TimerOperation::Arm { sequence_id: 1, .. })
        ));
        assert_eq!(runtime.get_stats().queued_commands, 0);
    }

    #[test]
    fn test_pending_commands_drains_queue() {
        let mut runtime = create_test_runtime();

        runtime.send_msg(Msg::System(SystemMsg::Resize(120, 40)));
        runtime.process_all_messages();

        assert_eq!(
            runtime.pending_commands(),
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 120,
                height: 40
            })]
        );
        assert!(runtime.pending_commands().is_empty());
    }
}
