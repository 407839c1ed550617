use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, CountdownCmd, TuiCommand},
    infrastructure::countdown_service::TimerOperation,
};

/// Command executor that routes Elm commands to the services owning the side effects
#[derive(Clone, Default)]
pub struct CmdExecutor {
    countdown_sender: Option<mpsc::UnboundedSender<TimerOperation>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    /// Create an executor with no services attached; every command is dropped with a warning
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the countdown service operation sender.
    pub fn set_countdown_sender(&mut self, sender: mpsc::UnboundedSender<TimerOperation>) {
        self.countdown_sender = Some(sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command by forwarding it to the matching service
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::Countdown(countdown_cmd) => {
                let Some(tx) = &self.countdown_sender else {
                    log::warn!("CmdExecutor: countdown service not configured; dropping {countdown_cmd:?}");
                    return Ok(());
                };
                let op = match countdown_cmd {
                    CountdownCmd::Schedule { sequence_id, delay } => TimerOperation::Arm {
                        sequence_id: *sequence_id,
                        delay: *delay,
                    },
                    CountdownCmd::Cancel => TimerOperation::Disarm,
                };
                tx.send(op)?;
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.send(());
                } else {
                    log::debug!("CmdExecutor: render request dropped (no render sender configured)");
                }
            }

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        let _ = tx.send(TuiCommand::Resize {
                            width: *width,
                            height: *height,
                        });
                        return Ok(());
                    }
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            },
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
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

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_countdown_sender: self.countdown_sender.is_some(),
            is_countdown_sender_closed: self.countdown_sender.as_ref().map(|s| s.is_closed()),
            has_tui_sender: self.tui_sender.is_some(),
            has_render_req_sender: self.render_req_sender.is_some(),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdExecutorStats {
    pub has_countdown_sender: bool,
    pub is_countdown_sender_closed: Option<bool>,
    pub has_tui_sender: bool,
    pub has_render_req_sender: bool,
}
