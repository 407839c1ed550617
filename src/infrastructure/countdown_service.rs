use std::time::Duration;

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{sleep_until, Instant},
};
use tokio_util::sync::CancellationToken;

use crate::core::raw_msg::RawMsg;

/// Operations accepted by the countdown service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerOperation {
    /// Fire `RawMsg::CountdownElapsed { sequence_id }` after `delay`,
    /// replacing whatever was pending
    Arm { sequence_id: u64, delay: Duration },
    /// Drop the pending tick
    Disarm,
}

/// Single-shot countdown timer running as a background task.
/// At most one tick is pending at any time.
pub struct CountdownService {
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<TimerOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewCountdownService = (
    mpsc::UnboundedSender<TimerOperation>, // op_tx - operations to send
    CancellationToken,                     // shutdown signal
    CountdownService,
);

impl CountdownService {
    pub fn new(raw_tx: mpsc::UnboundedSender<RawMsg>) -> NewCountdownService {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                op_rx,
                cancel_token,
                raw_tx,
            },
        )
    }

    /// Run the service in a background task
    pub fn run(mut self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run_service().await;
        })
    }

    async fn run_service(&mut self) {
        let mut pending: Option<(u64, Instant)> = None;

        loop {
            let deadline = pending;
            tokio::select! {
                _ = async move {
                    match deadline {
                        Some((_, at)) => sleep_until(at).await,
                        None => std::future::pending::<()>().await,
                    }
                } => {
                    if let Some((sequence_id, _)) = pending.take() {
                        log::debug!("countdown tick for sequence {sequence_id}");
                        if self.raw_tx.send(RawMsg::CountdownElapsed { sequence_id }).is_err() {
                            log::warn!("CountdownService: runtime receiver dropped");
                            break;
                        }
                    }
                }

                result = self.op_rx.recv() => {
                    match result {
                        Some(op) => Self::handle_operation(op, &mut pending),
                        None => {
                            log::info!("CountdownService: operation channel closed");
                            break;
                        }
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("CountdownService received cancellation signal");
                    break;
                }
            }
        }
    }

    fn handle_operation(op: TimerOperation, pending: &mut Option<(u64, Instant)>) {
        log::debug!("Handling TimerOperation: {op:?}");
        match op {
            TimerOperation::Arm { sequence_id, delay } => {
                *pending = Some((sequence_id, Instant::now() + delay));
            }
            TimerOperation::Disarm => {
                *pending = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_armed_tick_is_delivered() {
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        let (op_tx, cancel, service) = CountdownService::new(raw_tx);
        let handle = service.run();

        op_tx
            .send(TimerOperation::Arm {
                sequence_id: 4,
                delay: Duration::from_secs(1),
            })
            .expect("service alive");

        let msg = raw_rx.recv().await;
        assert_eq!(msg, Some(RawMsg::CountdownElapsed { sequence_id: 4 }));

        cancel.cancel();
        handle.await.expect("service task joins");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_replaces_pending_tick() {
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        let (op_tx, cancel, service) = CountdownService::new(raw_tx);
        let handle = service.run();

        op_tx
            .send(TimerOperation::Arm {
                sequence_id: 1,
                delay: Duration::from_secs(5),
            })
            .expect("service alive");
        op_tx
            .send(TimerOperation::Arm {
                sequence_id: 2,
                delay: Duration::from_secs(1),
            })
            .expect("service alive");

        assert_eq!(
            raw_rx.recv().await,
            Some(RawMsg::CountdownElapsed { sequence_id: 2 })
        );

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(raw_rx.try_recv().is_err());

        cancel.cancel();
        handle.await.expect("service task joins");
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarm_drops_pending_tick() {
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        let (op_tx, cancel, service) = CountdownService::new(raw_tx);
        let handle = service.run();

        op_tx
            .send(TimerOperation::Arm {
                sequence_id: 1,
                delay: Duration::from_secs(1),
            })
            .expect("service alive");
        op_tx.send(TimerOperation::Disarm).expect("service alive");

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(raw_rx.try_recv().is_err());

        cancel.cancel();
        handle.await.expect("service task joins");
    }

    #[tokio::test]
    async fn test_cancellation_stops_service() {
        let (raw_tx, _raw_rx) = mpsc::unbounded_channel();
        let (op_tx, cancel, service) = CountdownService::new(raw_tx);
        let handle = service.run();

        cancel.cancel();
        handle.await.expect("service task joins");
        assert!(op_tx.send(TimerOperation::Disarm).is_err());
    }
}
