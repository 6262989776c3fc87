use std::sync::Arc;
use std::time::Duration;

use laundry_api::models::Board;
use laundry_api::{Skipped, classify};
use time::OffsetDateTime;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::services::SnapshotFetcher;

/// Runs fetch, classify and publish once per period, one cycle at a time.
pub struct PollService {
    fetcher: Arc<dyn SnapshotFetcher>,
    period: Duration,
    sender: watch::Sender<Board>,
}

impl PollService {
    pub fn new(fetcher: Arc<dyn SnapshotFetcher>, period: Duration) -> (Self, watch::Receiver<Board>) {
        let (sender, receiver) = watch::channel(Board::pending());

        let service = Self {
            fetcher,
            period,
            sender,
        };

        (service, receiver)
    }

    /// Builds the board for one cycle. Fetch failures end up on the board.
    pub async fn run_cycle(&self) -> Board {
        let fetched_at = OffsetDateTime::now_utc();

        match self.fetcher.fetch().await {
            Ok(snapshot) => {
                let classification = classify(&snapshot.objects);

                for skipped in &classification.skipped {
                    match skipped {
                        Skipped::Unmatched { tag } => {
                            tracing::warn!("skipping object of unknown type {:?}", tag)
                        }
                    }
                }

                tracing::debug!(
                    "fetched {} objects: {} washers, {} dryers",
                    snapshot.objects.len(),
                    classification.washers.len(),
                    classification.dryers.len()
                );

                Board::from_classification(classification, fetched_at)
            }
            Err(e) => {
                tracing::warn!("failed to fetch room status: {}", e);

                Board::failed(format!("Error fetching data: {e}"), fetched_at)
            }
        }
    }

    /// Spawns the poll loop. The first cycle runs immediately.
    pub fn start(self) -> PollHandle {
        let (stop_tx, mut stop_rx) = oneshot::channel();

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            tracing::info!("polling room status every {:?}", self.period);

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = interval.tick() => {}
                }

                // A stalled upstream must not hold up shutdown.
                tokio::select! {
                    _ = &mut stop_rx => break,
                    board = self.run_cycle() => {
                        self.sender.send_replace(board);
                    }
                }
            }

            tracing::info!("poll loop stopped");
        });

        PollHandle { stop_tx, task }
    }
}

/// Owns a running poll loop. Dropping it also stops the loop.
pub struct PollHandle {
    stop_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Stops the loop, abandoning any cycle in flight, and waits for it to exit.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(());

        if let Err(e) = self.task.await {
            tracing::error!("poll loop ended abnormally: {}", e);
        }
    }
}
