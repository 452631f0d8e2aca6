use std::time::Duration;

use rand::Rng;
use tokio::{sync::mpsc, task::JoinHandle, time};
use tokio_util::sync::CancellationToken;

use crate::{core::raw_msg::RawMsg, infrastructure::config::StatsConfig};

/// Periodically reports new stars for the stats bar
pub struct StatsService {
    interval: Duration,
    max_increment: u64,
    cancel_token: CancellationToken,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

impl StatsService {
    /// Create the service together with its shutdown signal
    pub fn new(
        config: &StatsConfig,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
    ) -> (CancellationToken, Self) {
        let cancel_token = CancellationToken::new();
        (
            cancel_token.clone(),
            Self {
                interval: config.interval(),
                max_increment: config.max_increment,
                cancel_token,
                raw_tx,
            },
        )
    }

    /// Run the StatsService in background task
    pub fn run(self) -> JoinHandle<()> {
        tokio::spawn(self.run_service())
    }

    async fn run_service(self) {
        if self.interval.is_zero() {
            log::warn!("StatsService: zero interval, star ticker disabled");
            return;
        }

        let mut ticker = time::interval_at(time::Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    log::info!("StatsService received cancellation signal");
                    break;
                }

                _ = ticker.tick() => {
                    let stars = rand::rng().random_range(0..=self.max_increment);
                    if self.raw_tx.send(RawMsg::StarsTick(stars)).is_err() {
                        log::debug!("StatsService: raw channel closed");
                        break;
                    }
                }
            }
        }
    }
}
