//! Mirror timer.
//!
//! A tokio task that sends [`AppEvent::MirrorTick`] for one session at a
//! fixed period. The task lives exactly as long as its [`MirrorTicker`]
//! handle.

use std::time::Duration;

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tridigit_app::{AppEvent, SessionId};

/// Handle to a running mirror timer. Dropping it stops the timer.
#[derive(Debug)]
pub struct MirrorTicker {
    task: JoinHandle<()>,
}

impl MirrorTicker {
    /// Spawn a timer for `session`. The first tick fires one full `period`
    /// after this call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(
        session: SessionId,
        period: Duration,
        events: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if events.send(AppEvent::MirrorTick { session }).is_err() {
                    break;
                }
            }
        });
        Self { task }
    }
}

impl Drop for MirrorTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> usize {
        let mut count = 0;
        while rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }

    /// Let the spawned task observe the advanced clock.
    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _ticker = MirrorTicker::spawn(SessionId(7), Duration::from_secs(2), tx);
        settle().await;

        time::advance(Duration::from_millis(1999)).await;
        settle().await;
        assert_eq!(drain(&mut rx), 0);

        time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(rx.try_recv().ok(), Some(AppEvent::MirrorTick { session: SessionId(7) }));

        time::advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(drain(&mut rx), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = MirrorTicker::spawn(SessionId(1), Duration::from_secs(2), tx);
        settle().await;

        time::advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(drain(&mut rx), 1);

        drop(ticker);
        settle().await;
        time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(drain(&mut rx), 0);
    }
}
