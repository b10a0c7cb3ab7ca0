//! Background timers for the glitch transition
//!
//! Two kinds of scheduled work exist, each owned by one tokio task that only
//! sends messages back to the TEA loop:
//! - the single-shot settle timer, replaced on every new transition;
//! - the repeating noise ticker, running while the transition lasts.
//!
//! Both are aborted on [`TimerSet::shutdown`] (and on drop).

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use glitch_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Owner of the settle timer and noise ticker tasks
#[derive(Debug)]
pub struct TimerSet {
    msg_tx: mpsc::Sender<Message>,
    settle: Option<JoinHandle<()>>,
    noise: Option<JoinHandle<()>>,
}

impl TimerSet {
    pub fn new(msg_tx: mpsc::Sender<Message>) -> Self {
        Self {
            msg_tx,
            settle: None,
            noise: None,
        }
    }

    /// Perform an action returned by the update function
    pub fn handle_action(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::BeginTransition {
                generation,
                settle_after,
                noise_every,
            } => {
                self.schedule_settle(generation, settle_after);
                self.start_noise(generation, noise_every);
            }
            UpdateAction::EndTransition => self.stop_noise(),
        }
    }

    /// Arm the settle timer, cancelling any pending one.
    fn schedule_settle(&mut self, generation: u64, delay: Duration) {
        if let Some(previous) = self.settle.take() {
            previous.abort();
        }

        let tx = self.msg_tx.clone();
        self.settle = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            if tx
                .send(Message::SettleElapsed { generation })
                .await
                .is_err()
            {
                debug!("Settle timer fired after the message loop closed");
            }
        }));
        trace!("Settle timer armed for transition {} ({:?})", generation, delay);
    }

    /// Start the noise ticker, replacing any running one.
    fn start_noise(&mut self, generation: u64, period: Duration) {
        self.stop_noise();

        let tx = self.msg_tx.clone();
        self.noise = Some(tokio::spawn(async move {
            // First block appears one period in, not immediately
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                let at = ticker.tick().await.into_std();
                if tx.send(Message::NoiseTick { generation, at }).await.is_err() {
                    break;
                }
            }
        }));
    }

    fn stop_noise(&mut self) {
        if let Some(ticker) = self.noise.take() {
            ticker.abort();
        }
    }

    /// Whether a settle timer is still waiting to fire
    pub fn settle_pending(&self) -> bool {
        self.settle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Whether the noise ticker is running
    pub fn noise_running(&self) -> bool {
        self.noise.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel all pending timers
    pub fn shutdown(&mut self) {
        if let Some(settle) = self.settle.take() {
            settle.abort();
        }
        self.stop_noise();
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTLE: Duration = Duration::from_millis(2500);
    const NOISE: Duration = Duration::from_millis(40);

    fn begin(generation: u64) -> UpdateAction {
        UpdateAction::BeginTransition {
            generation,
            settle_after: SETTLE,
            noise_every: NOISE,
        }
    }

    /// Receive until the first settle message, counting noise ticks
    async fn run_until_settle(rx: &mut mpsc::Receiver<Message>) -> (u64, Vec<u64>) {
        let mut noise_generations = Vec::new();
        while let Some(msg) = rx.recv().await {
            match msg {
                Message::SettleElapsed { generation } => return (generation, noise_generations),
                Message::NoiseTick { generation, .. } => noise_generations.push(generation),
                other => panic!("unexpected message {:?}", other),
            }
        }
        panic!("channel closed before settle");
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_fires_after_duration() {
        let (tx, mut rx) = mpsc::channel(256);
        let mut timers = TimerSet::new(tx);
        let started = Instant::now();

        timers.handle_action(begin(1));
        let (generation, ticks) = run_until_settle(&mut rx).await;

        assert_eq!(generation, 1);
        assert!(started.elapsed() >= SETTLE);
        // 40ms cadence over 2.5s
        assert!((61..=63).contains(&ticks.len()), "got {} ticks", ticks.len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_transition_replaces_pending_timer() {
        let (tx, mut rx) = mpsc::channel(256);
        let mut timers = TimerSet::new(tx);

        timers.handle_action(begin(1));
        timers.handle_action(begin(2));
        let (generation, ticks) = run_until_settle(&mut rx).await;

        assert_eq!(generation, 2);
        assert!(ticks.iter().all(|g| *g == 2));

        timers.shutdown();
        time::sleep(SETTLE * 2).await;
        while let Ok(msg) = rx.try_recv() {
            assert!(
                !matches!(msg, Message::SettleElapsed { .. }),
                "replaced timer fired: {:?}",
                msg
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_transition_stops_noise() {
        let (tx, mut rx) = mpsc::channel(256);
        let mut timers = TimerSet::new(tx);

        timers.handle_action(begin(1));
        run_until_settle(&mut rx).await;
        timers.handle_action(UpdateAction::EndTransition);
        tokio::task::yield_now().await;
        assert!(!timers.noise_running());

        while rx.try_recv().is_ok() {}
        time::sleep(NOISE * 10).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_everything() {
        let (tx, mut rx) = mpsc::channel(256);
        let mut timers = TimerSet::new(tx);

        timers.handle_action(begin(1));
        assert!(timers.settle_pending());
        timers.shutdown();
        tokio::task::yield_now().await;

        assert!(!timers.settle_pending());
        assert!(!timers.noise_running());
        time::sleep(SETTLE * 2).await;
        assert!(rx.try_recv().is_err());
    }
}
