use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::domain::reveal::{RevealDelay, RevealSnapshot, RevealState, RunId};

type SharedState = Arc<Mutex<Option<RevealState>>>;

/// Live, cancellable reveal run.
///
/// Every committed step is published on the snapshot channel, starting with the
/// empty prefix when a run starts. At most one timer task is alive per handle:
/// starting a new run or cancelling invalidates the previous task's token while
/// holding the state lock, and a task re-checks its token under that same lock
/// before committing, so nothing from an old run is observable once `start` or
/// `cancel` has returned.
pub struct RevealHandle {
    state: SharedState,
    snapshot_tx: mpsc::UnboundedSender<RevealSnapshot>,
    active: Option<ActiveRun>,
    last_run: Option<RunId>,
}

struct ActiveRun {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl RevealHandle {
    pub fn new(snapshot_tx: mpsc::UnboundedSender<RevealSnapshot>) -> Self {
        Self {
            state: Arc::new(Mutex::new(None)),
            snapshot_tx,
            active: None,
            last_run: None,
        }
    }

    /// Create a handle together with the receiving end of its snapshot channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<RevealSnapshot>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Start (or restart) revealing `target`, numbering the run automatically.
    ///
    /// Must be called from within a tokio runtime when `target` is not empty.
    pub fn start(&mut self, target: impl Into<Arc<str>>, delay: RevealDelay) -> RunId {
        let run = self.last_run.map_or_else(RunId::default, RunId::next);
        self.start_run(run, target, delay);
        run
    }

    /// Start (or restart) revealing `target` as run `run`.
    pub fn start_run(&mut self, run: RunId, target: impl Into<Arc<str>>, delay: RevealDelay) {
        self.cancel();

        let token = CancellationToken::new();
        let complete = {
            let mut guard = lock(&self.state);
            let state = guard.insert(RevealState::new(run, target, delay));
            let _ = self.snapshot_tx.send(state.snapshot());
            state.is_complete()
        };
        self.last_run = Some(run);
        log::debug!("reveal run {run} started");

        if complete {
            return;
        }

        let task = tokio::spawn(drive(
            Arc::clone(&self.state),
            token.clone(),
            self.snapshot_tx.clone(),
            delay,
        ));
        self.active = Some(ActiveRun { token, task });
    }

    /// Stop the current run; the visible prefix stays where it is.
    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            {
                let _guard = lock(&self.state);
                active.token.cancel();
            }
            active.task.abort();
            if let Some(run) = self.last_run {
                log::debug!("reveal run {run} cancelled");
            }
        }
    }

    /// Snapshot of the current run, `None` before the first start.
    pub fn snapshot(&self) -> Option<RevealSnapshot> {
        lock(&self.state).as_ref().map(RevealState::snapshot)
    }

    pub fn visible(&self) -> String {
        lock(&self.state)
            .as_ref()
            .map(|state| state.visible().to_owned())
            .unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        lock(&self.state)
            .as_ref()
            .is_some_and(RevealState::is_complete)
    }

    /// Whether a timer is still scheduled for the current run.
    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| !active.task.is_finished())
    }

    pub fn last_run(&self) -> Option<RunId> {
        self.last_run
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn lock(state: &SharedState) -> MutexGuard<'_, Option<RevealState>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn pause(delay: Duration) {
    if delay.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(delay).await;
    }
}

async fn drive(
    state: SharedState,
    token: CancellationToken,
    snapshot_tx: mpsc::UnboundedSender<RevealSnapshot>,
    delay: RevealDelay,
) {
    loop {
        tokio::select! {
            biased;
            () = token.cancelled() => return,
            () = pause(delay.as_duration()) => {}
        }

        let complete = {
            let mut guard = lock(&state);
            if token.is_cancelled() {
                return;
            }
            let Some(snapshot) = guard.as_mut().and_then(RevealState::advance) else {
                return;
            };
            let complete = snapshot.is_complete();
            let _ = snapshot_tx.send(snapshot);
            complete
        };

        if complete {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn drain(rx: &mut mpsc::UnboundedReceiver<RevealSnapshot>) -> Vec<String> {
        let mut seen = Vec::new();
        while let Ok(snapshot) = rx.try_recv() {
            seen.push(snapshot.visible().to_owned());
        }
        seen
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_emits_empty_prefix_synchronously() {
        let (mut handle, mut rx) = RevealHandle::channel();
        let run = handle.start("abc", RevealDelay::default());

        assert_eq!(run, RunId::default());
        assert_eq!(drain(&mut rx), vec![""]);
        assert!(handle.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_are_numbered_in_order() {
        let (mut handle, _rx) = RevealHandle::channel();
        let first = handle.start("a", RevealDelay::default());
        let second = handle.start("b", RevealDelay::default());

        assert!(second > first);
        assert_eq!(handle.last_run(), Some(second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_target_never_schedules() {
        let (mut handle, mut rx) = RevealHandle::channel();
        handle.start("", RevealDelay::default());

        assert!(!handle.is_running());
        assert!(handle.is_complete());
        assert_eq!(drain(&mut rx), vec![""]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_still_steps_one_char_per_turn() {
        let (mut handle, mut rx) = RevealHandle::channel();
        handle.start("abc", RevealDelay::ZERO);

        // nothing beyond the initial snapshot happens synchronously
        assert_eq!(handle.visible(), "");

        while !handle.is_complete() {
            tokio::task::yield_now().await;
        }
        assert_eq!(drain(&mut rx), vec!["", "a", "ab", "abc"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_freezes_visible_prefix() {
        let (mut handle, mut rx) = RevealHandle::channel();
        let delay = RevealDelay::from_millis(10).expect("valid delay");
        handle.start("abcdef", delay);

        tokio::time::sleep(Duration::from_millis(25)).await;
        handle.cancel();
        let frozen = handle.visible();
        assert_eq!(frozen, "ab");

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(handle.visible(), frozen);
        assert!(!handle.is_running());
        assert_eq!(drain(&mut rx), vec!["", "a", "ab"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timer() {
        let (mut handle, mut rx) = RevealHandle::channel();
        handle.start("abcdef", RevealDelay::from_millis(10).expect("valid delay"));
        tokio::time::sleep(Duration::from_millis(15)).await;
        drop(handle);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(drain(&mut rx), vec!["", "a"]);
    }
}
