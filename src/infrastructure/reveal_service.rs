use std::{collections::BTreeMap, mem};

use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    core::raw_msg::RawMsg,
    domain::{
        reveal::{RevealDelay, RevealSnapshot, RunId},
        ui::RevealSlot,
    },
    infrastructure::reveal_handle::RevealHandle,
};

/// One revealer per page slot, with snapshots routed into the raw message channel
pub struct RevealService {
    slots: BTreeMap<RevealSlot, SlotRevealer>,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

struct SlotRevealer {
    handle: RevealHandle,
    forwarder: JoinHandle<()>,
}

impl RevealService {
    pub fn new(raw_tx: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            slots: BTreeMap::new(),
            raw_tx,
        }
    }

    /// Start (or restart) `slot` as run `run`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, slot: RevealSlot, run: RunId, target: &str, delay: RevealDelay) {
        let raw_tx = &self.raw_tx;
        let revealer = self
            .slots
            .entry(slot)
            .or_insert_with(|| SlotRevealer::spawn(slot, raw_tx.clone()));
        revealer.handle.start_run(run, target, delay);
        log::debug!("{slot}: revealing {} chars every {delay:?}", target.chars().count());
    }

    pub fn cancel(&mut self, slot: RevealSlot) {
        if let Some(revealer) = self.slots.get_mut(&slot) {
            revealer.handle.cancel();
        }
    }

    pub fn cancel_all(&mut self) {
        for revealer in self.slots.values_mut() {
            revealer.handle.cancel();
        }
    }

    pub fn is_running(&self, slot: RevealSlot) -> bool {
        self.slots
            .get(&slot)
            .is_some_and(|revealer| revealer.handle.is_running())
    }

    pub fn snapshot(&self, slot: RevealSlot) -> Option<RevealSnapshot> {
        self.slots
            .get(&slot)
            .and_then(|revealer| revealer.handle.snapshot())
    }

    /// Cancel every slot and stop forwarding.
    pub fn shutdown(&mut self) {
        for (slot, revealer) in mem::take(&mut self.slots) {
            revealer.stop();
            log::debug!("{slot}: revealer stopped");
        }
    }
}

impl Drop for RevealService {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl SlotRevealer {
    fn spawn(slot: RevealSlot, raw_tx: mpsc::UnboundedSender<RawMsg>) -> Self {
        let (handle, mut snapshot_rx) = RevealHandle::channel();
        let forwarder = tokio::spawn(async move {
            while let Some(snapshot) = snapshot_rx.recv().await {
                if raw_tx
                    .send(RawMsg::RevealProgress { slot, snapshot })
                    .is_err()
                {
                    break;
                }
            }
        });
        Self { handle, forwarder }
    }

    fn stop(mut self) {
        self.handle.cancel();
        self.forwarder.abort();
    }
}
