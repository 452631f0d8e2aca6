use crate::{
    core::{cmd::Cmd, msg::reveal::RevealMsg},
    domain::{
        reveal::{RevealDelay, RevealSnapshot, RunId},
        ui::RevealSlot,
    },
    infrastructure::config::RevealConfig,
};

/// What the page shows for one typewriter slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealView {
    pub target: String,
    pub delay: RevealDelay,
    /// Run currently requested for this slot, `None` before the first start
    pub run: Option<RunId>,
    pub visible: String,
    pub complete: bool,
    /// Snapshots are ignored while false (not started yet, or cancelled)
    accepting: bool,
}

impl RevealView {
    pub fn new(target: impl Into<String>, delay: RevealDelay) -> Self {
        Self {
            target: target.into(),
            delay,
            run: None,
            visible: String::new(),
            complete: false,
            accepting: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.accepting && !self.complete
    }

    fn start(&mut self, slot: RevealSlot) -> Cmd {
        let run = self.run.map_or_else(RunId::default, RunId::next);
        self.run = Some(run);
        self.visible.clear();
        self.complete = false;
        self.accepting = true;
        Cmd::StartReveal {
            slot,
            run,
            target: self.target.clone(),
            delay: self.delay,
        }
    }

    /// Apply a snapshot if it belongs to the current run.
    fn apply(&mut self, snapshot: &RevealSnapshot) -> bool {
        if !self.accepting || Some(snapshot.run()) != self.run {
            return false;
        }
        snapshot.visible().clone_into(&mut self.visible);
        self.complete = snapshot.is_complete();
        true
    }
}

/// Typewriter slots of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealsState {
    pub status: RevealView,
    pub description: RevealView,
}

impl Default for RevealsState {
    fn default() -> Self {
        let speeds = RevealConfig::default();
        Self::new(speeds.status_delay, speeds.description_delay)
    }
}

impl RevealsState {
    pub fn new(status_delay: RevealDelay, description_delay: RevealDelay) -> Self {
        use crate::domain::repo::{DESCRIPTION, STATUS_TEXT};

        Self {
            status: RevealView::new(STATUS_TEXT, status_delay),
            description: RevealView::new(DESCRIPTION, description_delay),
        }
    }

    pub fn get(&self, slot: RevealSlot) -> &RevealView {
        match slot {
            RevealSlot::Status => &self.status,
            RevealSlot::Description => &self.description,
        }
    }

    pub fn get_mut(&mut self, slot: RevealSlot) -> &mut RevealView {
        match slot {
            RevealSlot::Status => &mut self.status,
            RevealSlot::Description => &mut self.description,
        }
    }

    pub fn update(&mut self, msg: RevealMsg) -> Vec<Cmd> {
        match msg {
            RevealMsg::Start {
                slot,
                target,
                delay,
            } => {
                let view = self.get_mut(slot);
                view.target = target;
                view.delay = delay;
                vec![view.start(slot), Cmd::RequestRender]
            }

            RevealMsg::Replay => {
                use strum::IntoEnumIterator;

                let mut cmds: Vec<Cmd> = RevealSlot::iter()
                    .map(|slot| self.get_mut(slot).start(slot))
                    .collect();
                cmds.push(Cmd::RequestRender);
                cmds
            }

            RevealMsg::Progress { slot, snapshot } => {
                if self.get_mut(slot).apply(&snapshot) {
                    vec![Cmd::RequestRender]
                } else {
                    log::trace!("dropping stale snapshot {} for {slot}", snapshot.run());
                    vec![]
                }
            }

            RevealMsg::Cancel { slot } => {
                self.get_mut(slot).accepting = false;
                vec![Cmd::CancelReveal { slot }]
            }

            RevealMsg::CancelAll => {
                self.status.accepting = false;
                self.description.accepting = false;
                vec![Cmd::CancelAllReveals]
            }
        }
    }
}
