use crate::error::{ClientError, Result};
use crate::selection::{SelectionStore, SubmittedItem};
use crate::upload::FileOutcome;
use derivative::Derivative;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use tracing::{debug, info};

pub type ValidationOutcome = Result<Vec<FileOutcome>>;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationPhase {
    Idle,
    Submitting { submitted: usize },
}

impl Default for ValidationPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Drives the validate button: `Idle -> Submitting -> Idle`, one request
/// at a time.
#[derive(Derivative, Default)]
#[derivative(Debug)]
pub struct ValidationController {
    phase: ValidationPhase,
    #[derivative(Debug = "ignore")]
    receiver: Option<Receiver<ValidationOutcome>>,
}

impl ValidationController {
    pub fn phase(&self) -> &ValidationPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, ValidationPhase::Submitting { .. })
    }

    pub fn trigger_enabled(&self, selection: &SelectionStore) -> bool {
        !self.is_submitting() && !selection.is_empty()
    }

    /// Moves to `Submitting` and hands back what to send plus the channel
    /// the worker reports on. Returns `None` when the trigger is disabled.
    pub fn begin(
        &mut self,
        selection: &SelectionStore,
    ) -> Option<(Vec<SubmittedItem>, Sender<ValidationOutcome>)> {
        if !self.trigger_enabled(selection) {
            debug!(phase = ?self.phase, "validation trigger ignored");
            return None;
        }

        let items = selection.snapshot();
        let (sender, receiver) = mpsc::channel();
        self.receiver = Some(receiver);
        self.phase = ValidationPhase::Submitting {
            submitted: items.len(),
        };
        info!(files = items.len(), "validation submitted");
        Some((items, sender))
    }

    pub fn poll(&mut self) -> Option<ValidationOutcome> {
        let receiver = self.receiver.as_ref()?;
        let outcome = match receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(ClientError::WorkerGone),
        };

        self.receiver = None;
        self.phase = ValidationPhase::Idle;
        Some(outcome)
    }
}
