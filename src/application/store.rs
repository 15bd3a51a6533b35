//! Console state and the reducer that drives it
//!
//! All UI state lives in a single [`ConsoleState`] value. External events
//! (page load, submit click, a reply arriving) are expressed as [`Action`]s
//! and each one is applied as one atomic transition by [`ConsoleState::reduce`].
//!
//! Submissions are numbered. A completion carrying an older number than the
//! latest dispatched submission is dropped, so overlapping requests always
//! resolve to the newest one regardless of arrival order.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{
    FieldSelection, HealthReply, Projection, ResponseField, ResponseObject, ServerStatus,
    SubmitError, TransportError,
};

/// Progress of the most recent submission
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded(ResponseObject),
    Failed(SubmitError),
}

#[derive(Debug, Clone)]
pub enum Action {
    HealthCheckStarted,
    HealthCheckFinished(Result<HealthReply, TransportError>),
    InputChanged(String),
    SubmitStarted,
    SubmitFinished {
        seq: u64,
        result: Result<ResponseObject, SubmitError>,
    },
    SelectionReplaced(Vec<ResponseField>),
    FieldToggled(ResponseField),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsoleState {
    pub status: ServerStatus,
    pub input: String,
    pub phase: SubmissionPhase,
    pub selection: FieldSelection,
    latest_seq: u64,
}

impl ConsoleState {
    /// Apply one action. Returns false when the action was ignored.
    pub fn reduce(&mut self, action: Action) -> bool {
        match action {
            Action::HealthCheckStarted => {
                self.status = ServerStatus::Checking;
            }
            Action::HealthCheckFinished(result) => {
                self.status = ServerStatus::from(result);
            }
            Action::InputChanged(input) => {
                self.input = input;
            }
            Action::SubmitStarted => {
                self.latest_seq += 1;
                self.phase = SubmissionPhase::Submitting;
            }
            Action::SubmitFinished { seq, result } => {
                if seq != self.latest_seq {
                    tracing::debug!(
                        seq,
                        latest = self.latest_seq,
                        "Discarding result of superseded submission"
                    );
                    return false;
                }
                self.phase = match result {
                    Ok(response) => SubmissionPhase::Succeeded(response),
                    Err(err) => SubmissionPhase::Failed(err),
                };
            }
            Action::SelectionReplaced(fields) => {
                self.selection.replace(fields);
            }
            Action::FieldToggled(field) => {
                self.selection.toggle(field);
            }
        }
        true
    }

    /// Sequence number of the latest dispatched submission (0 before any)
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting)
    }

    pub fn response(&self) -> Option<&ResponseObject> {
        match &self.phase {
            SubmissionPhase::Succeeded(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SubmitError> {
        match &self.phase {
            SubmissionPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Current response reduced to the current selection, computed fresh
    pub fn projection(&self) -> Option<Projection> {
        self.response()
            .map(|response| response.project(&self.selection))
    }
}

type Listener = Box<dyn Fn(&ConsoleState) + Send + Sync>;

/// Owner of the console state.
///
/// Listeners are invoked with a snapshot after every applied transition and
/// must not subscribe new listeners from inside the callback.
#[derive(Default)]
pub struct Store {
    state: Mutex<ConsoleState>,
    listeners: Mutex<Vec<Listener>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ConsoleState {
        self.state().clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&ConsoleState) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }

    /// Apply an action and notify listeners if it changed anything
    pub fn dispatch(&self, action: Action) -> bool {
        self.transition(|state| {
            let applied = state.reduce(action);
            (applied, applied)
        })
    }

    /// Start a submission and return its sequence number
    pub fn begin_submission(&self) -> u64 {
        self.transition(|state| {
            state.reduce(Action::SubmitStarted);
            (state.latest_seq(), true)
        })
    }

    /// Runs `apply` under the state lock; listeners are called after the lock
    /// is released, only when `apply` reports a change.
    fn transition<R>(&self, apply: impl FnOnce(&mut ConsoleState) -> (R, bool)) -> R {
        let (outcome, snapshot) = {
            let mut state = self.state();
            let (outcome, changed) = apply(&mut state);
            (outcome, changed.then(|| state.clone()))
        };

        if let Some(snapshot) = snapshot {
            let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
            for listener in listeners.iter() {
                listener(&snapshot);
            }
        }
        outcome
    }

    fn state(&self) -> MutexGuard<'_, ConsoleState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
