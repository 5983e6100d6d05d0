//! Two-step farm deletion: nothing irreversible happens until the user
//! confirms, and a successful delete is followed by a full reload of the view.
//!
//! ```text
//! Idle --request--> PendingConfirmation --confirm--> Deleting --finish--> Idle
//!                          |                                   (reload on Ok)
//!                          +--cancel--> Idle
//! ```
//!
//! A second request while one is pending is refused: the first target stays.
//! A farm without an identifier cannot be deleted at all.

use common::model::farm::bare_document_id;

use super::error::ProfileFarmsError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeletionWorkflow {
    #[default]
    Idle,
    /// Waiting for the user to confirm or cancel. `target` is already bare.
    PendingConfirmation { target: String },
    /// Confirmed; the remote delete is in flight.
    Deleting { target: String },
}

/// Answer to [`DeletionWorkflow::request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionRequest {
    /// The confirmation dialog should now be shown.
    Accepted,
    /// Another deletion is awaiting confirmation or in flight.
    AlreadyPending,
    /// The farm's `documentUri` has no identifier left once its separators
    /// are stripped, so there is nothing to send.
    MissingIdentifier,
}

/// What the host has to do once the remote delete has answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// Re-fetch and re-render the hosting view from scratch.
    ReloadView,
    /// Nothing changed remotely; keep the current tree and tell the user.
    Failed(ProfileFarmsError),
}

impl DeletionWorkflow {
    /// Asks to delete the farm with `document_uri`. Only an accepted request
    /// changes the state.
    pub fn request(&mut self, document_uri: &str) -> DeletionRequest {
        if !matches!(self, DeletionWorkflow::Idle) {
            return DeletionRequest::AlreadyPending;
        }
        let target = bare_document_id(document_uri);
        if target.is_empty() {
            return DeletionRequest::MissingIdentifier;
        }
        *self = DeletionWorkflow::PendingConfirmation { target };
        DeletionRequest::Accepted
    }

    /// Drops a pending request. A no-op (returning `false`) in any other state.
    pub fn cancel(&mut self) -> bool {
        match self {
            DeletionWorkflow::PendingConfirmation { .. } => {
                *self = DeletionWorkflow::Idle;
                true
            }
            _ => false,
        }
    }

    /// Confirms the pending request and returns the bare identifier to hand
    /// to the delete call.
    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::take(self) {
            DeletionWorkflow::PendingConfirmation { target } => {
                *self = DeletionWorkflow::Deleting {
                    target: target.clone(),
                };
                Some(target)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Records the answer of the remote delete. `None` if no delete was in flight.
    pub fn finish(&mut self, result: Result<(), ProfileFarmsError>) -> Option<DeletionOutcome> {
        if !matches!(self, DeletionWorkflow::Deleting { .. }) {
            return None;
        }
        *self = DeletionWorkflow::Idle;

        Some(match result {
            Ok(()) => DeletionOutcome::ReloadView,
            Err(error) => DeletionOutcome::Failed(error),
        })
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            DeletionWorkflow::Idle => None,
            DeletionWorkflow::PendingConfirmation { target }
            | DeletionWorkflow::Deleting { target } => Some(target.as_str()),
        }
    }

    pub fn is_dialog_shown(&self) -> bool {
        !matches!(self, DeletionWorkflow::Idle)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, DeletionWorkflow::Deleting { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drives the workflow the way the component does, recording the calls
    /// made to the delete and reload collaborators.
    #[derive(Default)]
    struct Harness {
        workflow: DeletionWorkflow,
        delete_calls: Vec<String>,
        reloads: usize,
    }

    impl Harness {
        fn confirm_and_answer(&mut self, answer: Result<(), ProfileFarmsError>) -> Option<DeletionOutcome> {
            let farm_id = self.workflow.confirm()?;
            self.delete_calls.push(farm_id);
            let outcome = self.workflow.finish(answer);
            if outcome == Some(DeletionOutcome::ReloadView) {
                self.reloads += 1;
            }
            outcome
        }
    }

    #[test]
    fn confirm_deletes_bare_id_and_reloads_once() {
        let mut h = Harness::default();
        assert_eq!(h.workflow.request("/abc123"), DeletionRequest::Accepted);
        assert!(h.workflow.is_dialog_shown());
        assert_eq!(h.workflow.target(), Some("abc123"));

        assert_eq!(h.confirm_and_answer(Ok(())), Some(DeletionOutcome::ReloadView));
        assert_eq!(h.delete_calls, vec!["abc123".to_string()]);
        assert_eq!(h.reloads, 1);
        assert_eq!(h.workflow, DeletionWorkflow::Idle);
        assert!(!h.workflow.is_dialog_shown());
    }

    #[test]
    fn cancel_calls_nothing() {
        let mut h = Harness::default();
        assert_eq!(h.workflow.request("/xyz"), DeletionRequest::Accepted);
        assert!(h.workflow.cancel());
        assert_eq!(h.workflow, DeletionWorkflow::Idle);
        assert_eq!(h.confirm_and_answer(Ok(())), None);
        assert!(h.delete_calls.is_empty());
        assert_eq!(h.reloads, 0);
    }

    #[test]
    fn cancel_when_idle_is_noop() {
        let mut workflow = DeletionWorkflow::Idle;
        assert!(!workflow.cancel());
        assert_eq!(workflow, DeletionWorkflow::Idle);
    }

    #[test]
    fn second_request_while_pending_is_refused() {
        let mut workflow = DeletionWorkflow::default();
        assert_eq!(workflow.request("/first"), DeletionRequest::Accepted);
        assert_eq!(workflow.request("/second"), DeletionRequest::AlreadyPending);
        assert_eq!(workflow.target(), Some("first"));
    }

    #[test]
    fn request_without_identifier_is_refused() {
        let mut workflow = DeletionWorkflow::default();
        assert_eq!(workflow.request("//"), DeletionRequest::MissingIdentifier);
        assert_eq!(workflow.request(""), DeletionRequest::MissingIdentifier);
        assert_eq!(workflow, DeletionWorkflow::Idle);
    }

    #[test]
    fn in_flight_delete_ignores_cancel_and_second_confirm() {
        let mut workflow = DeletionWorkflow::default();
        workflow.request("/abc");
        assert_eq!(workflow.confirm().as_deref(), Some("abc"));
        assert!(workflow.is_busy());
        assert!(!workflow.cancel());
        assert_eq!(workflow.confirm(), None);
        assert!(workflow.is_busy());
    }

    #[test]
    fn failed_delete_surfaces_error_without_reload() {
        let mut h = Harness::default();
        h.workflow.request("/abc");
        let error = ProfileFarmsError::Deletion("HTTP 500".into());
        assert_eq!(
            h.confirm_and_answer(Err(error.clone())),
            Some(DeletionOutcome::Failed(error))
        );
        assert_eq!(h.reloads, 0);
        assert_eq!(h.workflow, DeletionWorkflow::Idle);

        assert_eq!(h.workflow.request("/abc"), DeletionRequest::Accepted);
    }

    #[test]
    fn finish_without_delete_in_flight_is_ignored() {
        let mut workflow = DeletionWorkflow::default();
        assert_eq!(workflow.finish(Ok(())), None);
        workflow.request("/abc");
        assert_eq!(workflow.finish(Ok(())), None);
        assert_eq!(workflow.target(), Some("abc"));
    }
}
