//! Runtime state of the profile farm view.
//!
//! The three concerns live in their own pure types and are only glued
//! together here: the loader owns the farm tree, the navigation state owns
//! the active tabs, and the deletion workflow owns the confirmation dialog.

use super::deletion::DeletionWorkflow;
use super::loader::FarmLoader;
use super::navigation::{NavigationState, TabKey};

pub struct ProfileFarmDataComponent {
    pub loader: FarmLoader,
    pub navigation: NavigationState,
    pub deletion: DeletionWorkflow,

    /// Message of the last failed delete, shown until dismissed or until a
    /// new delete is requested.
    pub deletion_error: Option<String>,

    /// Tab requested by the URL fragment at mount time. Applied once, on the
    /// first successful load.
    pub initial_tab: Option<TabKey>,
}

impl ProfileFarmDataComponent {
    pub fn new(initial_tab: Option<TabKey>) -> Self {
        Self {
            loader: FarmLoader::new(),
            navigation: NavigationState::new(),
            deletion: DeletionWorkflow::default(),
            deletion_error: None,
            initial_tab,
        }
    }

    /// Actions on the farm tree are locked while a delete is being confirmed
    /// or is in flight.
    pub fn actions_locked(&self) -> bool {
        self.deletion.is_dialog_shown()
    }
}
