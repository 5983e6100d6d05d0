//! Asynchronous loading of the farm tree, keyed by identity.
//!
//! Every call to [`FarmLoader::begin`] opens a new generation. A response is
//! applied only if it carries the current generation and the identity that
//! is still active, so a slow fetch for a previous identity can never
//! overwrite the tree of the current one.

use common::model::farm::Farm;
use common::model::identity::Identity;

use super::error::ProfileFarmsError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// No identity yet. Stays here (and keeps the spinner up) until one shows up.
    #[default]
    Waiting,
    Loading,
    Ready(Vec<Farm>),
    Failed(ProfileFarmsError),
}

/// Proof that a fetch was started. Handed back with the result.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadTicket {
    generation: u64,
    identity: Identity,
}

impl LoadTicket {
    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

#[derive(Debug, Default)]
pub struct FarmLoader {
    state: LoadState,
    generation: u64,
    identity: Option<Identity>,
}

impl FarmLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a load for `identity`, superseding anything still in flight.
    ///
    /// Returns `None` when there is no identity: nothing is fetched and the
    /// loader goes back to `Waiting`.
    pub fn begin(&mut self, identity: Option<&Identity>) -> Option<LoadTicket> {
        self.generation += 1;
        self.identity = identity.cloned();

        match identity {
            Some(identity) => {
                self.state = LoadState::Loading;
                Some(LoadTicket {
                    generation: self.generation,
                    identity: identity.clone(),
                })
            }
            None => {
                self.state = LoadState::Waiting;
                None
            }
        }
    }

    /// Applies the outcome of the fetch started with `ticket`. Returns `false`
    /// and leaves the state untouched when the ticket is stale.
    pub fn resolve(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Farm>, ProfileFarmsError>,
    ) -> bool {
        if ticket.generation != self.generation || self.identity.as_ref() != Some(&ticket.identity) {
            return false;
        }

        self.state = match result {
            Ok(farms) => LoadState::Ready(farms),
            Err(error) => LoadState::Failed(error),
        };
        true
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Waiting | LoadState::Loading)
    }

    /// The loaded tree, or an empty slice while nothing is ready.
    pub fn farms(&self) -> &[Farm] {
        match &self.state {
            LoadState::Ready(farms) => farms.as_slice(),
            _ => &[],
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}
