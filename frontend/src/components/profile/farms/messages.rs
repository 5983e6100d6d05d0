use common::model::farm::Farm;

use super::error::ProfileFarmsError;
use super::loader::LoadTicket;

pub enum Msg {
    Load,
    FarmsLoaded {
        ticket: LoadTicket,
        result: Result<Vec<Farm>, ProfileFarmsError>,
    },
    ActivateFarm(usize),
    ActivatePlot { farm: usize, plot: usize },
    NavigateTo(String),
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
    DeleteFinished(Result<(), ProfileFarmsError>),
    DismissDeletionError,
}
