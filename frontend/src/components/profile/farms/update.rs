//! Update function for the profile farm view.
//!
//! Elm-style: takes the current state and a `Msg`, mutates the state, spawns
//! any remote call, and returns whether the view must re-render. The state
//! transitions themselves live in `loader`, `navigation` and `deletion`.
//! The messages that react to a remote answer are decided by plain functions
//! returning [`Effects`], which `update` then carries out in the browser.

use common::model::farm::Farm;
use gloo_console::{error, log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::api;
use super::deletion::{DeletionOutcome, DeletionRequest};
use super::error::ProfileFarmsError;
use super::helpers::{navigate_to, reload_view, show_toast, ToastKind};
use super::loader::{LoadState, LoadTicket};
use super::messages::Msg;
use super::state::ProfileFarmDataComponent;

const PENDING_DELETION: &str = "Ya hay una eliminación pendiente de confirmación.";
const MISSING_IDENTIFIER: &str = "Este campo no tiene identificador y no se puede eliminar.";

/// Browser side effects requested by a state transition.
#[derive(Debug, Default, PartialEq)]
pub struct Effects {
    pub render: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub toast: Option<(String, ToastKind)>,
    pub reload: bool,
}

impl Effects {
    fn render() -> Self {
        Self {
            render: true,
            ..Self::default()
        }
    }

    /// Logs, notifies and reloads as requested. Returns the render flag.
    fn run(self) -> bool {
        for message in self.warnings {
            warn!(message);
        }
        for message in self.errors {
            error!(message);
        }
        if let Some((message, kind)) = self.toast {
            show_toast(&message, kind);
        }
        if self.reload {
            reload_view();
        }
        self.render
    }
}

pub fn update(
    component: &mut ProfileFarmDataComponent,
    ctx: &Context<ProfileFarmDataComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Load => {
            let identity = ctx.props().identity.clone();
            match component.loader.begin(identity.as_ref()) {
                Some(ticket) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api::fetch_profile_farms(ticket.identity()).await;
                        link.send_message(Msg::FarmsLoaded { ticket, result });
                    });
                }
                None => log!("Sin sesión: se esperará a que haya una identidad para cargar los campos"),
            }
            true
        }
        Msg::FarmsLoaded { ticket, result } => farms_loaded(component, ticket, result).run(),
        Msg::ActivateFarm(farm) => {
            component.navigation.activate_farm(farm);
            true
        }
        Msg::ActivatePlot { farm, plot } => {
            component.navigation.activate_plot(farm, plot);
            true
        }
        Msg::NavigateTo(path) => {
            navigate_to(&path);
            false
        }
        Msg::RequestDelete(document_uri) => request_delete(component, &document_uri).run(),
        Msg::CancelDelete => component.deletion.cancel(),
        Msg::ConfirmDelete => {
            let Some(farm_id) = component.deletion.confirm() else {
                return false;
            };

            match ctx.props().identity.clone() {
                Some(identity) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api::delete_farm(&identity, &farm_id).await;
                        link.send_message(Msg::DeleteFinished(result));
                    });
                }
                None => ctx.link().send_message(Msg::DeleteFinished(Err(
                    ProfileFarmsError::Deletion("no hay una sesión activa".to_string()),
                ))),
            }
            true
        }
        Msg::DeleteFinished(result) => delete_finished(component, result).run(),
        Msg::DismissDeletionError => component.deletion_error.take().is_some(),
    }
}

/// Applies a fetch result. Stale results are dropped; the first successful
/// load also applies the tab requested by the URL fragment.
pub fn farms_loaded(
    component: &mut ProfileFarmDataComponent,
    ticket: LoadTicket,
    result: Result<Vec<Farm>, ProfileFarmsError>,
) -> Effects {
    let web_id = ticket.identity().web_id.clone();
    if !component.loader.resolve(ticket, result) {
        let current = component
            .loader
            .identity()
            .map(|identity| identity.web_id.as_str())
            .unwrap_or("-");
        return Effects {
            warnings: vec![format!(
                "Respuesta obsoleta de campos para {} descartada (perfil actual: {})",
                web_id, current
            )],
            ..Effects::default()
        };
    }

    let mut effects = Effects::render();
    match component.loader.state() {
        LoadState::Ready(farms) => {
            if let Err(e) = component.navigation.sync(farms) {
                effects.warnings.push(e.to_string());
            }
            if let Some(tab) = component.initial_tab.take() {
                if let Err(e) = component.navigation.apply_fragment(tab, farms) {
                    effects.warnings.push(e.to_string());
                }
            }
        }
        LoadState::Failed(e) => effects.errors.push(e.to_string()),
        LoadState::Waiting | LoadState::Loading => {}
    }
    effects
}

pub fn request_delete(component: &mut ProfileFarmDataComponent, document_uri: &str) -> Effects {
    match component.deletion.request(document_uri) {
        DeletionRequest::Accepted => {
            component.deletion_error = None;
            Effects::render()
        }
        DeletionRequest::AlreadyPending => Effects {
            warnings: vec![format!(
                "Solicitud de eliminación de {} ignorada (pendiente: {})",
                document_uri,
                component.deletion.target().unwrap_or("-")
            )],
            toast: Some((PENDING_DELETION.to_string(), ToastKind::Info)),
            ..Effects::default()
        },
        DeletionRequest::MissingIdentifier => Effects {
            warnings: vec![format!(
                "Solicitud de eliminación ignorada: \"{}\" no tiene identificador",
                document_uri
            )],
            toast: Some((MISSING_IDENTIFIER.to_string(), ToastKind::Error)),
            ..Effects::default()
        },
    }
}

/// Reloads the whole view after a successful delete; a failure keeps the
/// tree and is surfaced both as a toast and as an inline alert.
pub fn delete_finished(
    component: &mut ProfileFarmDataComponent,
    result: Result<(), ProfileFarmsError>,
) -> Effects {
    match component.deletion.finish(result) {
        Some(DeletionOutcome::ReloadView) => Effects {
            reload: true,
            ..Effects::render()
        },
        Some(DeletionOutcome::Failed(e)) => {
            let message = e.to_string();
            component.deletion_error = Some(message.clone());
            Effects {
                errors: vec![message.clone()],
                toast: Some((message, ToastKind::Error)),
                ..Effects::render()
            }
        }
        None => Effects::default(),
    }
}
