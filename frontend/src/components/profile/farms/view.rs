//! View rendering for the profile farm component.
//!
//! Layout: an "add farm" toolbar, the farm tab list on the left and, for the
//! active farm, a card with its details and actions holding a nested plot
//! tab group. The active plot shows its own card and the event table.
//! Only the active panes are rendered; the selection itself lives in
//! `NavigationState`, so every farm keeps its own plot tab across switches.
//!
//! All user-facing text is in Spanish.

use common::model::farm::{Farm, Plot};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dialogs::confirm::{ConfirmDialog, DialogVariant};
use crate::components::event_data_table::EventDataTable;
use crate::components::loader_spinner::{LoaderSpinner, SpinnerSize};

use super::error::ProfileFarmsError;
use super::helpers::format_surface;
use super::loader::LoadState;
use super::messages::Msg;
use super::navigation::{
    add_event_path, edit_farm_path, edit_privacy_path, TabKey, ADD_FARM_PATH,
};
use super::state::ProfileFarmDataComponent;

type Link = Scope<ProfileFarmDataComponent>;

pub fn view(component: &ProfileFarmDataComponent, ctx: &Context<ProfileFarmDataComponent>) -> Html {
    let link = ctx.link();

    if component.loader.is_loading() {
        return build_loading();
    }
    if let LoadState::Failed(error) = component.loader.state() {
        return build_load_error(error, link);
    }

    let farms = component.loader.farms();
    html! {
        <div class="profile-farms" id="farmList">
            { build_toolbar(component, link) }
            { build_deletion_error(component, link) }
            {
                if farms.is_empty() {
                    build_empty()
                } else {
                    build_farm_tabs(component, farms, link)
                }
            }
            { build_confirm_dialog(component, link) }
        </div>
    }
}

fn build_loading() -> Html {
    html! {
        <div class="row">
            <div class="col text-center">
                <LoaderSpinner size={SpinnerSize::Large} message="Cargando" />
            </div>
        </div>
    }
}

fn build_load_error(error: &ProfileFarmsError, link: &Link) -> Html {
    html! {
        <div class="alert alert-danger" role="alert">
            <p>{ error.to_string() }</p>
            <button class="btn btn-outline-danger" onclick={link.callback(|_| Msg::Load)}>
                { "Reintentar" }
            </button>
        </div>
    }
}

fn build_toolbar(component: &ProfileFarmDataComponent, link: &Link) -> Html {
    html! {
        <div class="row mb-3">
            <div class="col-2">
                <button
                    class="btn btn-white btn-block"
                    disabled={component.actions_locked()}
                    onclick={link.callback(|_| Msg::NavigateTo(ADD_FARM_PATH.to_string()))}
                >
                    <span class="button-text">{ "Agregar campo" }</span>
                </button>
            </div>
        </div>
    }
}

fn build_deletion_error(component: &ProfileFarmDataComponent, link: &Link) -> Html {
    match &component.deletion_error {
        Some(message) => html! {
            <div class="alert alert-warning d-flex justify-content-between" role="alert">
                <span>{ format!("{}. El campo no fue eliminado.", message) }</span>
                <button
                    class="btn-close"
                    aria-label="Cerrar"
                    onclick={link.callback(|_| Msg::DismissDeletionError)}
                />
            </div>
        },
        None => html! {},
    }
}

fn build_empty() -> Html {
    html! {
        <p class="text-muted">{ "Todavía no registraste ningún campo." }</p>
    }
}

fn build_farm_tabs(component: &ProfileFarmDataComponent, farms: &[Farm], link: &Link) -> Html {
    let farm_count = farms.len();
    let tabs = farms
        .iter()
        .enumerate()
        .map(|(farm_index, farm)| {
            let active = component.navigation.is_farm_active(farm_index, farm_count);
            html! {
                <a
                    key={farm_index}
                    class={classes!("list-group-item", "list-group-item-action", active.then_some("active"))}
                    href={TabKey::farm(farm_index).fragment()}
                    onclick={link.callback(move |_| Msg::ActivateFarm(farm_index))}
                >
                    <span class="button-text">{ farm.name.clone() }</span>
                </a>
            }
        })
        .collect::<Html>();

    let pane = component
        .navigation
        .active_farm(farm_count)
        .map(|farm_index| build_farm_pane(component, farm_index, &farms[farm_index], link))
        .unwrap_or_else(|| html! {});

    html! {
        <div class="row">
            <div class="col-3">
                <div class="list-group">{ tabs }</div>
            </div>
            <div class="col tab-content">{ pane }</div>
        </div>
    }
}

fn build_farm_pane(
    component: &ProfileFarmDataComponent,
    farm_index: usize,
    farm: &Farm,
    link: &Link,
) -> Html {
    let locked = component.actions_locked();
    let edit_path = edit_farm_path(farm);
    let privacy_path = edit_privacy_path(farm);
    let document_uri = farm.document_uri.clone();

    html! {
        <div class="tab-pane active" id={format!("farm{}", farm_index)}>
            <div class="card">
                <div class="card-header">
                    <span class="button-text">{ format!("Campo \"{}\"", farm.name) }</span>
                </div>
                <div class="card-body">
                    <div class="row mb-3">
                        <div class="col-8">
                            { field("Nombre del campo", farm.name.clone()) }
                            { field("Superficie del campo", format_surface(farm.surface)) }
                            { field("Dueño del campo", farm.owner.full_name()) }
                        </div>
                        <div class="col">
                            { action_button("btn-black", "Editar campo", locked,
                                link.callback(move |_| Msg::NavigateTo(edit_path.clone()))) }
                            { action_button("btn-danger", "Eliminar campo", locked,
                                link.callback(move |_| Msg::RequestDelete(document_uri.clone()))) }
                            { action_button("btn-secondary", "Editar privacidad", locked,
                                link.callback(move |_| Msg::NavigateTo(privacy_path.clone()))) }
                        </div>
                    </div>
                    { build_plot_tabs(component, farm_index, farm, link) }
                </div>
            </div>
        </div>
    }
}

fn build_plot_tabs(
    component: &ProfileFarmDataComponent,
    farm_index: usize,
    farm: &Farm,
    link: &Link,
) -> Html {
    let plot_count = farm.plots.len();
    let tabs = farm
        .plots
        .iter()
        .enumerate()
        .map(|(plot_index, plot)| {
            let active = component
                .navigation
                .is_plot_active(farm_index, plot_index, plot_count);
            html! {
                <a
                    key={plot_index}
                    class={classes!("list-group-item", "list-group-item-action", active.then_some("active"))}
                    href={TabKey::plot(farm_index, plot_index).fragment()}
                    onclick={link.callback(move |_| Msg::ActivatePlot { farm: farm_index, plot: plot_index })}
                >
                    <span class="button-text">{ plot.name.clone() }</span>
                </a>
            }
        })
        .collect::<Html>();

    let pane = component
        .navigation
        .active_plot(farm_index, plot_count)
        .map(|plot_index| build_plot_pane(component, farm, &farm.plots[plot_index], link))
        .unwrap_or_else(|| html! {});

    html! {
        <div class="row" id={format!("farm{}PlotList", farm_index)}>
            <div class="col-4">
                <div class="list-group">{ tabs }</div>
            </div>
            <div class="col tab-content">{ pane }</div>
        </div>
    }
}

fn build_plot_pane(
    component: &ProfileFarmDataComponent,
    farm: &Farm,
    plot: &Plot,
    link: &Link,
) -> Html {
    let add_event = add_event_path(farm, plot);

    html! {
        <div class="card tab-pane active">
            <div class="card-header">
                <span class="button-text">
                    <i class="material-icons mx-3">{ "inventory_2" }</i>
                    { format!("Parcela \"{}\" en el campo \"{}\"", plot.name, farm.name) }
                </span>
            </div>
            <div class="card-body">
                <div class="row">
                    <div class="col-8">
                        { field("Nombre de la parcela", plot.name.clone()) }
                        { field("Superficie de la parcela", format_surface(plot.surface)) }
                    </div>
                    <div class="col">
                        { action_button("btn-white", "Agregar evento", component.actions_locked(),
                            link.callback(move |_| Msg::NavigateTo(add_event.clone()))) }
                    </div>
                </div>
                <div class="row">
                    <div class="col">
                        <span class="overline font-weight-bold">{ "Eventos" }</span>
                        <EventDataTable events={plot.events.clone()} />
                    </div>
                </div>
            </div>
        </div>
    }
}

fn build_confirm_dialog(component: &ProfileFarmDataComponent, link: &Link) -> Html {
    html! {
        <ConfirmDialog
            show={component.deletion.is_dialog_shown()}
            busy={component.deletion.is_busy()}
            variant={DialogVariant::Warning}
            title="¡Atención!"
            message="Se eliminará definitivamente la información del campo"
            on_confirm={link.callback(|()| Msg::ConfirmDelete)}
            on_cancel={link.callback(|()| Msg::CancelDelete)}
        />
    }
}

fn field(label: &'static str, value: String) -> Html {
    html! {
        <>
            <span class="overline font-weight-bold">{ label }</span>
            <p class="body1 gutter-bottom">{ value }</p>
        </>
    }
}

fn action_button(variant: &'static str, label: &'static str, disabled: bool, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <div class="row mb-3">
            <div class="col">
                <button class={classes!("btn", "btn-block", variant)} {disabled} {onclick}>
                    <span class="button-text">{ label }</span>
                </button>
            </div>
        </div>
    }
}
