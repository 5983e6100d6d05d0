use common::model::farm::Event;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EventDataTableProps {
    pub events: Vec<Event>,
}

/// Renders the events of a plot in the order they were recorded.
pub struct EventDataTable;

impl Component for EventDataTable {
    type Message = ();
    type Properties = EventDataTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        EventDataTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let rows = if props.events.is_empty() {
            html! {
                <tr>
                    <td colspan="3" class="text-muted">{ "Sin eventos registrados" }</td>
                </tr>
            }
        } else {
            props
                .events
                .iter()
                .enumerate()
                .map(|(index, event)| {
                    html! {
                        <tr key={index}>
                            <td>{ event.date.clone() }</td>
                            <td>{ event.event_type.clone() }</td>
                            <td>{ event.description.clone() }</td>
                        </tr>
                    }
                })
                .collect::<Html>()
        };

        html! {
            <table class="table table-sm event-table">
                <thead>
                    <tr>
                        <th>{ "Fecha" }</th>
                        <th>{ "Tipo" }</th>
                        <th>{ "Descripción" }</th>
                    </tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>
        }
    }
}
