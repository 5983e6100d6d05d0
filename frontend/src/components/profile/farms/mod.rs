//! Profile farm view: the farms of the signed-in user, their plots and the
//! events recorded on each plot.
//!
//! Responsibilities
//! - Load the farm tree whenever the identity prop changes (`loader`),
//!   discarding answers that arrive for an identity no longer shown.
//! - Track the active farm tab and, per farm, the active plot tab
//!   (`navigation`), including `#farm{i}plot{j}` deep links.
//! - Guard farm deletion behind a confirmation dialog and reload the whole
//!   view once the remote delete succeeds (`deletion`).

use yew::prelude::*;

mod api;
mod deletion;
mod error;
mod helpers;
mod loader;
mod messages;
mod navigation;
mod props;
mod state;
mod update;
mod view;

use helpers::current_fragment;
use navigation::TabKey;

pub use messages::Msg;
pub use props::ProfileFarmDataProps;
pub use state::ProfileFarmDataComponent;

impl Component for ProfileFarmDataComponent {
    type Message = Msg;
    type Properties = ProfileFarmDataProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        let initial_tab = current_fragment().and_then(|fragment| TabKey::parse_fragment(&fragment));
        ProfileFarmDataComponent::new(initial_tab)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().identity != old_props.identity {
            update::update(self, ctx, Msg::Load)
        } else {
            false
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
