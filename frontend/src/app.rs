use common::model::identity::Identity;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::profile::farms::ProfileFarmDataComponent;
use crate::session;

pub enum Msg {
    EditWebId(String),
    OpenProfile,
}

/// Application shell: owns the current identity and hands it to the
/// profile view, which reloads whenever it changes.
pub struct App {
    identity: Option<Identity>,
    draft: String,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let identity = session::current_identity();
        let draft = identity
            .as_ref()
            .map(|identity| identity.web_id.clone())
            .unwrap_or_default();
        Self { identity, draft }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::EditWebId(value) => {
                self.draft = value;
                false
            }
            Msg::OpenProfile => {
                let web_id = self.draft.trim();
                let identity = (!web_id.is_empty()).then(|| Identity::new(web_id));
                if identity == self.identity {
                    return false;
                }
                session::remember(identity.as_ref());
                self.identity = identity;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::OpenProfile
        });
        let oninput = link.callback(|e: InputEvent| {
            Msg::EditWebId(e.target_unchecked_into::<HtmlInputElement>().value())
        });

        html! {
            <div class="container my-3">
                <form class="session-bar row mb-3" {onsubmit}>
                    <div class="col">
                        <input
                            class="form-control"
                            type="url"
                            placeholder="WebID del perfil"
                            value={self.draft.clone()}
                            {oninput}
                        />
                    </div>
                    <div class="col-2">
                        <button class="btn btn-secondary btn-block" type="submit">
                            { "Abrir perfil" }
                        </button>
                    </div>
                </form>
                <ProfileFarmDataComponent identity={self.identity.clone()} />
            </div>
        }
    }
}
