use uuid::Uuid;
use yew::{classes, html, AttrValue, Callback, Component, Context, Html, MouseEvent, Properties};

/// Full-screen overlay that slides in from the top while `show` is set.
///
/// Clicking the backdrop (outside the content) emits `on_backdrop`.
pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub show: bool,
    #[prop_or_default]
    pub on_backdrop: Option<Callback<()>>,
    /// Id of the element inside `children` that names the sheet.
    #[prop_or_default]
    pub labelled_by: Option<AttrValue>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_backdrop = props.on_backdrop.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            // Only clicks on the backdrop itself, not bubbling from the content.
            if e.target() == e.current_target() {
                if let Some(cb) = &on_backdrop {
                    cb.emit(());
                }
            }
        });

        html! {
            <div
                class={classes!("top-sheet", props.show.then_some("show"))}
                id={self.id.clone()}
                role="dialog"
                aria-modal="true"
                aria-hidden={(!props.show).to_string()}
                aria-labelledby={props.labelled_by.clone()}
                style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9999;align-items:center;justify-content:center;"
                {onclick}
            >
                { props.children.clone() }
            </div>
        }
    }
}
