//! Modal asking the user to confirm or cancel an irreversible action.
//!
//! Each time the dialog is shown it answers exactly once: the first click on
//! either button (or on the backdrop, which counts as cancel) emits its
//! callback and every later click is ignored until the dialog is hidden and
//! shown again.

use uuid::Uuid;
use yew::prelude::*;

use crate::components::loader_spinner::{LoaderSpinner, SpinnerSize};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogVariant {
    #[default]
    Warning,
    Danger,
}

impl DialogVariant {
    fn accent(self) -> &'static str {
        match self {
            DialogVariant::Warning => "#f9a825",
            DialogVariant::Danger => "#d32f2f",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub show: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or_default]
    pub variant: DialogVariant,
    /// The confirmed action is running; buttons stay disabled.
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

pub enum Msg {
    Confirm,
    Cancel,
}

/// Tracks whether the current show cycle already produced an answer.
#[derive(Debug, Default)]
struct ShowCycle {
    answered: bool,
}

impl ShowCycle {
    fn observe(&mut self, was_shown: bool, shown: bool) {
        if shown && !was_shown {
            self.answered = false;
        }
    }

    /// Returns `true` if an answer may be emitted now, and consumes the cycle.
    fn try_answer(&mut self, shown: bool) -> bool {
        if !shown || self.answered {
            return false;
        }
        self.answered = true;
        true
    }
}

pub struct ConfirmDialog {
    cycle: ShowCycle,
    /// Id of the title heading, referenced by the sheet's `aria-labelledby`.
    title_id: AttrValue,
}

fn new_title_id() -> AttrValue {
    AttrValue::from(format!("confirm-title-{}", Uuid::new_v4()))
}

impl Component for ConfirmDialog {
    type Message = Msg;
    type Properties = ConfirmDialogProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            cycle: ShowCycle::default(),
            title_id: new_title_id(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        self.cycle.observe(old_props.show, ctx.props().show);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        if props.busy || !self.cycle.try_answer(props.show) {
            return false;
        }
        match msg {
            Msg::Confirm => props.on_confirm.emit(()),
            Msg::Cancel => props.on_cancel.emit(()),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let disabled = props.busy || self.cycle.answered;
        let accent = props.variant.accent();

        html! {
            <YwMaterialTopSheet
                show={props.show}
                labelled_by={self.title_id.clone()}
                on_backdrop={link.callback(|()| Msg::Cancel)}
            >
                <div
                    class="confirm-dialog"
                    style={format!("background:#fff;border-top:6px solid {};border-radius:4px;padding:24px;max-width:480px;margin:10vh auto 0;", accent)}
                >
                    <h5 class="confirm-dialog-title" id={self.title_id.clone()}>{ props.title.clone() }</h5>
                    <p>{ props.message.clone() }</p>
                    <div style="display:flex;gap:12px;justify-content:flex-end;align-items:center;">
                        {
                            if props.busy {
                                html! { <LoaderSpinner size={SpinnerSize::Small} message="Eliminando" /> }
                            } else {
                                html! {}
                            }
                        }
                        <button class="btn btn-secondary" {disabled} onclick={link.callback(|_| Msg::Cancel)}>
                            { "Cancelar" }
                        </button>
                        <button class="btn btn-danger" {disabled} onclick={link.callback(|_| Msg::Confirm)}>
                            { "Confirmar" }
                        </button>
                    </div>
                </div>
            </YwMaterialTopSheet>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{new_title_id, ShowCycle};

    #[test]
    fn answers_once_per_show_cycle() {
        let mut cycle = ShowCycle::default();
        assert!(!cycle.try_answer(false));

        cycle.observe(false, true);
        assert!(cycle.try_answer(true));
        assert!(!cycle.try_answer(true));

        // Re-rendered while still shown: no new answer.
        cycle.observe(true, true);
        assert!(!cycle.try_answer(true));

        cycle.observe(true, false);
        cycle.observe(false, true);
        assert!(cycle.try_answer(true));
    }

    #[test]
    fn each_dialog_gets_its_own_title_id() {
        let first = new_title_id();
        let second = new_title_id();
        assert!(first.starts_with("confirm-title-"));
        assert_ne!(first, second);
    }
}
