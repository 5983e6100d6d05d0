use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Large,
}

impl SpinnerSize {
    fn pixels(self) -> (u32, u32) {
        match self {
            SpinnerSize::Small => (20, 3),
            SpinnerSize::Large => (48, 6),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoaderSpinnerProps {
    #[prop_or_default]
    pub size: SpinnerSize,
    /// Text announced to screen readers while the spinner is visible.
    pub message: AttrValue,
}

/// Indeterminate spinner shown while something is loading.
pub struct LoaderSpinner;

impl Component for LoaderSpinner {
    type Message = ();
    type Properties = LoaderSpinnerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LoaderSpinner
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let (diameter, border) = props.size.pixels();
        let style = format!(
            "width:{d}px;height:{d}px;border:{b}px solid #ccc;border-top-color:#1976d2;border-radius:50%;animation:spin 1s linear infinite;display:inline-block;",
            d = diameter,
            b = border
        );

        html! {
            <div class="loader-spinner" role="status" aria-live="polite">
                <div class="spin" {style}></div>
                <span class="visually-hidden">{ props.message.clone() }</span>
                <style>{r#"
                    @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
                "#}</style>
            </div>
        }
    }
}
