use yew::prelude::*;

use crate::i18n::current::common as t;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 16,
            SpinnerSize::Medium => 40,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());

    html! {
        <span
            class={classes!("inline-flex", "items-center", "justify-center")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <span
                style={spinner_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-2",
                    "border-current",
                    "border-t-transparent",
                    "animate-spin"
                )}
            />
            <span class={classes!("sr-only")}>{ t::LOADING }</span>
        </span>
    }
}
