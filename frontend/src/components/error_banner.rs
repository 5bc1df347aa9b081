use yew::prelude::*;

use crate::i18n::current::error_banner as t;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
}

/// Inline failure notice; renders nothing for a blank message.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    if props.message.trim().is_empty() {
        return Html::default();
    }

    html! {
        <div
            class={classes!(
                "error-banner",
                "space-y-1",
                "rounded-xl",
                "border",
                "border-[var(--danger)]/40",
                "px-4",
                "py-3",
                "text-sm",
                "text-[var(--danger)]"
            )}
            role="alert"
            aria-live="assertive"
        >
            <p class="font-semibold">{ t::TITLE }</p>
            <p>{ props.message.clone() }</p>
        </div>
    }
}
