use yew::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        theme_toggle::ThemeToggle,
    },
    i18n::current::header as t,
};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Whether the create form is currently shown.
    pub creating: bool,
    pub on_toggle_mode: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let onclick = {
        let on_toggle_mode = props.on_toggle_mode.clone();
        Callback::from(move |_: MouseEvent| on_toggle_mode.emit(()))
    };

    let (mode_icon, mode_label) = if props.creating {
        (IconName::BookOpen, t::VIEW_BLOGS)
    } else {
        (IconName::PenSquare, t::CREATE_BLOG)
    };

    let mode_button_class = classes!(
        "inline-flex",
        "items-center",
        "gap-2",
        "rounded-lg",
        "px-5",
        "py-2.5",
        "text-sm",
        "font-medium",
        "shadow-sm",
        "transition-colors",
        if props.creating {
            "border border-[var(--border)] bg-transparent hover:bg-[var(--surface-alt)]"
        } else {
            "bg-[var(--primary)] text-white hover:opacity-90"
        }
    );

    html! {
        <header class={classes!(
            "sticky",
            "top-0",
            "z-10",
            "border-b",
            "border-[var(--border)]",
            "bg-[var(--surface)]/80",
            "backdrop-blur-sm",
            "shadow-sm"
        )}>
            <div class={classes!(
                "container",
                "mx-auto",
                "flex",
                "items-center",
                "justify-between",
                "px-6",
                "py-5"
            )}>
                <div class={classes!("flex", "items-center", "gap-4")}>
                    <div class={classes!(
                        "rounded-xl",
                        "bg-[var(--primary)]",
                        "p-2.5",
                        "text-white",
                        "shadow-lg"
                    )}>
                        <Icon name={IconName::BookOpen} size={28} />
                    </div>
                    <div>
                        <h1 class={classes!("text-2xl", "font-bold", "tracking-tight")}>
                            { t::BRAND_NAME }
                        </h1>
                        <p class={classes!("text-sm", "text-[var(--muted)]")}>{ t::BRAND_TAGLINE }</p>
                    </div>
                </div>
                <div class={classes!("flex", "items-center", "gap-4")}>
                    <ThemeToggle />
                    <button
                        type="button"
                        class={mode_button_class}
                        {onclick}
                        aria-pressed={props.creating.to_string()}
                    >
                        <Icon name={mode_icon} size={16} />
                        { mode_label }
                    </button>
                </div>
            </div>
        </header>
    }
}
