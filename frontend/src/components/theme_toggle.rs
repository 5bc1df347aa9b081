use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::current::theme_toggle as t,
};

fn is_dark_theme() -> bool {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        .and_then(|el| el.get_attribute("data-theme"))
        .map(|theme| theme.eq_ignore_ascii_case("dark"))
        .unwrap_or(false)
}

// index.html 定义 window.__toggleTheme，负责切换 data-theme 并持久化
fn toggle_theme() {
    if let Some(win) = web_sys::window() {
        let _ = js_sys::Reflect::get(&win, &wasm_bindgen::JsValue::from_str("__toggleTheme"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .and_then(|func| func.call0(&wasm_bindgen::JsValue::NULL).ok());
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let ThemeToggleProps {
        class,
    } = props;
    let theme_state = use_state(is_dark_theme);

    let onclick = {
        let theme_state = theme_state.clone();
        Callback::from(move |_| {
            toggle_theme();
            theme_state.set(is_dark_theme());
        })
    };

    let label = if *theme_state { t::SWITCH_TO_LIGHT } else { t::SWITCH_TO_DARK };
    let icon = if *theme_state { IconName::Sun } else { IconName::Moon };

    let button_class = classes!(
        "inline-flex",
        "h-10",
        "w-10",
        "items-center",
        "justify-center",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-transparent",
        "text-[var(--text)]",
        "hover:bg-[var(--surface-alt)]",
        "hover:text-[var(--primary)]",
        "transition-colors",
        class.clone()
    );

    html! {
        <button
            type="button"
            class={button_class}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={(*theme_state).to_string()}
        >
            <Icon name={icon} size={18} />
            <span class="sr-only">{ label }</span>
        </button>
    }
}
