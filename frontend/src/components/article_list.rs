use inkpress_shared::{error::display_message, Loadable};
use yew::prelude::*;

use crate::{
    cache::ArticleCache,
    components::{
        article_card::ArticleCard,
        icons::{Icon, IconName},
        skeleton::Skeleton,
    },
    hooks::use_articles,
    i18n::current::article_list as t,
};

const SKELETON_CARDS: usize = 5;

#[derive(Properties, PartialEq)]
pub struct ArticleListProps {
    pub cache: ArticleCache,
    #[prop_or_default]
    pub selected_id: Option<String>,
    pub on_select: Callback<String>,
}

#[function_component(ArticleList)]
pub fn article_list(props: &ArticleListProps) -> Html {
    let articles = use_articles(props.cache.clone());

    match articles {
        Loadable::Loading => html! {
            <div class={classes!("space-y-4")} aria-busy="true">
                { for (0..SKELETON_CARDS).map(|_| html! {
                    <div class={classes!(
                        "space-y-3",
                        "rounded-lg",
                        "border",
                        "border-[var(--border)]",
                        "bg-[var(--surface)]",
                        "p-5"
                    )}>
                        <div class={classes!("flex", "gap-2")}>
                            <Skeleton class={classes!("h-6", "w-20", "rounded-full")} />
                            <Skeleton class={classes!("h-6", "w-16", "rounded-full")} />
                        </div>
                        <Skeleton class={classes!("h-6", "w-3/4")} />
                        <Skeleton class={classes!("h-4", "w-full")} />
                        <Skeleton class={classes!("h-4", "w-5/6")} />
                        <div class="pt-2">
                            <Skeleton class={classes!("h-4", "w-24")} />
                        </div>
                    </div>
                }) }
            </div>
        },
        Loadable::Failed(message) => html! {
            <StatePanel
                icon={IconName::AlertCircle}
                title={t::ERROR_TITLE}
                body={display_message(&message).to_string()}
                error={true}
            />
        },
        Loadable::Ready(list) if list.is_empty() => html! {
            <StatePanel icon={IconName::Frown} title={t::EMPTY_TITLE} body={t::EMPTY_BODY} />
        },
        Loadable::Ready(list) => html! {
            <div class={classes!("space-y-3")}>
                { for list.iter().map(|article| html! {
                    <ArticleCard
                        key={article.id.clone()}
                        article={article.clone()}
                        selected={article.is_selected(props.selected_id.as_deref())}
                        on_select={props.on_select.clone()}
                    />
                }) }
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct StatePanelProps {
    icon: IconName,
    title: AttrValue,
    body: AttrValue,
    #[prop_or_default]
    error: bool,
}

#[function_component(StatePanel)]
fn state_panel(props: &StatePanelProps) -> Html {
    let icon_class = if props.error { "text-[var(--danger)]" } else { "text-[var(--muted)]" };

    html! {
        <div
            class={classes!("py-12", "text-center")}
            role={props.error.then_some("alert")}
        >
            <div class={classes!("mb-4", "flex", "justify-center", icon_class)}>
                <Icon name={props.icon} size={48} />
            </div>
            <h3 class={classes!("mb-2", "text-lg", "font-semibold")}>{ props.title.clone() }</h3>
            <p class={classes!("text-sm", "text-[var(--muted)]")}>{ props.body.clone() }</p>
        </div>
    }
}
