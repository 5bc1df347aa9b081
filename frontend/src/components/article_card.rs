use chrono::Local;
use inkpress_shared::time_format::relative_label;
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    models::Article,
};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: Article,
    #[prop_or_default]
    pub selected: bool,
    /// Receives the article id when the card is clicked.
    pub on_select: Callback<String>,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let time_label = relative_label(&article.date, &Local::now());

    let onclick = {
        let on_select = props.on_select.clone();
        let id = article.id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };

    let card_classes = classes!(
        "article-card",
        "cursor-pointer",
        "rounded-xl",
        "border",
        "bg-[var(--surface)]",
        "p-5",
        "transition-all",
        "duration-200",
        "hover:shadow-md",
        if props.selected {
            "ring-2 ring-[var(--primary)] shadow-lg bg-[var(--primary-soft)]"
        } else {
            "border-[var(--border)] hover:border-[var(--primary)]"
        }
    );

    html! {
        <article
            class={card_classes}
            {onclick}
            aria-current={props.selected.then_some("true")}
        >
            <div class={classes!("mb-3", "flex", "flex-wrap", "items-center", "gap-2")}>
                { for article.teaser_categories().iter().map(|cat| html! {
                    <span
                        class={classes!(
                            "tag-pill",
                            "inline-flex",
                            "items-center",
                            "gap-1",
                            "rounded-full",
                            "px-2.5",
                            "py-1",
                            "text-xs",
                            "font-medium",
                            "bg-[var(--primary-soft)]",
                            "text-[var(--primary)]"
                        )}
                    >
                        <Icon name={IconName::Tag} size={12} />
                        { cat }
                    </span>
                }) }
            </div>
            <h3 class={classes!("article-title", "mb-2", "text-lg", "font-semibold", "line-clamp-2")}>
                { &article.title }
            </h3>
            <p class={classes!(
                "article-excerpt",
                "mb-3",
                "text-sm",
                "text-[var(--muted)]",
                "line-clamp-2"
            )}>
                { &article.description }
            </p>
            <div class={classes!(
                "flex",
                "items-center",
                "gap-2",
                "border-t",
                "border-[var(--border)]",
                "pt-3",
                "text-xs",
                "text-[var(--muted)]"
            )}>
                <Icon name={IconName::Calendar} size={14} />
                <time datetime={article.date.clone()}>{ time_label }</time>
            </div>
        </article>
    }
}
