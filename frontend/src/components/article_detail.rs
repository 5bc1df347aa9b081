use chrono::Local;
use inkpress_shared::time_format::{long_date, READING_TIME_LABEL};
use yew::prelude::*;

use crate::{
    cache::ArticleCache,
    components::{
        icons::{Icon, IconName},
        skeleton::Skeleton,
    },
    hooks::use_article,
    i18n::current::article_detail as t,
    models::Article,
};

#[derive(Properties, PartialEq)]
pub struct ArticleDetailProps {
    pub cache: ArticleCache,
    #[prop_or_default]
    pub article_id: Option<String>,
}

#[function_component(ArticleDetail)]
pub fn article_detail(props: &ArticleDetailProps) -> Html {
    let state = use_article(props.cache.clone(), props.article_id.clone());

    let Some(state) = state else {
        return html! {
            <div class={classes!("flex", "h-full", "items-center", "justify-center")}>
                <div class={classes!("max-w-md", "text-center")}>
                    <div class={classes!(
                        "mx-auto",
                        "mb-6",
                        "flex",
                        "h-24",
                        "w-24",
                        "items-center",
                        "justify-center",
                        "rounded-full",
                        "bg-[var(--surface-alt)]",
                        "text-[var(--muted)]"
                    )}>
                        <Icon name={IconName::Tag} size={48} />
                    </div>
                    <h3 class={classes!("mb-2", "text-2xl", "font-semibold")}>{ t::PLACEHOLDER_TITLE }</h3>
                    <p class={classes!("text-[var(--muted)]")}>{ t::PLACEHOLDER_BODY }</p>
                </div>
            </div>
        };
    };

    if let Some(message) = state.error_message() {
        return html! {
            <div
                class={classes!(
                    "rounded-xl",
                    "border",
                    "border-[var(--danger)]/50",
                    "bg-[var(--surface)]",
                    "p-12",
                    "text-center"
                )}
                role="alert"
            >
                <div class={classes!("mb-4", "flex", "justify-center", "text-[var(--danger)]")}>
                    <Icon name={IconName::AlertTriangle} size={64} />
                </div>
                <h3 class={classes!("mb-2", "text-xl", "font-semibold")}>{ t::ERROR_TITLE }</h3>
                <p class={classes!("text-[var(--muted)]")}>{ message }</p>
            </div>
        };
    }

    match state.ready() {
        Some(article) => render_article(&article),
        None => html! {
            <div class={classes!("space-y-6")} aria-busy="true">
                <Skeleton class={classes!("h-[400px]", "w-full", "rounded-xl")} />
                <Skeleton class={classes!("h-12", "w-3/4")} />
                <Skeleton class={classes!("h-6", "w-1/2")} />
                <div class={classes!("space-y-3")}>
                    <Skeleton class={classes!("h-4", "w-full")} />
                    <Skeleton class={classes!("h-4", "w-full")} />
                    <Skeleton class={classes!("h-4", "w-3/4")} />
                </div>
            </div>
        },
    }
}

fn render_article(article: &Article) -> Html {
    let published = long_date(&article.date, &Local);

    let tag_footer = if article.category.is_empty() {
        Html::default()
    } else {
        html! {
            <footer class={classes!("border-t", "border-[var(--border)]", "pt-8")}>
                <div class={classes!("flex", "flex-wrap", "items-center", "gap-3")}>
                    <span class={classes!("text-sm", "font-medium", "text-[var(--muted)]")}>
                        { t::TAGS_LABEL }
                    </span>
                    { for article.category.iter().map(|tag| html! {
                        <span class={classes!(
                            "inline-flex",
                            "items-center",
                            "gap-1.5",
                            "rounded-lg",
                            "bg-[var(--surface-alt)]",
                            "px-4",
                            "py-2",
                            "text-sm",
                            "font-medium"
                        )}>
                            <Icon name={IconName::Tag} size={14} />
                            { tag }
                        </span>
                    }) }
                </div>
            </footer>
        }
    };

    html! {
        <article class={classes!("space-y-8")}>
            <div class={classes!("relative", "overflow-hidden", "rounded-2xl", "shadow-2xl")}>
                <img
                    src={article.cover_image.clone()}
                    alt={article.title.clone()}
                    class={classes!("h-[450px]", "w-full", "object-cover")}
                />
                <div class={classes!(
                    "absolute",
                    "inset-0",
                    "bg-gradient-to-t",
                    "from-black/60",
                    "via-black/20",
                    "to-transparent"
                )} />
            </div>

            <header class={classes!("space-y-4")}>
                <h1 class={classes!("text-4xl", "font-bold", "leading-tight", "md:text-5xl")}>
                    { &article.title }
                </h1>
                <div class={classes!(
                    "flex",
                    "flex-wrap",
                    "items-center",
                    "gap-6",
                    "border-y",
                    "border-[var(--border)]",
                    "py-4",
                    "text-sm",
                    "text-[var(--muted)]"
                )}>
                    <div class={classes!("flex", "flex-wrap", "items-center", "gap-2")}>
                        { for article.category.iter().map(|cat| html! {
                            <span class={classes!(
                                "tag-pill",
                                "inline-flex",
                                "items-center",
                                "gap-1.5",
                                "rounded-full",
                                "bg-[var(--primary-soft)]",
                                "px-3",
                                "py-1.5",
                                "text-xs",
                                "font-medium",
                                "text-[var(--primary)]"
                            )}>
                                <Icon name={IconName::Tag} size={14} />
                                { cat }
                            </span>
                        }) }
                    </div>
                    <span class={classes!("inline-flex", "items-center", "gap-2")}>
                        <Icon name={IconName::Calendar} size={16} />
                        <time datetime={article.date.clone()}>{ published }</time>
                    </span>
                    <span class={classes!("inline-flex", "items-center", "gap-2")}>
                        <Icon name={IconName::Clock} size={16} />
                        { READING_TIME_LABEL }
                    </span>
                </div>
            </header>

            <p class={classes!(
                "border-l-4",
                "border-[var(--primary)]",
                "py-2",
                "pl-6",
                "text-xl",
                "leading-relaxed",
                "text-[var(--muted)]"
            )}>
                { &article.description }
            </p>

            <section class={classes!("article-content", "space-y-6", "leading-relaxed")}>
                { for article.paragraphs().map(|paragraph| html! {
                    <p>{ paragraph.to_string() }</p>
                }) }
            </section>

            { tag_footer }
        </article>
    }
}
