//! Inkpress: browse articles and publish new ones against a remote blog API.

mod api;
mod cache;
mod components;
mod config;
mod hooks;
mod i18n;
mod models;

use yew::prelude::*;

use crate::{
    cache::{ArticleCache, CacheRevision, CacheStores},
    components::{
        article_detail::ArticleDetail, article_list::ArticleList,
        create_article_form::CreateArticleForm, header::Header,
    },
    i18n::current::browse as t,
};

#[function_component(App)]
fn app() -> Html {
    let selected_id = use_state(|| None::<String>);
    let show_create_form = use_state(|| false);

    let revision = use_reducer(CacheRevision::default);
    let stores = {
        let notify = revision.dispatcher();
        use_memo((), move |_| CacheStores::new(notify))
    };
    let cache = ArticleCache::new(stores, &revision);

    let on_toggle_mode = {
        let show_create_form = show_create_form.clone();
        Callback::from(move |_: ()| show_create_form.set(!*show_create_form))
    };

    let on_select = {
        let selected_id = selected_id.clone();
        Callback::from(move |id: String| selected_id.set(Some(id)))
    };

    let on_created = {
        let show_create_form = show_create_form.clone();
        Callback::from(move |_: ()| show_create_form.set(false))
    };

    let main_view = if *show_create_form {
        html! {
            <div class={classes!("mx-auto", "max-w-4xl", "px-6", "py-12")}>
                <CreateArticleForm cache={cache.clone()} on_success={Some(on_created)} />
            </div>
        }
    } else {
        html! {
            <div class={classes!("flex", "h-full", "overflow-hidden")}>
                <aside class={classes!(
                    "flex",
                    "w-[30%]",
                    "flex-col",
                    "border-r",
                    "border-[var(--border)]",
                    "bg-[var(--surface-alt)]/10"
                )}>
                    <div class={classes!("border-b", "border-[var(--border)]", "px-6", "py-5")}>
                        <h3 class={classes!("text-lg", "font-semibold", "tracking-tight")}>
                            { t::LIST_TITLE }
                        </h3>
                        <p class={classes!("mt-1", "text-sm", "text-[var(--muted)]")}>
                            { t::LIST_SUBTITLE }
                        </p>
                    </div>
                    <div class={classes!("flex-1", "overflow-y-auto", "px-4", "py-6")}>
                        <ArticleList
                            cache={cache.clone()}
                            selected_id={(*selected_id).clone()}
                            {on_select}
                        />
                    </div>
                </aside>
                <section class={classes!("flex", "w-[70%]", "flex-col", "overflow-hidden")}>
                    <div class={classes!("flex-1", "overflow-y-auto")}>
                        <div class={classes!("mx-auto", "max-w-5xl", "px-8", "py-8")}>
                            <ArticleDetail cache={cache.clone()} article_id={(*selected_id).clone()} />
                        </div>
                    </div>
                </section>
            </div>
        }
    };

    html! {
        <div class={classes!("min-h-screen", "bg-[var(--bg)]", "text-[var(--text)]")}>
            <Header creating={*show_create_form} {on_toggle_mode} />
            <main class={classes!("h-[calc(100vh-88px)]")}>
                { main_view }
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
