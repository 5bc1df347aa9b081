use inkpress_shared::parse_categories;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    cache::ArticleCache,
    components::{
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::use_create_article,
    i18n::current::create_form as t,
    models::ArticleDraft,
};

/// Raw text of the five form fields.
#[derive(Debug, Clone, Default, PartialEq)]
struct FormFields {
    title: String,
    category: String,
    description: String,
    cover_image: String,
    content: String,
}

impl FormFields {
    fn to_draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.clone(),
            category: parse_categories(&self.category),
            description: self.description.clone(),
            cover_image: self.cover_image.clone(),
            content: self.content.clone(),
        }
    }
}

fn event_value(event: &InputEvent) -> Option<String> {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

fn bind_field(
    fields: &UseStateHandle<FormFields>,
    apply: fn(&mut FormFields, String),
) -> Callback<InputEvent> {
    let fields = fields.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(value) = event_value(&event) {
            let mut next = (*fields).clone();
            apply(&mut next, value);
            fields.set(next);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct CreateArticleFormProps {
    pub cache: ArticleCache,
    /// Invoked after the article was stored and the form cleared.
    #[prop_or_default]
    pub on_success: Option<Callback<()>>,
}

#[function_component(CreateArticleForm)]
pub fn create_article_form(props: &CreateArticleFormProps) -> Html {
    let fields = use_state(FormFields::default);
    let create = use_create_article(props.cache.clone());

    let onsubmit = {
        let fields = fields.clone();
        let create = create.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if create.is_pending() {
                return;
            }

            let draft = fields.to_draft();
            let fields = fields.clone();
            let create = create.clone();
            let on_success = on_success.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match create.mutate_async(draft).await {
                    Ok(_) => {
                        fields.set(FormFields::default());
                        if let Some(cb) = on_success.as_ref() {
                            cb.emit(());
                        }
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to create blog: {} ({})", e, e.detail()).into(),
                        );
                    },
                }
            });
        })
    };

    let label_class = classes!("block", "text-sm", "font-medium");
    let input_class = classes!(
        "w-full",
        "rounded-md",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "px-3",
        "py-2",
        "text-sm",
        "focus:outline-none",
        "focus:ring-2",
        "focus:ring-[var(--primary)]"
    );

    let submit_label = if create.is_pending() { t::SUBMITTING } else { t::SUBMIT };

    html! {
        <section class={classes!(
            "rounded-xl",
            "border",
            "border-[var(--border)]",
            "bg-[var(--surface)]",
            "shadow-sm"
        )}>
            <header class={classes!("space-y-1.5", "p-6")}>
                <h2 class={classes!("text-2xl", "font-semibold")}>{ t::TITLE }</h2>
                <p class={classes!("text-sm", "text-[var(--muted)]")}>{ t::SUBTITLE }</p>
            </header>
            <form class={classes!("space-y-4", "p-6", "pt-0")} {onsubmit}>
                <div class="space-y-2">
                    <label class={label_class.clone()} for="title">{ t::FIELD_TITLE }</label>
                    <input
                        id="title"
                        class={input_class.clone()}
                        value={fields.title.clone()}
                        oninput={bind_field(&fields, |f, v| f.title = v)}
                        placeholder={t::FIELD_TITLE_PLACEHOLDER}
                        required={true}
                    />
                </div>

                <div class="space-y-2">
                    <label class={label_class.clone()} for="category">{ t::FIELD_CATEGORY }</label>
                    <input
                        id="category"
                        class={input_class.clone()}
                        value={fields.category.clone()}
                        oninput={bind_field(&fields, |f, v| f.category = v)}
                        placeholder={t::FIELD_CATEGORY_PLACEHOLDER}
                        required={true}
                    />
                </div>

                <div class="space-y-2">
                    <label class={label_class.clone()} for="description">{ t::FIELD_DESCRIPTION }</label>
                    <textarea
                        id="description"
                        class={input_class.clone()}
                        value={fields.description.clone()}
                        oninput={bind_field(&fields, |f, v| f.description = v)}
                        placeholder={t::FIELD_DESCRIPTION_PLACEHOLDER}
                        rows="3"
                        required={true}
                    />
                </div>

                <div class="space-y-2">
                    <label class={label_class.clone()} for="coverImage">{ t::FIELD_COVER }</label>
                    <input
                        id="coverImage"
                        type="url"
                        class={input_class.clone()}
                        value={fields.cover_image.clone()}
                        oninput={bind_field(&fields, |f, v| f.cover_image = v)}
                        placeholder={t::FIELD_COVER_PLACEHOLDER}
                        required={true}
                    />
                </div>

                <div class="space-y-2">
                    <label class={label_class} for="content">{ t::FIELD_CONTENT }</label>
                    <textarea
                        id="content"
                        class={input_class}
                        value={fields.content.clone()}
                        oninput={bind_field(&fields, |f, v| f.content = v)}
                        placeholder={t::FIELD_CONTENT_PLACEHOLDER}
                        rows="10"
                        required={true}
                    />
                </div>

                <div class={classes!("flex", "flex-wrap", "items-center", "gap-3")}>
                    <button
                        type="submit"
                        class={classes!(
                            "inline-flex",
                            "items-center",
                            "gap-2",
                            "rounded-md",
                            "bg-[var(--primary)]",
                            "px-4",
                            "py-2",
                            "text-sm",
                            "font-medium",
                            "text-white",
                            "disabled:opacity-50",
                            "disabled:cursor-not-allowed"
                        )}
                        disabled={create.is_pending()}
                    >
                        if create.is_pending() {
                            <LoadingSpinner size={SpinnerSize::Small} />
                        }
                        { submit_label }
                    </button>
                    if create.is_success() {
                        <p class={classes!("text-sm", "text-[var(--success)]")} role="status">
                            { t::SUCCESS }
                        </p>
                    }
                </div>
                if create.is_error() {
                    <ErrorBanner message={t::FAILURE} />
                }
            </form>
        </section>
    }
}
