use inkpress_shared::{Loadable, MutationStatus, RequestError};
use yew::prelude::*;

use crate::{
    api,
    cache::ArticleCache,
    models::{Article, ArticleDraft},
};

/// Every article, shared by all consumers through the cache.
///
/// # Example
/// ```rust,ignore
/// #[function_component(Count)]
/// fn count(props: &CountProps) -> Html {
///     let articles = use_articles(props.cache.clone());
///     match articles {
///         Loadable::Ready(list) => html! { { list.len() } },
///         _ => Html::default(),
///     }
/// }
/// ```
#[hook]
pub fn use_articles(cache: ArticleCache) -> Loadable<Vec<Article>> {
    {
        use_effect_with(cache.clone(), |cache| {
            cache.ensure_articles();
            || ()
        });
    }

    cache.articles()
}

/// One article by id. `None` in, `None` out: no request is issued without a
/// selection.
#[hook]
pub fn use_article(cache: ArticleCache, id: Option<String>) -> Option<Loadable<Article>> {
    {
        use_effect_with((cache.clone(), id.clone()), |(cache, id)| {
            cache.ensure_article(id.as_deref());
            || ()
        });
    }

    id.map(|id| cache.article(&id))
}

/// Create mutation bound to the cache.
#[derive(Clone, PartialEq)]
pub struct CreateArticleHandle {
    status: UseStateHandle<MutationStatus>,
    cache: ArticleCache,
}

impl CreateArticleHandle {
    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn is_error(&self) -> bool {
        self.status.is_error()
    }

    /// Submit `draft`; on success the article list is invalidated so the
    /// next list render refetches it. Nothing is inserted optimistically.
    pub async fn mutate_async(self, draft: ArticleDraft) -> Result<Article, RequestError> {
        self.status.set(MutationStatus::Pending);
        let result = api::create_article(draft).await;
        self.status.set(self.cache.settle_create(&result));
        result
    }
}

#[hook]
pub fn use_create_article(cache: ArticleCache) -> CreateArticleHandle {
    let status = use_state(MutationStatus::default);
    CreateArticleHandle {
        status,
        cache,
    }
}
