#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
use chrono::Utc;
#[cfg(not(feature = "mock"))]
use inkpress_shared::ensure_success;
use inkpress_shared::{Article, ArticleDraft, Operation, RequestError};

#[cfg(not(feature = "mock"))]
use crate::config::{api_url, ARTICLES_PATH};
#[cfg(feature = "mock")]
use crate::models;

// 每个请求只尝试一次：没有重试、超时或退避

/// 获取全部文章，保持服务端返回的顺序
pub async fn fetch_articles() -> Result<Vec<Article>, RequestError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_articles());
    }

    #[cfg(not(feature = "mock"))]
    {
        let op = Operation::ListArticles;
        let response = Request::get(&api_url(ARTICLES_PATH))
            .send()
            .await
            .map_err(|e| RequestError::new(op, format!("Network error: {:?}", e)))?;

        ensure_success(response.status(), op)?;

        response
            .json()
            .await
            .map_err(|e| RequestError::new(op, format!("Parse error: {:?}", e)))
    }
}

/// 获取文章详情；404 与其他失败一样返回 `RequestError`
pub async fn fetch_article(id: &str) -> Result<Article, RequestError> {
    #[cfg(feature = "mock")]
    {
        return models::mock_article(id).ok_or_else(|| {
            RequestError::new(Operation::GetArticle, format!("HTTP error: 404 ({})", id))
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        let op = Operation::GetArticle;
        let url = api_url(&format!("{}/{}", ARTICLES_PATH, urlencoding::encode(id)));
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| RequestError::new(op, format!("Network error: {:?}", e)))?;

        ensure_success(response.status(), op)?;

        response
            .json()
            .await
            .map_err(|e| RequestError::new(op, format!("Parse error: {:?}", e)))
    }
}

/// Submit a new article, stamped with the current time.
///
/// Whatever the draft contains, `date` is always the moment of this call.
pub async fn create_article(draft: ArticleDraft) -> Result<Article, RequestError> {
    let body = draft.stamp(Utc::now());

    #[cfg(feature = "mock")]
    {
        return Ok(models::insert_mock_article(body));
    }

    #[cfg(not(feature = "mock"))]
    {
        let op = Operation::CreateArticle;
        let response = Request::post(&api_url(ARTICLES_PATH))
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| RequestError::new(op, format!("Serialize error: {:?}", e)))?
            .send()
            .await
            .map_err(|e| RequestError::new(op, format!("Network error: {:?}", e)))?;

        ensure_success(response.status(), op)?;

        response
            .json()
            .await
            .map_err(|e| RequestError::new(op, format!("Parse error: {:?}", e)))
    }
}
