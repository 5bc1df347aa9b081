// 重新导出shared crate的数据模型
#[cfg(feature = "mock")]
use std::cell::RefCell;

pub use inkpress_shared::{Article, ArticleDraft};
#[cfg(feature = "mock")]
use inkpress_shared::NewArticle;

// =============== Mock 数据 ===============

#[cfg(feature = "mock")]
thread_local! {
    static MOCK_ARTICLES: RefCell<Vec<Article>> = RefCell::new(seed_articles());
}

/// 返回 mock 文章列表（按插入顺序）。
#[cfg(feature = "mock")]
pub fn mock_articles() -> Vec<Article> {
    MOCK_ARTICLES.with(|articles| articles.borrow().clone())
}

#[cfg(feature = "mock")]
pub fn mock_article(id: &str) -> Option<Article> {
    MOCK_ARTICLES.with(|articles| articles.borrow().iter().find(|a| a.id == id).cloned())
}

/// Append a submitted article, assigning the next numeric id.
#[cfg(feature = "mock")]
pub fn insert_mock_article(body: NewArticle) -> Article {
    MOCK_ARTICLES.with(|articles| {
        let mut articles = articles.borrow_mut();
        let next_id = articles
            .iter()
            .filter_map(|a| a.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let article = body.into_article(next_id.to_string());
        articles.push(article.clone());
        article
    })
}

// 内部函数：构建初始文章，日期相对当前时间分布，方便检查相对时间标签
#[cfg(feature = "mock")]
fn seed_articles() -> Vec<Article> {
    use chrono::{Duration, Utc};

    let samples: [(&str, &[&str], &str, i64); 6] = [
        (
            "Future of Fintech",
            &["FINANCE", "TECH"],
            "Exploring how technology is reshaping the financial industry.",
            0,
        ),
        (
            "Mastering Tax Season",
            &["TAX", "PLANNING", "COMPLIANCE"],
            "Practical steps to stay organised when filing deadlines approach.",
            1,
        ),
        (
            "Audit Readiness Checklist",
            &["AUDIT"],
            "What reviewers look for and how to prepare your books ahead of time.",
            4,
        ),
        (
            "Cash Flow for Startups",
            &["FINANCE", "GROWTH"],
            "Why runway matters more than revenue in the first two years.",
            9,
        ),
        (
            "Ledger Hygiene",
            &["ACCOUNTING"],
            "Small habits that keep reconciliations painless.",
            21,
        ),
        ("Career Paths in Accounting", &[], "Roles, skills and certifications worth pursuing.", 45),
    ];

    let now = Utc::now();
    samples
        .iter()
        .enumerate()
        .map(|(idx, (title, categories, description, days_ago))| Article {
            id: (idx + 1).to_string(),
            title: title.to_string(),
            category: categories.iter().map(|c| c.to_string()).collect(),
            description: description.to_string(),
            cover_image: format!("https://picsum.photos/seed/inkpress-{}/1200/600", idx + 1),
            content: format!(
                "{}\n\nThis mock article exists so the interface can be exercised without a \
                 running backend.\n\nEach paragraph is separated by a blank line, exactly like \
                 submitted content.",
                description
            ),
            date: (now - Duration::days(*days_ago)).to_rfc3339(),
        })
        .collect()
}
