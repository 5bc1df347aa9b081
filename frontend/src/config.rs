//! Compile-time configuration for the frontend application.

/// Base URL of the article service.
/// - Local development: the default `http://localhost:3001`
/// - Deployments: set `INKPRESS_API_BASE` when building
pub const API_BASE: &str = match option_env!("INKPRESS_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3001",
};

/// Collection path of the article resource.
pub const ARTICLES_PATH: &str = "blogs";

/// Endpoint for one resource path below [`API_BASE`].
pub fn api_url(path: &str) -> String {
    // Tolerate a trailing slash on the base and a leading one on the path
    let base = API_BASE.trim_end_matches('/');
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}/{}", base, path)
}
