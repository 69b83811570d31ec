//! Content lookups for page renders.
//!
//! A failing request must not take the page down with it: each function
//! logs the error and returns an empty page or `None`.

use crate::client::ApiClient;
use crate::payload::Page;
use crate::types::{Article, ArticleQuery, Category, Comment, Newspaper, NewspaperQuery};

/// Issues fetched for the archive view.
pub const ARCHIVE_PAGE_SIZE: u32 = 50;

pub async fn latest_articles(client: &ApiClient, query: &ArticleQuery) -> Page<Article> {
    client.articles(query).await.unwrap_or_else(|e| {
        tracing::error!("catalog.latest_articles: err={e}");
        Page::default()
    })
}

pub async fn article_by_slug(client: &ApiClient, slug: &str) -> Option<Article> {
    client
        .article_by_slug(slug)
        .await
        .map_err(|e| tracing::error!("catalog.article_by_slug: slug={slug} err={e}"))
        .ok()
}

pub async fn article_by_id(client: &ApiClient, id: i64) -> Option<Article> {
    client
        .article(id)
        .await
        .map_err(|e| tracing::error!("catalog.article_by_id: id={id} err={e}"))
        .ok()
}

pub async fn categories(client: &ApiClient) -> Vec<Category> {
    client.categories().await.unwrap_or_else(|e| {
        tracing::error!("catalog.categories: err={e}");
        Vec::new()
    })
}

pub async fn category_by_slug(client: &ApiClient, slug: &str) -> Option<Category> {
    client
        .category_by_slug(slug)
        .await
        .map_err(|e| tracing::error!("catalog.category_by_slug: slug={slug} err={e}"))
        .ok()
}

/// The archive listing: first page of issues, optionally within a date range.
pub async fn newspaper_archive(
    client: &ApiClient,
    mut query: NewspaperQuery,
) -> Page<Newspaper> {
    query.page.get_or_insert(1);
    query.limit.get_or_insert(ARCHIVE_PAGE_SIZE);
    client.newspapers(&query).await.unwrap_or_else(|e| {
        tracing::error!("catalog.newspaper_archive: err={e}");
        Page::default()
    })
}

pub async fn newspaper(client: &ApiClient, id: i64) -> Option<Newspaper> {
    client
        .newspaper(id)
        .await
        .map_err(|e| tracing::error!("catalog.newspaper: id={id} err={e}"))
        .ok()
}

pub async fn newspaper_by_title(client: &ApiClient, title: &str) -> Option<Newspaper> {
    client
        .newspaper_by_title(title)
        .await
        .map_err(|e| tracing::error!("catalog.newspaper_by_title: title_len={} err={e}", title.len()))
        .ok()
}

pub async fn article_comments(client: &ApiClient, article_id: i64) -> Vec<Comment> {
    client.comments(Some(article_id)).await.unwrap_or_else(|e| {
        tracing::error!("catalog.article_comments: article_id={article_id} err={e}");
        Vec::new()
    })
}
