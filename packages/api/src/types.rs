use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lang::{resolve_content, Lang};
use crate::urls::normalize_external_url;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn avatar_url(&self) -> Option<String> {
        normalize_external_url(self.avatar.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub slug: String,
    pub name_uz: String,
    #[serde(default)]
    pub name_ru: Option<String>,
}

impl Category {
    pub fn name(&self, lang: Lang) -> &str {
        resolve_content(lang, &self.name_uz, self.name_ru.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newspaper {
    pub id: i64,
    #[serde(default)]
    pub title_uz: String,
    #[serde(default)]
    pub title_ru: Option<String>,
    /// Older issues only carry a single untranslated title.
    #[serde(default)]
    pub title: Option<String>,
    pub issue_date: DateTime<Utc>,
    #[serde(default)]
    pub pdf_url: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub articles: Option<Vec<Article>>,
}

impl Newspaper {
    pub fn title(&self, lang: Lang) -> &str {
        let primary = if self.title_uz.is_empty() {
            self.title.as_deref().unwrap_or_default()
        } else {
            self.title_uz.as_str()
        };
        resolve_content(lang, primary, self.title_ru.as_deref())
    }

    pub fn pdf_url(&self) -> Option<String> {
        normalize_external_url(Some(&self.pdf_url))
    }

    pub fn cover_url(&self) -> Option<String> {
        normalize_external_url(self.cover_image.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    pub id: i64,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    #[serde(alias = "text")]
    pub content: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub article_id: Option<i64>,
    #[serde(default)]
    pub user: Option<CommentAuthor>,
}

impl Comment {
    pub fn author_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.full_name.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleAuthor {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    pub full_name: String,
}

/// Issue summary embedded in an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleNewspaper {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    pub issue_date: DateTime<Utc>,
    #[serde(default)]
    pub pdf_url: String,
    #[serde(default)]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title_uz: String,
    #[serde(default)]
    pub title_ru: Option<String>,
    #[serde(default)]
    pub content_uz: String,
    #[serde(default)]
    pub content_ru: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub newspaper_id: Option<i64>,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub author: Option<ArticleAuthor>,
    #[serde(default)]
    pub newspaper: Option<ArticleNewspaper>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Article {
    pub fn title(&self, lang: Lang) -> &str {
        resolve_content(lang, &self.title_uz, self.title_ru.as_deref())
    }

    pub fn content(&self, lang: Lang) -> &str {
        resolve_content(lang, &self.content_uz, self.content_ru.as_deref())
    }

    pub fn category_name(&self, lang: Lang) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name(lang))
            .unwrap_or_default()
    }

    pub fn thumbnail_url(&self) -> Option<String> {
        normalize_external_url(self.thumbnail.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            total: 0,
            pages: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Partial profile update; absent fields are left unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    /// Build an update from form input: fields are trimmed and blank ones
    /// dropped.
    pub fn from_form(full_name: &str, email: &str, avatar: &str) -> Self {
        fn non_blank(v: &str) -> Option<String> {
            let v = v.trim();
            (!v.is_empty()).then(|| v.to_string())
        }
        Self {
            full_name: non_blank(full_name),
            email: non_blank(email),
            avatar: non_blank(avatar),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment<'a> {
    pub text: &'a str,
    pub article_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newspaper_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewspaperQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Pdf,
    Document,
}

impl UploadKind {
    pub fn path(&self) -> &'static str {
        match self {
            UploadKind::Image => "/upload/image",
            UploadKind::Pdf => "/upload/pdf",
            UploadKind::Document => "/upload/document",
        }
    }
}
