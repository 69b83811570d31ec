use gazeta_api::types::{ArticleQuery, NewspaperQuery, UploadKind};
use gazeta_api::{catalog, ApiError, Lang};
use serde_json::json;

use crate::support::{article_json, route, MockApi};

#[tokio::test]
async fn test_articles_accept_wrapped_listing_and_send_query() {
    let api = MockApi::start(vec![route(
        "GET",
        "/api/articles",
        200,
        json!({
            "data": [article_json(1, "birinchi"), article_json(2, "ikkinchi")],
            "meta": { "page": 2, "limit": 2, "total": 6, "pages": 3 }
        }),
    )])
    .await;

    let query = ArticleQuery {
        page: Some(2),
        limit: Some(2),
        category_id: Some(3),
        ..Default::default()
    };
    let page = api.client().articles(&query).await.expect("articles");

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].title(Lang::Ru), "Статья 2");
    assert_eq!(page.meta.total, 6);
    assert!(page.has_next());

    let req = api.last_request();
    assert_eq!(req.method, "GET");
    assert!(req.target.starts_with("/api/articles?"), "{}", req.target);
    assert!(req.target.contains("page=2"));
    assert!(req.target.contains("categoryId=3"));
    assert!(req.authorization.is_none());
}

#[tokio::test]
async fn test_home_feed_survives_one_malformed_article() {
    let mut broken = article_json(2, "buzilgan");
    broken["createdAt"] = serde_json::Value::Null;
    let api = MockApi::start(vec![route(
        "GET",
        "/api/articles",
        200,
        json!({
            "data": [article_json(1, "birinchi"), broken, article_json(3, "uchinchi")],
            "meta": { "page": 1, "limit": 3, "total": 3, "totalPages": 1 }
        }),
    )])
    .await;

    let page = catalog::latest_articles(&api.client(), &ArticleQuery::default()).await;
    let ids: Vec<i64> = page.items.iter().map(|a| a.id).collect();
    assert_eq!(ids, [1, 3]);
    assert_eq!(page.meta.total, 3);
}

#[tokio::test]
async fn test_slug_is_percent_encoded() {
    let api = MockApi::start(vec![route(
        "GET",
        "/api/articles/slug/yangi%20maktab",
        200,
        article_json(9, "yangi maktab"),
    )])
    .await;

    let article = api
        .client()
        .article_by_slug("yangi maktab")
        .await
        .expect("article");
    assert_eq!(article.id, 9);
    assert_eq!(article.content(Lang::Ru), "Matn");
}

#[tokio::test]
async fn test_comments_use_bearer_token_and_text_field() {
    let api = MockApi::start(vec![
        route(
            "GET",
            "/api/comments",
            200,
            json!([{
                "id": 1,
                "createdAt": "2024-03-05T11:00:00Z",
                "content": "Birinchi!",
                "userId": 2,
                "articleId": 7,
                "user": { "id": 2, "fullName": "Dilnoza" }
            }]),
        ),
        route(
            "POST",
            "/api/comments",
            201,
            json!({ "id": 2, "createdAt": "2024-03-05T12:00:00Z", "text": "Rahmat", "articleId": 7 }),
        ),
        route("DELETE", "/api/comments/2", 200, json!({})),
    ])
    .await;
    let client = api.client();
    client.set_token(Some("tok-1".to_string()));

    let comments = client.comments(Some(7)).await.expect("comments");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].author_name(), "Dilnoza");
    assert_eq!(api.last_request().target, "/api/comments?articleId=7");

    let created = client.add_comment(7, "Rahmat").await.expect("comment");
    assert_eq!(created.content, "Rahmat");
    let req = api.last_request();
    assert_eq!(req.authorization.as_deref(), Some("Bearer tok-1"));
    let sent: serde_json::Value = serde_json::from_str(&req.body).unwrap();
    assert_eq!(sent, json!({ "text": "Rahmat", "articleId": 7 }));

    client.delete_comment(2).await.expect("delete");
    assert_eq!(api.last_request().method, "DELETE");
}

#[tokio::test]
async fn test_error_status_carries_server_message() {
    let api = MockApi::start(vec![route(
        "GET",
        "/api/newspapers/5",
        400,
        json!({ "message": ["id must be a number"] }),
    )])
    .await;

    let err = api.client().newspaper(5).await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "id must be a number");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let missing = api.client().newspaper(6).await.unwrap_err();
    assert!(missing.is_not_found());
}

#[tokio::test]
async fn test_unauthorized_drops_token() {
    let api = MockApi::start(vec![route(
        "POST",
        "/api/comments",
        401,
        json!({ "message": "Unauthorized" }),
    )])
    .await;
    let client = api.client();
    client.set_token(Some("expired".to_string()));

    let err = client.add_comment(1, "salom").await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(client.token(), None);
}

#[tokio::test]
async fn test_catalog_degrades_to_empty_results() {
    let api = MockApi::start(vec![
        route("GET", "/api/articles", 500, json!({ "message": "boom" })),
        route("GET", "/api/categories", 200, json!({ "unexpected": true })),
    ])
    .await;
    let client = api.client();

    let page = catalog::latest_articles(&client, &ArticleQuery::default()).await;
    assert!(page.is_empty());
    assert_eq!(page.meta.page, 1);
    assert!(catalog::categories(&client).await.is_empty());
    assert!(catalog::article_by_slug(&client, "yoq").await.is_none());
    assert!(catalog::article_comments(&client, 1).await.is_empty());
}

#[tokio::test]
async fn test_newspaper_archive_defaults_page_and_limit() {
    let api = MockApi::start(vec![route(
        "GET",
        "/api/newspapers",
        200,
        json!([{
            "id": 1,
            "titleUz": "1-son",
            "titleRu": "Выпуск 1",
            "issueDate": "2024-01-01T00:00:00Z",
            "pdfUrl": "https://api.gazeta.uz/uploadshttps://cdn.gazeta.uz/1.pdf",
            "coverImage": null,
            "createdAt": "2024-01-01T00:00:00Z"
        }]),
    )])
    .await;

    let page = catalog::newspaper_archive(&api.client(), NewspaperQuery::default()).await;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title(Lang::Ru), "Выпуск 1");
    assert_eq!(
        page.items[0].pdf_url().as_deref(),
        Some("https://cdn.gazeta.uz/1.pdf")
    );

    let target = api.last_request().target;
    assert!(target.contains("page=1"), "{target}");
    assert!(target.contains("limit=50"), "{target}");
}

#[tokio::test]
async fn test_upload_reads_wrapped_url() {
    let api = MockApi::start(vec![
        route(
            "POST",
            "/api/upload/image",
            201,
            json!({ "data": { "url": "https://cdn.gazeta.uz/avatar.png" } }),
        ),
        route("POST", "/api/upload/pdf", 201, json!({ "url": "" })),
    ])
    .await;
    let client = api.client();

    let url = client
        .upload(UploadKind::Image, "avatar.png", vec![1, 2, 3])
        .await
        .expect("upload");
    assert_eq!(url, "https://cdn.gazeta.uz/avatar.png");
    assert!(api.last_request().body.contains("avatar.png"));

    let err = client
        .upload(UploadKind::Pdf, "issue.pdf", vec![0; 16])
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::MissingUploadUrl));
}
