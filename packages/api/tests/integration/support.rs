//! A canned-response HTTP server standing in for the content API.

use std::sync::{Arc, Mutex};

use gazeta_api::{ApiClient, ApiConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
pub struct Route {
    pub method: &'static str,
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

pub fn route(method: &'static str, path: &'static str, status: u16, body: serde_json::Value) -> Route {
    Route {
        method,
        path,
        status,
        body: body.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    /// Path including the query string.
    pub target: String,
    pub authorization: Option<String>,
    pub body: String,
}

pub struct MockApi {
    url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockApi {
    pub async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock api");
        let url = format!("http://{}", listener.local_addr().expect("local addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    return;
                };
                let routes = routes.clone();
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let _ = serve(stream, &routes, &recorded).await;
                });
            }
        });

        Self { url, requests }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(ApiConfig::with_base_url(&self.url))
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("at least one request")
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

async fn serve(
    mut stream: TcpStream,
    routes: &[Route],
    recorded: &Mutex<Vec<Recorded>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    let mut chunked = false;
    let mut authorization = None;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match name.trim().to_ascii_lowercase().as_str() {
            "content-length" => content_length = value.parse().unwrap_or(0),
            "transfer-encoding" => chunked = value.eq_ignore_ascii_case("chunked"),
            "authorization" => authorization = Some(value.to_string()),
            _ => {}
        }
    }

    if chunked {
        while find(&buf[header_end..], b"0\r\n\r\n").is_none() {
            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
    } else {
        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
    }
    let body = String::from_utf8_lossy(&buf[header_end..]).to_string();

    let path = target.split('?').next().unwrap_or_default();
    let (status, response) = routes
        .iter()
        .find(|r| r.method == method && r.path == path)
        .map(|r| (r.status, r.body.clone()))
        .unwrap_or((404, r#"{"message":"Not Found"}"#.to_string()));

    recorded.lock().unwrap().push(Recorded {
        method,
        target,
        authorization,
        body,
    });

    let reply = format!(
        "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response}",
        response.len()
    );
    stream.write_all(reply.as_bytes()).await?;
    stream.shutdown().await
}

pub fn user_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": "reader@gazeta.uz",
        "fullName": name,
        "avatar": null,
        "role": "USER",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z"
    })
}

pub fn article_json(id: i64, slug: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "createdAt": "2024-03-05T10:00:00.000Z",
        "updatedAt": "2024-03-05T10:00:00.000Z",
        "titleUz": format!("Maqola {id}"),
        "titleRu": format!("Статья {id}"),
        "contentUz": "Matn",
        "contentRu": null,
        "slug": slug,
        "categoryId": 1,
        "authorId": 1,
        "isPublished": true,
        "newspaperId": null,
        "viewCount": 0,
        "thumbnail": null,
        "comments": []
    })
}
