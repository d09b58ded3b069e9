//! JSON API over the blog collection and the résumé
//!
//! Every request loads the collection again, so edits to post files show up
//! without a restart.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::Command;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::{self, Post, PostLoader};
use crate::helpers::format_long_date;
use crate::portfolio::Portfolio;
use crate::Folio;

/// Server state
struct ServerState {
    loader: PostLoader,
    portfolio_path: PathBuf,
    site: SiteInfo,
}

/// Site metadata for page headers and footers
#[derive(Debug, Clone, Serialize)]
struct SiteInfo {
    title: String,
    description: String,
    author: String,
    url: String,
}

impl From<&SiteConfig> for SiteInfo {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            url: config.url.clone(),
        }
    }
}

/// A post as shown on its detail page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PostDetail<'a> {
    #[serde(flatten)]
    post: &'a Post,
    display_date: String,
    prev: Option<&'a str>,
    next: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct TagCount {
    name: String,
    count: usize,
}

/// Build the API router
///
/// `/api/posts/:slug` owns the whole `/api/posts/*` namespace, so listings
/// that are not a single post live beside it.
pub fn router(loader: PostLoader, portfolio_path: PathBuf, config: &SiteConfig) -> Router {
    let state = Arc::new(ServerState {
        loader,
        portfolio_path,
        site: SiteInfo::from(config),
    });

    Router::new()
        .route("/api/site", get(site_info))
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:slug", get(get_post))
        .route("/api/featured", get(featured_posts))
        .route("/api/tags", get(list_tags))
        .route("/api/portfolio", get(get_portfolio))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server
pub async fn start(folio: &Folio, ip: &str, port: u16, open: bool) -> Result<()> {
    let app = router(
        folio.loader(),
        folio.portfolio_path.clone(),
        &folio.config,
    );

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}/api/posts", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn site_info(State(state): State<Arc<ServerState>>) -> Json<SiteInfo> {
    Json(state.site.clone())
}

async fn list_posts(State(state): State<Arc<ServerState>>) -> Json<Vec<Post>> {
    Json(state.loader.load_all().await)
}

async fn featured_posts(State(state): State<Arc<ServerState>>) -> Json<Vec<Post>> {
    let posts = state.loader.load_all().await;
    Json(posts.into_iter().filter(|p| p.featured).collect())
}

async fn get_post(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    let posts = state.loader.load_all().await;

    match content::find_by_slug(&posts, &slug) {
        Some(post) => {
            let detail = PostDetail {
                post,
                display_date: format_long_date(&post.date),
                prev: post.prev(&posts).map(|p| p.slug.as_str()),
                next: post.next(&posts).map(|p| p.slug.as_str()),
            };
            Json(detail).into_response()
        }
        None => {
            tracing::debug!("Post not found: {}", slug);
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Blog post not found" })),
            )
                .into_response()
        }
    }
}

async fn list_tags(State(state): State<Arc<ServerState>>) -> Json<Vec<TagCount>> {
    let posts = state.loader.load_all().await;
    let tags = content::tag_counts(&posts)
        .into_iter()
        .map(|(name, count)| TagCount { name, count })
        .collect();
    Json(tags)
}

async fn get_portfolio(State(state): State<Arc<ServerState>>) -> Response {
    match Portfolio::load(&state.portfolio_path) {
        Ok(portfolio) => Json(portfolio).into_response(),
        Err(e) => {
            tracing::error!("Error loading portfolio data: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Error loading portfolio data" })),
            )
                .into_response()
        }
    }
}

/// Command that hands a URL to the desktop's default handler
fn browser_command(url: &str) -> Command {
    let (program, prefix): (&str, &[&str]) = if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/c", "start"])
    } else {
        ("xdg-open", &[])
    };

    let mut command = Command::new(program);
    command.args(prefix).arg(url);
    command
}

fn open_browser(url: &str) -> std::io::Result<()> {
    browser_command(url).spawn().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemorySource;
    use axum_test::TestServer;
    use serde_json::Value;

    fn test_server(portfolio_path: PathBuf) -> TestServer {
        server_with(portfolio_path, &SiteConfig::default())
    }

    fn server_with(portfolio_path: PathBuf, config: &SiteConfig) -> TestServer {
        let source = MemorySource::new()
            .with_document(
                "blog/old.md",
                "#title\nOld\n#date\n2024-01-01\n#tags\nrust, web\n#body\nOld post",
            )
            .with_document(
                "blog/new.md",
                "#title\nNew\n#date\n2024-03-15\n#tags\n[\"rust\"]\n#featured\ntrue\n#body\nNew post",
            )
            .with_failure("blog/broken.md", "unreadable");

        TestServer::new(router(PostLoader::new(source), portfolio_path, config)).unwrap()
    }

    #[tokio::test]
    async fn test_list_posts() {
        let server = test_server(PathBuf::from("missing.json"));
        let response = server.get("/api/posts").await;
        response.assert_status_ok();

        let posts = response.json::<Vec<Post>>();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old"]);
    }

    #[tokio::test]
    async fn test_featured_posts() {
        let server = test_server(PathBuf::from("missing.json"));
        let posts = server.get("/api/featured").await.json::<Vec<Post>>();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "New");
    }

    #[tokio::test]
    async fn test_get_post() {
        let server = test_server(PathBuf::from("missing.json"));
        let response = server.get("/api/posts/old").await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["title"], "Old");
        assert_eq!(body["displayDate"], "January 1, 2024");
        assert_eq!(body["readTime"], "1 min read");
        assert_eq!(body["prev"], "new");
        assert_eq!(body["next"], Value::Null);
    }

    #[tokio::test]
    async fn test_post_named_featured_is_reachable() {
        let source = MemorySource::new()
            .with_document(
                "blog/featured.md",
                "#title\nWhat Gets Featured\n#date\n2024-02-01\n#body\nCuration notes",
            )
            .with_document("blog/other.md", "#title\nOther\n#featured\ntrue\n#body\n");
        let app = router(
            PostLoader::new(source),
            PathBuf::from("missing.json"),
            &SiteConfig::default(),
        );
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/posts/featured").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert!(body.is_object());
        assert_eq!(body["slug"], "featured");
        assert_eq!(body["title"], "What Gets Featured");

        let featured = server.get("/api/featured").await.json::<Vec<Post>>();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].slug, "other");
    }

    #[tokio::test]
    async fn test_site_info() {
        let config = SiteConfig {
            title: "Jane's Notes".to_string(),
            author: "Jane Doe".to_string(),
            ..Default::default()
        };
        let server = server_with(PathBuf::from("missing.json"), &config);

        let body = server.get("/api/site").await.json::<Value>();
        assert_eq!(body["title"], "Jane's Notes");
        assert_eq!(body["author"], "Jane Doe");
        assert_eq!(body["url"], "http://localhost:4000");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_browser_command() {
        let command = browser_command("http://localhost:4000/api/posts");
        assert_eq!(command.get_program(), "xdg-open");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["http://localhost:4000/api/posts"]);
    }

    #[tokio::test]
    async fn test_get_missing_post() {
        let server = test_server(PathBuf::from("missing.json"));
        let response = server.get("/api/posts/nope").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["error"], "Blog post not found");
    }

    #[tokio::test]
    async fn test_list_tags() {
        let server = test_server(PathBuf::from("missing.json"));
        let tags = server.get("/api/tags").await.json::<Value>();
        assert_eq!(tags[0]["name"], "rust");
        assert_eq!(tags[0]["count"], 2);
        assert_eq!(tags[1]["name"], "web");
    }

    #[tokio::test]
    async fn test_portfolio_error_state() {
        let dir = tempfile::TempDir::new().unwrap();
        let server = test_server(dir.path().join("portfolio.json"));
        let response = server.get("/api/portfolio").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_portfolio() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, r#"{"name": "Jane Doe", "summary": "Engineer"}"#).unwrap();

        let server = test_server(path);
        let response = server.get("/api/portfolio").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["name"], "Jane Doe");
    }
}
