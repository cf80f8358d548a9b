use axum::{
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use rust_embed::Embed;

/// The single-page UI under `web/`, compiled into the binary
#[derive(Embed)]
#[folder = "web"]
struct WebAssets;

const INDEX: &str = "index.html";

/// Serve a bundled UI file, or the page shell for anything else
///
/// The Home/About Us/Prediction/EDA views are switched client-side, so any
/// path that is not a bundled file gets `index.html`.
pub async fn serve_static(uri: Uri) -> Response {
    let requested = match uri.path().trim_start_matches('/') {
        "" => INDEX,
        path => path,
    };

    if let Some(response) = embedded(requested) {
        return response;
    }

    embedded(INDEX).unwrap_or_else(|| Html(FALLBACK_HTML).into_response())
}

fn embedded(path: &str) -> Option<Response> {
    let file = <WebAssets as Embed>::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.essence_str().to_string())],
            file.data.into_owned(),
        )
            .into_response(),
    )
}

const FALLBACK_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>NewsCat</title>
</head>
<body>
    <h1>NewsCat</h1>
    <p>The web UI is not bundled in this build. The JSON API is available:</p>
    <ul>
        <li><code>GET /api/site</code> page text and image links</li>
        <li><code>GET /api/models</code> available models and categories</li>
        <li><code>POST /api/classify</code> with
            <code>{"text": "...", "model_name": "Logistic Regression"}</code></li>
        <li><code>GET /api/stats</code> classification counters</li>
        <li><code>GET /health</code></li>
    </ul>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn fetch(path: &str) -> (StatusCode, String, String) {
        let response = serve_static(path.parse().unwrap()).await;
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8_lossy(&body).to_string())
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (status, content_type, body) = fetch("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains("Navigation"));
    }

    #[tokio::test]
    async fn test_bundled_script_has_its_mime_type() {
        let (status, content_type, body) = fetch("/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.contains("javascript"));
        assert!(body.contains("/api/classify"));
    }

    #[test]
    fn test_fallback_lists_api() {
        for endpoint in ["/api/site", "/api/models", "/api/classify", "/api/stats"] {
            assert!(FALLBACK_HTML.contains(endpoint));
        }
    }
}
