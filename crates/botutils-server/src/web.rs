//! Health check, root redirect and the documentation page.

use axum::response::{Html, Redirect};

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn redirect_to_docs() -> Redirect {
    Redirect::to("/scalar")
}

/// Scalar API reference, loaded from its CDN and pointed at `/openapi.json`.
pub async fn serve_docs() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1"/>
  <title>BotUtils API Documentation</title>
</head>
<body>
  <div id="app"></div>
  <script src="https://cdn.jsdelivr.net/npm/@scalar/api-reference"></script>
  <script>
    Scalar.createApiReference('#app', {
      url: '/openapi.json',
      showDeveloperTools: 'never',
      documentDownloadType: 'both',
    })
  </script>
</body>
</html>"#,
    )
}
