//! HTTP presentation layer: a read-only page listing the vocabulary.
//!
//! One route of consequence: `GET /` (also reachable as `/index.html`)
//! renders the code/glyph table as HTML. Everything else is a 404. The
//! vocabulary is shared immutably across request handlers, so there is no
//! locking and no per-request state.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::info;

use mojicode_core::Vocabulary;

/// Represent errors raised while starting or running the listener.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The port could not be bound (already in use, insufficient rights).
    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },
    /// The accept loop failed after startup.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serve the vocabulary listing until the process is stopped.
pub async fn serve(vocab: Vocabulary, port: u16) -> Result<(), ServeError> {
    let state = Arc::new(vocab);

    let app = Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { port, source })?;

    info!("Serving vocabulary list at http://localhost:{port}/");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index(State(vocab): State<Arc<Vocabulary>>) -> Html<String> {
    Html(render_index(&vocab))
}

/// Render the index page.
///
/// Pure function of the vocabulary, shared by the handler and tests. Codes
/// are restricted to `[A-Za-z0-9_+-]` at construction time, so rows need no
/// HTML escaping.
pub fn render_index(vocab: &Vocabulary) -> String {
    let mut rows = String::new();
    for code in vocab.codes() {
        if let Some(glyph) = vocab.glyph_for(code) {
            rows.push_str(&format!(
                "        <tr><td>:{code}:</td><td class=\"emoji\">{glyph}</td></tr>\n"
            ));
        }
    }

    format!(
        r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>mojicode — shortcodes</title>
    <style>
      body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial; padding: 2rem; }}
      table {{ border-collapse: collapse; width: 100%; max-width: 800px; }}
      th, td {{ padding: 0.5rem 1rem; border-bottom: 1px solid #eee; text-align: left; }}
      th {{ background: #f7f7f7; }}
      .emoji {{ font-size: 1.5rem; }}
    </style>
  </head>
  <body>
    <h1>mojicode — shortcodes</h1>
    <table>
      <thead><tr><th>Shortcode</th><th>Emoji</th></tr></thead>
      <tbody>
{rows}      </tbody>
    </table>
    <p>Use this page to copy/paste shortcodes or emoji characters.</p>
  </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_page_lists_every_entry() {
        let vocab = Vocabulary::default();
        let html = render_index(&vocab);

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>mojicode — shortcodes</title>"));
        assert_eq!(html.matches("<tr><td>:").count(), 21);
        assert!(html.contains("<tr><td>:100:</td><td class=\"emoji\">💯</td></tr>"));
        assert!(html.contains("<tr><td>:heart:</td><td class=\"emoji\">\u{2764}\u{fe0f}</td></tr>"));
    }

    #[test]
    fn index_page_rows_follow_code_order() {
        let vocab = Vocabulary::default();
        let html = render_index(&vocab);
        let first_row = html.find("<tr><td>:100:").expect("first code is 100");
        let some_row = html.find("<tr><td>:wave:").expect("wave is listed");
        assert!(first_row < some_row);
    }
}
