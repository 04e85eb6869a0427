//! Landing page.

use crate::state::AppState;
use axum::{extract::State, response::Html, routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(landing_page(&state.config.metrics_path()))
}

fn landing_page(metrics_path: &str) -> String {
    format!(
        "<html>
<head><title>A Prometheus Exporter</title></head>
<body>
<h1>A Prometheus Exporter</h1>
<p><a href='{}'>Metrics</a></p>
</body>
</html>
",
        metrics_path
    )
}
