use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use sprout::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let addr = std::env::var("SPROUT_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let app = Router::new().route("/", get(index));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[axum::debug_handler]
async fn index() -> Response {
    match page() {
        Ok(page) => page.into_response(),
        Err(err) => {
            tracing::error!(%err, "failed to build page");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

fn page() -> sprout::Result<Node> {
    let html = root("html");

    let head = html.head();
    head.meta_with(r#"charset="utf-8""#).merge();
    head.title().text("sprout");

    let body = html.body();
    body.h1().text("Hello");
    body.ul_with(r#"class="items""#)
        .li()
        .text("Same item, three times")
        .times(3)?;
    body.div_with(r#"class="card""#)
        .mark("card")
        .p()
        .text("Cards repeat too")
        .times_marked(2, "card")?;

    Ok(html)
}
