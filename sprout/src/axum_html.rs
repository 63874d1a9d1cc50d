use axum_core::response::{IntoResponse, Response};

use crate::node::Node;

/// Serves the rendered subtree as an HTML document.
impl IntoResponse for Node {
    fn into_response(self) -> Response {
        (
            [("content-type", "text/html; charset=utf-8")],
            self.string(),
        )
            .into_response()
    }
}
