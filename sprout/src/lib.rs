//! Fluent builder for tag-based markup.
//!
//! A document is a tree of [`Node`]s. Each node has a tag name, an opaque attribute string and
//! either text or child nodes. Building methods return a node so calls can be chained down the
//! tree, [`Node::up`], [`Node::to`] and [`Node::root`] climb back up, and [`Node::string`]
//! renders the whole subtree without any added whitespace.
//!
//! ```
//! use sprout::prelude::*;
//!
//! let page = root("ul");
//! page.li().mark("item").a_with(r#"href="/""#).text("home").times_marked(2, "item")?;
//! assert_eq!(
//!     page.string(),
//!     r#"<ul><li><a href="/">home</a></li><li><a href="/">home</a></li></ul>"#
//! );
//! # Ok::<(), sprout::Error>(())
//! ```

#[cfg(feature = "axum")]
pub mod axum_html;
pub mod error;
pub mod html;
pub mod node;

pub use error::{Error, NotFound, Result};
pub use node::Node;

/// Starts a new document.
pub fn root(name: impl Into<String>) -> Node {
    Node::new(name)
}

/// Starts a new document whose root tag carries `attributes`.
pub fn root_with(name: impl Into<String>, attributes: impl Into<String>) -> Node {
    Node::create(name, attributes)
}

pub mod prelude {
    pub use crate::html::HtmlTags;
    pub use crate::{root, root_with, Error, Node};
}
