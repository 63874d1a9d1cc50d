use std::{
    cell::RefCell,
    fmt::{self, Write},
    rc::{Rc, Weak},
};

use tracing::{debug, trace};

use crate::error::{Error, NotFound, Result};

/// Whatever sits between a node's start-tag and end-tag
#[derive(Debug)]
enum Content {
    Children(Vec<Node>),
    Text(String),
    /// Rendered as the start-tag alone
    Empty,
}

struct NodeData {
    name: String,
    attributes: String,
    content: RefCell<Content>,
    parent: RefCell<Weak<NodeData>>,
    label: RefCell<Option<String>>,
}

/// A markup element, addressed through a cheap reference-counted handle.
///
/// Cloning a `Node` clones the handle, not the element: both handles see the same name,
/// content and label. Children are owned by their parent's child sequence, while the link
/// back to the parent is weak, so a caller has to keep a handle to the root alive for
/// [`Node::up`], [`Node::root`] and [`Node::to`] to reach it.
///
/// ```
/// let foo = sprout::root("foo");
/// foo.add("bar").add_with("baz", r#"zim="qux""#);
/// assert_eq!(foo.string(), r#"<foo><bar><baz zim="qux"></baz></bar></foo>"#);
/// ```
#[derive(Clone)]
pub struct Node(Rc<NodeData>);

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self::create(name, "")
    }

    /// Creates a parentless node. An empty attribute string means no attributes.
    pub fn create(name: impl Into<String>, attributes: impl Into<String>) -> Self {
        Self(Rc::new(NodeData {
            name: name.into(),
            attributes: attributes.into(),
            content: RefCell::new(Content::Children(Vec::new())),
            parent: RefCell::new(Weak::new()),
            label: RefCell::new(None),
        }))
    }

    /// Appends a new `<name>` child and returns the child.
    pub fn add(&self, name: impl Into<String>) -> Node {
        self.add_with(name, "")
    }

    /// Appends a new child carrying `attributes` and returns the child.
    pub fn add_with(&self, name: impl Into<String>, attributes: impl Into<String>) -> Node {
        let node = Node::create(name, attributes);
        self.insert([&node]);
        node
    }

    /// Appends `nodes` in order and makes `self` their parent.
    ///
    /// Text or empty content is replaced by a child sequence first. Nothing stops a node
    /// from being inserted under several parents, or under its own descendant; the latter
    /// never finishes rendering.
    pub fn insert<'a>(&self, nodes: impl IntoIterator<Item = &'a Node>) -> Node {
        let mut content = self.0.content.borrow_mut();
        let mut children = match std::mem::replace(&mut *content, Content::Empty) {
            Content::Children(children) => children,
            Content::Text(_) | Content::Empty => Vec::new(),
        };
        for node in nodes {
            *node.0.parent.borrow_mut() = Rc::downgrade(&self.0);
            trace!(parent = %self.0.name, child = %node.0.name, "insert");
            children.push(node.clone());
        }
        *content = Content::Children(children);
        self.clone()
    }

    /// Replaces the content with literal text, dropping any children.
    pub fn text(&self, value: impl Into<String>) -> Node {
        let value = value.into();
        trace!(node = %self.0.name, len = value.len(), "text");
        *self.0.content.borrow_mut() = Content::Text(value);
        self.clone()
    }

    /// Clears the content so the node renders as its start-tag alone.
    pub fn merge(&self) -> Node {
        trace!(node = %self.0.name, "merge");
        *self.0.content.borrow_mut() = Content::Empty;
        self.clone()
    }

    /// Labels the node as a target for [`Node::to`] and [`Node::times_marked`].
    pub fn mark(&self, label: impl Into<String>) -> Node {
        let label = label.into();
        trace!(node = %self.0.name, %label, "mark");
        *self.0.label.borrow_mut() = Some(label);
        self.clone()
    }

    pub fn up(&self) -> Result<Node> {
        self.parent().ok_or_else(|| {
            debug!(node = %self.0.name, "no parent");
            NotFound::Parent {
                name: self.0.name.clone(),
            }
            .into()
        })
    }

    /// The topmost ancestor still alive, or `self` when there is none.
    pub fn root(&self) -> Node {
        self.rise(|node| node.parent().is_none())
            .unwrap_or_else(|| self.clone())
    }

    /// Nearest node labelled `label`, starting with `self` and moving root-ward.
    pub fn to(&self, label: &str) -> Result<Node> {
        self.rise(|node| node.0.label.borrow().as_deref() == Some(label))
            .ok_or_else(|| {
                debug!(node = %self.0.name, %label, "label not found");
                NotFound::Label {
                    label: label.to_string(),
                }
                .into()
            })
    }

    /// Repeats `self` under its parent so it appears `count` times, and returns the parent.
    ///
    /// The extra occurrences are the same node, not copies: changing it later changes every
    /// occurrence.
    pub fn times(&self, count: i64) -> Result<Node> {
        self.repeat(count, None)
    }

    /// Like [`Node::times`], but repeats the nearest node labelled `label`.
    pub fn times_marked(&self, count: i64, label: &str) -> Result<Node> {
        self.repeat(count, Some(label))
    }

    fn repeat(&self, count: i64, label: Option<&str>) -> Result<Node> {
        if count < 1 {
            debug!(node = %self.0.name, count, "non-positive repeat count");
            return Err(Error::InvalidArgument { count });
        }
        let child = match label {
            Some(label) => self.to(label)?,
            None => self.clone(),
        };
        let parent = child.up()?;
        trace!(parent = %parent.0.name, child = %child.0.name, count, "times");
        for _ in 1..count {
            parent.insert([&child]);
        }
        Ok(parent)
    }

    /// Walks from `self` towards the root and returns the first node matching `predicate`.
    fn rise(&self, predicate: impl Fn(&Node) -> bool) -> Option<Node> {
        let mut node = Some(self.clone());
        while let Some(current) = node {
            if predicate(&current) {
                return Some(current);
            }
            node = current.parent();
        }
        None
    }

    /// Renders the subtree. Same as the `Display` output.
    pub fn string(&self) -> String {
        self.to_string()
    }

    fn render<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.start(out)?;
        match &*self.0.content.borrow() {
            Content::Text(text) => {
                out.write_str(text)?;
                self.end(out)
            }
            Content::Children(children) => {
                for child in children {
                    child.render(out)?;
                }
                self.end(out)
            }
            Content::Empty => Ok(()),
        }
    }

    fn start<W: Write>(&self, out: &mut W) -> fmt::Result {
        if self.0.attributes.is_empty() {
            write!(out, "<{}>", self.0.name)
        } else {
            write!(out, "<{} {}>", self.0.name, self.0.attributes)
        }
    }

    fn end<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "</{}>", self.0.name)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn attributes(&self) -> &str {
        &self.0.attributes
    }

    pub fn label(&self) -> Option<String> {
        self.0.label.borrow().clone()
    }

    /// Same as [`Node::up`] without the error. A parent that has been dropped counts as none.
    pub fn parent(&self) -> Option<Node> {
        self.0.parent.borrow().upgrade().map(Node)
    }

    /// Snapshot of the child sequence; empty when the content is text or cleared.
    pub fn children(&self) -> Vec<Node> {
        match &*self.0.content.borrow() {
            Content::Children(children) => children.clone(),
            Content::Text(_) | Content::Empty => Vec::new(),
        }
    }

    pub fn text_content(&self) -> Option<String> {
        match &*self.0.content.borrow() {
            Content::Text(text) => Some(text.clone()),
            Content::Children(_) | Content::Empty => None,
        }
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Node {}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.0.name)
            .field("attributes", &self.0.attributes)
            .field("label", &*self.0.label.borrow())
            .field("content", &*self.0.content.borrow())
            .finish()
    }
}
