use sprout::{prelude::*, NotFound};

#[test]
fn root_node_can_be_created() {
    assert_eq!(root("foo").name(), "foo");

    let bar = root_with("bar", r#"baz="qux""#);
    assert_eq!(bar.name(), "bar");
    assert_eq!(bar.attributes(), r#"baz="qux""#);
    assert!(bar.parent().is_none());
}

#[test]
fn renders_empty_child_sequence_with_end_tag() {
    assert_eq!(root("foo").string(), "<foo></foo>");
    assert_eq!(root_with("bar", r#"baz="qux""#).string(), r#"<bar baz="qux"></bar>"#);
    assert_eq!(root("foo").to_string(), "<foo></foo>");
}

#[test]
fn added_child_renders_inside_root() {
    let foo = root("foo");
    foo.add("bar");
    assert_eq!(foo.string(), "<foo><bar></bar></foo>");
}

#[test]
fn nested_chain_reaches_root() {
    let foo = root("foo");
    assert_eq!(
        foo.add("bar").add_with("baz", r#"zim="qux""#).root().string(),
        r#"<foo><bar><baz zim="qux"></baz></bar></foo>"#
    );
}

#[test]
fn root_and_parent_can_be_reached() {
    let foo = root("foo");
    assert_eq!(foo.root(), foo);
    assert_eq!(foo.add("bar").root(), foo);
    assert_eq!(foo.add("bar").up(), Ok(foo.clone()));
}

#[test]
fn parent_of_root_cannot_be_reached() {
    assert_eq!(
        root("foo").up(),
        Err(Error::NodeNotFound(NotFound::Parent {
            name: "foo".to_string()
        }))
    );
}

#[test]
fn marked_node_can_be_reached() {
    let foo = root("foo");
    assert_eq!(foo.mark("label").to("label"), Ok(foo.clone()));
    assert_eq!(foo.mark("label").add("bar").to("label"), Ok(foo.clone()));
}

#[test]
fn nonexistent_mark_cannot_be_reached() {
    assert!(matches!(
        root("foo").to("nonexistent"),
        Err(Error::NodeNotFound(NotFound::Label { .. }))
    ));
}

#[test]
fn can_be_filled_with_text() {
    assert_eq!(root("foo").text("bar").string(), "<foo>bar</foo>");
}

#[test]
fn merge_renders_start_tag_only() {
    let foo = root("foo");
    foo.add("bar");
    assert_eq!(foo.merge().string(), "<foo>");
    assert_eq!(root_with("br", r#"class="x""#).merge().string(), r#"<br class="x">"#);
}

#[test]
fn nodes_can_be_inserted() {
    let foo = root("foo");
    let bar = root_with("bar", r#"baz="qux""#);
    assert_eq!(foo.insert([&bar]).string(), r#"<foo><bar baz="qux"></bar></foo>"#);
    assert_eq!(
        foo.merge().insert([&bar]).string(),
        r#"<foo><bar baz="qux"></bar></foo>"#
    );
    assert_eq!(bar.up(), Ok(foo));
}

#[test]
fn child_nodes_can_be_repeated() {
    let foo = root("foo");
    assert_eq!(
        foo.add("bar").times(2).map(|node| node.string()),
        Ok("<foo><bar></bar><bar></bar></foo>".to_string())
    );
}

#[test]
fn marked_child_nodes_can_be_repeated() {
    let foo = root("foo");
    let parent = foo
        .add("bar")
        .mark("label")
        .add("baz")
        .times_marked(2, "label");
    assert_eq!(parent, Ok(foo.clone()));
    assert_eq!(
        foo.string(),
        "<foo><bar><baz></baz></bar><bar><baz></baz></bar></foo>"
    );
}

#[test]
fn repeat_count_must_be_positive() {
    let foo = root("foo");
    assert_eq!(
        foo.add("baz").times(0),
        Err(Error::InvalidArgument { count: 0 })
    );
    assert_eq!(
        foo.add("baz").times(-1),
        Err(Error::InvalidArgument { count: -1 })
    );
}

#[test]
fn root_node_cannot_be_repeated() {
    assert!(matches!(
        root("foo").times(2),
        Err(Error::NodeNotFound(NotFound::Parent { .. }))
    ));
}

#[test]
fn missing_label_stops_repeat() {
    let foo = root("foo");
    let bar = foo.add("bar");
    assert!(matches!(
        bar.times_marked(3, "row"),
        Err(Error::NodeNotFound(NotFound::Label { .. }))
    ));
    assert_eq!(foo.string(), "<foo><bar></bar></foo>");
}

#[test]
fn errors_propagate_through_chains() -> sprout::Result<()> {
    let table = root("table");
    table
        .tr()
        .mark("row")
        .td()
        .text("cell")
        .times(2)?
        .times_marked(2, "row")?;

    assert_eq!(
        table.string(),
        "<table><tr><td>cell</td><td>cell</td></tr><tr><td>cell</td><td>cell</td></tr></table>"
    );
    Ok(())
}
