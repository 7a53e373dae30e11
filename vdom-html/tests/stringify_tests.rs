//! End-to-end rendering of virtual trees.

use facet_testhelpers::test;
use vdom_html::{
    StringifyError, StringifyOptions, StyleMap, VElement, VNode, stringify, stringify_with_options,
};

fn html(node: impl Into<VNode<'static>>) -> String {
    stringify(&node.into()).unwrap()
}

fn html_with(node: impl Into<VNode<'static>>, opts: &StringifyOptions) -> String {
    stringify_with_options(&node.into(), opts).unwrap()
}

#[test]
fn test_returns_string() {
    assert_eq!(html(VElement::new("div")), "<div></div>");
}

#[test]
fn test_serializes_valid_properties() {
    let div = VElement::new("div")
        .with_property("id", "test")
        .with_property("class", "testClass")
        .with_property("invalid", "test");
    assert_eq!(html(div), r#"<div id="test" class="testClass"></div>"#);
}

#[test]
fn test_class_property() {
    let div = VElement::new("div").with_property("class", "small");
    assert_eq!(html(div), r#"<div class="small"></div>"#);
}

#[test]
fn test_class_name_property() {
    let div = VElement::new("div").with_property("className", "small");
    assert_eq!(html(div), r#"<div class="small"></div>"#);
}

#[test]
fn test_accept_charset_property() {
    let div = VElement::new("div").with_property("acceptCharset", "utf-8");
    assert_eq!(html(div), r#"<div accept-charset="utf-8"></div>"#);
}

#[test]
fn test_http_equiv_property() {
    let div = VElement::new("div").with_property("httpEquiv", "refresh");
    assert_eq!(html(div), r#"<div http-equiv="refresh"></div>"#);
}

#[test]
fn test_style_serialization() {
    let div = VElement::new("div").with_style(StyleMap::from_iter([
        ("background", "red"),
        ("font-weight", "bold"),
    ]));
    assert_eq!(
        html(div),
        r#"<div style="background: red; font-weight: bold;"></div>"#
    );
}

#[test]
fn test_recurses_children() {
    let tree = VElement::new("div")
        .with_child(
            VElement::new("div")
                .with_property("id", 2)
                .with_child(VElement::new("div").with_child(VNode::text("Test"))),
        )
        .with_child(VElement::new("div").with_property("id", 3));
    assert_eq!(
        html(tree),
        r#"<div><div id="2"><div>Test</div></div><div id="3"></div></div>"#
    );
}

#[test]
fn test_self_closing_tag() {
    assert_eq!(html(VElement::new("br")), "<br />");
}

#[test]
fn test_script_contents_not_escaped() {
    let tree = VElement::new("div").with_child(
        VElement::new("script").with_child(VNode::text(r#"console.log("foobar");"#)),
    );
    assert_eq!(
        html(tree),
        r#"<div><script>console.log("foobar");</script></div>"#
    );
}

#[test]
fn test_non_script_text_escaped() {
    let tree = VElement::new("div").with_child(
        VElement::new("pre").with_child(VNode::text(r#"console.log("foobar");"#)),
    );
    assert_eq!(
        html(tree),
        "<div><pre>console.log(&quot;foobar&quot;);</pre></div>"
    );
}

#[test]
fn test_svg_attributes() {
    let svg = VElement::new("svg")
        .with_property("viewBox", "0 0 24 24")
        .with_style(StyleMap::from_iter([
            ("pointer-events", "none"),
            ("width", "24px"),
            ("height", "24px"),
            ("display", "block"),
        ]))
        .with_child(
            VElement::new("path")
                .with_property("d", "M3,18h18v-2H3V18z M3,13h18v-2H3V13z M3,6v2h18V6H3z"),
        );
    assert_eq!(
        html(svg),
        concat!(
            r#"<svg viewBox="0 0 24 24" style="pointer-events: none; width: 24px; height: 24px; display: block;">"#,
            r#"<path d="M3,18h18v-2H3V18z M3,13h18v-2H3V13z M3,6v2h18V6H3z"></path></svg>"#
        )
    );
}

#[test]
fn test_invalid_attributes_option() {
    let div = VElement::new("div")
        .with_property("testAttribute", "test")
        .with_children(Vec::<VNode>::new());
    let opts = StringifyOptions::new().invalid_attributes();
    assert_eq!(html_with(div, &opts), r#"<div testAttribute="test"></div>"#);
}

#[test]
fn test_valid_attributes_option() {
    let div = VElement::new("div").with_property("testAttribute", "test");
    let opts = StringifyOptions::new().valid_attributes([("testAttribute", "test-attribute")]);
    assert_eq!(html_with(div, &opts), r#"<div test-attribute="test"></div>"#);
}

#[test]
fn test_valid_attributes_drops_builtin_names() {
    let div = VElement::new("div")
        .with_property("id", "gone")
        .with_property("className", "kept")
        .with_property("testAttribute", "test");
    let opts = StringifyOptions::new().valid_attributes([("testAttribute", "test-attribute")]);
    assert_eq!(
        html_with(div, &opts),
        r#"<div class="kept" test-attribute="test"></div>"#
    );
}

#[test]
fn test_self_closing_tags_option() {
    let opts = StringifyOptions::new().self_closing_tags(["div"]);
    let div = VElement::new("div").with_children(Vec::<VNode>::new());
    assert_eq!(html_with(div, &opts), "<div />");

    let div = VElement::new("div").with_child(VNode::text("vanishes"));
    assert_eq!(html_with(div, &opts), "<div />");
}

#[test]
fn test_self_closing_tags_option_replaces_void_set() {
    let opts = StringifyOptions::new().self_closing_tags(["div"]);
    assert_eq!(html_with(VElement::new("br"), &opts), "<br></br>");
}

#[test]
fn test_raw_text_tags_option() {
    let opts = StringifyOptions::new().raw_text_tags(["style"]);
    let tree = VElement::new("div")
        .with_child(VElement::new("style").with_child(VNode::text("a > b { }")))
        .with_child(VElement::new("script").with_child(VNode::text("a > b")));
    assert_eq!(
        html_with(tree, &opts),
        "<div><style>a > b { }</style><script>a &gt; b</script></div>"
    );
}

#[test]
fn test_empty_element_property() {
    for tag in ["div", "span", "p", "section", "svg"] {
        assert_eq!(html(VElement::new(tag)), format!("<{tag}></{tag}>"));
    }
    for tag in ["br", "img", "input", "hr", "meta", "link"] {
        assert_eq!(html(VElement::new(tag)), format!("<{tag} />"));
    }
}

#[test]
fn test_attribute_order_follows_properties() {
    let keys = ["title", "id", "lang", "dir", "role", "tabIndex", "hidden"];
    let expected_names = ["title", "id", "lang", "dir", "role", "tabindex", "hidden"];

    // every rotation of the key order must come out in that same order
    for shift in 0..keys.len() {
        let mut div = VElement::new("div");
        let mut expected = String::from("<div");
        for i in 0..keys.len() {
            let idx = (i + shift) % keys.len();
            div.set_property(keys[idx], idx);
            expected.push_str(&format!(" {}=\"{}\"", expected_names[idx], idx));
        }
        expected.push_str("></div>");
        assert_eq!(html(div), expected);
    }
}

#[test]
fn test_attribute_order_with_class_merge() {
    let div = VElement::new("div")
        .with_property("class", "a")
        .with_property("id", "x")
        .with_property("className", "b");
    assert_eq!(html(div), r#"<div class="b" id="x"></div>"#);
}

#[test]
fn test_deep_tree() {
    let mut node = VNode::text("leaf");
    for _ in 0..200 {
        node = VElement::new("span").with_child(node).into();
    }
    let out = stringify(&node).unwrap();
    assert!(out.starts_with("<span><span>"));
    assert!(out.contains("leaf"));
    assert_eq!(out.matches("</span>").count(), 200);
}

#[test]
fn test_widget_is_unsupported() {
    let tree = VNode::from(VElement::new("div").with_child(VNode::widget("Counter")));
    let err = stringify(&tree).unwrap_err();
    assert!(matches!(err, StringifyError::UnsupportedNodeKind { .. }));
}

#[test]
fn test_widget_under_self_closing_tag_is_ignored() {
    let tree = VElement::new("br").with_child(VNode::widget("Counter"));
    assert_eq!(html(tree), "<br />");
}

#[test]
fn test_borrowed_tree() {
    let tag = String::from("article");
    let body = String::from("x < y");
    let tree = VNode::from(VElement::new(&tag).with_child(VNode::text(&body)));
    assert_eq!(stringify(&tree).unwrap(), "<article>x &lt; y</article>");
}
