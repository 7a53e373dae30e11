use divan::{Bencher, black_box};
use vdom_html::{StringifyOptions, StyleMap, VElement, VNode};

fn main() {
    divan::main();
}

/// A table-like page: `rows` rows of mixed cells, attributes and styles.
fn wide_tree(rows: usize) -> VNode<'static> {
    let body = (0..rows).map(|i| {
        VElement::new("tr")
            .with_property("className", "row")
            .with_property("data-index", i)
            .with_child(VElement::new("td").with_child(VNode::text("Name & <title>")))
            .with_child(
                VElement::new("td")
                    .with_style(StyleMap::from_iter([("color", "red"), ("font-weight", "bold")]))
                    .with_child(VNode::text(i.to_string())),
            )
            .with_child(
                VElement::new("td")
                    .with_child(VElement::new("img").with_property("src", "icon.png")),
            )
    });
    VElement::new("table").with_children(body).into()
}

fn deep_tree(depth: usize) -> VNode<'static> {
    let mut node = VNode::text("leaf");
    for i in 0..depth {
        node = VElement::new("div")
            .with_property("id", i)
            .with_child(node)
            .into();
    }
    node
}

#[divan::bench(args = [10, 100, 1000])]
fn stringify_wide(bencher: Bencher, rows: usize) {
    let tree = wide_tree(rows);
    bencher.bench_local(|| {
        let html = vdom_html::stringify(black_box(&tree));
        black_box(html)
    });
}

#[divan::bench(args = [10, 100, 500])]
fn stringify_deep(bencher: Bencher, depth: usize) {
    let tree = deep_tree(depth);
    bencher.bench_local(|| {
        let html = vdom_html::stringify(black_box(&tree));
        black_box(html)
    });
}

#[divan::bench]
fn stringify_pretty(bencher: Bencher) {
    let tree = wide_tree(100);
    let opts = StringifyOptions::new().pretty();
    bencher.bench_local(|| {
        let html = vdom_html::stringify_with_options(black_box(&tree), &opts);
        black_box(html)
    });
}
