//! Semantic tree building and rendering tests.

use proptest::prelude::*;

use secparse::{
    CompositeElementCreator, ElementKind, KindSet, NodeId, Pipeline, ProcessingStep,
    RenderOptions, SemanticElement, TreeNode, lift_elements, parse_html,
};

const FILING: &[u8] = include_bytes!("fixtures/quarterly_report.htm");

fn plain() -> RenderOptions {
    RenderOptions::default().pretty(false)
}

fn line_count(rendered: &str) -> usize {
    if rendered.is_empty() { 0 } else { rendered.lines().count() }
}

/// Node ids in pre-order, each composite followed by its inner elements.
fn expanded(elements: &[SemanticElement], out: &mut Vec<NodeId>) {
    for element in elements {
        out.push(element.node());
        expanded(element.inner_elements(), out);
    }
}

/// Nodes a render with `ignored` shows: not ignored, no ignored ancestor.
fn visible(nodes: &[TreeNode], ignored: KindSet) -> usize {
    nodes
        .iter()
        .filter(|n| !n.element().is_any(ignored))
        .map(|n| 1 + visible(n.children(), ignored))
        .sum()
}

// ============================================================================
// Filing fixture
// ============================================================================

#[test]
fn test_filing_outline() {
    let doc = Pipeline::default().parse_bytes(FILING).expect("parse filing");
    let tree = doc.tree();

    assert_eq!(tree.roots().len(), 3);
    let rendered = tree.render(&plain());
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 15);
    assert_eq!(lines[0], "TitleElement[L1]: UNITED STATES SECURITIES AND EXCHANGE COMMISSION");
    // The hidden <hr> is still the last sibling.
    assert_eq!(lines[1], "├── TextElement: Washington, D.C. 20549");
    assert_eq!(lines[2], "TitleElement[L1]: PART I. FINANCIAL INFORMATION");
    assert_eq!(lines[3], "├── TitleElement[L2]: Item 1. Financial Statements");
    assert!(lines[4].starts_with("│   ├── CompositeSemanticElement: The following table"));
    assert_eq!(
        lines[5],
        "│   │   ├── TextElement: The following table presents revenue by segment."
    );
    assert!(lines[6].starts_with("│   │   └── TableElement: Segment"));
    assert_eq!(lines[7], "│   ├── TextElement: Revenue increased due to higher demand.");
    assert_eq!(
        lines[8],
        "└── TitleElement[L2]: Item 2. Management\u{2019}s Discussion and Analysis"
    );
    assert_eq!(lines[9], "    ├── TextElement: We continue to invest in research.");
    assert_eq!(lines[10], "    ├── ImageElement");
    assert_eq!(lines[11], "    └── EmptyElement");
    assert_eq!(lines[12], "TitleElement[L1]: PART II. OTHER INFORMATION");
    assert_eq!(lines[13], "└── TitleElement[L2]: Item 1. Legal Proceedings");
    assert_eq!(lines[14], "    └── TextElement: None.");
}

#[test]
fn test_filing_outline_with_irrelevant_elements() {
    let doc = Pipeline::default().parse_bytes(FILING).expect("parse filing");
    let tree = doc.tree();

    let rendered = tree.render(&plain().ignored_types(KindSet::EMPTY));

    assert_eq!(line_count(&rendered), tree.len());
    assert!(rendered.contains("│   ├── IrrelevantElement: - 2 -"));
    assert!(rendered.contains("│   └── IrrelevantElement\n"));
    assert!(rendered.contains("└── IrrelevantElement\n"));
}

#[test]
fn test_composite_inner_elements_are_tree_children() {
    let dom = parse_html("<div><p>Some</p><table><tr><td>1</td></tr></table></div>");
    let elements = CompositeElementCreator
        .process(&dom, lift_elements(&dom))
        .expect("composite step");

    let tree = secparse::TreeBuilder::build(&dom, elements);

    let kinds: Vec<_> = tree.iter().map(|n| n.element().kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ElementKind::Composite,
            ElementKind::NotYetClassified,
            ElementKind::NotYetClassified
        ]
    );
}

// ============================================================================
// Properties
// ============================================================================

const BLOCKS: &[&str] = &[
    "<p>Revenue grew in every segment.</p>",
    "<p><b>PART I</b></p>",
    "<p><i>Item 1. Business</i></p>",
    "<p><u>Overview</u></p>",
    "<h2>Risk Factors</h2>",
    "<h3>Market Risk</h3>",
    "<p>12</p>",
    "<hr>",
    "<div style=\"page-break-before:always\"></div>",
    "<div><p>Notes</p><table><tr><td>1</td></tr></table></div>",
    "<div><div><table><tr><td>2</td></tr></table></div><p>Total</p></div>",
    "<table><tr><td>3</td></tr></table>",
    "<div><img src=\"logo.png\"></div>",
    "<p></p>",
];

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(BLOCKS), 0..24)
        .prop_map(|blocks| format!("<html><body>{}</body></html>", blocks.concat()))
}

proptest! {
    #[test]
    fn prop_pipeline_preserves_document_order(html in document()) {
        let doc = Pipeline::default().parse(&html).unwrap();
        let lifted: Vec<NodeId> = lift_elements(&doc.dom).iter().map(|e| e.node()).collect();

        let classified: Vec<NodeId> = doc.elements.iter().map(|e| e.node()).collect();

        prop_assert_eq!(classified, lifted);
    }

    #[test]
    fn prop_composite_step_is_idempotent(html in document()) {
        let dom = parse_html(&html);
        let once = CompositeElementCreator.process(&dom, lift_elements(&dom)).unwrap();
        let twice = CompositeElementCreator.process(&dom, once.clone()).unwrap();

        prop_assert_eq!(&twice, &once);
        for element in &once {
            if element.is(ElementKind::Composite) {
                prop_assert!(!element.inner_elements().is_empty());
            }
        }
    }

    #[test]
    fn prop_tree_pre_order_matches_elements(html in document()) {
        let doc = Pipeline::default().parse(&html).unwrap();
        let mut expected = Vec::new();
        expanded(&doc.elements, &mut expected);

        let tree = doc.tree();
        let visited: Vec<NodeId> = tree.iter().map(|n| n.element().node()).collect();

        prop_assert_eq!(visited, expected);
    }

    #[test]
    fn prop_render_hides_ignored_subtrees(html in document()) {
        let doc = Pipeline::default().parse(&html).unwrap();
        let tree = doc.tree();

        let ignored = KindSet::of(&[ElementKind::Irrelevant, ElementKind::Empty]);
        let rendered = tree.render(&plain().ignored_types(ignored));

        prop_assert_eq!(line_count(&rendered), visible(tree.roots(), ignored));
        prop_assert!(!rendered.contains("IrrelevantElement"));
        prop_assert!(!rendered.contains("EmptyElement"));
        prop_assert!(!rendered.ends_with('\n'));
    }
}
