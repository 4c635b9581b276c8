use crate::nodes::{BooleanOp, Modifier, PLAINTEXT_FIELD, QueryTree, span};
use crate::test_utils::MarkingEscaper;

fn render(tree: &QueryTree) -> String {
    tree.to_query_string(tree.root().unwrap(), &MarkingEscaper)
}

#[test]
fn field_with_name() {
    let mut tree = QueryTree::new();
    let root = tree.field("title", "cat", span(0, 9));
    tree.set_root(root);

    assert_eq!(render(&tree), "title:cat");
}

#[test]
fn field_on_default_field_has_no_prefix() {
    let mut tree = QueryTree::new();
    let root = tree.field(PLAINTEXT_FIELD, "cat", span(0, 3));
    tree.set_root(root);

    assert_eq!(render(&tree), "cat");
}

#[test]
fn quoted_field_wraps_phrase() {
    let mut tree = QueryTree::new();
    let root = tree.quoted_field("body", "life is great", span(0, 20));
    tree.set_root(root);

    assert_eq!(render(&tree), r#"body:"life is great""#);
}

#[test]
fn quoted_field_escapes_in_quoted_context() {
    let mut tree = QueryTree::new();
    let named = tree.quoted_field("body", r#"say "hi""#, span(0, 16));
    let plain = tree.quoted_field(PLAINTEXT_FIELD, r#"say "hi""#, span(17, 28));
    let root = tree.boolean(BooleanOp::Unspecified, vec![named, plain]);
    tree.set_root(root);

    assert_eq!(render(&tree), r#"body:"say \"hi\"" "say \"hi\"""#);
}

#[test]
fn boolean_root_is_bare() {
    let mut tree = QueryTree::new();
    let cat = tree.field("title", "cat", span(0, 9));
    let dog = tree.field("title", "dog", span(10, 19));
    let bird = tree.field("title", "bird", span(20, 30));
    let root = tree.boolean(BooleanOp::Unspecified, vec![cat, dog, bird]);
    tree.set_root(root);

    assert_eq!(render(&tree), "title:cat title:dog title:bird");
}

#[test]
fn nested_booleans_are_parenthesised() {
    let mut tree = QueryTree::new();
    let cat = tree.field("title", "cat", span(0, 9));
    let dog = tree.field("title", "dog", span(13, 22));
    let inner = tree.or(vec![cat, dog]);
    let bird = tree.field(PLAINTEXT_FIELD, "bird", span(28, 32));
    let root = tree.and(vec![inner, bird]);
    tree.set_root(root);

    assert_eq!(render(&tree), "( title:cat OR title:dog ) AND bird");
}

#[test]
fn group_child_boolean_is_not_double_wrapped() {
    let mut tree = QueryTree::new();
    let cat = tree.field("title", "cat", span(1, 10));
    let dog = tree.field("title", "dog", span(15, 24));
    let inner = tree.and(vec![cat, dog]);
    let root = tree.group(inner);
    tree.set_root(root);

    assert_eq!(render(&tree), "( title:cat AND title:dog )");
}

#[test]
fn modifiers_use_symbols_on_terms() {
    let mut tree = QueryTree::new();
    let cat = tree.field("title", "cat", span(1, 10));
    let dog = tree.field("title", "dog", span(12, 21));
    let bird = tree.field("title", "bird", span(22, 32));
    let required = tree.modifier(cat, Modifier::Required);
    let prohibited = tree.modifier(dog, Modifier::Prohibited);
    let none = tree.modifier(bird, Modifier::None);
    let root = tree.boolean(BooleanOp::Unspecified, vec![required, prohibited, none]);
    tree.set_root(root);

    assert_eq!(render(&tree), "+title:cat -title:dog title:bird");
}

#[test]
fn modifier_on_boolean_uses_keyword() {
    let mut tree = QueryTree::new();
    let cat = tree.field("title", "cat", span(5, 14));
    let dog = tree.field("title", "dog", span(18, 27));
    let inner = tree.or(vec![cat, dog]);
    let root = tree.modifier(inner, Modifier::Prohibited);
    tree.set_root(root);

    assert_eq!(render(&tree), "NOT ( title:cat OR title:dog )");
}

#[test]
fn nested_modifier_is_parenthesised() {
    let mut tree = QueryTree::new();
    let cat = tree.field("title", "cat", span(2, 11));
    let inner = tree.modifier(cat, Modifier::Prohibited);
    let root = tree.modifier(inner, Modifier::Required);
    tree.set_root(root);

    assert_eq!(render(&tree), "+(-title:cat)");
}

#[test]
fn boost_prints_integral_values_without_fraction() {
    let mut tree = QueryTree::new();
    let cat = tree.field("title", "cat", span(0, 9));
    let dog = tree.quoted_field("body", "hot dog", span(10, 24));
    let whole = tree.boost(cat, 2.0);
    let fraction = tree.boost(dog, 0.5);
    let root = tree.boolean(BooleanOp::Unspecified, vec![whole, fraction]);
    tree.set_root(root);

    assert_eq!(render(&tree), r#"title:cat^2 body:"hot dog"^0.5"#);
}

#[test]
fn boost_on_boolean_keeps_parentheses() {
    let mut tree = QueryTree::new();
    let cat = tree.field("title", "cat", span(1, 10));
    let dog = tree.field("title", "dog", span(11, 20));
    let inner = tree.boolean(BooleanOp::Unspecified, vec![cat, dog]);
    let root = tree.boost(inner, 3.0);
    tree.set_root(root);

    assert_eq!(render(&tree), "( title:cat title:dog )^3");
}

#[test]
fn empty_boolean_renders_nothing() {
    let mut tree = QueryTree::new();
    let root = tree.and(Vec::new());
    tree.set_root(root);

    assert_eq!(render(&tree), "");
}

#[test]
fn subtree_renders_as_its_own_root() {
    let mut tree = QueryTree::new();
    let cat = tree.field("title", "cat", span(1, 10));
    let dog = tree.field("title", "dog", span(15, 24));
    let inner = tree.and(vec![cat, dog]);
    let bird = tree.field("title", "bird", span(30, 40));
    let root = tree.or(vec![inner, bird]);
    tree.set_root(root);

    assert_eq!(
        tree.to_query_string(inner, &MarkingEscaper),
        "title:cat AND title:dog"
    );
}
