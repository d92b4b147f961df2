use sqlfixture::{Criteria, Criterion, Dialect, Operator, SqlValue};

fn compile(criteria: &Criteria) -> sqlfixture::CompiledWhere {
    criteria.compile(&Dialect::default())
}

#[test]
fn quote_handles_dotted_names() {
    let d = Dialect::default();
    assert_eq!(d.quote("users"), "\"users\"");
    assert_eq!(d.quote("a.b"), "\"a\".\"b\"");
    assert_eq!(d.quote("main.users.id"), "\"main\".\"users\".\"id\"");
}

#[test]
fn empty_criteria_compile_to_nothing() {
    let w = compile(&Criteria::new());
    assert_eq!(w.text, "");
    assert!(w.params.is_empty());
}

#[test]
fn worked_example_from_the_fixture_convention() {
    let mut c = Criteria::new();
    c.push("age >", 5);
    c.push("name", "x");
    c.push("deleted", SqlValue::Null);

    let w = compile(&c);
    assert_eq!(
        w.text,
        "WHERE \"age\" > ? AND \"name\" = ? AND \"deleted\" IS NULL "
    );
    assert_eq!(w.params, vec![SqlValue::Int(5), SqlValue::Text("x".into())]);
}

#[test]
fn placeholder_count_matches_non_null_params() {
    let mut c = Criteria::new();
    c.push("a", 1);
    c.push("b <=", 2);
    c.push("c", SqlValue::Null);
    c.push("d !=", "x");
    c.push("e !=", SqlValue::Null);

    let w = compile(&c);
    let placeholders = w.text.matches('?').count();
    assert_eq!(placeholders, w.params.len());
    assert_eq!(w.params.len(), 3);
}

#[test]
fn null_value_renders_is_null_without_params() {
    let mut c = Criteria::new();
    c.push("deleted", SqlValue::Null);
    let w = compile(&c);
    assert_eq!(w.text, "WHERE \"deleted\" IS NULL ");
    assert!(w.params.is_empty());
}

#[test]
fn null_value_with_negation_renders_is_not_null() {
    let mut c = Criteria::new();
    c.push("deleted !=", SqlValue::Null);
    let w = compile(&c);
    assert_eq!(w.text, "WHERE \"deleted\" IS NOT NULL ");
    assert!(w.params.is_empty());
}

#[test]
fn leading_negation_on_null_is_taken_literally() {
    // A key beginning with != has no preceding column name, so it is not
    // treated as a negated null check.
    let mut c = Criteria::new();
    c.push("!=deleted", SqlValue::Null);
    let w = compile(&c);
    assert_eq!(w.text, "WHERE \"!=deleted\" IS NULL ");
    assert!(w.params.is_empty());
}

#[test]
fn operator_substring_without_space_is_not_an_operator() {
    let mut c = Criteria::new();
    c.push("range", 7);
    let w = compile(&c);
    assert_eq!(w.text, "WHERE \"range\" = ? ");
    assert_eq!(w.params, vec![SqlValue::Int(7)]);
}

#[test]
fn like_matches_case_insensitively() {
    let mut c = Criteria::new();
    c.push("name LIKE", "foo%");
    let w = compile(&c);
    assert_eq!(w.text, "WHERE \"name\" LIKE ? ");
    assert_eq!(w.params, vec![SqlValue::Text("foo%".into())]);
}

#[test]
fn all_suffix_operators_render() {
    for (key, rendered) in [
        ("a !=", "\"a\" != ? "),
        ("a <=", "\"a\" <= ? "),
        ("a >=", "\"a\" >= ? "),
        ("a <", "\"a\" < ? "),
        ("a >", "\"a\" > ? "),
        ("a like", "\"a\" LIKE ? "),
    ] {
        let mut c = Criteria::new();
        c.push(key, 1);
        let w = compile(&c);
        assert_eq!(w.text, format!("WHERE {rendered}"), "key {key:?}");
        assert_eq!(w.params.len(), 1);
    }
}

#[test]
fn criterion_parse_strips_exactly_the_operator_token() {
    let c = Criterion::parse("age >", SqlValue::Int(5));
    assert_eq!(c.field, "age");
    assert_eq!(c.op, Operator::Gt);

    let c = Criterion::parse("name", SqlValue::Text("x".into()));
    assert_eq!(c.field, "name");
    assert_eq!(c.op, Operator::Eq);
}

#[test]
fn compiling_twice_is_deterministic() {
    let mut c = Criteria::new();
    c.push("age >", 5);
    c.push("name", "x");
    c.push("deleted", SqlValue::Null);

    let first = compile(&c);
    let second = compile(&c);
    assert_eq!(first, second);
}

#[test]
fn criteria_collects_from_pairs() {
    let c: Criteria = [("a", 1), ("b <", 2)].into_iter().collect();
    let w = compile(&c);
    assert_eq!(w.text, "WHERE \"a\" = ? AND \"b\" < ? ");
    assert_eq!(w.params, vec![SqlValue::Int(1), SqlValue::Int(2)]);
}
