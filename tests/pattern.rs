//! Table-driven tests for the per-syntax access patterns. The vectors pin the
//! exact rename behavior, including quote handling and bracket fallbacks.
mod common;
use kirinuki::prelude::*;

#[test]
fn test_apply_access_patterns_vectors() {
    let cases: &[(&str, &str, &str, &str)] = &[
        (
            r#"$node["oldName"].data"#,
            "oldName",
            "newName",
            r#"$node["newName"].data"#,
        ),
        // dot access falls back to bracket form for a banned new name
        (
            "$node.oldName.data",
            "oldName",
            "new.Name",
            r#"$node["new.Name"].data"#,
        ),
        // other node names stay untouched
        (
            r#"$node["someOtherName"].data"#,
            "oldName",
            "newName",
            r#"$node["someOtherName"].data"#,
        ),
        (
            r#"$node["oldName"].data + $node["oldName"].info"#,
            "oldName",
            "newName",
            r#"$node["newName"].data + $node["newName"].info"#,
        ),
        (
            r#"$items("oldName", 0)"#,
            "oldName",
            "newName",
            r#"$items("newName", 0)"#,
        ),
        (
            "$items('oldName', 0)",
            "oldName",
            "newName",
            "$items('newName', 0)",
        ),
        ("$('oldName')", "oldName", "newName", "$('newName')"),
        (r#"$("oldName")"#, "oldName", "newName", r#"$("newName")"#),
        (
            r#"$node["oldName"].data + $items("oldName", 0) + $("oldName")"#,
            "oldName",
            "newName",
            r#"$node["newName"].data + $items("newName", 0) + $("newName")"#,
        ),
        (
            r#"$node["oldName"].data + $items("oldName", 0)"#,
            "oldName",
            "new-Name",
            r#"$node["new-Name"].data + $items("new-Name", 0)"#,
        ),
        (
            r#"$node["old-Name"].data + $items("old-Name", 0)"#,
            "old-Name",
            "newName",
            r#"$node["newName"].data + $items("newName", 0)"#,
        ),
        // a bare call is not a reference
        (
            r#"someRandomExpression("oldName")"#,
            "oldName",
            "newName",
            r#"someRandomExpression("oldName")"#,
        ),
        // names may carry backslash-escaped quotes
        (
            r#"$("old\"Name")"#,
            r#"old\"Name"#,
            r#"n\'ew\"Name"#,
            r#"$("n\'ew\"Name")"#,
        ),
    ];

    for (expression, previous_name, new_name, expected) in cases {
        let result = apply_access_patterns(expression, previous_name, new_name);
        assert_eq!(
            &result, expected,
            "expression {expression:?} with previous name {previous_name:?} and new name {new_name:?}"
        );
    }
}

#[test]
fn test_apply_access_patterns_keeps_dot_form_for_safe_names() {
    assert_eq!(
        apply_access_patterns("$node.oldName.data", "oldName", "newName"),
        "$node.newName.data"
    );
    // the name boundary must not match a longer identifier
    assert_eq!(
        apply_access_patterns("$node.oldNameLonger.data", "oldName", "newName"),
        "$node.oldNameLonger.data"
    );
    assert_eq!(
        apply_access_patterns("$node.oldName", "oldName", "newName"),
        "$node.newName"
    );
}

#[test]
fn test_apply_access_patterns_with_dollar_in_new_name() {
    // a `$` in the replacement name must survive substitution untouched
    assert_eq!(
        apply_access_patterns(r#"$("oldName").item"#, "oldName", "pri$ce"),
        r#"$("pri$ce").item"#
    );
}
