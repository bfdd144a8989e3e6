//! Tests for the reference extraction pipeline: scanning, variable naming,
//! collision escalation and in-place rewriting.
mod common;
use common::*;
use kirinuki::prelude::*;
use serde_json::json;

#[test]
fn test_extracts_used_expressions() {
    let nodes = vec![
        make_node("B", &[r#"$("A").item.json.myField"#]),
        make_node("C", &[r#"$("A").first().json.myField.anotherField"#]),
    ];
    let result =
        extract_references_in_node_expressions(nodes, names(&["A", "B", "C"]), "Start").unwrap();

    assert_eq!(
        variable_pairs(&result),
        vec![
            ("myField", r#"$("A").item.json.myField"#),
            (
                "myField_anotherField_first",
                r#"$("A").first().json.myField.anotherField"#
            ),
        ]
    );
    assert_eq!(
        parameter(&result.nodes[0], "p0"),
        "={{ $('Start').item.json.myField }}"
    );
    assert_eq!(
        parameter(&result.nodes[1], "p0"),
        "={{ $('Start').first().json.myField_anotherField_first }}"
    );
}

#[test]
fn test_handles_simple_name_clashes() {
    let nodes = vec![
        make_node("B", &[r#"$("A").item.json.myField"#]),
        make_node("C", &[r#"$("D").item.json.myField"#]),
        make_node("E", &[r#"$("F").item.json.myField"#]),
    ];
    let result =
        extract_references_in_node_expressions(nodes, names(&["A", "B", "C", "D", "E", "F"]), "Start")
            .unwrap();

    assert_eq!(
        variable_pairs(&result),
        vec![
            ("myField", r#"$("A").item.json.myField"#),
            ("D_myField", r#"$("D").item.json.myField"#),
            ("F_myField", r#"$("F").item.json.myField"#),
        ]
    );
    assert_eq!(
        parameter(&result.nodes[0], "p0"),
        "={{ $('Start').item.json.myField }}"
    );
    assert_eq!(
        parameter(&result.nodes[1], "p0"),
        "={{ $('Start').item.json.D_myField }}"
    );
    assert_eq!(
        parameter(&result.nodes[2], "p0"),
        "={{ $('Start').item.json.F_myField }}"
    );
}

#[test]
fn test_handles_complex_name_clashes() {
    let nodes = vec![
        make_node("F", &[r#"$("A").item.json.myField"#]),
        make_node("B", &[r#"$("A").item.json.Node_Name_With_Gap_myField"#]),
        make_node("C", &[r#"$("D").item.json.Node_Name_With_Gap_myField"#]),
        make_node("E", &[r#"$("Node_Name_With_Gap").item.json.myField"#]),
    ];
    let universe = names(&["A", "B", "C", "D", "E", "F", "Node_Name_With_Gap"]);
    let result = extract_references_in_node_expressions(nodes, universe, "Start").unwrap();

    // The variable from node 'E' references Node_Name_With_Gap.myField: its
    // bare key clashes with A.myField, the node-prefixed form clashes with
    // A.Node_Name_With_Gap_myField, so it escalates to a numeric suffix.
    assert_eq!(
        variable_pairs(&result),
        vec![
            ("myField", r#"$("A").item.json.myField"#),
            (
                "Node_Name_With_Gap_myField",
                r#"$("A").item.json.Node_Name_With_Gap_myField"#
            ),
            (
                "D_Node_Name_With_Gap_myField",
                r#"$("D").item.json.Node_Name_With_Gap_myField"#
            ),
            (
                "Node_Name_With_Gap_myField_1",
                r#"$("Node_Name_With_Gap").item.json.myField"#
            ),
        ]
    );
    assert_eq!(
        parameter(&result.nodes[0], "p0"),
        "={{ $('Start').item.json.myField }}"
    );
    assert_eq!(
        parameter(&result.nodes[1], "p0"),
        "={{ $('Start').item.json.Node_Name_With_Gap_myField }}"
    );
    assert_eq!(
        parameter(&result.nodes[2], "p0"),
        "={{ $('Start').item.json.D_Node_Name_With_Gap_myField }}"
    );
    assert_eq!(
        parameter(&result.nodes[3], "p0"),
        "={{ $('Start').item.json.Node_Name_With_Gap_myField_1 }}"
    );
}

#[test]
fn test_handles_code_parameter_without_template_marker() {
    let mut node = WorkflowNode::new("Code");
    node.parameters.insert(
        "jsCode".to_string(),
        json!(
            "for (const item of $input.all()) {\n  item.json.myNewField = $('DebugHelper').first().json.uid;\n}\n\nreturn $input.all();"
        ),
    );
    node.extra
        .insert("type".to_string(), json!("workflow-nodes.code"));
    node.extra.insert("typeVersion".to_string(), json!(2));
    node.extra.insert("position".to_string(), json!([660, 0]));
    node.extra.insert(
        "id".to_string(),
        json!("c9de02d0-982a-4f8c-9af7-93f63795aa9b"),
    );

    let result = extract_references_in_node_expressions(
        vec![node],
        names(&["DebugHelper", "Code"]),
        "Start",
    )
    .unwrap();

    assert_eq!(
        variable_pairs(&result),
        vec![("uid_first", "$('DebugHelper').first().json.uid")]
    );
    assert_eq!(
        parameter(&result.nodes[0], "jsCode"),
        "for (const item of $input.all()) {\n  item.json.myNewField = $('Start').first().json.uid_first;\n}\n\nreturn $input.all();"
    );
    // untouched fields round-trip
    assert_eq!(result.nodes[0].extra["type"], json!("workflow-nodes.code"));
    assert_eq!(result.nodes[0].extra["typeVersion"], json!(2));
    assert_eq!(result.nodes[0].extra["position"], json!([660, 0]));
    assert_eq!(
        result.nodes[0].extra["id"],
        json!("c9de02d0-982a-4f8c-9af7-93f63795aa9b")
    );
}

#[test]
fn test_does_not_extract_reference_to_node_in_subgraph() {
    let nodes = vec![
        make_node("B", &[r#"$("A").item.json.myField"#]),
        make_node("C", &[r#"$("B").first().json.myField.anotherField"#]),
    ];
    let result =
        extract_references_in_node_expressions(nodes, names(&["A", "B", "C"]), "Start").unwrap();

    assert_eq!(
        variable_pairs(&result),
        vec![("myField", r#"$("A").item.json.myField"#)]
    );
    assert_eq!(
        parameter(&result.nodes[0], "p0"),
        "={{ $('Start').item.json.myField }}"
    );
    // internal reference stays byte-identical, original quotes included
    assert_eq!(
        parameter(&result.nodes[1], "p0"),
        r#"={{ $("B").first().json.myField.anotherField }}"#
    );
}

#[test]
fn test_fails_if_node_name_clashes_with_start_name() {
    let nodes = vec![make_node("Start", &[r#"$("A").item.json.myField"#])];
    let err = extract_references_in_node_expressions(nodes, names(&["A", "Start"]), "Start")
        .unwrap_err();
    assert_eq!(
        err,
        ExtractionError::StartNameConflict {
            start_node_name: "Start".to_string()
        }
    );
}

#[test]
fn test_supports_custom_start_node_name() {
    let nodes = vec![make_node("Start", &[r#"$("A").item.json.myField"#])];
    let result = extract_references_in_node_expressions(
        nodes,
        names(&["A", "Start"]),
        "A different start name",
    )
    .unwrap();

    assert_eq!(
        variable_pairs(&result),
        vec![("myField", r#"$("A").item.json.myField"#)]
    );
    assert_eq!(
        parameter(&result.nodes[0], "p0"),
        "={{ $('A different start name').item.json.myField }}"
    );
}

#[test]
fn test_fails_if_subgraph_node_is_missing_from_name_list() {
    let nodes = vec![make_node("B", &[r#"$("A").item.json.myField"#])];
    let err = extract_references_in_node_expressions(nodes, names(&["A"]), "Start").unwrap_err();
    assert_eq!(
        err,
        ExtractionError::NodeNotInWorkflow {
            node_name: "B".to_string()
        }
    );
}

#[test]
fn test_fails_on_reference_to_unknown_node() {
    let nodes = vec![make_node("B", &[r#"$("Ghost").item.json.myField"#])];
    let err =
        extract_references_in_node_expressions(nodes, names(&["A", "B"]), "Start").unwrap_err();
    assert_eq!(
        err,
        ExtractionError::UnknownNodeReference {
            node_name: "B".to_string(),
            parameter: "p0".to_string(),
            referenced_name: "Ghost".to_string(),
        }
    );
}

#[test]
fn test_handles_item_matching() {
    let nodes = vec![make_node(
        "B",
        &[
            r#"$("A").itemMatching(0).json.myField"#,
            r#"$("A").itemMatching(1).json.myField"#,
            r#"$("C").itemMatching(1).json.myField"#,
            r#"$("A").itemMatching(20).json.myField"#,
        ],
    )];
    let result =
        extract_references_in_node_expressions(nodes, names(&["A", "B", "C"]), "Start").unwrap();

    assert_eq!(
        variable_pairs(&result),
        vec![
            ("myField_itemMatching_0", r#"$("A").itemMatching(0).json.myField"#),
            ("myField_itemMatching_1", r#"$("A").itemMatching(1).json.myField"#),
            (
                "C_myField_itemMatching_1",
                r#"$("C").itemMatching(1).json.myField"#
            ),
            (
                "myField_itemMatching_20",
                r#"$("A").itemMatching(20).json.myField"#
            ),
        ]
    );
    assert_eq!(
        parameter(&result.nodes[0], "p0"),
        "={{ $('Start').itemMatching(0).json.myField_itemMatching_0 }}"
    );
    assert_eq!(
        parameter(&result.nodes[0], "p1"),
        "={{ $('Start').itemMatching(1).json.myField_itemMatching_1 }}"
    );
    assert_eq!(
        parameter(&result.nodes[0], "p2"),
        "={{ $('Start').itemMatching(1).json.C_myField_itemMatching_1 }}"
    );
    assert_eq!(
        parameter(&result.nodes[0], "p3"),
        "={{ $('Start').itemMatching(20).json.myField_itemMatching_20 }}"
    );
}

#[test]
fn test_does_not_fail_on_complex_item_matching_arguments() {
    let nodes = vec![make_node(
        "B",
        &[
            r#"$("A").itemMatching(Math.PI).json.myField"#,
            r#"$("A").itemMatching(eval("const fib = (n) => n < 2 ? 1 : (fib(n - 1) + fib(n-2)); fib(15)")).json.anotherField"#,
            r#"$("A").itemMatching($("A").itemMatch(1).json.myField).json.myField"#,
        ],
    )];
    let result = extract_references_in_node_expressions(nodes, names(&["A", "B"]), "Start");
    assert!(result.is_ok());
}

#[test]
fn test_handles_multiple_expressions() {
    let nodes = vec![
        make_node(
            "B",
            &[r#"$("A").item.json.myField"#, r#"$("C").item.json.anotherField"#],
        ),
        make_node(
            "D",
            &[r#"$("A").item.json.myField"#, r#"$("B").item.json.someField"#],
        ),
    ];
    let result =
        extract_references_in_node_expressions(nodes, names(&["A", "B", "C", "D"]), "Start")
            .unwrap();

    // the repeated A.myField signature reuses its name instead of duplicating
    assert_eq!(
        variable_pairs(&result),
        vec![
            ("myField", r#"$("A").item.json.myField"#),
            ("anotherField", r#"$("C").item.json.anotherField"#),
        ]
    );
    assert_eq!(
        parameter(&result.nodes[0], "p0"),
        "={{ $('Start').item.json.myField }}"
    );
    assert_eq!(
        parameter(&result.nodes[0], "p1"),
        "={{ $('Start').item.json.anotherField }}"
    );
    assert_eq!(
        parameter(&result.nodes[1], "p0"),
        "={{ $('Start').item.json.myField }}"
    );
    assert_eq!(
        parameter(&result.nodes[1], "p1"),
        r#"={{ $("B").item.json.someField }}"#
    );
}

#[test]
fn test_handles_plain_js_calls_on_the_data_accessor() {
    let nodes = vec![make_node(
        "A",
        &[r#"$("B B").first().toJsonObject().randomJSFunction()"#],
    )];
    let result =
        extract_references_in_node_expressions(nodes, names(&["A", "B B"]), "Start").unwrap();

    // the recorded text stops after the accessor; the call chain keeps
    // operating on the synthesized field
    assert_eq!(
        variable_pairs(&result),
        vec![("B_B_first", r#"$("B B").first()"#)]
    );
    assert_eq!(
        parameter(&result.nodes[0], "p0"),
        "={{ $('Start').first().json.B_B_first.toJsonObject().randomJSFunction() }}"
    );
}

#[test]
fn test_handles_spaces_and_special_characters_in_node_names() {
    let weird_name = r#"A \" |[w.e,i,r$d]| `' Ñode  \$\( Name \)"#;
    let nodes = vec![
        make_node("a_=-9-0!@#!%^$%&*(", &[r#"$("A").item.json.myField"#]),
        make_node(
            "A node with spaces",
            &[r#"$("A \" |[w.e,i,r$d]| `' Ñode  \$\( Name \)").item.json.myField"#],
        ),
    ];
    let universe = names(&[
        "A",
        "A node with spaces",
        weird_name,
        "a_=-9-0!@#!%^$%&*(",
    ]);
    let result = extract_references_in_node_expressions(nodes, universe, "Start").unwrap();

    assert_eq!(
        variable_pairs(&result),
        vec![
            ("myField", r#"$("A").item.json.myField"#),
            (
                "A__weir$d__ode__$_Name__myField",
                r#"$("A \" |[w.e,i,r$d]| `' Ñode  \$\( Name \)").item.json.myField"#
            ),
        ]
    );
    assert_eq!(
        parameter(&result.nodes[0], "p0"),
        "={{ $('Start').item.json.myField }}"
    );
    assert_eq!(
        parameter(&result.nodes[1], "p0"),
        "={{ $('Start').item.json.A__weir$d__ode__$_Name__myField }}"
    );
}

#[test]
fn test_rewrites_legacy_reference_syntaxes() {
    let nodes = vec![make_node(
        "B",
        &[r#"$node["A"].json.myField"#, "$node.A.json.other"],
    )];
    let result =
        extract_references_in_node_expressions(nodes, names(&["A", "B"]), "Start").unwrap();

    // legacy heads carry an implicit `.item`, rendered explicitly on output
    assert_eq!(
        variable_pairs(&result),
        vec![
            ("myField", r#"$node["A"].json.myField"#),
            ("other", "$node.A.json.other"),
        ]
    );
    assert_eq!(
        parameter(&result.nodes[0], "p0"),
        "={{ $('Start').item.json.myField }}"
    );
    assert_eq!(
        parameter(&result.nodes[0], "p1"),
        "={{ $('Start').item.json.other }}"
    );
}
