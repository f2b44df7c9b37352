//! Golden scenarios for the diff/patch engine: the wire shapes produced
//! for simple value changes, array insert/delete/fusion, and nested
//! objects, plus boundary behaviour around empty containers and deep
//! nesting.

use jdp_core::{DiffOptions, Value};

struct Case {
    name: &'static str,
    left: &'static str,
    right: &'static str,
    /// `None` means "no change".
    expected: Option<&'static str>,
}

const CASES: &[Case] = &[
    Case {
        name: "simple value change",
        left: r#"{"1":1}"#,
        right: r#"{"1":2}"#,
        expected: Some(r#"{"1":[1,2]}"#),
    },
    Case {
        name: "array element change",
        left: r#"{"1":[1,2,3]}"#,
        right: r#"{"1":[1,2,4]}"#,
        expected: Some(r#"{"1":{"2":[4],"_2":[3,0,0],"_t":"a"}}"#),
    },
    Case {
        name: "array element removal",
        left: r#"{"1":[1,2,3]}"#,
        right: r#"{"1":[2,3]}"#,
        expected: Some(r#"{"1":{"_0":[1,0,0],"_t":"a"}}"#),
    },
    Case {
        name: "array element type change",
        left: r#"{"1":[1]}"#,
        right: r#"{"1":[{"1":2}]}"#,
        expected: Some(r#"{"1":{"0":[{"1":2}],"_0":[1,0,0],"_t":"a"}}"#),
    },
    Case {
        name: "complex array with object change",
        left: r#"{"1":[1,{"1":1}]}"#,
        right: r#"{"1":[{"1":2}]}"#,
        expected: Some(r#"{"1":{"0":[{"1":2}],"_0":[1,0,0],"_1":[{"1":1},0,0],"_t":"a"}}"#),
    },
    Case {
        name: "nested object change",
        left: r#"{"a":{"x":1},"b":2}"#,
        right: r#"{"a":{"x":2},"b":2}"#,
        expected: Some(r#"{"a":{"x":[1,2]}}"#),
    },
    Case {
        name: "array-of-objects single change exercising fusion",
        left: r#"{"1":[{"1":1}]}"#,
        right: r#"{"1":[{"1":2}]}"#,
        expected: Some(r#"{"1":{"0":{"1":[1,2]},"_t":"a"}}"#),
    },
    Case { name: "empty object vs empty object", left: "{}", right: "{}", expected: None },
    Case { name: "empty array vs empty array", left: "[]", right: "[]", expected: None },
    Case {
        name: "key present in left only",
        left: r#"{"a":1}"#,
        right: "{}",
        expected: Some(r#"{"a":[1,0,0]}"#),
    },
];

#[test]
fn golden_scenarios_match_expected_wire_diffs() {
    for case in CASES {
        let left = Value::from_json_str(case.left).unwrap_or_else(|e| panic!("{}: {e}", case.name));
        let right =
            Value::from_json_str(case.right).unwrap_or_else(|e| panic!("{}: {e}", case.name));
        let actual = jdp_core::diff(&left, &right, &DiffOptions::default())
            .unwrap_or_else(|e| panic!("{}: {e}", case.name));

        match case.expected {
            Some(expected_text) => {
                let expected = Value::from_json_str(expected_text).unwrap();
                assert_eq!(actual, Some(expected), "case: {}", case.name);
            }
            None => assert_eq!(actual, None, "case: {}", case.name),
        }
    }
}

#[test]
fn move_operation_patch_scenario() {
    let original = Value::from_json_str(r#"["A","B","C"]"#).unwrap();
    let diff = Value::from_json_str(r#"{"_0":["",2,3],"_t":"a"}"#).unwrap();
    let patched = jdp_core::patch(&original, &diff, &DiffOptions::default()).unwrap();
    assert_eq!(patched, Value::from_json_str(r#"["B","C","A"]"#).unwrap());
}

#[test]
fn identical_deeply_nested_documents_produce_no_change() {
    let mut text = String::from("1");
    for _ in 0..20 {
        text = format!(r#"{{"nested":{text}}}"#);
    }
    let value = Value::from_json_str(&text).unwrap();
    assert!(jdp_core::diff(&value, &value, &DiffOptions::default()).unwrap().is_none());
}

#[test]
fn strings_with_null_bytes_and_utf8_round_trip_through_equal_and_diff() {
    let left = Value::String("a\u{0}b\u{e9}\tc".to_string());
    let right = Value::String("a\u{0}b\u{e9}\td".to_string());
    assert!(!jdp_core::equal(&left, &right, true));
    assert!(jdp_core::equal(&left, &left, true));

    let options = DiffOptions::default();
    let delta = jdp_core::diff(&left, &right, &options).unwrap().unwrap();
    let patched = jdp_core::patch(&left, &delta, &options).unwrap();
    assert_eq!(patched, right);

    let rendered = right.to_string();
    let reparsed = Value::from_json_str(&rendered).unwrap();
    assert_eq!(reparsed, right);
}

#[test]
fn recursion_bound_succeeds_just_under_the_limit_and_fails_just_over() {
    fn nested(depth: u32) -> Value {
        let mut json = String::from("1");
        for _ in 0..depth {
            json = format!(r#"{{"n":{json}}}"#);
        }
        Value::from_json_str(&json).unwrap()
    }

    let left = nested(3);
    let mut right_text = String::from("2");
    for _ in 0..3 {
        right_text = format!(r#"{{"n":{right_text}}}"#);
    }
    let right = Value::from_json_value(serde_json::from_str(&right_text).unwrap());

    let generous = DiffOptions::default().with_max_recursion_depth(10).unwrap();
    assert!(jdp_core::diff(&left, &right, &generous).unwrap().is_some());

    let strict = DiffOptions::default().with_max_recursion_depth(2).unwrap();
    let err = jdp_core::diff(&left, &right, &strict).unwrap_err();
    assert!(matches!(err, jdp_core::DiffError::RecursionExceeded { max_depth: 2 }));
}

#[test]
fn diff_from_text_rejects_oversized_input() {
    let options = DiffOptions::default().with_max_input_bytes(4).unwrap();
    let err = jdp_core::diff_from_text("123456", "1", &options).unwrap_err();
    assert!(matches!(err, jdp_core::DiffError::InputTooLarge { limit: 4, actual: 6 }));
}
