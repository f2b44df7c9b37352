use jdp_core::{equal, DiffOptions, Value};
use proptest::prop_assert;

#[test]
fn apply_patch_replaces_scalar() {
    let base = Value::from_json_str("1").unwrap();
    let target = Value::from_json_str("2").unwrap();
    let options = DiffOptions::default();
    let delta = jdp_core::diff(&base, &target, &options).unwrap().unwrap();
    let patched = jdp_core::patch(&base, &delta, &options).unwrap();
    assert_eq!(patched, target);
}

#[test]
fn apply_patch_handles_object_insertion() {
    let base = Value::from_json_str("{\"a\":1}").unwrap();
    let target = Value::from_json_str("{\"a\":1,\"b\":2}").unwrap();
    let options = DiffOptions::default();
    let delta = jdp_core::diff(&base, &target, &options).unwrap().unwrap();
    let patched = jdp_core::patch(&base, &delta, &options).unwrap();
    assert_eq!(patched, target);
}

#[test]
fn apply_patch_is_no_op_when_diff_is_no_change() {
    let base = Value::from_json_str(r#"{"a":[1,2,3]}"#).unwrap();
    let options = DiffOptions::default();
    assert!(jdp_core::diff(&base, &base, &options).unwrap().is_none());
}

fn arb_json_value() -> impl proptest::strategy::Strategy<Value = serde_json::Value> {
    use proptest::{collection::btree_map, collection::vec, prelude::*, string::string_regex};

    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::Bool),
        proptest::num::f64::ANY.prop_filter_map("finite", |f| {
            if f.is_finite() {
                serde_json::Number::from_f64(f).map(serde_json::Value::Number)
            } else {
                None
            }
        }),
        string_regex("[a-zA-Z0-9]{0,6}").unwrap().prop_map(serde_json::Value::String),
    ];

    leaf.prop_recursive(3, 6, 4, move |inner| {
        prop_oneof![
            vec(inner.clone(), 0..4).prop_map(serde_json::Value::Array),
            btree_map(string_regex("[a-zA-Z0-9]{1,6}").unwrap(), inner, 0..4).prop_map(|map| {
                let mut object = serde_json::Map::new();
                for (k, v) in map {
                    object.insert(k, v);
                }
                serde_json::Value::Object(object)
            }),
        ]
    })
}

proptest::proptest! {
    // P2 roundtrip, both directions.
    #[test]
    fn diff_and_patch_roundtrip(a_json in arb_json_value(), b_json in arb_json_value()) {
        let a = Value::from_json_value(a_json.clone());
        let b = Value::from_json_value(b_json.clone());
        let opts = DiffOptions::default();

        match jdp_core::diff(&a, &b, &opts).unwrap() {
            Some(delta) => {
                let patched = jdp_core::patch(&a, &delta, &opts).unwrap();
                prop_assert!(equal(&patched, &b, false));
            }
            None => prop_assert!(equal(&a, &b, true)),
        }

        match jdp_core::diff(&b, &a, &opts).unwrap() {
            Some(reverse) => {
                let restored = jdp_core::patch(&b, &reverse, &opts).unwrap();
                prop_assert!(equal(&restored, &a, false));
            }
            None => prop_assert!(equal(&b, &a, true)),
        }
    }
}
