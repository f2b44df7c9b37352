use jdp_core::{DiffOptions, Value};

#[test]
fn jdp_core_readme_example() -> Result<(), Box<dyn std::error::Error>> {
    let base = Value::from_json_str("[1,2,3]")?;
    let target = Value::from_json_str("[1,4,3]")?;

    let options = DiffOptions::default();
    let delta = jdp_core::diff(&base, &target, &options)?.expect("values differ");
    assert_eq!(delta, Value::from_json_str(r#"{"1":[4],"_1":[2,0,0],"_t":"a"}"#)?);

    let patched = jdp_core::patch(&base, &delta, &options)?;
    assert_eq!(patched, target);
    Ok(())
}
