//! Integration tests for primitive, array and object validators.

use serde_json::json;
use shapecheck::{boxed, DocPath, ErrorCode, Type, TypeTag, Validator, Value};

#[test]
fn test_array_reports_element_path() {
    let value = Value::from(json!(["a", 1, "c"]));
    let result = Type::array(Type::string()).validate(&value, &DocPath::root("list"));

    assert!(!result.valid);
    assert!(result.type_match);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path.to_string(), "list[1]");
    assert_eq!(result.type_name, "string[]");
}

#[test]
fn test_array_errors_in_index_order() {
    let value = Value::from(json!([1, "ok", true, null]));
    let result = Type::array(Type::string()).validate(&value, &DocPath::root("xs"));

    let paths: Vec<_> = result.errors.iter().map(|e| e.path.to_string()).collect();
    assert_eq!(paths, vec!["xs[0]", "xs[2]", "xs[3]"]);
}

#[test]
fn test_empty_array_type_name() {
    let schema = Type::array(Type::union(vec![
        boxed(Type::string()),
        boxed(Type::function()),
    ]));
    let result = schema.validate(&Value::Array(Vec::new()), &DocPath::root("xs"));

    assert!(result.valid);
    assert_eq!(result.type_name, "(string | function)[]");
}

#[test]
fn test_array_of_objects_nests_paths() {
    let schema = Type::array(Type::schema_builder().field("name", Type::required(Type::string())));
    let value = Value::from(json!([{"name": "a"}, {"name": "b"}, {}]));

    let result = schema.validate(&value, &DocPath::root("config").field("components"));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path.to_string(), "config.components[2].name");
    assert_eq!(result.errors[0].code, ErrorCode::Required);
}

#[test]
fn test_schema_extra_field_rejection() {
    let fields = || vec![("name", boxed(Type::required(Type::string())))];
    let value = Value::from(json!({"name": "x", "extra": 1}));
    let path = DocPath::root("doc");

    let strict = Type::schema(fields(), false).validate(&value, &path);
    assert!(!strict.valid);
    assert_eq!(strict.errors.len(), 1);
    assert_eq!(strict.errors[0].path.to_string(), "doc.extra");
    assert_eq!(strict.errors[0].expected.as_deref(), Some("never"));
    assert_eq!(strict.errors[0].code, ErrorCode::UnexpectedField);

    assert!(Type::schema(fields(), true).validate(&value, &path).valid);
}

#[test]
fn test_schema_rejects_arrays_and_null() {
    let schema = Type::schema_builder();
    for value in [Value::Null, Value::Array(Vec::new())] {
        let result = schema.validate(&value, &DocPath::root("doc"));
        assert!(!result.valid);
        assert!(!result.type_match);
    }
}

#[test]
fn test_primitive_messages() {
    let result = Type::string().validate(&Value::from(5_i64), &DocPath::root("config").field("name"));
    assert_eq!(
        result.report(),
        " - config.name should be a \"string\", but \"number\" was given"
    );
}

#[test]
fn test_null_and_undefined_are_distinct() {
    let path = DocPath::root("v");
    assert!(Type::null().validate(&Value::Null, &path).valid);
    assert!(!Type::null().validate(&Value::Undefined, &path).valid);
    assert!(Type::undefined().validate(&Value::Undefined, &path).valid);
    assert!(!Type::undefined().validate(&Value::Null, &path).valid);
    assert!(!Type::object().validate(&Value::Null, &path).valid);
    assert_eq!(Value::Null.tag(), TypeTag::Null);
}

#[test]
fn test_report_joins_every_error() {
    let schema = Type::schema_builder()
        .field("name", Type::required(Type::string()))
        .field("version", Type::required(Type::string()));
    let result = schema.validate(&Value::from(json!({})), &DocPath::root("config"));

    assert_eq!(
        result.report(),
        " - config.name is required, but \"undefined\" was given\n - config.version is required, but \"undefined\" was given"
    );
}
