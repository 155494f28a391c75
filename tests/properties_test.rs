//! Property tests for validator behavior over arbitrary documents.

use proptest::prelude::*;
use shapecheck::{boxed, DocPath, Function, Type, TypeTag, Validator, Value};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e6..1.0e6f64).prop_map(Value::Number),
        "[a-zA-Z]{0,8}".prop_map(Value::String),
        Just(Value::Function(Function::new(()))),
    ]
}

fn document() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-c]", inner), 0..4).prop_map(|entries| Value::object(entries)),
        ]
    })
}

fn all_tags() -> [TypeTag; 7] {
    [
        TypeTag::String,
        TypeTag::Number,
        TypeTag::Boolean,
        TypeTag::Object,
        TypeTag::Function,
        TypeTag::Null,
        TypeTag::Undefined,
    ]
}

proptest! {
    #[test]
    fn prop_primitive_accepts_exactly_its_tag(value in document()) {
        for tag in all_tags() {
            let result = shapecheck::PrimitiveSchema::new(tag).validate(&value, &DocPath::root("v"));
            prop_assert_eq!(result.valid, value.tag() == tag);
            prop_assert_eq!(result.errors.is_empty(), result.valid);
        }
    }

    #[test]
    fn prop_validation_is_idempotent(value in document()) {
        let schema = Type::union(vec![
            boxed(Type::array(Type::optional(Type::string()))),
            boxed(
                Type::schema_builder()
                    .field("a", Type::required(Type::number()))
                    .field("b", Type::optional(Type::union(vec![
                        boxed(Type::boolean()),
                        boxed(Type::function()),
                    ]))),
            ),
        ]);
        let path = DocPath::root("doc");

        let first = schema.validate(&value, &path);
        let second = schema.validate(&value, &path);

        prop_assert_eq!(first.valid, second.valid);
        prop_assert_eq!(first.type_match, second.type_match);
        prop_assert_eq!(&first.type_name, &second.type_name);
        prop_assert_eq!(&first.errors, &second.errors);
    }

    #[test]
    fn prop_valid_implies_no_errors_and_type_match(value in document()) {
        let schema = Type::optional(Type::array(Type::union(vec![
            boxed(Type::string()),
            boxed(Type::object()),
        ])));
        let result = schema.validate(&value, &DocPath::root("doc"));

        prop_assert_eq!(result.valid, result.errors.is_empty());
        if result.valid {
            prop_assert!(result.type_match);
        }
    }

    #[test]
    fn prop_array_errors_stay_under_array_path(values in prop::collection::vec(document(), 0..6)) {
        let path = DocPath::root("list");
        let result = Type::array(Type::string()).validate(&Value::Array(values), &path);

        for error in &result.errors {
            prop_assert!(error.path.to_string().starts_with("list["));
        }
    }
}
