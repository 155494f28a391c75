//! End-to-end tests for provider-definition validation and resolution.

use serde_json::json;
use shapecheck::provider::{
    comp, component_strategy, provider_definition_schema, Calc, ComponentProps,
    ComponentProvider, DefinitionError, Generators, ProviderDefinition, DEFINITION_ROOT,
};
use shapecheck::{DocPath, ErrorCode, Function, Validator, Value};

fn populated() -> serde_json::Value {
    json!({
        "name": "blast-kit",
        "description": "BlastDOM component kit",
        "version": "2.1.0",
        "author": "FramJet",
        "url": "https://example.com/blast-kit",
        "source": "@framjet/blast-kit",
        "options": {
            "fileExtension": "tsx",
            "componentsFolder": "widgets",
            "srcFolder": "lib",
            "importsPrefix": "@framjet/blast-kit/",
            "componentNamePrefix": "blast.",
            "indexFilename": "main",
            "definitionFilename": "kit",
            "definitionName": "KitDefinition"
        },
        "components": [
            "Button",
            {"name": "DatePicker", "importPath": "@framjet/blast-kit/date", "useLazyLoad": false},
            "Tooltip"
        ]
    })
}

fn validate(doc: &Value) -> shapecheck::ValidationResult {
    provider_definition_schema().validate(doc, &DocPath::root(DEFINITION_ROOT))
}

#[test]
fn test_missing_imports_prefix_is_the_only_error() {
    let mut raw = populated();
    raw["options"]
        .as_object_mut()
        .unwrap()
        .remove("importsPrefix");

    let result = validate(&Value::from(raw));

    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    let error = &result.errors[0];
    assert_eq!(error.path.to_string(), "config.options.importsPrefix");
    assert_eq!(error.code, ErrorCode::Required);
    assert!(error.message.contains("is required"));
}

#[test]
fn test_populated_document_is_valid() {
    let result = validate(&Value::from(populated()));
    assert!(result.valid, "{}", result.report());
    assert!(result.errors.is_empty());
}

#[test]
fn test_component_errors_point_into_the_array() {
    let mut raw = populated();
    raw["components"] = json!(["Button", {"name": "Dialog", "useLazyLoad": "yes"}, 7, {"title": "x"}]);

    let result = validate(&Value::from(raw));
    let errors: Vec<_> = result
        .errors
        .iter()
        .map(|e| (e.path.to_string(), e.code))
        .collect();

    assert_eq!(
        errors,
        vec![
            ("config.components[1].useLazyLoad".to_string(), ErrorCode::InvalidType),
            ("config.components[2]".to_string(), ErrorCode::NoUnionMatch),
            ("config.components[3].name".to_string(), ErrorCode::Required),
            ("config.components[3].title".to_string(), ErrorCode::UnexpectedField),
        ]
    );
}

#[test]
fn test_unknown_top_level_field_is_rejected() {
    let mut raw = populated();
    raw["homepage"] = json!("https://example.com");

    let result = validate(&Value::from(raw));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path.to_string(), "config.homepage");
    assert_eq!(result.errors[0].expected.as_deref(), Some("never"));
}

#[test]
fn test_resolves_options_and_components() {
    let definition = ProviderDefinition::from_value(&Value::from(populated())).unwrap();
    let resolved = definition.resolve().unwrap();

    assert_eq!(resolved.options.file_extension, "tsx");
    assert_eq!(resolved.options.java_namespace, "org.framjet.blastdom.provider");

    let generators = &resolved.generators;
    let (options, provider) = (&resolved.options, &resolved.definition);
    let picker = &resolved.components[1];

    assert_eq!(generators.component_name(picker, options, provider), "blast.date.picker");
    assert_eq!(generators.component_file_name(picker, options, provider), "DatePicker.tsx");
    assert_eq!(
        generators.component_import_path(picker, options, provider),
        "@framjet/blast-kit/date"
    );
    assert_eq!(generators.java_provider_name(options, provider), "BlastKitProvider");
    assert!(!picker.use_lazy_load);
    assert!(resolved.components[2].use_lazy_load);
}

#[test]
fn test_programmatic_components_and_generators() {
    let mut props = ComponentProps::new("Chart");
    props.file_name = Some(Calc::computed(|_, ctx| format!("chart.{}", ctx.options.file_extension)));

    let import_name = component_strategy(|c, _, _| format!("{}Widget", c.name));

    let mut raw = Value::from(populated());
    if let Value::Object(map) = &mut raw {
        map.insert(
            "generators".to_string(),
            Value::object([("componentImportName", Value::Function(Function::new(import_name)))]),
        );
        if let Some(Value::Array(items)) = map.get_mut("components") {
            items.push(Value::Function(Function::named("chart", comp(props))));
        }
    }

    assert!(validate(&raw).valid);

    let definition = ProviderDefinition::from_value(&raw).unwrap();
    assert!(matches!(
        definition.components.last(),
        Some(ComponentProvider::Provider(_))
    ));

    let resolved = definition.resolve().unwrap();
    let chart = resolved.components.last().unwrap();
    assert_eq!(chart.file_name.as_deref(), Some("chart.tsx"));
    assert_eq!(
        resolved
            .generators
            .component_import_name(chart, &resolved.options, &resolved.definition),
        "ChartWidget"
    );
}

#[test]
fn test_mistyped_generator_override() {
    let mut raw = Value::from(populated());
    if let Value::Object(map) = &mut raw {
        map.insert(
            "generators".to_string(),
            Value::object([("componentName", Value::Function(Function::new(42_u8)))]),
        );
    }

    let definition = ProviderDefinition::from_value(&raw).unwrap();
    match definition.resolve() {
        Err(DefinitionError::UnrecognizedGenerator { name, .. }) => {
            assert_eq!(name, "componentName")
        }
        other => panic!("expected generator error, got {:?}", other.map(|r| r.components)),
    }
}

#[test]
fn test_default_generators_match_empty_overrides() {
    let definition = ProviderDefinition::from_value(&Value::from(populated())).unwrap();
    let resolved = definition.clone().resolve().unwrap();
    let defaults = Generators::default();

    for component in &resolved.components {
        assert_eq!(
            defaults.component_file_path(
                &defaults.component_file_name(component, &resolved.options, &definition),
                component,
                &resolved.options,
                &definition
            ),
            format!("lib/widgets/{}.tsx", component.name)
        );
    }
}
