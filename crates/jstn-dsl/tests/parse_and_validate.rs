use jstn_core::{check, strictly_valid, valid, Mode, ValidationError};
use jstn_dsl::{parse, parse_builtin, pretty};

/// A survey form with optional rendering hints and a list of inputs.
const FORM_SCHEMA: &str = "
{
	renderingOptions: {
		orientation: string?
	}?
	inputs: [{
		inputId: string
		type: string
		value: number?
	}]
}
";

#[test]
fn closed_world_check() {
    let schema = parse("{foo: null; bar: number}").unwrap();
    let document = r#"{"foo":null,"bar":123,"baz":"x"}"#;
    assert!(valid(&schema, document));
    assert!(!strictly_valid(&schema, document));
}

#[test]
fn missing_required_property() {
    let schema = parse("{foo: null; bar: number}").unwrap();
    let document = r#"{"foo":null}"#;
    assert!(!valid(&schema, document));
    assert!(!strictly_valid(&schema, document));
}

#[test]
fn array_item_optionality_propagates() {
    let document = "[1,2,3,null]";
    assert!(valid(&parse("[number?]").unwrap(), document));
    assert!(!valid(&parse("[number]").unwrap(), document));
}

#[test]
fn declared_empty_array_admits_no_elements() {
    let schema = parse("[]").unwrap();
    assert!(valid(&schema, "[]"));
    assert!(!valid(&schema, "[1]"));
}

#[test]
fn any_escapes_only_in_lenient_mode() {
    let schema = parse("{baz: any}").unwrap();
    let document = r#"{"baz":{"x":[1,"y"]}}"#;
    assert!(valid(&schema, document));
    assert!(!strictly_valid(&schema, document));
    assert!(!strictly_valid(&schema, r#"{"baz":1}"#));
}

#[test]
fn pretty_literal() {
    let schema = parse("{age:number?;firstName:string}").unwrap();
    assert_eq!(pretty(&schema), "{\n  age: number?\n  firstName: string\n}");
}

#[test]
fn optional_scalars_accept_empty_document_and_null() {
    for source in ["string?", "number?", "boolean?", "null?", "any?"] {
        let schema = parse(source).unwrap();
        assert!(valid(&schema, ""), "{source} should accept an empty document");
        assert!(valid(&schema, "null"), "{source} should accept null");
    }
    assert!(valid(&parse("null").unwrap(), "null"));
    assert!(!valid(&parse("string").unwrap(), "null"));
    assert!(!valid(&parse("string").unwrap(), "  "));
}

#[test]
fn optional_containers_accept_absence_only() {
    for source in ["[string]?", "{a: number}?"] {
        let schema = parse(source).unwrap();
        assert!(valid(&schema, ""), "{source} should accept an empty document");
        assert!(!valid(&schema, "null"), "{source} should reject null");
    }
}

#[test]
fn form_schema_accepts_well_formed_submission() {
    let schema = parse_builtin(FORM_SCHEMA);
    let document = r#"{
        "renderingOptions": {"orientation": "vertical"},
        "inputs": [
            {"inputId": "name", "type": "text"},
            {"inputId": "age", "type": "number", "value": 42}
        ]
    }"#;
    assert!(valid(&schema, document));
    assert!(strictly_valid(&schema, document));
}

#[test]
fn form_schema_reports_path_of_mismatch() {
    let schema = parse_builtin(FORM_SCHEMA);
    let document = r#"{"inputs":[{"inputId":"a","type":"text"},{"inputId":7,"type":"text"}]}"#;
    match check(&schema, document, Mode::Lenient) {
        Err(ValidationError::Mismatch { path, .. }) => assert_eq!(path, "inputs[1].inputId"),
        other => panic!("expected a mismatch, got {other:?}"),
    }
}

#[test]
fn form_schema_strict_rejects_extra_input_field() {
    let schema = parse_builtin(FORM_SCHEMA);
    let document = r#"{"inputs":[{"inputId":"a","type":"text","label":"A"}]}"#;
    assert!(valid(&schema, document));
    assert!(!strictly_valid(&schema, document));
}

#[test]
fn malformed_and_trailing_documents_are_rejected() {
    let schema = parse("{a: number}").unwrap();
    assert!(matches!(
        check(&schema, r#"{"a":1"#, Mode::Lenient),
        Err(ValidationError::Malformed { .. })
    ));
    assert!(matches!(
        check(&schema, r#"{"a":1} {"a":2}"#, Mode::Lenient),
        Err(ValidationError::TrailingData { .. })
    ));
}

#[test]
fn number_property_accepts_any_json_number() {
    let schema = parse("{reading: number; samples: [number]}").unwrap();
    let document = r#"{"reading": 1e400, "samples": [0, -2.5E-999, 123456789012345678901234567890]}"#;
    assert!(strictly_valid(&schema, document));
}
