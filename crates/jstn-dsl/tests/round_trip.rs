use jstn_core::types::Type;
use jstn_dsl::{canonical, parse, pretty};

/// Helper: parse source, generate it in both formats, parse again, and
/// compare the trees. Also checks that canonical output is a fixed point.
fn assert_round_trip(source: &str) {
    let tree = parse(source).expect("first parse should succeed");

    for printed in [canonical(&tree), pretty(&tree)] {
        let reparsed = parse(&printed).unwrap_or_else(|err| {
            panic!("second parse (after generating) failed: {err}\n\nGenerated schema:\n{printed}");
        });
        assert_eq!(tree, reparsed, "tree mismatch after round trip through:\n{printed}");
    }

    let once = canonical(&tree);
    let twice = canonical(&parse(&once).expect("canonical output should parse"));
    assert_eq!(once, twice, "canonical form is not idempotent");
}

#[test]
fn round_trip_scalars() {
    for source in [
        "string", "string?", "number", "number?", "boolean", "boolean?", "null", "null?", "any",
        "any?",
    ] {
        assert_round_trip(source);
    }
}

#[test]
fn round_trip_arrays() {
    for source in ["[]", "[]?", "[string]", "[string]?", "[string?]", "[[number?]?]?"] {
        assert_round_trip(source);
    }
}

#[test]
fn round_trip_objects() {
    assert_round_trip("{}");
    assert_round_trip("{}?");
    assert_round_trip("{key: string}");
    assert_round_trip("{name:string;age:number?}");
}

#[test]
fn round_trip_nested_objects() {
    assert_round_trip(
        "{author:string;works:[{
     title:string
     year:     number?;
     classic:boolean;}]}",
    );
}

#[test]
fn round_trip_form_schema() {
    assert_round_trip(
        "{
	renderingOptions: {
		orientation: string?
	}
	inputs: [{
		inputId: string
		type: string
		value: number?
	}]
}
",
    );
}

#[test]
fn round_trip_deeply_nested() {
    assert_round_trip("{a:{b:{c:{d:[{e:[[any?]]}?]}?}};z:null}");
}

#[test]
fn round_trip_built_tree() {
    let tree = Type::object([
        ("id", Type::number()),
        ("tags", Type::array(Type::string()).into_optional()),
        (
            "owner",
            Type::object([("name", Type::string()), ("extra", Type::any().into_optional())]),
        ),
        ("archived", Type::empty_array()),
    ]);

    assert_eq!(parse(&canonical(&tree)).unwrap(), tree);
    assert_eq!(parse(&pretty(&tree)).unwrap(), tree);
}

#[test]
fn canonical_collapses_layout_choices() {
    let a = parse("{ b : number ;\n a : string }").unwrap();
    let b = parse("{\n  a: string\n  b: number\n}").unwrap();
    assert_eq!(canonical(&a), canonical(&b));
    assert_eq!(canonical(&a), "{a:string;b:number}");
}

#[test]
fn keyword_case_is_normalized() {
    let tree = parse("{name: STRING; tags: [Number?]}").unwrap();
    assert_eq!(canonical(&tree), "{name:string;tags:[number?]}");
}
