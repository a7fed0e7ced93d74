use json_scribe::{doc, to_compact, Document};

#[test]
fn test_empty_document() {
    let document = doc! {};
    assert_eq!(document, Document::new());
    assert_eq!(to_compact(&document).unwrap(), "{}");
}

#[test]
fn test_scalar_fields() {
    let document = doc! {
        "name": "Alice",
        "age": 30,
        "height": 1.7,
    };

    assert_eq!(
        to_compact(&document).unwrap(),
        r#"{"name":"Alice","age":30,"height":1.7}"#
    );
}

#[test]
fn test_literal_fields() {
    let document = doc! {
        "active": true,
        "archived": false,
        "deleted_at": null,
    };

    assert_eq!(
        to_compact(&document).unwrap(),
        r#"{"active":true,"archived":false,"deleted_at":null}"#
    );
}

#[test]
fn test_arrays() {
    let document = doc! {
        "numbers": [1, 2, 3],
        "single": [7],
        "mixed": ["a", 1, true, null],
    };

    assert_eq!(
        to_compact(&document).unwrap(),
        r#"{"numbers":[1,2,3],"single":[7],"mixed":["a",1,true,null]}"#
    );
}

#[test]
fn test_nested_objects() {
    let document = doc! {
        "address": {
            "planet": "Earth",
            "coords": [51.5, 0.1],
        },
    };

    assert_eq!(
        to_compact(&document).unwrap(),
        r#"{"address":{"planet":"Earth","coords":[51.5,0.1]}}"#
    );
}

#[test]
fn test_array_of_objects() {
    let document = doc! {
        "children": [
            { "name": "Joe", "age": 15 },
            { "name": "Sara", "age": 13 },
        ],
    };

    assert_eq!(
        to_compact(&document).unwrap(),
        r#"{"children":[{"name":"Joe","age":15},{"name":"Sara","age":13}]}"#
    );
}

#[test]
fn test_expression_values() {
    let name = String::from("Bob");
    let age = 40 + 4;

    let document = doc! {
        "name": (name.clone()),
        "age": (age),
    };

    assert_eq!(to_compact(&document).unwrap(), r#"{"name":"Bob","age":44}"#);
}

#[test]
fn test_no_trailing_comma() {
    let document = doc! { "only": 1 };
    assert_eq!(to_compact(&document).unwrap(), r#"{"only":1}"#);
}
