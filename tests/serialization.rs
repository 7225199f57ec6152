use pawx_expr::{parse, Node};
use serde_json::json;

#[test]
fn call_serializes_with_estree_tags() {
    assert_eq!(
        parse("a.b(1)").unwrap().to_json(),
        json!({
            "type": "CallExpression",
            "callee": {
                "type": "MemberExpression",
                "computed": false,
                "object": { "type": "Identifier", "name": "a" },
                "property": { "type": "Identifier", "name": "b" }
            },
            "arguments": [{ "type": "Literal", "value": 1.0, "raw": "1" }]
        })
    );
}

#[test]
fn unary_and_logical_tags() {
    assert_eq!(
        parse("!a || b").unwrap().to_json(),
        json!({
            "type": "LogicalExpression",
            "operator": "||",
            "left": {
                "type": "UnaryExpression",
                "operator": "!",
                "argument": { "type": "Identifier", "name": "a" },
                "prefix": true
            },
            "right": { "type": "Identifier", "name": "b" }
        })
    );
}

#[test]
fn literal_values_keep_their_json_types() {
    assert_eq!(
        parse("[null, true, 'x']").unwrap().to_json(),
        json!({
            "type": "ArrayExpression",
            "elements": [
                { "type": "Literal", "value": null, "raw": "null" },
                { "type": "Literal", "value": true, "raw": "true" },
                { "type": "Literal", "value": "x", "raw": "'x'" }
            ]
        })
    );
    assert_eq!(parse("this").unwrap().to_json(), json!({ "type": "ThisExpression" }));
}

#[test]
fn key_values_serialize_single_and_repeated_keys() {
    assert_eq!(
        parse("f(x=1, y=2, x=3)").unwrap().to_json()["arguments"][0],
        json!({
            "type": "KeyValueExpression",
            "keys": {
                "x": [
                    { "type": "Literal", "value": 1.0, "raw": "1" },
                    { "type": "Literal", "value": 3.0, "raw": "3" }
                ],
                "y": { "type": "Literal", "value": 2.0, "raw": "2" }
            }
        })
    );
}

#[test]
fn bang_identifier_carries_object_and_property() {
    assert_eq!(
        parse("a!b").unwrap().to_json(),
        json!({
            "type": "Identifier",
            "name": "a!b",
            "object": { "type": "Identifier", "name": "a" },
            "property": { "type": "Identifier", "name": "b" }
        })
    );
}

#[test]
fn trees_deserialize_back() {
    let node = parse("a ? b.c[0](d=1 d=2) : -e * 2; [f, 'g']").unwrap();

    let text = serde_json::to_string(&node).unwrap();
    let back: Node = serde_json::from_str(&text).unwrap();

    assert_eq!(back, node);
}
