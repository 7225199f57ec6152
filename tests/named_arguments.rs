mod common;

use common::{id, num, string};
use indexmap::IndexMap;
use pawx_expr::{parse, KeyValueEntry, Node};

fn key_values(pairs: Vec<(&str, KeyValueEntry)>) -> Node {
    let keys: IndexMap<String, KeyValueEntry> = pairs
        .into_iter()
        .map(|(key, entry)| (key.to_string(), entry))
        .collect();
    Node::KeyValues { keys }
}

fn single(node: Node) -> KeyValueEntry {
    KeyValueEntry::Single(Box::new(node))
}

#[test]
fn space_separated_pairs_fold_into_one_argument() {
    let expected = Node::call(
        id("named"),
        vec![key_values(vec![
            ("arg1", single(string("hi", "\"hi\""))),
            ("arg2", single(string("bye", "\"bye\""))),
        ])],
    );

    assert_eq!(parse("named(arg1=\"hi\" arg2=\"bye\")").unwrap(), expected);
    assert_eq!(parse("named(arg1=\"hi\", arg2=\"bye\")").unwrap(), expected);
}

#[test]
fn pairs_inside_brackets() {
    assert_eq!(
        parse("named[arg1=\"hi\" arg2=\"bye\" , arg3=4]").unwrap(),
        Node::member(
            id("named"),
            key_values(vec![
                ("arg1", single(string("hi", "\"hi\""))),
                ("arg2", single(string("bye", "\"bye\""))),
                ("arg3", single(num(4.0))),
            ]),
            true
        )
    );
}

#[test]
fn repeated_keys_collect_values_in_order() {
    assert_eq!(
        parse("f(x=1, x=2)").unwrap(),
        Node::call(
            id("f"),
            vec![key_values(vec![(
                "x",
                KeyValueEntry::Many(vec![num(1.0), num(2.0)])
            )])]
        )
    );

    let node = parse("f(x=1, y=2, x=3)").unwrap();
    let Node::Call { arguments, .. } = node else {
        panic!("expected a call, got {node:?}");
    };
    let Node::KeyValues { keys } = &arguments[0] else {
        panic!("expected key values, got {:?}", arguments[0]);
    };

    assert_eq!(keys.keys().collect::<Vec<_>>(), ["x", "y"]);
    assert_eq!(keys["x"].values(), vec![&num(1.0), &num(3.0)]);
}

#[test]
fn values_are_full_expressions() {
    assert_eq!(
        parse("f(a=x + y, b=2)").unwrap(),
        Node::call(
            id("f"),
            vec![key_values(vec![
                ("a", single(Node::binary("+", id("x"), id("y")))),
                ("b", single(num(2.0))),
            ])]
        )
    );
}

#[test]
fn positional_argument_after_pairs_is_kept() {
    assert_eq!(
        parse("f(a=1, b)").unwrap(),
        Node::call(
            id("f"),
            vec![key_values(vec![("a", single(num(1.0)))]), id("b")]
        )
    );
}

#[test]
fn equality_is_not_a_pair() {
    assert_eq!(
        parse("f(a==1)").unwrap(),
        Node::call(id("f"), vec![Node::binary("==", id("a"), num(1.0))])
    );
}
