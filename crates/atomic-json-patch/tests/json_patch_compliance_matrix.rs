use atomic_json_patch::{JsonPatch, PatchError};
use serde_json::Value;

fn parse(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|e| panic!("bad fixture {text}: {e}"))
}

/// Applies `patch` to `doc`, returning the error together with the document
/// as left behind.
fn apply(doc: &str, patch: &str) -> (Value, Result<(), PatchError>) {
    let mut document = parse(doc);
    let result = JsonPatch::new().apply_str(&mut document, patch);
    (document, result)
}

// ── valid operations ──────────────────────────────────────────────────────

const VALID: &[(&str, &str, &str, &str)] = &[
    ("empty patch, empty document", "{}", "[]", "{}"),
    ("empty patch, object", r#"{"foo": 1}"#, "[]", r#"{"foo": 1}"#),
    ("empty patch, array", r#"["foo"]"#, "[]", r#"["foo"]"#),
    (
        "add replaces existing value",
        r#"{"foo": 1}"#,
        r#"[{"op": "add", "path": "/foo", "value": "Hello World"}]"#,
        r#"{"foo": "Hello World"}"#,
    ),
    ("add at index zero", "[]", r#"[{"op": "add", "path": "/0", "value": "foo"}]"#, r#"["foo"]"#),
    (
        "add at index one",
        r#"["foo"]"#,
        r#"[{"op": "add", "path": "/1", "value": "bar"}]"#,
        r#"["foo","bar"]"#,
    ),
    (
        "add ahead of existing items",
        r#"["foo","bar"]"#,
        r#"[{"op": "add", "path": "/0", "value": "first"}]"#,
        r#"["first","foo","bar"]"#,
    ),
    (
        "add between two items",
        r#"["foo","bar"]"#,
        r#"[{"op": "add", "path": "/1", "value": "inbetween"}]"#,
        r#"["foo","inbetween","bar"]"#,
    ),
    (
        "add at the end by index",
        r#"["foo","bar"]"#,
        r#"[{"op": "add", "path": "/2", "value": "last"}]"#,
        r#"["foo","bar","last"]"#,
    ),
    (
        "add zero as object member name",
        r#"{"foo": 1}"#,
        r#"[{"op": "add", "path": "/0", "value": "bar"}]"#,
        r#"{"foo": 1, "0": "bar"}"#,
    ),
    ("append to array", "[]", r#"[{"op": "add", "path": "/-", "value": "foo"}]"#, r#"["foo"]"#),
    ("append null", "[]", r#"[{"op": "add", "path": "/-", "value": null}]"#, "[null]"),
    (
        "append object",
        "[]",
        r#"[{"op": "add", "path": "/-", "value": {"foo": "bar"}}]"#,
        r#"[{"foo":"bar"}]"#,
    ),
    (
        "append into nested array",
        "[1, 2, [3, [4, 5]]]",
        r#"[{"op": "add", "path": "/2/1/-", "value": {"foo": ["bar", "baz"]}}]"#,
        r#"[1, 2, [3, [4, 5, {"foo": ["bar", "baz"]}]]]"#,
    ),
    (
        "add array value is not flattened",
        r#"["foo", "sil"]"#,
        r#"[{"op": "add", "path": "/1", "value": ["bar", "baz"]}]"#,
        r#"["foo", ["bar", "baz"], "sil"]"#,
    ),
    ("add empty string key", "{}", r#"[{"op": "add", "path": "/", "value": 1}]"#, r#"{"":1}"#),
    (
        "add into object inside array",
        r#"{"foo": 1, "baz": [{"qux": "hello"}]}"#,
        r#"[{"op": "add", "path": "/baz/0/foo", "value": "world"}]"#,
        r#"{"foo": 1, "baz": [{"qux": "hello", "foo": "world"}]}"#,
    ),
    (
        "add null member",
        r#"{"foo": 1}"#,
        r#"[{"op": "add", "path": "/bar", "value": null}]"#,
        r#"{"foo": 1, "bar": null}"#,
    ),
    (
        "add replaces the root",
        r#"{"foo": "bar"}"#,
        r#"[{"op": "add", "path": "", "value": {"baz": "qux"}}]"#,
        r#"{"baz":"qux"}"#,
    ),
    (
        "several adds",
        "{}",
        r#"[{"op": "add", "path": "/foo", "value": "Hello"},
            {"op": "add", "path": "/bar", "value": "World"},
            {"op": "add", "path": "/array", "value": []},
            {"op": "add", "path": "/array/-", "value": "one"},
            {"op": "add", "path": "/array/1", "value": "three"},
            {"op": "add", "path": "/array/1", "value": "two"}]"#,
        r#"{"foo":"Hello", "bar":"World", "array":["one","two","three"]}"#,
    ),
    (
        "move to same location",
        r#"{"foo": 1}"#,
        r#"[{"op": "move", "from": "/foo", "path": "/foo"}]"#,
        r#"{"foo": 1}"#,
    ),
    (
        "move member within object",
        r#"{"foo": 1, "baz": [{"qux": "hello"}]}"#,
        r#"[{"op": "move", "from": "/foo", "path": "/bar"}]"#,
        r#"{"baz": [{"qux": "hello"}], "bar": 1}"#,
    ),
    (
        "move member value into array",
        r#"{"baz": [{"qux": "hello"}], "bar": 1}"#,
        r#"[{"op": "move", "from": "/baz/0/qux", "path": "/baz/1"}]"#,
        r#"{"baz": [{}, "hello"], "bar": 1}"#,
    ),
    (
        "move object into array",
        r#"{"baz": [], "bar": {"qux": "hello"}}"#,
        r#"[{"op": "move", "from": "/bar", "path": "/baz/0"}]"#,
        r#"{"baz": [{"qux": "hello"}]}"#,
    ),
    (
        "copy null",
        r#"{"baz": null}"#,
        r#"[{"op": "copy", "from": "/baz", "path": "/foo"}]"#,
        r#"{"baz": null, "foo": null}"#,
    ),
    (
        "copy object to another level",
        r#"{"baz": [{"qux": "hello"}], "bar": 1}"#,
        r#"[{"op": "copy", "from": "/baz/0", "path": "/boo"}]"#,
        r#"{"baz":[{"qux":"hello"}],"bar":1,"boo":{"qux":"hello"}}"#,
    ),
    (
        "copy array into array",
        r#"{"baz": [], "bar": 1, "qux": ["hello", "world"]}"#,
        r#"[{"op": "copy", "from": "/qux", "path": "/baz/0"}]"#,
        r#"{"baz": [["hello", "world"]], "bar": 1, "qux": ["hello", "world"]}"#,
    ),
    (
        "remove member",
        r#"{"foo": 1, "bar": [1, 2, 3, 4]}"#,
        r#"[{"op": "remove", "path": "/bar"}]"#,
        r#"{"foo": 1}"#,
    ),
    (
        "remove leaves empty object",
        r#"{"foo": 1, "baz": [{"qux": "hello"}]}"#,
        r#"[{"op": "remove", "path": "/baz/0/qux"}]"#,
        r#"{"foo": 1, "baz": [{}]}"#,
    ),
    ("remove first item", "[1, 2, 3, 4]", r#"[{"op": "remove", "path": "/0"}]"#, "[2, 3, 4]"),
    (
        "remove nested array",
        "[1, 2, 3, 4, [1, 2]]",
        r#"[{"op": "remove", "path": "/4"}]"#,
        "[1, 2, 3, 4]",
    ),
    (
        "replace with different type",
        r#"{"foo": 1, "baz": [{"qux": "hello"}]}"#,
        r#"[{"op": "replace", "path": "/foo", "value": [1, 2, 3, 4]}]"#,
        r#"{"baz": [{"qux": "hello"}], "foo": [1, 2, 3, 4]}"#,
    ),
    (
        "replace nested member",
        r#"{"foo": [1, 2, 3, 4], "baz": [{"qux": "hello"}]}"#,
        r#"[{"op": "replace", "path": "/baz/0/qux", "value": "world"}]"#,
        r#"{"foo": [1, 2, 3, 4], "baz": [{"qux": "world"}]}"#,
    ),
    ("replace item with zero", r#"[""]"#, r#"[{"op": "replace", "path": "/0", "value": 0}]"#, "[0]"),
    ("replace item with null", r#"[""]"#, r#"[{"op": "replace", "path": "/0", "value": null}]"#, "[null]"),
    (
        "replace item without flattening",
        r#"["foo", "sil"]"#,
        r#"[{"op": "replace", "path": "/1", "value": ["bar", "baz"]}]"#,
        r#"["foo", ["bar", "baz"]]"#,
    ),
    (
        "replace whole document",
        r#"{"foo": "bar"}"#,
        r#"[{"op": "replace", "path": "", "value": {"baz": "qux"}}]"#,
        r#"{"baz": "qux"}"#,
    ),
    (
        "test numeric-looking member name",
        r#"{"1e0": "foo"}"#,
        r#"[{"op": "test", "path": "/1e0", "value": "foo"}]"#,
        r#"{"1e0": "foo"}"#,
    ),
    (
        "test ignores extra members",
        r#"{"foo": 1}"#,
        r#"[{"op": "test", "path": "/foo", "value": 1, "eeeew": 1}]"#,
        r#"{"foo": 1}"#,
    ),
    (
        "test null",
        r#"{"foo": null}"#,
        r#"[{"op": "test", "path": "/foo", "value": null}]"#,
        r#"{"foo": null}"#,
    ),
    (
        "test object member order",
        r#"{"foo": [{"foo": 1, "bar": 2}]}"#,
        r#"[{"op": "test", "path": "/foo", "value": [{"bar": 2, "foo": 1}]}]"#,
        r#"{"foo": [{"foo": 1, "bar": 2}]}"#,
    ),
    (
        "test whole document",
        r#"{"foo": 1}"#,
        r#"[{"op": "test", "path": "", "value": {"foo": 1}}]"#,
        r#"{"foo": 1}"#,
    ),
    (
        "test empty member name",
        r#"{"": 1}"#,
        r#"[{"op": "test", "path": "/", "value": 1}]"#,
        r#"{"": 1}"#,
    ),
];

#[test]
fn valid_operations_matrix() {
    for (name, doc, patch, expected) in VALID {
        let (document, result) = apply(doc, patch);
        assert_eq!(result, Ok(()), "{name}");
        assert_eq!(document, parse(expected), "{name}");
    }
}

#[test]
fn rfc6901_pointers_in_tests() {
    let doc = r#"{
        "foo": ["bar", "baz"],
        "": 0,
        "a/b": 1,
        "c%d": 2,
        "e^f": 3,
        "g|h": 4,
        "i\\j": 5,
        "k\"l": 6,
        " ": 7,
        "m~n": 8
    }"#;
    let patch = r#"[
        {"op": "test", "path": "/foo", "value": ["bar", "baz"]},
        {"op": "test", "path": "/foo/0", "value": "bar"},
        {"op": "test", "path": "/", "value": 0},
        {"op": "test", "path": "/a~1b", "value": 1},
        {"op": "test", "path": "/c%d", "value": 2},
        {"op": "test", "path": "/e^f", "value": 3},
        {"op": "test", "path": "/g|h", "value": 4},
        {"op": "test", "path": "/i\\j", "value": 5},
        {"op": "test", "path": "/k\"l", "value": 6},
        {"op": "test", "path": "/ ", "value": 7},
        {"op": "test", "path": "/m~0n", "value": 8}
    ]"#;
    let (document, result) = apply(doc, patch);
    assert_eq!(result, Ok(()));
    assert_eq!(document, parse(doc));
}

// ── atomicity ─────────────────────────────────────────────────────────────

const ATOMIC: &[(&str, &str, &str)] = &[
    (
        "object add",
        r#"{"foo":"Hello"}"#,
        r#"[{"op": "add", "path": "/bar", "value": "World"}, {"op": "test", "path": "/a", "value": ""}]"#,
    ),
    (
        "object replace",
        r#"{"foo":"Hello"}"#,
        r#"[{"op": "replace", "path": "/foo", "value": "Hello World"}, {"op": "test", "path": "/a", "value": ""}]"#,
    ),
    (
        "object copy",
        r#"{"foo":"Hello"}"#,
        r#"[{"op": "copy", "from": "/foo", "path": "/bar"}, {"op": "test", "path": "/a", "value": ""}]"#,
    ),
    (
        "object move",
        r#"{"foo":"Hello"}"#,
        r#"[{"op": "move", "from": "/foo", "path": "/bar"}, {"op": "test", "path": "/a", "value": ""}]"#,
    ),
    (
        "object remove",
        r#"{"foo":"Hello"}"#,
        r#"[{"op": "remove", "path": "/foo"}, {"op": "test", "path": "/a", "value": ""}]"#,
    ),
    (
        "array add",
        "[]",
        r#"[{"op": "add", "path": "/-", "value": "World"}, {"op": "test", "path": "/a", "value": ""}]"#,
    ),
    (
        "array replace",
        r#"["Hello"]"#,
        r#"[{"op": "replace", "path": "/0", "value": "Hello World"}, {"op": "test", "path": "/a", "value": ""}]"#,
    ),
    (
        "array copy",
        r#"["Hello"]"#,
        r#"[{"op": "copy", "from": "/0", "path": "/1"}, {"op": "test", "path": "/a", "value": ""}]"#,
    ),
    (
        "array move",
        r#"[["Hello"],[]]"#,
        r#"[{"op": "move", "from": "/0/0", "path": "/1/0"}, {"op": "test", "path": "/a", "value": ""}]"#,
    ),
    (
        "array remove",
        r#"["Hello"]"#,
        r#"[{"op": "remove", "path": "/0"}, {"op": "test", "path": "/a", "value": ""}]"#,
    ),
    (
        "nested array remove",
        r#"["Hello",["hello",["ciao"]]]"#,
        r#"[{"op": "remove", "path": "/1/1"}, {"op": "test", "path": "/a", "value": ""}]"#,
    ),
    (
        "mixed",
        r#"{"foo":[{"bar":"start"}]}"#,
        r#"[{"op": "add", "path": "/foo/-", "value": "Hello"},
            {"op": "add", "path": "/foo/0/foobar", "value": "Hello"},
            {"op": "add", "path": "/foo/0/bar", "value": "World"},
            {"op": "remove", "path": "/foo/0/foobar"},
            {"op": "copy", "from": "/foo/0", "path": "/foo/-"},
            {"op": "replace", "path": "/foo", "value": "Hello World"},
            {"op": "test", "path": "/bar", "value": "Hello World"}]"#,
    ),
    (
        "copy over existing member",
        r#"{"a": 1, "b": 2}"#,
        r#"[{"op": "copy", "from": "/a", "path": "/b"}, {"op": "test", "path": "/b", "value": 2}]"#,
    ),
    (
        "move over existing member",
        r#"{"a": {"x": 1}, "b": [2]}"#,
        r#"[{"op": "move", "from": "/a", "path": "/b"}, {"op": "remove", "path": "/zzz"}]"#,
    ),
    (
        "move onto own parent",
        r#"{"a": {"b": 1, "c": 2}}"#,
        r#"[{"op": "move", "from": "/a/b", "path": "/a"}, {"op": "test", "path": "/a", "value": 2}]"#,
    ),
    (
        "moves within one array",
        r#"{"list": ["a", "b", "c", "d"]}"#,
        r#"[{"op": "move", "from": "/list/0", "path": "/list/3"},
            {"op": "move", "from": "/list/3", "path": "/list/0"},
            {"op": "add", "path": "/list/1", "value": "x"},
            {"op": "remove", "path": "/list/2"},
            {"op": "test", "path": "/list/0", "value": "nope"}]"#,
    ),
    (
        "root replacement then failure",
        r#"{"foo": [1, 2]}"#,
        r#"[{"op": "add", "path": "", "value": [0]}, {"op": "add", "path": "/-", "value": 1}, {"op": "remove", "path": "/5"}]"#,
    ),
    (
        "validation failure after mutations",
        r#"{"foo": 1}"#,
        r#"[{"op": "add", "path": "/bar", "value": 2}, {"op": "add", "path": "baz", "value": 3}]"#,
    ),
];

#[test]
fn atomic_operations_matrix() {
    for (name, doc, patch) in ATOMIC {
        let (document, result) = apply(doc, patch);
        assert!(result.is_err(), "{name} should fail");
        assert_eq!(document, parse(doc), "{name} should leave the document untouched");
    }
}

#[test]
fn dash_member_survives_rollback() {
    let cases = [
        r#"[{"op": "remove", "path": "/o/-"}, {"op": "remove", "path": "/missing"}]"#,
        r#"[{"op": "move", "from": "/o/-", "path": "/x"}, {"op": "remove", "path": "/missing"}]"#,
        r#"[{"op": "move", "from": "/o/-", "path": "/x"}, {"op": "move", "from": "/x", "path": "/o/-"}]"#,
        r#"[{"op": "copy", "from": "/o/-", "path": "/o/a"}, {"op": "test", "path": "/o/a", "value": 2}]"#,
    ];
    for patch in cases {
        let (document, result) = apply(r#"{"o": {"-": 1}}"#, patch);
        let err = result.unwrap_err();
        assert!(!matches!(err, PatchError::Rollback { .. }), "{patch}: {err}");
        assert_eq!(document, parse(r#"{"o": {"-": 1}}"#), "{patch}");
    }
}

#[test]
fn moving_the_last_item_with_append_token_is_unknown() {
    // `-` names no existing element, so it cannot be a move source.
    let (document, result) = apply(
        r#"{"list": [1]}"#,
        r#"[{"op": "move", "from": "/list/-", "path": "/x"}]"#,
    );
    assert!(matches!(result, Err(PatchError::UnknownPath { .. })));
    assert_eq!(document, parse(r#"{"list": [1]}"#));
}

// ── runtime failures ──────────────────────────────────────────────────────

#[test]
fn array_boundary_matrix() {
    let cases = [
        (r#"["foo", "sil"]"#, r#"[{"op": "add", "path": "/1e0", "value": "bar"}]"#, "/1e0"),
        (r#"{"bar": [1, 2]}"#, r#"[{"op": "add", "path": "/bar/8", "value": "5"}]"#, "/bar/8"),
        (r#"{"bar": [1, 2]}"#, r#"[{"op": "add", "path": "/bar/-1", "value": "5"}]"#, "/bar/-1"),
        ("[1]", r#"[{"op": "add", "path": "/01", "value": 0}]"#, "/01"),
    ];
    for (doc, patch, pointer) in cases {
        let (document, result) = apply(doc, patch);
        let err = result.unwrap_err();
        assert!(matches!(err, PatchError::ArrayBoundary { .. }), "{patch}: {err:?}");
        assert_eq!(err.context_pointer(), Some(pointer));
        assert_eq!(document, parse(doc));
    }
}

#[test]
fn failed_test_matrix() {
    let cases = [
        (r#"{"foo": "non-null"}"#, r#"[{"op": "test", "path": "/foo", "value": null}]"#),
        (r#"{"foo": null}"#, r#"[{"op": "test", "path": "/foo", "value": "non-null"}]"#),
        (r#"{"foo": null}"#, r#"[{"op": "test", "path": "/foo", "value": false}]"#),
        (r#"{"foo": false}"#, r#"[{"op": "test", "path": "/foo", "value": null}]"#),
        (
            r#"{"foo": {"bar": [1, 2, 5, 4]}}"#,
            r#"[{"op": "test", "path": "/foo", "value": [1, 2]}]"#,
        ),
        (r#"{"foo": "1"}"#, r#"[{"op": "test", "path": "/foo", "value": 1}]"#),
        (r#"{"foo": [1, 2]}"#, r#"[{"op": "test", "path": "/foo", "value": [2, 1]}]"#),
    ];
    for (doc, patch) in cases {
        let (_, result) = apply(doc, patch);
        assert!(
            matches!(result, Err(PatchError::FailedTest { .. })),
            "{patch}: {result:?}"
        );
    }
}

#[test]
fn unknown_path_matrix() {
    let cases = [
        (
            r#"{"foo": 1, "baz": [1,2,3,4]}"#,
            r#"[{"op": "add", "path": "/baz/bar/0", "value": "bar"}]"#,
        ),
        (
            r#"{"baz": [1,2,3], "bar": 1}"#,
            r#"[{"op": "copy", "from": "/baz/1e0", "path": "/boo"}]"#,
        ),
        (
            r#"{"foo": 1, "baz": [1,2,3,4]}"#,
            r#"[{"op": "move", "from": "/baz/1e0", "path": "/foo"}]"#,
        ),
        ("[1, 2, 3, 4]", r#"[{"op": "remove", "path": "/1e0"}]"#),
        (
            r#"{"foo": 1, "baz": [{"qux": "hello"}]}"#,
            r#"[{"op": "remove", "path": "/baz/1e0/qux"}]"#,
        ),
        (r#"[""]"#, r#"[{"op": "replace", "path": "/1e0", "value": false}]"#),
        (r#"["foo", "bar"]"#, r#"[{"op": "test", "path": "/1e0", "value": "bar"}]"#),
        (r#"{"foo": "bar"}"#, r#"[{"op": "add", "path": "/foo/bar", "value": 1}]"#),
    ];
    for (doc, patch) in cases {
        let (document, result) = apply(doc, patch);
        assert!(
            matches!(result, Err(PatchError::UnknownPath { .. })),
            "{patch}: {result:?}"
        );
        assert_eq!(document, parse(doc));
    }
}

#[test]
fn append_to_object_fails() {
    let (_, result) = apply(
        r#"{"foo":"bar"}"#,
        r#"[{"op":"add", "path": "/-", "value":"biz"}]"#,
    );
    assert_eq!(result, Err(PatchError::AppendToNonArray { pointer: "/-".into() }));
}

// ── validation failures ───────────────────────────────────────────────────

#[test]
fn invalid_patch_matrix() {
    let cases = [
        (r#"[{"path": "/foo", "value": "bar"}]"#, 0, PatchError::InvalidPatchOperation),
        (r#"[{"op":"add", "value": "bar"}]"#, 0, PatchError::InvalidPatchPath),
        (r#"[{"op":"add", "path": "/foo"}]"#, 0, PatchError::InvalidPatchValue),
        (
            r#"[{"op": "add", "path": "/foo", "value": "bar"},{"op": "copy", "path": "/biz"}]"#,
            1,
            PatchError::InvalidPatchFrom,
        ),
        (
            r#"[{"op":"add", "path": "foo", "value": "bar"}]"#,
            0,
            PatchError::MalformedPath {
                pointer: "foo".into(),
            },
        ),
        (
            r#"[{"op":"move", "from": "bar", "path": "/foo"}]"#,
            0,
            PatchError::MalformedPath {
                pointer: "bar".into(),
            },
        ),
        (
            r#"[{"op":"read", "path": "/foo"}]"#,
            0,
            PatchError::UnknownPatchOperation { op: "read".into() },
        ),
        (r#"[{"op":"remove", "path": ""}]"#, 0, PatchError::InvalidPatchPath),
        (
            r#"[{"op":"move", "from": "/a", "path": "/a/b"}]"#,
            0,
            PatchError::InvalidPatchFrom,
        ),
    ];
    for (patch, index, source) in cases {
        let (document, result) = apply("{}", patch);
        let err = result.unwrap_err();
        assert_eq!(err, PatchError::invalid_patch(index, source), "{patch}");
        assert_eq!(err.context_pointer(), Some(format!("/{index}").as_str()));
        assert!(err.is_validation());
        assert_eq!(document, parse("{}"));
    }
}

#[test]
fn patch_must_be_an_array() {
    let (_, result) = apply("{}", "{}");
    assert!(matches!(result, Err(PatchError::MalformedPatch { .. })));
}

#[test]
fn is_valid_patch_matrix() {
    let engine = JsonPatch::new();
    assert!(engine.is_valid_patch_str(r#"[{"op":"test","path":"/foo","value":"bar"}]"#));
    assert!(!engine.is_valid_patch_str(r#"{"op":"test","path":"/foo","value":"bar"}"#));
    assert!(!engine.is_valid_patch_str(r#"[{"op":"add"}]"#));
    assert!(!engine.is_valid_patch_str(r#"[{"op":"unknown","path":"/foo","value":"bar"}]"#));
    assert!(engine.is_valid_patch_str("[]"));
}
