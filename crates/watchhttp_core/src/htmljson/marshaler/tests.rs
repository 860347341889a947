use std::io;
use std::sync::Arc;

use super::{Marshaler, canonical_number, node_paths};
use crate::decode_json;
use crate::htmljson::{ArrayHtml, FieldValue, JsonPathCollector, MapHtml, MarshalIssue, RendererConfig, Value};

/// Plain-text renderers with `depth|row` wrapping, so expected output stays readable.
fn text_marshaler() -> Marshaler {
	Marshaler::new(RendererConfig {
		null: Arc::new(|_path: &str| "null".to_owned()),
		bool: Arc::new(|_path: &str, value: bool| value.to_string()),
		string: Arc::new(|_path: &str, value: &str| format!("\"{value}\"")),
		number: Arc::new(|_path: &str, _value: f64, text: &str| text.to_owned()),
		array: ArrayHtml {
			open_bracket: "[".into(),
			close_bracket: "]".into(),
			comma: ",".into(),
		},
		map: MapHtml {
			open_brace: "{".into(),
			close_brace: "}".into(),
			comma: ",".into(),
			colon: ":".into(),
			key: Arc::new(|_path: &str, name: &str| name.to_owned()),
		},
		row: Arc::new(|row: &str, depth: usize| format!("{depth}|{row}")),
	})
}

fn render(marshaler: &Marshaler, json: &str) -> String {
	let value = decode_json(json.as_bytes()).expect("test json decodes");
	String::from_utf8(marshaler.marshal(&value)).expect("utf8")
}

fn object(fields: Vec<(&str, Value)>) -> Value {
	Value::Object(fields.into_iter().map(|(name, value)| FieldValue::new(name, value)).collect())
}

#[test]
fn nested_document_rows_and_depths() {
	let out = render(&text_marshaler(), r#"{"b": 1, "a": [true, null]}"#);

	assert_eq!(out, "0|{\n1|a:[\n2|true,\n2|null\n1|],\n1|b:1\n0|}\n");
}

#[test]
fn empty_containers_fit_on_one_row() {
	let marshaler = text_marshaler();

	assert_eq!(render(&marshaler, "{}"), "0|{}\n");
	assert_eq!(render(&marshaler, "[]"), "0|[]\n");
	assert_eq!(render(&marshaler, r#"{"a": {}, "b": []}"#), "0|{\n1|a:{},\n1|b:[]\n0|}\n");
}

#[test]
fn default_empty_containers_have_no_comma() {
	let marshaler = Marshaler::default();
	for json in ["{}", "[]"] {
		let out = render(&marshaler, json);
		assert!(!out.contains(r#"<div class="json-lang">,</div>"#), "unexpected comma in {out}");
		assert_eq!(out.matches("json-container-row").count(), 1);
	}

	let out = render(&marshaler, "{}");
	assert!(out.contains(r#"<div class="json-lang">{</div><div class="json-lang">}</div>"#));
}

#[test]
fn scalar_root_is_one_row() {
	let marshaler = text_marshaler();

	assert_eq!(render(&marshaler, "42"), "0|42\n");
	assert_eq!(render(&marshaler, r#""hi""#), "0|\"hi\"\n");
	assert_eq!(render(&marshaler, "null"), "0|null\n");
}

#[test]
fn keys_are_sorted_and_paths_follow() {
	let collector = JsonPathCollector::new();
	let order = Arc::new(std::sync::Mutex::new(Vec::new()));
	let seen = Arc::clone(&order);
	let marshaler = Marshaler::new(collector.config().with_number(move |path: &str, _value: f64, _text: &str| {
		seen.lock().expect("lock").push(path.to_owned());
		String::new()
	}));

	let value = decode_json(br#"{"b":1,"a":2}"#).expect("json decodes");
	marshaler.marshal(&value);

	assert_eq!(*order.lock().expect("lock"), ["$.a", "$.b"]);
	let out = render(&text_marshaler(), r#"{"b":1,"a":2}"#);
	assert!(out.find("a:2").expect("a row") < out.find("b:1").expect("b row"));
}

#[test]
fn key_order_is_by_code_point() {
	let value = object(vec![("é", Value::Null), ("Z", Value::Null), ("a", Value::Null), ("_", Value::Null)]);

	let paths = node_paths(&value);

	assert_eq!(paths, ["$", "$.Z", "$._", "$.a", "$.é"]);
}

#[test]
fn array_order_is_preserved() {
	let out = render(&text_marshaler(), "[3, 1, 2]");

	assert_eq!(out, "0|[\n1|3,\n1|1,\n1|2\n0|]\n");
}

#[test]
fn nested_array_paths() {
	let value = decode_json(br#"[{"a":[10,20]}]"#).expect("json decodes");

	assert_eq!(node_paths(&value), ["$", "$[0]", "$[0].a", "$[0].a[0]", "$[0].a[1]"]);

	let collector = JsonPathCollector::new();
	Marshaler::new(collector.config()).marshal(&value);
	let recorded: Vec<(String, String)> = collector.paths().into_iter().collect();
	assert_eq!(
		recorded,
		[
			("$[0].a".to_owned(), "a".to_owned()),
			("$[0].a[0]".to_owned(), "10".to_owned()),
			("$[0].a[1]".to_owned(), "20".to_owned()),
		]
	);
}

#[test]
fn field_paths_join_with_dots_verbatim() {
	let value = object(vec![("a.b", object(vec![("[0]", Value::Bool(true))]))]);

	assert_eq!(node_paths(&value), ["$", "$.a.b", "$.a.b.[0]"]);
}

#[test]
fn repeated_marshal_is_byte_identical() {
	let marshaler = Marshaler::default();
	let value = decode_json(br#"{"z":[1,{"y":"s","x":null}],"w":false,"v":0.5}"#).expect("json decodes");

	let first = marshaler.marshal(&value);
	for _ in 0..5 {
		assert_eq!(marshaler.marshal(&value), first);
	}
}

#[test]
fn path_and_depth_reset_between_calls() {
	let collector = JsonPathCollector::new();
	let marshaler = Marshaler::new(collector.config());

	marshaler.marshal(&decode_json(br#"{"a":{"b":[1]}}"#).expect("json decodes"));
	marshaler.marshal(&decode_json(b"[true]").expect("json decodes"));

	let paths = collector.paths();
	assert!(paths.contains_key("$[0]"));
	assert!(!paths.keys().any(|path| path.starts_with("$.a.b[0][")));

	let text = text_marshaler();
	let _ = render(&text, r#"{"a":{"b":[1]}}"#);
	assert_eq!(render(&text, "[1]"), "0|[\n1|1\n0|]\n");
}

#[test]
fn unsupported_nodes_are_reported_and_siblings_render() {
	let value = object(vec![
		("a", Value::Number(1.0)),
		("k", Value::Unsupported("tagged")),
		("list", Value::Array(vec![Value::Bool(true), Value::Unsupported("tagged")])),
		("nested", object(vec![("z", Value::Unsupported("complex-key mapping")), ("y", Value::Null)])),
	]);
	let mut out = Vec::new();

	let errors = text_marshaler().marshal_to(&mut out, &value).expect_err("three unsupported nodes");

	let messages: Vec<String> = errors.issues().iter().map(ToString::to_string).collect();
	assert_eq!(
		messages,
		[
			"skip unsupported type at key($.k)",
			"skip unsupported type at key($.list[1])",
			"skip unsupported type at key($.nested.z)",
		]
	);
	let out = String::from_utf8(out).expect("utf8");
	assert!(out.contains("a:1"));
	assert!(out.contains("2|true,"));
	assert!(out.contains("2|y:null"));
	assert!(out.ends_with("0|}\n"));
	assert_eq!(errors.to_string(), messages.join("\n"));
}

#[test]
fn clean_document_reports_no_errors() {
	let value = decode_json(br#"{"a":[1,"x",null,true]}"#).expect("json decodes");
	let mut out = Vec::new();

	assert!(Marshaler::default().marshal_to(&mut out, &value).is_ok());
}

struct BrokenSink;

impl io::Write for BrokenSink {
	fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
		Err(io::Error::other("connection reset"))
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

#[test]
fn sink_failures_are_collected_per_row() {
	let value = decode_json(br#"{"a":1,"b":2}"#).expect("json decodes");

	let errors = text_marshaler().marshal_to(&mut BrokenSink, &value).expect_err("sink rejects writes");

	assert_eq!(errors.len(), 4);
	assert!(errors.issues().iter().all(|issue| matches!(issue, MarshalIssue::Write(_))));
}

#[test]
fn default_rows_indent_four_spaces_per_level() {
	let out = render(&Marshaler::default(), r#"{"x":{"y":1}}"#);

	let pad = |depth: usize| format!(r#"<div class="json-container-padding">{}</div>"#, "&nbsp;".repeat(4 * depth));
	assert!(out.contains(&format!("{}{}", pad(1), r#"<div class="json-key json-string">x</div>"#)));
	assert!(out.contains(&format!("{}{}", pad(2), r#"<div class="json-key json-string">y</div><div class="json-lang">:</div><div class="json-value json-number">1</div>"#)));
	assert_eq!(out.matches("json-container-row").count(), 5);
}

#[test]
fn canonical_numbers_are_shortest_plain_text() {
	assert_eq!(canonical_number(1.0), "1");
	assert_eq!(canonical_number(10.23), "10.23");
	assert_eq!(canonical_number(-0.5), "-0.5");
	assert_eq!(canonical_number(1e21), "1000000000000000000000");
	assert_eq!(canonical_number(1e-7), "0.0000001");
	assert_eq!(canonical_number(0.1 + 0.2), "0.30000000000000004");
	assert_eq!(canonical_number(f64::NAN), "NaN");
	assert_eq!(canonical_number(f64::INFINITY), "+Inf");
	assert_eq!(canonical_number(f64::NEG_INFINITY), "-Inf");
}
