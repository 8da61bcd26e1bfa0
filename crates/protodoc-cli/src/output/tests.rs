// Tests for output formatting

use super::capture::SharedBuffer;
use super::*;

fn writer(format: OutputFormat, quiet: bool) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = OutputWriter::with_writer(format, false, quiet, 0, Box::new(buffer.clone()));
    (writer, buffer)
}

fn sample() -> SampleValue {
    SampleValue::object([
        ("id", SampleValue::string("0")),
        ("tags", SampleValue::Array(vec![SampleValue::string("{{string}}")])),
    ])
}

#[test]
fn test_human_sample_uses_indent_width() {
    let (mut out, buffer) = writer(OutputFormat::Human, false);
    out.sample(&sample(), 4).unwrap();

    assert_eq!(
        buffer.contents(),
        "{\n    \"id\": \"0\",\n    \"tags\": [\n        \"{{string}}\"\n    ]\n}\n"
    );
}

#[test]
fn test_machine_sample_formats() {
    let compact = OutputFormat::Json.format_sample(&sample(), 4).unwrap();
    assert_eq!(compact, r#"{"id":"0","tags":["{{string}}"]}"#);

    let yaml = OutputFormat::Yaml.format_sample(&sample(), 4).unwrap();
    assert!(yaml.contains("id: '0'"));
    assert!(yaml.contains("- '{{string}}'"));
}

#[test]
fn test_status_messages_respect_quiet_and_format() {
    let (mut out, buffer) = writer(OutputFormat::Human, false);
    out.info("loaded").unwrap();
    out.success("done").unwrap();
    out.warning("careful").unwrap();
    out.section("Messages").unwrap();
    assert_eq!(
        buffer.contents(),
        "INFO: loaded\ndone\nWARNING: careful\n\n=== Messages ===\n"
    );

    let (mut quiet, buffer) = writer(OutputFormat::Human, true);
    quiet.info("loaded").unwrap();
    quiet.success("done").unwrap();
    assert_eq!(buffer.contents(), "");

    let (mut json, buffer) = writer(OutputFormat::Json, false);
    json.info("loaded").unwrap();
    json.warning("careful").unwrap();
    assert_eq!(buffer.contents(), "");
}

#[test]
fn test_table_alignment() {
    let (mut out, buffer) = writer(OutputFormat::Human, false);
    out.table(
        &["Name", "File"],
        vec![
            vec!["shop.Order".to_string(), "shop.proto".to_string()],
            vec!["a.B".to_string(), "a.proto".to_string()],
        ],
    )
    .unwrap();

    let expected = "\
Name       │ File
───────────┼───────────
shop.Order │ shop.proto
a.B        │ a.proto
";
    assert_eq!(buffer.contents(), expected);
}

#[test]
fn test_data_in_machine_format() {
    let (mut out, buffer) = writer(OutputFormat::Json, false);
    out.data(&serde_json::json!({"messages": 2})).unwrap();
    assert_eq!(buffer.contents(), "{\"messages\":2}\n");
}
