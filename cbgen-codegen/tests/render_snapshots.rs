//! Snapshot tests for the generated header and source files.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use cbgen_codegen::{ConstructorMode, GenerationRequest, GeneratorConfig, render};
use chrono::NaiveDate;

fn widget() -> GenerationRequest {
    GenerationRequest::new(
        "Widget",
        "Jane Doe",
        "A simple widget.",
        NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
    )
}

#[test]
fn test_widget_header() {
    let pair = render(&widget(), &GeneratorConfig::default());
    insta::assert_snapshot!("widget_header", pair.header);
}

#[test]
fn test_widget_source() {
    let pair = render(&widget(), &GeneratorConfig::default());
    insta::assert_snapshot!("widget_source", pair.source);
}

#[test]
fn test_widget_source_checked() {
    let config = GeneratorConfig {
        constructor: ConstructorMode::Checked,
        ..GeneratorConfig::default()
    };
    let pair = render(&widget(), &config);
    insta::assert_snapshot!("widget_source_checked", pair.source);
}
