#![allow(clippy::expect_used, reason = "Panics are fine inside tests.")]
use navkit_html::{Attributes, HtmlTagRenderer, TagRenderer};
use serde_json::json;

#[test]
fn deserializes_escape_flag_apart_from_attributes() {
  let attrs: Attributes = serde_json::from_value(json!({
    "class": "mr-auto",
    "escape": false,
    "data-spy": "affix"
  }))
  .expect("attributes should deserialize");

  assert_eq!(attrs.escape, Some(false));
  assert_eq!(attrs.len(), 2);
  assert_eq!(attrs.class(), Some("mr-auto"));
  assert!(!attrs.contains("escape"));
}

#[test]
fn serialization_keeps_insertion_order() {
  let attrs = Attributes::new()
    .with("id", "main")
    .with_class("navbar")
    .with("role", "navigation");
  let value = serde_json::to_string(&attrs).expect("serialize");
  assert_eq!(value, r#"{"id":"main","class":"navbar","role":"navigation"}"#);
}

#[test]
fn deserialized_attributes_render_in_file_order() {
  let attrs: Attributes = serde_json::from_str(
    r##"{"data-target": "#x", "class": "btn", "aria-label": "<menu>"}"##,
  )
  .expect("attributes should deserialize");

  assert_eq!(
    HtmlTagRenderer.render_tag("button", Some(""), &attrs),
    r##"<button data-target="#x" class="btn" aria-label="&lt;menu&gt;"></button>"##
  );
}

#[test]
fn numbers_and_booleans_become_attribute_text() {
  let attrs: Attributes = serde_json::from_value(json!({
    "tabindex": -1,
    "aria-hidden": true,
    "data-ratio": 1.5,
    "escape": true
  }))
  .expect("scalar attributes should deserialize");

  assert_eq!(attrs.escape, Some(true));
  assert_eq!(attrs.get("tabindex"), Some("-1"));
  assert_eq!(attrs.get("aria-hidden"), Some("true"));
  assert_eq!(attrs.get("data-ratio"), Some("1.5"));
}

#[test]
fn nested_values_are_rejected() {
  let result =
    serde_json::from_value::<Attributes>(json!({ "data-x": { "a": 1 } }));
  assert!(result.is_err());
}
