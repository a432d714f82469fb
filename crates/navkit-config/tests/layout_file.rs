#![allow(clippy::expect_used, reason = "Expect is acceptable in tests")]

use std::fs;

use navkit_config::{ConfigError, Item, Layout};
use tempfile::tempdir;

#[test]
fn loads_json_layout_from_file() {
  let temp_dir = tempdir().expect("tempdir");
  let path = temp_dir.path().join("navbar.json");
  fs::write(
    &path,
    r#"{
      "helper": { "auto_active_link": false },
      "request": { "base": "/app", "current": "/app/docs" },
      "navbar": {
        "brand": "<img src=\"/logo.svg\">",
        "responsive": false,
        "items": [
          { "type": "menu", "items": [ { "type": "link", "name": "Docs", "url": "/docs" } ] },
          { "type": "button", "name": "Sign in", "options": { "class": "btn-primary" } }
        ]
      }
    }"#,
  )
  .expect("write layout");

  let layout = Layout::from_file(&path).expect("load layout");

  assert!(!layout.helper.auto_active_link);
  assert_eq!(layout.request.base, "/app");
  assert!(!layout.navbar.options.responsive);
  assert_eq!(layout.navbar.items.len(), 2);
  assert!(matches!(
    &layout.navbar.items[1],
    Item::Button { name, options }
      if name == "Sign in" && options.class() == Some("btn-primary")
  ));
}

#[test]
fn rejects_unknown_extension() {
  let temp_dir = tempdir().expect("tempdir");
  let path = temp_dir.path().join("navbar.yaml");
  fs::write(&path, "navbar: {}").expect("write layout");

  let err = Layout::from_file(&path).expect_err("yaml is not supported");
  assert!(matches!(err, ConfigError::Config(_)));
  assert!(err.to_string().contains("Unsupported layout file format"));
}

#[test]
fn reports_parse_errors_with_path() {
  let temp_dir = tempdir().expect("tempdir");
  let path = temp_dir.path().join("broken.toml");
  fs::write(&path, "[[navbar.items]]\ntype = \"carousel\"\n")
    .expect("write layout");

  let err = Layout::from_file(&path).expect_err("unknown item type");
  let message = err.to_string();
  assert!(message.contains("Failed to parse toml layout"));
  assert!(message.contains("broken.toml"));
}

#[test]
fn missing_file_is_an_error() {
  let temp_dir = tempdir().expect("tempdir");
  let err = Layout::from_file(temp_dir.path().join("absent.toml"))
    .expect_err("file does not exist");
  assert!(err.to_string().contains("Failed to read layout file"));
}
