use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const FIELD: &str = r#"{
  "json": {
    "nodeType": "document",
    "data": {},
    "content": [
      {
        "nodeType": "heading-1",
        "data": {},
        "content": [{ "nodeType": "text", "value": "About", "marks": [], "data": {} }]
      },
      {
        "nodeType": "paragraph",
        "data": {},
        "content": [
          {
            "nodeType": "hyperlink",
            "data": { "uri": "/contact" },
            "content": [{ "nodeType": "text", "value": "Contact us", "marks": [], "data": {} }]
          }
        ]
      },
      {
        "nodeType": "embedded-asset-block",
        "data": { "target": { "sys": { "id": "A1", "type": "Link", "linkType": "Asset" } } },
        "content": []
      }
    ]
  },
  "links": {
    "assets": {
      "block": [{ "sys": { "id": "A1" }, "url": "https://img.example.net/cat.png", "title": "cat" }]
    }
  }
}"#;

fn exe() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_richdoc"))
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(exe())
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn renders_field_to_html_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("page.json"), FIELD).unwrap();

    let out = run(dir.path(), &["page.json"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let html = String::from_utf8(out.stdout).unwrap();
    assert!(html.starts_with("<h1>About</h1>\n"));
    assert!(html.contains("<a href=\"/contact\" class=\"u\" data-route=\"client\">Contact us</a>"));
    assert!(html.contains("<img src=\"https://img.example.net/cat.png\" alt=\"cat\""));
}

#[test]
fn separate_links_file_replaces_embedded_links() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("page.json"), FIELD).unwrap();
    std::fs::write(dir.path().join("links.json"), r#"{ "assets": { "block": [] } }"#).unwrap();

    let out = run(dir.path(), &["page.json", "--links", "links.json"]);
    assert!(out.status.success());
    let html = String::from_utf8(out.stdout).unwrap();
    assert!(!html.contains("<img"));
}

#[test]
fn tree_format_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("page.json"), FIELD).unwrap();

    let out = run(dir.path(), &["page.json", "--format", "tree", "-o", "tree.json"]);
    assert!(out.status.success());

    let tree: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("tree.json")).unwrap())
            .unwrap();
    assert_eq!(tree["kind"], "fragment");
    assert_eq!(tree["children"][0]["kind"], "heading");
    assert_eq!(tree["children"][0]["level"], 1);
    assert_eq!(tree["children"][1]["children"][0]["kind"], "internal-link");
    assert_eq!(tree["children"][2]["kind"], "image");
    assert_eq!(tree["children"][2]["alt"], "cat");
}

#[test]
fn config_file_changes_link_classification() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("page.json"), FIELD).unwrap();
    std::fs::write(
        dir.path().join("richdoc.toml"),
        "[links]\nexternal_prefixes = [\"/\"]\nclass = \"\"\n",
    )
    .unwrap();

    let out = run(dir.path(), &["page.json"]);
    assert!(out.status.success());
    let html = String::from_utf8(out.stdout).unwrap();
    assert!(html.contains("<a href=\"/contact\">Contact us</a>"));
}

#[test]
fn malformed_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("bad.json"),
        r#"{ "nodeType": "document", "content": [{ "nodeType": "embedded-asset-block", "data": {} }] }"#,
    )
    .unwrap();

    let out = run(dir.path(), &["bad.json"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("parse input"), "stderr: {stderr}");
}
