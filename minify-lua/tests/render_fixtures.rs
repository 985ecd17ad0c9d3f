use minify_lua::{minify_json, MinifyOptions};
use similar::ChangeTag;
use similar::TextDiff;
use std::env::var;
use std::fs::read_dir;
use std::fs::read_to_string;
use std::fs::write;
use std::path::Path;

/// Renders every `tests/fixtures/*.json` tree and compares it with the sibling `.lua` file. Set
/// `MINIFYLUA_REGENERATE_FIXTURES=1` to rewrite the expected outputs instead.
#[test]
fn fixtures_render_as_expected() {
  let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
  let regenerate = var("MINIFYLUA_REGENERATE_FIXTURES").is_ok_and(|v| v == "1");
  let mut checked = 0;
  for entry in read_dir(&dir).unwrap() {
    let path = entry.unwrap().path();
    if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
      continue;
    }
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    println!("Testing {}...", name);
    let tree = read_to_string(&path).unwrap();
    let actual = minify_json(&tree, &MinifyOptions::default())
      .unwrap_or_else(|err| panic!("failed to minify {name}: {err}"));
    let expected_path = path.with_extension("lua");
    if regenerate {
      write(&expected_path, format!("{actual}\n")).unwrap();
      continue;
    }
    let expected = read_to_string(&expected_path).unwrap();
    let expected = expected.trim_end_matches('\n');
    if actual != expected {
      let mut msg = format!("Failed {}, got:\n", name);
      let diff = TextDiff::from_chars(expected, actual.as_str());
      for change in diff.iter_all_changes() {
        let value = change.value();
        match change.tag() {
          ChangeTag::Delete => msg.push_str(&format!("[-{value}-]")),
          ChangeTag::Insert => msg.push_str(&format!("{{+{value}+}}")),
          ChangeTag::Equal => msg.push_str(value),
        };
      }
      panic!("{}", msg);
    }
    checked += 1;
  }
  assert!(regenerate || checked > 0, "no fixtures found in {}", dir.display());
}
