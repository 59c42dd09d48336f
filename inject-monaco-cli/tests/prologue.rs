use assert_cmd::Command;
use std::time::Duration;

fn inject_monaco_cli() -> Command {
  let mut cmd = Command::cargo_bin("inject-monaco-cli").unwrap();
  cmd.timeout(Duration::from_secs(5));
  cmd
}

#[test]
fn prints_the_exact_prologue_for_one_language() {
  let expected = "
/* --- Monaco Universal Plugin Start --- */
import EditorWorker from 'monaco-editor/esm/vs/editor/editor.worker?worker';
import JsonWorker from 'monaco-editor/esm/vs/language/json/json.worker?worker';

self.MonacoEnvironment = {
  getWorker(_, label) {
    if (label === 'json') return new JsonWorker();
    return new EditorWorker();
  }
};
/* --- Monaco Universal Plugin End --- */
";

  let assert = inject_monaco_cli()
    .arg("--print-prologue")
    .arg("--language")
    .arg("json")
    .assert()
    .success();

  assert_eq!(
    String::from_utf8_lossy(&assert.get_output().stdout),
    expected
  );
}

#[test]
fn default_languages_cover_all_four_workers() {
  let assert = inject_monaco_cli().arg("--print-prologue").assert().success();

  let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
  for binding in ["EditorWorker", "JsonWorker", "CssWorker", "HtmlWorker", "TypescriptWorker"] {
    assert!(stdout.contains(binding), "missing {binding} in: {stdout}");
  }
}

#[test]
fn options_file_supplies_languages_and_flags_win() {
  let path = std::env::temp_dir().join(format!(
    "inject-monaco-options-{}.json",
    std::process::id()
  ));
  std::fs::write(&path, r#"{ "languages": ["css"], "entry": "src/app.ts" }"#).unwrap();

  let assert = inject_monaco_cli()
    .arg("--print-prologue")
    .arg("--options")
    .arg(&path)
    .assert()
    .success();
  let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
  assert!(stdout.contains("CssWorker"));
  assert!(!stdout.contains("JsonWorker"));

  let assert = inject_monaco_cli()
    .arg("--print-prologue")
    .arg("--options")
    .arg(&path)
    .arg("--language")
    .arg("json")
    .assert()
    .success();
  let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
  assert!(stdout.contains("JsonWorker"));
  assert!(!stdout.contains("CssWorker"));

  std::fs::remove_file(&path).unwrap();
}

#[test]
fn malformed_options_file_fails_with_message() {
  let path = std::env::temp_dir().join(format!(
    "inject-monaco-bad-options-{}.json",
    std::process::id()
  ));
  std::fs::write(&path, "not json").unwrap();

  let assert = inject_monaco_cli()
    .arg("--print-prologue")
    .arg("--options")
    .arg(&path)
    .assert()
    .failure()
    .code(1);
  let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
  assert!(stderr.contains("failed to parse"));

  std::fs::remove_file(&path).unwrap();
}
