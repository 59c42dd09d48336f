use assert_cmd::Command;
use std::time::Duration;

fn inject_monaco_cli() -> Command {
  let mut cmd = Command::cargo_bin("inject-monaco-cli").unwrap();
  cmd.timeout(Duration::from_secs(5));
  cmd
}

#[test]
fn include_lists_baselines_then_resolved_workers() {
  let assert = inject_monaco_cli().arg("--include").assert().success();

  assert_eq!(
    String::from_utf8_lossy(&assert.get_output().stdout),
    "monaco-editor/esm/vs/editor/editor.api\n\
     monaco-editor/esm/vs/editor/editor.worker\n\
     monaco-editor/esm/vs/language/json/json.worker\n\
     monaco-editor/esm/vs/language/css/css.worker\n\
     monaco-editor/esm/vs/language/html/html.worker\n\
     monaco-editor/esm/vs/language/typescript/ts.worker\n"
  );
}

#[test]
fn include_keeps_alias_duplicates_for_the_host_to_deduplicate() {
  let assert = inject_monaco_cli()
    .arg("--include")
    .arg("--language")
    .arg("typescript")
    .arg("--language")
    .arg("javascript")
    .assert()
    .success();

  let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
  assert_eq!(
    stdout
      .lines()
      .filter(|line| line.ends_with("typescript/ts.worker"))
      .count(),
    2
  );
}
