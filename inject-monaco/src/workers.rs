//! Static resolution table from language identifiers to Monaco worker modules.
//!
//! Languages that share an analysis backend (e.g. `typescript`/`javascript`,
//! or the three style dialects) form one [`WorkerGroup`]: one worker module,
//! one dispatch predicate covering every member. The set of groups is fixed
//! closed-world knowledge baked in at build time; an identifier outside every
//! group resolves to nothing and callers skip it.

use ahash::HashMap;
use ahash::HashMapExt;
use once_cell::sync::Lazy;

/// Module id of the editor core API, pre-resolved so interactive dev servers
/// don't discover it mid-session.
pub const EDITOR_API_MODULE: &str = "monaco-editor/esm/vs/editor/editor.api";

/// Module id of the baseline editor worker, imported unconditionally and
/// returned by the dispatch chain's terminal fallback.
pub const EDITOR_WORKER_MODULE: &str = "monaco-editor/esm/vs/editor/editor.worker";

/// Import binding under which the baseline worker is registered.
pub const EDITOR_WORKER_BINDING: &str = "EditorWorker";

/// One alias group: the language identifiers that share a worker module and a
/// single dispatch condition.
#[derive(Debug, PartialEq, Eq)]
pub struct WorkerGroup {
  pub languages: &'static [&'static str],
  pub module_id: &'static str,
  pub condition: &'static str,
}

#[rustfmt::skip]
pub static WORKER_GROUPS: &[WorkerGroup] = &[
  WorkerGroup {
    languages: &["json"],
    module_id: "monaco-editor/esm/vs/language/json/json.worker",
    condition: "label === 'json'",
  },
  WorkerGroup {
    languages: &["css", "scss", "less"],
    module_id: "monaco-editor/esm/vs/language/css/css.worker",
    condition: "label === 'css' || label === 'scss' || label === 'less'",
  },
  WorkerGroup {
    languages: &["html", "handlebars", "razor"],
    module_id: "monaco-editor/esm/vs/language/html/html.worker",
    condition: "label === 'html' || label === 'handlebars' || label === 'razor'",
  },
  WorkerGroup {
    languages: &["typescript", "javascript"],
    module_id: "monaco-editor/esm/vs/language/typescript/ts.worker",
    condition: "label === 'typescript' || label === 'javascript'",
  },
];

static LANGUAGE_MAPPING: Lazy<HashMap<&'static str, &'static WorkerGroup>> = Lazy::new(|| {
  let mut map = HashMap::<&'static str, &'static WorkerGroup>::new();
  for group in WORKER_GROUPS {
    for &language in group.languages {
      map.insert(language, group);
    }
  }
  map
});

/// Resolves a language identifier to its worker group.
///
/// Pure lookup with no error path: an unrecognized identifier yields `None`
/// and contributes nothing downstream (the language degrades to the baseline
/// worker at run time rather than failing the build).
pub fn resolve(language: &str) -> Option<&'static WorkerGroup> {
  LANGUAGE_MAPPING.get(language).copied()
}
