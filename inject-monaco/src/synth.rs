//! Injection synthesis: turns the configured language list into a structured
//! artifact of import and dispatch records.
//!
//! Synthesis is separated from rendering (see [`crate::emit`]) so the
//! deduplication and ordering invariants are testable without string
//! comparisons. The central invariant: one import and one dispatch clause per
//! distinct worker module, no matter how many requested identifiers or
//! aliases map to it.

use crate::workers;
use ahash::HashSet;
use ahash::HashSetExt;
use serde::Serialize;

/// A single worker import in the synthesized prologue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImportRecord {
  pub binding: String,
  pub module_id: &'static str,
}

/// One conditional clause of the dispatch chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DispatchClause {
  pub condition: &'static str,
  pub binding: String,
}

/// The structured injection artifact: ordered imports and dispatch clauses.
///
/// The first import is always the baseline editor worker. The terminal
/// unconditional fallback clause is implicit; rendering always emits it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InjectionArtifact {
  pub imports: Vec<ImportRecord>,
  pub clauses: Vec<DispatchClause>,
}

/// Derives the import binding for the language that first hit a group: first
/// letter upper-cased plus a `Worker` suffix, so `scss` binds as `ScssWorker`
/// even though its clause covers the whole style group.
fn binding_name(language: &str) -> String {
  let mut name = String::with_capacity(language.len() + "Worker".len() + 1);
  let mut chars = language.chars();
  if let Some(first) = chars.next() {
    name.extend(first.to_uppercase());
    name.push_str(chars.as_str());
  }
  name.push_str("Worker");
  name
}

/// Builds the artifact for an ordered language list.
///
/// The input is scanned left to right; identifiers without a worker group are
/// skipped silently, and only the first encounter of each worker module
/// produces an import and a dispatch clause. Clause order is therefore
/// first-encounter order. Deterministic: identical inputs yield identical
/// artifacts.
pub fn synthesize<S: AsRef<str>>(languages: &[S]) -> InjectionArtifact {
  let mut imports = vec![ImportRecord {
    binding: workers::EDITOR_WORKER_BINDING.to_string(),
    module_id: workers::EDITOR_WORKER_MODULE,
  }];
  let mut clauses = Vec::new();
  let mut seen = HashSet::<&'static str>::new();

  for language in languages {
    let Some(group) = workers::resolve(language.as_ref()) else {
      continue;
    };
    if !seen.insert(group.module_id) {
      continue;
    }
    let binding = binding_name(language.as_ref());
    imports.push(ImportRecord {
      binding: binding.clone(),
      module_id: group.module_id,
    });
    clauses.push(DispatchClause {
      condition: group.condition,
      binding,
    });
  }

  InjectionArtifact { imports, clauses }
}

/// Module ids the host's dependency pre-resolution step should eagerly
/// process: the editor core, the baseline worker, and every resolved worker
/// module in input order. Duplicates are permitted; the host deduplicates.
pub fn pre_resolution_list<S: AsRef<str>>(languages: &[S]) -> Vec<&'static str> {
  let mut modules = vec![workers::EDITOR_API_MODULE, workers::EDITOR_WORKER_MODULE];
  for language in languages {
    if let Some(group) = workers::resolve(language.as_ref()) {
      modules.push(group.module_id);
    }
  }
  modules
}
