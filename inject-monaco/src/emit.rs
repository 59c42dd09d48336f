//! Rendering of an [`InjectionArtifact`] into the textual prologue.
//!
//! The output shape is an external contract: evaluated before any other
//! editor-related code, it must install `self.MonacoEnvironment.getWorker`
//! returning a fresh worker per call. The wrapper, the `?worker` import
//! suffix, and the banner comments are reproduced exactly; only the import
//! list and the dispatch chain vary with the artifact.

use crate::synth::InjectionArtifact;
use crate::workers;
use itertools::Itertools;

pub const BANNER_START: &str = "/* --- Monaco Universal Plugin Start --- */";
pub const BANNER_END: &str = "/* --- Monaco Universal Plugin End --- */";

/// Renders the artifact into the prologue prepended to the entry module.
///
/// The one template of the crate. Referentially transparent: the same
/// artifact always renders to identical bytes.
pub fn render(artifact: &InjectionArtifact) -> String {
  let imports = artifact
    .imports
    .iter()
    .map(|import| format!("import {} from '{}?worker';\n", import.binding, import.module_id))
    .join("");
  let dispatch = artifact
    .clauses
    .iter()
    .map(|clause| format!("if ({}) return new {}();\n    ", clause.condition, clause.binding))
    .join("");

  format!(
    "\n{BANNER_START}\n{imports}\nself.MonacoEnvironment = {{\n  getWorker(_, label) {{\n    \
     {dispatch}return new {fallback}();\n  }}\n}};\n{BANNER_END}\n",
    fallback = workers::EDITOR_WORKER_BINDING,
  )
}
