//! Build-time Monaco editor worker wiring for bundler entry modules.
//!
//! Web bundlers load Monaco's language analysis off the main thread through
//! background workers, and the editor expects a global
//! `self.MonacoEnvironment.getWorker` factory to be installed before any
//! editor code runs. This crate synthesizes that bootstrap from a configured
//! language list and splices it into the build's entry module:
//!
//! - [`workers`] resolves language identifiers to worker modules; aliases
//!   like `typescript`/`javascript` share one module and one dispatch
//!   predicate.
//! - [`synth`] builds the deduplicated structured artifact (one import, one
//!   dispatch clause per distinct worker module, first-encounter order) and
//!   the dependency pre-resolution list.
//! - [`emit`] renders the artifact to the textual prologue.
//! - [`paths`] suffix-matches the configured entry against candidate paths.
//! - [`plugin`] composes the above behind the two hooks a host pipeline
//!   invokes: a one-shot configuration contribution and a per-file transform.
//!
//! ```
//! use inject_monaco::InjectOptions;
//! use inject_monaco::MonacoInjectPlugin;
//!
//! let plugin = MonacoInjectPlugin::new(InjectOptions {
//!   languages: vec!["json".to_string(), "typescript".to_string()],
//!   ..InjectOptions::default()
//! });
//!
//! // Non-entry files pass through untouched.
//! assert!(plugin.transform("export {};", "/app/src/other.ts").is_none());
//!
//! // The entry module gains the worker bootstrap prologue.
//! let out = plugin.transform("export {};", "/app/src/main.ts").unwrap();
//! assert!(out.code.contains("self.MonacoEnvironment"));
//! assert!(out.code.ends_with("export {};"));
//! assert!(out.map.is_none());
//! ```

pub mod emit;
pub mod paths;
pub mod plugin;
pub mod synth;
pub mod workers;


pub use plugin::ConfigContribution;
pub use plugin::Enforce;
pub use plugin::InjectOptions;
pub use plugin::MonacoInjectPlugin;
pub use plugin::TransformResult;
pub use synth::DispatchClause;
pub use synth::ImportRecord;
pub use synth::InjectionArtifact;

/// Renders the worker bootstrap prologue for an ordered language list.
pub fn injection_code<S: AsRef<str>>(languages: &[S]) -> String {
  emit::render(&synth::synthesize(languages))
}
