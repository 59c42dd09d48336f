//! The plugin object and its host-facing hook surface.
//!
//! Configuration is captured immutably at construction; every hook is a pure
//! function of that configuration and its arguments, so the host may call
//! hooks in any order or interleaving without locking. The host pipeline
//! itself is external — the boundary types here ([`Enforce`],
//! [`ConfigContribution`], [`TransformResult`]) are plain data the embedding
//! build script forwards to it.

use crate::emit;
use crate::paths;
use crate::synth;
use serde::Deserialize;
use serde::Serialize;

/// Execution-priority marker: the plugin asks to run before the host's
/// default resolution/transform stages so the injected imports are visible to
/// subsequent processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
  Pre,
  Post,
}

/// Contribution returned from the configuration hook: module ids the host's
/// dependency pre-resolution step should eagerly process. May contain
/// duplicates; the host deduplicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfigContribution {
  pub optimize_deps_include: Vec<&'static str>,
}

/// Replacement produced by the transform hook.
///
/// `map` is always `None`: source positions inside the injected prologue are
/// deliberately unmapped boilerplate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransformResult {
  pub code: String,
  pub map: Option<String>,
}

/// User-supplied configuration, validated only by defaulting: absent fields
/// fall back to the defaults below and are never rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectOptions {
  /// Entry module the prologue is injected into, suffix-matched against
  /// candidate paths.
  pub entry: String,
  /// Ordered language list; duplicates and unknown identifiers tolerated.
  pub languages: Vec<String>,
  /// When true, a diagnostic line names the matched file on each injection.
  /// Purely observational.
  pub debug: bool,
}

impl Default for InjectOptions {
  fn default() -> Self {
    InjectOptions {
      entry: "src/main.ts".to_string(),
      languages: vec![
        "json".to_string(),
        "css".to_string(),
        "html".to_string(),
        "typescript".to_string(),
      ],
      debug: false,
    }
  }
}

/// The composed plugin: worker table, synthesizer, and entry gate behind the
/// two hooks the host pipeline invokes.
#[derive(Clone, Debug)]
pub struct MonacoInjectPlugin {
  entry: String,
  languages: Vec<String>,
  debug: bool,
}

impl MonacoInjectPlugin {
  pub fn new(options: InjectOptions) -> Self {
    MonacoInjectPlugin {
      entry: options.entry,
      languages: options.languages,
      debug: options.debug,
    }
  }

  /// Fixed plugin identity presented to the host.
  pub fn name(&self) -> &'static str {
    "inject-monaco"
  }

  /// Ordering declaration; always [`Enforce::Pre`].
  pub fn enforce(&self) -> Enforce {
    Enforce::Pre
  }

  /// Configuration-contribution hook, invoked once at build setup.
  pub fn config(&self) -> ConfigContribution {
    ConfigContribution {
      optimize_deps_include: synth::pre_resolution_list(&self.languages),
    }
  }

  /// Transform hook, invoked once per candidate source file.
  ///
  /// Returns `None` for every file but the configured entry, leaving it
  /// untouched. On the entry, returns the synthesized prologue concatenated
  /// before the original source, with no source map.
  pub fn transform(&self, code: &str, id: &str) -> Option<TransformResult> {
    if !paths::matches_entry(&self.entry, id) {
      return None;
    }
    if self.debug {
      tracing::info!(file = %id, "injecting monaco worker bootstrap");
    }
    let artifact = synth::synthesize(&self.languages);
    Some(TransformResult {
      code: format!("{}{}", emit::render(&artifact), code),
      map: None,
    })
  }
}

impl Default for MonacoInjectPlugin {
  fn default() -> Self {
    MonacoInjectPlugin::new(InjectOptions::default())
  }
}
