use crate::error::ContextError;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Shared key-value state passed between successive pipeline steps.
///
/// The context lives in a JSON file for the duration of one pipeline run.
/// This action reads the platform and version keys that earlier steps may
/// have filled in, and records the built artifact path under
/// `flutter_output`. Keys owned by other steps survive a load/store cycle
/// untouched.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Context {
  /// Platform selected for the current pipeline run (e.g. "ios", "android").
  #[serde(skip_serializing_if = "Option::is_none")]
  pub platform_name: Option<String>,

  /// Platform to fall back to when no platform was selected explicitly.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default_platform: Option<String>,

  /// Build number recorded by an earlier versioning step.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub build_number: Option<u64>,

  /// Version number recorded by an earlier versioning step.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version_number: Option<String>,

  /// Absolute path of the most recently built artifact.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub flutter_output: Option<PathBuf>,

  /// Keys recorded by other pipeline steps, carried through verbatim.
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl Context {
  /// Loads the context file, returning an empty context if the file does
  /// not exist yet (e.g. this is the first step of the run).
  pub fn load(path: &Path) -> Result<Self, ContextError> {
    if !path.exists() {
      return Ok(Self::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ContextError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Ok(serde_json::from_str(&content)?)
  }

  /// Writes the context back for later pipeline steps to consume.
  pub fn store(&self, path: &Path) -> Result<(), ContextError> {
    let json = serde_json::to_string_pretty(self).map_err(ContextError::Serialize)?;
    fs::write(path, json).map_err(|source| ContextError::Write {
      path: path.to_path_buf(),
      source,
    })
  }

  /// The platform advertised by the host pipeline, if any.
  pub fn platform(&self) -> Option<&str> {
    self
      .platform_name
      .as_deref()
      .or(self.default_platform.as_deref())
  }
}
