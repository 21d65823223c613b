// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error enum for the flutterlane library.
#[derive(Error, Debug)]
pub enum FlutterlaneError {
  #[error("Configuration error")]
  Config(#[from] ConfigError),

  #[error("Build action failed")]
  Build(#[from] BuildError),

  #[error("Pipeline context error")]
  Context(#[from] ContextError),
}

/// Errors related to configuration resolution (src/config.rs).
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error(
    "The \"build\" parameter is not specified and cannot be inferred from the pipeline context. Pass the build type explicitly (e.g. apk, appbundle, ios)."
  )]
  MissingBuildTarget,

  #[error("Failed to resolve build configuration")]
  Profile(#[from] figment::Error),
}

/// Errors related to invoking the external build tool (src/build.rs, src/command.rs).
#[derive(Error, Debug)]
pub enum BuildError {
  #[error("Failed to execute {program}")]
  Exec {
    program: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error(
    "\"flutter build\" failed with exit code {code:?}\n--- STDOUT ---\n{stdout}\n--- STDERR ---\n{stderr}"
  )]
  ToolFailed {
    code: Option<i32>,
    stdout: String,
    stderr: String,
  },

  #[error("Failed to resolve built file path: {path}")]
  ResolveOutput {
    path: String,
    #[source]
    source: std::io::Error,
  },
}

/// Errors related to the shared context store (src/context.rs).
#[derive(Error, Debug)]
pub enum ContextError {
  #[error("Failed to read context file: {path}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to parse context JSON")]
  Parse(#[from] serde_json::Error),

  #[error("Failed to serialize context")]
  Serialize(#[source] serde_json::Error),

  #[error("Failed to write context file: {path}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
