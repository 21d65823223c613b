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
use crate::error::BuildError;
use std::future::Future;
use std::path::Path;
use std::path::PathBuf;
use std::process::Output;
use tokio::process::Command;

/// Captured result of one external tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
  pub success: bool,
  pub code: Option<i32>,
  pub stdout: String,
  pub stderr: String,
}

impl From<Output> for ToolOutput {
  fn from(output: Output) -> Self {
    Self {
      success: output.status.success(),
      code: output.status.code(),
      stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
      stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
  }
}

/// Runs the external build tool and captures its output.
///
/// The trait is the seam between argument composition and process
/// execution: tests substitute a canned runner, since the real flutter
/// tool is not available in CI.
pub trait ToolRunner {
  /// Invokes the tool with `subcommand` followed by `args`, waiting until
  /// the process exits and its output is fully drained.
  fn run(
    &self,
    subcommand: &str,
    args: &[String],
  ) -> impl Future<Output = Result<ToolOutput, BuildError>>;
}

/// [`ToolRunner`] that invokes the flutter CLI as a subprocess.
#[derive(Debug, Clone)]
pub struct FlutterRunner {
  program: PathBuf,
}

impl FlutterRunner {
  pub fn new(program: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
    }
  }

  /// The executable this runner invokes.
  pub fn program(&self) -> &Path {
    &self.program
  }
}

impl ToolRunner for FlutterRunner {
  async fn run(&self, subcommand: &str, args: &[String]) -> Result<ToolOutput, BuildError> {
    let mut command = Command::new(&self.program);
    command.arg(subcommand).args(args);

    tracing::debug!(cmd = ?command, "Spawning flutter");
    let output = command.output().await.map_err(|source| BuildError::Exec {
      program: self.program.clone(),
      source,
    })?;

    Ok(ToolOutput::from(output))
  }
}
