use crate::command::ToolRunner;
use crate::config::BuildConfig;
use crate::context::Context;
use crate::error::BuildError;
use crate::error::ConfigError;
use crate::error::FlutterlaneError;
use crate::output::extract_built_path;
use std::path::PathBuf;

/// Maps a host pipeline platform to the build type "flutter build" expects.
fn platform_build_token(platform: &str) -> Option<&'static str> {
  match platform {
    "ios" => Some("ios"),
    "android" => Some("apk"),
    _ => None,
  }
}

/// Assembles the argument vector for "flutter build".
///
/// The first element is always the build-target token, taken from the
/// explicit `build` option or inferred from the platform the pipeline
/// context advertises. The remaining flags mirror the tool's CLI grammar;
/// their order is part of the contract.
pub fn compose_build_args(
  config: &BuildConfig,
  context: &Context,
) -> Result<Vec<String>, ConfigError> {
  let mut build_args = Vec::new();

  if let Some(build) = &config.build {
    build_args.push(build.clone());
  } else {
    let token = context
      .platform()
      .and_then(platform_build_token)
      .ok_or(ConfigError::MissingBuildTarget)?;
    build_args.push(token.to_string());
  }

  if config.debug.unwrap_or(false) {
    build_args.push("--debug".to_string());
  }

  if config.codesign == Some(false) {
    build_args.push("--no-codesign".to_string());
  }

  if let Some(build_number) = config.build_number.or(context.build_number) {
    build_args.push("--build-number".to_string());
    build_args.push(build_number.to_string());
  }

  if let Some(build_name) = config
    .build_name
    .as_deref()
    .or(context.version_number.as_deref())
  {
    build_args.push("--build-name".to_string());
    build_args.push(build_name.to_string());
  }

  if let Some(build_flavor) = &config.build_flavor {
    build_args.push("--flavor".to_string());
    build_args.push(build_flavor.clone());
  }

  if let Some(target) = &config.target {
    build_args.push("--target".to_string());
    build_args.push(target.clone());
  }

  Ok(build_args)
}

/// Runs "flutter build" and records the built artifact path.
///
/// On a successful exit the tool's stdout is scanned for the `Built <path>.`
/// line; a hit is resolved to an absolute path and written to the context's
/// `flutter_output` key. Output without a recognizable line is an advisory,
/// not an error. A failing exit status is always an error and leaves the
/// context untouched.
pub async fn run_build<R: ToolRunner>(
  config: &BuildConfig,
  context: &mut Context,
  runner: &R,
) -> Result<Option<PathBuf>, FlutterlaneError> {
  let build_args = compose_build_args(config, context)?;

  tracing::info!(args = ?build_args, "Running \"flutter build\"");
  let output = runner.run("build", &build_args).await?;

  if !output.success {
    tracing::error!(code = ?output.code, "\"flutter build\" failed");
    return Err(
      BuildError::ToolFailed {
        code: output.code,
        stdout: output.stdout,
        stderr: output.stderr,
      }
      .into(),
    );
  }

  match extract_built_path(&output.stdout) {
    Some(path) => {
      let absolute = std::path::absolute(path).map_err(|source| BuildError::ResolveOutput {
        path: path.to_string(),
        source,
      })?;
      tracing::info!(path = %absolute.display(), "Recorded built file path");
      context.flutter_output = Some(absolute);
    }
    None => {
      tracing::warn!("Cannot parse built file path from \"flutter build\" output");
    }
  }

  Ok(context.flutter_output.clone())
}
