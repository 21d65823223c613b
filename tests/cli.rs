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
use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

use fs_extra::dir::CopyOptions;
use fs_extra::dir::copy;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde_json::Value;
use serde_json::json;

/// Copies the fake flutter script into `temp` and returns its path.
fn install_fake_flutter(temp: &Path) -> PathBuf {
  let options = CopyOptions::new();
  copy("tests/fixtures", temp, &options).unwrap();

  let program = temp.join("fixtures/fake_flutter/flutter");
  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();
  }
  program
}

fn flane_build(temp: &Path, flutter: &Path, context: &Path) -> Command {
  let mut cmd = Command::new(cargo::cargo_bin!("flane"));
  cmd
    .arg("build")
    .arg("--flutter-bin")
    .arg(flutter)
    .arg("--context")
    .arg(context)
    .current_dir(temp)
    .env("CLICOLOR", "0");
  cmd
}

#[test]
fn test_build_records_the_artifact_path() {
  let temp = tempdir().unwrap();
  let flutter = install_fake_flutter(temp.path());
  let context_path = temp.path().join("lane_context.json");

  let mut cmd = flane_build(temp.path(), &flutter, &context_path);
  cmd.arg("--build").arg("apk");

  cmd
    .assert()
    .success()
    .stdout(predicate::str::contains("app-release.apk"))
    .stderr(predicate::str::contains("Flutter Build Complete"));

  let context: Value = serde_json::from_str(&fs::read_to_string(&context_path).unwrap()).unwrap();
  let recorded = context["flutter_output"].as_str().unwrap();
  assert!(recorded.ends_with("build/app/outputs/flutter-apk/app-release.apk"));
  assert!(Path::new(recorded).is_absolute());
}

#[test]
fn test_build_argument_order_matches_the_tool_grammar() {
  let temp = tempdir().unwrap();
  let flutter = install_fake_flutter(temp.path());
  let context_path = temp.path().join("lane_context.json");
  let args_file = temp.path().join("args.txt");

  let mut cmd = flane_build(temp.path(), &flutter, &context_path);
  cmd
    .arg("--build")
    .arg("apk")
    .arg("--debug")
    .arg("--codesign")
    .arg("false")
    .arg("--build-number")
    .arg("42")
    .arg("--build-name")
    .arg("1.2.3")
    .arg("--build-flavor")
    .arg("prod")
    .arg("--target")
    .arg("lib/main.dart")
    .env("FAKE_FLUTTER_ARGS_FILE", &args_file);

  cmd.assert().success();

  let recorded = fs::read_to_string(&args_file).unwrap();
  assert_eq!(
    recorded.trim(),
    "build apk --debug --no-codesign --build-number 42 --build-name 1.2.3 --flavor prod --target lib/main.dart"
  );
}

#[test]
fn test_build_type_is_inferred_from_the_context_platform() {
  let temp = tempdir().unwrap();
  let flutter = install_fake_flutter(temp.path());
  let context_path = temp.path().join("lane_context.json");
  let args_file = temp.path().join("args.txt");

  fs::write(&context_path, json!({"platform_name": "android"}).to_string()).unwrap();

  let mut cmd = flane_build(temp.path(), &flutter, &context_path);
  cmd.env("FAKE_FLUTTER_ARGS_FILE", &args_file);

  cmd.assert().success();

  let recorded = fs::read_to_string(&args_file).unwrap();
  assert_eq!(recorded.trim(), "build apk");
}

#[test]
fn test_missing_build_type_fails_before_spawning_the_tool() {
  let temp = tempdir().unwrap();
  let flutter = install_fake_flutter(temp.path());
  let context_path = temp.path().join("lane_context.json");
  let args_file = temp.path().join("args.txt");

  let mut cmd = flane_build(temp.path(), &flutter, &context_path);
  cmd.env("FAKE_FLUTTER_ARGS_FILE", &args_file);

  cmd.assert().failure().stderr(predicate::str::contains(
    "cannot be inferred from the pipeline context",
  ));

  // The tool was never invoked and no context was written.
  assert!(!args_file.exists());
  assert!(!context_path.exists());
}

#[test]
fn test_tool_failure_propagates_and_skips_the_context_write() {
  let temp = tempdir().unwrap();
  let flutter = install_fake_flutter(temp.path());
  let context_path = temp.path().join("lane_context.json");

  let mut cmd = flane_build(temp.path(), &flutter, &context_path);
  cmd.arg("--build").arg("apk").env("FAKE_FLUTTER_STATUS", "1");

  cmd
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed with exit code"));

  assert!(!context_path.exists());
}

#[test]
fn test_unrecognized_tool_output_is_an_advisory() {
  let temp = tempdir().unwrap();
  let flutter = install_fake_flutter(temp.path());
  let context_path = temp.path().join("lane_context.json");

  let mut cmd = flane_build(temp.path(), &flutter, &context_path);
  cmd
    .arg("--build")
    .arg("apk")
    .env("FAKE_FLUTTER_OUTPUT", "Build failed!");

  cmd
    .assert()
    .success()
    .stderr(predicate::str::contains("Cannot parse built file path"));

  // The run still completed and wrote the context, minus the output key.
  let context: Value = serde_json::from_str(&fs::read_to_string(&context_path).unwrap()).unwrap();
  assert!(context.get("flutter_output").is_none());
}

#[test]
fn test_profile_and_env_layering() {
  let temp = tempdir().unwrap();
  let flutter = install_fake_flutter(temp.path());
  let context_path = temp.path().join("lane_context.json");
  let args_file = temp.path().join("args.txt");
  let profile = temp.path().join("profile.json");

  fs::write(
    &profile,
    json!({"build": "appbundle", "codesign": false}).to_string(),
  )
  .unwrap();

  let mut cmd = flane_build(temp.path(), &flutter, &context_path);
  cmd
    .arg("--config")
    .arg(&profile)
    .env("FL_FLUTTER_BUILD_NAME", "9.9.9")
    .env("FAKE_FLUTTER_ARGS_FILE", &args_file);

  cmd.assert().success();

  let recorded = fs::read_to_string(&args_file).unwrap();
  assert_eq!(
    recorded.trim(),
    "build appbundle --no-codesign --build-name 9.9.9"
  );

  // Environment variables take precedence over the profile.
  let mut cmd = flane_build(temp.path(), &flutter, &context_path);
  cmd
    .arg("--config")
    .arg(&profile)
    .env("FL_FLUTTER_BUILD", "apk")
    .env("FAKE_FLUTTER_ARGS_FILE", &args_file);

  cmd.assert().success();

  let recorded = fs::read_to_string(&args_file).unwrap();
  assert_eq!(recorded.trim(), "build apk --no-codesign");
}

#[test]
fn test_output_prints_the_recorded_path() {
  let temp = tempdir().unwrap();
  let context_path = temp.path().join("lane_context.json");

  fs::write(
    &context_path,
    json!({"flutter_output": "/work/app-release.apk"}).to_string(),
  )
  .unwrap();

  let mut cmd = Command::new(cargo::cargo_bin!("flane"));
  cmd
    .arg("output")
    .arg("--context")
    .arg(&context_path)
    .env("CLICOLOR", "0");

  cmd
    .assert()
    .success()
    .stdout(predicate::str::contains("/work/app-release.apk"));
}

#[test]
fn test_output_fails_without_a_recorded_path() {
  let temp = tempdir().unwrap();
  let context_path = temp.path().join("lane_context.json");
  fs::write(&context_path, "{}").unwrap();

  let mut cmd = Command::new(cargo::cargo_bin!("flane"));
  cmd
    .arg("output")
    .arg("--context")
    .arg(&context_path)
    .env("CLICOLOR", "0");

  cmd.assert().failure().stderr(predicate::str::contains(
    "No built file path recorded in the pipeline context",
  ));
}
