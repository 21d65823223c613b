use clap::Args;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Pipeline actions for building Flutter applications")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Run "flutter build" and record the built artifact path.
  Build(BuildOpts),

  /// Print the artifact path recorded by a previous build step.
  Output {
    /// Path to the shared pipeline context file.
    #[arg(long, env = "FLUTTERLANE_CONTEXT", default_value = "lane_context.json")]
    context: PathBuf,
  },
}

#[derive(Debug, Args)]
pub struct BuildOpts {
  /// Type of Flutter build (e.g. apk, appbundle, ios).
  #[arg(long)]
  pub build: Option<String>,

  /// Build a Debug version of the app if true.
  #[arg(long, num_args = 0..=1, default_missing_value = "true")]
  pub debug: Option<bool>,

  /// Set to false to skip iOS app signing. This may be useful e.g. on CI
  /// or when the app is signed later by a dedicated pipeline step.
  #[arg(long, num_args = 0..=1, default_missing_value = "true")]
  pub codesign: Option<bool>,

  /// Override build number specified in pubspec.yaml.
  #[arg(long)]
  pub build_number: Option<u64>,

  /// Override build name specified in pubspec.yaml.
  /// NOTE: for App Store, build name must be in the format of at most 3
  /// integers separated by a dot (".").
  #[arg(long)]
  pub build_name: Option<String>,

  /// Set build flavor.
  #[arg(long)]
  pub build_flavor: Option<String>,

  /// The main entry-point file of the application.
  #[arg(long)]
  pub target: Option<String>,

  /// Path to a JSON profile providing default values for the options above.
  #[arg(long, env = "FLUTTERLANE_CONFIG")]
  pub config: Option<PathBuf>,

  /// Path to the shared pipeline context file.
  #[arg(long, env = "FLUTTERLANE_CONTEXT", default_value = "lane_context.json")]
  pub context: PathBuf,

  /// The flutter executable to invoke.
  #[arg(long, env = "FLUTTER_BIN", default_value = "flutter")]
  pub flutter_bin: PathBuf,
}
