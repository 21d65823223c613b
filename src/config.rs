use crate::cli::BuildOpts;
use crate::error::ConfigError;
use figment::Figment;
use figment::providers::Env;
use figment::providers::Format;
use figment::providers::Json;
use figment::providers::Serialized;
use serde::Deserialize;
use serde::Serialize;

/// The configuration record for one "flutter build" invocation.
///
/// Every field is optional. The only transitive requirement is that a
/// build-target token must be derivable, either from [`build`](Self::build)
/// or from the platform the pipeline context advertises (see
/// [`compose_build_args`](crate::build::compose_build_args)).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
  /// Type of Flutter build (e.g. apk, appbundle, ios).
  pub build: Option<String>,

  /// Build a Debug version of the app. Unset means release.
  pub debug: Option<bool>,

  /// `Some(false)` skips iOS app signing. Unset or `Some(true)` signs as
  /// usual.
  pub codesign: Option<bool>,

  /// Override build number specified in pubspec.yaml.
  pub build_number: Option<u64>,

  /// Override build name specified in pubspec.yaml.
  ///
  /// App Store uploads require at most 3 integers separated by a dot (".");
  /// that is the store's rule and is not enforced here.
  pub build_name: Option<String>,

  /// Build flavor, passed through as `--flavor`.
  pub build_flavor: Option<String>,

  /// The main entry-point file of the application.
  pub target: Option<String>,
}

impl BuildConfig {
  /// Resolves the effective configuration for a build invocation.
  ///
  /// Precedence, lowest to highest: built-in defaults, the JSON profile
  /// passed as `--config`, environment variables prefixed `FL_FLUTTER_`
  /// (e.g. `FL_FLUTTER_BUILD`, `FL_FLUTTER_BUILD_NUMBER`), and finally
  /// explicit command-line options.
  pub fn resolve(opts: &BuildOpts) -> Result<Self, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(BuildConfig::default()));

    if let Some(profile) = &opts.config {
      figment = figment.merge(Json::file_exact(profile));
    }

    let config = figment.merge(Env::prefixed("FL_FLUTTER_")).extract()?;
    Ok(overlay(config, opts))
  }
}

/// Applies explicit command-line options on top of a resolved config.
fn overlay(mut config: BuildConfig, opts: &BuildOpts) -> BuildConfig {
  if opts.build.is_some() {
    config.build = opts.build.clone();
  }
  if opts.debug.is_some() {
    config.debug = opts.debug;
  }
  if opts.codesign.is_some() {
    config.codesign = opts.codesign;
  }
  if opts.build_number.is_some() {
    config.build_number = opts.build_number;
  }
  if opts.build_name.is_some() {
    config.build_name = opts.build_name.clone();
  }
  if opts.build_flavor.is_some() {
    config.build_flavor = opts.build_flavor.clone();
  }
  if opts.target.is_some() {
    config.target = opts.target.clone();
  }
  config
}
