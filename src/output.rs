use once_cell::sync::Lazy;
use regex::Regex;

/// Success line printed by "flutter build", e.g.
/// `Built build/app/outputs/flutter-apk/app-release.apk (21.4MB).`
///
/// Line-anchored and case-sensitive; the optional parenthesized size
/// annotation is discarded. This pattern is the compatibility contract
/// with the tool's human-readable output.
static BUILT_LINE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?m)^Built (.*?)(?: \([^)]*\))?\.$").expect("Invalid Pattern"));

/// Extracts the built artifact path from the tool's stdout, if present.
///
/// Returns the path captured from the first matching line. Resolving and
/// recording the path is the caller's business; swapping the matching
/// strategy only ever touches this function.
pub fn extract_built_path(output: &str) -> Option<&str> {
  BUILT_LINE
    .captures(output)
    .and_then(|caps| caps.get(1))
    .map(|m| m.as_str())
}
