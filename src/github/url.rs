//! GitHub URL normalization and repository-identity derivation.
//!
//! Turns user-submitted GitHub references (HTTP(S) URLs, SSH remotes,
//! scheme-less forms) into the bare `owner/repo` string and the trailing
//! repository name that becomes a project's canonical identity.
// Allow expect() on static regex patterns - these are guaranteed to compile
#![allow(clippy::expect_used)]

use regex::Regex;
use std::sync::LazyLock;

/// Leading protocol-and-host prefix of a GitHub reference.
///
/// Matches `https://github.com`, `http://github.com`, `git://github.com`,
/// the scheme-less `://github.com`, each optionally with `www.`, and the
/// SSH form `git@github.com`, followed by `:` or `/`.
static HOST_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(((https|http|git)?://(www\.)?)|git@)github\.com(:|/)")
        .expect("static regex: github host prefix")
});

/// Trailing `.git` or `/` at the end of a reference.
static TRAILING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\.git|/)$").expect("static regex: trailing .git or slash"));

/// Shape a submitted repository URL must have to be accepted at creation.
///
/// Scheme `http` or `https`, host `github.com`, path `/<owner>/<repo>`
/// with word characters and hyphens (dots also allowed in the repo
/// segment), optional trailing slash. Case-insensitive.
static SUBMITTED_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://github\.com/[\w-]+/[\w.-]+/?$")
        .expect("static regex: submitted repository URL")
});

/// Normalizes a GitHub reference to the bare `owner/repo` form.
///
/// Applies two passes unconditionally, in order:
/// 1. strip one leading host prefix (HTTP(S), `git://`, scheme-less, or
///    SSH `git@github.com:`),
/// 2. strip one trailing `.git` or `/`.
///
/// Never fails: input that matches neither prefix form passes through with
/// only the trailing strip applied. That leniency is deliberate - callers
/// must not assume a clean `owner/repo` pair for arbitrary input.
/// Idempotent on already-normalized references.
///
/// # Examples
///
/// ```rust
/// use causeway::github::normalize_github_url;
///
/// assert_eq!(
///     normalize_github_url("git@github.com:acme/widget-factory.git"),
///     "acme/widget-factory"
/// );
/// assert_eq!(
///     normalize_github_url("https://www.github.com/acme/widget/"),
///     "acme/widget"
/// );
/// ```
#[must_use]
pub fn normalize_github_url(url: &str) -> String {
    let stripped = HOST_PREFIX.replace(url, "");
    TRAILING.replace(&stripped, "").into_owned()
}

/// Derives the repository name from a submitted GitHub URL.
///
/// The result is the final path segment of the normalized reference and
/// becomes the project's `github_repo`. Computed exactly once by
/// [`Project::create`](crate::models::Project::create) before first
/// persistence.
#[must_use]
pub fn derive_github_repo(submitted_url: &str) -> String {
    let normalized = normalize_github_url(submitted_url);
    normalized
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Returns `true` if a submitted URL has the accepted repository shape.
///
/// This is the creation-time validation gate; normalization itself stays
/// lenient and accepts anything.
#[must_use]
pub fn is_valid_repo_url(url: &str) -> bool {
    SUBMITTED_URL.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("https://github.com/acme/widget", "acme/widget"; "https")]
    #[test_case("http://github.com/acme/widget", "acme/widget"; "http")]
    #[test_case("git://github.com/acme/widget", "acme/widget"; "git protocol")]
    #[test_case("git@github.com:acme/widget", "acme/widget"; "ssh")]
    #[test_case("https://github.com/acme/widget.git", "acme/widget"; "https with git suffix")]
    #[test_case("git@github.com:acme/widget.git", "acme/widget"; "ssh with git suffix")]
    #[test_case("https://github.com/acme/widget/", "acme/widget"; "trailing slash")]
    #[test_case("https://www.github.com/acme/widget", "acme/widget"; "www host")]
    #[test_case("://github.com/acme/widget", "acme/widget"; "scheme-less")]
    #[test_case("HTTPS://GITHUB.COM/acme/widget", "acme/widget"; "uppercase host")]
    fn test_normalize(input: &str, expected: &str) {
        assert_eq!(normalize_github_url(input), expected);
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize_github_url("https://github.com/acme/widget.git");
        assert_eq!(normalize_github_url(&once), once);
    }

    #[test]
    fn test_normalize_garbage_passes_through() {
        // Lenient policy: no prefix match means only the trailing strip runs.
        assert_eq!(normalize_github_url("not-a-url"), "not-a-url");
        assert_eq!(normalize_github_url("not-a-url/"), "not-a-url");
        assert_eq!(
            normalize_github_url("https://gitlab.com/acme/widget.git"),
            "https://gitlab.com/acme/widget"
        );
    }

    #[test]
    fn test_normalize_strips_single_trailing_occurrence() {
        // Only one trailing token is removed per pass.
        assert_eq!(
            normalize_github_url("https://github.com/acme/widget.git/"),
            "acme/widget.git"
        );
    }

    #[test]
    fn test_derive_github_repo() {
        assert_eq!(
            derive_github_repo("https://github.com/CodeMontageHQ/codemontage"),
            "codemontage"
        );
        assert_eq!(
            derive_github_repo("git@github.com:acme/widget-factory.git"),
            "widget-factory"
        );
    }

    #[test_case("https://github.com/acme/widget", true; "plain https")]
    #[test_case("http://github.com/acme/widget", true; "plain http")]
    #[test_case("https://github.com/acme/widget/", true; "trailing slash ok")]
    #[test_case("https://github.com/acme/widget.js", true; "dot in repo")]
    #[test_case("HTTPS://GITHUB.COM/Acme/Widget", true; "case-insensitive")]
    #[test_case("git@github.com:acme/widget", false; "ssh rejected at creation")]
    #[test_case("https://github.com/acme", false; "missing repo segment")]
    #[test_case("https://github.com/acme/widget/extra", false; "extra segment")]
    #[test_case("not-a-url", false; "garbage")]
    #[test_case("", false; "empty")]
    fn test_is_valid_repo_url(input: &str, expected: bool) {
        assert_eq!(is_valid_repo_url(input), expected);
    }
}
