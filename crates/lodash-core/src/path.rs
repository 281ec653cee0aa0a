//! Path parsing -- turn `a.b[0]['c']` into `["a", "b", "0", "c"]`.
//!
//! A path is scanned left to right for four kinds of token:
//!
//! - a bare run of characters other than `.`, `[` and `]` (`user`, `name`)
//! - a bracketed numeric index (`[0]`)
//! - a bracketed single-quoted key (`['first name']`)
//! - a bracketed double-quoted key (`["first name"]`)
//!
//! Every token yields exactly one segment with its brackets and quotes
//! stripped. Characters that belong to no token (the dots, a dangling `[`,
//! an empty `['']`) are skipped, never reported as an error, so `"a..b"`
//! parses to `["a", "b"]` and `"a["` to `["a"]`.

use regex::Regex;
use std::sync::LazyLock;

/// Alternatives are tried in order at each position; the bare-run branch can
/// never start at `[`, so bracketed forms are only reached from a `[`.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^.\[\]]+|\[([0-9]+)\]|\['([^']+)'\]|\["([^"]+)"\]"#).expect("valid regex")
});

/// Split a path string into its segment keys.
///
/// Segments borrow from `path`. Numeric indices are returned as their digit
/// text; it is up to the caller to interpret a segment as a sequence index.
///
/// # Examples
///
/// ```
/// use lodash_core::parse_path;
///
/// assert_eq!(parse_path("a.b[0]['c']"), vec!["a", "b", "0", "c"]);
/// assert_eq!(parse_path(r#"a["x.y"]"#), vec!["a", "x.y"]);
/// assert!(parse_path("").is_empty());
/// ```
pub fn parse_path(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut scanned = 0;

    for caps in TOKEN_RE.captures_iter(path) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > scanned {
            log_skipped(path, &path[scanned..whole.start()]);
        }
        scanned = whole.end();

        // Bracketed forms carry their key in a capture group; a bare run is
        // the whole match.
        let segment = caps
            .get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .unwrap_or(whole);
        segments.push(segment.as_str());
    }

    if scanned < path.len() {
        log_skipped(path, &path[scanned..]);
    }

    segments
}

fn log_skipped(path: &str, skipped: &str) {
    // Separator dots are the common case and carry no information.
    if skipped.chars().all(|c| c == '.') {
        return;
    }
    tracing::trace!(path, skipped, "path parser skipped unmatched characters");
}
