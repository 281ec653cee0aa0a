//! String helpers: case conversion, padding, truncation and trimming.
//!
//! Lengths are counted in `char`s (Unicode scalar values), never bytes, so
//! padding and truncation never split a multi-byte character.

/// Characters removed by [`trim`] when no explicit set is given.
pub const DEFAULT_TRIM_CHARS: &str = " \t\n\r\u{000B}\u{000C}\u{00A0}\u{1680}\u{2000}\u{2001}\
\u{2002}\u{2003}\u{2004}\u{2005}\u{2006}\u{2007}\u{2008}\u{2009}\u{200A}\u{2028}\u{2029}\u{202F}\
\u{205F}\u{3000}\u{FEFF}";

/// Length used by [`truncate_default`].
pub const DEFAULT_TRUNCATE_LENGTH: usize = 30;

/// Omission marker used by [`truncate_default`].
pub const DEFAULT_OMISSION: &str = "...";

/// Split a string into words.
///
/// Runs of non-alphanumeric characters separate words, and a new word starts
/// wherever a lowercase letter or digit is followed by an uppercase letter
/// (`fooBar` -> `foo`, `Bar`). A run of capitals stays one word.
fn words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        if let Some(p) = prev {
            if (p.is_lowercase() || p.is_numeric()) && c.is_uppercase() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    upper_first(&word.to_lowercase())
}

/// Convert to `camelCase`.
///
/// ```
/// use lodash_core::camel_case;
///
/// assert_eq!(camel_case("Foo Bar"), "fooBar");
/// assert_eq!(camel_case("__FOO_BAR__"), "fooBar");
/// assert_eq!(camel_case("foo-bar_baz"), "fooBarBaz");
/// ```
pub fn camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in words(s).iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// Convert to `kebab-case`.
pub fn kebab_case(s: &str) -> String {
    join_lowercase(s, "-")
}

/// Convert to `snake_case`.
pub fn snake_case(s: &str) -> String {
    join_lowercase(s, "_")
}

fn join_lowercase(s: &str, separator: &str) -> String {
    words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Uppercase the first character, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Left-pad `s` with `pad` until it is `length` characters long.
///
/// Strings already at or beyond `length` are returned unchanged.
pub fn pad_start(s: &str, length: usize, pad: char) -> String {
    let missing = length.saturating_sub(s.chars().count());
    let mut out = String::with_capacity(s.len() + missing * pad.len_utf8());
    out.extend(std::iter::repeat_n(pad, missing));
    out.push_str(s);
    out
}

/// Right-pad `s` with `pad` until it is `length` characters long.
pub fn pad_end(s: &str, length: usize, pad: char) -> String {
    let missing = length.saturating_sub(s.chars().count());
    let mut out = String::with_capacity(s.len() + missing * pad.len_utf8());
    out.push_str(s);
    out.extend(std::iter::repeat_n(pad, missing));
    out
}

/// Shorten `s` to at most `length` characters, ending in `omission`.
///
/// When `s` fits it is returned unchanged. Otherwise the first
/// `length - omission.len()` characters are kept (none, if the omission is
/// longer than `length`) and `omission` is appended.
///
/// ```
/// use lodash_core::truncate;
///
/// assert_eq!(truncate("Hello world", 8, "..."), "Hello...");
/// assert_eq!(truncate("Hi", 10, "..."), "Hi");
/// ```
pub fn truncate(s: &str, length: usize, omission: &str) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }
    let keep = length.saturating_sub(omission.chars().count());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(omission);
    out
}

/// [`truncate`] to 30 characters with a `"..."` omission.
pub fn truncate_default(s: &str) -> String {
    truncate(s, DEFAULT_TRUNCATE_LENGTH, DEFAULT_OMISSION)
}

/// Remove leading and trailing characters found in `chars`.
///
/// With `chars` set to `None` the [`DEFAULT_TRIM_CHARS`] whitespace set is
/// used; an empty `chars` trims nothing. A `None` input yields an empty
/// string.
///
/// ```
/// use lodash_core::trim;
///
/// assert_eq!(trim(Some("###hello###"), Some("#")), "hello");
/// assert_eq!(trim(Some("\n\t hello \n"), None), "hello");
/// assert_eq!(trim(None, None), "");
/// ```
pub fn trim(s: Option<&str>, chars: Option<&str>) -> String {
    let Some(s) = s else {
        return String::new();
    };
    let set = chars.unwrap_or(DEFAULT_TRIM_CHARS);
    s.trim_matches(|c: char| set.contains(c)).to_string()
}
