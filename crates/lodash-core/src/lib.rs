//! # lodash-core
//!
//! Small, independent helpers over collections, strings, numbers and JSON
//! value trees, modeled on the JavaScript utility library of the same name.
//!
//! Every function is a pure transformation: inputs are borrowed, results are
//! freshly allocated, nothing is mutated and nothing is shared between calls.
//! The dynamically-typed "value tree" is [`serde_json::Value`].
//!
//! ## Quick start
//!
//! ```rust
//! use serde_json::json;
//! use lodash_core::{chunk, get, has, kebab_case};
//!
//! let data = json!({"user": {"name": "Ada", "tags": ["math", "engines"]}});
//! assert_eq!(get(&data, "user.tags[1]", &json!(null)), &json!("engines"));
//! assert!(!has(&data, "user.email"));
//!
//! assert_eq!(chunk(&[1, 2, 3], 2).unwrap(), vec![vec![1, 2], vec![3]]);
//! assert_eq!(kebab_case("fooBarBaz"), "foo-bar-baz");
//! ```
//!
//! ## Modules
//!
//! - [`path`] — path string → segment keys (`a.b[0]['c']`)
//! - [`accessor`] — `get` / `has` / `resolve` over a value tree
//! - [`deep`] — `clone_deep` (value trees and typed containers), `flatten_deep`
//! - [`array`] — chunk, compact, concat, difference, uniq, drop/take
//! - [`string`] — case conversion, padding, truncation, trimming
//! - [`object`] — pick/omit, keys/values/entries, map_keys/map_values, invert
//! - [`number`] — clamp, in_range, random
//! - [`functional`] — times, range
//! - [`types`] — emptiness and null checks
//! - [`error`] — validation errors

pub mod accessor;
pub mod array;
pub mod deep;
pub mod error;
pub mod functional;
pub mod number;
pub mod object;
pub mod path;
pub mod string;
pub mod types;

pub use accessor::{get, has, resolve};
pub use array::{
    chunk, compact, concat, difference, difference_by, drop, drop_right, take, take_right, uniq,
    uniq_by, DEFAULT_COUNT,
};
pub use deep::{clone_deep, clone_value, flatten_deep, CloneDeep};
pub use error::LodashError;
pub use functional::{range, range_step, times, times_each};
pub use number::{clamp, in_range, random, random_with, RandomNumber};
pub use object::{
    entries, invert, invert_by, keys, map_keys, map_values, omit, omit_by, pick, pick_by, values,
};
pub use path::parse_path;
pub use string::{
    camel_case, kebab_case, lower_first, pad_end, pad_start, snake_case, trim, truncate,
    truncate_default, upper_first,
};
pub use types::{is_empty, is_not_empty, is_null, is_not_null};
