//! Recursive rebuilds of nested containers: deep clone and deep flatten.
//!
//! The JSON tree is handled by pattern matching on [`Value`]. Typed Rust
//! containers go through the [`CloneDeep`] trait, which recurses through
//! sequences, fixed-size arrays, maps and sets, and re-allocates shared
//! pointers (`Rc`, `Arc`, `RefCell`) so that a copy never aliases a mutable
//! container of the original.
//!
//! Limitations of the typed traversal:
//!
//! - Cyclic structures (an `Rc<RefCell<_>>` graph pointing back at itself)
//!   are not supported: the traversal would not terminate.
//! - Cloning a `RefCell` takes a shared borrow, so it panics if the cell is
//!   mutably borrowed at that moment.

use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

/// Types that can produce a copy sharing no mutable container with `self`.
pub trait CloneDeep {
    /// Rebuild `self`, recursing into every nested container.
    fn clone_deep(&self) -> Self;
}

/// Deep-clone any [`CloneDeep`] value.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use lodash_core::clone_deep;
///
/// let original = vec![Rc::new(RefCell::new(vec![1, 2]))];
/// let copy = clone_deep(&original);
/// copy[0].borrow_mut().push(3);
///
/// assert_eq!(*original[0].borrow(), vec![1, 2]);
/// assert_eq!(*copy[0].borrow(), vec![1, 2, 3]);
/// ```
pub fn clone_deep<T: CloneDeep>(value: &T) -> T {
    value.clone_deep()
}

/// Rebuild a JSON value tree.
///
/// Arrays and objects are reconstructed element by element; object keys are
/// copied as-is and only values are recursed into. Scalars are copied.
pub fn clone_value(value: &Value) -> Value {
    match value {
        Value::Array(arr) => Value::Array(arr.iter().map(clone_value).collect()),
        Value::Object(map) => Value::Object(clone_map(map)),
        scalar => scalar.clone(),
    }
}

fn clone_map(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), clone_value(value)))
        .collect()
}

/// Flatten arbitrarily nested arrays into one flat vector.
///
/// Leaves are collected depth-first, left to right. `null` elements are
/// dropped at every depth; objects and other scalars are kept as leaves.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use lodash_core::flatten_deep;
///
/// let nested = json!([1, [2, [3, 4], 5], 6]);
/// let flat = flatten_deep(nested.as_array().unwrap());
/// assert_eq!(flat, vec![json!(1), json!(2), json!(3), json!(4), json!(5), json!(6)]);
/// ```
pub fn flatten_deep(items: &[Value]) -> Vec<Value> {
    let mut out = Vec::new();
    flatten_into(items, &mut out);
    out
}

fn flatten_into(items: &[Value], out: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::Array(inner) => flatten_into(inner, out),
            Value::Null => {}
            leaf => out.push(leaf.clone()),
        }
    }
}

impl CloneDeep for Value {
    fn clone_deep(&self) -> Self {
        clone_value(self)
    }
}

impl CloneDeep for Map<String, Value> {
    fn clone_deep(&self) -> Self {
        clone_map(self)
    }
}

impl<T: CloneDeep> CloneDeep for Vec<T> {
    fn clone_deep(&self) -> Self {
        self.iter().map(CloneDeep::clone_deep).collect()
    }
}

impl<T: CloneDeep, const N: usize> CloneDeep for [T; N] {
    fn clone_deep(&self) -> Self {
        std::array::from_fn(|i| self[i].clone_deep())
    }
}

impl<T: CloneDeep> CloneDeep for Option<T> {
    fn clone_deep(&self) -> Self {
        self.as_ref().map(CloneDeep::clone_deep)
    }
}

impl<T: CloneDeep> CloneDeep for Box<T> {
    fn clone_deep(&self) -> Self {
        Box::new((**self).clone_deep())
    }
}

// Shared pointers get a fresh allocation; cloning the pointer itself would
// leave both trees aliasing the same container.
impl<T: CloneDeep> CloneDeep for Rc<T> {
    fn clone_deep(&self) -> Self {
        Rc::new((**self).clone_deep())
    }
}

impl<T: CloneDeep> CloneDeep for Arc<T> {
    fn clone_deep(&self) -> Self {
        Arc::new((**self).clone_deep())
    }
}

/// Panics if the cell is currently mutably borrowed (see the module docs).
impl<T: CloneDeep> CloneDeep for RefCell<T> {
    fn clone_deep(&self) -> Self {
        RefCell::new(self.borrow().clone_deep())
    }
}

impl<K, V, S> CloneDeep for HashMap<K, V, S>
where
    K: Clone + Eq + Hash,
    V: CloneDeep,
    S: BuildHasher + Clone,
{
    fn clone_deep(&self) -> Self {
        let mut out = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for (key, value) in self {
            out.insert(key.clone(), value.clone_deep());
        }
        out
    }
}

impl<K: Clone + Ord, V: CloneDeep> CloneDeep for BTreeMap<K, V> {
    fn clone_deep(&self) -> Self {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone_deep()))
            .collect()
    }
}

impl<T, S> CloneDeep for HashSet<T, S>
where
    T: CloneDeep + Eq + Hash,
    S: BuildHasher + Clone,
{
    fn clone_deep(&self) -> Self {
        let mut out = HashSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for item in self {
            out.insert(item.clone_deep());
        }
        out
    }
}

impl<T: CloneDeep + Ord> CloneDeep for BTreeSet<T> {
    fn clone_deep(&self) -> Self {
        self.iter().map(CloneDeep::clone_deep).collect()
    }
}

macro_rules! leaf_clone_deep {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CloneDeep for $ty {
                fn clone_deep(&self) -> Self {
                    self.clone()
                }
            }
        )*
    };
}

leaf_clone_deep!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, &'static str,
);
