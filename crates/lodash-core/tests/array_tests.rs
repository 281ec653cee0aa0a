/// Sequence helper tests: chunk, compact, concat, difference, uniq, drop/take.
use lodash_core::{
    chunk, compact, concat, difference, difference_by, drop, drop_right, take, take_right, uniq,
    uniq_by, LodashError, DEFAULT_COUNT,
};
use serde_json::{json, Value};

fn arr(v: Value) -> Vec<Value> {
    v.as_array().unwrap().clone()
}

// ============================================================================
// 1. chunk
// ============================================================================

#[test]
fn chunk_even_split() {
    assert_eq!(chunk(&[1, 2, 3, 4], 2).unwrap(), vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn chunk_last_chunk_is_shorter() {
    assert_eq!(chunk(&[1, 2, 3, 4], 3).unwrap(), vec![vec![1, 2, 3], vec![4]]);
}

#[test]
fn chunk_empty_input() {
    let empty: [i32; 0] = [];
    assert!(chunk(&empty, 5).unwrap().is_empty());
}

#[test]
fn chunk_size_larger_than_input() {
    assert_eq!(chunk(&["a", "b"], 10).unwrap(), vec![vec!["a", "b"]]);
}

#[test]
fn chunk_rejects_zero_size() {
    assert_eq!(chunk(&[1, 2], 0), Err(LodashError::InvalidChunkSize(0)));
}

// ============================================================================
// 2. compact / concat
// ============================================================================

#[test]
fn compact_removes_falsy_values() {
    let input = arr(json!([0, 1, false, 2, "", "hello", null, true]));
    assert_eq!(Value::Array(compact(&input)), json!([1, 2, "hello", true]));
}

#[test]
fn compact_keeps_empty_containers() {
    let input = arr(json!([[], {}, 0.0, "0"]));
    assert_eq!(Value::Array(compact(&input)), json!([[], {}, "0"]));
}

#[test]
fn concat_splats_arrays_and_appends_scalars() {
    let out = concat(&[json!([1]), json!(2), json!([3, 4]), json!([5])]);
    assert_eq!(Value::Array(out), json!([1, 2, 3, 4, 5]));
}

#[test]
fn concat_splats_one_level_only() {
    let out = concat(&[json!([[1, 2]]), json!({"a": 1}), json!(null)]);
    assert_eq!(Value::Array(out), json!([[1, 2], {"a": 1}, null]));
}

#[test]
fn concat_keeps_duplicates() {
    let out = concat(&[json!([1, 1]), json!(1)]);
    assert_eq!(Value::Array(out), json!([1, 1, 1]));
}

// ============================================================================
// 3. difference / difference_by
// ============================================================================

#[test]
fn difference_excludes_values_from_all_lists() {
    assert_eq!(difference(&[1, 2, 3], &[vec![3, 4], vec![5]]), vec![1, 2]);
}

#[test]
fn difference_without_excludes_returns_base() {
    let none: [Vec<i32>; 0] = [];
    assert_eq!(difference(&[1, 2, 3], &none), vec![1, 2, 3]);
}

#[test]
fn difference_preserves_order_and_duplicates() {
    assert_eq!(
        difference(&[5, 2, 3, 3, 1, 2], &[vec![2]]),
        vec![5, 3, 3, 1]
    );
}

#[test]
fn difference_on_json_values() {
    let base = arr(json!([1, "a", {"k": 1}, null]));
    let exclude = arr(json!([{"k": 1}, null]));
    assert_eq!(Value::Array(difference(&base, &[exclude])), json!([1, "a"]));
}

#[test]
fn difference_by_floor() {
    let kept = difference_by(&[2.1_f64, 1.2, 3.3], &[vec![4.4, 2.5]], |x| x.floor() as i64);
    assert_eq!(kept, vec![1.2, 3.3]);
}

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: &'static str,
}

#[test]
fn difference_by_property_selector() {
    let users = [
        User { id: 1, name: "Alice" },
        User { id: 2, name: "Bob" },
        User { id: 3, name: "Charlie" },
    ];
    let others = vec![User { id: 2, name: "Robert" }, User { id: 4, name: "David" }];

    let kept = difference_by(&users, &[others], |u| u.id);
    assert_eq!(kept.iter().map(|u| u.name).collect::<Vec<_>>(), vec!["Alice", "Charlie"]);
}

#[test]
fn difference_by_multiple_exclude_lists() {
    let base = [1.1_f64, 2.2, 3.3, 4.4, 5.5];
    let kept = difference_by(&base, &[vec![2.5, 3.5], vec![4.5]], |x| x.floor() as i64);
    assert_eq!(kept, vec![1.1, 5.5]);
}

#[test]
fn difference_by_string_length() {
    let kept = difference_by(&["a", "bb", "ccc", "dddd"], &[vec!["xx", "yyy"]], |s| s.len());
    assert_eq!(kept, vec!["a", "dddd"]);
}

#[test]
fn difference_by_optional_keys() {
    let base = [Some(1), None, Some(2)];
    let kept = difference_by(&base, &[vec![None::<i32>]], |v| *v);
    assert_eq!(kept, vec![Some(1), Some(2)]);
}

#[test]
fn difference_by_everything_excluded() {
    let kept = difference_by(&[1, 2, 3], &[vec![1, 2, 3]], |x| *x);
    assert!(kept.is_empty());
}

#[test]
fn difference_by_keeps_duplicates_in_order() {
    let kept = difference_by(&[1, 2, 2, 3, 3, 3], &[vec![2]], |x| *x);
    assert_eq!(kept, vec![1, 3, 3, 3]);
}

// ============================================================================
// 4. uniq / uniq_by
// ============================================================================

#[test]
fn uniq_first_occurrence_wins() {
    assert_eq!(uniq(&[1, 1, 2, 2]), vec![1, 2]);
    assert_eq!(uniq(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
}

#[test]
fn uniq_on_json_values() {
    let input = arr(json!([{"a": 1}, {"a": 1}, [1], 1, [1]]));
    assert_eq!(Value::Array(uniq(&input)), json!([{"a": 1}, [1], 1]));
}

#[test]
fn uniq_by_length() {
    assert_eq!(uniq_by(&["a", "aa", "de", "aaa"], |s| s.len()), vec!["a", "aa", "aaa"]);
}

// ============================================================================
// 5. drop / take
// ============================================================================

#[test]
fn drop_and_drop_right() {
    assert_eq!(drop(&[1, 2, 3, 4, 5], 2), vec![3, 4, 5]);
    assert_eq!(drop_right(&[1, 2, 3, 4, 5], 2), vec![1, 2, 3]);
}

#[test]
fn take_and_take_right() {
    assert_eq!(take(&[1, 2, 3, 4, 5], 2), vec![1, 2]);
    assert_eq!(take_right(&[1, 2, 3, 4, 5], 2), vec![4, 5]);
}

#[test]
fn default_count_is_one() {
    assert_eq!(drop(&[1, 2, 3], DEFAULT_COUNT), vec![2, 3]);
    assert_eq!(take_right(&[1, 2, 3], DEFAULT_COUNT), vec![3]);
}

#[test]
fn counts_beyond_length_clamp() {
    let items = [1, 2, 3];
    assert!(drop(&items, 10).is_empty());
    assert!(drop_right(&items, 10).is_empty());
    assert_eq!(take(&items, 10), vec![1, 2, 3]);
    assert_eq!(take_right(&items, 10), vec![1, 2, 3]);
}

#[test]
fn zero_count_is_identity_or_empty() {
    let items = [1, 2, 3];
    assert_eq!(drop(&items, 0), vec![1, 2, 3]);
    assert_eq!(drop_right(&items, 0), vec![1, 2, 3]);
    assert!(take(&items, 0).is_empty());
    assert!(take_right(&items, 0).is_empty());
}
