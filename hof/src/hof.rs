// Each operation validates its inputs before touching any element: the
// sequence first, then the callback. On failure no callback runs and the
// neutral result travels back inside the error.

use crate::error::{Error, Result};

fn check<'a, T, F>(
    operation: &str,
    seq: Option<&'a [T]>,
    callback: Option<F>,
) -> std::result::Result<(&'a [T], F), Error> {
    let error = match (seq, callback) {
        (Some(seq), Some(callback)) => {
            log::trace!("{operation}: {} elements", seq.len());
            return Ok((seq, callback));
        }
        (None, _) => Error::MissingSequence,
        (Some(_), None) => Error::MissingCallback,
    };
    log::debug!("{operation} rejected: {error}");
    Err(error)
}

/// Invoke `callback` once per element, in ascending index order.
///
/// The callback receives the index, the element and the whole sequence,
/// so it can look at neighbouring elements.
///
/// ```
/// let mut seen = Vec::new();
/// hof::for_each(Some(&["apple", "banana", "cherry"][..]), Some(|index, item: &&str, _: &[&str]| {
///     seen.push(format!("{index} {item}"));
/// }))
/// .unwrap();
/// assert_eq!(seen, ["0 apple", "1 banana", "2 cherry"]);
/// ```
pub fn for_each<T, F>(seq: Option<&[T]>, callback: Option<F>) -> Result<()>
where
    F: FnMut(usize, &T, &[T]),
{
    let (seq, mut callback) = match check("for_each", seq, callback) {
        Ok(checked) => checked,
        Err(error) => return Err(error.with_neutral(())),
    };
    for (index, item) in seq.iter().enumerate() {
        callback(index, item, seq);
    }
    Ok(())
}

/// Build a new `Vec` where position `i` holds `callback(i, &seq[i], seq)`.
///
/// The result always has the same length as the input.
///
/// ```
/// let doubled = hof::map(Some(&[1, 2, 3, 4, 5][..]), Some(|_, item: &i32, _: &[i32]| item * 2));
/// assert_eq!(doubled.unwrap(), [2, 4, 6, 8, 10]);
/// ```
pub fn map<T, U, F>(seq: Option<&[T]>, callback: Option<F>) -> Result<Vec<U>>
where
    F: FnMut(usize, &T, &[T]) -> U,
{
    let (seq, mut callback) = match check("map", seq, callback) {
        Ok(checked) => checked,
        Err(error) => return Err(error.with_neutral(Vec::new())),
    };
    let mut result = Vec::with_capacity(seq.len());
    for (index, item) in seq.iter().enumerate() {
        result.push(callback(index, item, seq));
    }
    Ok(result)
}

/// Collect clones of the elements for which `predicate` holds.
///
/// Elements keep their relative order; none is reordered or duplicated.
///
/// ```
/// let odd = hof::filter(Some(&[1, 2, 3, 4, 5][..]), Some(|_, n: &i32, _: &[i32]| n % 2 != 0));
/// assert_eq!(odd.unwrap(), [1, 3, 5]);
/// ```
pub fn filter<T, F>(seq: Option<&[T]>, predicate: Option<F>) -> Result<Vec<T>>
where
    T: Clone,
    F: FnMut(usize, &T, &[T]) -> bool,
{
    let (seq, mut predicate) = match check("filter", seq, predicate) {
        Ok(checked) => checked,
        Err(error) => return Err(error.with_neutral(Vec::new())),
    };
    let mut result = Vec::new();
    for (index, item) in seq.iter().enumerate() {
        if predicate(index, item, seq) {
            result.push(item.clone());
        }
    }
    Ok(result)
}

/// Thread an accumulator through the sequence from the first element to
/// the last.
///
/// The reducer is called exactly `seq.len()` times. On failure the error
/// carries `initial` unchanged.
///
/// ```
/// let sum = hof::fold_left(Some(&[1, 2, 3, 4, 5][..]), Some(|_, acc: i32, n: &i32| acc + n), 0);
/// assert_eq!(sum.unwrap(), 15);
/// ```
pub fn fold_left<T, U, F>(seq: Option<&[T]>, reducer: Option<F>, initial: U) -> Result<U>
where
    F: FnMut(usize, U, &T) -> U,
{
    let (seq, mut reducer) = match check("fold_left", seq, reducer) {
        Ok(checked) => checked,
        Err(error) => return Err(error.with_neutral(initial)),
    };
    let mut accumulator = initial;
    for (index, item) in seq.iter().enumerate() {
        accumulator = reducer(index, accumulator, item);
    }
    Ok(accumulator)
}

/// Thread an accumulator through the sequence from the last element to
/// the first.
pub fn fold_right<T, U, F>(seq: Option<&[T]>, reducer: Option<F>, initial: U) -> Result<U>
where
    F: FnMut(usize, &T, U) -> U,
{
    let (seq, mut reducer) = match check("fold_right", seq, reducer) {
        Ok(checked) => checked,
        Err(error) => return Err(error.with_neutral(initial)),
    };
    let mut accumulator = initial;
    for (index, item) in seq.iter().enumerate().rev() {
        accumulator = reducer(index, item, accumulator);
    }
    Ok(accumulator)
}

/// Combine two sequences position by position.
///
/// Stops at the end of the shorter sequence; surplus elements of the
/// longer one are never visited.
pub fn map_pairs<A, B, U, F>(
    left: Option<&[A]>,
    right: Option<&[B]>,
    callback: Option<F>,
) -> Result<Vec<U>>
where
    F: FnMut(usize, &A, &B) -> U,
{
    let Some(right) = right else {
        log::debug!("map_pairs rejected: {}", Error::MissingSequence);
        return Err(Error::MissingSequence.with_neutral(Vec::new()));
    };
    let (left, mut callback) = match check("map_pairs", left, callback) {
        Ok(checked) => checked,
        Err(error) => return Err(error.with_neutral(Vec::new())),
    };
    let mut result = Vec::with_capacity(left.len().min(right.len()));
    for (index, (a, b)) in left.iter().zip(right).enumerate() {
        result.push(callback(index, a, b));
    }
    Ok(result)
}
