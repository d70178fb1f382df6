//! Index-aware higher-order functions over slices.
//!
//! Four operations make up the core: [`for_each`], [`map`], [`filter`] and
//! [`fold_left`]. Every callback sees the element's index and, except for
//! the reducers, the whole input slice, so it can compare an element with
//! its neighbours.
//!
//! Inputs may be absent. A sequence is passed as `Option<&[T]>` and a
//! callback as `Option<F>`; `None` is never the same thing as an empty
//! slice. When an input is absent the operation invokes nothing and returns
//! an [`error::NeutralError`] that says which input was missing and carries
//! the neutral result: an empty `Vec`, `()`, or the untouched initial
//! accumulator. Use [`NeutralExt::or_neutral`] to treat invalid input like
//! empty input.
//!
//! ```
//! use hof::error::{Error, NeutralExt};
//!
//! let numbers = [1, 2, 3, 4, 5];
//! let sum = hof::fold_left(Some(&numbers[..]), Some(|_, acc: i32, n: &i32| acc + n), 0);
//! assert_eq!(sum.unwrap(), 15);
//!
//! type Double = fn(usize, &i32, &[i32]) -> i32;
//! let missing = hof::map(Some(&numbers[..]), None::<Double>);
//! assert_eq!(missing.clone().unwrap_err().error(), Error::MissingCallback);
//! assert!(missing.or_neutral().is_empty());
//! ```
//!
//! When both inputs are statically present, [`SequenceExt`] offers the same
//! operations as methods on slices.

pub mod error;
mod hof;
mod sequence;

pub use crate::error::{Error, NeutralError, NeutralExt};
pub use crate::hof::{filter, fold_left, fold_right, for_each, map, map_pairs};
pub use crate::sequence::SequenceExt;
