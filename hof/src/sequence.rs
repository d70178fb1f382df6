use crate::error::NeutralExt;
use crate::hof;

/// Higher-order operations on a sequence that is known to be present.
///
/// Each method delegates to the free function of the same name in the
/// crate root, supplying both the sequence and the callback, so none of
/// them can fail.
pub trait SequenceExt<T> {
    /// See [`hof::for_each`].
    fn for_each_indexed<F>(&self, callback: F)
    where
        F: FnMut(usize, &T, &[T]);

    /// See [`hof::map`].
    fn map_indexed<U, F>(&self, callback: F) -> Vec<U>
    where
        F: FnMut(usize, &T, &[T]) -> U;

    /// See [`hof::filter`].
    fn filter_indexed<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(usize, &T, &[T]) -> bool;

    /// See [`hof::fold_left`].
    fn fold_left_indexed<U, F>(&self, initial: U, reducer: F) -> U
    where
        F: FnMut(usize, U, &T) -> U;

    /// See [`hof::fold_right`].
    fn fold_right_indexed<U, F>(&self, initial: U, reducer: F) -> U
    where
        F: FnMut(usize, &T, U) -> U;
}

impl<T> SequenceExt<T> for [T] {
    fn for_each_indexed<F>(&self, callback: F)
    where
        F: FnMut(usize, &T, &[T]),
    {
        hof::for_each(Some(self), Some(callback)).or_neutral()
    }

    fn map_indexed<U, F>(&self, callback: F) -> Vec<U>
    where
        F: FnMut(usize, &T, &[T]) -> U,
    {
        hof::map(Some(self), Some(callback)).or_neutral()
    }

    fn filter_indexed<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(usize, &T, &[T]) -> bool,
    {
        hof::filter(Some(self), Some(predicate)).or_neutral()
    }

    fn fold_left_indexed<U, F>(&self, initial: U, reducer: F) -> U
    where
        F: FnMut(usize, U, &T) -> U,
    {
        hof::fold_left(Some(self), Some(reducer), initial).or_neutral()
    }

    fn fold_right_indexed<U, F>(&self, initial: U, reducer: F) -> U
    where
        F: FnMut(usize, &T, U) -> U,
    {
        hof::fold_right(Some(self), Some(reducer), initial).or_neutral()
    }
}
