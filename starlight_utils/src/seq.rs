//! "None of" predicates for sequences, the negated counterparts of
//! [`Iterator::any`].

/// True if `seq` yields no elements. At most one element is pulled.
pub fn none<I>(seq: I) -> bool
where
    I: IntoIterator,
{
    seq.into_iter().next().is_none()
}

/// True if no element of `seq` satisfies `predicate`.
///
/// Stops at the first match, so `predicate` may not see every element.
///
/// ```
/// use starlight_utils::none_match;
///
/// assert!(none_match([1, 2, 3], |x| x > 5));
/// assert!(!none_match([1, 2, 3], |x| x > 1));
/// ```
pub fn none_match<I, F>(seq: I, predicate: F) -> bool
where
    I: IntoIterator,
    F: FnMut(I::Item) -> bool,
{
    !seq.into_iter().any(predicate)
}

/// Method forms of [`none`] and [`none_match`] for any iterator.
pub trait NoneExt: Iterator + Sized {
    fn none(self) -> bool {
        none(self)
    }

    fn none_match<F>(self, predicate: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        none_match(self, predicate)
    }
}

impl<I: Iterator> NoneExt for I {}
