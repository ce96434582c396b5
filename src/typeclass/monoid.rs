//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element. In other words, a type
//! `T` is a monoid if it has:
//!
//! 1. An associative binary operation `combine: (T, T) -> T` (from Semigroup)
//! 2. An identity element `empty: T` such that for all `a`:
//!    - `empty.combine(a) == a` (left identity)
//!    - `a.combine(empty) == a` (right identity)
//!
//! The identity element is what gives format composition its identity format:
//! [`Format::empty`](crate::format::Format::empty) contributes `T::empty()`
//! and therefore disappears when composed on either side.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use formars::typeclass::{Monoid, Semigroup};
//!
//! // String monoid with empty string as identity
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert_eq!(String::from("hello").combine(String::empty()), "hello");
//!
//! // Vec monoid with empty vec as identity
//! let vec: Vec<i32> = Vec::empty();
//! assert!(vec.is_empty());
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// ## Left Identity
///
/// For all `a`:
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// For all `a`:
/// ```text
/// a.combine(Self::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use formars::typeclass::{Monoid, Semigroup};
///
/// // Combining with empty yields the original value
/// let s = String::from("hello");
/// assert_eq!(String::empty().combine(s.clone()), s);
/// assert_eq!(s.clone().combine(String::empty()), s);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// The identity element satisfies:
    /// - `Self::empty().combine(a) == a` for all `a`
    /// - `a.combine(Self::empty()) == a` for all `a`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formars::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert!(Vec::<i32>::empty().is_empty());
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity
    /// element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this method always returns a value
    /// (the identity element for empty iterators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formars::typeclass::{Monoid, Semigroup};
    ///
    /// let strings = vec![
    ///     String::from("a"),
    ///     String::from("b"),
    ///     String::from("c"),
    /// ];
    /// assert_eq!(String::combine_all(strings), "abc");
    ///
    /// // Empty iterator returns the identity element
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::combine_all(empty), String::empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formars::typeclass::Monoid;
    ///
    /// assert!(String::empty().is_empty_value());
    /// assert!(!String::from("hello").is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

/// Option forms a monoid when its inner type is a semigroup.
/// The identity element is `None`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

/// The unit type forms a trivial monoid with `()` as the identity.
impl Monoid for () {
    fn empty() -> Self {}
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // String Monoid Tests
    // =========================================================================

    #[rstest]
    fn string_empty() {
        assert_eq!(String::empty(), "");
    }

    #[rstest]
    fn string_left_identity() {
        let value = String::from("hello");
        assert_eq!(String::empty().combine(value.clone()), value);
    }

    #[rstest]
    fn string_right_identity() {
        let value = String::from("hello");
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    fn string_is_empty_value() {
        assert!(String::empty().is_empty_value());
        assert!(!String::from("hello").is_empty_value());
    }

    // =========================================================================
    // Vec Monoid Tests
    // =========================================================================

    #[rstest]
    fn vec_empty() {
        let empty: Vec<i32> = Vec::empty();
        assert!(empty.is_empty());
    }

    #[rstest]
    fn vec_left_identity() {
        let value = vec![1, 2, 3];
        assert_eq!(Vec::<i32>::empty().combine(value.clone()), value);
    }

    #[rstest]
    fn vec_right_identity() {
        let value = vec![1, 2, 3];
        assert_eq!(value.clone().combine(Vec::empty()), value);
    }

    // =========================================================================
    // Option Monoid Tests
    // =========================================================================

    #[rstest]
    fn option_empty() {
        let empty: Option<String> = Option::empty();
        assert_eq!(empty, None);
    }

    #[rstest]
    fn option_left_identity() {
        let value: Option<String> = Some(String::from("hello"));
        assert_eq!(Option::<String>::empty().combine(value.clone()), value);
    }

    #[rstest]
    fn option_right_identity() {
        let value: Option<String> = Some(String::from("hello"));
        assert_eq!(value.clone().combine(Option::empty()), value);
    }

    // =========================================================================
    // Unit Type Monoid Tests
    // =========================================================================

    #[rstest]
    fn unit_empty() {
        assert_eq!(<()>::empty(), ());
    }

    // =========================================================================
    // combine_all Tests
    // =========================================================================

    #[rstest]
    fn combine_all_empty_returns_identity() {
        let empty: Vec<String> = vec![];
        assert_eq!(String::combine_all(empty), String::empty());
    }

    #[rstest]
    fn combine_all_single_element() {
        let single = vec![String::from("hello")];
        assert_eq!(String::combine_all(single), String::from("hello"));
    }

    #[rstest]
    fn combine_all_multiple_elements() {
        let multiple = vec![String::from("a"), String::from("b"), String::from("c")];
        assert_eq!(String::combine_all(multiple), String::from("abc"));
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================
