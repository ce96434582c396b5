//! Type class traits for the format engine's algebraic capabilities.
//!
//! This module provides the two algebraic structures the
//! [`Format`](crate::format::Format) combinator is parameterized over:
//!
//! - [`Semigroup`]: types with an associative binary operation (`combine`).
//!   Composing two formats merges their accumulated pieces with `combine`,
//!   and the associativity law is what makes format composition freely
//!   regroupable.
//! - [`Monoid`]: semigroups with an identity element (`empty`). The identity
//!   element backs the identity format
//!   ([`Format::empty`](crate::format::Format::empty)), which contributes
//!   nothing when composed on either side.
//!
//! Both are ordinary traits: any user-defined accumulator type becomes usable
//! by the engine by implementing them, no changes to the core required.
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use formars::typeclass::Semigroup;
//!
//! // String concatenation
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! // Vec concatenation
//! let left = vec![1, 2];
//! let right = vec![3, 4];
//! assert_eq!(left.combine(right), vec![1, 2, 3, 4]);
//! ```
//!
//! ## Using Monoid
//!
//! ```rust
//! use formars::typeclass::{Monoid, Semigroup};
//!
//! // Combining with the identity element
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//!
//! // Folding a collection with combine_all
//! let pieces = vec![String::from("a"), String::from("b")];
//! assert_eq!(String::combine_all(pieces), "ab");
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
