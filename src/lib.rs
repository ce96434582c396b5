//! # formars
//!
//! A composable, type-checked formatting library for Rust built from
//! first-class format combinators.
//!
//! ## Overview
//!
//! `formars` provides `printf`-style interpolation without runtime format
//! strings: a format specification is an ordinary value of type
//! [`Format`](format::Format) that can be
//!
//! - **composed** with other formats ([`Format::compose`](format::Format::compose)),
//! - **partially applied** one argument at a time ([`Format::apply`](format::Format::apply)),
//! - **adapted** on its next argument ([`Format::before`](format::Format::before))
//!   or on its accumulated output ([`Format::after`](format::Format::after)),
//! - and finally **collapsed** into a plain curried function
//!   ([`Format::print`](format::Format::print)).
//!
//! The number and types of the arguments a format still expects are tracked
//! in its type, so every mismatch (wrong argument type, missing argument,
//! finalizing a format whose accumulator and result types differ) is a
//! compile error rather than a runtime failure.
//!
//! ## Example
//!
//! ```rust
//! use formars::prelude::*;
//!
//! let greeting = literal("Hello ")
//!     .compose(string())
//!     .compose(literal(" You have "))
//!     .compose(int())
//!     .compose(literal(" new messages."))
//!     .print();
//!
//! assert_eq!(
//!     greeting(String::from("Kris"))(3),
//!     "Hello Kris You have 3 new messages."
//! );
//! ```
//!
//! ## Modules
//!
//! - [`typeclass`]: the [`Semigroup`](typeclass::Semigroup) and
//!   [`Monoid`](typeclass::Monoid) traits that give accumulator types their
//!   associative merge operation and identity element
//! - [`format`]: the [`Format`](format::Format) combinator and the primitive
//!   formatter library

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use formars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::format::*;
    pub use crate::typeclass::*;
}

pub mod format;
pub mod typeclass;
