//! The format combinator engine.
//!
//! A format specification here is a first-class value of type [`Format`]:
//! primitive formatters ([`literal`], [`string`], [`int`], ...) are composed
//! with [`Format::compose`] into larger formats, adapted with
//! [`Format::before`]/[`Format::after`], partially applied with
//! [`Format::apply`], and finally collapsed with [`Format::print`] into an
//! ordinary curried function that accepts the outstanding arguments in
//! composition order.
//!
//! The accumulated pieces are merged with the accumulator's
//! [`Semigroup::combine`](crate::typeclass::Semigroup::combine), strictly
//! left-to-right and with no separator inserted; associativity of `combine`
//! makes composition itself associative, so formats can be grouped freely.
//!
//! # Examples
//!
//! ```rust
//! use formars::prelude::*;
//!
//! let format = literal("Hello ")
//!     .compose(string())
//!     .compose(literal(" You have "))
//!     .compose(int())
//!     .compose(literal(" new messages."));
//!
//! assert_eq!(
//!     format.print()(String::from("Kris"))(3),
//!     "Hello Kris You have 3 new messages."
//! );
//! ```

mod combinator;
mod primitives;

pub use combinator::{Continuation, Format, Pending};
pub use primitives::{boolean, display, float, int, lift, literal, string};
