//! Primitive formatters - the leaf values every format is built from.
//!
//! All one-argument formatters are defined through [`lift`], which turns any
//! pure `Argument -> Accumulator` function into a minimal one-argument
//! [`Format`]. The textual primitives accumulate into `String`:
//!
//! - [`literal`]: fixed text, no argument
//! - [`string`]: a `String` argument, passed through unchanged
//! - [`display`]: any [`std::fmt::Display`] argument, rendered canonically
//! - [`int`], [`float`], [`boolean`]: numeric and boolean arguments,
//!   delegating to [`display`]
//!
//! # Examples
//!
//! ```rust
//! use formars::prelude::*;
//!
//! let format = literal("pi is roughly ").compose(float());
//! assert_eq!(format.print()(3.14), "pi is roughly 3.14");
//! ```

use std::fmt::Display;

use super::combinator::{Continuation, Format, Pending};

/// Lifts a plain rendering function into a one-argument format.
///
/// Given `render: Argument -> A`, the resulting format expects exactly one
/// argument and accumulates `render`'s output. Every leaf formatter in this
/// module is this lift under a fixed rendering function.
///
/// # Examples
///
/// ```rust
/// use formars::format::lift;
///
/// let parenthesized = lift(|word: String| format!("({word})"));
/// assert_eq!(parenthesized.print()(String::from("nested")), "(nested)");
/// ```
pub fn lift<Argument, A, R, Render>(render: Render) -> Format<A, R, Pending<Argument, R>>
where
    Argument: 'static,
    A: 'static,
    R: 'static,
    Render: FnOnce(Argument) -> A + 'static,
{
    Format::new(move |continuation: Continuation<A, R>| {
        let pending: Pending<Argument, R> =
            Box::new(move |argument| continuation(render(argument)));
        pending
    })
}

/// A format contributing fixed text, expecting no arguments.
///
/// Useful for static separators and labels between argument-accepting
/// formatters. `literal("")` is the identity of composition for `String`
/// accumulators, equivalent to [`Format::empty`].
///
/// # Examples
///
/// ```rust
/// use formars::prelude::*;
///
/// assert_eq!(literal("x").print(), "x");
///
/// let format = literal("(").compose(string()).compose(literal(")"));
/// assert_eq!(format.print()(String::from("inner")), "(inner)");
/// ```
pub fn literal<R, Text>(text: Text) -> Format<String, R, R>
where
    R: 'static,
    Text: Into<String>,
{
    let text = text.into();
    Format::new(move |continuation: Continuation<String, R>| continuation(text))
}

/// A format accepting a `String` and accumulating it unchanged.
///
/// # Examples
///
/// ```rust
/// use formars::prelude::*;
///
/// let format = literal("Hello ").compose(string());
/// assert_eq!(format.print()(String::from("Kris")), "Hello Kris");
/// ```
pub fn string<R: 'static>() -> Format<String, R, Pending<String, R>> {
    lift(|value: String| value)
}

/// A format accepting any [`Display`] value and accumulating its canonical
/// textual form.
///
/// This is the display capability every typed primitive delegates to; any
/// user-defined type plugs in by implementing [`Display`].
///
/// # Examples
///
/// ```rust
/// use formars::prelude::*;
///
/// let format = literal("status: ").compose(display::<char, _>());
/// assert_eq!(format.print()('?'), "status: ?");
/// ```
pub fn display<Value, R>() -> Format<String, R, Pending<Value, R>>
where
    Value: Display + 'static,
    R: 'static,
{
    lift(|value: Value| value.to_string())
}

/// A format accepting an `i64` and accumulating its decimal rendering.
///
/// # Examples
///
/// ```rust
/// use formars::prelude::*;
///
/// let format = literal("count: ").compose(int());
/// assert_eq!(format.print()(3), "count: 3");
/// ```
pub fn int<R: 'static>() -> Format<String, R, Pending<i64, R>> {
    display::<i64, R>()
}

/// A format accepting an `f64` and accumulating its canonical rendering.
///
/// # Examples
///
/// ```rust
/// use formars::prelude::*;
///
/// let format = literal("ratio: ").compose(float());
/// assert_eq!(format.print()(0.5), "ratio: 0.5");
/// ```
pub fn float<R: 'static>() -> Format<String, R, Pending<f64, R>> {
    display::<f64, R>()
}

/// A format accepting a `bool` and accumulating `"true"` or `"false"`.
///
/// # Examples
///
/// ```rust
/// use formars::prelude::*;
///
/// let format = literal("ready: ").compose(boolean());
/// assert_eq!(format.print()(true), "ready: true");
/// ```
pub fn boolean<R: 'static>() -> Format<String, R, Pending<bool, R>> {
    display::<bool, R>()
}

// =============================================================================
// Tests
// =============================================================================
