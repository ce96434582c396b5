//! The `Format` combinator - a continuation-passing format representation.
//!
//! This module provides the [`Format<A, R, F>`] type, which represents a
//! format specification as a first-class value. A format is conceptually a
//! function that, given a *continuation* (a function from the accumulated
//! value `A` to the final result `R`), produces a value of type `F` - either
//! `R` itself (the format is done) or a curried function that still expects
//! one argument per unapplied formatter.
//!
//! # Motivation
//!
//! Representing formats in continuation-passing style gives two properties
//! at once:
//!
//! - accumulated pieces are merged strictly left-to-right, without ever
//!   building an intermediate argument list, and
//! - the arguments a format still expects are visible in its type, so a
//!   missing or mistyped argument is a compile error.
//!
//! # Examples
//!
//! ## Composing and finalizing
//!
//! ```rust
//! use formars::prelude::*;
//!
//! let greeting = literal("Hello ").compose(string()).print();
//! assert_eq!(greeting(String::from("Kris")), "Hello Kris");
//! ```
//!
//! ## Partial application
//!
//! ```rust
//! use formars::prelude::*;
//!
//! let labelled = literal("x = ").compose(int());
//! let bound = labelled.apply(42);
//! assert_eq!(bound.print(), "x = 42");
//! ```

use std::marker::PhantomData;

use crate::typeclass::{Monoid, Semigroup};

/// A boxed continuation that consumes an accumulated value and produces the
/// final result.
pub type Continuation<A, R> = Box<dyn FnOnce(A) -> R>;

/// A boxed pending-argument function: accepts one more argument, then yields
/// the rest of the curried signature.
///
/// A format expecting a `String` and then an `i64` before producing an `R`
/// has the remaining-arguments type `Pending<String, Pending<i64, R>>`.
pub type Pending<Argument, Rest> = Box<dyn FnOnce(Argument) -> Rest>;

/// The boxed computation a format wraps: continuation in, remaining
/// curried arguments out.
type RunFormat<A, R, F> = Box<dyn FnOnce(Continuation<A, R>) -> F>;

/// A composable format specification.
///
/// `Format<A, R, F>` wraps a computation `(A -> R) -> F`:
///
/// * `A` - the accumulator type built up by the format's pieces. Composition
///   requires `A` to be a [`Semigroup`] so that pieces merge associatively.
/// * `R` - the result ultimately delivered once every argument has been
///   supplied and the top-level continuation runs.
/// * `F` - the remaining curried arguments; [`Pending`] chains that shrink by
///   one argument per [`apply`](Format::apply) and collapse to `R` when the
///   format is done.
///
/// Format values are immutable descriptions of a computation: every operation
/// consumes its operands by move and builds a fresh value, nothing is ever
/// mutated in place. A finalized format is a chain of single-use closures, so
/// it is driven through exactly once; reuse is by rebuilding, and the
/// constructors are cheap, pure functions.
///
/// # Laws
///
/// Composition inherits associativity from the accumulator's `Semigroup`:
///
/// - **Associativity**:
///   `f.compose(g).compose(h)` behaves identically to
///   `f.compose(g.compose(h))`
/// - **Identity**: composing with [`Format::empty`] (or any formatter
///   contributing `A::empty()`, such as `literal("")` for `String`) on either
///   side leaves behavior unchanged
///
/// # Examples
///
/// ```rust
/// use formars::prelude::*;
///
/// let format = literal("Hello ")
///     .compose(string())
///     .compose(literal(" You have "))
///     .compose(int())
///     .compose(literal(" new messages."));
///
/// let render = format.print();
/// assert_eq!(
///     render(String::from("Kris"))(3),
///     "Hello Kris You have 3 new messages."
/// );
/// ```
pub struct Format<A, R, F> {
    /// The wrapped computation: given a continuation `(A -> R)`, produces the
    /// remaining curried arguments `F`.
    run_format: RunFormat<A, R, F>,
    /// Phantom data for the type parameters.
    _marker: PhantomData<(A, R)>,
}

impl<A: 'static, R: 'static, F: 'static> Format<A, R, F> {
    /// Creates a format from a raw continuation-passing computation.
    ///
    /// The function takes a continuation `(A -> R)` and produces the
    /// remaining curried arguments `F`. This is the sole way format values
    /// are introduced from raw computations; everything else in the library
    /// ([`lift`](crate::format::lift), the primitive formatters, the
    /// combinators) goes through it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formars::format::{Continuation, Format};
    ///
    /// // A format contributing fixed text, expecting no arguments
    /// let fixed: Format<String, String, String> =
    ///     Format::new(|continuation: Continuation<String, String>| {
    ///         continuation(String::from("hi"))
    ///     });
    /// assert_eq!(fixed.print(), "hi");
    /// ```
    pub fn new<Run>(run: Run) -> Self
    where
        Run: FnOnce(Continuation<A, R>) -> F + 'static,
    {
        Self {
            run_format: Box::new(run),
            _marker: PhantomData,
        }
    }

    /// Composes this format with another, concatenating their pending
    /// arguments and merging their accumulated values left-to-right.
    ///
    /// The composed format first expects every argument of `self`, then every
    /// argument of `other`; once all have been supplied, the final
    /// accumulation is `self`'s piece [`combine`](Semigroup::combine)d with
    /// `other`'s piece. Because `combine` is associative, composition is too:
    /// `f.compose(g).compose(h)` and `f.compose(g.compose(h))` render
    /// identically.
    ///
    /// Mechanically this is continuation chaining: the composed computation
    /// drives `self` with a continuation that, upon receiving `self`'s value,
    /// drives `other` with a continuation that merges both values and hands
    /// the result to the original continuation. Mismatched accumulator types
    /// are rejected at compile time:
    ///
    /// ```compile_fail
    /// use formars::format::{Format, Pending, lift, literal};
    ///
    /// // A Vec accumulator cannot be composed with a String accumulator.
    /// let counted: Format<Vec<u8>, String, Pending<u8, String>> =
    ///     lift(|byte: u8| vec![byte]);
    /// let mismatch = counted.compose(literal(" bytes"));
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formars::prelude::*;
    ///
    /// let format = literal("Hello ").compose(string());
    /// assert_eq!(format.print()(String::from("Kris")), "Hello Kris");
    /// ```
    #[must_use]
    pub fn compose<Final>(self, other: Format<A, Final, R>) -> Format<A, Final, F>
    where
        A: Semigroup,
        Final: 'static,
    {
        Format::new(move |continuation: Continuation<A, Final>| {
            (self.run_format)(Box::new(move |left_value: A| {
                (other.run_format)(Box::new(move |right_value: A| {
                    continuation(left_value.combine(right_value))
                }))
            }))
        })
    }

    /// Post-processes the accumulated value before it reaches whatever
    /// continuation eventually consumes it.
    ///
    /// This is the covariant transform on a format's output: the pending
    /// argument shape `F` is untouched, only the accumulator type changes.
    /// `fmt.after(h).print()(...)` equals `h(fmt.print()(...))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formars::prelude::*;
    ///
    /// let shouting = literal("hello ")
    ///     .compose(string())
    ///     .after(|text| text.to_uppercase());
    /// assert_eq!(shouting.print()(String::from("world")), "HELLO WORLD");
    /// ```
    #[must_use]
    pub fn after<Mapped, Transform>(self, transform: Transform) -> Format<Mapped, R, F>
    where
        Mapped: 'static,
        Transform: FnOnce(A) -> Mapped + 'static,
    {
        Format::new(move |continuation: Continuation<Mapped, R>| {
            (self.run_format)(Box::new(move |accumulated| {
                continuation(transform(accumulated))
            }))
        })
    }
}

impl<R: 'static, F> Format<R, R, F> {
    /// Finalizes the format, collapsing it into a plain curried function.
    ///
    /// Driving the wrapped computation with the identity continuation yields
    /// the remaining-arguments value directly: a format still expecting
    /// arguments yields a [`Pending`] chain accepting them one by one in
    /// composition order, and a finished format yields the rendered value
    /// itself.
    ///
    /// Only formats whose accumulator and result types coincide can be
    /// finalized - the identity function is the continuation, so nothing
    /// else would type-check:
    ///
    /// ```compile_fail
    /// use formars::format::{Format, literal};
    ///
    /// // Accumulator `String`, declared result `usize`: no identity
    /// // continuation exists, so `print` is not available.
    /// let broken: Format<String, usize, usize> = literal("oops");
    /// let rendered = broken.print();
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formars::prelude::*;
    ///
    /// // Zero-argument format: finalizing yields the text itself
    /// assert_eq!(literal("x").print(), "x");
    ///
    /// // One-argument format: finalizing yields a function
    /// let render = string().print();
    /// assert_eq!(render(String::from("direct")), "direct");
    /// ```
    #[must_use]
    pub fn print(self) -> F {
        (self.run_format)(Box::new(|accumulated| accumulated))
    }
}

impl<A, R> Format<A, R, R>
where
    A: Monoid + 'static,
    R: 'static,
{
    /// The identity format: contributes the accumulator's identity element
    /// and expects no arguments.
    ///
    /// Composing any format with `Format::empty()` on either side yields a
    /// format that renders identically to the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formars::prelude::*;
    ///
    /// let format = literal("a").compose(Format::empty()).compose(literal("b"));
    /// assert_eq!(format.print(), "ab");
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Format::new(|continuation: Continuation<A, R>| continuation(A::empty()))
    }
}

impl<A, R, Argument, Rest> Format<A, R, Pending<Argument, Rest>>
where
    A: 'static,
    R: 'static,
    Argument: 'static,
    Rest: 'static,
{
    /// Binds the format's next pending argument without finalizing it.
    ///
    /// The returned format behaves exactly like `self` with `argument`
    /// already supplied: it can still be composed with further formatters,
    /// have more arguments bound, or be finalized later. Binding arguments
    /// via `apply` and finalizing afterwards renders identically to
    /// finalizing first and calling the resulting function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formars::prelude::*;
    ///
    /// let labelled = literal("x = ").compose(int());
    /// assert_eq!(labelled.apply(42).print(), "x = 42");
    /// ```
    #[must_use]
    pub fn apply(self, argument: Argument) -> Format<A, R, Rest> {
        Format::new(move |continuation| (self.run_format)(continuation)(argument))
    }

    /// Adapts the format's next pending argument through `adapter`.
    ///
    /// This is the contravariant transform on a format's input: the returned
    /// format accepts an `Adapted` where the original expected an
    /// `Argument`, feeding `adapter`'s output to the original. The rest of
    /// the pending-argument shape is untouched.
    /// `fmt.before(g).print()(b)` equals `fmt.print()(g(b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formars::prelude::*;
    ///
    /// // Format the length of a collection instead of a raw number.
    /// let count = int().before(|items: Vec<i32>| items.len() as i64);
    /// assert_eq!(count.print()(vec![1, 2, 3]), "3");
    /// ```
    #[must_use]
    pub fn before<Adapted, Adapter>(
        self,
        adapter: Adapter,
    ) -> Format<A, R, Pending<Adapted, Rest>>
    where
        Adapted: 'static,
        Adapter: FnOnce(Adapted) -> Argument + 'static,
    {
        Format::new(move |continuation| {
            let pending = (self.run_format)(continuation);
            let adapted: Pending<Adapted, Rest> =
                Box::new(move |argument| pending(adapter(argument)));
            adapted
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{int, lift, literal, string};
    use rstest::rstest;

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[rstest]
    fn new_wraps_raw_computation() {
        let fixed: Format<String, String, String> =
            Format::new(|continuation: Continuation<String, String>| {
                continuation(String::from("raw"))
            });
        assert_eq!(fixed.print(), "raw");
    }

    #[rstest]
    fn empty_renders_nothing() {
        let empty: Format<String, String, String> = Format::empty();
        assert_eq!(empty.print(), "");
    }

    // =========================================================================
    // Composition Tests
    // =========================================================================

    #[rstest]
    fn compose_concatenates_left_to_right() {
        let format = literal("a").compose(literal("b")).compose(literal("c"));
        assert_eq!(format.print(), "abc");
    }

    #[rstest]
    fn compose_threads_arguments_in_order() {
        let format = string().compose(literal("-")).compose(string());
        assert_eq!(
            format.print()(String::from("first"))(String::from("second")),
            "first-second"
        );
    }

    #[rstest]
    fn compose_left_grouping() {
        let format = literal("a").compose(literal("b")).compose(string());
        assert_eq!(format.print()(String::from("c")), "abc");
    }

    #[rstest]
    fn compose_right_grouping() {
        let format = literal("a").compose(literal("b").compose(string()));
        assert_eq!(format.print()(String::from("c")), "abc");
    }

    #[rstest]
    fn compose_with_empty_on_the_left() {
        let format = Format::empty().compose(string());
        assert_eq!(format.print()(String::from("value")), "value");
    }

    #[rstest]
    fn compose_with_empty_on_the_right() {
        let format = string().compose(Format::empty());
        assert_eq!(format.print()(String::from("value")), "value");
    }

    #[rstest]
    fn compose_with_vec_accumulator() {
        let head = lift(|value: i32| vec![value]);
        let tail = lift(|value: i32| vec![value, value]);

        let format = head.compose(tail);
        assert_eq!(format.print()(1)(2), vec![1, 2, 2]);
    }

    // =========================================================================
    // Finalization Tests
    // =========================================================================

    #[rstest]
    fn print_zero_argument_format() {
        assert_eq!(literal("x").print(), "x");
    }

    #[rstest]
    fn print_single_argument_format() {
        let render = string().print();
        assert_eq!(render(String::from("only")), "only");
    }

    #[rstest]
    fn print_inserts_no_separator() {
        let format = string().compose(string());
        assert_eq!(format.print()(String::from("ab"))(String::from("cd")), "abcd");
    }

    // =========================================================================
    // Partial Application Tests
    // =========================================================================

    #[rstest]
    fn apply_binds_one_argument() {
        let format = literal("n: ").compose(int());
        assert_eq!(format.apply(7).print(), "n: 7");
    }

    #[rstest]
    fn apply_binds_arguments_in_order() {
        let format = string().compose(int());
        assert_eq!(
            format.apply(String::from("count=")).apply(3).print(),
            "count=3"
        );
    }

    #[rstest]
    fn applied_format_remains_composable() {
        let format = literal("[").compose(string()).apply(String::from("body"));
        let extended = format.compose(literal("]"));
        assert_eq!(extended.print(), "[body]");
    }

    // =========================================================================
    // Transformation Tests
    // =========================================================================

    #[rstest]
    fn before_adapts_the_next_argument() {
        let count = int().before(|items: Vec<i32>| i64::try_from(items.len()).unwrap_or(i64::MAX));
        assert_eq!(count.print()(vec![1, 2, 3]), "3");
    }

    #[rstest]
    fn before_leaves_later_arguments_untouched() {
        let format = int()
            .before(|items: Vec<i32>| i64::try_from(items.len()).unwrap_or(i64::MAX))
            .compose(literal(" of "))
            .compose(int());
        assert_eq!(format.print()(vec![1, 2])(10), "2 of 10");
    }

    #[rstest]
    fn after_transforms_the_accumulated_value() {
        let format = literal("hello ")
            .compose(string())
            .after(|text| text.to_uppercase());
        assert_eq!(format.print()(String::from("world")), "HELLO WORLD");
    }

    #[rstest]
    fn compose_and_after_carry_pending_argument_chains() {
        let format = string()
            .compose(literal("+"))
            .compose(int())
            .after(|text| format!("<{text}>"));
        assert_eq!(format.print()(String::from("a"))(1), "<a+1>");
    }

    #[rstest]
    fn after_changes_the_accumulator_type() {
        let format = literal("ab").compose(string()).after(|text| text.len());
        assert_eq!(format.print()(String::from("cdef")), 6);
    }
}
