//! Returns a closure (a function with an associated environment of variables)
//! that adds `n` to a given integer.

/// Make a function that adds `n` to a number.
///
/// The offset is moved into the closure: every call to the factory produces
/// an independent adder.
pub fn make_adder(n: i64) -> impl Fn(i64) -> i64 {
    log::trace!("make_adder({})", n);
    move |a| a + n
}

/// Same as [make_adder], but boxed so that adders with different offsets can
/// live in the same collection.
pub fn make_adder_boxed(n: i64) -> Box<dyn Fn(i64) -> i64> {
    Box::new(make_adder(n))
}
