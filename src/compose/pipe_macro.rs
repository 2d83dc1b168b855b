//! The `pipe!` macro.

/// Feeds a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`. With a single argument the value is
/// returned as is.
///
/// ```rust
/// use kindred::combinator::{chain, map};
/// use kindred::pipe;
/// use kindred::typeclass::ResultBrand;
///
/// let parsed = pipe!(
///     Ok::<&str, String>("21"),
///     chain::<ResultBrand<String>, _, _, _>(|text: &str| text.parse::<i32>().map_err(|e| e.to_string())),
///     map::<ResultBrand<String>, _, _, _>(|n: i32| n * 2)
/// );
/// assert_eq!(parsed, Ok(42));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
