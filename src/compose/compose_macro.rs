//! The `compose!` macro.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`.
///
/// ```rust
/// use kindred::compose;
///
/// let shout = compose!(|text: String| text + "!", |text: &str| text.to_uppercase());
/// assert_eq!(shout("hey"), "HEY!");
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

#[cfg(test)]
mod tests {
    use crate::compose::identity;
    use rstest::rstest;

    #[rstest]
    fn composes_right_to_left() {
        let composed = compose!(|n: i32| n + 1, |n: i32| n * 2);
        assert_eq!(composed(5), 11);
    }

    #[rstest]
    #[case(0)]
    #[case(-8)]
    fn identity_is_neutral(#[case] input: i32) {
        let negate = |n: i32| -n;
        assert_eq!(compose!(identity, negate)(input), negate(input));
        assert_eq!(compose!(negate, identity)(input), negate(input));
    }

    #[rstest]
    fn composition_is_associative() {
        let f = |n: i32| n + 1;
        let g = |n: i32| n * 3;
        let h = |n: i32| n - 2;
        assert_eq!(compose!(f, compose!(g, h))(4), compose!(compose!(f, g), h)(4));
    }
}
