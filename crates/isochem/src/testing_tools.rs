macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        $crate::testing_tools::assert_close!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let (left, right, tolerance): (f64, f64, f64) = ($left, $right, $tolerance);
        assert!(
            (left - right).abs() <= tolerance,
            "assertion `left ≈ right` failed (tolerance: {tolerance:e})\n  left: {left}\n right: {right}",
        );
    }};
}

pub(crate) use assert_close;
