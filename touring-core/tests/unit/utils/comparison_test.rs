use super::*;

parameterized_test! {can_compare_floats, (a, b, expected), {
    assert_eq!(compare_floats(a, b), expected);
}}

can_compare_floats! {
    case01_less: (1., 2., Ordering::Less),
    case02_greater: (2., 1., Ordering::Greater),
    case03_equal: (1., 1., Ordering::Equal),
    case04_nan_left: (Float::NAN, 1., Ordering::Greater),
    case05_nan_right: (1., Float::NAN, Ordering::Less),
    case06_both_nan: (Float::NAN, Float::NAN, Ordering::Equal),
}
