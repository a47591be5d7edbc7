use super::*;

#[test]
fn add_wraps_at_the_boundary() {
    assert_eq!(ScalarInt::MAX.wrapping_add(ScalarInt::ONE), ScalarInt::MIN);
    assert_eq!(ScalarInt::MIN.wrapping_sub(ScalarInt::ONE), ScalarInt::MAX);
}

#[test]
fn mul_wraps() {
    let big = ScalarInt::new(65_536);
    assert_eq!(big.wrapping_mul(big), ScalarInt::ZERO);
    assert_eq!(
        ScalarInt::new(46_341).wrapping_mul(ScalarInt::new(46_341)),
        ScalarInt::new(-2_147_479_015)
    );
}

#[test]
fn remainder_sign_follows_dividend() {
    let rem = |a: i32, b: i32| ScalarInt::new(a).wrapping_rem(ScalarInt::new(b));
    assert_eq!(rem(7, 3), Some(ScalarInt::new(1)));
    assert_eq!(rem(-7, 3), Some(ScalarInt::new(-1)));
    assert_eq!(rem(7, -3), Some(ScalarInt::new(1)));
    assert_eq!(rem(-7, -3), Some(ScalarInt::new(-1)));
}

#[test]
fn division_truncates_toward_zero() {
    let div = |a: i32, b: i32| ScalarInt::new(a).wrapping_div(ScalarInt::new(b));
    assert_eq!(div(7, 2), Some(ScalarInt::new(3)));
    assert_eq!(div(-7, 2), Some(ScalarInt::new(-3)));
}

#[test]
fn zero_divisor_is_none() {
    assert_eq!(ScalarInt::ONE.wrapping_div(ScalarInt::ZERO), None);
    assert_eq!(ScalarInt::ONE.wrapping_rem(ScalarInt::ZERO), None);
}

#[test]
fn min_by_minus_one_wraps() {
    let minus_one = ScalarInt::new(-1);
    assert_eq!(ScalarInt::MIN.wrapping_div(minus_one), Some(ScalarInt::MIN));
    assert_eq!(ScalarInt::MIN.wrapping_rem(minus_one), Some(ScalarInt::ZERO));
    assert_eq!(ScalarInt::MIN.wrapping_neg(), ScalarInt::MIN);
}

#[test]
fn truthiness() {
    assert!(!ScalarInt::ZERO.is_truthy());
    assert!(ScalarInt::new(-3).is_truthy());
    assert_eq!(ScalarInt::from_bool(true), ScalarInt::ONE);
    assert_eq!(ScalarInt::from_bool(false), ScalarInt::ZERO);
}

#[test]
fn formats_as_plain_integer() {
    assert_eq!(ScalarInt::new(-42).to_string(), "-42");
    assert_eq!(format!("{:?}", ScalarInt::from(7)), "7");
}
