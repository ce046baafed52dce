use longint::BigInt;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn long_division_test() {
    let dividend = big("654897491581065498498719467981567498");
    let divisor = big("49879871");
    let (q, r) = dividend.div_rem(&divisor).unwrap();
    assert_eq!(q.to_string(), "13129494492499098453937851362");
    assert_eq!(r.to_string(), "27833196");
    assert_eq!(&dividend / &divisor, q);
    assert_eq!(&dividend % &divisor, r);
    assert_eq!(&q * &divisor + &r, dividend);
}

#[test]
fn division_shortcut_test() {
    let a = big("123456789123456789");

    // Dividend smaller than divisor.
    let (q, r) = big("5").div_rem(&a).unwrap();
    assert!(q.is_zero());
    assert_eq!(r, big("5"));

    // Equal magnitudes, all four sign combinations.
    assert_eq!(a.div_rem(&a).unwrap(), (big("1"), BigInt::new()));
    assert_eq!((-&a).div_rem(&a).unwrap(), (big("-1"), BigInt::new()));
    assert_eq!(a.div_rem(&-&a).unwrap(), (big("-1"), BigInt::new()));
    assert_eq!((-&a).div_rem(&-&a).unwrap(), (big("1"), BigInt::new()));

    // Zero dividend.
    let (q, r) = BigInt::new().div_rem(&a).unwrap();
    assert!(q.is_zero());
    assert!(r.is_zero());
}

#[test]
fn truncating_sign_convention_test() {
    // Quotient rounds toward zero; remainder takes the dividend's sign.
    let cases = [
        ("7", "3", "2", "1"),
        ("-7", "3", "-2", "-1"),
        ("7", "-3", "-2", "1"),
        ("-7", "-3", "2", "-1"),
    ];
    for (a, b, expected_q, expected_r) in cases {
        let (q, r) = big(a).div_rem(&big(b)).unwrap();
        assert_eq!(q, big(expected_q), "{} / {}", a, b);
        assert_eq!(r, big(expected_r), "{} % {}", a, b);
    }
}

#[test]
fn perfect_square_root_trip_test() {
    let q = big("123456789123456789123456789");
    let square = &q * &q;
    let (root, remainder) = square.div_rem(&q).unwrap();
    assert_eq!(root, q);
    assert!(remainder.is_zero());
}

#[test]
fn power_of_base_test() {
    // Dividends with long runs of zero digit groups.
    let mut a = big("1");
    for _ in 0..8 {
        a *= 1_000_000_000;
    }
    let (q, r) = a.div_rem(&big("1000000000")).unwrap();
    assert_eq!(&q * &big("1000000000"), a);
    assert!(r.is_zero());

    let (q, r) = (&a + 7).div_rem(&big("1000000000")).unwrap();
    assert_eq!(q.to_string(), a.div_pow10(9).to_string());
    assert_eq!(r, big("7"));
}

#[test]
fn division_by_zero_test() {
    let err = big("42").div_rem(&BigInt::new()).unwrap_err();
    assert!(err.is_arithmetic());
    let err = big("42").div_rem_small(0).unwrap_err();
    assert!(err.is_arithmetic());
}

#[test]
#[should_panic(expected = "division by zero")]
fn div_operator_zero_panic_test() {
    let _ = big("42") / BigInt::new();
}

#[test]
#[should_panic(expected = "division by zero")]
fn rem_operator_zero_panic_test() {
    let _ = big("42") % BigInt::new();
}

#[test]
fn small_divisor_agreement_test() {
    let dividend = big("-654897491581065498498719467981567498");
    for divisor in [1, -1, 2, 7, -7, 1000, 49879871, i32::MAX, i32::MIN] {
        let (q_small, r_small) = dividend.div_rem_small(divisor).unwrap();
        let (q_big, r_big) = dividend.div_rem(&BigInt::from(divisor as i64)).unwrap();
        assert_eq!(q_small, q_big, "divisor {}", divisor);
        assert_eq!(BigInt::from(r_small as i64), r_big, "divisor {}", divisor);
    }
}

#[test]
fn pow10_consistency_test() {
    let a = big("-98765432109876543210987654321");
    for power in [0, 1, 8, 9, 10, 17, 18, 27, 28, 50] {
        let divisor: BigInt = format!("1{}", "0".repeat(power)).parse().unwrap();
        let (q, r) = a.div_rem(&divisor).unwrap();
        assert_eq!(a.div_pow10(power), q, "power {}", power);
        assert_eq!(a.rem_pow10(power), r, "power {}", power);
    }
}
