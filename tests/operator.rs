use longint::BigInt;
use std::collections::HashSet;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn signed_addition_test() {
    let sum = big("-15465342342342347489719841234234878") + big("5") + big("100");
    assert_eq!(sum.to_string(), "-15465342342342347489719841234234773");

    assert_eq!(big("5") + big("-3"), big("2"));
    assert_eq!(big("3") + big("-5"), big("-2"));
    assert_eq!(big("-3") + big("-5"), big("-8"));

    let zero = big("123456789123456789") + big("-123456789123456789");
    assert!(zero.is_zero());
    assert_eq!(zero.sign(), 0);
}

#[test]
fn subtraction_test() {
    assert_eq!(big("1000000000000") - big("1"), big("999999999999"));
    assert_eq!(big("1") - big("1000000000000"), big("-999999999999"));
    assert_eq!(big("-5") - big("-5"), BigInt::new());
    assert_eq!(big("-5") - big("3"), big("-8"));
}

#[test]
fn multiplication_test() {
    let product =
        big("154654654879498415984984189491941987489719841") * big("468789871987198719871919000000000");
    assert_eq!(
        product.to_string(),
        "72500535863184460293579343779749934323699198478320529494132713044879000000000"
    );

    let q = big("123456789123456789123456789");
    assert_eq!(
        (&q * &q).to_string(),
        "15241578780673678546105778281054720515622620750190521"
    );

    assert_eq!(big("-3") * big("4"), big("-12"));
    assert_eq!(big("-3") * big("-4"), big("12"));
    let zero = big("-3") * BigInt::new();
    assert_eq!(zero.sign(), 0);
}

#[test]
fn operand_combination_test() {
    // Owned and borrowed operands give identical results.
    let a = big("98765432198765432100");
    let b = big("-12345678912345678900");
    let expected = big("86419753286419753200");
    assert_eq!(&a + &b, expected);
    assert_eq!(&a + b.clone(), expected);
    assert_eq!(a.clone() + &b, expected);
    assert_eq!(a.clone() + b.clone(), expected);

    let mut c = a.clone();
    c += &b;
    c -= &b;
    c *= &b;
    assert_eq!(c, &a * &b);
    c /= &b;
    assert_eq!(c, a);
    c %= &a;
    assert!(c.is_zero());
}

#[test]
fn scalar_operand_test() {
    let mut n = big("999999999999999999");
    n += 1;
    assert_eq!(n.to_string(), "1000000000000000000");
    n -= 2;
    assert_eq!(n.to_string(), "999999999999999998");
    n *= -1;
    assert_eq!(n.to_string(), "-999999999999999998");

    assert_eq!(&big("10") + (-25), big("-15"));
    assert_eq!(&big("10") - 25, big("-15"));
    assert_eq!(&big("10") * 25, big("250"));
    assert_eq!(big("10") * i64::MIN, big("-92233720368547758080"));
}

#[test]
fn increment_decrement_test() {
    let mut n = big("999999999");
    for _ in 0..5 {
        n.increment();
    }
    assert_eq!(n.to_string(), "1000000004");

    let mut n = big("999999999");
    for _ in 0..10 {
        n.decrement();
    }
    assert_eq!(n.to_string(), "999999989");

    // Crossing zero flips the sign cleanly in both directions.
    let mut n = big("-2");
    for _ in 0..4 {
        n.increment();
    }
    assert_eq!(n, big("2"));
    for _ in 0..4 {
        n.decrement();
    }
    assert_eq!(n, big("-2"));
}

#[test]
fn negation_test() {
    assert_eq!(-big("5"), big("-5"));
    assert_eq!(-big("-5"), big("5"));
    assert_eq!(-&big("5"), big("-5"));

    let zero = -BigInt::new();
    assert_eq!(zero.sign(), 0);
    assert_eq!(zero.to_string(), "0");

    assert_eq!(big("-123").abs(), big("123"));
    assert_eq!(big("123").abs(), big("123"));
}

#[test]
fn comparison_test() {
    assert!(big("-1000000000000") < big("-1"));
    assert!(big("-1") < BigInt::new());
    assert!(BigInt::new() < big("1"));
    assert!(big("1") < big("1000000000000"));
    assert!(big("2") > big("-3"));
    assert_eq!(big("007"), big("7"));

    let mut values = vec![big("5"), big("-10"), BigInt::new(), big("1000000000")];
    values.sort();
    let sorted: Vec<String> = values.iter().map(BigInt::to_string).collect();
    assert_eq!(sorted, ["-10", "0", "5", "1000000000"]);
}

#[test]
fn hash_consistency_test() {
    let mut set = HashSet::new();
    set.insert(big("123456789123456789"));
    set.insert(big("-123456789123456789"));
    assert!(set.contains(&big("0000123456789123456789")));
    assert!(!set.contains(&big("123456789123456790")));

    // Canonical zero hashes identically no matter how it was produced.
    set.insert(big("5") + big("-5"));
    assert!(set.contains(&big("-0")));
}
