//! Building-blocks for base-10^9 arbitrary-precision math.
//!
//! These functions operate on little-endian digit sequences representing
//! non-negative magnitudes; sign handling lives one level up in `BigInt`.
//! For a sequence `[0, 1, 2]`, `2` is the most significant digit and `0` the
//! least significant. Canonical form has no most-significant zero digits
//! except the single digit representing zero itself.
//!
//! Every intermediate sum is computed in `u64`, which holds `BASE * BASE`
//! plus a carry without wraparound; that headroom is the numeric-safety
//! contract the whole kernel relies on.

use crate::digits::{Digit, DigitVec};
use core::cmp::Ordering;

/// Radix of the internal representation. Chosen so the product of two digits
/// plus a carry fits the 64-bit computation type.
pub(crate) const BASE: u64 = 1_000_000_000;

/// Decimal digits per stored digit: `BASE = 10^DIGIT_WIDTH`.
pub(crate) const DIGIT_WIDTH: usize = 9;

/// Compare the magnitudes encoded by `x` and `y`.
///
/// Length decides first - with no most-significant zero digits stored, a
/// shorter sequence is numerically smaller - then digits are compared from
/// the most significant end. Sequences of equal length may carry leading
/// zeros; the digit-wise pass handles them correctly.
pub(crate) fn compare(x: &[Digit], y: &[Digit]) -> Ordering {
    if x.len() != y.len() {
        return x.len().cmp(&y.len());
    }
    let pairs = x.iter().rev().zip(y.iter().rev());
    for (xi, yi) in pairs {
        match xi.cmp(yi) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Pop most-significant zero digits, always keeping at least one digit so
/// that zero stays representable as `[0]`.
pub(crate) fn normalize(x: &mut DigitVec) {
    while x.len() > 1 && x[x.len() - 1] == 0 {
        x.pop();
    }
}

/// AddAssign `y`, conceptually shifted left by `shift` digit positions, into
/// `x`, growing `x` as needed and carrying past its end.
///
/// `x` and `y` can never be the same storage here - the `&mut`/`&` split
/// makes aliasing unrepresentable - so callers that logically add a value to
/// itself must pass a copy. `shift` must not exceed `x.len()`; every shifted
/// call site grows `x` digit by digit, so the gap case cannot arise.
pub(crate) fn iadd_shifted(x: &mut DigitVec, y: &[Digit], shift: usize) {
    debug_assert!(shift <= x.len());
    if y.len() + shift > x.capacity() {
        let needed = y.len() + shift + 1 - x.len();
        x.reserve(needed);
    }

    let mut sum: u64 = 0;
    let common = usize::min(y.len() + shift, x.len());
    let mut index = shift;

    // Positions where x and the shifted y overlap.
    while index < common {
        sum += x[index] as u64 + y[index - shift] as u64;
        x[index] = (sum % BASE) as Digit;
        sum /= BASE;
        index += 1;
    }
    // y extends past the end of x.
    while index - shift < y.len() {
        sum += y[index - shift] as u64;
        x.push((sum % BASE) as Digit);
        sum /= BASE;
        index += 1;
    }
    // Carry into the remainder of x.
    while index < x.len() && sum != 0 {
        sum += x[index] as u64;
        x[index] = (sum % BASE) as Digit;
        sum /= BASE;
        index += 1;
    }
    while sum != 0 {
        x.push((sum % BASE) as Digit);
        sum /= BASE;
    }
}

/// SubAssign `y` from `x` with borrow propagation, then canonicalize the
/// length. The caller guarantees `x`'s magnitude is at least `y`'s; the
/// kernel does not compare first.
pub(crate) fn isub(x: &mut DigitVec, y: &[Digit]) {
    debug_assert!(compare(x, y) != Ordering::Less);

    let mut borrow: u64 = 0;
    for i in 0..y.len() {
        let take = y[i] as u64 + borrow;
        let xi = x[i] as u64;
        if take > xi {
            x[i] = (BASE - (take - xi)) as Digit;
            borrow = 1;
        } else {
            x[i] = (xi - take) as Digit;
            borrow = 0;
        }
    }
    let mut i = y.len();
    while borrow != 0 && i < x.len() {
        let xi = x[i] as u64;
        if borrow > xi {
            x[i] = (BASE - (borrow - xi)) as Digit;
            borrow = 1;
        } else {
            x[i] = (xi - borrow) as Digit;
            borrow = 0;
        }
        i += 1;
    }
    debug_assert!(borrow == 0);

    normalize(x);
}

/// Increase the magnitude by one unit.
pub(crate) fn iadd_one(x: &mut DigitVec) {
    for i in 0..x.len() {
        if x[i] as u64 + 1 == BASE {
            x[i] = 0;
        } else {
            x[i] += 1;
            return;
        }
    }
    x.push(1);
}

/// Decrease the magnitude by one unit. Zero cannot be decremented; routing a
/// zero value through a sign flip instead is the caller's responsibility.
pub(crate) fn isub_one(x: &mut DigitVec) {
    debug_assert!(!(x.len() == 1 && x[0] == 0));
    for i in 0..x.len() {
        if x[i] == 0 {
            x[i] = (BASE - 1) as Digit;
        } else {
            x[i] -= 1;
            break;
        }
    }
    normalize(x);
}

/// AddAssign a scalar `k < BASE * BASE` to the magnitude.
pub(crate) fn iadd_small(x: &mut DigitVec, k: u64) {
    debug_assert!(k < BASE * BASE);
    match k {
        0 => {}
        1 => iadd_one(x),
        _ => {
            let mut sum = k;
            for i in 0..x.len() {
                if sum == 0 {
                    return;
                }
                sum += x[i] as u64;
                x[i] = (sum % BASE) as Digit;
                sum /= BASE;
            }
            while sum != 0 {
                x.push((sum % BASE) as Digit);
                sum /= BASE;
            }
        }
    }
}

/// Replace the magnitude with `|x - k|` for a scalar `k < BASE * BASE`.
///
/// Returns true when `x >= k` held, false when the subtraction crossed zero
/// and the stored magnitude is now `k - x`; the caller uses that signal to
/// flip the sign.
pub(crate) fn isub_small(x: &mut DigitVec, k: u64) -> bool {
    debug_assert!(k < BASE * BASE);
    debug_assert!(!x.is_empty());

    if x.len() <= 2 {
        let mut current = x[0] as u64;
        if x.len() == 2 {
            current += x[1] as u64 * BASE;
        }
        let (kept, result) = if k > current {
            (false, k - current)
        } else {
            (true, current - k)
        };
        x.resize(1);
        x[0] = (result % BASE) as Digit;
        if result >= BASE {
            x.push((result / BASE) as Digit);
        }
        kept
    } else {
        // At least three digits, so x >= BASE^2 > k and the borrow always
        // resolves before running off the end.
        let low = [(k % BASE) as Digit, (k / BASE) as Digit];
        isub(x, &low);
        true
    }
}

/// MulAssign a scalar `k < BASE * BASE`. The accumulator is 128-bit so the
/// full documented range of `k` cannot overflow an intermediate product.
pub(crate) fn imul_small(x: &mut DigitVec, k: u64) {
    debug_assert!((k as u128) < BASE as u128 * BASE as u128);
    match k {
        0 => {
            x.resize(1);
            x[0] = 0;
        }
        1 => {}
        _ => {
            let mut carry: u128 = 0;
            for i in 0..x.len() {
                carry += k as u128 * x[i] as u128;
                x[i] = (carry % BASE as u128) as Digit;
                carry /= BASE as u128;
            }
            while carry != 0 {
                x.push((carry % BASE as u128) as Digit);
                carry /= BASE as u128;
            }
        }
    }
}

/// Grade-school multiplication, `O(x.len() * y.len())`: scale a copy of the
/// longer operand by each digit of the shorter one and accumulate with the
/// matching shift.
pub(crate) fn mul(x: &[Digit], y: &[Digit]) -> DigitVec {
    let (bigger, smaller) = if x.len() >= y.len() { (x, y) } else { (y, x) };

    let mut product = DigitVec::with_capacity(x.len() + y.len());
    product.push(0);
    for (i, &digit) in smaller.iter().enumerate() {
        let mut part = DigitVec::from_slice(bigger);
        imul_small(&mut part, digit as u64);
        iadd_shifted(&mut product, &part, i);
    }
    product
}

/// Compute one quotient digit of `window / divisor`, leaving the remainder
/// in `window`.
///
/// `window` must be within one digit of `divisor`'s length, with a nonzero
/// top digit when longer, and its magnitude must stay below
/// `divisor * BASE`; this is the invariant [`div_rem`]'s sliding window
/// maintains. Three phases:
///
/// 1. estimate the digit from the leading digits of each operand - never
///    too low, rarely too high;
/// 2. when too high, retry with the safely-low estimate obtained from the
///    divisor's top digit plus one, and accept it if the remainder already
///    dropped below the divisor;
/// 3. otherwise binary-search between the two estimates, finishing with a
///    linear probe once the gap is small.
pub(crate) fn div_step(window: &mut DigitVec, divisor: &[Digit]) -> Digit {
    debug_assert!(!window.is_empty() && !divisor.is_empty());
    debug_assert!(window.len() >= divisor.len() && window.len() <= divisor.len() + 1);
    debug_assert!(divisor[divisor.len() - 1] != 0);
    debug_assert!(window.len() == divisor.len() || window[window.len() - 1] != 0);

    match compare(window, divisor) {
        Ordering::Less => return 0,
        Ordering::Equal => {
            window.as_mut_slice().fill(0);
            return 1;
        }
        Ordering::Greater => {}
    }

    let divisor_top = divisor[divisor.len() - 1] as u64;
    let window_top = if window.len() > divisor.len() {
        window[window.len() - 1] as u64 * BASE + window[window.len() - 2] as u64
    } else {
        window[window.len() - 1] as u64
    };

    // Phase 1: direct estimate. Known to be >= the true digit.
    let estimate = window_top / divisor_top;
    let mut product = DigitVec::from_slice(divisor);
    imul_small(&mut product, estimate);
    if compare(window, &product) != Ordering::Less {
        isub(window, &product);
        return estimate as Digit;
    }

    // Phase 2: safely-low estimate. Known to be <= the true digit.
    let low = window_top / (divisor_top + 1);
    let mut product = DigitVec::from_slice(divisor);
    imul_small(&mut product, low);
    debug_assert!(compare(window, &product) != Ordering::Less);
    isub(window, &product);
    if compare(window, divisor) == Ordering::Less {
        return low as Digit;
    }
    iadd_shifted(window, &product, 0);

    // Phase 3: bounded binary search between the too-low and too-high
    // estimates, with a linear finish for small gaps.
    let mut lower = low;
    let mut upper = estimate;
    loop {
        if upper - lower <= 5 {
            for digit in lower..=upper {
                let mut product = DigitVec::from_slice(divisor);
                imul_small(&mut product, digit);
                match compare(window, &product) {
                    Ordering::Equal => {
                        window.as_mut_slice().fill(0);
                        return digit as Digit;
                    }
                    Ordering::Less => {
                        // Overshot by one: subtract (digit - 1) * divisor.
                        isub(&mut product, divisor);
                        isub(window, &product);
                        return (digit - 1) as Digit;
                    }
                    Ordering::Greater => {}
                }
            }
            unreachable!("quotient digit search exhausted");
        }

        let middle = lower + (upper - lower) / 2;
        let mut product = DigitVec::from_slice(divisor);
        imul_small(&mut product, middle);
        match compare(window, &product) {
            Ordering::Equal => {
                window.as_mut_slice().fill(0);
                return middle as Digit;
            }
            Ordering::Greater => lower = middle,
            Ordering::Less => upper = middle,
        }
    }
}

/// Long division of magnitudes: `(quotient, remainder)`.
///
/// Requires `dividend.len() >= divisor.len()`, both canonical, divisor
/// nonzero. Slides a window of the divisor's length (or one more) across the
/// dividend from the most significant end, producing one quotient digit per
/// position via [`div_step`]. Runs of leading zero digits in the remainder
/// are batched into a single multi-position slide instead of iterating one
/// digit at a time.
pub(crate) fn div_rem(dividend: &[Digit], divisor: &[Digit]) -> (DigitVec, DigitVec) {
    debug_assert!(dividend.len() >= divisor.len());

    let dlen = divisor.len();
    let mut window = DigitVec::from_slice(&dividend[dividend.len() - dlen..]);
    // Count of dividend digits not yet drawn into the window.
    let mut pending = dividend.len() - dlen;
    let mut last = pending == 0;
    // Most significant digit first; reversed once complete.
    let mut quotient = DigitVec::with_capacity(pending + 1);

    while pending > 0 || last {
        let digit = div_step(&mut window, divisor);
        quotient.push(digit);

        if window.len() != dlen {
            window.resize(dlen);
        }

        let lead_zeros = window.iter().rev().take_while(|&&d| d == 0).count();
        if lead_zeros > 0 {
            if pending > 0 {
                let step = lead_zeros.min(pending);
                let keep = dlen - step;
                window.copy_within(..keep, step);
                window[..step].copy_from_slice(&dividend[pending - step..pending]);
                pending -= step;
                // The skipped positions each contribute a zero quotient
                // digit; the final one is produced by the next div_step.
                for _ in 1..step {
                    quotient.push(0);
                }
            }
        } else if pending > 0 {
            // Remainder still occupies the full window; widen by one digit.
            window.resize(dlen + 1);
            window.copy_within(..dlen, 1);
            window[0] = dividend[pending - 1];
            pending -= 1;
        } else {
            debug_assert!(last);
        }

        if pending == 0 {
            last = !last;
        }
    }

    quotient.as_mut_slice().reverse();
    normalize(&mut quotient);
    normalize(&mut window);
    (quotient, window)
}
