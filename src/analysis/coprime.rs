//! Coprimality gate. A finite Frobenius number exists only when the
//! generators share no common factor, so this runs before any graph work.

/// Euclid's algorithm. `gcd(x, 0) == x`.
#[inline]
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Folds `gcd` over the whole sequence, stopping early once the running value hits 1.
///
/// Expects at least two positive values; validation happens upstream.
pub fn set_gcd(values: &[u32]) -> u32 {
    let mut iter = values.iter().copied();
    let mut g = match (iter.next(), iter.next()) {
        (Some(a), Some(b)) => gcd(a, b),
        (Some(a), None) => a,
        _ => return 0,
    };
    for v in iter {
        if g == 1 {
            break;
        }
        g = gcd(v, g);
    }
    g
}

pub fn gcd_equals_one(values: &[u32]) -> bool {
    set_gcd(values) == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(12, 18, 6)]
    #[case(18, 12, 6)]
    #[case(7, 0, 7)]
    #[case(0, 7, 7)]
    #[case(17, 5, 1)]
    #[case(4093, 8191, 1)]
    fn test_gcd(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
        assert_eq!(gcd(a, b), expected);
    }

    #[rstest]
    #[case(&[3, 5], true)] // pair alone must be enough
    #[case(&[2, 4], false)]
    #[case(&[6, 10, 15], true)] // pairwise non-coprime, coprime overall
    #[case(&[6, 12, 18, 24], false)]
    #[case(&[47, 74, 97, 126, 157, 188], true)]
    fn test_gcd_equals_one(#[case] values: &[u32], #[case] expected: bool) {
        assert_eq!(gcd_equals_one(values), expected);
    }

    #[test]
    fn test_set_gcd_reports_common_factor() {
        assert_eq!(set_gcd(&[6, 12, 18, 24]), 6);
        assert_eq!(set_gcd(&[10, 4, 6]), 2);
    }
}
