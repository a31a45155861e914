//! Lag operators. The first `n` positions are undefined.

use super::Series;

/// `out[i] = s[i - n]` for `i >= n`, NaN before that.
pub fn shift(s: &[f64], n: usize) -> Series {
    let len = s.len();
    let mut result = vec![f64::NAN; len];
    for i in n..len {
        result[i] = s[i - n];
    }
    result
}

/// `out[i] = s[i] - s[i - n]` for `i >= n`, NaN before that.
pub fn delta(s: &[f64], n: usize) -> Series {
    let len = s.len();
    let mut result = vec![f64::NAN; len];
    for i in n..len {
        result[i] = s[i] - s[i - n];
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_to_ten() -> Vec<f64> {
        (1..=10).map(|v| v as f64).collect()
    }

    #[test]
    fn shift_by_two() {
        let out = shift(&one_to_ten(), 2);
        assert_eq!(out.len(), 10);
        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert_eq!(out[2], 1.0);
        assert_eq!(out[9], 8.0);
    }

    #[test]
    fn shift_zero_is_identity() {
        assert_eq!(shift(&one_to_ten(), 0), one_to_ten());
    }

    #[test]
    fn shift_beyond_length_is_all_nan() {
        assert!(shift(&[1.0, 2.0], 5).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn delta_basic() {
        let out = delta(&[1.0, 4.0, 9.0, 16.0], 1);
        assert!(out[0].is_nan());
        assert_eq!(&out[1..], &[3.0, 5.0, 7.0]);

        let out2 = delta(&[1.0, 4.0, 9.0, 16.0], 2);
        assert!(out2[1].is_nan());
        assert_eq!(&out2[2..], &[8.0, 12.0]);
    }
}
