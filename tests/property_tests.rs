//! Property tests for the arithmetic and text functions.

use proptest::prelude::*;
use small_calc::{
    add, count_words, divide, gcd, is_palindrome, remainder, reverse, subtract, CalcError,
};

proptest! {
    #[test]
    fn test_add_is_commutative(a in any::<i64>(), b in any::<i64>()) {
        match (add(a, b), add(b, a)) {
            (Ok(x), Ok(y)) => prop_assert_eq!(x, y),
            (Err(CalcError::Overflow { .. }), Err(CalcError::Overflow { .. })) => {}
            (left, right) => prop_assert!(false, "mismatch: {:?} vs {:?}", left, right),
        }
    }

    #[test]
    fn test_add_matches_wide_arithmetic(a in any::<i64>(), b in any::<i64>()) {
        let wide = a as i128 + b as i128;
        match add(a, b) {
            Ok(sum) => prop_assert_eq!(sum as i128, wide),
            Err(_) => prop_assert!(wide > i64::MAX as i128 || wide < i64::MIN as i128),
        }
    }

    #[test]
    fn test_subtract_is_antisymmetric(a in -1_000_000_000i64..1_000_000_000, b in -1_000_000_000i64..1_000_000_000) {
        prop_assert_eq!(subtract(a, b).unwrap(), -subtract(b, a).unwrap());
    }

    #[test]
    fn test_division_identity(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        prop_assume!(!(a == i64::MIN && b == -1));
        let q = divide(a, b).unwrap();
        let r = remainder(a, b).unwrap();
        prop_assert_eq!(q as i128 * b as i128 + r as i128, a as i128);
        // Truncation toward zero: the remainder never has the opposite sign of a.
        prop_assert!(r == 0 || (r < 0) == (a < 0));
        prop_assert!(r.unsigned_abs() < b.unsigned_abs());
    }

    #[test]
    fn test_divide_by_zero_always_fails(a in any::<i64>()) {
        prop_assert!(matches!(divide(a, 0), Err(CalcError::DivisionByZero)));
    }

    #[test]
    fn test_gcd_symmetric_and_divides(a in any::<i64>(), b in any::<i64>()) {
        let g = gcd(a, b);
        prop_assert_eq!(g, gcd(b, a));
        if g != 0 {
            prop_assert_eq!(a.unsigned_abs() % g, 0);
            prop_assert_eq!(b.unsigned_abs() % g, 0);
        } else {
            prop_assert_eq!((a, b), (0, 0));
        }
    }

    #[test]
    fn test_reverse_twice_is_identity(s in any::<String>()) {
        let once = reverse(s.as_str()).unwrap();
        prop_assert_eq!(reverse(once.as_str()).unwrap(), s);
    }

    #[test]
    fn test_reverse_preserves_length(s in any::<String>()) {
        let reversed = reverse(s.as_str()).unwrap();
        prop_assert_eq!(reversed.chars().count(), s.chars().count());
    }

    #[test]
    fn test_mirrored_strings_are_palindromes(s in "[a-z]{0,20}") {
        let mirrored = format!("{}{}", s, reverse(s.as_str()).unwrap());
        prop_assert!(is_palindrome(mirrored.as_str()));
    }

    #[test]
    fn test_count_words_matches_joined_words(words in prop::collection::vec("[a-z]{1,8}", 0..10), sep in "[ \t\n]{1,3}") {
        let text = format!("{sep}{}{sep}", words.join(&sep));
        prop_assert_eq!(count_words(text.as_str()), words.len());
    }
}
