//! Bounded sequences of integer powers.

use num_traits::PrimInt;
use std::iter::FusedIterator;

/// Lazy sequence of the powers `1, base, base^2, ...` that do not exceed an
/// inclusive upper limit.
///
/// The sequence ends at the first power greater than the limit, at the first
/// power that is not representable in `T`, or as soon as the powers start
/// repeating (which happens for bases `-1`, `0` and `1`). It is empty if the
/// limit is below one.
#[derive(Clone, Debug)]
pub struct PowerSequence<T> {
    base: T,
    limit: T,
    next: Option<T>,
    powers_repeat: bool,
}

/// Returns the sequence of powers of `base` that are no larger than `limit`.
///
/// # Examples
/// ```
/// use exercises_math::powers;
///
/// assert_eq!(powers(3, 10).collect::<Vec<_>>(), [1, 3, 9]);
/// assert_eq!(powers(-2, 10).collect::<Vec<_>>(), [1, -2, 4, -8]);
/// assert!(powers(2, 0).next().is_none());
/// ```
pub fn powers<T: PrimInt>(base: T, limit: T) -> PowerSequence<T> {
    PowerSequence::new(base, limit)
}

impl<T: PrimInt> PowerSequence<T> {
    pub fn new(base: T, limit: T) -> Self {
        let first = T::one();
        // Only 0, 1 and -1 square to 0 or 1
        let powers_repeat = base
            .checked_mul(&base)
            .is_some_and(|squared| squared <= first);
        Self {
            base,
            limit,
            next: (first <= limit).then_some(first),
            powers_repeat,
        }
    }

    pub fn base(&self) -> T {
        self.base
    }

    pub fn limit(&self) -> T {
        self.limit
    }

    fn power_after(&self, value: T) -> Option<T> {
        // For a repeating base the distinct powers are exactly 1 and the base
        if self.powers_repeat && value == self.base {
            return None;
        }
        let next = value.checked_mul(&self.base)?;
        (next <= self.limit).then_some(next)
    }
}

impl<T: PrimInt> Iterator for PowerSequence<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.next.take()?;
        self.next = self.power_after(value);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next.is_some() {
            (1, None)
        } else {
            (0, Some(0))
        }
    }
}

impl<T: PrimInt> FusedIterator for PowerSequence<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn collect_powers(base: i64, limit: i64) -> Vec<i64> {
        powers(base, limit).collect()
    }

    #[test]
    fn powers_of_three_up_to_ten_are_correct() {
        assert_eq!(collect_powers(3, 10), [1, 3, 9]);
    }

    #[test]
    fn limit_equal_to_power_is_inclusive() {
        assert_eq!(collect_powers(2, 8), [1, 2, 4, 8]);
        assert_eq!(collect_powers(2, 1), [1]);
    }

    #[test]
    fn limit_below_one_gives_empty_sequence() {
        assert!(collect_powers(2, 0).is_empty());
        assert!(collect_powers(1, -5).is_empty());
        assert!(collect_powers(0, 0).is_empty());
    }

    #[test]
    fn base_one_yields_one_once() {
        assert_eq!(collect_powers(1, 1), [1]);
        assert_eq!(collect_powers(1, 1_000_000), [1]);
    }

    #[test]
    fn base_zero_yields_one_then_zero_once() {
        assert_eq!(collect_powers(0, 1), [1, 0]);
        assert_eq!(collect_powers(0, 100), [1, 0]);
    }

    #[test]
    fn base_minus_one_yields_each_distinct_power_once() {
        assert_eq!(collect_powers(-1, 1), [1, -1]);
        assert_eq!(collect_powers(-1, 50), [1, -1]);
    }

    #[test]
    fn negative_base_stops_at_first_power_above_limit() {
        assert_eq!(collect_powers(-2, 10), [1, -2, 4, -8]);
        assert_eq!(collect_powers(-3, 10), [1, -3, 9, -27]);
    }

    #[test]
    fn sequence_stops_before_overflowing() {
        let all: Vec<u8> = powers(2_u8, u8::MAX).collect();
        assert_eq!(all, [1, 2, 4, 8, 16, 32, 64, 128]);

        let count = powers(10_i64, i64::MAX).count();
        assert_eq!(count, 19);
    }

    #[test]
    fn exhausted_sequence_stays_exhausted() {
        let mut sequence = powers(5, 5);
        assert_eq!(sequence.next(), Some(1));
        assert_eq!(sequence.next(), Some(5));
        assert_eq!(sequence.next(), None);
        assert_eq!(sequence.next(), None);
    }

    #[test]
    fn separate_sequences_do_not_share_state() {
        let mut first = powers(2, 100);
        let second = powers(2, 100);
        first.next();
        first.next();
        assert_eq!(first.next(), Some(4));
        assert_eq!(second.take(3).collect::<Vec<_>>(), [1, 2, 4]);
    }

    #[test]
    fn sequence_is_lazy() {
        let first_three: Vec<i64> = powers(7, i64::MAX).take(3).collect();
        assert_eq!(first_three, [1, 7, 49]);
    }

    #[test]
    fn base_and_limit_are_kept() {
        let sequence = powers(4_i32, 70);
        assert_eq!(sequence.base(), 4);
        assert_eq!(sequence.limit(), 70);
    }

    proptest! {
        #[test]
        fn yields_exactly_powers_not_exceeding_limit(base in 2_i64..50, limit in -10_i64..1_000_000_000) {
            let yielded = collect_powers(base, limit);

            let mut expected = Vec::new();
            let mut power = 1;
            while power <= limit {
                expected.push(power);
                power *= base;
            }
            prop_assert_eq!(&yielded, &expected);

            if let Some(&last) = yielded.last() {
                prop_assert!(last <= limit);
                prop_assert!(last * base > limit);
            }
        }
    }

    proptest! {
        #[test]
        fn base_one_yields_one_for_any_positive_limit(limit in 1_i64..i64::MAX) {
            prop_assert_eq!(collect_powers(1, limit), vec![1]);
        }
    }
}
