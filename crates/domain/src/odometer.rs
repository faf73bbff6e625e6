//! Mixed-radix counting.
//!
//! Walks every digit assignment for a list of radices, with digit 0 as the
//! most significant position and the last digit turning fastest. Iterative so
//! the number of positions never shows up as stack depth.

/// Odometer over `radices`.
///
/// Yields `radices.iter().product()` assignments. A zero radix yields nothing;
/// an empty radix list yields one empty assignment.
#[derive(Debug, Clone)]
pub struct MixedRadix {
    radices: Vec<usize>,
    digits: Vec<usize>,
    remaining: usize,
}

impl MixedRadix {
    pub fn new(radices: Vec<usize>) -> Self {
        let remaining = radices.iter().fold(1usize, |acc, r| acc.saturating_mul(*r));
        let digits = vec![0; radices.len()];
        Self {
            radices,
            digits,
            remaining,
        }
    }

    fn advance(&mut self) {
        for (digit, radix) in self.digits.iter_mut().zip(&self.radices).rev() {
            *digit += 1;
            if *digit < *radix {
                return;
            }
            *digit = 0;
        }
    }
}

impl Iterator for MixedRadix {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.digits.clone();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for MixedRadix {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_digit_turns_fastest() {
        let all: Vec<Vec<usize>> = MixedRadix::new(vec![2, 3]).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
    }

    #[test]
    fn yields_product_of_radices() {
        let odometer = MixedRadix::new(vec![3, 1, 4, 2]);
        assert_eq!(odometer.len(), 24);
        assert_eq!(odometer.count(), 24);
    }

    #[test]
    fn zero_radix_yields_nothing() {
        assert_eq!(MixedRadix::new(vec![3, 0, 2]).next(), None);
    }

    #[test]
    fn single_position_radix_one() {
        let all: Vec<Vec<usize>> = MixedRadix::new(vec![1]).collect();
        assert_eq!(all, vec![vec![0]]);
    }

    #[test]
    fn empty_radices_yield_one_empty_assignment() {
        let all: Vec<Vec<usize>> = MixedRadix::new(vec![]).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn deep_odometer_does_not_recurse() {
        let mut radices = vec![1; 64];
        radices.push(2);
        let last: Vec<usize> = MixedRadix::new(radices).last().unwrap();
        assert_eq!(last[64], 1);
        assert!(last[..64].iter().all(|d| *d == 0));
    }
}
