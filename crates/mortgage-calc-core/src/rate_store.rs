//! Shared annual interest rate used by every payment and mortgage calculation.
//!
//! `RateStore` is a cheap cloneable handle: clones observe the same value,
//! separately constructed stores are independent.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::MortgageError;
use crate::types::Rate;
use crate::MortgageResult;

/// Annual rate in effect when nothing else is configured (2.5%).
pub const DEFAULT_INTEREST_RATE: Rate = dec!(0.025);

#[derive(Debug, Clone)]
pub struct RateStore {
    rate: Arc<RwLock<Rate>>,
}

impl RateStore {
    /// Create a store holding `rate`, which must be strictly positive.
    pub fn new(rate: Rate) -> MortgageResult<Self> {
        ensure_positive(rate)?;
        Ok(Self {
            rate: Arc::new(RwLock::new(rate)),
        })
    }

    /// The rate currently in effect.
    pub fn current(&self) -> Rate {
        // A poisoned lock still holds a whole Decimal; there is no torn state to guard.
        *self.rate.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Swap in `new_rate` and hand back the rate it replaced.
    ///
    /// Non-positive rates are rejected and leave the stored value untouched.
    pub fn replace(&self, new_rate: Rate) -> MortgageResult<Rate> {
        ensure_positive(new_rate)?;
        let mut guard = self.rate.write().unwrap_or_else(PoisonError::into_inner);
        Ok(std::mem::replace(&mut *guard, new_rate))
    }
}

impl Default for RateStore {
    fn default() -> Self {
        Self {
            rate: Arc::new(RwLock::new(DEFAULT_INTEREST_RATE)),
        }
    }
}

fn ensure_positive(rate: Rate) -> MortgageResult<()> {
    if rate <= Decimal::ZERO {
        return Err(MortgageError::InvalidRate(format!(
            "interest rate must be greater than 0, got {rate}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::thread;

    #[test]
    fn test_default_rate() {
        let store = RateStore::default();
        assert_eq!(store.current(), dec!(0.025));
    }

    #[test]
    fn test_replace_returns_previous_and_stores_new() {
        let store = RateStore::default();
        let previous = store.replace(dec!(0.0399)).unwrap();
        assert_eq!(previous, dec!(0.025));
        assert_eq!(store.current(), dec!(0.0399));

        let previous = store.replace(dec!(0.05)).unwrap();
        assert_eq!(previous, dec!(0.0399));
        assert_eq!(store.current(), dec!(0.05));
    }

    #[test]
    fn test_replace_rejects_zero_and_negative() {
        let store = RateStore::new(dec!(0.03)).unwrap();

        let zero = store.replace(Decimal::ZERO);
        assert!(matches!(zero, Err(MortgageError::InvalidRate(_))));

        let negative = store.replace(dec!(-1));
        assert!(matches!(negative, Err(MortgageError::InvalidRate(_))));

        assert_eq!(store.current(), dec!(0.03));
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert!(RateStore::new(Decimal::ZERO).is_err());
        assert!(RateStore::new(dec!(-0.01)).is_err());
    }

    #[test]
    fn test_clones_share_state_but_instances_do_not() {
        let first = RateStore::default();
        let alias = first.clone();
        let other = RateStore::default();

        alias.replace(dec!(0.07)).unwrap();

        assert_eq!(first.current(), dec!(0.07));
        assert_eq!(other.current(), DEFAULT_INTEREST_RATE);
    }

    #[test]
    fn test_concurrent_writers_leave_one_of_the_written_values() {
        let store = RateStore::default();
        let candidates: Vec<Rate> = (1..=8).map(|i| Decimal::new(i, 2)).collect();

        let handles: Vec<_> = candidates
            .iter()
            .map(|&rate| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        store.replace(rate).unwrap();
                        let seen = store.current();
                        assert!(seen > Decimal::ZERO);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(candidates.contains(&store.current()));
    }
}
