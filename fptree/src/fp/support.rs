/// How the minimum support threshold is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinimumSupport {
    /// Absolute number of transactions.
    Count(u64),
    /// Share of all transactions, in `(0, 1]`.
    Fraction(f64),
}

impl MinimumSupport {
    /// Absolute threshold for a dataset of `num_transactions` transactions.
    /// Fractions round up, so `0.5` of 5 transactions needs 3. The result is
    /// never below 1.
    pub fn resolve(self, num_transactions: usize) -> Result<u64, SupportError> {
        match self {
            MinimumSupport::Count(count) => Ok(count.max(1)),
            MinimumSupport::Fraction(fraction) => {
                if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
                    return Err(SupportError::InvalidFraction(fraction));
                }
                if num_transactions == 0 {
                    return Err(SupportError::NoTransactions);
                }
                let min_count = (fraction * num_transactions as f64).ceil() as u64;
                Ok(min_count.max(1))
            }
        }
    }
}

impl From<u64> for MinimumSupport {
    fn from(count: u64) -> Self {
        MinimumSupport::Count(count)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SupportError {
    InvalidFraction(f64),
    NoTransactions,
}

impl std::fmt::Display for SupportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SupportError::InvalidFraction(fraction) => {
                write!(f, "Minimum support fraction must be in (0, 1], got {}", fraction)
            }
            SupportError::NoTransactions => {
                write!(f, "Relative minimum support needs at least one transaction")
            }
        }
    }
}

impl std::error::Error for SupportError {}
