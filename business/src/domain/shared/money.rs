use serde::{Deserialize, Serialize};

/// One subunit step per unit (stotinki per lev, cents per euro).
const SUBUNITS_PER_UNIT: i64 = 100;

#[derive(Debug, thiserror::Error)]
pub enum MoneyError {
    #[error("money.invalid_format")]
    InvalidFormat,
    #[error("money.unknown_currency")]
    UnknownCurrency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Bgn,
    Eur,
    Usd,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Bgn => write!(f, "BGN"),
            Currency::Eur => write!(f, "EUR"),
            Currency::Usd => write!(f, "USD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BGN" => Ok(Currency::Bgn),
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            _ => Err(MoneyError::UnknownCurrency),
        }
    }
}

/// A fixed-point amount of money in minor units of its currency.
///
/// Mixing currencies in arithmetic is a programming error, not a runtime
/// condition, so `add` and `subtract` panic on mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Panics if the currencies differ.
    pub fn add(self, other: Money) -> Money {
        assert_eq!(
            self.currency, other.currency,
            "cannot add amounts in different currencies"
        );
        Money::new(self.amount + other.amount, self.currency)
    }

    /// Panics if the currencies differ.
    pub fn subtract(self, other: Money) -> Money {
        assert_eq!(
            self.currency, other.currency,
            "cannot subtract amounts in different currencies"
        );
        Money::new(self.amount - other.amount, self.currency)
    }

    pub fn multiply_int(self, factor: i64) -> Money {
        Money::new(self.amount * factor, self.currency)
    }

    /// Scales the amount by `factor`, truncating toward zero.
    pub fn multiply_factor(self, factor: f64) -> Money {
        Money::new((self.amount as f64 * factor) as i64, self.currency)
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{:02} {}",
            self.amount / SUBUNITS_PER_UNIT,
            (self.amount % SUBUNITS_PER_UNIT).abs(),
            self.currency
        )
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyError;

    /// Parses the literal form `"<units>.<subunits> <currency code>"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [amount_token, currency_token] = tokens.as_slice() else {
            return Err(MoneyError::InvalidFormat);
        };

        let currency = currency_token.parse::<Currency>()?;

        let amount_parts: Vec<&str> = amount_token.split('.').collect();
        let [units_part, subunits_part] = amount_parts.as_slice() else {
            return Err(MoneyError::InvalidFormat);
        };

        let units = units_part
            .parse::<i64>()
            .map_err(|_| MoneyError::InvalidFormat)?;
        let subunits = subunits_part
            .parse::<i64>()
            .map_err(|_| MoneyError::InvalidFormat)?;
        if subunits < 0 || subunits >= SUBUNITS_PER_UNIT {
            return Err(MoneyError::InvalidFormat);
        }

        Ok(Money::new(units * SUBUNITS_PER_UNIT + subunits, currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_add_amounts_in_the_same_currency() {
        let total = Money::new(150, Currency::Bgn).add(Money::new(50, Currency::Bgn));
        assert_eq!(total, Money::new(200, Currency::Bgn));
    }

    #[test]
    #[should_panic(expected = "different currencies")]
    fn should_panic_when_adding_across_currencies() {
        let _ = Money::new(150, Currency::Bgn).add(Money::new(50, Currency::Eur));
    }

    #[test]
    fn should_subtract_amounts_in_the_same_currency() {
        let rest = Money::new(150, Currency::Bgn).subtract(Money::new(50, Currency::Bgn));
        assert_eq!(rest, Money::new(100, Currency::Bgn));
    }

    #[test]
    #[should_panic(expected = "different currencies")]
    fn should_panic_when_subtracting_across_currencies() {
        let _ = Money::new(150, Currency::Bgn).subtract(Money::new(50, Currency::Usd));
    }

    #[test]
    fn should_multiply_by_integer_without_drift() {
        let price = Money::new(333, Currency::Bgn);
        assert_eq!(price.multiply_int(3), Money::new(999, Currency::Bgn));
    }

    #[test]
    fn should_truncate_toward_zero_when_multiplying_by_factor() {
        let price = Money::new(199, Currency::Bgn);
        assert_eq!(price.multiply_factor(0.5), Money::new(99, Currency::Bgn));
    }

    #[test]
    fn should_format_amount_with_two_digit_subunits() {
        assert_eq!(Money::new(105, Currency::Bgn).to_string(), "1.05 BGN");
        assert_eq!(Money::new(1999, Currency::Eur).to_string(), "19.99 EUR");
    }

    #[test]
    fn should_parse_literal_form() {
        let money: Money = "12.34 BGN".parse().unwrap();
        assert_eq!(money, Money::new(1234, Currency::Bgn));
    }

    #[test]
    fn should_reject_missing_currency_token() {
        assert!("12.34".parse::<Money>().is_err());
    }

    #[test]
    fn should_reject_extra_tokens() {
        assert!("12.34 BGN extra".parse::<Money>().is_err());
    }

    #[test]
    fn should_reject_amount_without_decimal_point() {
        assert!("1234 BGN".parse::<Money>().is_err());
    }

    #[test]
    fn should_reject_amount_with_two_decimal_points() {
        assert!("1.2.3 BGN".parse::<Money>().is_err());
    }

    #[test]
    fn should_reject_unknown_currency() {
        assert!("12.34 XXX".parse::<Money>().is_err());
    }

    proptest! {
        #[test]
        fn string_round_trip_preserves_value(amount in 0i64..1_000_000_000) {
            let money = Money::new(amount, Currency::Bgn);
            let parsed: Money = money.to_string().parse().unwrap();
            prop_assert_eq!(parsed, money);
        }

        #[test]
        fn integer_multiplication_distributes_over_addition(
            a in 0i64..1_000_000,
            b in 0i64..1_000_000,
            n in 0i64..1_000,
        ) {
            let left = Money::new(a, Currency::Bgn)
                .add(Money::new(b, Currency::Bgn))
                .multiply_int(n);
            let right = Money::new(a, Currency::Bgn)
                .multiply_int(n)
                .add(Money::new(b, Currency::Bgn).multiply_int(n));
            prop_assert_eq!(left, right);
        }
    }
}
