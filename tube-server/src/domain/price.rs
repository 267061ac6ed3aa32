//! Fare amounts.

use std::fmt;

/// A fare in minor currency units (pence).
///
/// TfL reports fares as integer pence. Keeping the integer avoids float
/// rounding; `Display` renders pounds with exactly two decimals.
///
/// ```
/// use tube_server::domain::Price;
///
/// let fare = Price::from_minor_units(250);
/// assert_eq!(fare.to_string(), "2.50");
/// assert_eq!(fare.pounds(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u32);

impl Price {
    /// Creates a price from a count of minor units.
    pub fn from_minor_units(pence: u32) -> Self {
        Self(pence)
    }

    /// Returns the price in major units (`minor / 100`).
    pub fn pounds(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimal_display() {
        assert_eq!(Price::from_minor_units(250).to_string(), "2.50");
        assert_eq!(Price::from_minor_units(5).to_string(), "0.05");
        assert_eq!(Price::from_minor_units(0).to_string(), "0.00");
        assert_eq!(Price::from_minor_units(1234).to_string(), "12.34");
    }

    #[test]
    fn pounds() {
        assert_eq!(Price::from_minor_units(250).pounds(), 2.5);
        assert_eq!(Price::from_minor_units(99).pounds(), 0.99);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display always has exactly two decimal digits
        #[test]
        fn always_two_decimals(pence in any::<u32>()) {
            let text = Price::from_minor_units(pence).to_string();
            let (_, decimals) = text.split_once('.').unwrap();
            prop_assert_eq!(decimals.len(), 2);
        }

        /// Display agrees with the float value rounded to two places
        #[test]
        fn display_matches_pounds(pence in 0u32..10_000_000) {
            let price = Price::from_minor_units(pence);
            prop_assert_eq!(price.to_string(), format!("{:.2}", price.pounds()));
        }
    }
}
