//! Distance-based fares.
//!
//! Fares are banded: a flat base fare up to 10 km, then 100 won for every
//! started 5 km up to 50 km, then 100 won for every started 8 km beyond.

use crate::models::types::{Distance, Fare, Result, SubwayError};

/// Pricing constants for the distance bands
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FarePolicy {
    pub base_fare: Fare,
    /// Upper bound (inclusive) of the base band
    pub base_distance: Distance,
    /// Upper bound (inclusive) of the middle band
    pub middle_distance: Distance,
    pub middle_unit: Distance,
    pub long_unit: Distance,
    /// Charged once per started unit in either band
    pub surcharge: Fare,

    // Rider discounts
    pub discount_deduction: Fare,
    pub child_discount_percent: u32,
    pub teenager_discount_percent: u32,
}

impl Default for FarePolicy {
    fn default() -> Self {
        Self {
            base_fare: 1250,
            base_distance: 10,
            middle_distance: 50,
            middle_unit: 5,
            long_unit: 8,
            surcharge: 100,
            discount_deduction: 350,
            child_discount_percent: 50,
            teenager_discount_percent: 20,
        }
    }
}

impl FarePolicy {
    /// Reject policies whose bands cannot be priced.
    pub fn validate(&self) -> Result<()> {
        if self.middle_unit == 0 || self.long_unit == 0 {
            return Err(SubwayError::InvalidData(
                "Fare band units must be positive".into(),
            ));
        }

        if self.base_distance > self.middle_distance {
            return Err(SubwayError::InvalidData(format!(
                "Base band ({} km) extends past the middle band ({} km)",
                self.base_distance, self.middle_distance
            )));
        }

        if self.child_discount_percent > 100 || self.teenager_discount_percent > 100 {
            return Err(SubwayError::InvalidData(
                "Discount percentages cannot exceed 100".into(),
            ));
        }

        Ok(())
    }

    /// Fare for travelling `distance` km, saturating at `Fare::MAX`.
    ///
    /// The policy must pass [`FarePolicy::validate`].
    pub fn calculate(&self, distance: Distance) -> Fare {
        if distance <= self.base_distance {
            return self.base_fare;
        }

        let surcharge = u64::from(self.surcharge);
        let middle = u64::from(distance.min(self.middle_distance) - self.base_distance);
        let mut fare =
            u64::from(self.base_fare) + middle.div_ceil(u64::from(self.middle_unit)) * surcharge;

        if distance > self.middle_distance {
            let long = u64::from(distance - self.middle_distance);
            fare += long.div_ceil(u64::from(self.long_unit)) * surcharge;
        }

        Fare::try_from(fare).unwrap_or(Fare::MAX)
    }

    /// Apply the rider's age discount. Anonymous riders pay the full fare.
    pub fn discounted(&self, fare: Fare, rider: Option<&Rider>) -> Fare {
        let percent = match rider.map(Rider::category) {
            Some(RiderCategory::Child) => self.child_discount_percent,
            Some(RiderCategory::Teenager) => self.teenager_discount_percent,
            Some(RiderCategory::Adult) | None => return fare,
        };

        let discountable = u64::from(fare.saturating_sub(self.discount_deduction));
        let discount = discountable * u64::from(percent.min(100)) / 100;
        fare - Fare::try_from(discount).unwrap_or(fare)
    }
}

/// Fare under the standard policy
pub fn fare(distance: Distance) -> Fare {
    FarePolicy::default().calculate(distance)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiderCategory {
    /// 6 to 12 years old
    Child,
    /// 13 to 18 years old
    Teenager,
    Adult,
}

/// The person a fare is quoted for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rider {
    pub age: u32,
}

impl Rider {
    pub fn new(age: u32) -> Self {
        Self { age }
    }

    pub fn category(&self) -> RiderCategory {
        match self.age {
            6..=12 => RiderCategory::Child,
            13..=18 => RiderCategory::Teenager,
            _ => RiderCategory::Adult,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_band() {
        assert_eq!(fare(0), 1250);
        assert_eq!(fare(1), 1250);
        assert_eq!(fare(10), 1250);
    }

    #[test]
    fn test_middle_band_rounds_up() {
        assert_eq!(fare(11), 1350);
        assert_eq!(fare(12), 1350);
        assert_eq!(fare(15), 1350);
        assert_eq!(fare(16), 1450);
        assert_eq!(fare(50), 2050);
    }

    #[test]
    fn test_long_band_rounds_up() {
        assert_eq!(fare(51), 2150);
        assert_eq!(fare(58), 2150);
        assert_eq!(fare(59), 2250);
        assert_eq!(fare(66), 2250);
        assert_eq!(fare(67), 2350);
    }

    #[test]
    fn test_fare_is_monotonic() {
        let mut previous = fare(0);
        for distance in 1..=500 {
            let current = fare(distance);
            assert!(current >= previous, "fare dropped at {} km", distance);
            previous = current;
        }
    }

    #[test]
    fn test_fare_huge_distance() {
        assert_eq!(fare(u32::MAX), Fare::MAX);
        assert_eq!(fare(50 + 8 * 40_000_000), 2050 + 4_000_000_000);
        assert!(fare(50 + 8 * 40_000_000 + 1) > fare(50 + 8 * 40_000_000));

        let expensive = FarePolicy {
            surcharge: Fare::MAX,
            ..FarePolicy::default()
        };
        assert_eq!(expensive.calculate(u32::MAX), Fare::MAX);
        assert_eq!(
            expensive.discounted(Fare::MAX, Some(&Rider::new(8))),
            Fare::MAX - (Fare::MAX - 350) / 2
        );
    }

    #[test]
    fn test_validate_rejects_zero_units() {
        let policy = FarePolicy {
            middle_unit: 0,
            ..FarePolicy::default()
        };
        assert!(matches!(policy.validate(), Err(SubwayError::InvalidData(_))));

        let policy = FarePolicy {
            long_unit: 0,
            ..FarePolicy::default()
        };
        assert!(matches!(policy.validate(), Err(SubwayError::InvalidData(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_bands() {
        let policy = FarePolicy {
            base_distance: 60,
            ..FarePolicy::default()
        };
        assert!(matches!(policy.validate(), Err(SubwayError::InvalidData(_))));

        let policy = FarePolicy {
            teenager_discount_percent: 120,
            ..FarePolicy::default()
        };
        assert!(policy.validate().is_err());
        assert!(FarePolicy::default().validate().is_ok());
    }

    #[test]
    fn test_custom_policy() {
        let policy = FarePolicy {
            base_fare: 1000,
            surcharge: 50,
            ..FarePolicy::default()
        };
        assert_eq!(policy.calculate(10), 1000);
        assert_eq!(policy.calculate(12), 1050);
        assert_eq!(policy.calculate(59), 1000 + 8 * 50 + 2 * 50);
    }

    #[test]
    fn test_rider_categories() {
        assert_eq!(Rider::new(5).category(), RiderCategory::Adult);
        assert_eq!(Rider::new(6).category(), RiderCategory::Child);
        assert_eq!(Rider::new(12).category(), RiderCategory::Child);
        assert_eq!(Rider::new(13).category(), RiderCategory::Teenager);
        assert_eq!(Rider::new(18).category(), RiderCategory::Teenager);
        assert_eq!(Rider::new(19).category(), RiderCategory::Adult);
    }

    #[test]
    fn test_discounts() {
        let policy = FarePolicy::default();

        assert_eq!(policy.discounted(1250, None), 1250);
        assert_eq!(policy.discounted(1250, Some(&Rider::new(30))), 1250);
        // (1250 - 350) * 50% = 450 off
        assert_eq!(policy.discounted(1250, Some(&Rider::new(8))), 800);
        // (1250 - 350) * 20% = 180 off
        assert_eq!(policy.discounted(1250, Some(&Rider::new(15))), 1070);
        assert_eq!(policy.discounted(300, Some(&Rider::new(8))), 300);
    }
}
