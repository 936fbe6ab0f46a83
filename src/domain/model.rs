use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_rate, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rental modes offered by the study cafe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassType {
    Hourly,
    Weekly,
    Fixed,
}

impl PassType {
    /// Fixed seats never come with a locker add-on.
    pub fn supports_locker(self) -> bool {
        !matches!(self, PassType::Fixed)
    }

    fn duration_unit(self) -> &'static str {
        match self {
            PassType::Hourly => "hour",
            PassType::Weekly | PassType::Fixed => "week",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pass {
    pub pass_type: PassType,
    pub duration: u32,
    pub price: u64,
    pub discount_rate: f64,
}

impl Pass {
    pub fn is_same_type(&self, pass_type: PassType) -> bool {
        self.pass_type == pass_type
    }

    /// Event discount in won, truncated toward zero.
    pub fn discount_price(&self) -> u64 {
        (self.price as f64 * self.discount_rate) as u64
    }
}

impl Validate for Pass {
    fn validate(&self) -> Result<()> {
        validate_positive_number("duration", self.duration, 1)?;
        validate_rate("discount_rate", self.discount_rate)
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} pass - {} won",
            self.duration,
            self.pass_type.duration_unit(),
            self.price
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockerPass {
    pub pass_type: PassType,
    pub duration: u32,
    pub price: u64,
}

impl LockerPass {
    pub fn matches(&self, pass: &Pass) -> bool {
        self.pass_type == pass.pass_type && self.duration == pass.duration
    }
}

impl Validate for LockerPass {
    fn validate(&self) -> Result<()> {
        validate_positive_number("duration", self.duration, 1)
    }
}

impl fmt::Display for LockerPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} locker - {} won",
            self.duration,
            self.pass_type.duration_unit(),
            self.price
        )
    }
}

/// How the locker step ended for a given pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockerResolution {
    NotOffered,
    NoMatch,
    Confirmed(LockerPass),
    Declined(LockerPass),
}

impl LockerResolution {
    pub fn into_locker_pass(self) -> Option<LockerPass> {
        match self {
            LockerResolution::Confirmed(locker_pass) => Some(locker_pass),
            LockerResolution::NotOffered
            | LockerResolution::NoMatch
            | LockerResolution::Declined(_) => None,
        }
    }
}

/// Result of a single ordering run. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderOutcome {
    pub pass: Pass,
    pub locker_pass: Option<LockerPass>,
}

impl OrderOutcome {
    pub fn discount_price(&self) -> u64 {
        self.pass.discount_price()
    }

    pub fn total_price(&self) -> u64 {
        let locker_price = self.locker_pass.as_ref().map_or(0, |locker| locker.price);
        self.pass
            .price
            .saturating_sub(self.discount_price())
            .saturating_add(locker_price)
    }
}
