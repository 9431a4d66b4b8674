//! Value-type input policy.
//!
//! Every staged value passes through [`coerce`] before it is stored, so
//! programmatic and interactive edits obey the same rules:
//!
//! - **Boolean**: canonical `"true"` / `"false"` literals, see [`toggle_boolean`]
//! - **Number**: clamped into the catalog bounds when those are defined
//! - **String**: stored unmodified

use crate::setting::descriptor::ValueType;
use serde::{Deserialize, Serialize};

pub const TRUE_LITERAL: &str = "true";
pub const FALSE_LITERAL: &str = "false";

/// Inclusive numeric bounds from the catalog's `min` / `max` attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericBounds {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Parse bounds from raw attribute text. Blank or non-numeric text
    /// leaves that side unbounded.
    pub fn from_attributes(min: &str, max: &str) -> Self {
        Self {
            min: parse_bound(min),
            max: parse_bound(max),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Clamp `value` into the bounds. Returns `None` when already inside.
    pub fn clamp(&self, value: f64) -> Option<f64> {
        if let Some(max) = self.max
            && value > max
        {
            return Some(max);
        }
        if let Some(min) = self.min
            && value < min
        {
            return Some(min);
        }
        None
    }
}

impl std::fmt::Display for NumericBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (None, None) => write!(f, "unbounded"),
            (Some(min), None) => write!(f, ">= {}", min),
            (None, Some(max)) => write!(f, "<= {}", max),
            (Some(min), Some(max)) => write!(f, "[{}, {}]", min, max),
        }
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Apply the input policy for `value_type` to operator input.
pub fn coerce(value_type: ValueType, bounds: &NumericBounds, input: &str) -> String {
    match value_type {
        ValueType::Number => clamp_number(bounds, input),
        ValueType::Boolean | ValueType::String => input.to_string(),
    }
}

/// Clamp numeric text into `bounds`.
///
/// Text that does not parse as a number is returned unchanged; bounds only
/// constrain numeric input.
pub fn clamp_number(bounds: &NumericBounds, input: &str) -> String {
    if bounds.is_unbounded() {
        return input.to_string();
    }
    match input.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => match bounds.clamp(value) {
            Some(clamped) => clamped.to_string(),
            None => input.to_string(),
        },
        _ => input.to_string(),
    }
}

/// Flip a Boolean literal. Anything other than `"true"` flips to `"true"`.
pub fn toggle_boolean(current: &str) -> &'static str {
    if current == TRUE_LITERAL {
        FALSE_LITERAL
    } else {
        TRUE_LITERAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_to_ten() -> NumericBounds {
        NumericBounds::new(Some(0.0), Some(10.0))
    }

    #[test]
    fn test_clamp_above_max() {
        assert_eq!(clamp_number(&zero_to_ten(), "15"), "10");
    }

    #[test]
    fn test_clamp_below_min() {
        assert_eq!(clamp_number(&zero_to_ten(), "-3"), "0");
    }

    #[test]
    fn test_in_range_value_is_untouched() {
        assert_eq!(clamp_number(&zero_to_ten(), "7"), "7");
        assert_eq!(clamp_number(&zero_to_ten(), "2.5"), "2.5");
    }

    #[test]
    fn test_unbounded_never_clamps() {
        let bounds = NumericBounds::default();
        assert_eq!(clamp_number(&bounds, "99999999"), "99999999");
    }

    #[test]
    fn test_one_sided_bounds() {
        let min_only = NumericBounds::new(Some(1.0), None);
        assert_eq!(clamp_number(&min_only, "0"), "1");
        assert_eq!(clamp_number(&min_only, "5000"), "5000");

        let max_only = NumericBounds::new(None, Some(2048.0));
        assert_eq!(clamp_number(&max_only, "4096"), "2048");
    }

    #[test]
    fn test_non_numeric_input_is_kept() {
        assert_eq!(clamp_number(&zero_to_ten(), "abc"), "abc");
        assert_eq!(clamp_number(&zero_to_ten(), ""), "");
    }

    #[test]
    fn test_coerce_only_clamps_numbers() {
        assert_eq!(coerce(ValueType::Number, &zero_to_ten(), "11"), "10");
        assert_eq!(coerce(ValueType::String, &zero_to_ten(), "11"), "11");
        assert_eq!(coerce(ValueType::Boolean, &zero_to_ten(), "true"), "true");
    }

    #[test]
    fn test_bounds_from_attributes() {
        let bounds = NumericBounds::from_attributes("0", "2147483647");
        assert_eq!(bounds.min, Some(0.0));
        assert_eq!(bounds.max, Some(2147483647.0));
        assert_eq!(clamp_number(&bounds, "3000000000"), "2147483647");

        assert!(NumericBounds::from_attributes("", " ").is_unbounded());
        assert!(NumericBounds::from_attributes("n/a", "").is_unbounded());
    }

    #[test]
    fn test_toggle_boolean() {
        assert_eq!(toggle_boolean("true"), "false");
        assert_eq!(toggle_boolean("false"), "true");
        assert_eq!(toggle_boolean(""), "true");
    }
}
