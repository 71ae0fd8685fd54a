//! Money input type for API boundary decoding
//!
//! Clients send amounts either as JSON numbers or as numeric strings. Both
//! forms end up as an exact [`Decimal`]; anything else fails deserialization
//! and is answered with 400 by the JSON extractor.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserialize, Deserializer, Visitor};

// ============================================================================
// FlexibleDecimal: Number-or-String Decimal at Serde Layer
// ============================================================================

/// Decimal accepted as a JSON number or a numeric string
///
/// - `100`, `25.5`, `1e3`: JSON numbers
/// - `"100"`, `"25.5"`, `"1e3"`, `" 7 "`: numeric strings (surrounding whitespace trimmed)
///
/// Sign is not checked here; positivity is a business rule enforced by the
/// services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexibleDecimal(Decimal);

impl FlexibleDecimal {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }
}

impl std::ops::Deref for FlexibleDecimal {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Map key under which serde_json's `arbitrary_precision` feature hands over
/// the literal text of a JSON number
const JSON_NUMBER_TOKEN: &str = "$serde_json::private::Number";

/// Parse plain or exponent notation
fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

struct FlexibleDecimalVisitor;

impl<'de> Visitor<'de> for FlexibleDecimalVisitor {
    type Value = FlexibleDecimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(FlexibleDecimal(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(FlexibleDecimal(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() {
            return Err(E::custom("amount must be finite"));
        }
        // Shortest round-trip rendering, so 0.1 stays 0.1
        parse_decimal(&v.to_string())
            .map(FlexibleDecimal)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let key: Option<String> = map.next_key()?;
        if key.as_deref() != Some(JSON_NUMBER_TOKEN) {
            return Err(de::Error::invalid_type(de::Unexpected::Map, &self));
        }
        let literal: String = map.next_value()?;
        parse_decimal(&literal)
            .map(FlexibleDecimal)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", literal)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.trim().is_empty() {
            return Err(E::custom("amount cannot be empty"));
        }
        parse_decimal(v)
            .map(FlexibleDecimal)
            .ok_or_else(|| E::custom(format!("invalid decimal: {:?}", v)))
    }
}

impl<'de> Deserialize<'de> for FlexibleDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlexibleDecimalVisitor)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
