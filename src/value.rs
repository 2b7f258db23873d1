// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/value.rs - Decoded resistance values.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/*!
 * # `value` Module
 *
 * The [ResistanceValue] type produced by the [decoder](crate::decoder) and
 * consumed by the [encoder](crate::encoder) and
 * [formatter](crate::formatter), plus [parse_ohms] for reading plain
 * resistance values such as `4.7k` or `10kΩ`.
 */

use rust_decimal::Decimal;

use crate::scheme::Scheme;

/// A resistance decoded from (or destined for) an SMD marking.
///
/// Values are immutable once constructed and are always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResistanceValue {
    ohms: Decimal,
    scheme: Scheme,
    exact: bool,
}

impl ResistanceValue {
    /// Creates an exact value in the given scheme.
    ///
    /// Returns `None` if `ohms` is negative.
    pub fn new(ohms: Decimal, scheme: Scheme) -> Option<Self> {
        if ohms.is_sign_negative() && !ohms.is_zero() {
            return None;
        }
        Some(Self {
            ohms,
            scheme,
            exact: true,
        })
    }

    pub(crate) fn decoded(ohms: Decimal, scheme: Scheme) -> Self {
        debug_assert!(!ohms.is_sign_negative() || ohms.is_zero());
        Self {
            ohms,
            scheme,
            exact: true,
        }
    }

    /// The resistance in ohms.
    pub fn ohms(&self) -> Decimal {
        self.ohms
    }

    /// The scheme the value was decoded from.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Whether the marking encodes the value without rounding.
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// The tolerance conventionally associated with the value's scheme.
    pub fn tolerance(&self) -> Decimal {
        self.scheme.typical_tolerance()
    }
}

/// Returns `10^exp` as a `Decimal`. `exp` must be within `-28..=28`.
pub(crate) fn pow10(exp: i32) -> Decimal {
    if exp >= 0 {
        Decimal::from_i128_with_scale(10i128.pow(exp.unsigned_abs()), 0)
    } else {
        Decimal::new(1, exp.unsigned_abs())
    }
}

/// Splits a non-negative value into `(coefficient, exponent)` such that
/// `value == coefficient * 10^exponent` and `coefficient` has no trailing
/// zeros. Zero is `(0, 0)`.
pub(crate) fn decompose(value: Decimal) -> (u128, i32) {
    let normalized = value.normalize();
    let mut coefficient = normalized.mantissa().unsigned_abs();
    if coefficient == 0 {
        return (0, 0);
    }

    let mut exponent = -(normalized.scale() as i32);
    while coefficient % 10 == 0 {
        coefficient /= 10;
        exponent += 1;
    }
    (coefficient, exponent)
}

/// Number of decimal digits in `n`, counting zero as one digit.
pub(crate) fn digit_count(n: u128) -> u32 {
    n.checked_ilog10().map_or(1, |d| d + 1)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseValueError {
    #[error("Empty resistance value")]
    Empty,
    #[error("Invalid resistance value '{input}'")]
    InvalidNumber { input: String },
    #[error("Resistance value '{input}' is negative")]
    Negative { input: String },
}

fn prefix_exponent(c: char) -> Option<i32> {
    match c {
        'm' => Some(-3),
        'R' | 'r' => Some(0),
        'k' | 'K' => Some(3),
        'M' => Some(6),
        'G' | 'g' => Some(9),
        _ => None,
    }
}

fn strip_unit(s: &str) -> &str {
    let lower = s.to_ascii_lowercase();
    for suffix in ["ohms", "ohm"] {
        if lower.ends_with(suffix) {
            return s[..s.len() - suffix.len()].trim_end();
        }
    }
    // Both GREEK CAPITAL LETTER OMEGA and OHM SIGN show up in the wild.
    s.trim_end_matches(['\u{03a9}', '\u{2126}']).trim_end()
}

/// Parses a resistance written as a number with an optional SI prefix and
/// unit, returning ohms.
///
/// Accepted forms include `470`, `4.7k`, `4k7`, `10kΩ`, `2.2 Mohm`, `4R7`
/// and `100m`.
pub fn parse_ohms(s: &str) -> Result<Decimal, ParseValueError> {
    let input = s.trim();
    if input.is_empty() {
        return Err(ParseValueError::Empty);
    }

    let invalid = || ParseValueError::InvalidNumber {
        input: input.to_string(),
    };

    let body: String = strip_unit(input).split_whitespace().collect();
    let split_pos = body
        .find(|c: char| !c.is_ascii_digit() && !matches!(c, '.' | '-' | '+'))
        .unwrap_or(body.len());
    let (number, rest) = body.split_at(split_pos);
    if number.is_empty() {
        return Err(invalid());
    }

    // Inputs that would need rounding to fit a Decimal are refused.
    let value = if rest.is_empty() {
        Decimal::from_str_exact(number).map_err(|_| invalid())?
    } else {
        let mut chars = rest.chars();
        let exp = chars.next().and_then(prefix_exponent).ok_or_else(invalid)?;
        let fraction = chars.as_str();

        let mantissa = if fraction.is_empty() {
            Decimal::from_str_exact(number).map_err(|_| invalid())?
        } else if !number.contains('.') && fraction.chars().all(|c| c.is_ascii_digit()) {
            // "4k7" notation, the prefix doubles as the decimal point
            Decimal::from_str_exact(&format!("{}.{}", number, fraction)).map_err(|_| invalid())?
        } else {
            return Err(invalid());
        };

        mantissa.checked_mul(pow10(exp)).ok_or_else(invalid)?
    };

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ParseValueError::Negative {
            input: input.to_string(),
        });
    }

    Ok(value.normalize())
}
