// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/encoder.rs - Encoder for SMD resistor marking codes.
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
 * # `encoder` Module
 *
 * The inverse of the [decoder](crate::decoder): renders a resistance as the
 * canonical marking code of a given scheme.
 *
 * Encoding never rounds. A value with more significant digits than the
 * scheme can carry is rejected with [EncodeError::PrecisionLoss].
 *
 * ## Usage Example
 *
 * ```
 * use smdres::decoder::decode;
 * use smdres::encoder::encode;
 * use smdres::scheme::Scheme;
 *
 * let value = decode("1002").unwrap();
 * assert_eq!(encode(&value, Scheme::ThreeDigit).unwrap(), "103");
 * assert_eq!(encode(&value, Scheme::Eia96).unwrap(), "01E");
 * ```
 */

use rust_decimal::Decimal;

use crate::eia96;
use crate::scheme::Scheme;
use crate::value::{ResistanceValue, decompose, digit_count};

/// Highest exponent digit of the 3- and 4-digit codes.
const MAX_DIGIT_EXPONENT: i32 = 9;

/// Reasons a value could not be encoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error(
        "{ohms} ohms has {significant_digits} significant digits, {scheme} codes carry at most {max_digits}"
    )]
    PrecisionLoss {
        ohms: Decimal,
        scheme: Scheme,
        significant_digits: u32,
        max_digits: u32,
    },
    #[error("{ohms} ohms is not an EIA-96 value")]
    Unrepresentable { ohms: Decimal },
    #[error("{ohms} ohms is outside the range of {scheme} codes")]
    OutOfRange { ohms: Decimal, scheme: Scheme },
}

/// Encodes a value as a code of the target scheme.
///
/// The scheme the value was decoded from is irrelevant; only its ohms are
/// used.
pub fn encode(value: &ResistanceValue, target: Scheme) -> Result<String, EncodeError> {
    encode_ohms(value.ohms(), target)
}

/// Encodes a resistance in ohms as a code of the target scheme.
pub fn encode_ohms(ohms: Decimal, target: Scheme) -> Result<String, EncodeError> {
    if ohms.is_sign_negative() && !ohms.is_zero() {
        return Err(EncodeError::OutOfRange {
            ohms,
            scheme: target,
        });
    }

    match target {
        Scheme::ThreeDigit => encode_digits(ohms, target, 2),
        Scheme::FourDigit => encode_digits(ohms, target, 3),
        Scheme::Eia96 => encode_eia96(ohms),
        Scheme::RNotation => Ok(encode_r_notation(ohms)),
    }
}

/// Encodes `significand * 10^exponent`, where the significand is `width`
/// digits wide (zero-padded) and the exponent is a single digit.
fn encode_digits(ohms: Decimal, scheme: Scheme, width: u32) -> Result<String, EncodeError> {
    let (coefficient, exponent) = decompose(ohms);
    if coefficient == 0 {
        return Ok("0".repeat(width as usize + 1));
    }

    let digits = digit_count(coefficient);
    if digits > width {
        return Err(EncodeError::PrecisionLoss {
            ohms,
            scheme,
            significant_digits: digits,
            max_digits: width,
        });
    }

    // Push spare significand width into the exponent-free part first, so
    // the code uses the smallest exponent that still fits.
    let spare = (width - digits) as i32;
    let code_exponent = (exponent - spare).max(0);
    if exponent < 0 || code_exponent > MAX_DIGIT_EXPONENT {
        return Err(EncodeError::OutOfRange { ohms, scheme });
    }

    let significand = coefficient * 10u128.pow((exponent - code_exponent) as u32);
    Ok(format!(
        "{:0width$}{}",
        significand,
        code_exponent,
        width = width as usize
    ))
}

fn encode_eia96(ohms: Decimal) -> Result<String, EncodeError> {
    let (coefficient, exponent) = decompose(ohms);
    if coefficient == 0 {
        return Err(EncodeError::Unrepresentable { ohms });
    }

    let digits = digit_count(coefficient);
    if digits > 3 {
        return Err(EncodeError::PrecisionLoss {
            ohms,
            scheme: Scheme::Eia96,
            significant_digits: digits,
            max_digits: 3,
        });
    }

    // Widen to a three-digit mantissa, then ohms == mantissa * 10^(letter - 2).
    let widen = 3 - digits;
    let mantissa = coefficient * 10u128.pow(widen);
    let letter_exponent = exponent - widen as i32 + 2;

    let index = u16::try_from(mantissa)
        .ok()
        .and_then(eia96::index_of)
        .ok_or(EncodeError::Unrepresentable { ohms })?;
    let letter = eia96::canonical_letter(letter_exponent).ok_or(EncodeError::OutOfRange {
        ohms,
        scheme: Scheme::Eia96,
    })?;

    Ok(format!("{:02}{}", index, letter))
}

fn encode_r_notation(ohms: Decimal) -> String {
    let text = ohms.normalize().to_string();
    match text.split_once('.') {
        Some(("0", fraction)) => format!("R{}", fraction),
        Some((whole, fraction)) => format!("{}R{}", whole, fraction),
        None => format!("{}R", text),
    }
}
