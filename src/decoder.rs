// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/decoder.rs - Decoder for SMD resistor marking codes.
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
 * # `decoder` Module
 *
 * This module turns a marking code into a [ResistanceValue].
 *
 * Codes are trimmed and uppercased, then matched against the grammars in a
 * fixed order, first match wins:
 *
 * 1. R-notation (`4R7`, `R47`, `4R`)
 * 2. EIA-96 (`01C`)
 * 3. 4-digit (`1002`)
 * 4. 3-digit (`103`)
 *
 * ## Usage Example
 *
 * ```
 * use rust_decimal_macros::dec;
 *
 * use smdres::decoder::decode;
 * use smdres::scheme::Scheme;
 *
 * let value = decode("4r7").unwrap();
 * assert_eq!(value.ohms(), dec!(4.7));
 * assert_eq!(value.scheme(), Scheme::RNotation);
 * ```
 */

use rust_decimal::Decimal;

use crate::eia96;
use crate::scheme::Scheme;
use crate::value::{ResistanceValue, pow10};

/// Reasons a code could not be decoded. Every variant carries the code as
/// the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Unrecognized SMD resistor code '{input}'")]
    NoMatchingScheme { input: String },
    #[error("EIA-96 index '{index}' in '{input}' is out of range (expected 01-96)")]
    InvalidEia96Index { input: String, index: String },
    #[error("Unknown EIA-96 multiplier letter '{letter}' in '{input}'")]
    InvalidEia96Letter { input: String, letter: char },
    #[error("Malformed R-notation code '{input}': {reason}")]
    MalformedRNotation { input: String, reason: &'static str },
}

impl DecodeError {
    /// The code that failed to decode, exactly as it was passed in.
    pub fn input(&self) -> &str {
        match self {
            DecodeError::NoMatchingScheme { input }
            | DecodeError::InvalidEia96Index { input, .. }
            | DecodeError::InvalidEia96Letter { input, .. }
            | DecodeError::MalformedRNotation { input, .. } => input,
        }
    }
}

/// One marking grammar: which codes it claims and how to read them.
struct Grammar {
    scheme: Scheme,
    recognize: fn(&str) -> bool,
    /// Parses a recognized, normalized code. The second argument is the raw
    /// input, used for error reporting.
    parse: fn(&str, &str) -> Result<Decimal, DecodeError>,
}

/// The grammars in classification order.
static GRAMMARS: [Grammar; 4] = [
    Grammar {
        scheme: Scheme::RNotation,
        recognize: is_r_notation,
        parse: parse_r_notation,
    },
    Grammar {
        scheme: Scheme::Eia96,
        recognize: is_eia96,
        parse: parse_eia96,
    },
    Grammar {
        scheme: Scheme::FourDigit,
        recognize: is_four_digit,
        parse: parse_four_digit,
    },
    Grammar {
        scheme: Scheme::ThreeDigit,
        recognize: is_three_digit,
        parse: parse_three_digit,
    },
];

fn grammar(scheme: Scheme) -> &'static Grammar {
    match scheme {
        Scheme::RNotation => &GRAMMARS[0],
        Scheme::Eia96 => &GRAMMARS[1],
        Scheme::FourDigit => &GRAMMARS[2],
        Scheme::ThreeDigit => &GRAMMARS[3],
    }
}

fn all_digits(code: &str) -> bool {
    code.bytes().all(|b| b.is_ascii_digit())
}

fn digits_value(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

fn is_r_notation(code: &str) -> bool {
    code.contains('R') && code.bytes().all(|b| b.is_ascii_digit() || b == b'R')
}

fn is_eia96(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 3
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_alphabetic()
}

fn is_four_digit(code: &str) -> bool {
    code.len() == 4 && all_digits(code)
}

fn is_three_digit(code: &str) -> bool {
    code.len() == 3 && all_digits(code)
}

fn parse_r_notation(code: &str, input: &str) -> Result<Decimal, DecodeError> {
    let malformed = |reason| DecodeError::MalformedRNotation {
        input: input.to_string(),
        reason,
    };

    let (whole, fraction) = code
        .split_once('R')
        .ok_or_else(|| malformed("missing decimal mark 'R'"))?;
    if fraction.contains('R') {
        return Err(malformed("more than one decimal mark 'R'"));
    }

    let text = match (whole.is_empty(), fraction.is_empty()) {
        (true, true) => return Err(malformed("no digits around 'R'")),
        (false, true) => whole.to_string(),
        (true, false) => format!("0.{}", fraction),
        (false, false) => format!("{}.{}", whole, fraction),
    };

    Decimal::from_str_exact(&text).map_err(|_| malformed("value does not fit a decimal"))
}

fn parse_eia96(code: &str, input: &str) -> Result<Decimal, DecodeError> {
    let (index, letter) = code.split_at(2);

    let mantissa = u8::try_from(digits_value(index))
        .ok()
        .and_then(eia96::mantissa)
        .ok_or_else(|| DecodeError::InvalidEia96Index {
            input: input.to_string(),
            index: index.to_string(),
        })?;

    let letter = letter.chars().next().unwrap_or_default();
    let exponent =
        eia96::multiplier_exponent(letter).ok_or_else(|| DecodeError::InvalidEia96Letter {
            input: input.to_string(),
            letter,
        })?;

    // The mantissa is a d.dd significand.
    Ok(Decimal::from(mantissa) * pow10(exponent - 2))
}

fn parse_four_digit(code: &str, _input: &str) -> Result<Decimal, DecodeError> {
    let (significand, exponent) = code.split_at(3);
    Ok(Decimal::from(digits_value(significand)) * pow10(digits_value(exponent) as i32))
}

fn parse_three_digit(code: &str, _input: &str) -> Result<Decimal, DecodeError> {
    let (significand, exponent) = code.split_at(2);
    Ok(Decimal::from(digits_value(significand)) * pow10(digits_value(exponent) as i32))
}

/// Trims surrounding whitespace and uppercases a raw code.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Returns the scheme a normalized code belongs to, if any.
///
/// Only the shape of the code is checked; a code can classify successfully
/// and still fail to [parse] (e.g. `00C` or `4R7R`).
pub fn classify(code: &str) -> Option<Scheme> {
    GRAMMARS
        .iter()
        .find(|grammar| (grammar.recognize)(code))
        .map(|grammar| grammar.scheme)
}

/// Parses a raw code under a caller-chosen scheme, bypassing classification.
///
/// This is how an `xxR` code can be read as EIA-96, which [decode] would
/// otherwise treat as R-notation.
pub fn parse(scheme: Scheme, raw: &str) -> Result<ResistanceValue, DecodeError> {
    let code = normalize(raw);
    let grammar = grammar(scheme);
    if !(grammar.recognize)(&code) {
        return Err(DecodeError::NoMatchingScheme {
            input: raw.to_string(),
        });
    }

    let ohms = (grammar.parse)(&code, raw)?;
    Ok(ResistanceValue::decoded(ohms, scheme))
}

/// Decodes a marking code into a resistance.
///
/// # Arguments
///
/// * `raw` - The code as read off the part. Surrounding whitespace and letter
///   case are ignored.
///
/// # Returns
///
/// A `Result` containing the decoded value or the reason the code was
/// rejected.
pub fn decode(raw: &str) -> Result<ResistanceValue, DecodeError> {
    let code = normalize(raw);
    let scheme = classify(&code).ok_or_else(|| DecodeError::NoMatchingScheme {
        input: raw.to_string(),
    })?;

    let ohms = (grammar(scheme).parse)(&code, raw)?;
    Ok(ResistanceValue::decoded(ohms, scheme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ohms(raw: &str) -> Decimal {
        decode(raw).unwrap().ohms()
    }

    #[test]
    fn grammar_table_matches_scheme_order() {
        let order: Vec<Scheme> = GRAMMARS.iter().map(|g| g.scheme).collect();
        assert_eq!(order, Scheme::ALL);
        for scheme in Scheme::ALL {
            assert_eq!(grammar(scheme).scheme, scheme);
        }
    }

    #[test]
    fn classification() {
        assert_eq!(classify("103"), Some(Scheme::ThreeDigit));
        assert_eq!(classify("1002"), Some(Scheme::FourDigit));
        assert_eq!(classify("01C"), Some(Scheme::Eia96));
        assert_eq!(classify("4R7"), Some(Scheme::RNotation));
        assert_eq!(classify("R"), Some(Scheme::RNotation));
        assert_eq!(classify("4R7R"), Some(Scheme::RNotation));
        assert_eq!(classify(""), None);
        assert_eq!(classify("10"), None);
        assert_eq!(classify("12345"), None);
        assert_eq!(classify("ABCD"), None);
        assert_eq!(classify("1C"), None);
        assert_eq!(classify("01CC"), None);
    }

    #[test]
    fn three_and_four_digit() {
        assert_eq!(ohms("103"), dec!(10000));
        assert_eq!(ohms("472"), dec!(4700));
        assert_eq!(ohms("000"), dec!(0));
        assert_eq!(ohms("999"), dec!(99000000000));
        assert_eq!(ohms("1002"), dec!(10000));
        assert_eq!(ohms("4991"), dec!(4990));
        assert_eq!(ohms("9999"), dec!(999000000000));
    }

    #[test]
    fn eia96() {
        assert_eq!(ohms("01C"), dec!(100));
        assert_eq!(ohms("01A"), dec!(1));
        assert_eq!(ohms("68X"), dec!(0.499));
        assert_eq!(ohms("68S"), dec!(0.499));
        assert_eq!(ohms("96F"), dec!(976000));
        assert_eq!(ohms("01Z"), dec!(0.001));
        assert_eq!(ohms("30H"), dec!(20));
        assert_eq!(decode("01C").unwrap().scheme(), Scheme::Eia96);
    }

    #[test]
    fn eia96_errors() {
        assert_eq!(
            decode("00C"),
            Err(DecodeError::InvalidEia96Index {
                input: "00C".to_string(),
                index: "00".to_string(),
            })
        );
        assert!(matches!(
            decode("97C"),
            Err(DecodeError::InvalidEia96Index { .. })
        ));
        assert_eq!(
            decode("01g"),
            Err(DecodeError::InvalidEia96Letter {
                input: "01g".to_string(),
                letter: 'G',
            })
        );
    }

    #[test]
    fn r_notation() {
        assert_eq!(ohms("4R7"), dec!(4.7));
        assert_eq!(ohms("R47"), dec!(0.47));
        assert_eq!(ohms("4R"), dec!(4));
        assert_eq!(ohms("0R0"), dec!(0));
        assert_eq!(ohms("0R"), dec!(0));
        assert_eq!(ohms("10R0"), dec!(10));
        assert_eq!(ohms("r022"), dec!(0.022));
    }

    #[test]
    fn r_notation_errors() {
        for code in ["4R7R", "RR", "R4R", "R"] {
            assert!(
                matches!(
                    decode(code),
                    Err(DecodeError::MalformedRNotation { .. })
                ),
                "{}",
                code
            );
        }
        let too_long = format!("{}R", "9".repeat(40));
        assert!(matches!(
            decode(&too_long),
            Err(DecodeError::MalformedRNotation { .. })
        ));
    }

    #[test]
    fn r_notation_takes_precedence_over_eia96_r_multiplier() {
        let value = decode("68R").unwrap();
        assert_eq!(value.scheme(), Scheme::RNotation);
        assert_eq!(value.ohms(), dec!(68));

        let forced = parse(Scheme::Eia96, "68R").unwrap();
        assert_eq!(forced.scheme(), Scheme::Eia96);
        assert_eq!(forced.ohms(), dec!(0.0499));
    }

    #[test]
    fn input_is_normalized() {
        assert_eq!(normalize("  01c\t"), "01C");
        assert_eq!(ohms(" 103 "), dec!(10000));
        assert_eq!(ohms("01c"), dec!(100));
    }

    #[test]
    fn internal_whitespace_is_rejected() {
        assert_eq!(
            decode("1 03"),
            Err(DecodeError::NoMatchingScheme {
                input: "1 03".to_string()
            })
        );
        assert!(decode("4 R7").is_err());
    }

    #[test]
    fn errors_keep_raw_input() {
        assert_eq!(decode(" abcd ").unwrap_err().input(), " abcd ");
        assert_eq!(decode("97c").unwrap_err().input(), "97c");
        assert_eq!(decode("4r7r").unwrap_err().input(), "4r7r");
    }

    #[test]
    fn forced_scheme_must_match_shape() {
        assert_eq!(
            parse(Scheme::ThreeDigit, "1002"),
            Err(DecodeError::NoMatchingScheme {
                input: "1002".to_string()
            })
        );
        assert_eq!(parse(Scheme::FourDigit, "1002").unwrap().ohms(), dec!(10000));
    }
}
