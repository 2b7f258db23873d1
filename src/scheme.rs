// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/scheme.rs - The SMD resistor marking schemes.
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

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A marking scheme printed on SMD resistors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Two significant digits and a power-of-ten exponent, e.g. `103`.
    ThreeDigit,
    /// Three significant digits and a power-of-ten exponent, e.g. `1002`.
    FourDigit,
    /// A two-digit E96 index and a multiplier letter, e.g. `01C`.
    Eia96,
    /// Digits with an `R` standing in for the decimal point, e.g. `4R7`.
    RNotation,
}

impl Scheme {
    /// All schemes, in the order codes are classified.
    pub const ALL: [Scheme; 4] = [
        Scheme::RNotation,
        Scheme::Eia96,
        Scheme::FourDigit,
        Scheme::ThreeDigit,
    ];

    /// The human-readable name of the scheme.
    pub fn name(self) -> &'static str {
        match self {
            Scheme::ThreeDigit => "3-digit",
            Scheme::FourDigit => "4-digit",
            Scheme::Eia96 => "EIA-96",
            Scheme::RNotation => "R-notation",
        }
    }

    /// The tolerance conventionally implied by parts marked in this scheme,
    /// as a fraction of the nominal value.
    ///
    /// The marking itself carries no tolerance; E24 parts use the short codes
    /// and precision parts use the four-digit and EIA-96 codes.
    pub fn typical_tolerance(self) -> Decimal {
        match self {
            Scheme::ThreeDigit | Scheme::RNotation => dec!(0.05),
            Scheme::FourDigit | Scheme::Eia96 => dec!(0.01),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown marking scheme '{0}' (expected three-digit, four-digit, eia96 or r-notation)")]
pub struct UnknownSchemeError(pub String);

impl FromStr for Scheme {
    type Err = UnknownSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "3digit" | "threedigit" | "3" => Ok(Scheme::ThreeDigit),
            "4digit" | "fourdigit" | "4" => Ok(Scheme::FourDigit),
            "eia96" | "e96" => Ok(Scheme::Eia96),
            "rnotation" | "r" => Ok(Scheme::RNotation),
            _ => Err(UnknownSchemeError(s.to_string())),
        }
    }
}
