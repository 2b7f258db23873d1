// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/formatter.rs - Human-readable rendering of resistance values.
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
 * # `formatter` Module
 *
 * Renders resistances for people: the value is scaled to the largest SI
 * prefix (`k`, `M` or `G`) it reaches and printed without trailing zeros,
 * followed by `Ω`. Values below 1 kΩ, fractional ones included, are shown
 * in plain ohms.
 */

use std::fmt;

use rust_decimal::Decimal;

use crate::value::{ResistanceValue, pow10};

/// SI prefixes by power-of-ten exponent, largest first.
const PREFIXES: [(i32, &str); 3] = [(9, "G"), (6, "M"), (3, "k")];

/// Renders ohms with an SI prefix, e.g. `4.7Ω`, `10kΩ`, `4.99MΩ`.
pub fn format_ohms(ohms: Decimal) -> String {
    let (scaled, prefix) = PREFIXES
        .iter()
        .map(|&(exp, prefix)| (pow10(exp), prefix))
        .find(|&(factor, _)| ohms >= factor)
        .map_or((ohms, ""), |(factor, prefix)| (ohms / factor, prefix));

    format!("{}{}Ω", scaled.normalize(), prefix)
}

/// Like [format_ohms], but first rounds to `significant_digits` significant
/// digits. The value is shown unrounded if it cannot be rounded that way
/// (e.g. zero digits requested).
pub fn format_ohms_with_precision(ohms: Decimal, significant_digits: u32) -> String {
    let rounded = ohms.round_sf(significant_digits).unwrap_or(ohms);
    format_ohms(rounded)
}

/// Renders a decoded value for display.
pub fn format(value: &ResistanceValue) -> String {
    format_ohms(value.ohms())
}

impl fmt::Display for ResistanceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}
