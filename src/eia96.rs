// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/eia96.rs - EIA-96 mantissa and multiplier tables.
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
 * # `eia96` Module
 *
 * The two fixed tables of the EIA-96 marking system: the 96 three-digit
 * mantissas of the E96 series, indexed by the two-digit code `01`..`96`, and
 * the multiplier letters.
 *
 * A mantissa is read as a significand of the form `d.dd`, so the value of a
 * code is `mantissa * multiplier / 100` ohms (`01C` is 100 ohms).
 */

/// E96 mantissas for codes `01` through `96`.
pub const MANTISSAS: [u16; 96] = [
    100, 102, 105, 107, 110, 113, 115, 118, 121, 124, 127, 130,
    133, 137, 140, 143, 147, 150, 154, 158, 162, 165, 169, 174,
    178, 182, 187, 191, 196, 200, 205, 210, 215, 221, 226, 232,
    237, 243, 249, 255, 261, 267, 274, 280, 287, 294, 301, 309,
    316, 324, 332, 340, 348, 357, 365, 374, 383, 392, 402, 412,
    422, 432, 442, 453, 464, 475, 487, 499, 511, 523, 536, 549,
    562, 576, 590, 604, 619, 634, 649, 665, 681, 698, 715, 732,
    750, 768, 787, 806, 825, 845, 866, 887, 909, 931, 953, 976,
];

/// Multiplier letters and their power-of-ten exponents.
///
/// The first letter listed for an exponent is the canonical one; `R`, `S` and
/// `H` are alternates found on some parts.
pub const MULTIPLIERS: [(char, i32); 12] = [
    ('Z', -3),
    ('Y', -2),
    ('R', -2),
    ('X', -1),
    ('S', -1),
    ('A', 0),
    ('B', 1),
    ('H', 1),
    ('C', 2),
    ('D', 3),
    ('E', 4),
    ('F', 5),
];

/// Returns the mantissa for a one-based code index, if it is in `1..=96`.
pub fn mantissa(index: u8) -> Option<u16> {
    match index {
        1..=96 => Some(MANTISSAS[usize::from(index) - 1]),
        _ => None,
    }
}

/// Returns the one-based code index of a mantissa, if it is in the table.
pub fn index_of(mantissa: u16) -> Option<u8> {
    MANTISSAS
        .binary_search(&mantissa)
        .ok()
        .and_then(|i| u8::try_from(i + 1).ok())
}

/// Returns the power-of-ten exponent for a multiplier letter.
pub fn multiplier_exponent(letter: char) -> Option<i32> {
    let letter = letter.to_ascii_uppercase();
    MULTIPLIERS
        .iter()
        .find(|&&(l, _)| l == letter)
        .map(|&(_, exp)| exp)
}

/// Returns the canonical multiplier letter for a power-of-ten exponent.
pub fn canonical_letter(exponent: i32) -> Option<char> {
    MULTIPLIERS
        .iter()
        .find(|&&(_, exp)| exp == exponent)
        .map(|&(l, _)| l)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mantissa_table_bounds() {
        assert_eq!(mantissa(1), Some(100));
        assert_eq!(mantissa(68), Some(499));
        assert_eq!(mantissa(96), Some(976));
        assert_eq!(mantissa(0), None);
        assert_eq!(mantissa(97), None);
    }

    #[test]
    fn mantissa_table_is_strictly_increasing() {
        assert!(MANTISSAS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn index_lookup_inverts_table() {
        for index in 1..=96u8 {
            let m = mantissa(index).unwrap();
            assert_eq!(index_of(m), Some(index));
        }
        assert_eq!(index_of(101), None);
        assert_eq!(index_of(999), None);
    }

    #[test]
    fn multiplier_letters() {
        assert_eq!(multiplier_exponent('Z'), Some(-3));
        assert_eq!(multiplier_exponent('r'), Some(-2));
        assert_eq!(multiplier_exponent('S'), Some(-1));
        assert_eq!(multiplier_exponent('H'), Some(1));
        assert_eq!(multiplier_exponent('F'), Some(5));
        assert_eq!(multiplier_exponent('G'), None);
        assert_eq!(multiplier_exponent('Q'), None);
    }

    #[test]
    fn canonical_letters_prefer_primary_spelling() {
        let letters: String = (-3..=5).filter_map(canonical_letter).collect();
        assert_eq!(letters, "ZYXABCDEF");
        assert_eq!(canonical_letter(6), None);
        assert_eq!(canonical_letter(-4), None);
    }
}
