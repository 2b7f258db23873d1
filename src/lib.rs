// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Decoder and encoder library for SMD resistor markings.
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
 * # `smdres` Crate
 *
 * A library for decoding the value codes printed on SMD resistors, and for
 * producing those codes from a resistance.
 *
 * Four marking schemes are supported: 3-digit (`103`), 4-digit (`1002`),
 * EIA-96 (`01C`) and R-notation (`4R7`). All arithmetic is done in
 * [rust_decimal::Decimal], so decoded values are exact.
 *
 * The crate is organized as a small pipeline:
 *
 * 1. [decoder]: Classifies a code and parses it into a [ResistanceValue].
 * 2. [formatter]: Renders a value with an SI prefix, e.g. `4.7kΩ`.
 * 3. [encoder]: Turns a value back into the code of a chosen [Scheme].
 *
 * ## Usage Example
 *
 * ```
 * use smdres::{Scheme, decode, encode, format};
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let value = decode("4R7")?;
 *     println!("{} ({})", format(&value), value.scheme());
 *
 *     let marking = encode(&decode("472")?, Scheme::FourDigit)?;
 *     assert_eq!(marking, "4701");
 *
 *     Ok(())
 * }
 * ```
 */

pub mod decoder;
pub mod eia96;
pub mod encoder;
pub mod formatter;
pub mod scheme;
pub mod value;

pub use decoder::{DecodeError, classify, decode, parse};
pub use encoder::{EncodeError, encode, encode_ohms};
pub use formatter::{format, format_ohms, format_ohms_with_precision};
pub use scheme::Scheme;
pub use value::{ParseValueError, ResistanceValue, parse_ohms};
