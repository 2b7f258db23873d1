// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/main.rs - Command-line decoder for SMD resistor codes.
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

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use arboard::Clipboard;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use env_logger::Env;
use log::debug;
use rust_decimal_macros::dec;

use smdres::decoder::normalize;
use smdres::*;

#[derive(Parser, Debug)]
#[command(name = "smdres", author, version, about = "Decode SMD resistor codes", long_about = None)]
struct Args {
    /// SMD code, e.g. 103, 4R7, 01C.
    code: Option<String>,

    /// SMD code (alternative to the positional argument).
    #[arg(long = "code", value_name = "CODE")]
    code_kw: Option<String>,

    /// Encode a resistance such as 4.7k or 10kΩ instead of decoding a code.
    #[arg(long, value_name = "OHMS", requires = "to", conflicts_with_all = ["code", "code_kw", "batch"])]
    value: Option<String>,

    /// Print the code in this scheme instead of the value
    /// (three-digit, four-digit, eia96 or r-notation).
    #[arg(long, value_name = "SCHEME")]
    to: Option<Scheme>,

    /// Round the displayed value to this many significant digits.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=28))]
    precision: Option<u32>,

    /// Copy the result to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Decode every code in a file ('-' for stdin), one per line, as CSV.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["code", "code_kw", "copy"])]
    batch: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn display(value: &ResistanceValue, precision: Option<u32>) -> String {
    match precision {
        Some(digits) => format_ohms_with_precision(value.ohms(), digits),
        None => format(value),
    }
}

fn tolerance_percent(value: &ResistanceValue) -> String {
    format!("±{}%", (value.tolerance() * dec!(100)).normalize())
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Clipboard not available")?;
    clipboard
        .set_text(text)
        .context("Failed to copy to clipboard")?;
    debug!("Copied {:?} to the clipboard", text);
    Ok(())
}

fn decode_code(code: &str, args: &Args) -> Result<()> {
    debug!("Decoding {:?} (normalized {:?})", code, normalize(code));
    let value = decode(code)?;
    debug!("{:?} is {} ohms as {}", code, value.ohms(), value.scheme());

    let output = match args.to {
        Some(target) => {
            let encoded = encode(&value, target)
                .with_context(|| format!("Cannot write '{}' as a {} code", code, target))?;
            println!("{} => {} ({})", code, encoded, target);
            encoded
        }
        None => {
            let formatted = display(&value, args.precision);
            println!(
                "{} => {} ({}, {})",
                code,
                formatted,
                value.scheme(),
                tolerance_percent(&value)
            );
            formatted
        }
    };

    if args.copy {
        copy_to_clipboard(&output)?;
    }
    Ok(())
}

fn encode_value(text: &str, args: &Args) -> Result<()> {
    let target = args
        .to
        .context("A target scheme (--to) is needed to encode a value")?;
    let ohms = parse_ohms(text)?;
    debug!("Encoding {} ohms as {}", ohms, target);

    let code = encode_ohms(ohms, target)?;
    println!("{} => {} ({})", format_ohms(ohms), code, target);

    if args.copy {
        copy_to_clipboard(&code)?;
    }
    Ok(())
}

fn decode_batch(path: &Path, args: &Args) -> Result<()> {
    let input: Box<dyn io::Read> = if path == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        Box::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(input);
    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    writer.write_record([
        "code",
        "ohms",
        "formatted",
        "scheme",
        "tolerance",
        "encoded",
        "error",
    ])?;

    let mut total = 0usize;
    let mut failed = 0usize;
    for result in reader.records() {
        let record = result?;
        let Some(code) = record.get(0).filter(|code| !code.is_empty()) else {
            continue;
        };
        total += 1;

        let outcome = decode(code).map_err(anyhow::Error::from).and_then(|value| {
            let encoded = args.to.map(|target| encode(&value, target)).transpose()?;
            Ok((value, encoded))
        });

        match outcome {
            Ok((value, encoded)) => {
                let ohms = value.ohms().normalize().to_string();
                let formatted = display(&value, args.precision);
                let tolerance = tolerance_percent(&value);
                writer.write_record([
                    code,
                    ohms.as_str(),
                    formatted.as_str(),
                    value.scheme().name(),
                    tolerance.as_str(),
                    encoded.as_deref().unwrap_or(""),
                    "",
                ])?;
            }
            Err(error) => {
                debug!("{:?} failed: {}", code, error);
                failed += 1;
                let message = error.to_string();
                writer.write_record([code, "", "", "", "", "", message.as_str()])?;
            }
        }
    }
    writer.flush()?;

    if failed > 0 {
        bail!("{} of {} codes could not be decoded", failed, total);
    }
    Ok(())
}

fn run() -> Result<()> {
    let args = Args::parse();

    let env = if args.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    if let Some(path) = &args.batch {
        return decode_batch(path, &args);
    }
    if let Some(value) = &args.value {
        return encode_value(value, &args);
    }

    let Some(code) = args.code_kw.as_deref().or(args.code.as_deref()) else {
        Args::command()
            .error(ErrorKind::MissingRequiredArgument, "please provide a code")
            .exit();
    };
    decode_code(code, &args)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}
