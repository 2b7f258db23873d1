// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  tests/cli.rs - Tests for the smdres command-line tool.
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

use assert_cmd::Command;

fn smdres() -> Command {
    let mut cmd = Command::cargo_bin("smdres").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn decodes_positional_code() {
    smdres()
        .arg("103")
        .assert()
        .success()
        .stdout("103 => 10kΩ (3-digit, ±5%)\n");
}

#[test]
fn decodes_code_flag() {
    smdres()
        .args(["--code", "4r7"])
        .assert()
        .success()
        .stdout("4r7 => 4.7Ω (R-notation, ±5%)\n");
}

#[test]
fn decodes_eia96() {
    smdres()
        .arg("01C")
        .assert()
        .success()
        .stdout("01C => 100Ω (EIA-96, ±1%)\n");
}

#[test]
fn unknown_code_fails() {
    let assert = smdres().arg("abcd").assert().code(1);
    assert!(stderr_of(&assert).contains("Unrecognized SMD resistor code 'abcd'"));
    assert!(assert.get_output().stdout.is_empty());
}

#[test]
fn invalid_eia96_index_fails() {
    let assert = smdres().arg("97C").assert().code(1);
    assert!(stderr_of(&assert).contains("EIA-96 index '97'"));
}

#[test]
fn missing_code_is_a_usage_error() {
    let assert = smdres().assert().code(2);
    assert!(stderr_of(&assert).contains("please provide a code"));
}

#[test]
fn precision_rounds_display() {
    smdres()
        .args(["--precision", "2", "4991"])
        .assert()
        .success()
        .stdout("4991 => 5kΩ (4-digit, ±1%)\n");
}

#[test]
fn re_encodes_into_another_scheme() {
    smdres()
        .args(["1002", "--to", "three-digit"])
        .assert()
        .success()
        .stdout("1002 => 103 (3-digit)\n");
}

#[test]
fn re_encoding_refuses_precision_loss() {
    let assert = smdres().args(["4991", "--to", "3-digit"]).assert().code(1);
    let stderr = stderr_of(&assert);
    assert!(stderr.contains("Cannot write '4991' as a 3-digit code"));
    assert!(stderr.contains("significant digits"));
}

#[test]
fn unknown_target_scheme_is_a_usage_error() {
    smdres()
        .args(["103", "--to", "color-band"])
        .assert()
        .code(2);
}

#[test]
fn encodes_plain_value() {
    smdres()
        .args(["--value", "10k", "--to", "eia96"])
        .assert()
        .success()
        .stdout("10kΩ => 01E (EIA-96)\n");
    smdres()
        .args(["--value", "4k7", "--to", "r-notation"])
        .assert()
        .success()
        .stdout("4.7kΩ => 4700R (R-notation)\n");
}

#[test]
fn value_requires_target() {
    smdres().args(["--value", "10k"]).assert().code(2);
}

#[test]
fn bad_value_fails() {
    let assert = smdres()
        .args(["--value", "ten", "--to", "eia96"])
        .assert()
        .code(1);
    assert!(stderr_of(&assert).contains("Invalid resistance value 'ten'"));
}

#[test]
fn value_that_needs_rounding_fails() {
    let assert = smdres()
        .args(["--value", "4.70000000000000000000000000001", "--to", "r-notation"])
        .assert()
        .code(1);
    assert!(stderr_of(&assert).contains("Invalid resistance value"));
    assert!(assert.get_output().stdout.is_empty());
}

#[test]
fn debug_flag_enables_logging() {
    let assert = smdres()
        .args(["--debug", "103"])
        .assert()
        .success()
        .stdout("103 => 10kΩ (3-digit, ±5%)\n");
    assert!(stderr_of(&assert).contains("Decoding \"103\""));
}

#[test]
fn batch_from_stdin() {
    let assert = smdres()
        .args(["--batch", "-"])
        .write_stdin("103\n# comment\n4R7\n\n97C\n")
        .assert()
        .code(1)
        .stdout(concat!(
            "code,ohms,formatted,scheme,tolerance,encoded,error\n",
            "103,10000,10kΩ,3-digit,±5%,,\n",
            "4R7,4.7,4.7Ω,R-notation,±5%,,\n",
            "97C,,,,,,EIA-96 index '97' in '97C' is out of range (expected 01-96)\n",
        ));
    assert!(stderr_of(&assert).contains("1 of 3 codes could not be decoded"));
}

#[test]
fn batch_with_target_scheme() {
    smdres()
        .args(["--batch", "-", "--to", "four-digit"])
        .write_stdin("103\n472, R1\n")
        .assert()
        .success()
        .stdout(concat!(
            "code,ohms,formatted,scheme,tolerance,encoded,error\n",
            "103,10000,10kΩ,3-digit,±5%,1002,\n",
            "472,4700,4.7kΩ,3-digit,±5%,4701,\n",
        ));
}

#[test]
fn batch_missing_file_fails() {
    let assert = smdres()
        .args(["--batch", "/nonexistent/codes.txt"])
        .assert()
        .code(1);
    assert!(stderr_of(&assert).contains("Failed to open /nonexistent/codes.txt"));
}
