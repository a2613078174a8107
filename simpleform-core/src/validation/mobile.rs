// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mobile number formatting.

/// Separator between the 4-digit prefix and the 6-digit subscriber number.
pub const MOBILE_SEPARATOR: char = '-';

/// Number of characters typed before the separator is inserted.
const PREFIX_LEN: usize = 4;

/// Inserts the separator once the prefix is complete.
///
/// Only fires when the input is exactly four characters long and has no
/// separator yet. Already-dashed input is returned unchanged, and nothing is
/// reformatted retroactively.
///
/// ```
/// use simpleform_core::format_mobile_number;
///
/// assert_eq!(format_mobile_number("1234"), "1234-");
/// assert_eq!(format_mobile_number("123"), "123");
/// assert_eq!(format_mobile_number("1234-5"), "1234-5");
/// ```
pub fn format_mobile_number(input: &str) -> String {
    if input.chars().count() == PREFIX_LEN && !input.contains(MOBILE_SEPARATOR) {
        let mut formatted = String::with_capacity(input.len() + 1);
        formatted.push_str(input);
        formatted.push(MOBILE_SEPARATOR);
        formatted
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_separator_at_four_chars() {
        assert_eq!(format_mobile_number("0300"), "0300-");
    }

    #[test]
    fn test_leaves_other_lengths_alone() {
        assert_eq!(format_mobile_number(""), "");
        assert_eq!(format_mobile_number("030"), "030");
        assert_eq!(format_mobile_number("03001"), "03001");
        assert_eq!(format_mobile_number("12345678901"), "12345678901");
    }

    #[test]
    fn test_does_not_double_separator() {
        assert_eq!(format_mobile_number("123-"), "123-");
        assert_eq!(format_mobile_number("1234-"), "1234-");
    }
}
