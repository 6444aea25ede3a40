// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shortest round-tripping formatting of finite Numbers in radixes other
//! than 10.
//!
//! Digits are produced until the remaining fraction is smaller than half the
//! distance to the next representable double, which makes the output the
//! shortest string that parses back to the same value.

const CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const BUFFER_SIZE: usize = 2200;

fn next_double(value: f64) -> f64 {
    debug_assert!(value >= 0.0 && value.is_finite());
    f64::from_bits(value.to_bits() + 1)
}

/// Formats a finite, nonzero `value` in `radix`.
pub(super) fn to_radix_string(value: f64, radix: u32) -> String {
    debug_assert!(value.is_finite() && value != 0.0);
    debug_assert!((2..=36).contains(&radix) && radix != 10);
    let radix_f = radix as f64;

    // Character array used for conversion. The integer part grows to the
    // left of the midpoint, the fraction to the right.
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut integer_cursor = BUFFER_SIZE / 2;
    let mut fraction_cursor = integer_cursor;

    let negative = value < 0.0;
    let value = value.abs();

    // Split the value into an integer part and a fractional part.
    let mut integer = value.floor();
    let mut fraction = value - integer;
    // Only compute the fraction digits up to the input's precision.
    let mut delta = 0.5 * (next_double(value) - value);
    delta = next_double(0.0).max(delta);
    if fraction >= delta {
        // Insert the decimal point.
        buffer[fraction_cursor] = b'.';
        fraction_cursor += 1;
        loop {
            // Shift up by one digit.
            fraction *= radix_f;
            delta *= radix_f;
            // Write digit.
            let digit = fraction as usize;
            buffer[fraction_cursor] = CHARS[digit];
            fraction_cursor += 1;
            // Calculate remainder.
            fraction -= digit as f64;
            // Round to even.
            if (fraction > 0.5 || (fraction == 0.5 && (digit & 1) == 1)) && fraction + delta > 1.0
            {
                // Back trace already written digits in case of carry-over.
                loop {
                    fraction_cursor -= 1;
                    if fraction_cursor == BUFFER_SIZE / 2 {
                        debug_assert_eq!(buffer[fraction_cursor], b'.');
                        // Carry over to the integer part.
                        integer += 1.0;
                        break;
                    }
                    let c = buffer[fraction_cursor];
                    let digit = if c > b'9' {
                        (c - b'a' + 10) as u32
                    } else {
                        (c - b'0') as u32
                    };
                    if digit + 1 < radix {
                        buffer[fraction_cursor] = CHARS[digit as usize + 1];
                        fraction_cursor += 1;
                        break;
                    }
                }
                break;
            }
            if fraction < delta {
                break;
            }
        }
    }

    // Compute integer digits. Fill unrepresented digits with zero.
    while integer / radix_f >= 9007199254740992.0 {
        integer /= radix_f;
        integer_cursor -= 1;
        buffer[integer_cursor] = b'0';
    }
    loop {
        let remainder = integer % radix_f;
        integer_cursor -= 1;
        buffer[integer_cursor] = CHARS[remainder as usize];
        integer = (integer - remainder) / radix_f;
        if integer <= 0.0 {
            break;
        }
    }

    if negative {
        integer_cursor -= 1;
        buffer[integer_cursor] = b'-';
    }
    debug_assert!(integer_cursor < fraction_cursor);
    // The buffer only ever holds ASCII.
    buffer[integer_cursor..fraction_cursor]
        .iter()
        .map(|&c| c as char)
        .collect()
}

#[cfg(test)]
mod test {
    use super::to_radix_string;

    #[test]
    fn integers() {
        assert_eq!(to_radix_string(255.0, 16), "ff");
        assert_eq!(to_radix_string(-255.0, 2), "-11111111");
        assert_eq!(to_radix_string(35.0, 36), "z");
        assert_eq!(to_radix_string(9007199254740991.0, 16), "1fffffffffffff");
    }

    #[test]
    fn fractions() {
        assert_eq!(to_radix_string(0.5, 2), "0.1");
        assert_eq!(to_radix_string(0.5, 16), "0.8");
        assert_eq!(to_radix_string(-3.25, 2), "-11.01");
    }
}
