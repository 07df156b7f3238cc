use std::fmt;

/// Number of decimals shown for finite indicator readings
const DISPLAY_DECIMALS: usize = 3;

/// Fractional digits needed to print any f64 exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Magnitude from which readings switch to exponent notation
const EXPONENT_THRESHOLD: f64 = 1e21;

/// A single indicator reading from the `values` mapping.
///
/// The producer normally writes numbers, but `NaN`/`Infinity` show up when a
/// data series is empty, and anything else is kept as its raw text so the
/// table can still show it.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Number(f64),
    Raw(String),
}

impl Reading {
    /// Text shown in the "Latest" column
    pub fn display(&self) -> String {
        match self {
            Reading::Number(v) if v.is_finite() => to_fixed(*v, DISPLAY_DECIMALS),
            Reading::Number(v) if v.is_nan() => "NaN".to_string(),
            Reading::Number(v) if v.is_sign_negative() => "-Infinity".to_string(),
            Reading::Number(_) => "Infinity".to_string(),
            Reading::Raw(text) => text.clone(),
        }
    }
}

/// Fixed-point text with ties rounded away from zero, as browsers print
/// readings. Rounds on the exact binary value, so 0.0625 becomes 0.063
/// while 1.0005 (stored slightly below the tie) becomes 1.000.
fn to_fixed(v: f64, decimals: usize) -> String {
    if v.abs() >= EXPONENT_THRESHOLD {
        // Shortest round-trip digits, with an explicit exponent sign
        return format!("{:e}", v).replacen('e', "e+", 1);
    }

    // -0.0 is not negative, so it prints as "0.000"
    let sign = if v < 0.0 { "-" } else { "" };
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, v.abs());
    let (int_part, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(fraction.bytes().take(decimals))
        .collect();
    if fraction.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let int_len = digits.len() - decimals;
    let text = String::from_utf8_lossy(&digits);
    if decimals == 0 {
        format!("{}{}", sign, text)
    } else {
        format!("{}{}.{}", sign, &text[..int_len], &text[int_len..])
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
