//! JavaScript number coercion for enum keys.
//!
//! Enum keys are property names at runtime, but a reverse-mapped enum stores
//! its member values under numeric-looking names. Deciding which side of the
//! mapping a key belongs to therefore follows the `StringToNumber` abstract
//! operation instead of `f64::from_str`, which accepts `inf`/`nan` and rejects
//! radix literals.

use crate::primitive::Primitive;

/// Which side of a reverse mapping a key sits on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyClass {
    /// The key coerces to a number: `"1"`, `"0x1F"`, `""`, or a number key.
    Numeric(f64),
    /// The key is a member name.
    Name,
}

impl KeyClass {
    pub fn is_numeric(self) -> bool {
        matches!(self, KeyClass::Numeric(_))
    }

    pub fn is_name(self) -> bool {
        matches!(self, KeyClass::Name)
    }
}

/// Classify an enum key.
///
/// Number keys are always numeric, `NaN` included. String keys are numeric
/// when [`string_to_number`] yields anything other than `NaN`, so `""`, `" "`,
/// `"1e3"` and `"Infinity"` are numeric while `"NaN"` and `"1_000"` are names.
pub fn classify(key: &Primitive) -> KeyClass {
    match key {
        Primitive::Number(value) => KeyClass::Numeric(*value),
        Primitive::String(text) => {
            let value = string_to_number(text);
            if value.is_nan() {
                KeyClass::Name
            } else {
                KeyClass::Numeric(value)
            }
        }
    }
}

/// Convert a string to a number the way unary `+` does.
///
/// Returns `NaN` for anything that is not a numeric literal after trimming
/// whitespace and line terminators. Numeric separators and signed radix
/// literals are rejected.
pub fn string_to_number(text: &str) -> f64 {
    let text = text.trim_matches(is_js_whitespace);
    if text.is_empty() {
        return 0.0;
    }

    if let Some((digits, radix)) = split_radix_prefix(text) {
        return parse_radix_digits(digits, radix).unwrap_or(f64::NAN);
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // `f64::from_str` also takes `inf`, `infinity` and `nan` in any case.
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let is_decimal_text = unsigned
        .bytes()
        .all(|byte| byte.is_ascii_digit() || matches!(byte, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal_text {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn split_radix_prefix(text: &str) -> Option<(&str, u32)> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((&text[2..], radix))
}

fn parse_radix_digits(text: &str, radix: u32) -> Option<f64> {
    if text.is_empty() {
        return None;
    }

    let radix_value = radix as f64;
    let mut value = 0f64;
    for ch in text.chars() {
        let digit = ch.to_digit(radix)?;
        value = value * radix_value + digit as f64;
    }
    Some(value)
}

/// ECMAScript `WhiteSpace` and `LineTerminator` code points.
fn is_js_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Render a number the way `Number.prototype.toString()` does.
///
/// This is the form a number key takes once it becomes a property name.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }

    let abs = value.abs();
    if !(1e-6..1e21).contains(&abs) {
        let mut formatted = format!("{:e}", value);
        if let Some(split) = formatted.find('e') {
            let (mantissa, exp) = formatted.split_at(split);
            let exp_digits = &exp[1..];
            let (sign, digits) = match exp_digits.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp_digits),
            };
            let trimmed = digits.trim_start_matches('0');
            let digits = if trimmed.is_empty() { "0" } else { trimmed };
            formatted = format!("{mantissa}e{sign}{digits}");
        }
        return formatted;
    }

    value.to_string()
}
