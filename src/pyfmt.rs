//! Purpose: Render JSON field values as plain summary text.
//! Exports: `render_field`.
//! Role: Small, pure formatter used by summary line emission.
//! Invariants: Missing and null fields render as `None`; top-level strings render unquoted.
//! Invariants: Nested strings are quoted, object keys keep document order.
//! Invariants: Integers keep every digit of the source text; floats use shortest round-trip digits.
use serde_json::{Map, Number, Value};

const NONE: &str = "None";

/// Renders a looked-up field; `None` stands in for an absent key.
pub fn render_field(value: Option<&Value>) -> String {
    match value {
        None => NONE.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => {
            let mut out = String::new();
            write_value(other, &mut out);
            out
        }
    }
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str(NONE),
        Value::Bool(val) => out.push_str(if *val { "True" } else { "False" }),
        Value::Number(num) => write_number(num, out),
        Value::String(text) => write_quoted(text, out),
        Value::Array(items) => write_array(items, out),
        Value::Object(map) => write_object(map, out),
    }
}

fn write_number(num: &Number, out: &mut String) {
    let text = num.to_string();
    if !text.contains(['.', 'e', 'E']) {
        out.push_str(if text == "-0" { "0" } else { &text });
        return;
    }
    match text.parse::<f64>() {
        Ok(val) => out.push_str(&float_repr(val)),
        Err(_) => out.push_str(&text),
    }
}

/// Exponent form below 1e-4 and from 1e16 up, with a signed two-digit minimum exponent.
fn float_repr(val: f64) -> String {
    if val.is_nan() {
        return "nan".to_string();
    }
    if val.is_infinite() {
        return if val < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    let sign = if val.is_sign_negative() { "-" } else { "" };
    let sci = format!("{:e}", val.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if !(-4..16).contains(&exp) {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exp_sign}{:02}", exp.abs());
    }

    let digits: String = mantissa.chars().filter(|ch| *ch != '.').collect();
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("{sign}0.{zeros}{digits}");
    }
    let point = exp as usize + 1;
    if digits.len() <= point {
        let zeros = "0".repeat(point - digits.len());
        format!("{sign}{digits}{zeros}.0")
    } else {
        format!("{sign}{}.{}", &digits[..point], &digits[point..])
    }
}

fn write_array(items: &[Value], out: &mut String) {
    out.push('[');
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        write_value(item, out);
    }
    out.push(']');
}

fn write_object(map: &Map<String, Value>, out: &mut String) {
    out.push('{');
    for (idx, (key, value)) in map.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        write_quoted(key, out);
        out.push_str(": ");
        write_value(value, out);
    }
    out.push('}');
}

// Single quotes unless the text holds a single quote and no double quote.
fn write_quoted(text: &str, out: &mut String) {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_printable(c) => out.push(c),
            c => write_escape(c, out),
        }
    }
    out.push(quote);
}

fn write_escape(ch: char, out: &mut String) {
    let code = ch as u32;
    let escaped = if code < 0x100 {
        format!("\\x{code:02x}")
    } else if code < 0x10000 {
        format!("\\u{code:04x}")
    } else {
        format!("\\U{code:08x}")
    };
    out.push_str(&escaped);
}

// Separators, controls, format characters, private use and noncharacters are escaped.
fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    if ch.is_control() || ch.is_whitespace() {
        return false;
    }
    let code = ch as u32;
    !matches!(
        code,
        0x00ad
            | 0x0600..=0x0605
            | 0x061c
            | 0x06dd
            | 0x070f
            | 0x0890..=0x0891
            | 0x08e2
            | 0x180e
            | 0x200b..=0x200f
            | 0x202a..=0x202e
            | 0x2060..=0x2064
            | 0x2066..=0x206f
            | 0xe000..=0xf8ff
            | 0xfdd0..=0xfdef
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0x110bd
            | 0x110cd
            | 0x13430..=0x1343f
            | 0x1bca0..=0x1bca3
            | 0x1d173..=0x1d17a
            | 0xe0001
            | 0xe0020..=0xe007f
            | 0xf0000..=0x10ffff
    ) && (code & 0xfffe) != 0xfffe
}
