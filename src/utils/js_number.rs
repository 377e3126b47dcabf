//! Coerção numérica no estilo JavaScript.
//!
//! Os parâmetros `page`, `limit` e `id` chegam como texto e não são validados:
//! a paginação e a busca por id seguem as regras de `Number()`, `parseInt()` e
//! `Array.prototype.slice()` para que entradas estranhas degradem em
//! resultados vazios em vez de erros.

use serde_json::Value;

/// Converte texto como `Number(s)`. Retorna `f64::NAN` quando não há número.
pub fn to_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };

    if let Some(radix) = radix {
        return parse_radix_digits(&s[2..], radix).unwrap_or(f64::NAN);
    }

    // f64::from_str aceita "inf"/"nan", que não são números em JS
    if !s.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')) {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }

    let mut value = 0.0_f64;
    for c in digits.chars() {
        let d = c.to_digit(radix)?;
        value = value * radix as f64 + d as f64;
    }
    Some(value)
}

/// Converte texto como `parseInt(s, 10)`. `None` equivale a `NaN`.
pub fn parse_int(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: f64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Intervalo `[from, to)` que `Array.prototype.slice(start, end)` produz
/// para uma coleção de tamanho `len`.
pub fn slice_bounds(start: f64, end: f64, len: usize) -> (usize, usize) {
    let from = relative_index(start, len);
    let to = relative_index(end, len);
    (from, to.max(from))
}

fn relative_index(n: f64, len: usize) -> usize {
    if n.is_nan() {
        return 0;
    }

    let n = n.trunc();
    let len_f = len as f64;
    if n < 0.0 {
        (len_f + n).max(0.0) as usize
    } else {
        n.min(len_f) as usize
    }
}

/// Representação JSON de um número JS: inteiros viram inteiros,
/// `NaN`/`Infinity` viram `null` (como `JSON.stringify`).
pub fn to_json(n: f64) -> Value {
    if !n.is_finite() {
        return Value::Null;
    }

    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        // -0 também serializa como 0
        return Value::from(n as i64);
    }

    serde_json::Number::from_f64(n)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_number_follows_js_coercion() {
        assert_eq!(to_number("2"), 2.0);
        assert_eq!(to_number("  7 "), 7.0);
        assert_eq!(to_number(""), 0.0);
        assert_eq!(to_number("2.5"), 2.5);
        assert_eq!(to_number("1e2"), 100.0);
        assert_eq!(to_number("0x10"), 16.0);
        assert_eq!(to_number("-3"), -3.0);
        assert_eq!(to_number("Infinity"), f64::INFINITY);
        assert!(to_number("abc").is_nan());
        assert!(to_number("inf").is_nan());
        assert!(to_number("2abc").is_nan());
        assert!(to_number("0x").is_nan());
    }

    #[test]
    fn test_parse_int_takes_leading_digits() {
        assert_eq!(parse_int("42"), Some(42.0));
        assert_eq!(parse_int("  3abc"), Some(3.0));
        assert_eq!(parse_int("-2"), Some(-2.0));
        assert_eq!(parse_int("1e3"), Some(1.0));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn test_slice_bounds_matches_array_slice() {
        assert_eq!(slice_bounds(2.0, 4.0, 5), (2, 4));
        assert_eq!(slice_bounds(10.0, 15.0, 5), (5, 5));
        assert_eq!(slice_bounds(f64::NAN, f64::NAN, 5), (0, 0));
        assert_eq!(slice_bounds(-5.0, 0.0, 5), (0, 0));
        assert_eq!(slice_bounds(-2.0, 5.0, 5), (3, 5));
        assert_eq!(slice_bounds(1.5, 3.9, 5), (1, 3));
        assert_eq!(slice_bounds(0.0, f64::INFINITY, 5), (0, 5));
        assert_eq!(slice_bounds(4.0, 2.0, 5), (4, 4));
    }

    #[test]
    fn test_to_json_nulls_non_finite() {
        assert_eq!(to_json(3.0), Value::from(3));
        assert_eq!(to_json(-0.0), Value::from(0));
        assert_eq!(to_json(f64::NAN), Value::Null);
        assert_eq!(to_json(f64::INFINITY), Value::Null);
        assert_eq!(to_json(2.5), serde_json::json!(2.5));
    }
}
