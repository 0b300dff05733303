// File: crates/visualize-core/src/stats.rs
// Summary: Aggregates over loosely typed cell values (max, min, sum, average) and the lenient cell parser.

/// A value that may or may not coerce to a number.
///
/// Missing and non-numeric values yield `None`; aggregates treat them as
/// absent (`max`/`min`) or as zero (`sum`/`average`). Nothing here panics or
/// returns an error for bad cell content.
pub trait Numeric {
    fn to_number(&self) -> Option<f64>;
}

impl Numeric for f64 {
    fn to_number(&self) -> Option<f64> {
        if self.is_nan() { None } else { Some(*self) }
    }
}

impl Numeric for f32 {
    fn to_number(&self) -> Option<f64> {
        if self.is_nan() { None } else { Some(*self as f64) }
    }
}

macro_rules! numeric_int {
    ($($t:ty),*) => {
        $(impl Numeric for $t {
            fn to_number(&self) -> Option<f64> { Some(*self as f64) }
        })*
    };
}

numeric_int!(i32, i64, u32, u64, usize);

impl Numeric for str {
    fn to_number(&self) -> Option<f64> {
        parse_decimal(self.trim())
    }
}

/// Plain decimal text only: digits with optional sign, point and exponent.
/// Rust's float parser also takes "inf", "infinity" and "nan", which are not numbers here.
pub(crate) fn parse_decimal(t: &str) -> Option<f64> {
    let decimal = t.bytes().any(|b| b.is_ascii_digit())
        && t.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal {
        return None;
    }
    t.parse::<f64>().ok()
}

impl Numeric for String {
    fn to_number(&self) -> Option<f64> { self.as_str().to_number() }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_number(&self) -> Option<f64> { (**self).to_number() }
}

impl<T: Numeric> Numeric for Option<T> {
    fn to_number(&self) -> Option<f64> { self.as_ref().and_then(Numeric::to_number) }
}

/// Largest numeric element; `None` for an empty slice or one without numbers.
pub fn max<T: Numeric>(values: &[T]) -> Option<f64> {
    values
        .iter()
        .filter_map(Numeric::to_number)
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

/// Smallest numeric element; `None` for an empty slice or one without numbers.
pub fn min<T: Numeric>(values: &[T]) -> Option<f64> {
    values
        .iter()
        .filter_map(Numeric::to_number)
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.min(v))))
}

/// Total of all numeric elements; others count as 0.
pub fn sum<T: Numeric>(values: &[T]) -> f64 {
    values.iter().filter_map(Numeric::to_number).sum()
}

/// `sum / len` over every element (non-numeric included in `len`), 0 when empty.
pub fn average<T: Numeric>(values: &[T]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

/// Default cell parser: reads the longest numeric prefix after leading
/// whitespace (`"12px"` is 12, `"-.5e2 units"` is -50), NaN when there is none.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut end = 0;
    let mut negative = false;

    if let Some(&sign) = bytes.first() {
        if sign == b'+' || sign == b'-' {
            negative = sign == b'-';
            end = 1;
        }
    }
    if s[end..].starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if end < len && bytes[end] == b'.' {
        let mut k = end + 1;
        while k < len && bytes[k].is_ascii_digit() {
            k += 1;
        }
        mantissa_digits += k - (end + 1);
        if mantissa_digits > 0 {
            end = k;
        }
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut k = end + 1;
        if k < len && (bytes[k] == b'+' || bytes[k] == b'-') {
            k += 1;
        }
        let exp_start = k;
        while k < len && bytes[k].is_ascii_digit() {
            k += 1;
        }
        if k > exp_start {
            end = k;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_skips_missing_and_text() {
        let cells = [Some("1"), Some("x"), None, Some("3")];
        assert_eq!(sum(&cells), 4.0);
        assert_eq!(sum::<f64>(&[]), 0.0);
        assert_eq!(sum(&[1.0, f64::NAN, 2.5]), 3.5);
    }

    #[test]
    fn average_guards_empty_input() {
        assert_eq!(average::<f64>(&[]), 0.0);
        assert_eq!(average(&[2.0, 4.0]), 3.0);
        // the text cell still counts toward the length
        assert_eq!(average(&["6", "n/a"]), 3.0);
    }

    #[test]
    fn extremes_are_absent_without_numbers() {
        assert_eq!(max::<f64>(&[]), None);
        assert_eq!(min::<f64>(&[]), None);
        assert_eq!(max(&["a", "b"]), None);
        assert_eq!(max(&[3.0, f64::NAN, 7.0, -1.0]), Some(7.0));
        assert_eq!(min(&[3, 9, -4]), Some(-4.0));
    }

    #[test]
    fn word_forms_are_not_numbers() {
        assert_eq!("inf".to_number(), None);
        assert_eq!("-Infinity".to_number(), None);
        assert_eq!("NaN".to_number(), None);
        assert_eq!(" 2.5e1 ".to_number(), Some(25.0));
        assert_eq!("-.5".to_number(), Some(-0.5));
        assert_eq!(max(&["inf", "4"]), Some(4.0));
    }

    #[test]
    fn parse_float_reads_numeric_prefix() {
        assert_eq!(parse_float("42"), 42.0);
        assert_eq!(parse_float("  12px"), 12.0);
        assert_eq!(parse_float("-.5e2 units"), -50.0);
        assert_eq!(parse_float("3.75%"), 3.75);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
    }
}
