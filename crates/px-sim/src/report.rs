//! Number formatting for transcript lines.

use px_core::Real;

/// Format `value` with `digits` significant digits.
///
/// Fixed notation keeps at least one digit after the point (`2.0`) and drops
/// other trailing zeros. Exponent notation (`2.257618e-08`) is used when the
/// decimal exponent is below -4, or when fixed notation would need more than
/// `digits` digits.
pub fn significant(value: Real, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let digits = digits.max(1);
    // Rounding to `digits` first fixes the exponent (9.9999999 -> 1.000000e1).
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exp < -4 || exp >= digits as i32 - 1 {
        let mantissa = if mantissa.contains('.') {
            mantissa.trim_end_matches('0').trim_end_matches('.')
        } else {
            mantissa
        };
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp) as usize;
        let fixed = format!("{:.*}", decimals, value);
        let trimmed = fixed.trim_end_matches('0');
        if trimmed.ends_with('.') {
            format!("{}0", trimmed)
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_notation() {
        assert_eq!(significant(36.346952, 7), "36.34695");
        assert_eq!(significant(32.0452805, 7), "32.04528");
        assert_eq!(significant(0.04429447, 7), "0.04429447");
        assert_eq!(significant(-3.5, 7), "-3.5");
        assert_eq!(significant(0.0001, 7), "0.0001");
    }

    #[test]
    fn whole_numbers_keep_one_decimal() {
        assert_eq!(significant(2.0, 7), "2.0");
        assert_eq!(significant(0.0, 7), "0.0");
        assert_eq!(significant(123456.0, 7), "123456.0");
    }

    #[test]
    fn rounding_carries_into_next_digit() {
        assert_eq!(significant(9.9999999, 7), "10.0");
        assert_eq!(significant(0.99999996, 7), "1.0");
    }

    #[test]
    fn exponent_notation() {
        assert_eq!(significant(2.257618e-08, 7), "2.257618e-08");
        assert_eq!(significant(1e-8, 7), "1e-08");
        assert_eq!(significant(1.234e-5, 7), "1.234e-05");
        assert_eq!(significant(1234567.0, 7), "1.234567e+06");
        assert_eq!(significant(123456789.0, 7), "1.234568e+08");
    }

    #[test]
    fn non_finite() {
        assert_eq!(significant(Real::NAN, 7), "nan");
        assert_eq!(significant(Real::INFINITY, 7), "inf");
        assert_eq!(significant(Real::NEG_INFINITY, 7), "-inf");
    }
}
