/// Format `v` with `precision` significant digits, choosing fixed or
/// scientific notation the way C's `%g` does, with trailing zeros removed.
pub fn format_general(v: f64, precision: usize) -> String {
    if v.is_nan() {
        return "nan".to_owned();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf".to_owned() } else { "-inf".to_owned() };
    }
    if v == 0.0 {
        return "0".to_owned();
    }

    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, v);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0)
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, v)).to_owned()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Keep the first `n` characters of a curve name for header labels.
pub fn truncate_name(name: &str, n: usize) -> String {
    name.chars().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_general(2.345678, 4), "2.346");
        assert_eq!(format_general(1500.0, 4), "1500");
        assert_eq!(format_general(-45.0, 4), "-45");
        assert_eq!(format_general(0.0001234, 4), "0.0001234");
        assert_eq!(format_general(0.0, 4), "0");
        assert_eq!(format_general(2.5, 4), "2.5");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_general(123456.0, 4), "1.235e+05");
        assert_eq!(format_general(0.00001234, 4), "1.234e-05");
        assert_eq!(format_general(-1e20, 4), "-1e+20");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_general(f64::NAN, 4), "nan");
        assert_eq!(format_general(f64::NEG_INFINITY, 4), "-inf");
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("RHOB_CORR", 5), "RHOB_");
        assert_eq!(truncate_name("GR", 5), "GR");
    }
}
