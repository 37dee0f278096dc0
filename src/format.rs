/// Significant digits used by [`format`].
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 12;

// f64 never carries more than 17 meaningful decimal digits
const MAX_SIGNIFICANT_DIGITS: usize = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub significant_digits: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

impl FormatOptions {
    pub fn with_significant_digits(significant_digits: usize) -> Self {
        Self { significant_digits }
    }

    fn digits(&self) -> usize {
        self.significant_digits.clamp(1, MAX_SIGNIFICANT_DIGITS)
    }
}

/// Renders `value` with the default options.
pub fn format(value: f64) -> String {
    format_with(value, &FormatOptions::default())
}

/// Renders `value` in its shortest readable form.
///
/// Integral values print without a decimal point (`360`, `-3`), other finite
/// values print like C's `%g` with `options.significant_digits` digits
/// (`2394.55888943`, `1.61129032258e-11`), and non-finite values print as
/// `Infinity`, `-Infinity` or `NaN`.
pub fn format_with(value: f64, options: &FormatOptions) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let s = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }
    if value == 0.0 {
        // also catches -0
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{}", value);
    }
    format_significant(value, options.digits())
}

fn format_significant(value: f64, digits: usize) -> String {
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        );
    }

    let decimals = (digits as i32 - 1 - exponent) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_fraction(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integral_values() {
        assert_eq!(format(4.0), "4");
        assert_eq!(format(360.0), "360");
        assert_eq!(format(-3.0), "-3");
        assert_eq!(format(0.0), "0");
        assert_eq!(format(-0.0), "0");
        assert_eq!(format(20922789888000.0), "20922789888000");
        assert_eq!(format(1e21), "1000000000000000000000");
    }

    #[test]
    fn fractional_values() {
        assert_eq!(format(5.5), "5.5");
        assert_eq!(format(0.25), "0.25");
        assert_eq!(format(-0.1), "-0.1");
        assert_eq!(format(2.0 / 17.0), "0.117647058824");
        assert_eq!(format(2394.558889427), "2394.55888943");
    }

    #[test]
    fn float_noise_is_rounded_away() {
        assert_eq!(format(0.1 + 0.2), "0.3");
        assert_eq!(format(3.0000000000000004), "3");
    }

    #[test]
    fn scientific_for_extreme_exponents() {
        assert_eq!(format(2.0 / 124124124124.0), "1.61129032258e-11");
        assert_eq!(format(0.0001), "0.0001");
        assert_eq!(format(0.00001234), "1.234e-05");
        assert_eq!(format(291730871263727.5), "2.91730871264e+14");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format(f64::INFINITY), "Infinity");
        assert_eq!(format(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format(f64::NAN), "NaN");
    }

    #[test]
    fn custom_precision() {
        let options = FormatOptions::with_significant_digits(3);
        assert_eq!(format_with(2.0 / 3.0, &options), "0.667");
        assert_eq!(format_with(1234.5, &options), "1.23e+03");
        assert_eq!(format_with(7.0, &options), "7");

        // out of range values are clamped
        let options = FormatOptions::with_significant_digits(0);
        assert_eq!(format_with(0.26, &options), "0.3");
    }

    #[test]
    fn integral_output_round_trips() {
        for value in [0.0, 1.0, -7.0, 368.0, 582774761768877502456687986.0] {
            let text = format(value);
            let parsed = text.parse::<f64>().unwrap();
            assert_eq!(parsed, value);
            assert_eq!(format(parsed), text);
        }
    }
}
