/// Formats a number for an SVG attribute: integers without a fraction,
/// everything else rounded to three decimals with trailing zeros dropped.
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    if rounded.fract() == 0.0 {
        return format!("{rounded:.0}");
    }
    let text = format!("{rounded:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn rotate(degrees: f64) -> String {
    format!("rotate({})", fmt_num(degrees))
}

pub fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", fmt_num(x), fmt_num(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(fmt_num(90.0), "90");
        assert_eq!(fmt_num(-52.0), "-52");
        assert_eq!(fmt_num(-0.0), "0");
    }

    #[test]
    fn fractions_are_trimmed() {
        assert_eq!(fmt_num(15.5), "15.5");
        assert_eq!(fmt_num(66.666_666), "66.667");
        assert_eq!(fmt_num(0.0004), "0");
        assert_eq!(fmt_num(f64::NAN), "0");
    }

    #[test]
    fn transforms_use_formatted_numbers() {
        assert_eq!(rotate(354.0), "rotate(354)");
        assert_eq!(translate(140.0, 140.0), "translate(140,140)");
    }
}
