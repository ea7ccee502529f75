/// Converts a raw ledger amount (integer string) into whole token units.
pub fn format_units(raw: &str, decimals: u32) -> eyre::Result<f64> {
    let raw: u128 = raw.trim().parse()?;

    Ok((raw as f64) / 10f64.powi(decimals as i32))
}

/// Converts whole token units into the raw integer string the ledger expects.
pub fn to_base_units(amount: f64, decimals: u32) -> String {
    let raw = (amount * 10f64.powi(decimals as i32)).round() as u128;

    raw.to_string()
}

pub fn separator() -> String {
    let width = term_size::dimensions().map(|(w, _)| w).unwrap_or(64);

    "-".repeat(width.min(64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_raw_amounts() {
        assert_eq!(format_units("1000000000000000000", 18).unwrap(), 1.0);
        assert_eq!(format_units("2500000000000000000", 18).unwrap(), 2.5);
        assert_eq!(format_units("0", 18).unwrap(), 0.0);
    }

    #[test]
    fn rejects_non_numeric_amounts() {
        assert!(format_units("not-a-number", 18).is_err());
    }

    #[test]
    fn converts_to_base_units() {
        assert_eq!(to_base_units(1.5, 18), "1500000000000000000");
        assert_eq!(to_base_units(0.0, 18), "0");
    }
}
