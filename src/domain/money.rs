use super::ValidationError;

/// Amounts are plain floating-point values; there is no currency handling.
pub type Amount = f64;

/// Format an amount for on-screen display with exactly two decimals.
/// Example: 1200.0 -> "1200.00", 12.5 -> "12.50", -60.0 -> "-60.00"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}

/// Format an amount for export, using the shortest representation that
/// round-trips. Example: 1200.0 -> "1200", 12.5 -> "12.5"
pub fn format_export_amount(amount: Amount) -> String {
    amount.to_string()
}

/// Parse a raw user entry into a positive amount.
/// Example: "50" -> 50.0, " 0.01 " -> 0.01, "0" / "-5" / "abc" -> error
pub fn parse_amount(input: &str) -> Result<Amount, ValidationError> {
    let input = input.trim();
    let amount: Amount = input
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(input.to_string()))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::InvalidAmount(input.to_string()));
    }

    Ok(amount)
}
