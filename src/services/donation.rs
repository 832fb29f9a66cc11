/// Service for validating donation form input
pub struct DonationService;

impl DonationService {
    /// Parse and validate a gift amount. Accepts plain numbers with an
    /// optional two-decimal fraction; rejects zero, negatives, and
    /// absurd values.
    pub fn parse_amount(input: &str, max: f64) -> Result<f64, String> {
        let trimmed = input.trim().trim_start_matches('$');
        if trimmed.is_empty() {
            return Err("Enter a gift amount".to_string());
        }
        let amount: f64 = trimmed
            .parse()
            .map_err(|_| "Amount must be a number".to_string())?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err("Amount must be greater than zero".to_string());
        }
        if amount > max {
            return Err("That amount is above what we can process here; please \
                        contact us directly for major gifts"
                .to_string());
        }
        Ok((amount * 100.0).round() / 100.0)
    }

    /// Shallow shape check only; nothing is ever sent anywhere.
    pub fn validate_email(input: &str) -> Result<String, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err("Enter an email address".to_string());
        }
        let mut parts = trimmed.splitn(2, '@');
        let local = parts.next().unwrap_or("");
        let domain = parts.next().unwrap_or("");
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err("That email address doesn't look right".to_string());
        }
        Ok(trimmed.to_string())
    }

    pub fn validate_name(input: &str) -> Result<String, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err("Enter your name".to_string());
        }
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: f64 = 1_000_000.0;

    #[test]
    fn plain_and_decimal_amounts_parse() {
        assert_eq!(DonationService::parse_amount("50", MAX), Ok(50.0));
        assert_eq!(DonationService::parse_amount(" $75.50 ", MAX), Ok(75.5));
    }

    #[test]
    fn bad_amounts_are_rejected() {
        assert!(DonationService::parse_amount("", MAX).is_err());
        assert!(DonationService::parse_amount("abc", MAX).is_err());
        assert!(DonationService::parse_amount("0", MAX).is_err());
        assert!(DonationService::parse_amount("-5", MAX).is_err());
        assert!(DonationService::parse_amount("2000000", MAX).is_err());
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(DonationService::validate_email("ada@example.org").is_ok());
        assert!(DonationService::validate_email("ada@").is_err());
        assert!(DonationService::validate_email("@example.org").is_err());
        assert!(DonationService::validate_email("ada@nodot").is_err());
        assert!(DonationService::validate_email("").is_err());
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(DonationService::validate_name("  Ada Lovelace "), Ok("Ada Lovelace".to_string()));
        assert!(DonationService::validate_name("   ").is_err());
    }
}
