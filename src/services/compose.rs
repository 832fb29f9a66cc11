/// Service for validating and inspecting user-composed text (comments,
/// chat messages)
pub struct ComposeService;

impl ComposeService {
    /// Validate composed text: trims surrounding whitespace, rejects
    /// empty input and input over `max_len` characters.
    pub fn validate(content: &str, max_len: usize) -> Result<String, String> {
        let trimmed = content.trim();

        if trimmed.is_empty() {
            return Err("Message cannot be empty".to_string());
        }

        if trimmed.chars().count() > max_len {
            return Err(format!("Message too long (max {} characters)", max_len));
        }

        Ok(trimmed.to_string())
    }

    /// Extract mentioned names from text (e.g. "@amara")
    pub fn extract_mentions(content: &str) -> Vec<String> {
        let re = regex::Regex::new(r"@([a-zA-Z0-9_]+)").unwrap();
        re.captures_iter(content)
            .map(|cap| cap.get(1).unwrap().as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_and_accepts() {
        assert_eq!(ComposeService::validate("  hello  ", 100), Ok("hello".to_string()));
    }

    #[test]
    fn validate_rejects_blank_input() {
        assert!(ComposeService::validate("", 100).is_err());
        assert!(ComposeService::validate("   \n\t", 100).is_err());
    }

    #[test]
    fn validate_rejects_over_length_input() {
        let long = "x".repeat(101);
        assert!(ComposeService::validate(&long, 100).is_err());
        let exact = "x".repeat(100);
        assert!(ComposeService::validate(&exact, 100).is_ok());
    }

    #[test]
    fn mentions_are_extracted() {
        let text = "thanks @amara and @kwame_b for the well work";
        assert_eq!(ComposeService::extract_mentions(text), vec!["amara", "kwame_b"]);
        assert!(ComposeService::extract_mentions("no mentions here").is_empty());
    }
}
