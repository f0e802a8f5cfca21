use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Tokens at or below this length are rejected by the call access gate.
pub const MIN_TOKEN_LEN: usize = 10;

const SESSION_HOURS: i64 = 2;

pub fn generate_session_token() -> String {
    Uuid::new_v4().to_string()
}

pub fn session_expiry() -> DateTime<Utc> {
    Utc::now() + Duration::hours(SESSION_HOURS)
}

/// The gate's only check today: non-empty and longer than ten characters.
/// Not an authentication mechanism; expiry is stored but not consulted here.
pub fn is_valid_token(token: &str) -> bool {
    token.chars().count() > MIN_TOKEN_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_token_passes_the_gate() {
        let token = generate_session_token();
        assert!(is_valid_token(&token));
        // UUID v4 text form
        assert_eq!(token.len(), 36);
        assert!(Uuid::parse_str(&token).is_ok());
    }

    #[test]
    fn test_token_length_boundary() {
        assert!(!is_valid_token(""));
        assert!(!is_valid_token("abc"));
        assert!(!is_valid_token("a1b2c3d4e5")); // 10 chars, still rejected
        assert!(is_valid_token("a1b2c3d4e5f")); // 11 chars
        assert!(is_valid_token("a1b2c3d4e5f6")); // 12 chars
    }

    #[test]
    fn test_session_expiry_is_two_hours_out() {
        // Sampled before session_expiry() reads the clock, so the delta is
        // two hours plus however long the call took.
        let now = Utc::now();
        let expires = session_expiry();
        let delta = expires - now;
        assert!(delta >= Duration::hours(2));
        assert!(delta < Duration::hours(2) + Duration::seconds(1));
    }
}
