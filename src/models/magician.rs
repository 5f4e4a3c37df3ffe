use sqlx::FromRow;

/// Magician account row
///
/// The pause flag only changes the message guests see; it never blocks
/// summon ingestion.
#[derive(Debug, Clone, FromRow)]
pub struct Magician {
    pub id: i64,
    /// Unique, stored case-sensitively
    pub email: String,
    pub password_hash: String,
    pub paused: bool,
    /// When the account was created (Unix epoch millis)
    pub created_at: i64,
}

impl Magician {
    /// Minimal shape check on a registration email. Full address
    /// validation is the mail system's problem; this only rejects
    /// obvious junk before it reaches storage.
    pub fn validate_email(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(Magician::validate_email("merlin@example.com"));
        assert!(Magician::validate_email("m.the.great@venues.example.co.uk"));

        // No @
        assert!(!Magician::validate_email("merlin.example.com"));

        // Empty local part
        assert!(!Magician::validate_email("@example.com"));

        // Domain without a dot, or starting with one
        assert!(!Magician::validate_email("merlin@localhost"));
        assert!(!Magician::validate_email("merlin@.com"));

        assert!(!Magician::validate_email(""));
    }
}
