use chrono::{DateTime, Utc};

/// One session-continuation credential. Only the SHA-256 digest of the raw
/// token is ever persisted.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct RefreshToken {
    pub id: i64,
    pub token_hash: String,
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// A token is live while it is neither revoked nor past its expiry.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && self.expires_at > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token(expires_at: DateTime<Utc>, revoked_at: Option<DateTime<Utc>>) -> RefreshToken {
        RefreshToken {
            id: 1,
            token_hash: "digest".to_string(),
            user_id: 7,
            expires_at,
            revoked_at,
        }
    }

    #[test]
    fn live_until_expiry() {
        let now = Utc::now();
        assert!(token(now + Duration::days(1), None).is_live(now));
    }

    #[test]
    fn expired_token_is_not_live() {
        let now = Utc::now();
        assert!(!token(now - Duration::seconds(1), None).is_live(now));
    }

    #[test]
    fn revoked_token_is_not_live() {
        let now = Utc::now();
        assert!(!token(now + Duration::days(1), Some(now)).is_live(now));
    }
}
