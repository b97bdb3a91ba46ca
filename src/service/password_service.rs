use crate::config::parameter;
use crate::error::ApiError;
use tracing::error;

/// Adaptive salted hashing around bcrypt. Hashing is CPU-bound, so both
/// operations run on the blocking pool instead of an async worker thread.
#[derive(Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_env() -> Self {
        Self::new(parameter::get_u32("BCRYPT_COST"))
    }

    pub async fn hash(&self, password: String) -> Result<String, ApiError> {
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| ApiError::Internal(format!("hashing task failed: {e}")))?
            .map_err(|e| {
                error!("Password hashing failed: {}", e);
                ApiError::Internal("Password hashing failed".to_string())
            })
    }

    /// Never errors on mismatch; a malformed stored hash also verifies as
    /// `false` so the login boundary stays uniform.
    pub async fn verify(&self, password: String, hash: String) -> bool {
        let result =
            tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await;

        match result {
            Ok(Ok(is_match)) => is_match,
            Ok(Err(e)) => {
                error!("Password verification error: {}", e);
                false
            }
            Err(e) => {
                error!("Password verification task failed: {}", e);
                false
            }
        }
    }
}
