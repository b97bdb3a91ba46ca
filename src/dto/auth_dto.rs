use crate::entity::role::RoleName;
use crate::entity::user::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RegisterDto {
    #[validate(email(message = "Email format is invalid"))]
    #[validate(length(max = 254, message = "Email must not exceed 254 characters"))]
    pub email: String,
    // bcrypt truncates beyond 72 bytes, so the upper bound is enforced here
    #[validate(length(
        min = 8,
        max = 72,
        message = "Password must be between 8 and 72 characters"
    ))]
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginDto {
    #[validate(email(message = "Email format is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// A blank or absent token is normalized to "missing" at the handler.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequestDto {
    pub refresh_token: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequestDto {
    pub refresh_token: Option<String>,
}

/// Public view of a user, safe to return from any endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: i64,
    pub email: String,
    pub role: RoleName,
    pub display_name: Option<String>,
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserSummaryDto {
    pub fn from_user(user: &User, role: RoleName) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role,
            display_name: user.display_name.clone(),
            full_name: user.full_name.clone(),
            title: user.title.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

/// Result of a successful register/login/refresh. The raw refresh token only
/// lives here on its way to the HTTP-only cookie.
#[derive(Clone, Debug)]
pub struct SessionDto {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserSummaryDto,
}

/// The body the client actually receives; the refresh token travels in the
/// cookie instead.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponseDto {
    pub access_token: String,
    pub user: UserSummaryDto,
}

impl From<&SessionDto> for SessionResponseDto {
    fn from(session: &SessionDto) -> Self {
        Self {
            access_token: session.access_token.clone(),
            user: session.user.clone(),
        }
    }
}

impl std::fmt::Debug for LoginDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginDto").field("email", &self.email).finish()
    }
}

impl std::fmt::Debug for RegisterDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterDto").field("email", &self.email).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn register_rejects_short_password() {
        let dto = RegisterDto {
            email: "a@b.test".to_string(),
            password: "short".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn register_rejects_overlong_password() {
        let dto = RegisterDto {
            email: "a@b.test".to_string(),
            password: "x".repeat(73),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn register_accepts_bounds() {
        for len in [8usize, 72] {
            let dto = RegisterDto {
                email: "a@b.test".to_string(),
                password: "x".repeat(len),
            };
            assert!(dto.validate().is_ok(), "length {} should validate", len);
        }
    }

    #[test]
    fn session_response_hides_refresh_token() {
        let session = SessionDto {
            access_token: "jwt".to_string(),
            refresh_token: "opaque".to_string(),
            user: UserSummaryDto {
                id: 1,
                email: "a@b.test".to_string(),
                role: RoleName::Student,
                display_name: None,
                full_name: None,
                title: None,
                phone: None,
                address: None,
                avatar_url: None,
            },
        };
        let body = serde_json::to_value(SessionResponseDto::from(&session)).unwrap();
        assert_eq!(body["accessToken"], "jwt");
        assert!(body.get("refreshToken").is_none());
        assert_eq!(body["user"]["role"], "student");
    }
}
