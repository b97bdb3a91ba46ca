use crate::entity::role::RoleName;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(email(message = "Email format is invalid"))]
    #[validate(length(max = 254, message = "Email must not exceed 254 characters"))]
    pub email: String,
    #[validate(length(
        min = 8,
        max = 72,
        message = "Password must be between 8 and 72 characters"
    ))]
    pub password: String,
    /// `admin` is rejected by the service, not by deserialization, so the
    /// caller gets a message rather than a parse error.
    pub role: RoleName,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct AssignTeacherDto {
    #[validate(email(message = "Email format is invalid"))]
    pub email: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ListUsersQuery {
    pub role: RoleName,
}

impl std::fmt::Debug for CreateUserDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserDto")
            .field("email", &self.email)
            .field("role", &self.role)
            .finish()
    }
}
