use serde::{Deserialize, Serialize};
use validator::Validate;

/// Partial profile update; absent fields keep their stored value.
#[derive(Clone, Debug, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    #[validate(length(max = 100, message = "Display name must not exceed 100 characters"))]
    pub display_name: Option<String>,
    #[validate(length(max = 200, message = "Full name must not exceed 200 characters"))]
    pub full_name: Option<String>,
    #[validate(length(max = 100, message = "Title must not exceed 100 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 50, message = "Phone must not exceed 50 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 500, message = "Address must not exceed 500 characters"))]
    pub address: Option<String>,
    #[validate(length(max = 500, message = "Avatar URL must not exceed 500 characters"))]
    pub avatar_url: Option<String>,
}
