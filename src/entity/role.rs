use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The portal knows exactly three roles. Anything else read from storage
/// or a request body is rejected at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    Teacher,
    Student,
}

impl RoleName {
    pub const ALL: [RoleName; 3] = [RoleName::Admin, RoleName::Teacher, RoleName::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Admin => "admin",
            RoleName::Teacher => "teacher",
            RoleName::Student => "student",
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl FromStr for RoleName {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(RoleName::Admin),
            "teacher" => Ok(RoleName::Teacher),
            "student" => Ok(RoleName::Student),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// A row in the role catalog. Seeded once at bootstrap.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Role {
    pub id: i64,
    pub name: String,
}
