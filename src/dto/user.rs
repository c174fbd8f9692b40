use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{dao::models::UserEntity, dto::validation::validate_user_name};

/// Payload used to register a new player.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateUserRequest {
    /// Unique player name.
    #[validate(custom(function = validate_user_name))]
    pub name: String,
    /// Optional contact address for activity reminders.
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
}

/// Public projection of a player exposed to REST clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserSummary {
    /// Player name.
    pub name: String,
    /// Contact address, if the player registered one.
    pub email: Option<String>,
    /// Cumulative score (wins minus losses).
    pub score: i64,
}

/// List of players returned by the user listing routes.
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersResponse {
    /// The players, in the order requested (registration or ranking).
    pub items: Vec<UserSummary>,
}

impl From<UserEntity> for UserSummary {
    fn from(value: UserEntity) -> Self {
        Self {
            name: value.name,
            email: value.email,
            score: value.score,
        }
    }
}

impl From<Vec<UserEntity>> for UsersResponse {
    fn from(value: Vec<UserEntity>) -> Self {
        Self {
            items: value.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    fn request(name: &str, email: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            name: name.into(),
            email: email.map(Into::into),
        }
    }

    #[test]
    fn registration_accepts_plain_and_mailed_users() {
        assert!(request("alice", None).validate().is_ok());
        assert!(request("alice", Some("alice@example.com")).validate().is_ok());
    }

    #[test]
    fn registration_rejects_blank_names_and_bad_addresses() {
        assert!(request("  ", None).validate().is_err());
        assert!(request("alice", Some("not-an-address")).validate().is_err());
    }
}
