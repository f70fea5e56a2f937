use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct RLogin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct TokenRes {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Serialize, Deserialize)]
pub struct RUserCreate {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

#[derive(Serialize, Deserialize)]
pub struct UserRes {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::user::Model> for UserRes {
    fn from(u: entity::user::Model) -> Self {
        UserRes {
            id: u.id,
            email: u.email,
            is_active: u.is_active,
            is_admin: u.is_admin,
            created_at: u.created_at,
        }
    }
}
