use serde::{Deserialize, Serialize};

// -- Auth --

/// Registration body. The three required fields default to empty so that an
/// absent field and an empty one are rejected the same way by the handler.
/// Optional profile fields are typed; a value of the wrong shape fails to
/// deserialize instead of being stored as-is.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub age: Option<u32>,
    pub college_name: Option<String>,
    pub grades: Option<String>,
}

impl RegisterRequest {
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `{ "message": ... }` body used for confirmations and JSON errors alike.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// -- Shares --

#[derive(Debug, Default, Deserialize)]
pub struct PostShareRequest {
    pub message: Option<String>,
}
