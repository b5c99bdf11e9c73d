//! UserProfile domain model.
//!
//! Mirrors the backend profile record.

use serde::{Deserialize, Deserializer, Serialize};

/// Profile of a field officer as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub mobile: String,
    /// Fields of a freshly created backend user arrive as `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub role: String,
    /// Relative upload path or absolute URL. The backend sends `""` for none.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub profile_picture: Option<String>,
}

/// Editable profile fields sent with `PUT /profile/{mobile}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub role: String,
}

impl From<&UserProfile> for ProfileUpdate {
    fn from(profile: &UserProfile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
            location: profile.location.clone(),
            role: profile.role.clone(),
        }
    }
}

/// Backend acknowledgement of a profile update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdateAck {
    #[serde(default)]
    pub message: String,
}

/// Response of the profile picture upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePictureUpload {
    pub success: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub profile_picture: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
