use std::{fmt, str::FromStr};

use thiserror::Error;

/// Opaque identifier of a profile, assigned by the directory service.
#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for ProfileId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for ProfileId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<ProfileId> for String {
    fn from(from: ProfileId) -> Self {
        from.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marketplace role of a community member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Sitter,
    Homeowner,
    Admin,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Sitter => "sitter",
            Role::Homeowner => "homeowner",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Invalid role")]
pub struct RoleParseError;

impl FromStr for Role {
    type Err = RoleParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sitter" => Ok(Role::Sitter),
            "homeowner" => Ok(Role::Homeowner),
            "admin" => Ok(Role::Admin),
            _ => Err(RoleParseError),
        }
    }
}

/// Public profile of a community member.
///
/// The free-text `location` is what members type into their profile
/// (e.g. "Carlton, VIC") and is only turned into a coordinate on demand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub role: Option<Role>,
    pub is_verified: bool,
}

/// A profile awaiting identity verification, enriched with the
/// privileged details only the directory service can provide.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PendingVerification {
    pub profile: Profile,
    pub email: Option<String>,
    pub document_url: Option<String>,
}
