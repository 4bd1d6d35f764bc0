use std::{collections::HashMap, time::Duration};

use serde::Deserialize;

use homesit_core::gateways::directory::{Error, ProfileDirectoryGateway};
use homesit_entities::profile::{PendingVerification, Profile, Role};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ProfileDirectoryConfig {
    /// Base URL of the managed directory service.
    pub base_url: String,
    /// Privileged service credential. Never derived from the calling
    /// user's credential.
    pub service_key: String,
}

/// REST client for the managed profile directory.
#[derive(Debug, Clone)]
pub struct ProfileDirectory {
    base_url: String,
    service_key: String,
    client: reqwest::blocking::Client,
}

impl ProfileDirectory {
    pub fn new(cfg: ProfileDirectoryConfig) -> Self {
        let ProfileDirectoryConfig {
            base_url,
            service_key,
        } = cfg;
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("HTTP client");
        Self {
            base_url,
            service_key,
            client,
        }
    }

    fn get(&self, path_and_query: &str) -> Result<reqwest::blocking::Response, Error> {
        let url = format!("{}{}", self.base_url, path_and_query);
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .map_err(|err| Error::Unreachable(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }
        Ok(response)
    }

    fn roles_by_user(&self) -> Result<HashMap<String, Role>, Error> {
        let records: Vec<RoleRecord> = self
            .get("/rest/v1/user_roles?select=user_id,role")?
            .json()
            .map_err(|err| Error::UnexpectedResponse(err.to_string()))?;
        Ok(records
            .into_iter()
            .filter_map(|r| {
                let role = r.role.parse().ok()?;
                Some((r.user_id, role))
            })
            .collect())
    }

    fn profile_records(&self, filter: &str) -> Result<Vec<ProfileRecord>, Error> {
        self.get(&format!("/rest/v1/profiles?select=*{filter}"))?
            .json()
            .map_err(|err| Error::UnexpectedResponse(err.to_string()))
    }

    /// Looks up the account email of a user.
    ///
    /// A failure here must not abort a whole listing, so errors degrade
    /// to `None`.
    fn user_email(&self, user_id: &str) -> Option<String> {
        let response = match self.get(&format!("/auth/v1/admin/users/{user_id}")) {
            Ok(response) => response,
            Err(err) => {
                log::warn!("Failed to look up email of user {}: {}", user_id, err);
                return None;
            }
        };
        match response.json::<AuthUserRecord>() {
            Ok(user) => user.email,
            Err(err) => {
                log::warn!("Failed to decode email of user {}: {}", user_id, err);
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProfileRecord {
    id: String,
    user_id: String,
    name: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    is_verified: bool,
    #[serde(default)]
    document_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RoleRecord {
    user_id: String,
    role: String,
}

#[derive(Debug, Deserialize)]
struct AuthUserRecord {
    #[serde(default)]
    email: Option<String>,
}

fn to_profile(record: &ProfileRecord, roles: &HashMap<String, Role>) -> Profile {
    Profile {
        id: record.id.as_str().into(),
        name: record.name.clone(),
        location: record.location.clone(),
        bio: record.bio.clone(),
        role: roles.get(&record.user_id).copied(),
        is_verified: record.is_verified,
    }
}

impl ProfileDirectoryGateway for ProfileDirectory {
    fn all_profiles(&self) -> Result<Vec<Profile>, Error> {
        let records = self.profile_records("")?;
        let roles = self.roles_by_user()?;
        Ok(records.iter().map(|r| to_profile(r, &roles)).collect())
    }

    fn pending_verifications(&self) -> Result<Vec<PendingVerification>, Error> {
        let records = self.profile_records("&is_verified=eq.false&order=created_at.desc")?;
        let roles = self.roles_by_user()?;
        Ok(records
            .iter()
            .map(|record| PendingVerification {
                profile: to_profile(record, &roles),
                email: self.user_email(&record.user_id),
                document_url: record.document_url.clone(),
            })
            .collect())
    }
}
