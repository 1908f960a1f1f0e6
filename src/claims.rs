//! Claim shape for bearer credentials.
//!
//! Token signing and verification belong to the external token
//! collaborator; this module only fixes the shape of the role claim so it
//! round-trips losslessly between mint and verify.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::role::Role;

/// Claims carried by an access credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the caller's primary identifier.
    pub sub: String,

    /// Stable record identifier, when distinct from the subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// The caller's role at mint time.
    pub role: Role,

    /// Claims this core does not interpret (expiry, issuer, ...),
    /// preserved as-is.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl AccessClaims {
    /// Minimal claim set for a subject and role.
    pub fn new(sub: impl Into<String>, role: Role) -> Self {
        Self {
            sub: sub.into(),
            user_id: None,
            role,
            extra: HashMap::new(),
        }
    }
}
