use serde::{Deserialize, Serialize};

use super::OrganizationId;

/// The party on the other side of an employment record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Employer {
    Organization(OrganizationId),
    /// Private individual, identified by national identity number.
    Person(String),
    /// Internal actor id used by the welfare administration.
    GovernmentActor(String),
}

impl Employer {
    pub fn kind(&self) -> &'static str {
        match self {
            Employer::Organization(_) => "Organization",
            Employer::Person(_) => "Person",
            Employer::GovernmentActor(_) => "GovernmentActor",
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            Employer::Organization(id) => id.as_str(),
            Employer::Person(national_id) => national_id,
            Employer::GovernmentActor(actor_id) => actor_id,
        }
    }
}
