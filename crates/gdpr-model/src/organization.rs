//! # Organizations and People
//!
//! The controller organization, third-party organizations (processors and
//! other recipients), and the two user roles the registry tracks: the Data
//! Protection Officer and business process owners.

use serde::{Deserialize, Serialize};

use gdpr_core::{BusinessProcessId, ListEntryId, Named, OfficerId, OrganizationId, OwnerId, ThirdPartyId, Timestamp};

/// Contact and legal details shared by every organization record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Country of residence.
    #[serde(default)]
    pub country: String,
    /// Telephone number.
    #[serde(default)]
    pub telephone: String,
    /// Legal statute.
    #[serde(default)]
    pub statute: String,
    /// Resides outside the EU/EEA.
    #[serde(default)]
    pub third_country: bool,
    /// Governed by public international law.
    #[serde(default)]
    pub international: bool,
}

/// Why an organization must appoint a DPO, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DpoTrigger {
    /// The organization is a public authority.
    PublicAuthority,
    /// Core activities require large-scale systematic monitoring.
    Monitoring,
    /// Core activities are large-scale processing of special category data.
    SpecialCategory,
}

/// The controller organization whose processing the registry documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Record identifier.
    pub id: OrganizationId,
    /// Name, description, last update.
    #[serde(flatten)]
    pub named: Named,
    /// Contact and legal details.
    #[serde(flatten)]
    pub contact: ContactInfo,
    /// Appointed Data Protection Officer.
    #[serde(default)]
    pub officer: Option<OfficerId>,
    /// Business processes that may handle personal data, in entry order.
    #[serde(default)]
    pub business: Vec<BusinessProcessId>,
    /// Public authority (other than courts acting in their judicial capacity).
    #[serde(default)]
    pub public_authority: bool,
    /// Large-scale, regular and systematic monitoring of individuals.
    #[serde(default)]
    pub monitoring: bool,
    /// Large-scale processing of special category or criminal data.
    #[serde(default)]
    pub special_category: bool,
}

impl Organization {
    /// A new organization with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: OrganizationId::new(),
            named: Named::new(name, ""),
            contact: ContactInfo::default(),
            officer: None,
            business: Vec::new(),
            public_authority: false,
            monitoring: false,
            special_category: false,
        }
    }

    /// The first applicable reason this organization needs a DPO, checked
    /// in the order public authority, monitoring, special category.
    pub fn dpo_trigger(&self) -> Option<DpoTrigger> {
        if self.public_authority {
            Some(DpoTrigger::PublicAuthority)
        } else if self.monitoring {
            Some(DpoTrigger::Monitoring)
        } else if self.special_category {
            Some(DpoTrigger::SpecialCategory)
        } else {
            None
        }
    }
}

/// An organization data is transferred to: a processor or other recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThirdParty {
    /// Record identifier.
    pub id: ThirdPartyId,
    /// Name, description, last update.
    #[serde(flatten)]
    pub named: Named,
    /// Contact and legal details.
    #[serde(flatten)]
    pub contact: ContactInfo,
    /// Recipient category (list entry).
    pub category: ListEntryId,
    /// Why data is transferred to this third-country/international organization.
    #[serde(default)]
    pub third_country_transfer: Option<ListEntryId>,
    /// Documents clarifying the appropriate safeguards for the transfer.
    #[serde(default)]
    pub appropriate_safeguards: String,
}

impl ThirdParty {
    /// A new third party in the given recipient category.
    pub fn new(name: impl Into<String>, category: ListEntryId) -> Self {
        Self {
            id: ThirdPartyId::new(),
            named: Named::new(name, ""),
            contact: ContactInfo::default(),
            category,
            third_country_transfer: None,
            appropriate_safeguards: String::new(),
        }
    }
}

/// A registered user of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Login name.
    pub username: String,
    /// Password hash. Never rendered.
    #[serde(default)]
    pub password: String,
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// May log into the admin surface.
    #[serde(default)]
    pub is_staff: bool,
    /// Account enabled.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Has all permissions.
    #[serde(default)]
    pub is_superuser: bool,
    /// Last successful login.
    #[serde(default)]
    pub last_login: Option<Timestamp>,
    /// Account creation time.
    #[serde(default)]
    pub date_joined: Timestamp,
}

fn default_true() -> bool {
    true
}

impl UserAccount {
    /// A new active account with only a username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            is_staff: false,
            is_active: true,
            is_superuser: false,
            last_login: None,
            date_joined: Timestamp::now(),
        }
    }

    /// "First Last" when a first name is set, otherwise the username.
    pub fn display_name(&self) -> String {
        if self.first_name.is_empty() {
            self.username.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// The organization's Data Protection Officer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataProtectionOfficer {
    /// Record identifier.
    pub id: OfficerId,
    /// Linked user account.
    pub user: UserAccount,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Telephone number.
    #[serde(default)]
    pub telephone: String,
    /// Part of the controller organization's staff.
    #[serde(default)]
    pub staff: bool,
    /// When the record was last modified.
    #[serde(default)]
    pub last_update: Timestamp,
}

impl DataProtectionOfficer {
    /// A new officer for the given account.
    pub fn new(user: UserAccount) -> Self {
        Self {
            id: OfficerId::new(),
            user,
            address: String::new(),
            telephone: String::new(),
            staff: false,
            last_update: Timestamp::now(),
        }
    }
}

/// A person responsible for one or more business processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessOwner {
    /// Record identifier.
    pub id: OwnerId,
    /// Linked user account.
    pub user: UserAccount,
    /// When the record was last modified.
    #[serde(default)]
    pub last_update: Timestamp,
}

impl BusinessOwner {
    /// A new owner for the given account.
    pub fn new(user: UserAccount) -> Self {
        Self {
            id: OwnerId::new(),
            user,
            last_update: Timestamp::now(),
        }
    }
}
