//! # Policies and Breach Plans
//!
//! The three risk-bearing measures attached to a data audit. Each carries a
//! residual risk on the 0–3 scale and a description of its mitigation
//! measures; [`ResidualRisk`] exposes that shared shape.

use serde::{Deserialize, Serialize};

use gdpr_core::{BreachDetectionId, BreachResponseId, DocumentId, Named, PolicyId, RiskLevel};

/// Records that carry a residual risk and mitigation measures.
pub trait ResidualRisk {
    /// Name, description, last update.
    fn named(&self) -> &Named;
    /// Risk remaining after mitigation.
    fn residual_risk(&self) -> RiskLevel;
    /// Mitigation measures in place.
    fn risk_mitigation(&self) -> &str;
}

/// How the data of an audit is managed: retention, subject rights,
/// processors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataManagementPolicy {
    /// Record identifier.
    pub id: PolicyId,
    /// Name, description, last update.
    #[serde(flatten)]
    pub named: Named,
    /// Contracts with the processors the data is actually transferred to.
    #[serde(default)]
    pub processor_contracts: Vec<DocumentId>,
    /// Retention period for the processed data, in days.
    #[serde(default)]
    pub retention: Option<u32>,
    /// Mitigation measures against data breaches.
    #[serde(default)]
    pub risk_mitigation: String,
    /// Residual risk given the mitigation measures.
    #[serde(default)]
    pub risk: RiskLevel,
    /// Procedures guarding the rights of data subjects.
    #[serde(default)]
    pub subject_rights: Option<DocumentId>,
    /// How data subjects are notified that their data were registered.
    #[serde(default)]
    pub subject_notification: String,
    /// Free-text comments.
    #[serde(default)]
    pub comments: String,
}

impl DataManagementPolicy {
    /// A new policy with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PolicyId::new(),
            named: Named::new(name, ""),
            processor_contracts: Vec::new(),
            retention: None,
            risk_mitigation: String::new(),
            risk: RiskLevel::Unknown,
            subject_rights: None,
            subject_notification: String::new(),
            comments: String::new(),
        }
    }
}

/// Measures and technology for detecting data breaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreachDetection {
    /// Record identifier.
    pub id: BreachDetectionId,
    /// Name, description, last update.
    #[serde(flatten)]
    pub named: Named,
    /// Mitigation measures related to breach detection.
    #[serde(default)]
    pub risk_mitigation: String,
    /// Residual risk of missing a data breach.
    #[serde(default)]
    pub risk: RiskLevel,
    /// Free-text comments.
    #[serde(default)]
    pub comments: String,
}

impl BreachDetection {
    /// A new detection plan with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BreachDetectionId::new(),
            named: Named::new(name, ""),
            risk_mitigation: String::new(),
            risk: RiskLevel::Unknown,
            comments: String::new(),
        }
    }
}

/// Incident response plan for data breaches, including the mandatory
/// notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreachResponse {
    /// Record identifier.
    pub id: BreachResponseId,
    /// Name, description, last update.
    #[serde(flatten)]
    pub named: Named,
    /// Mitigation measures for the response to data breaches.
    #[serde(default)]
    pub risk_mitigation: String,
    /// Residual risk of not responding properly to a breach.
    #[serde(default)]
    pub risk: RiskLevel,
    /// Free-text comments.
    #[serde(default)]
    pub comments: String,
}

impl BreachResponse {
    /// A new response plan with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BreachResponseId::new(),
            named: Named::new(name, ""),
            risk_mitigation: String::new(),
            risk: RiskLevel::Unknown,
            comments: String::new(),
        }
    }
}

impl ResidualRisk for DataManagementPolicy {
    fn named(&self) -> &Named {
        &self.named
    }
    fn residual_risk(&self) -> RiskLevel {
        self.risk
    }
    fn risk_mitigation(&self) -> &str {
        &self.risk_mitigation
    }
}

impl ResidualRisk for BreachDetection {
    fn named(&self) -> &Named {
        &self.named
    }
    fn residual_risk(&self) -> RiskLevel {
        self.risk
    }
    fn risk_mitigation(&self) -> &str {
        &self.risk_mitigation
    }
}

impl ResidualRisk for BreachResponse {
    fn named(&self) -> &Named {
        &self.named
    }
    fn residual_risk(&self) -> RiskLevel {
        self.risk
    }
    fn risk_mitigation(&self) -> &str {
        &self.risk_mitigation
    }
}
