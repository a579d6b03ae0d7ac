use adminkit::{AppError, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Wires the uniform id/timestamp surface of [`Record`] to a struct that
/// carries `id`, `created_at` and `updated_at` fields.
macro_rules! impl_record {
    ($Entity:ident, $kind:literal) => {
        impl Record for $Entity {
            const KIND: &'static str = $kind;
            fn id(&self) -> &str {
                &self.id
            }
            fn assign_id(&mut self, id: String) {
                self.id = id;
            }
            fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }
            fn updated_at(&self) -> DateTime<Utc> {
                self.updated_at
            }
            fn stamp_created(&mut self, at: DateTime<Utc>) {
                self.created_at = at;
            }
            fn stamp_updated(&mut self, at: DateTime<Utc>) {
                self.updated_at = at;
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    Active,
    Pending,
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    Open,
    #[serde(rename = "in-progress")]
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Pending,
    #[serde(rename = "in-progress")]
    InProgress,
    Completed,
    Canceled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CommType {
    Message,
    Notification,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CommStatus {
    Draft,
    Scheduled,
    Sent,
}

/// A supply-chain partner organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub country: String,
    pub industry: String,
    pub compliance_score: u8,
    pub status: PartnerStatus,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
}

impl_record!(Partner, "partners");

/// A detected compliance risk. `partner_name` is a display snapshot taken
/// from the partner at write time; it does not track later renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub partner_id: String,
    #[serde(default)]
    pub partner_name: String,
    pub country: String,
    pub risk_type: String,
    pub severity: Severity,
    pub source: String,
    pub detected_date: DateTime<Utc>,
    pub status: RiskStatus,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl_record!(Risk, "risks");

/// A remediation action, optionally tied to the risk it addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub status: ActionStatus,
    pub priority: Priority,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub related_risk_id: Option<String>,
    pub partner_id: String,
    #[serde(default)]
    pub partner_name: String,
}

impl_record!(Action, "actions");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Communication {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub comm_type: CommType,
    pub status: CommStatus,
    pub send_date: DateTime<Utc>,
    pub sender: String,
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub read_by: Vec<String>,
}

impl_record!(Communication, "communications");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub summary: String,
    pub industry: String,
    pub region: String,
    pub challenge: String,
    pub solution: String,
    pub outcome: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

impl_record!(CaseStudy, "caseStudies");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SdgTarget {
    pub id: String,
    pub description: String,
    pub progress: u8,
    #[serde(default)]
    pub indicators: Vec<String>,
}

/// A UN Sustainable Development Goal being tracked, with per-target progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SdgGoal {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub number: u8,
    pub title: String,
    pub description: String,
    pub progress: u8,
    pub color: String,
    #[serde(default)]
    pub targets: Vec<SdgTarget>,
}

impl_record!(SdgGoal, "sdgGoals");

/// The closed set of record kinds the console manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Partners,
    Risks,
    Actions,
    Communications,
    CaseStudies,
    SdgGoals,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Partners,
        EntityKind::Risks,
        EntityKind::Actions,
        EntityKind::Communications,
        EntityKind::CaseStudies,
        EntityKind::SdgGoals,
    ];

    pub fn key(self) -> &'static str {
        match self {
            EntityKind::Partners => Partner::KIND,
            EntityKind::Risks => Risk::KIND,
            EntityKind::Actions => Action::KIND,
            EntityKind::Communications => Communication::KIND,
            EntityKind::CaseStudies => CaseStudy::KIND,
            EntityKind::SdgGoals => SdgGoal::KIND,
        }
    }
}

impl FromStr for EntityKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.key() == value)
            .ok_or_else(|| AppError::UnknownKind(value.to_string()))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_round_trip_hyphenated_statuses() {
        let json = serde_json::to_string(&RiskStatus::InProgress).expect("Failed to serialize");
        assert_eq!(json, "\"in-progress\"");
        let back: ActionStatus =
            serde_json::from_str("\"in-progress\"").expect("Failed to deserialize");
        assert_eq!(back, ActionStatus::InProgress);
    }

    #[test]
    fn it_should_parse_every_kind_key_and_reject_strangers() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.key().parse::<EntityKind>().expect("Failed to parse"), kind);
        }
        assert!(matches!(
            "suppliers".parse::<EntityKind>(),
            Err(AppError::UnknownKind(_))
        ));
    }
}
