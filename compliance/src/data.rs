//! Bootstrap data so a freshly started console has something to show.

use crate::controllers::AppStores;
use crate::types::{
    Action, ActionStatus, CaseStudy, CommStatus, CommType, Communication, Partner, PartnerStatus,
    Priority, Risk, RiskLevel, RiskStatus, SdgGoal, SdgTarget, Severity,
};
use chrono::{DateTime, Utc};

fn ts(text: &str) -> DateTime<Utc> {
    match text.parse() {
        Ok(stamp) => stamp,
        Err(_) => DateTime::<Utc>::UNIX_EPOCH,
    }
}

pub fn partners() -> Vec<Partner> {
    vec![
        Partner {
            id: "1".to_string(),
            created_at: ts("2024-01-15T10:30:00Z"),
            updated_at: ts("2025-03-10T14:45:00Z"),
            name: "Global Fabrics Ltd.".to_string(),
            country: "Vietnam".to_string(),
            industry: "Textiles".to_string(),
            compliance_score: 82,
            status: PartnerStatus::Active,
            risk_level: RiskLevel::Medium,
            website: Some("https://globalfabrics.example".to_string()),
            contact_email: Some("contact@globalfabrics.example".to_string()),
            contact_name: Some("Min Tran".to_string()),
        },
        Partner {
            id: "2".to_string(),
            created_at: ts("2024-02-08T09:15:00Z"),
            updated_at: ts("2025-03-05T11:20:00Z"),
            name: "Raw Cotton Provider".to_string(),
            country: "India".to_string(),
            industry: "Agriculture".to_string(),
            compliance_score: 65,
            status: PartnerStatus::Active,
            risk_level: RiskLevel::High,
            website: Some("https://rawcotton.example".to_string()),
            contact_email: Some("info@rawcotton.example".to_string()),
            contact_name: Some("Rahul Patel".to_string()),
        },
        Partner {
            id: "3".to_string(),
            created_at: ts("2023-11-20T16:40:00Z"),
            updated_at: ts("2025-02-28T13:10:00Z"),
            name: "Dyeing Factory".to_string(),
            country: "Bangladesh".to_string(),
            industry: "Chemical Processing".to_string(),
            compliance_score: 78,
            status: PartnerStatus::Pending,
            risk_level: RiskLevel::Medium,
            website: None,
            contact_email: Some("operations@dyeingfactory.example".to_string()),
            contact_name: Some("Ahmed Khan".to_string()),
        },
    ]
}

pub fn risks() -> Vec<Risk> {
    vec![
        Risk {
            id: "risk-1".to_string(),
            created_at: ts("2025-03-15T10:30:00Z"),
            updated_at: ts("2025-03-15T10:30:00Z"),
            partner_id: "1".to_string(),
            partner_name: "Global Fabrics Ltd.".to_string(),
            country: "Vietnam".to_string(),
            risk_type: "Labor Documentation".to_string(),
            severity: Severity::High,
            source: "Document Scanner".to_string(),
            detected_date: ts("2025-03-15T00:00:00Z"),
            status: RiskStatus::Open,
            assigned_to: None,
        },
        Risk {
            id: "risk-2".to_string(),
            created_at: ts("2025-03-10T14:20:00Z"),
            updated_at: ts("2025-03-12T09:45:00Z"),
            partner_id: "2".to_string(),
            partner_name: "Raw Cotton Provider".to_string(),
            country: "India".to_string(),
            risk_type: "Child Labor".to_string(),
            severity: Severity::High,
            source: "News Alert".to_string(),
            detected_date: ts("2025-03-10T00:00:00Z"),
            status: RiskStatus::InProgress,
            assigned_to: Some("Sarah Johnson".to_string()),
        },
    ]
}

pub fn actions() -> Vec<Action> {
    vec![
        Action {
            id: "action-1".to_string(),
            created_at: ts("2025-03-16T11:20:00Z"),
            updated_at: ts("2025-03-16T11:20:00Z"),
            title: "Request Updated Labor Documents".to_string(),
            description: "Contact Global Fabrics Ltd. to request updated labor documentation for all factory workers.".to_string(),
            status: ActionStatus::Pending,
            priority: Priority::High,
            due_date: ts("2025-04-01T00:00:00Z"),
            assigned_to: Some("Michael Chen".to_string()),
            related_risk_id: Some("risk-1".to_string()),
            partner_id: "1".to_string(),
            partner_name: "Global Fabrics Ltd.".to_string(),
        },
        Action {
            id: "action-2".to_string(),
            created_at: ts("2025-03-11T09:30:00Z"),
            updated_at: ts("2025-03-18T16:45:00Z"),
            title: "Schedule Compliance Audit".to_string(),
            description: "Arrange an unannounced on-site audit to investigate child labor allegations.".to_string(),
            status: ActionStatus::InProgress,
            priority: Priority::High,
            due_date: ts("2025-03-25T00:00:00Z"),
            assigned_to: Some("Sarah Johnson".to_string()),
            related_risk_id: Some("risk-2".to_string()),
            partner_id: "2".to_string(),
            partner_name: "Raw Cotton Provider".to_string(),
        },
    ]
}

pub fn communications() -> Vec<Communication> {
    vec![Communication {
        id: "comm-1".to_string(),
        created_at: ts("2025-03-17T08:00:00Z"),
        updated_at: ts("2025-03-17T08:00:00Z"),
        title: "Audit Notice".to_string(),
        content: "An on-site audit has been scheduled for the last week of March.".to_string(),
        comm_type: CommType::Notification,
        status: CommStatus::Sent,
        send_date: ts("2025-03-17T08:00:00Z"),
        sender: "Compliance Team".to_string(),
        recipients: vec!["info@rawcotton.example".to_string()],
        read_by: Vec::new(),
    }]
}

pub fn sdg_goals() -> Vec<SdgGoal> {
    vec![
        SdgGoal {
            id: "sdg-8".to_string(),
            created_at: ts("2024-06-01T00:00:00Z"),
            updated_at: ts("2025-02-01T00:00:00Z"),
            number: 8,
            title: "Decent Work and Economic Growth".to_string(),
            description: "Promote inclusive and sustainable economic growth, employment and decent work for all.".to_string(),
            progress: 54,
            color: "#A21942".to_string(),
            targets: vec![SdgTarget {
                id: "8.7".to_string(),
                description: "Eradicate forced labour and end child labour in all its forms.".to_string(),
                progress: 48,
                indicators: vec!["Supplier audits passed".to_string()],
            }],
        },
        SdgGoal {
            id: "sdg-12".to_string(),
            created_at: ts("2024-06-01T00:00:00Z"),
            updated_at: ts("2025-02-01T00:00:00Z"),
            number: 12,
            title: "Responsible Consumption and Production".to_string(),
            description: "Ensure sustainable consumption and production patterns.".to_string(),
            progress: 61,
            color: "#BF8B2E".to_string(),
            targets: vec![SdgTarget {
                id: "12.6".to_string(),
                description: "Encourage companies to adopt sustainable practices and reporting.".to_string(),
                progress: 61,
                indicators: vec!["Partners with sustainability reports".to_string()],
            }],
        },
        SdgGoal {
            id: "sdg-16".to_string(),
            created_at: ts("2024-06-01T00:00:00Z"),
            updated_at: ts("2025-02-01T00:00:00Z"),
            number: 16,
            title: "Peace, Justice and Strong Institutions".to_string(),
            description: "Promote peaceful and inclusive societies with effective, accountable institutions.".to_string(),
            progress: 42,
            color: "#00689D".to_string(),
            targets: vec![SdgTarget {
                id: "16.5".to_string(),
                description: "Substantially reduce corruption and bribery in all their forms.".to_string(),
                progress: 42,
                indicators: vec!["Anti-bribery clauses in partner contracts".to_string()],
            }],
        },
    ]
}

pub fn case_studies() -> Vec<CaseStudy> {
    vec![CaseStudy {
        id: "case-1".to_string(),
        created_at: ts("2024-09-05T10:00:00Z"),
        updated_at: ts("2024-11-12T15:30:00Z"),
        title: "Traceable Cotton in the Mekong Delta".to_string(),
        summary: "How a mid-size textile buyer mapped its cotton supply down to farm level.".to_string(),
        industry: "Textiles".to_string(),
        region: "Southeast Asia".to_string(),
        challenge: "Tier-2 suppliers could not document the origin of raw cotton.".to_string(),
        solution: "Introduced batch-level origin declarations backed by spot audits.".to_string(),
        outcome: "Origin coverage rose from 40% to 93% of purchased volume within a year.".to_string(),
        tags: vec!["traceability".to_string(), "cotton".to_string()],
        published: true,
    }]
}

/// Loads the bootstrap records into every store.
pub fn seed(stores: &AppStores) {
    stores.partners.seed(partners());
    stores.risks.seed(risks());
    stores.actions.seed(actions());
    stores.communications.seed(communications());
    stores.case_studies.seed(case_studies());
    stores.sdg_goals.seed(sdg_goals());
}
