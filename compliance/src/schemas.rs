//! Field schemas for every record kind: one function per kind, each the
//! single source of truth for its form layout and validation rules.

use crate::types::Partner;
use adminkit::{FieldDef, SelectOption, Store};

fn options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(value, label)| SelectOption::new(*value, *label))
        .collect()
}

fn low_medium_high() -> Vec<SelectOption> {
    options(&[("low", "Low"), ("medium", "Medium"), ("high", "High")])
}

/// Current partners as select options, value = id, label = name.
pub fn partner_options(store: &Store<Partner>) -> Vec<SelectOption> {
    store
        .list_all()
        .into_iter()
        .map(|partner| SelectOption::new(partner.id, partner.name))
        .collect()
}

pub fn partner_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::text("name", "Name").required().max_length(120),
        FieldDef::text("country", "Country").required(),
        FieldDef::text("industry", "Industry").required(),
        FieldDef::number("complianceScore", "Compliance Score")
            .required()
            .min(0.0)
            .max(100.0),
        FieldDef::select(
            "status",
            "Status",
            options(&[
                ("active", "Active"),
                ("pending", "Pending"),
                ("suspended", "Suspended"),
            ]),
        )
        .required(),
        FieldDef::select("riskLevel", "Risk Level", low_medium_high()).required(),
        FieldDef::text("website", "Website")
            .placeholder("https://example.com")
            .pattern(
                "^https?://",
                "Website must start with http:// or https://",
            ),
        FieldDef::email("contactEmail", "Contact Email"),
        FieldDef::text("contactName", "Contact Name"),
    ]
}

pub fn risk_fields(partners: Vec<SelectOption>) -> Vec<FieldDef> {
    vec![
        FieldDef::select("partnerId", "Partner", partners).required_msg("Select a partner"),
        FieldDef::text("country", "Country").required(),
        FieldDef::text("riskType", "Risk Type").required(),
        FieldDef::select("severity", "Severity", low_medium_high()).required(),
        FieldDef::text("source", "Source").required(),
        FieldDef::date("detectedDate", "Detected Date").required(),
        FieldDef::select(
            "status",
            "Status",
            options(&[
                ("open", "Open"),
                ("in-progress", "In Progress"),
                ("resolved", "Resolved"),
            ]),
        )
        .required(),
        FieldDef::text("assignedTo", "Assigned To"),
    ]
}

pub fn action_fields(partners: Vec<SelectOption>) -> Vec<FieldDef> {
    vec![
        FieldDef::text("title", "Title").required().min_length(3),
        FieldDef::textarea("description", "Description").required(),
        FieldDef::select(
            "status",
            "Status",
            options(&[
                ("pending", "Pending"),
                ("in-progress", "In Progress"),
                ("completed", "Completed"),
                ("canceled", "Canceled"),
            ]),
        )
        .required(),
        FieldDef::select("priority", "Priority", low_medium_high()).required(),
        FieldDef::date("dueDate", "Due Date").required(),
        FieldDef::text("assignedTo", "Assigned To"),
        FieldDef::text("relatedRiskId", "Related Risk"),
        FieldDef::select("partnerId", "Partner", partners).required_msg("Select a partner"),
    ]
}

pub fn communication_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::text("title", "Title").required(),
        FieldDef::textarea("content", "Content").required(),
        FieldDef::select(
            "type",
            "Type",
            options(&[
                ("message", "Message"),
                ("notification", "Notification"),
                ("alert", "Alert"),
            ]),
        )
        .required(),
        FieldDef::select(
            "status",
            "Status",
            options(&[
                ("draft", "Draft"),
                ("scheduled", "Scheduled"),
                ("sent", "Sent"),
            ]),
        )
        .required(),
        FieldDef::date("sendDate", "Send Date").required(),
        FieldDef::text("sender", "Sender").required(),
    ]
}

pub fn case_study_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::text("title", "Title").required().max_length(200),
        FieldDef::textarea("summary", "Summary").required(),
        FieldDef::text("industry", "Industry").required(),
        FieldDef::text("region", "Region").required(),
        FieldDef::textarea("challenge", "Challenge").required(),
        FieldDef::textarea("solution", "Solution").required(),
        FieldDef::textarea("outcome", "Outcome").required(),
    ]
}

pub fn sdg_goal_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::number("number", "Goal Number").required().min(1.0).max(17.0),
        FieldDef::text("title", "Title").required(),
        FieldDef::textarea("description", "Description").required(),
        FieldDef::number("progress", "Progress").required().min(0.0).max(100.0),
        FieldDef::text("color", "Color")
            .placeholder("#00689D")
            .required()
            .pattern("^#[0-9a-fA-F]{6}$", "Color must be a hex code like #00689D"),
    ]
}
