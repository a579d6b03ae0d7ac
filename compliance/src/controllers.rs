//! The application's stores and the management screen for each record kind.

use crate::schemas;
use crate::types::{Action, CaseStudy, Communication, Partner, Risk, SdgGoal};
use adminkit::{
    AppError, ColumnDef, Notifier, Record, RowActions, Screen, Store, StoreHub, TableModel,
};
use serde_json::{Map, Value};
use std::sync::Arc;

/// One typed store per record kind, shared across screens and REST state.
pub struct AppStores {
    pub partners: Arc<Store<Partner>>,
    pub risks: Arc<Store<Risk>>,
    pub actions: Arc<Store<Action>>,
    pub communications: Arc<Store<Communication>>,
    pub case_studies: Arc<Store<CaseStudy>>,
    pub sdg_goals: Arc<Store<SdgGoal>>,
}

impl AppStores {
    pub fn new() -> Self {
        AppStores {
            partners: Arc::new(Store::new()),
            risks: Arc::new(Store::new()),
            actions: Arc::new(Store::new()),
            communications: Arc::new(Store::new()),
            case_studies: Arc::new(Store::new()),
            sdg_goals: Arc::new(Store::new()),
        }
    }

    pub fn hub(&self) -> StoreHub {
        let mut hub = StoreHub::new();
        hub.register(self.partners.clone());
        hub.register(self.risks.clone());
        hub.register(self.actions.clone());
        hub.register(self.communications.clone());
        hub.register(self.case_studies.clone());
        hub.register(self.sdg_goals.clone());
        hub
    }
}

impl Default for AppStores {
    fn default() -> Self {
        AppStores::new()
    }
}

/// Post-validation enrichment per record kind. The default stamps nothing;
/// risks and actions snapshot the partner name they reference.
pub trait Enrich: Record {
    fn enrich(_hub: &StoreHub, _fields: &mut Map<String, Value>) -> Result<(), AppError> {
        Ok(())
    }
}

impl Enrich for Partner {}
impl Enrich for Communication {}
impl Enrich for CaseStudy {}
impl Enrich for SdgGoal {}

impl Enrich for Risk {
    fn enrich(hub: &StoreHub, fields: &mut Map<String, Value>) -> Result<(), AppError> {
        let partners = hub.store::<Partner>()?;
        snapshot_partner_name(&partners, fields);
        Ok(())
    }
}

impl Enrich for Action {
    fn enrich(hub: &StoreHub, fields: &mut Map<String, Value>) -> Result<(), AppError> {
        let partners = hub.store::<Partner>()?;
        snapshot_partner_name(&partners, fields);
        Ok(())
    }
}

/// Stamps `partnerName` from the referenced partner. When the partner is
/// gone the snapshot is simply omitted.
pub fn snapshot_partner_name(partners: &Store<Partner>, fields: &mut Map<String, Value>) {
    let Some(Value::String(partner_id)) = fields.get("partnerId").cloned() else {
        return;
    };
    if let Some(partner) = partners.get_by_id(&partner_id) {
        fields.insert("partnerName".to_string(), Value::String(partner.name));
    }
}

fn date_cell(value: &Value) -> String {
    value
        .as_str()
        .map(|text| text.split('T').next().unwrap_or(text).to_string())
        .unwrap_or_default()
}

fn score_cell(value: &Value) -> String {
    value
        .as_f64()
        .map(|score| format!("{}%", score.round() as i64))
        .unwrap_or_default()
}

fn all_actions() -> RowActions {
    RowActions {
        view: true,
        edit: true,
        delete: true,
    }
}

pub fn partner_screen(stores: &AppStores, notifier: Arc<Notifier>) -> Screen<Partner> {
    let table = TableModel::new(
        "Partners",
        vec![
            ColumnDef::new("name", "Name").sortable(),
            ColumnDef::new("country", "Country").sortable(),
            ColumnDef::new("industry", "Industry").sortable(),
            ColumnDef::new("complianceScore", "Compliance").sortable().render(score_cell),
            ColumnDef::new("status", "Status").sortable(),
            ColumnDef::new("riskLevel", "Risk Level"),
        ],
    )
    .with_actions(all_actions());
    Screen::new(
        "Partner",
        stores.partners.clone(),
        notifier,
        Box::new(schemas::partner_fields),
        table,
    )
}

pub fn risk_screen(stores: &AppStores, notifier: Arc<Notifier>) -> Screen<Risk> {
    let table = TableModel::new(
        "Risks",
        vec![
            ColumnDef::new("partnerName", "Partner").sortable(),
            ColumnDef::new("riskType", "Risk Type").sortable(),
            ColumnDef::new("severity", "Severity").sortable(),
            ColumnDef::new("source", "Source"),
            ColumnDef::new("detectedDate", "Detected").sortable().render(date_cell),
            ColumnDef::new("status", "Status").sortable(),
        ],
    )
    .with_actions(all_actions());
    let partners = stores.partners.clone();
    let option_source = stores.partners.clone();
    Screen::new(
        "Risk",
        stores.risks.clone(),
        notifier,
        Box::new(move || schemas::risk_fields(schemas::partner_options(&option_source))),
        table,
    )
    .with_enrich(Box::new(move |fields| {
        snapshot_partner_name(&partners, fields)
    }))
}

pub fn action_screen(stores: &AppStores, notifier: Arc<Notifier>) -> Screen<Action> {
    let table = TableModel::new(
        "Actions",
        vec![
            ColumnDef::new("title", "Title").sortable(),
            ColumnDef::new("partnerName", "Partner").sortable(),
            ColumnDef::new("priority", "Priority").sortable(),
            ColumnDef::new("dueDate", "Due").sortable().render(date_cell),
            ColumnDef::new("status", "Status").sortable(),
            ColumnDef::new("assignedTo", "Assigned To"),
        ],
    )
    .with_actions(all_actions());
    let partners = stores.partners.clone();
    let option_source = stores.partners.clone();
    Screen::new(
        "Action",
        stores.actions.clone(),
        notifier,
        Box::new(move || schemas::action_fields(schemas::partner_options(&option_source))),
        table,
    )
    .with_enrich(Box::new(move |fields| {
        snapshot_partner_name(&partners, fields)
    }))
}

pub fn communication_screen(stores: &AppStores, notifier: Arc<Notifier>) -> Screen<Communication> {
    let table = TableModel::new(
        "Communications",
        vec![
            ColumnDef::new("title", "Title").sortable(),
            ColumnDef::new("type", "Type").sortable(),
            ColumnDef::new("status", "Status").sortable(),
            ColumnDef::new("sendDate", "Send Date").sortable().render(date_cell),
            ColumnDef::new("sender", "Sender"),
        ],
    )
    .with_actions(all_actions());
    Screen::new(
        "Communication",
        stores.communications.clone(),
        notifier,
        Box::new(schemas::communication_fields),
        table,
    )
}

pub fn case_study_screen(stores: &AppStores, notifier: Arc<Notifier>) -> Screen<CaseStudy> {
    let table = TableModel::new(
        "Case Studies",
        vec![
            ColumnDef::new("title", "Title").sortable(),
            ColumnDef::new("industry", "Industry").sortable(),
            ColumnDef::new("region", "Region").sortable(),
            ColumnDef::new("published", "Published"),
        ],
    )
    .with_actions(all_actions());
    Screen::new(
        "Case Study",
        stores.case_studies.clone(),
        notifier,
        Box::new(schemas::case_study_fields),
        table,
    )
}

pub fn sdg_goal_screen(stores: &AppStores, notifier: Arc<Notifier>) -> Screen<SdgGoal> {
    let table = TableModel::new(
        "SDG Goals",
        vec![
            ColumnDef::new("number", "Goal").sortable(),
            ColumnDef::new("title", "Title").sortable(),
            ColumnDef::new("progress", "Progress").sortable().render(score_cell),
            ColumnDef::new("color", "Color"),
        ],
    )
    .with_actions(all_actions());
    Screen::new(
        "SDG Goal",
        stores.sdg_goals.clone(),
        notifier,
        Box::new(schemas::sdg_goal_fields),
        table,
    )
}
