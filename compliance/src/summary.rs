//! Dashboard aggregates over the stores. Each aggregate degrades
//! independently: a failed lookup logs and answers the zero value instead of
//! taking the whole dashboard down.

use crate::types::{Action, ActionStatus, EntityKind, Partner, Risk, RiskStatus};
use adminkit::rest::{AppJson, RequestState, StructInfo};
use adminkit::{AppError, StoreHub};
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub partner_count: usize,
    /// Rounded mean of partner compliance scores, 0 with no partners.
    pub compliance_rate: u32,
    pub open_risks: usize,
    pub pending_actions: usize,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskDistribution {
    pub risk_type: String,
    pub count: usize,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopPartner {
    pub id: String,
    pub name: String,
    pub compliance_score: u8,
}

#[derive(Deserialize, IntoParams)]
pub struct LimitQuery {
    /// How many partners to return, default 5.
    pub limit: Option<usize>,
}

pub fn dashboard_summary(hub: &StoreHub) -> DashboardSummary {
    match try_summary(hub) {
        Ok(summary) => summary,
        Err(err) => {
            adminkit::error!("dashboard summary failed: {}", err);
            DashboardSummary::default()
        }
    }
}

fn try_summary(hub: &StoreHub) -> Result<DashboardSummary, AppError> {
    let partners = hub.store::<Partner>()?.list_all();
    let compliance_rate = if partners.is_empty() {
        0
    } else {
        let total: u32 = partners.iter().map(|p| u32::from(p.compliance_score)).sum();
        (f64::from(total) / partners.len() as f64).round() as u32
    };
    let open_risks = hub
        .store::<Risk>()?
        .list_all()
        .iter()
        .filter(|risk| risk.status == RiskStatus::Open)
        .count();
    let pending_actions = hub
        .store::<Action>()?
        .list_all()
        .iter()
        .filter(|action| {
            matches!(
                action.status,
                ActionStatus::Pending | ActionStatus::InProgress
            )
        })
        .count();
    Ok(DashboardSummary {
        partner_count: partners.len(),
        compliance_rate,
        open_risks,
        pending_actions,
    })
}

/// Risk counts grouped by risk type, in first-seen order. A blank type
/// falls into the "Uncategorized" bucket.
pub fn risk_distribution(hub: &StoreHub) -> Vec<RiskDistribution> {
    let risks = match hub.store::<Risk>() {
        Ok(store) => store.list_all(),
        Err(err) => {
            adminkit::error!("risk distribution failed: {}", err);
            return Vec::new();
        }
    };
    let mut buckets: Vec<RiskDistribution> = Vec::new();
    for risk in risks {
        let risk_type = if risk.risk_type.trim().is_empty() {
            "Uncategorized".to_string()
        } else {
            risk.risk_type
        };
        match buckets.iter_mut().find(|bucket| bucket.risk_type == risk_type) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(RiskDistribution {
                risk_type,
                count: 1,
            }),
        }
    }
    buckets
}

/// The `limit` best-scoring partners, highest compliance score first.
pub fn top_partners(hub: &StoreHub, limit: usize) -> Vec<TopPartner> {
    let partners = match hub.store::<Partner>() {
        Ok(store) => store.list_all(),
        Err(err) => {
            adminkit::error!("top partners failed: {}", err);
            return Vec::new();
        }
    };
    let mut ranked: Vec<TopPartner> = partners
        .into_iter()
        .map(|partner| TopPartner {
            id: partner.id,
            name: partner.name,
            compliance_score: partner.compliance_score,
        })
        .collect();
    ranked.sort_by(|a, b| b.compliance_score.cmp(&a.compliance_score));
    ranked.truncate(limit);
    ranked
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KindCount {
    pub kind: String,
    pub count: usize,
}

/// Record counts for every managed kind, in [`EntityKind::ALL`] order.
pub fn record_counts(hub: &StoreHub) -> Vec<KindCount> {
    EntityKind::ALL
        .into_iter()
        .filter_map(|kind| {
            match hub.count(kind.key()) {
                Ok(count) => Some(KindCount {
                    kind: kind.to_string(),
                    count,
                }),
                Err(err) => {
                    adminkit::error!("count for {} failed: {}", kind, err);
                    None
                }
            }
        })
        .collect()
}

#[utoipa::path(
    get,
    path = "/dashboard/summary",
    responses((status = OK, body = DashboardSummary)),
    tag = "Dashboard"
)]
pub async fn get_dashboard_summary(State(state): State<RequestState>) -> AppJson<DashboardSummary> {
    AppJson(dashboard_summary(&state.hub))
}

#[utoipa::path(
    get,
    path = "/dashboard/risk-distribution",
    responses((status = OK, body = Vec<RiskDistribution>)),
    tag = "Dashboard"
)]
pub async fn get_risk_distribution(
    State(state): State<RequestState>,
) -> AppJson<Vec<RiskDistribution>> {
    AppJson(risk_distribution(&state.hub))
}

#[utoipa::path(
    get,
    path = "/dashboard/top-partners",
    params(LimitQuery),
    responses((status = OK, body = Vec<TopPartner>)),
    tag = "Dashboard"
)]
pub async fn get_top_partners(
    State(state): State<RequestState>,
    Query(query): Query<LimitQuery>,
) -> AppJson<Vec<TopPartner>> {
    AppJson(top_partners(&state.hub, query.limit.unwrap_or(5)))
}

#[utoipa::path(
    get,
    path = "/dashboard/record-counts",
    responses((status = OK, body = Vec<KindCount>)),
    tag = "Dashboard"
)]
pub async fn get_record_counts(State(state): State<RequestState>) -> AppJson<Vec<KindCount>> {
    AppJson(record_counts(&state.hub))
}

#[utoipa::path(
    get,
    path = "/dashboard/record-counts/{kind}",
    params(("kind" = String, Path, description = "Kind key, e.g. partners or sdgGoals")),
    responses((status = OK, body = KindCount)),
    tag = "Dashboard"
)]
pub async fn get_record_count(
    State(state): State<RequestState>,
    axum::extract::Path(kind): axum::extract::Path<String>,
) -> Result<AppJson<KindCount>, AppError> {
    let kind: EntityKind = kind.parse()?;
    Ok(AppJson(KindCount {
        kind: kind.to_string(),
        count: state.hub.count(kind.key())?,
    }))
}

pub fn dashboard_routes() -> OpenApiRouter<RequestState> {
    OpenApiRouter::new()
        .routes(routes!(get_dashboard_summary))
        .routes(routes!(get_risk_distribution))
        .routes(routes!(get_top_partners))
        .routes(routes!(get_record_counts))
        .routes(routes!(get_record_count))
}

inventory::submit! {
    StructInfo { name: "Dashboard", routes_fn: dashboard_routes }
}
