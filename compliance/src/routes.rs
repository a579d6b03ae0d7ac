//! REST surface: a uniform CRUD route group per record kind, all registered
//! through `inventory` so `build_router` picks them up without a manual list.

use crate::controllers::Enrich;
use crate::schemas;
use crate::types::{Action, CaseStudy, Communication, Partner, Risk, SdgGoal};
use adminkit::rest::{AppJson, RequestState, StructInfo};
use adminkit::{normalize_draft, AppError, FieldDef, Record, Validator};
use axum::extract::{Path, State};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[derive(Serialize, ToSchema)]
pub struct DeleteOutcome {
    pub deleted: bool,
}

fn validated(fields: &Map<String, Value>, defs: &[FieldDef]) -> Result<(), AppError> {
    let validator = Validator::new(defs)?;
    let errors = validator.validate(fields);
    if errors.is_empty() {
        return Ok(());
    }
    let summary = errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(AppError::BadRequest(summary))
}

// Select options are a form concern; REST validation only needs the rules.
fn risk_form_fields() -> Vec<FieldDef> {
    schemas::risk_fields(Vec::new())
}

fn action_form_fields() -> Vec<FieldDef> {
    schemas::action_fields(Vec::new())
}

macro_rules! crud_routes {
    ($Entity:ident, $fields_fn:path, $tag:literal, $list_path:literal, $item_path:literal,
     $list_fn:ident, $get_fn:ident, $create_fn:ident, $update_fn:ident, $delete_fn:ident,
     $routes_fn:ident) => {
        #[utoipa::path(
            get,
            path = $list_path,
            responses((status = OK, body = Vec<$Entity>)),
            tag = $tag
        )]
        pub async fn $list_fn(
            State(state): State<RequestState>,
        ) -> Result<AppJson<Vec<$Entity>>, AppError> {
            Ok(AppJson(state.hub.store::<$Entity>()?.list_all()))
        }

        #[utoipa::path(
            get,
            path = $item_path,
            params(("id" = String, Path, description = "Record id")),
            responses((status = OK, body = $Entity)),
            tag = $tag
        )]
        pub async fn $get_fn(
            State(state): State<RequestState>,
            Path(id): Path<String>,
        ) -> Result<AppJson<$Entity>, AppError> {
            state
                .hub
                .store::<$Entity>()?
                .get_by_id(&id)
                .map(AppJson)
                .ok_or_else(|| AppError::NotFound(format!("{} {}", $Entity::KIND, id)))
        }

        #[utoipa::path(
            post,
            path = $list_path,
            responses((status = OK, body = $Entity)),
            tag = $tag
        )]
        pub async fn $create_fn(
            State(state): State<RequestState>,
            AppJson(mut fields): AppJson<Map<String, Value>>,
        ) -> Result<AppJson<$Entity>, AppError> {
            let defs = $fields_fn();
            normalize_draft(&defs, &mut fields);
            validated(&fields, &defs)?;
            <$Entity as Enrich>::enrich(&state.hub, &mut fields)?;
            let record = <$Entity as Record>::from_fields(fields)?;
            Ok(AppJson(state.hub.store::<$Entity>()?.create(record)?))
        }

        #[utoipa::path(
            patch,
            path = $item_path,
            params(("id" = String, Path, description = "Record id")),
            responses((status = OK, body = $Entity)),
            tag = $tag
        )]
        pub async fn $update_fn(
            State(state): State<RequestState>,
            Path(id): Path<String>,
            AppJson(mut fields): AppJson<Map<String, Value>>,
        ) -> Result<AppJson<$Entity>, AppError> {
            normalize_draft(&$fields_fn(), &mut fields);
            <$Entity as Enrich>::enrich(&state.hub, &mut fields)?;
            state
                .hub
                .store::<$Entity>()?
                .update(&id, fields)?
                .map(AppJson)
                .ok_or_else(|| AppError::NotFound(format!("{} {}", $Entity::KIND, id)))
        }

        #[utoipa::path(
            delete,
            path = $item_path,
            params(("id" = String, Path, description = "Record id")),
            responses((status = OK, body = DeleteOutcome)),
            tag = $tag
        )]
        pub async fn $delete_fn(
            State(state): State<RequestState>,
            Path(id): Path<String>,
        ) -> Result<AppJson<DeleteOutcome>, AppError> {
            Ok(AppJson(DeleteOutcome {
                deleted: state.hub.store::<$Entity>()?.delete(&id),
            }))
        }

        pub fn $routes_fn() -> OpenApiRouter<RequestState> {
            OpenApiRouter::new()
                .routes(routes!($list_fn, $create_fn))
                .routes(routes!($get_fn, $update_fn, $delete_fn))
        }

        inventory::submit! {
            StructInfo { name: stringify!($Entity), routes_fn: $routes_fn }
        }
    };
}

#[utoipa::path(
    get,
    path = "/partners/{id}/risks",
    params(("id" = String, Path, description = "Partner id")),
    responses((status = OK, body = Vec<Risk>)),
    tag = "Partner"
)]
pub async fn list_partner_risks(
    State(state): State<RequestState>,
    Path(id): Path<String>,
) -> Result<AppJson<Vec<Risk>>, AppError> {
    let risks = state
        .hub
        .store::<Risk>()?
        .list_all()
        .into_iter()
        .filter(|risk| risk.partner_id == id)
        .collect();
    Ok(AppJson(risks))
}

#[utoipa::path(
    get,
    path = "/partners/{id}/actions",
    params(("id" = String, Path, description = "Partner id")),
    responses((status = OK, body = Vec<Action>)),
    tag = "Partner"
)]
pub async fn list_partner_actions(
    State(state): State<RequestState>,
    Path(id): Path<String>,
) -> Result<AppJson<Vec<Action>>, AppError> {
    let actions = state
        .hub
        .store::<Action>()?
        .list_all()
        .into_iter()
        .filter(|action| action.partner_id == id)
        .collect();
    Ok(AppJson(actions))
}

#[utoipa::path(
    get,
    path = "/risks/open",
    responses((status = OK, body = Vec<Risk>)),
    tag = "Risk"
)]
pub async fn list_open_risks(
    State(state): State<RequestState>,
) -> Result<AppJson<Vec<Risk>>, AppError> {
    let risks = state
        .hub
        .store::<Risk>()?
        .list_all()
        .into_iter()
        .filter(|risk| risk.status == crate::types::RiskStatus::Open)
        .collect();
    Ok(AppJson(risks))
}

/// Pending here means not yet done: both `pending` and `in-progress`.
#[utoipa::path(
    get,
    path = "/actions/pending",
    responses((status = OK, body = Vec<Action>)),
    tag = "Action"
)]
pub async fn list_pending_actions(
    State(state): State<RequestState>,
) -> Result<AppJson<Vec<Action>>, AppError> {
    use crate::types::ActionStatus;
    let actions = state
        .hub
        .store::<Action>()?
        .list_all()
        .into_iter()
        .filter(|action| {
            matches!(
                action.status,
                ActionStatus::Pending | ActionStatus::InProgress
            )
        })
        .collect();
    Ok(AppJson(actions))
}

pub fn relation_routes() -> OpenApiRouter<RequestState> {
    OpenApiRouter::new()
        .routes(routes!(list_partner_risks))
        .routes(routes!(list_partner_actions))
        .routes(routes!(list_open_risks))
        .routes(routes!(list_pending_actions))
}

inventory::submit! {
    StructInfo { name: "Relations", routes_fn: relation_routes }
}

crud_routes!(
    Partner,
    schemas::partner_fields,
    "Partner",
    "/partners",
    "/partners/{id}",
    list_partners,
    get_partner,
    create_partner,
    update_partner,
    delete_partner,
    partner_routes
);

crud_routes!(
    Risk,
    risk_form_fields,
    "Risk",
    "/risks",
    "/risks/{id}",
    list_risks,
    get_risk,
    create_risk,
    update_risk,
    delete_risk,
    risk_routes
);

crud_routes!(
    Action,
    action_form_fields,
    "Action",
    "/actions",
    "/actions/{id}",
    list_actions,
    get_action,
    create_action,
    update_action,
    delete_action,
    action_routes
);

crud_routes!(
    Communication,
    schemas::communication_fields,
    "Communication",
    "/communications",
    "/communications/{id}",
    list_communications,
    get_communication,
    create_communication,
    update_communication,
    delete_communication,
    communication_routes
);

crud_routes!(
    CaseStudy,
    schemas::case_study_fields,
    "CaseStudy",
    "/case-studies",
    "/case-studies/{id}",
    list_case_studies,
    get_case_study,
    create_case_study,
    update_case_study,
    delete_case_study,
    case_study_routes
);

crud_routes!(
    SdgGoal,
    schemas::sdg_goal_fields,
    "SdgGoal",
    "/sdg-goals",
    "/sdg-goals/{id}",
    list_sdg_goals,
    get_sdg_goal,
    create_sdg_goal,
    update_sdg_goal,
    delete_sdg_goal,
    sdg_goal_routes
);
