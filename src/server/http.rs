//! HTTP routes and handlers for the planner API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::state::AppState;
use crate::graph::build_prereq_graph;
use crate::storage::{PlanStore, Student};

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(health))
        // Read endpoints
        .route("/resource/students", get(get_students))
        .route("/resource/courses", get(get_courses))
        .route("/resource/courses/search", get(search_courses))
        .route("/resource/student/:netid/plans", get(get_student_plans))
        .route("/resource/plan/:planid", get(get_plan).delete(delete_plan))
        .route(
            "/resource/course/:courseid/prerequisites",
            get(get_prerequisites),
        )
        .route(
            "/resource/course/:courseid/prerequisite-graph",
            get(get_prerequisite_graph),
        )
        // Account endpoints
        .route("/resource/create-account", post(create_account))
        .route("/resource/login", post(login))
        .route("/resource/update-account", put(update_account))
        // Plan mutation endpoints
        .route("/resource/plan", post(add_plan))
        .route("/resource/course", post(add_course))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Open a request-scoped store connection.
fn open_store(state: &AppState) -> Result<PlanStore, ApiError> {
    Ok(PlanStore::open(&state.db_path)?)
}

/// Presence check: `None` and blank strings both count as missing.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// =============================================================================
// Health
// =============================================================================

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "planner-daemon"
    }))
}

// =============================================================================
// Read Endpoints
// =============================================================================

async fn get_students(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let store = open_store(&state)?;
    Ok(Json(store.list_students()?))
}

async fn get_courses(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let store = open_store(&state)?;
    Ok(Json(store.list_courses()?))
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

async fn search_courses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let store = open_store(&state)?;
    let hits = store.search_courses(&params.q)?;
    let rows: Vec<_> = hits.into_iter().map(|id| json!({ "CourseID": id })).collect();
    Ok(Json(rows))
}

async fn get_student_plans(
    State(state): State<Arc<AppState>>,
    Path(netid): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let store = open_store(&state)?;
    let plans = store.plans_for_student(&netid)?;
    if plans.is_empty() {
        return Err(ApiError::NotFound(
            "No academic plans found for this student".to_string(),
        ));
    }
    Ok(Json(plans))
}

async fn get_plan(
    State(state): State<Arc<AppState>>,
    Path(planid): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let store = open_store(&state)?;
    Ok(Json(store.plan_courses(planid)?))
}

async fn get_prerequisites(
    State(state): State<Arc<AppState>>,
    Path(courseid): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let store = open_store(&state)?;
    Ok(Json(store.prerequisites_with_credits(&courseid)?))
}

async fn get_prerequisite_graph(
    State(state): State<Arc<AppState>>,
    Path(courseid): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let store = open_store(&state)?;
    let graph = build_prereq_graph(&store, &courseid)?;
    Ok(Json(graph))
}

// =============================================================================
// Account Endpoints
// =============================================================================

#[derive(Deserialize)]
struct CreateAccountRequest {
    name: Option<String>,
    netid: Option<String>,
    majorid: Option<i64>,
    egrad: Option<String>,
}

async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(name), Some(netid), Some(majorid), Some(egrad)) = (
        non_empty(req.name),
        non_empty(req.netid),
        req.majorid,
        non_empty(req.egrad),
    ) else {
        return Err(ApiError::Validation("All fields are required".to_string()));
    };

    let store = open_store(&state)?;
    if store.find_student(&netid)?.is_some() {
        return Err(ApiError::Conflict(
            "Account with this NetID already exists".to_string(),
        ));
    }

    store.insert_student(&Student {
        netid,
        name,
        expected_graduation: Some(egrad),
        major_id: Some(majorid),
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Account created successfully" })),
    ))
}

#[derive(Deserialize)]
struct LoginRequest {
    netid: Option<String>,
    name: Option<String>,
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(netid), Some(name)) = (non_empty(req.netid), non_empty(req.name)) else {
        return Err(ApiError::Validation(
            "NetID and Name are required".to_string(),
        ));
    };

    let store = open_store(&state)?;
    match store.authenticate(&netid, &name)? {
        Some(user) => Ok(Json(json!({
            "message": "Login successful!",
            "user": user,
        }))),
        None => Err(ApiError::Unauthorized("Invalid credentials".to_string())),
    }
}

#[derive(Deserialize)]
struct UpdateAccountRequest {
    netid: Option<String>,
    name: Option<String>,
    majorid: Option<i64>,
    egrad: Option<String>,
}

async fn update_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateAccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(netid) = non_empty(req.netid) else {
        return Err(ApiError::Validation(
            "NetID is required for updating information".to_string(),
        ));
    };

    let store = open_store(&state)?;
    let Some(existing) = store.find_student(&netid)? else {
        return Err(ApiError::NotFound(
            "Account with this NetID does not exist".to_string(),
        ));
    };

    // Omitted fields keep their stored values
    let name = non_empty(req.name).unwrap_or(existing.name);
    let major_id = req.majorid.or(existing.major_id);
    let egrad = non_empty(req.egrad).or(existing.expected_graduation);

    store.update_student(&netid, &name, major_id, egrad.as_deref())?;
    Ok(Json(json!({ "message": "Information updated successfully" })))
}

// =============================================================================
// Plan Endpoints
// =============================================================================

#[derive(Deserialize)]
struct AddPlanRequest {
    netid: Option<String>,
    planid: Option<i64>,
}

async fn add_plan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddPlanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(netid), Some(planid)) = (non_empty(req.netid), req.planid) else {
        return Err(ApiError::Validation(
            "NetID and PlanID are required".to_string(),
        ));
    };

    let store = open_store(&state)?;
    store.insert_plan(planid, &netid)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Plan added successfully" })),
    ))
}

#[derive(Deserialize)]
struct AddCourseRequest {
    planid: Option<i64>,
    courseid: Option<String>,
    credits: Option<f64>,
    semester: Option<String>,
}

async fn add_course(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddCourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(planid), Some(courseid), Some(credits), Some(semester)) = (
        req.planid,
        non_empty(req.courseid),
        req.credits,
        non_empty(req.semester),
    ) else {
        return Err(ApiError::Validation("All fields are required".to_string()));
    };

    let store = open_store(&state)?;
    store.insert_planned_course(planid, &courseid, credits, &semester)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Course added successfully" })),
    ))
}

async fn delete_plan(
    State(state): State<Arc<AppState>>,
    Path(planid): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let store = open_store(&state)?;
    store.delete_plan(planid)?;
    Ok(Json(json!({ "message": "Plan deleted successfully" })))
}
