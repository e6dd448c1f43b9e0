//! Routes for the state editor session.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use stateforge_core::solution_validity::SolutionValidityTracker;
use stateforge_interaction::domain::content::{
    AnswerGroup, CustomizationArgs, Hint, Outcome, Solution,
};
use stateforge_interaction::domain::interaction::InteractionConfig;
use stateforge_state_editor::application::query_handlers::{
    self, AnswerChoicesView, StateEditorView,
};
use stateforge_state_editor::domain::misconception::Misconception;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for PUT /active-state. A missing or `null` name is
/// rejected by the session like an empty one.
#[derive(Debug, Deserialize)]
pub struct SetActiveStateRequest {
    /// The state to edit.
    #[serde(default)]
    pub state_name: Option<String>,
}

/// Request body for PUT /state-names.
#[derive(Debug, Deserialize)]
pub struct SetStateNamesRequest {
    /// Every state name in the graph.
    pub state_names: Vec<String>,
}

/// Request body for PUT /modes. Omitted flags are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SetModesRequest {
    /// Question-editing mode.
    pub in_question_mode: Option<bool>,
    /// Correctness feedback.
    pub correctness_feedback_enabled: Option<bool>,
    /// Answer-details solicitation.
    pub solicit_answer_details: Option<bool>,
}

/// Request body for PUT /whitelisted.
#[derive(Debug, Deserialize)]
pub struct SetWhitelistedRequest {
    /// New whitelisted status.
    pub whitelisted: bool,
}

/// Request body for PUT /misconceptions.
#[derive(Debug, Deserialize)]
pub struct SetMisconceptionsRequest {
    /// Misconceptions of the linked skills.
    pub misconceptions: Vec<Misconception>,
}

/// Request body for PUT /interaction/id.
#[derive(Debug, Deserialize)]
pub struct SetInteractionIdRequest {
    /// Widget type tag.
    #[serde(default)]
    pub id: Option<String>,
}

/// Request body for PUT /interaction/answer-groups.
#[derive(Debug, Deserialize)]
pub struct SetAnswerGroupsRequest {
    /// Answer groups in evaluation order.
    pub answer_groups: Vec<AnswerGroup>,
}

/// Request body for PUT /interaction/default-outcome.
#[derive(Debug, Deserialize)]
pub struct SetDefaultOutcomeRequest {
    /// Outcome taken when no group matches.
    #[serde(default)]
    pub default_outcome: Option<Outcome>,
}

/// Request body for PUT /interaction/customization-args.
#[derive(Debug, Deserialize)]
pub struct SetCustomizationArgsRequest {
    /// Widget parameters keyed by name.
    pub customization_args: CustomizationArgs,
}

/// Request body for PUT /interaction/solution.
#[derive(Debug, Deserialize)]
pub struct SetSolutionRequest {
    /// Worked solution.
    #[serde(default)]
    pub solution: Option<Solution>,
}

/// Request body for PUT /interaction/hints.
#[derive(Debug, Deserialize)]
pub struct SetHintsRequest {
    /// Hints in display order.
    pub hints: Vec<Hint>,
}

/// Request body for POST /answer-choices.
#[derive(Debug, Deserialize)]
pub struct DeriveAnswerChoicesRequest {
    /// Widget type tag.
    #[serde(default)]
    pub interaction_id: Option<String>,
    /// Widget parameters keyed by name.
    #[serde(default)]
    pub customization_args: CustomizationArgs,
}

/// Request body for PUT /solution-validity/{state_name}.
#[derive(Debug, Deserialize)]
pub struct UpdateValidityRequest {
    /// Whether the state's solution satisfies its answer rules.
    pub is_valid: bool,
}

/// Solution validity of the active state.
#[derive(Debug, Serialize)]
pub struct SolutionValidityResponse {
    /// The active state, if one is selected.
    pub state_name: Option<String>,
    /// Whether its solution is valid.
    pub is_valid: bool,
}

/// GET /session
async fn get_session(State(state): State<AppState>) -> Json<StateEditorView> {
    Json(query_handlers::get_state_editor_view(&state.session()))
}

/// POST /session/reset
#[instrument(skip(state))]
async fn reset_session(State(state): State<AppState>) -> Json<StateEditorView> {
    let mut session = state.session();
    session.reset();
    info!("state editor session reset");
    Json(query_handlers::get_state_editor_view(&session))
}

/// PUT /active-state
#[instrument(skip(state, request), fields(state_name = ?request.state_name))]
async fn set_active_state(
    State(state): State<AppState>,
    Json(request): Json<SetActiveStateRequest>,
) -> Json<StateEditorView> {
    let mut session = state.session();
    session.set_active_state_name(request.state_name.as_deref());
    Json(query_handlers::get_state_editor_view(&session))
}

/// PUT /state-names
#[instrument(skip(state, request), fields(count = request.state_names.len()))]
async fn set_state_names(
    State(state): State<AppState>,
    Json(request): Json<SetStateNamesRequest>,
) -> Json<StateEditorView> {
    let mut session = state.session();
    session.set_state_names(request.state_names);
    Json(query_handlers::get_state_editor_view(&session))
}

/// PUT /modes
#[instrument(skip(state))]
async fn set_modes(
    State(state): State<AppState>,
    Json(request): Json<SetModesRequest>,
) -> Json<StateEditorView> {
    let mut session = state.session();
    if let Some(in_question_mode) = request.in_question_mode {
        session.set_in_question_mode(in_question_mode);
    }
    if let Some(enabled) = request.correctness_feedback_enabled {
        session.set_correctness_feedback_enabled(enabled);
    }
    if let Some(solicit) = request.solicit_answer_details {
        session.set_solicit_answer_details(solicit);
    }
    Json(query_handlers::get_state_editor_view(&session))
}

/// PUT /whitelisted
#[instrument(skip(state))]
async fn set_whitelisted(
    State(state): State<AppState>,
    Json(request): Json<SetWhitelistedRequest>,
) -> Json<StateEditorView> {
    let mut session = state.session();
    session.update_exploration_whitelisted_status(request.whitelisted);
    Json(query_handlers::get_state_editor_view(&session))
}

/// GET /misconceptions
async fn get_misconceptions(State(state): State<AppState>) -> Json<Vec<Misconception>> {
    Json(state.session().misconceptions())
}

/// PUT /misconceptions
#[instrument(skip(state, request), fields(count = request.misconceptions.len()))]
async fn set_misconceptions(
    State(state): State<AppState>,
    Json(request): Json<SetMisconceptionsRequest>,
) -> Json<Vec<Misconception>> {
    let mut session = state.session();
    session.set_misconceptions(request.misconceptions);
    Json(session.misconceptions())
}

/// GET /interaction
async fn get_interaction(State(state): State<AppState>) -> Json<Option<InteractionConfig>> {
    Json(state.session().interaction())
}

/// PUT /interaction
#[instrument(skip(state, interaction))]
async fn set_interaction(
    State(state): State<AppState>,
    Json(interaction): Json<Option<InteractionConfig>>,
) -> Json<Option<InteractionConfig>> {
    let mut session = state.session();
    session.set_interaction(interaction);
    Json(session.interaction())
}

/// PUT /interaction/id
#[instrument(skip(state))]
async fn set_interaction_id(
    State(state): State<AppState>,
    Json(request): Json<SetInteractionIdRequest>,
) -> Result<Json<Option<InteractionConfig>>, ApiError> {
    let mut session = state.session();
    session.set_interaction_id(request.id)?;
    Ok(Json(session.interaction()))
}

/// PUT /interaction/answer-groups
#[instrument(skip(state, request), fields(count = request.answer_groups.len()))]
async fn set_interaction_answer_groups(
    State(state): State<AppState>,
    Json(request): Json<SetAnswerGroupsRequest>,
) -> Result<Json<Option<InteractionConfig>>, ApiError> {
    let mut session = state.session();
    session.set_interaction_answer_groups(request.answer_groups)?;
    Ok(Json(session.interaction()))
}

/// PUT /interaction/default-outcome
#[instrument(skip(state, request))]
async fn set_interaction_default_outcome(
    State(state): State<AppState>,
    Json(request): Json<SetDefaultOutcomeRequest>,
) -> Result<Json<Option<InteractionConfig>>, ApiError> {
    let mut session = state.session();
    session.set_interaction_default_outcome(request.default_outcome)?;
    Ok(Json(session.interaction()))
}

/// PUT /interaction/customization-args
#[instrument(skip(state, request))]
async fn set_interaction_customization_args(
    State(state): State<AppState>,
    Json(request): Json<SetCustomizationArgsRequest>,
) -> Result<Json<Option<InteractionConfig>>, ApiError> {
    let mut session = state.session();
    session.set_interaction_customization_args(request.customization_args)?;
    Ok(Json(session.interaction()))
}

/// PUT /interaction/solution
#[instrument(skip(state, request))]
async fn set_interaction_solution(
    State(state): State<AppState>,
    Json(request): Json<SetSolutionRequest>,
) -> Result<Json<Option<InteractionConfig>>, ApiError> {
    let mut session = state.session();
    session.set_interaction_solution(request.solution)?;
    Ok(Json(session.interaction()))
}

/// PUT /interaction/hints
#[instrument(skip(state, request), fields(count = request.hints.len()))]
async fn set_interaction_hints(
    State(state): State<AppState>,
    Json(request): Json<SetHintsRequest>,
) -> Result<Json<Option<InteractionConfig>>, ApiError> {
    let mut session = state.session();
    session.set_interaction_hints(request.hints)?;
    Ok(Json(session.interaction()))
}

/// GET /answer-choices
async fn get_current_answer_choices(State(state): State<AppState>) -> Json<AnswerChoicesView> {
    Json(query_handlers::get_current_answer_choices(&state.session()))
}

/// POST /answer-choices
async fn derive_answer_choices(
    Json(request): Json<DeriveAnswerChoicesRequest>,
) -> Json<AnswerChoicesView> {
    Json(query_handlers::get_answer_choices(
        request.interaction_id,
        &request.customization_args,
    ))
}

/// GET /solution-validity
async fn get_solution_validity(State(state): State<AppState>) -> Json<SolutionValidityResponse> {
    let session = state.session();
    Json(SolutionValidityResponse {
        state_name: session.active_state_name().map(str::to_owned),
        is_valid: session.is_current_solution_valid(),
    })
}

/// DELETE /solution-validity
#[instrument(skip(state))]
async fn delete_solution_validity(State(state): State<AppState>) -> StatusCode {
    state.session().delete_current_solution_validity();
    StatusCode::NO_CONTENT
}

/// PUT /solution-validity/{state_name}
#[instrument(skip(state, request), fields(is_valid = request.is_valid))]
async fn update_solution_validity(
    State(state): State<AppState>,
    Path(state_name): Path<String>,
    Json(request): Json<UpdateValidityRequest>,
) -> Json<SolutionValidityResponse> {
    state
        .solution_validity
        .update_validity(&state_name, request.is_valid);
    info!(state_name = %state_name, "solution validity recorded");
    Json(SolutionValidityResponse {
        is_valid: state.solution_validity.is_solution_valid(&state_name),
        state_name: Some(state_name),
    })
}

/// Returns the router for the state editor.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", get(get_session))
        .route("/session/reset", post(reset_session))
        .route("/active-state", put(set_active_state))
        .route("/state-names", put(set_state_names))
        .route("/modes", put(set_modes))
        .route("/whitelisted", put(set_whitelisted))
        .route(
            "/misconceptions",
            get(get_misconceptions).put(set_misconceptions),
        )
        .route("/interaction", get(get_interaction).put(set_interaction))
        .route("/interaction/id", put(set_interaction_id))
        .route(
            "/interaction/answer-groups",
            put(set_interaction_answer_groups),
        )
        .route(
            "/interaction/default-outcome",
            put(set_interaction_default_outcome),
        )
        .route(
            "/interaction/customization-args",
            put(set_interaction_customization_args),
        )
        .route("/interaction/solution", put(set_interaction_solution))
        .route("/interaction/hints", put(set_interaction_hints))
        .route(
            "/answer-choices",
            get(get_current_answer_choices).post(derive_answer_choices),
        )
        .route(
            "/solution-validity",
            get(get_solution_validity).delete(delete_solution_validity),
        )
        .route(
            "/solution-validity/{state_name}",
            put(update_solution_validity),
        )
}
