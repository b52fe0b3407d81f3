use crate::catalog;
use crate::errors::AppError;
use crate::leaderboard;
use crate::models::{
    Category, CompleteRequest, CompletedTask, LeaderboardEntry, LeaderboardQuery, LoginRequest,
    SessionResponse, SuggestRequest, Task, User,
};
use crate::state::AppState;
use crate::suggest::SUGGEST_FAILURE_MESSAGE;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, Utc};
use tracing::{error, info};

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        user: state.store.restore_user().await,
    })
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<User>, AppError> {
    let username = payload.username.trim();
    if !valid_username(username) {
        return Err(AppError::bad_request("that name cannot be used"));
    }

    let user = User {
        username: username.to_string(),
    };
    state.store.save_user(&user).await?;
    info!("logged in as {:?}", user.username);
    Ok(Json(user))
}

pub async fn logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.clear_user().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_categories() -> Json<&'static [Category]> {
    Json(catalog::categories())
}

pub async fn suggest(
    State(state): State<AppState>,
    Json(payload): Json<SuggestRequest>,
) -> Result<Json<Task>, AppError> {
    let category = catalog::find_category(&payload.category_id)
        .ok_or_else(|| AppError::not_found("unknown category"))?;

    match state.suggester.suggest(category).await {
        Ok(title) => Ok(Json(Task {
            id: format!("gemini-{}", Utc::now().timestamp_millis()),
            title,
            description: "A freshly generated idea just for you!".to_string(),
        })),
        Err(err) => {
            error!("task suggestion failed for {}: {err}", category.id);
            Err(AppError::bad_gateway(SUGGEST_FAILURE_MESSAGE))
        }
    }
}

pub async fn save_record(
    State(state): State<AppState>,
    Json(payload): Json<CompleteRequest>,
) -> Result<Json<CompletedTask>, AppError> {
    let user = require_user(&state).await?;
    if payload.image_url.is_empty() {
        return Err(AppError::bad_request("a completion photo is required"));
    }

    let record = CompletedTask {
        id: format!("record-{}", Utc::now().timestamp_millis()),
        task_id: payload.task_id,
        category_id: payload.category_id,
        task_title: payload.task_title,
        category_title: payload.category_title,
        date: Local::now().to_rfc3339(),
        image_url: payload.image_url,
        username: user.username,
    };

    state.store.append_record(record.clone()).await?;
    Ok(Json(record))
}

pub async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompletedTask>>, AppError> {
    let user = require_user(&state).await?;
    Ok(Json(state.store.list_for_user(&user.username).await))
}

pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Json<Vec<LeaderboardEntry>> {
    let all = state.store.list_global().await;
    Json(leaderboard::rank(&all, query.filter))
}

async fn require_user(state: &AppState) -> Result<User, AppError> {
    state
        .store
        .restore_user()
        .await
        .ok_or_else(|| AppError::unauthorized("log in first"))
}

/// The username doubles as a storage-key component, so beyond the trim it
/// must not smuggle in path syntax.
fn valid_username(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && !name.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use super::valid_username;

    #[test]
    fn usernames_must_be_non_empty_and_path_safe() {
        assert!(valid_username("ana"));
        assert!(valid_username("Ana Banana"));
        assert!(!valid_username(""));
        assert!(!valid_username("../escape"));
        assert!(!valid_username("a/b"));
        assert!(!valid_username("a\\b"));
        assert!(!valid_username(".hidden"));
    }
}
