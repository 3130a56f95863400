use crate::auth::CredentialStore;
use crate::client::HistorySource;
use crate::errors::{AppError, MoodError, Notification};
use crate::history::Confirmation;
use crate::models::{
    AnalyzeResponse, DeleteQuery, HistoryResponse, ImageUpload, SessionSnapshot, TokenRequest,
    UserProfile,
};
use crate::render::{CapturedView, HistoryRow, ResultView};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(session.session_id()))
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let session = state.session.lock().await;
    Json(SessionSnapshot {
        session_id: session.session_id().to_string(),
        profile: session.profile.clone(),
        result: ResultView::from_session(&session),
        history: HistoryRow::from_entries(session.history()),
        analysis_in_flight: session.analysis_in_flight(),
    })
}

pub async fn put_profile(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Json<Notification> {
    state.session.lock().await.set_profile(profile);
    Json(Notification::success("Profile information saved successfully!"))
}

pub async fn store_token(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequest>,
) -> Result<StatusCode, AppError> {
    let token = payload.access_token.trim();
    if token.is_empty() {
        return Err(AppError::bad_request("access_token must not be empty"));
    }
    state
        .credentials
        .store_token(token.to_string(), payload.token_type);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.credentials.logout();
    StatusCode::NO_CONTENT
}

pub async fn analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    let mut view = CapturedView::default();
    state
        .orchestrator
        .analyze(&state.session, upload, &mut view)
        .await?;

    Ok(Json(AnalyzeResponse {
        result: view.result,
        history: view.history.unwrap_or_default(),
    }))
}

pub async fn save_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, AppError> {
    let mut session = state.session.lock().await;
    let mut store = session.history_store();
    store.save()?;
    Ok(Json(HistoryResponse {
        notification: Notification::success("Analysis saved to history!"),
        history: store.rows(),
    }))
}

pub async fn view_history(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Result<Json<ResultView>, AppError> {
    let index = parse_index(&index)?;
    let mut session = state.session.lock().await;
    session.history_store().view(index)?;
    let view = ResultView::from_session(&session).ok_or(MoodError::NoCurrentAnalysis)?;
    Ok(Json(view))
}

pub async fn delete_history(
    State(state): State<AppState>,
    Path(index): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let index = parse_index(&index)?;
    let confirmation = if query.confirm {
        Confirmation::Confirmed
    } else {
        Confirmation::Declined
    };

    let mut session = state.session.lock().await;
    let mut store = session.history_store();
    let notification = match store.delete(index, confirmation)? {
        Some(_) => Notification::info("History entry deleted"),
        None => Notification::info("Deletion cancelled"),
    };
    Ok(Json(HistoryResponse {
        notification,
        history: store.rows(),
    }))
}

pub async fn sync_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, AppError> {
    let token = state
        .credentials
        .access_token()
        .ok_or(MoodError::Unauthenticated)?;
    let entries = state.service.fetch_history(&token).await?;

    let mut session = state.session.lock().await;
    let mut store = session.history_store();
    let loaded = store.load_remote(entries);
    info!(loaded, "merged server history");
    Ok(Json(HistoryResponse {
        notification: Notification::info(format!("Loaded {loaded} entries from your history")),
        history: store.rows(),
    }))
}

fn parse_index(raw: &str) -> Result<usize, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request(format!("history index {raw:?} is not a number")))
}

async fn read_upload(mut multipart: Multipart) -> Result<ImageUpload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::bad_request(err.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|err| AppError::bad_request(err.to_string()))?;
        return Ok(ImageUpload {
            file_name,
            content_type,
            data: data.to_vec(),
        });
    }
    Err(AppError::bad_request("multipart field 'file' is required"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_index_must_be_numeric() {
        assert_eq!(parse_index("2").unwrap(), 2);
        let err = parse_index("abc").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.kind, "bad_request");
        assert!(parse_index("-1").is_err());
    }
}
