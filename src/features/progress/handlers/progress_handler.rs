use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::progress::dtos::{RecordPrayerDto, UpdateLocationDto, UserProgressResponseDto};
use crate::features::progress::services::ProgressService;
use crate::shared::types::ApiResponse;
use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/user/progress",
    responses(
        (status = 200, description = "Prayer progress retrieved", body = ApiResponse<UserProgressResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "progress",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_progress(
    user: AuthenticatedUser,
    State(service): State<Arc<ProgressService>>,
) -> Result<Json<ApiResponse<UserProgressResponseDto>>> {
    let progress = service.get_progress(&user).await;
    Ok(Json(ApiResponse::success(
        Some(UserProgressResponseDto::new(&user.user_id, progress)),
        None,
        None,
    )))
}

#[utoipa::path(
    post,
    path = "/api/user/prayer",
    request_body = RecordPrayerDto,
    responses(
        (status = 200, description = "Prayer recorded", body = ApiResponse<UserProgressResponseDto>),
        (status = 400, description = "Unknown prayer or malformed body"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "progress",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn record_prayer(
    user: AuthenticatedUser,
    State(service): State<Arc<ProgressService>>,
    AppJson(dto): AppJson<RecordPrayerDto>,
) -> Result<Json<ApiResponse<UserProgressResponseDto>>> {
    let progress = service.record_prayer(&user, dto).await;
    Ok(Json(ApiResponse::success(
        Some(UserProgressResponseDto::new(&user.user_id, progress)),
        Some("Prayer progress updated".to_string()),
        None,
    )))
}

#[utoipa::path(
    put,
    path = "/api/user/location",
    request_body = UpdateLocationDto,
    responses(
        (status = 200, description = "Location updated", body = ApiResponse<UserProgressResponseDto>),
        (status = 400, description = "Unknown zone or invalid coordinates"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "progress",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_location(
    user: AuthenticatedUser,
    State(service): State<Arc<ProgressService>>,
    AppJson(dto): AppJson<UpdateLocationDto>,
) -> Result<Json<ApiResponse<UserProgressResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let progress = service.update_location(&user, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(UserProgressResponseDto::new(&user.user_id, progress)),
        Some("Location updated".to_string()),
        None,
    )))
}
