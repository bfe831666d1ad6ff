//! Room CRUD and photo handlers.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;

use renthub_core::error::AppError;
use renthub_entity::review::Review;
use renthub_entity::room::model::{CreateRoom, UpdateRoom};
use renthub_entity::room::photo::RoomPhoto;
use renthub_entity::room::Room;
use renthub_service::room::RoomWithPhotos;

use crate::dto::request::RoomListParams;
use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(params): Query<RoomListParams>,
) -> Result<Json<Vec<RoomWithPhotos>>, AppError> {
    let (filter, query) = params.into_parts();
    Ok(Json(state.room_service.list(&filter, &query).await?))
}

/// GET /api/rooms/{id}
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RoomWithPhotos>, AppError> {
    Ok(Json(state.room_service.get(id).await?))
}

/// POST /api/rooms
pub async fn create_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateRoom>,
) -> Result<(StatusCode, Json<Room>), AppError> {
    let room = state.room_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// PUT /api/rooms/{id}
pub async fn update_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRoom>,
) -> Result<Json<Room>, AppError> {
    Ok(Json(state.room_service.update(&auth, id, req).await?))
}

/// DELETE /api/rooms/{id}
pub async fn delete_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.room_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Room deleted successfully")))
}

/// GET /api/rooms/{id}/reviews
pub async fn list_room_reviews(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Review>>, AppError> {
    Ok(Json(state.review_service.list_by_room(id).await?))
}

/// POST /api/rooms/{id}/photos
///
/// Multipart upload: one binary `file` part plus an optional text
/// `description` part.
pub async fn upload_room_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<RoomPhoto>), AppError> {
    let mut file: Option<(String, bytes::Bytes)> = None;
    let mut description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;
                file = Some((filename, data));
            }
            Some("description") => {
                description = field.text().await.ok();
            }
            _ => {}
        }
    }

    let (filename, data) = file.ok_or_else(|| AppError::validation("Missing file field"))?;

    let photo = state
        .room_service
        .upload_photo(&auth, id, &filename, description, data)
        .await?;

    Ok((StatusCode::CREATED, Json(photo)))
}

/// DELETE /api/rooms/photos/{photo_id}
pub async fn delete_room_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(photo_id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.room_service.delete_photo(&auth, photo_id).await?;
    Ok(Json(MessageResponse::new("Photo deleted successfully")))
}
