//! Room CRUD service, including photo storage.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use renthub_auth::policy::{AccessPolicy, Action};
use renthub_core::error::AppError;
use renthub_core::types::pagination::ListQuery;
use renthub_database::repositories::photo::PhotoRepository;
use renthub_database::repositories::room::RoomRepository;
use renthub_entity::room::model::{CreateRoom, RoomFilter, UpdateRoom};
use renthub_entity::room::photo::{CreateRoomPhoto, RoomPhoto};
use renthub_entity::room::Room;
use renthub_storage::PhotoStore;

use crate::context::RequestContext;

/// Subdirectory under the upload root for room photos.
const PHOTO_SUBDIR: &str = "rooms";

/// A room together with its photo metadata, as served by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomWithPhotos {
    /// The room itself.
    #[serde(flatten)]
    pub room: Room,
    /// Photos attached to the room.
    pub photos: Vec<RoomPhoto>,
}

/// Manages rooms and their photos. Reads are public; mutations are
/// admin-only.
#[derive(Debug, Clone)]
pub struct RoomService {
    /// Room repository.
    room_repo: Arc<RoomRepository>,
    /// Photo metadata repository.
    photo_repo: Arc<PhotoRepository>,
    /// Photo file store.
    photo_store: Arc<PhotoStore>,
    /// Access policy.
    policy: Arc<AccessPolicy>,
}

impl RoomService {
    /// Creates a new room service.
    pub fn new(
        room_repo: Arc<RoomRepository>,
        photo_repo: Arc<PhotoRepository>,
        photo_store: Arc<PhotoStore>,
        policy: Arc<AccessPolicy>,
    ) -> Self {
        Self {
            room_repo,
            photo_repo,
            photo_store,
            policy,
        }
    }

    /// Lists rooms matching the filters, with their photos attached.
    pub async fn list(
        &self,
        filter: &RoomFilter,
        query: &ListQuery,
    ) -> Result<Vec<RoomWithPhotos>, AppError> {
        let rooms = self.room_repo.find_filtered(filter, query).await?;

        let ids: Vec<i64> = rooms.iter().map(|r| r.id).collect();
        let mut by_room: HashMap<i64, Vec<RoomPhoto>> = HashMap::new();
        if !ids.is_empty() {
            for photo in self.photo_repo.find_by_rooms(&ids).await? {
                by_room.entry(photo.room_id).or_default().push(photo);
            }
        }

        Ok(rooms
            .into_iter()
            .map(|room| {
                let photos = by_room.remove(&room.id).unwrap_or_default();
                RoomWithPhotos { room, photos }
            })
            .collect())
    }

    /// Gets a room with its photos.
    pub async fn get(&self, id: i64) -> Result<RoomWithPhotos, AppError> {
        let room = self.require_room(id).await?;
        let photos = self.photo_repo.find_by_room(id).await?;
        Ok(RoomWithPhotos { room, photos })
    }

    /// Creates a room (admin only).
    pub async fn create(&self, ctx: &RequestContext, data: CreateRoom) -> Result<Room, AppError> {
        self.policy
            .require(ctx.role, Action::RoomCreate, ctx.user_id, None)?;

        let room = self.room_repo.create(&data).await?;
        info!(room_id = room.id, user_id = ctx.user_id, "Room created");
        Ok(room)
    }

    /// Updates a room (admin only).
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdateRoom,
    ) -> Result<Room, AppError> {
        self.policy
            .require(ctx.role, Action::RoomUpdate, ctx.user_id, None)?;

        self.require_room(id).await?;
        self.room_repo.update(id, &data).await
    }

    /// Deletes a room (admin only).
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        self.policy
            .require(ctx.role, Action::RoomDelete, ctx.user_id, None)?;

        if !self.room_repo.delete(id).await? {
            return Err(AppError::not_found("Room not found"));
        }
        info!(room_id = id, user_id = ctx.user_id, "Room deleted");
        Ok(())
    }

    /// Stores an uploaded photo for a room (admin only).
    pub async fn upload_photo(
        &self,
        ctx: &RequestContext,
        room_id: i64,
        original_filename: &str,
        description: Option<String>,
        data: Bytes,
    ) -> Result<RoomPhoto, AppError> {
        self.policy
            .require(ctx.role, Action::RoomPhotoUpload, ctx.user_id, None)?;

        self.require_room(room_id).await?;

        let photo_url = self
            .photo_store
            .save(PHOTO_SUBDIR, original_filename, data)
            .await?;

        let photo = self
            .photo_repo
            .create(&CreateRoomPhoto {
                room_id,
                photo_url,
                description,
            })
            .await?;

        info!(room_id, photo_id = photo.id, "Room photo uploaded");

        Ok(photo)
    }

    /// Deletes a photo: the metadata row first, then the file on disk.
    /// A file that is already missing does not fail the operation.
    pub async fn delete_photo(&self, ctx: &RequestContext, photo_id: i64) -> Result<(), AppError> {
        self.policy
            .require(ctx.role, Action::RoomPhotoDelete, ctx.user_id, None)?;

        let photo = self
            .photo_repo
            .find_by_id(photo_id)
            .await?
            .ok_or_else(|| AppError::not_found("Photo not found"))?;

        self.photo_repo.delete(photo_id).await?;
        self.photo_store.delete(&photo.photo_url).await;

        info!(photo_id, room_id = photo.room_id, "Room photo deleted");

        Ok(())
    }

    async fn require_room(&self, id: i64) -> Result<Room, AppError> {
        self.room_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))
    }
}
