//! SeaORM-based Channel repository implementation

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::entities::{channels, prelude::Channels};
use crate::errors::{PersistenceError, PersistenceResult};
use crate::models::Channel;

/// SeaORM-based repository for Channel operations
#[derive(Clone)]
pub struct ChannelSeaOrmRepository {
    connection: Arc<DatabaseConnection>,
}

impl ChannelSeaOrmRepository {
    /// Create a new repository instance
    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        Self { connection }
    }

    /// Find a channel by ID
    pub async fn find_by_id(&self, id: &str) -> PersistenceResult<Option<Channel>> {
        let model = Channels::find_by_id(id).one(&*self.connection).await?;
        Ok(model.map(Self::model_to_domain))
    }

    /// Find a channel by its stream URL
    ///
    /// The stream URL is the dedup identity key, so this is the lookup the
    /// importer runs for every parsed record.
    pub async fn find_by_stream_url(&self, stream_url: &str) -> PersistenceResult<Option<Channel>> {
        let model = Channels::find()
            .filter(channels::Column::StreamUrl.eq(stream_url))
            .one(&*self.connection)
            .await?;
        Ok(model.map(Self::model_to_domain))
    }

    /// Find all channels, ordered by name
    pub async fn find_all(&self) -> PersistenceResult<Vec<Channel>> {
        let models = Channels::find()
            .order_by_asc(channels::Column::Name)
            .all(&*self.connection)
            .await?;
        Ok(models.into_iter().map(Self::model_to_domain).collect())
    }

    /// Count persisted channels
    pub async fn count(&self) -> PersistenceResult<u64> {
        Ok(Channels::find().count(&*self.connection).await?)
    }

    /// Insert a batch of channels atomically
    ///
    /// All inserts run inside one transaction: either every channel in the
    /// batch becomes visible together, or none do. A constraint violation
    /// (duplicate stream URL or id racing another import) aborts the batch.
    pub async fn insert_batch(&self, new_channels: &[Channel]) -> PersistenceResult<usize> {
        if new_channels.is_empty() {
            return Ok(0);
        }

        let txn = self.connection.begin().await?;

        for channel in new_channels {
            Self::to_active_model(channel)
                .insert(&txn)
                .await
                .map_err(|e| match e.sql_err() {
                    Some(sea_orm::SqlErr::UniqueConstraintViolation(message)) => {
                        PersistenceError::ConstraintViolation {
                            constraint: "channels uniqueness".to_string(),
                            message,
                        }
                    }
                    _ => PersistenceError::Database(e),
                })?;
        }

        txn.commit().await?;
        Ok(new_channels.len())
    }

    /// Convert SeaORM model to domain model
    fn model_to_domain(model: channels::Model) -> Channel {
        Channel {
            id: model.id,
            name: model.name,
            category: model.category,
            logo: model.logo,
            stream_url: model.stream_url,
            epg_id: model.epg_id,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn to_active_model(channel: &Channel) -> channels::ActiveModel {
        channels::ActiveModel {
            id: Set(channel.id.clone()),
            name: Set(channel.name.clone()),
            category: Set(channel.category.clone()),
            logo: Set(channel.logo.clone()),
            stream_url: Set(channel.stream_url.clone()),
            epg_id: Set(channel.epg_id.clone()),
            is_active: Set(channel.is_active),
            created_at: Set(channel.created_at),
            updated_at: Set(channel.updated_at),
        }
    }
}
