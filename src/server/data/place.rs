use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct PlaceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlaceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Batch load cache entries for the given addresses in one query.
    ///
    /// Lookup is by exact address string; no normalization is performed.
    pub async fn get_by_addresses(
        &self,
        addresses: Vec<String>,
    ) -> Result<Vec<entity::place::Model>, DbErr> {
        entity::prelude::Place::find()
            .filter(entity::place::Column::Address.is_in(addresses))
            .all(self.db)
            .await
    }

    /// Insert or refresh a cache entry by address.
    ///
    /// Re-resolving an address overwrites its prior coordinates and refresh timestamp;
    /// concurrent writers race with last-write-wins semantics.
    pub async fn upsert(
        &self,
        address: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<entity::place::Model, DbErr> {
        let place = entity::place::ActiveModel {
            address: ActiveValue::Set(address.to_string()),
            latitude: ActiveValue::Set(Some(latitude)),
            longitude: ActiveValue::Set(Some(longitude)),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::Place::insert(place)
            .on_conflict(
                OnConflict::column(entity::place::Column::Address)
                    .update_columns([
                        entity::place::Column::Latitude,
                        entity::place::Column::Longitude,
                        entity::place::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
