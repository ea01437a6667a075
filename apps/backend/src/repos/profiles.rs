use sea_orm::ConnectionTrait;

use crate::adapters::profiles_sea as profiles_adapter;
use crate::entities::profiles;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub created_at: time::OffsetDateTime,
}

impl From<profiles::Model> for Profile {
    fn from(model: profiles::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile_id: i64,
) -> Result<Option<Profile>, DomainError> {
    let row = profiles_adapter::find_by_id(conn, profile_id).await?;
    Ok(row.map(Profile::from))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<Profile>, DomainError> {
    let row = profiles_adapter::find_by_name(conn, name).await?;
    Ok(row.map(Profile::from))
}

pub async fn create_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Profile, DomainError> {
    let row = profiles_adapter::create_profile(conn, name).await?;
    Ok(Profile::from(row))
}
