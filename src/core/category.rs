//! Category lookups.

use crate::{
    entities::{Category, category},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};

/// Fetches a category by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_category_by_id<C>(db: &C, category_id: Uuid) -> Result<Option<category::Model>>
where
    C: ConnectionTrait,
{
    Category::find_by_id(category_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a category.
///
/// # Errors
/// Returns an error if the name is blank or the insert fails.
pub async fn create_category<C>(
    db: &C,
    name: &str,
    description: Option<String>,
) -> Result<category::Model>
where
    C: ConnectionTrait,
{
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Category name cannot be empty".to_string(),
        });
    }

    let category = category::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.trim().to_string()),
        description: Set(description),
    };
    category.insert(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_and_get_category() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_category(&db, "  Plumbing ", None).await?;
        assert_eq!(created.name, "Plumbing");

        let found = get_category_by_id(&db, created.id).await?.unwrap();
        assert_eq!(found, created);
        assert!(get_category_by_id(&db, Uuid::new_v4()).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_category_rejects_blank_name() -> Result<()> {
        let db = setup_test_db().await?;
        let result = create_category(&db, "   ", None).await;
        assert!(matches!(result, Err(Error::Config { .. })));
        Ok(())
    }
}
