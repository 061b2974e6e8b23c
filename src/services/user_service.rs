use anyhow::Result;
use sqlx::PgPool;

use crate::models::{CreateUserRequest, User};

#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create or refresh the record for an identity-provider profile. New
    /// users also get a default settings row.
    #[tracing::instrument(skip(self, request), fields(uid = %request.uid))]
    pub async fn upsert_user(&self, request: &CreateUserRequest) -> Result<User> {
        let name = request.resolved_name();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (provider_user_id, name, email, img)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (provider_user_id)
            DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                img = COALESCE(EXCLUDED.img, users.img),
                updated_at = NOW()
            RETURNING id, provider_user_id, name, email, img, created_at, updated_at
            "#,
        )
        .bind(&request.uid)
        .bind(&name)
        .bind(&request.email)
        .bind(&request.photo_url)
        .fetch_one(&self.db)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO user_settings (user_id)
            VALUES ($1)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(&request.uid)
        .execute(&self.db)
        .await?;

        Ok(user)
    }
}
