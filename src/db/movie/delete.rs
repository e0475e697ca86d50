use sqlx::PgPool;

use crate::errors::AppError;

/// Ratings referencing the movie go with it (`ON DELETE CASCADE`).
pub async fn delete_movie(id: i32, postgres: &PgPool) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM movies WHERE id = $1")
        .bind(id)
        .execute(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete movie {}: {}", id, e)))?;

    if result.rows_affected() > 0 {
        tracing::info!("Deleted movie {}", id);
    }

    Ok(result.rows_affected() > 0)
}
