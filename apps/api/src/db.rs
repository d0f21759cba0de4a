use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the tables this service owns if they do not exist yet.
/// Idempotent, so it runs unconditionally at startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL UNIQUE,
            headline TEXT NOT NULL DEFAULT '',
            summary TEXT NOT NULL DEFAULT '',
            location TEXT NOT NULL DEFAULT '',
            experience JSONB NOT NULL DEFAULT '[]',
            education JSONB NOT NULL DEFAULT '[]',
            skills TEXT[] NOT NULL DEFAULT '{}',
            certifications TEXT[] NOT NULL DEFAULT '{}',
            languages TEXT[] NOT NULL DEFAULT '{}',
            profile_url TEXT,
            version INTEGER NOT NULL DEFAULT 1,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profile_analyses (
            id UUID PRIMARY KEY,
            profile_id UUID NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
            overall_score INTEGER NOT NULL,
            section_scores JSONB,
            suggestions JSONB NOT NULL DEFAULT '{}',
            keywords JSONB,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_profile_analyses_profile_id
         ON profile_analyses (profile_id, created_at DESC)",
    )
    .execute(pool)
    .await?;

    info!("Database schema verified");
    Ok(())
}
