//! PostgreSQL implementation of RsvpRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use wedding_core::entities::{NewRsvpResponse, RsvpResponse};
use wedding_core::traits::{RepoResult, RsvpQuery, RsvpRepository};

use crate::models::RsvpModel;

use super::error::map_db_error;

const RSVP_COLUMNS: &str = "id, guest_name, email, phone, is_attending, number_of_guests, \
     additional_guests_data, wants_aso_ebi, notes, created_at";

/// PostgreSQL implementation of RsvpRepository
#[derive(Clone)]
pub struct PgRsvpRepository {
    pool: PgPool,
}

impl PgRsvpRepository {
    /// Create a new PgRsvpRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// SELECT for a listing; the sort column comes from a closed enum, never from input text
fn list_sql(query: &RsvpQuery) -> String {
    format!(
        r#"
        SELECT {RSVP_COLUMNS}
        FROM rsvp_responses
        WHERE ($1::BOOLEAN IS NULL OR is_attending = $1)
          AND ($2::TIMESTAMPTZ IS NULL OR created_at >= $2)
          AND ($3::TIMESTAMPTZ IS NULL OR created_at <= $3)
        ORDER BY {} {}, id ASC
        LIMIT $4
        "#,
        query.sort_by.column(),
        query.direction.as_sql(),
    )
}

#[async_trait]
impl RsvpRepository for PgRsvpRepository {
    #[instrument(skip(self, rsvp), fields(guest_name = %rsvp.guest_name))]
    async fn insert(&self, rsvp: &NewRsvpResponse) -> RepoResult<RsvpResponse> {
        let model = sqlx::query_as::<_, RsvpModel>(&format!(
            r#"
            INSERT INTO rsvp_responses
                (id, guest_name, email, phone, is_attending, number_of_guests,
                 additional_guests_data, wants_aso_ebi, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {RSVP_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&rsvp.guest_name)
        .bind(&rsvp.email)
        .bind(&rsvp.phone)
        .bind(rsvp.is_attending)
        .bind(rsvp.number_of_guests)
        .bind(Json(&rsvp.additional_guests))
        .bind(rsvp.wants_aso_ebi)
        .bind(&rsvp.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(RsvpResponse::from(model))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, query: &RsvpQuery) -> RepoResult<Vec<RsvpResponse>> {
        let results = sqlx::query_as::<_, RsvpModel>(&list_sql(query))
            .bind(query.attendance.as_attending())
            .bind(query.start)
            .bind(query.end)
            .bind(query.limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(RsvpResponse::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM rsvp_responses")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
