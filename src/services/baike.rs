// src/services/baike.rs

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::ServiceError,
    models::{
        baike::Baike,
        request::{BaikeSearch, IdsReq},
    },
};

/// Persistence operations behind the `/baike` endpoints.
#[async_trait]
pub trait BaikeService: Send + Sync {
    async fn create_baike(&self, baike: Baike) -> Result<(), ServiceError>;

    /// Deletes the row with `baike.id`; the other fields are ignored.
    async fn delete_baike(&self, baike: Baike) -> Result<(), ServiceError>;

    /// Deletes every listed id in one statement. Unknown ids are skipped.
    async fn delete_baike_by_ids(&self, ids: IdsReq) -> Result<(), ServiceError>;

    async fn update_baike(&self, baike: Baike) -> Result<(), ServiceError>;

    async fn get_baike(&self, id: i64) -> Result<Baike, ServiceError>;

    /// Returns one page of matching rows plus the total number of matches.
    async fn get_baike_info_list(&self, search: &BaikeSearch) -> Result<(Vec<Baike>, i64), ServiceError>;
}

const BAIKE_COLUMNS: &str =
    "id, created_at, updated_at, category_id, question, option_a, option_b, option_c, option_d, answer";

/// `BaikeService` backed by the 'baike' table in Postgres.
#[derive(Clone)]
pub struct PgBaikeService {
    pool: PgPool,
}

impl PgBaikeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Appends the WHERE clause shared by the count and page queries.
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, search: &BaikeSearch) {
    builder.push(" WHERE 1 = 1");

    if let Some(category_id) = search.category_id {
        builder.push(" AND category_id = ").push_bind(category_id);
    }

    if let Some(question) = search.question() {
        builder
            .push(" AND question ILIKE ")
            .push_bind(format!("%{}%", question));
    }

    if let Some(answer) = search.answer() {
        builder.push(" AND answer = ").push_bind(answer.to_string());
    }

    if let Some(keyword) = search.keyword() {
        builder
            .push(" AND concat_ws(' ', question, option_a, option_b, option_c, option_d) ILIKE ")
            .push_bind(format!("%{}%", keyword));
    }

    if let Some((start, end)) = search.created_between() {
        builder
            .push(" AND created_at BETWEEN ")
            .push_bind(start)
            .push(" AND ")
            .push_bind(end);
    }
}

#[async_trait]
impl BaikeService for PgBaikeService {
    async fn create_baike(&self, baike: Baike) -> Result<(), ServiceError> {
        sqlx::query(
            r#"
            INSERT INTO baike
            (category_id, question, option_a, option_b, option_c, option_d, answer)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(baike.category_id)
        .bind(baike.question)
        .bind(baike.option_a)
        .bind(baike.option_b)
        .bind(baike.option_c)
        .bind(baike.option_d)
        .bind(baike.answer)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_baike(&self, baike: Baike) -> Result<(), ServiceError> {
        let result = sqlx::query("DELETE FROM baike WHERE id = $1")
            .bind(baike.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound);
        }

        Ok(())
    }

    async fn delete_baike_by_ids(&self, ids: IdsReq) -> Result<(), ServiceError> {
        let result = sqlx::query("DELETE FROM baike WHERE id = ANY($1)")
            .bind(ids.ids.as_slice())
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            requested = ids.ids.len(),
            deleted = result.rows_affected(),
            "batch deleted baike rows"
        );

        Ok(())
    }

    async fn update_baike(&self, baike: Baike) -> Result<(), ServiceError> {
        let result = sqlx::query(
            r#"
            UPDATE baike SET
                category_id = $1,
                question = $2,
                option_a = $3,
                option_b = $4,
                option_c = $5,
                option_d = $6,
                answer = $7,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $8
            "#,
        )
        .bind(baike.category_id)
        .bind(baike.question)
        .bind(baike.option_a)
        .bind(baike.option_b)
        .bind(baike.option_c)
        .bind(baike.option_d)
        .bind(baike.answer)
        .bind(baike.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound);
        }

        Ok(())
    }

    async fn get_baike(&self, id: i64) -> Result<Baike, ServiceError> {
        let sql = format!("SELECT {} FROM baike WHERE id = $1", BAIKE_COLUMNS);

        sqlx::query_as::<_, Baike>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    async fn get_baike_info_list(&self, search: &BaikeSearch) -> Result<(Vec<Baike>, i64), ServiceError> {
        let mut count_query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM baike");
        push_filters(&mut count_query, search);

        let total: i64 = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        let mut page_query: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM baike", BAIKE_COLUMNS));
        push_filters(&mut page_query, search);
        page_query
            .push(" ORDER BY id LIMIT ")
            .push_bind(search.limit())
            .push(" OFFSET ")
            .push_bind(search.offset());

        let list = page_query
            .build_query_as::<Baike>()
            .fetch_all(&self.pool)
            .await?;

        Ok((list, total))
    }
}
