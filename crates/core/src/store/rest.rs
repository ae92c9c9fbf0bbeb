use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::goal::{FinancialGoal, GoalStatus};
use crate::models::story::Story;
use crate::models::transaction::{Transaction, TransactionWithCategory};

use super::traits::{DataStore, TransactionFilter};

const STORE_NAME: &str = "rest";

/// Client for the hosted backend's table REST API.
///
/// Speaks the PostgREST dialect the backend exposes over its tables:
/// - row filters as query parameters (`user_id=eq.<uuid>`, `kind=eq.expense`)
/// - `order=` / `limit=` for sorting and paging
/// - embedded joins via `select=` (`category:categories(name,emoji)`)
/// - exact row counts via `Prefer: count=exact` + the `Content-Range` header
///
/// Each request carries the API key as both `apikey` and bearer token.
/// Native builds use a 30-second timeout, so a stalled read fails the
/// aggregation instead of blocking it forever; dropping an in-flight future
/// cancels the request.
pub struct RestDataStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestDataStore {
    /// Create a store client for `base_url` (trailing slash optional).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// GET rows from `table` and deserialize the JSON array.
    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, CoreError> {
        let resp = self
            .authed(self.client.get(self.table_url(table)))
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!("{table} query returned HTTP {status}");
            return Err(CoreError::Store {
                store: STORE_NAME.into(),
                message: format!("{table} query returned HTTP {status}"),
            });
        }

        resp.json().await.map_err(|e| CoreError::Store {
            store: STORE_NAME.into(),
            message: format!("Failed to parse {table} rows: {e}"),
        })
    }

    /// Exact row count for `table` under `query`, without fetching rows.
    async fn count_rows(&self, table: &str, query: &[(&str, String)]) -> Result<usize, CoreError> {
        let resp = self
            .authed(self.client.get(self.table_url(table)))
            .query(query)
            .query(&[("select", "id")])
            .header("Prefer", "count=exact")
            .header("Range", "0-0")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!("{table} count returned HTTP {status}");
            return Err(CoreError::Store {
                store: STORE_NAME.into(),
                message: format!("{table} count returned HTTP {status}"),
            });
        }

        resp.headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total)
            .ok_or_else(|| CoreError::Store {
                store: STORE_NAME.into(),
                message: format!("{table} count response carried no usable Content-Range"),
            })
    }

    /// POST a single row into `table`.
    async fn insert_row<T: Serialize + Sync>(&self, table: &str, row: &T) -> Result<(), CoreError> {
        let resp = self
            .authed(self.client.post(self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!("{table} insert returned HTTP {status}");
            return Err(CoreError::Store {
                store: STORE_NAME.into(),
                message: format!("{table} insert returned HTTP {status}"),
            });
        }
        debug!("inserted one row into {table}");
        Ok(())
    }

    fn user_filter(user_id: Uuid) -> (&'static str, String) {
        ("user_id", format!("eq.{user_id}"))
    }
}

/// Parse the total out of a `Content-Range` value like `0-0/42` or `*/0`.
fn parse_content_range_total(value: &str) -> Option<usize> {
    value.rsplit('/').next()?.trim().parse().ok()
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataStore for RestDataStore {
    fn name(&self) -> &str {
        STORE_NAME
    }

    async fn transactions(
        &self,
        user_id: Uuid,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, CoreError> {
        let mut query = vec![Self::user_filter(user_id)];
        if let Some(kind) = filter.kind {
            query.push(("kind", format!("eq.{kind}")));
        }
        self.fetch_rows("transactions", &query).await
    }

    async fn recent_transactions(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> Result<Vec<TransactionWithCategory>, CoreError> {
        let query = [
            Self::user_filter(user_id),
            ("select", "*,category:categories(name,emoji)".into()),
            ("order", "date.desc,id.asc".into()),
            ("limit", limit.to_string()),
        ];
        self.fetch_rows("transactions", &query).await
    }

    async fn count_stories(&self, user_id: Uuid) -> Result<usize, CoreError> {
        self.count_rows("stories", &[Self::user_filter(user_id)])
            .await
    }

    async fn count_goals_with_status(
        &self,
        user_id: Uuid,
        status: GoalStatus,
    ) -> Result<usize, CoreError> {
        let query = [
            Self::user_filter(user_id),
            ("status", format!("eq.{status}")),
        ];
        self.count_rows("financial_goals", &query).await
    }

    async fn stories_by_creation(&self, user_id: Uuid) -> Result<Vec<Story>, CoreError> {
        let query = [
            Self::user_filter(user_id),
            ("order", "created_at.asc".into()),
        ];
        self.fetch_rows("stories", &query).await
    }

    async fn stories_newest_first(&self, user_id: Uuid) -> Result<Vec<Story>, CoreError> {
        let query = [
            Self::user_filter(user_id),
            ("order", "created_at.desc".into()),
        ];
        self.fetch_rows("stories", &query).await
    }

    async fn story(&self, story_id: Uuid) -> Result<Option<Story>, CoreError> {
        let query = [("id", format!("eq.{story_id}")), ("limit", "1".into())];
        let rows: Vec<Story> = self.fetch_rows("stories", &query).await?;
        Ok(rows.into_iter().next())
    }

    async fn goals_newest_first(&self, user_id: Uuid) -> Result<Vec<FinancialGoal>, CoreError> {
        let query = [
            Self::user_filter(user_id),
            ("order", "created_at.desc".into()),
        ];
        self.fetch_rows("financial_goals", &query).await
    }

    async fn goal(&self, goal_id: Uuid) -> Result<Option<FinancialGoal>, CoreError> {
        let query = [("id", format!("eq.{goal_id}")), ("limit", "1".into())];
        let rows: Vec<FinancialGoal> = self.fetch_rows("financial_goals", &query).await?;
        Ok(rows.into_iter().next())
    }

    async fn categories(&self, user_id: Uuid) -> Result<Vec<Category>, CoreError> {
        let query = [Self::user_filter(user_id), ("order", "name.asc".into())];
        self.fetch_rows("categories", &query).await
    }

    async fn insert_transaction(&self, transaction: Transaction) -> Result<(), CoreError> {
        self.insert_row("transactions", &transaction).await
    }

    async fn insert_category(&self, category: Category) -> Result<(), CoreError> {
        self.insert_row("categories", &category).await
    }

    async fn insert_goal(&self, goal: FinancialGoal) -> Result<(), CoreError> {
        self.insert_row("financial_goals", &goal).await
    }

    async fn insert_story(&self, story: Story) -> Result<(), CoreError> {
        self.insert_row("stories", &story).await
    }

    async fn update_goal(&self, goal: FinancialGoal) -> Result<(), CoreError> {
        let resp = self
            .authed(self.client.patch(self.table_url("financial_goals")))
            .query(&[("id", format!("eq.{}", goal.id))])
            .header("Prefer", "return=representation")
            .json(&goal)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!("financial_goals update returned HTTP {status}");
            return Err(CoreError::Store {
                store: STORE_NAME.into(),
                message: format!("financial_goals update returned HTTP {status}"),
            });
        }

        // PATCH against a missing row succeeds with an empty result set.
        let updated: Vec<FinancialGoal> = resp.json().await.map_err(|e| CoreError::Store {
            store: STORE_NAME.into(),
            message: format!("Failed to parse financial_goals update response: {e}"),
        })?;
        if updated.is_empty() {
            return Err(CoreError::GoalNotFound(goal.id.to_string()));
        }
        Ok(())
    }
}
