use crate::config::SupabaseConfig;
use crate::error::{AppError, AppResult};
use crate::models::{NewCallSession, NewTransaction, Transaction, Video};
use reqwest::Client;

/// Thin PostgREST client for the three tables the verifier touches.
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    // Server-side writes go through the service role key when present.
    fn auth_key(&self) -> &str {
        if self.config.service_role_key.is_empty() {
            &self.config.anon_key
        } else {
            &self.config.service_role_key
        }
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.url.trim_end_matches('/'))
    }

    /// First video offered for the given plan, if any.
    pub async fn find_video_for_plan(&self, plan_id: &str) -> AppResult<Option<Video>> {
        let filter = contains_filter(plan_id);
        let response = self
            .client
            .get(self.rest_url("videos"))
            .query(&[
                ("select", "*"),
                ("active_for_plans", filter.as_str()),
                ("limit", "1"),
            ])
            .header("apikey", self.auth_key())
            .bearer_auth(self.auth_key())
            .send()
            .await?;

        if response.status().is_success() {
            let rows: Vec<Video> = response.json().await?;
            Ok(rows.into_iter().next())
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::DatabaseError(format!(
                "Video query failed: {error_text}"
            )))
        }
    }

    pub async fn insert_transaction(&self, transaction: &NewTransaction) -> AppResult<Transaction> {
        let response = self
            .client
            .post(self.rest_url("transactions"))
            .header("apikey", self.auth_key())
            .bearer_auth(self.auth_key())
            .header("Prefer", "return=representation")
            .json(transaction)
            .send()
            .await?;

        if response.status().is_success() {
            let rows: Vec<Transaction> = response.json().await?;
            rows.into_iter().next().ok_or_else(|| {
                AppError::DatabaseError("Transaction insert returned no row".to_string())
            })
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::DatabaseError(format!(
                "Transaction insert failed: {error_text}"
            )))
        }
    }

    pub async fn insert_call_session(&self, session: &NewCallSession) -> AppResult<()> {
        let response = self
            .client
            .post(self.rest_url("sessions"))
            .header("apikey", self.auth_key())
            .bearer_auth(self.auth_key())
            .header("Prefer", "return=minimal")
            .json(session)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::DatabaseError(format!(
                "Session insert failed: {error_text}"
            )))
        }
    }
}

/// PostgREST array-contains filter on `active_for_plans`.
pub(crate) fn contains_filter(plan_id: &str) -> String {
    format!("cs.{{\"{plan_id}\"}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_filter() {
        assert_eq!(contains_filter("10min"), "cs.{\"10min\"}");
    }

    #[test]
    fn test_rest_url_trims_trailing_slash() {
        let client = SupabaseClient::new(SupabaseConfig {
            url: "https://project.supabase.co/".to_string(),
            anon_key: "anon".to_string(),
            service_role_key: String::new(),
        });
        assert_eq!(
            client.rest_url("videos"),
            "https://project.supabase.co/rest/v1/videos"
        );
    }

    #[test]
    fn test_auth_key_prefers_service_role() {
        let mut config = SupabaseConfig {
            url: "https://project.supabase.co".to_string(),
            anon_key: "anon".to_string(),
            service_role_key: String::new(),
        };
        assert_eq!(SupabaseClient::new(config.clone()).auth_key(), "anon");
        config.service_role_key = "service".to_string();
        assert_eq!(SupabaseClient::new(config).auth_key(), "service");
    }
}
