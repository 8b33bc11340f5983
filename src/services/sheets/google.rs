use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;
use yup_oauth2::authenticator::DefaultAuthenticator;
use yup_oauth2::{parse_service_account_key, ServiceAccountAuthenticator};

use super::SheetsProvider;

const SHEETS_API: &str = "https://sheets.googleapis.com/";
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

pub struct GoogleSheetsProvider {
    auth: DefaultAuthenticator,
    client: reqwest::Client,
    spreadsheet_id: String,
    range: String,
}

impl GoogleSheetsProvider {
    /// Builds a service-account authenticator and fetches a first token, so
    /// bad credentials surface at startup rather than on the first booking.
    pub async fn authorize(
        client_email: &str,
        private_key: &str,
        spreadsheet_id: String,
        range: String,
    ) -> anyhow::Result<Self> {
        let key = json!({
            "type": "service_account",
            "client_email": client_email,
            "private_key": private_key,
            "token_uri": TOKEN_URI,
        });
        let key = parse_service_account_key(serde_json::to_vec(&key)?)
            .context("invalid service account credentials")?;

        let auth = ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .context("failed to build service account authenticator")?;

        let provider = Self {
            auth,
            client: reqwest::Client::new(),
            spreadsheet_id,
            range,
        };
        provider.access_token().await?;

        Ok(provider)
    }

    async fn access_token(&self) -> anyhow::Result<String> {
        let token = self
            .auth
            .token(&[SHEETS_SCOPE])
            .await
            .context("failed to obtain Google access token")?;

        token
            .token()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("Google token response carried no access token"))
    }
}

pub fn append_url(base: &str, spreadsheet_id: &str, range: &str) -> anyhow::Result<reqwest::Url> {
    let values_segment = format!("{range}:append");
    let mut url = reqwest::Url::parse(base).context("invalid Sheets API base url")?;
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("Sheets API base url cannot carry a path"))?
        .pop_if_empty()
        .extend(["v4", "spreadsheets", spreadsheet_id, "values", values_segment.as_str()]);
    url.query_pairs_mut()
        .append_pair("valueInputOption", "USER_ENTERED")
        .append_pair("insertDataOption", "INSERT_ROWS");
    Ok(url)
}

#[async_trait]
impl SheetsProvider for GoogleSheetsProvider {
    async fn append_row(&self, values: &[String]) -> anyhow::Result<()> {
        let url = append_url(SHEETS_API, &self.spreadsheet_id, &self.range)?;
        let token = self.access_token().await?;

        let resp = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&json!({ "values": [values] }))
            .send()
            .await
            .context("failed to call Sheets API")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Sheets API error ({}): {}", status, body);
        }

        Ok(())
    }
}
