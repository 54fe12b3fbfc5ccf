//! HTTP transport for the conference API
//!
//! Every response funnels through [`CongresoClient::handle_response`], which
//! decodes the `{status, message, data?, error?}` envelope exactly once and
//! hands typed payloads (or classified errors) to the resource modules.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::response::{PageData, ResponseDto, STATUS_SUCCESS};

/// HTTP client for the conference API
#[derive(Debug, Clone)]
pub struct CongresoClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl CongresoClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    /// API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(t) => req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", t)),
            None => req,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let resp = self.auth(self.client.get(self.url(path))).send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let resp = self
            .auth(self.client.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let resp = self
            .auth(self.client.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::handle_response(resp).await
    }

    /// GET a paginated search endpoint.
    ///
    /// The legacy search endpoints answer `status: "error"` on HTTP 200 when
    /// nothing matches; that is an empty page, not a failure, and the quirk
    /// is absorbed here so callers only ever see a page.
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<PageData<T>> {
        let resp = self
            .auth(self.client.get(self.url(path)).query(query))
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;
        let dto: ResponseDto<PageData<T>> = Self::parse_envelope(status, &text)?;
        if status.is_success() && dto.status != STATUS_SUCCESS {
            return Ok(PageData::default());
        }
        Ok(dto.into_result(Some(status.as_u16()))?)
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> ClientResult<T> {
        let status = resp.status();
        let text = resp.text().await?;
        let dto: ResponseDto<T> = Self::parse_envelope(status, &text)?;
        Ok(dto.into_result(Some(status.as_u16()))?)
    }

    fn parse_envelope<T: DeserializeOwned>(
        status: reqwest::StatusCode,
        text: &str,
    ) -> ClientResult<ResponseDto<T>> {
        match serde_json::from_str::<ResponseDto<T>>(text) {
            Ok(dto) => Ok(dto),
            // Non-envelope error bodies (proxy errors, plain text) still get
            // classified by status and message.
            Err(_) if !status.is_success() => {
                Err(shared::error::ApiError::classify(Some(status.as_u16()), text).into())
            }
            Err(e) => Err(ClientError::InvalidResponse(format!(
                "failed to parse envelope: {e}"
            ))),
        }
    }
}
