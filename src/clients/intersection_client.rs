/// 交集服务 API 客户端
///
/// 封装所有与交集计算后端相关的 HTTP 调用
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::config::Config;
use crate::error::{AppResult, TransportError};
use crate::models::submission::{
    FilePart, OutboundSubmission, FIELD_RECEIVER_FILE, FIELD_RECEIVER_SET, FIELD_SENDER_FILE,
    FIELD_SENDER_SET, FIELD_USE_DEFAULT_FILES, USE_DEFAULT_FILES_VALUE,
};
use crate::utils::logging::truncate_text;

/// 未经解释的原始响应
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// 交集服务客户端
pub struct IntersectionClient {
    http: reqwest::Client,
    base_url: String,
}

impl IntersectionClient {
    /// 创建新的交集服务客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.server_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 发送一条出站请求，返回原始响应
    ///
    /// 状态码的含义留给结果解释服务；这里只把网络层失败
    /// 映射为传输错误。不做重试
    pub async fn dispatch(
        &self,
        submission: &OutboundSubmission,
    ) -> Result<RawResponse, TransportError> {
        let endpoint = submission.endpoint();
        match submission {
            OutboundSubmission::Manual {
                sender_set,
                receiver_set,
                ..
            } => {
                let form = Form::new()
                    .text(FIELD_SENDER_SET, sender_set.clone())
                    .text(FIELD_RECEIVER_SET, receiver_set.clone());
                self.post_multipart(endpoint, form).await
            }
            OutboundSubmission::Files {
                sender_file,
                receiver_file,
                use_default_files,
                ..
            } => {
                let mut form = Form::new()
                    .part(FIELD_SENDER_FILE, Self::file_part(sender_file))
                    .part(FIELD_RECEIVER_FILE, Self::file_part(receiver_file));
                if *use_default_files {
                    form = form.text(FIELD_USE_DEFAULT_FILES, USE_DEFAULT_FILES_VALUE);
                }
                self.post_multipart(endpoint, form).await
            }
            OutboundSubmission::TestSets { .. } => self.get(endpoint).await,
        }
    }

    async fn post_multipart(
        &self,
        endpoint: &str,
        form: Form,
    ) -> Result<RawResponse, TransportError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::request_failed(endpoint, e))?;

        Self::into_raw(endpoint, response).await
    }

    async fn get(&self, endpoint: &str) -> Result<RawResponse, TransportError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError::request_failed(endpoint, e))?;

        Self::into_raw(endpoint, response).await
    }

    async fn into_raw(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<RawResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::request_failed(endpoint, e))?;

        debug!("{} -> {}: {}", endpoint, status, truncate_text(&body, 200));

        Ok(RawResponse { status, body })
    }

    fn file_part(part: &FilePart) -> Part {
        Part::bytes(part.content.clone()).file_name(part.file_name.clone())
    }
}
