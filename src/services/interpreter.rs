//! 结果解释服务 - 业务能力层
//!
//! 把一条原始响应分类为成功 / 业务失败 / 传输失败。
//! 非 2xx 响应先在响应体里找结构化的 error 字段，
//! 找不到才退回通用的 "server error <status>" 文案

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::RawResponse;
use crate::error::{AppError, AppResult, InterpretedError, TransportError};
use crate::models::{IntersectionResponse, TestSetsResponse};

/// 结果解释服务
pub struct ResultInterpreter;

impl ResultInterpreter {
    pub fn new() -> Self {
        Self
    }

    /// 解释交集计算响应
    ///
    /// # 返回
    /// 成功时返回结构化结果；业务失败映射为响应中的 error 文案，
    /// 缺失时取 "unknown error"
    pub fn interpret_intersection(&self, raw: &RawResponse) -> AppResult<IntersectionResponse> {
        let response: IntersectionResponse = self.parse_body(raw)?;
        if !response.success {
            return Err(AppError::Interpreted(InterpretedError::Application {
                message: response
                    .error
                    .unwrap_or_else(|| "unknown error".to_string()),
            }));
        }
        Ok(response)
    }

    /// 解释测试数据生成响应
    pub fn interpret_test_sets(&self, raw: &RawResponse) -> AppResult<TestSetsResponse> {
        let response: TestSetsResponse = self.parse_body(raw)?;
        if !response.success {
            return Err(AppError::Interpreted(InterpretedError::Application {
                message: response
                    .error
                    .unwrap_or_else(|| "unknown error".to_string()),
            }));
        }
        Ok(response)
    }

    fn parse_body<T: DeserializeOwned>(&self, raw: &RawResponse) -> AppResult<T> {
        if !(200..300).contains(&raw.status) {
            return Err(AppError::Transport(TransportError::BadStatus {
                status: raw.status,
                message: Self::error_from_body(&raw.body),
            }));
        }
        serde_json::from_str(&raw.body).map_err(|e| {
            AppError::Interpreted(InterpretedError::MalformedPayload {
                source: Box::new(e),
            })
        })
    }

    /// 非 2xx 响应体中可能带有 {"error": "..."} 结构
    fn error_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<Value>(body)
            .ok()?
            .get("error")?
            .as_str()
            .map(str::to_string)
    }
}

impl Default for ResultInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
