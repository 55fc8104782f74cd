/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 后端服务基础 URL
    pub server_base_url: String,
    /// HTTP 请求超时（秒）
    pub http_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 是否记录诊断日志（false 时诊断通道为空实现）
    pub record_diagnostics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_base_url: "http://127.0.0.1:8000".to_string(),
            http_timeout_secs: 120,
            verbose_logging: false,
            record_diagnostics: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            server_base_url: std::env::var("INTERSECTION_SERVER_URL").unwrap_or(default.server_base_url),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.http_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            record_diagnostics: std::env::var("RECORD_DIAGNOSTICS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.record_diagnostics),
        }
    }
}
