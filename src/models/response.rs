use serde::{Deserialize, Serialize};

/// 交集计算接口的响应数据结构
///
/// 四个结果字段带 `#[serde(default)]`：后端偶尔会返回结构不完整的
/// 成功响应，解析层不做硬失败，由渲染侧的能力检查兜底
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntersectionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub sender_size: u64,
    #[serde(default)]
    pub receiver_size: u64,
    #[serde(default)]
    pub intersection_size: u64,
    #[serde(default)]
    pub intersection: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntersectionResponse {
    /// 生成用于展示的交集字符串（逗号 + 空格连接）
    pub fn joined_intersection(&self) -> String {
        self.intersection.join(", ")
    }

    /// 成功响应的结构不变量：
    /// 交集大小等于列表长度，且不超过两个输入集合中较小者
    pub fn sizes_consistent(&self) -> bool {
        self.intersection_size == self.intersection.len() as u64
            && self.intersection_size <= self.sender_size.min(self.receiver_size)
    }
}

impl std::fmt::Display for IntersectionResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sender={} receiver={} intersection={}",
            self.sender_size, self.receiver_size, self.intersection_size
        )
    }
}

/// 测试数据生成接口的响应数据结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestSetsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub sender_size: u64,
    #[serde(default)]
    pub receiver_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TestSetsResponse {
    /// 生成用于 test-info 区域展示的摘要文本
    pub fn summary(&self) -> String {
        format!(
            "{} | sender set size: {} | receiver set size: {}",
            self.message, self.sender_size, self.receiver_size
        )
    }
}
