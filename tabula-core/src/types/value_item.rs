//! 详情视图行类型定义

use serde::{Deserialize, Serialize};

/// 详情视图中的一行：包装记录值列表中的一个字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueItem {
    /// 值文本（非空）
    pub text: String,
}

impl ValueItem {
    /// 包装一个值字符串
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
