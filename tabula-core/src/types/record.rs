//! 主列表记录类型定义

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 新建记录的默认名称
pub const DEFAULT_RECORD_NAME: &str = "New Item";

/// 主列表记录：一个命名实体，拥有一个有序的字符串值列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// 记录 ID (UUID)，标签页和删除确认都通过它绑定记录
    pub id: String,
    /// 记录名称（展示用，非空）
    pub name: String,
    /// 有序的值列表
    #[serde(default)]
    pub values: Vec<String>,
}

impl Record {
    /// 创建一条新记录（生成 UUID）
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            values,
        }
    }

    /// 创建一条空白记录（默认名称，无值）
    pub fn blank() -> Self {
        Self::new(DEFAULT_RECORD_NAME, Vec::new())
    }
}
