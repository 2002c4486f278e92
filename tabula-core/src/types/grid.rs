//! 多行文本网格行类型定义

use serde::{Deserialize, Serialize};

/// 可编辑网格中的一行；`value` 可以包含字面的换行符
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridRow {
    /// 行名称
    pub name: String,
    /// 多行文本值
    pub value: String,
}

impl GridRow {
    /// 创建一行
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// 值的显示行数（按字面换行符拆分，空值算一行）
    pub fn line_count(&self) -> usize {
        self.value.lines().count().max(1)
    }
}
