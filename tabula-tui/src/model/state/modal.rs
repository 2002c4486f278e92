//! 弹窗/对话框状态

/// 确认删除的目标
#[derive(Debug, Clone)]
pub enum DeleteTarget {
    /// 删除一条主列表记录（连带关闭其标签页）
    Record { id: String },
    /// 删除当前标签页中的一个值（按索引）
    Value { index: usize },
}

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 重命名记录（新增记录后立即打开，预填当前名称）
    RenameRecord {
        /// 记录 ID
        id: String,
        /// 名称输入缓冲
        name: String,
        /// 校验错误信息
        error: Option<String>,
    },
    /// 值输入：`index` 为 `None` 表示新增，否则编辑该行
    ValueInput {
        index: Option<usize>,
        /// 文本输入缓冲
        text: String,
        /// 校验错误信息
        error: Option<String>,
    },
    /// 确认删除
    ConfirmDelete {
        /// 删除目标
        target: DeleteTarget,
        /// 目标的显示名称
        name: String,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 帮助信息
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示重命名弹窗（预填当前名称）
    pub fn show_rename(&mut self, id: &str, current_name: &str) {
        self.active = Some(Modal::RenameRecord {
            id: id.to_string(),
            name: current_name.to_string(),
            error: None,
        });
    }

    /// 显示新增值弹窗
    pub fn show_value_add(&mut self) {
        self.active = Some(Modal::ValueInput {
            index: None,
            text: String::new(),
            error: None,
        });
    }

    /// 显示编辑值弹窗（预填当前文本）
    pub fn show_value_edit(&mut self, index: usize, text: &str) {
        self.active = Some(Modal::ValueInput {
            index: Some(index),
            text: text.to_string(),
            error: None,
        });
    }

    /// 显示确认删除弹窗（默认焦点在“取消”上）
    pub fn show_confirm_delete(&mut self, target: DeleteTarget, name: &str) {
        self.active = Some(Modal::ConfirmDelete {
            target,
            name: name.to_string(),
            focus: 0,
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
