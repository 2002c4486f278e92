//! 设置页面状态

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 设置项数量（语言、主题）
pub const SETTING_COUNT: usize = 2;

/// 设置页面状态
#[derive(Debug, Default)]
pub struct SettingsState {
    /// 当前选中的设置项：0=语言, 1=主题
    pub selected: usize,
    /// 当前语言
    pub language: Language,
    /// 当前主题
    pub theme: Theme,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一个设置项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一个设置项
    pub fn select_next(&mut self) {
        if self.selected < SETTING_COUNT - 1 {
            self.selected += 1;
        }
    }
}
