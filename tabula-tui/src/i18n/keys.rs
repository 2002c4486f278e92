//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `home.*`, `settings.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 主页文本
    pub home: HomeTexts,
    /// 列表页面文本
    pub lists: ListsTexts,
    /// 网格页面文本
    pub grid: GridTexts,
    /// 设置页面文本
    pub settings: SettingsTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    // 操作动词
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub rename: &'static str,
    pub cancel: &'static str,
    pub save: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
    // 状态词
    pub no_data: &'static str,
    pub error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本（动作描述，用于状态栏组合提示）
pub struct HintTexts {
    pub navigate: &'static str,
    pub switch_panel: &'static str,
    pub switch_option: &'static str,
    pub open: &'static str,
    pub back: &'static str,
    pub filter: &'static str,
    pub clear_filter: &'static str,
    pub sync: &'static str,
    pub close_tab: &'static str,
    pub switch_tab: &'static str,
    pub commit: &'static str,
    pub newline: &'static str,
    pub help: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub home: &'static str,
    pub lists: &'static str,
    pub grid: &'static str,
    pub settings: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 主页文本
pub struct HomeTexts {
    pub welcome: &'static str,
    pub description: &'static str,
    pub hint: &'static str,
}

/// 列表页面文本
pub struct ListsTexts {
    pub master_title: &'static str,
    pub detail_title: &'static str,
    pub filter_label: &'static str,
    pub no_records: &'static str,
    pub no_match: &'static str,
    pub no_tabs: &'static str,
    pub no_values: &'static str,
    pub synced: &'static str,
}

/// 网格页面文本
pub struct GridTexts {
    pub title: &'static str,
    pub name_column: &'static str,
    pub value_column: &'static str,
    pub editing_hint: &'static str,
    pub markup_preview: &'static str,
    pub empty_rejected: &'static str,
    pub saved: &'static str,
    pub cancelled: &'static str,
}

/// 设置页面文本
pub struct SettingsTexts {
    pub title: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub rename_title: &'static str,
    pub rename_label: &'static str,
    pub add_value_title: &'static str,
    pub edit_value_title: &'static str,
    pub value_label: &'static str,
    pub confirm_delete_title: &'static str,
    pub confirm_delete_record: &'static str,
    pub confirm_delete_value: &'static str,
    pub name_required: &'static str,
    pub value_required: &'static str,
    pub input_hint: &'static str,
    pub error_title: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub record_added: &'static str,
    pub record_renamed: &'static str,
    pub record_deleted: &'static str,
    pub value_added: &'static str,
    pub value_updated: &'static str,
    pub value_deleted: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_section: &'static str,
    pub lists_section: &'static str,
    pub grid_section: &'static str,
    pub global_keys: &'static str,
    pub lists_keys: &'static str,
    pub grid_keys: &'static str,
    pub close_hint: &'static str,
}
