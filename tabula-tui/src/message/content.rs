//! 内容面板消息类型

use crossterm::event::KeyEvent;

/// 内容面板相关消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 上一项
    SelectPrevious,
    /// 下一项
    SelectNext,
    /// 第一项
    SelectFirst,
    /// 最后一项
    SelectLast,
    /// 确认（打开详情标签页 / 进入网格编辑）
    Confirm,

    // ========== CRUD 操作 ==========
    /// 新增（记录或值，取决于当前窗格）
    Add,
    /// 编辑选中项（主列表为重命名）
    Edit,
    /// 删除选中项（弹出确认）
    Delete,

    // ========== 列表页窗格与标签页 ==========
    /// 焦点移到主列表窗格
    FocusMaster,
    /// 焦点移到详情窗格
    FocusDetail,
    /// 下一个标签页
    NextTab,
    /// 上一个标签页
    PrevTab,
    /// 关闭当前标签页
    CloseTab,
    /// 手动同步当前标签页的值到记录
    SyncValues,

    // ========== 过滤输入框 ==========
    /// 输入一个过滤字符
    FilterChar(char),
    /// 删除一个过滤字符
    FilterBackspace,
    /// 清空过滤
    FilterClear,

    // ========== 网格编辑器 ==========
    /// 把按键交给单元格编辑器
    EditorInput(KeyEvent),
    /// 提交编辑
    CommitEdit,
    /// 取消编辑
    CancelEdit,

    // ========== 设置页面 ==========
    /// 切换到上一个值
    TogglePrev,
    /// 切换到下一个值
    ToggleNext,
}
