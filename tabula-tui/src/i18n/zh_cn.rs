//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, GridTexts, HelpTexts, HintTexts, HomeTexts, ListsTexts, ModalTexts, NavTexts,
    SettingsTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Tabula",
        add: "新增",
        edit: "编辑",
        delete: "删除",
        rename: "重命名",
        cancel: "取消",
        save: "保存",
        confirm: "确认",
        close: "关闭",
        quit: "退出",
        no_data: "暂无数据",
        error: "错误",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        navigate: "导航",
        switch_panel: "切换面板",
        switch_option: "切换",
        open: "打开",
        back: "返回",
        filter: "过滤：直接输入搜索",
        clear_filter: "清除过滤",
        sync: "同步",
        close_tab: "关闭标签页",
        switch_tab: "切换标签页",
        commit: "保存",
        newline: "换行",
        help: "帮助",
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "菜单",
        home: "主页",
        lists: "列表",
        grid: "网格",
        settings: "设置",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    home: HomeTexts {
        welcome: "欢迎使用 Tabula",
        description: "主从记录编辑器与多行单元格网格。",
        hint: "Tab 切换面板，↑↓ 导航，Enter 打开页面。",
    },

    lists: ListsTexts {
        master_title: "记录",
        detail_title: "详情",
        filter_label: "过滤",
        no_records: "暂无记录，按 Alt+a 新增。",
        no_match: "没有匹配过滤条件的记录。",
        no_tabs: "选中一条记录后按 Enter 在此打开。",
        no_values: "暂无值，按 Alt+a 新增。",
        synced: "值已同步到记录",
    },

    grid: GridTexts {
        title: "数据网格",
        name_column: "名称",
        value_column: "值",
        editing_hint: "编辑中：Ctrl+s 保存，Esc 取消，Enter 插入新行",
        markup_preview: "标记",
        empty_rejected: "值不能为空",
        saved: "单元格已保存",
        cancelled: "已取消编辑",
    },

    settings: SettingsTexts {
        title: "设置",
        language: "语言",
        theme: "主题",
        theme_dark: "深色",
        theme_light: "浅色",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        rename_title: "重命名记录",
        rename_label: "名称",
        add_value_title: "新增值",
        edit_value_title: "编辑值",
        value_label: "值",
        confirm_delete_title: "确认删除",
        confirm_delete_record: "删除记录",
        confirm_delete_value: "删除值",
        name_required: "名称不能为空",
        value_required: "值不能为空",
        input_hint: "Enter 确认 · Esc 取消",
        error_title: "错误",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        record_added: "记录已新增",
        record_renamed: "记录已重命名",
        record_deleted: "记录已删除",
        value_added: "值已新增",
        value_updated: "值已更新",
        value_deleted: "值已删除",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        global_section: "全局",
        lists_section: "列表页",
        grid_section: "网格页",
        global_keys: "Tab 切换面板 · ↑↓ 导航 · Enter 确认 · Esc 返回 · Alt+q 退出",
        lists_keys: "Alt+a 新增 · Alt+e 编辑 · Alt+r 重命名 · Alt+d 删除 · Alt+s 同步 · Alt+w 关闭标签页 · [ ] 切换标签页",
        grid_keys: "Enter 编辑单元格 · Ctrl+s 保存 · Esc 取消",
        close_hint: "按 Esc 或 Enter 关闭",
    },
};
