//! 英文翻译 (en-US)

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
        add: "Add",
        edit: "Edit",
        delete: "Delete",
        rename: "Rename",
        cancel: "Cancel",
        save: "Save",
        confirm: "Confirm",
        close: "Close",
        quit: "Quit",
        no_data: "No data",
        error: "Error",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        navigate: "Navigate",
        switch_panel: "Switch panel",
        switch_option: "Switch",
        open: "Open",
        back: "Back",
        filter: "Filter: type to search",
        clear_filter: "Clear filter",
        sync: "Sync",
        close_tab: "Close tab",
        switch_tab: "Switch tab",
        commit: "Save",
        newline: "New line",
        help: "Help",
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        home: "Home",
        lists: "Lists",
        grid: "Grid",
        settings: "Settings",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    home: HomeTexts {
        welcome: "Welcome to Tabula",
        description: "A master/detail record editor and a multi-line cell grid.",
        hint: "Use Tab to switch panels, ↑↓ to navigate, Enter to open a page.",
    },

    lists: ListsTexts {
        master_title: "Records",
        detail_title: "Details",
        filter_label: "Filter",
        no_records: "No records. Press Alt+a to add one.",
        no_match: "No records match the filter.",
        no_tabs: "Select a record and press Enter to open it here.",
        no_values: "No values. Press Alt+a to add one.",
        synced: "Values synced to record",
    },

    grid: GridTexts {
        title: "Data Grid",
        name_column: "Name",
        value_column: "Value",
        editing_hint: "Editing: Ctrl+s save, Esc cancel, Enter inserts a new line",
        markup_preview: "Markup",
        empty_rejected: "Value cannot be empty",
        saved: "Cell saved",
        cancelled: "Edit cancelled",
    },

    settings: SettingsTexts {
        title: "Settings",
        language: "Language",
        theme: "Theme",
        theme_dark: "Dark",
        theme_light: "Light",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        rename_title: "Rename Record",
        rename_label: "Name",
        add_value_title: "Add Value",
        edit_value_title: "Edit Value",
        value_label: "Value",
        confirm_delete_title: "Confirm Delete",
        confirm_delete_record: "Delete record",
        confirm_delete_value: "Delete value",
        name_required: "Name cannot be empty",
        value_required: "Value cannot be empty",
        input_hint: "Enter confirm · Esc cancel",
        error_title: "Error",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        record_added: "Record added",
        record_renamed: "Record renamed",
        record_deleted: "Record deleted",
        value_added: "Value added",
        value_updated: "Value updated",
        value_deleted: "Value deleted",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global_section: "Global",
        lists_section: "Lists page",
        grid_section: "Grid page",
        global_keys: "Tab switch panel · ↑↓ navigate · Enter confirm · Esc back · Alt+q quit",
        lists_keys: "Alt+a add · Alt+e edit · Alt+r rename · Alt+d delete · Alt+s sync · Alt+w close tab · [ ] switch tab",
        grid_keys: "Enter edit cell · Ctrl+s save · Esc cancel",
        close_hint: "Press Esc or Enter to close",
    },
};
