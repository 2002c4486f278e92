//! Tabula TUI
//!
//! 主从记录编辑器 + 多行单元格网格的终端界面。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//!
//! 数据模型与同步语义在 `tabula-core` crate 里。

mod app;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 先加载演示数据；此时终端还没切到备用屏幕，错误能正常打印
    let mut app = model::App::new()?;

    // 2. 初始化终端
    let mut terminal = init_terminal()?;

    // 3. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 4. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 5. 返回结果
    result
}
