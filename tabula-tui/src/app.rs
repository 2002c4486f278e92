//! 应用主循环
//!
//! 每轮循环：
//!     tick        → 推进时间相关状态（过滤防抖）
//!     draw        → View 层渲染
//!     after_render→ 编辑器首次渲染后应用暂存的增长高度
//!     poll        → 等待输入（100ms 超时）
//!     update      → 消费消息，修改 Model

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    // 初始终端尺寸先进 Model，网格测量依赖真实宽度
    let size = terminal.size()?;
    update::update(app, AppMessage::Resize(size.width, size.height));

    loop {
        // 1. 时钟步进（过滤防抖等）
        update::tick(app);

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 渲染完成，编辑器算挂载完毕
        update::after_render(app);

        // 4. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 5. 轮询事件（100ms 超时，超时后继续下一轮 tick）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
