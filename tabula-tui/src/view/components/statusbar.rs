//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, ListsPane, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let mut hints = Vec::new();

    // 网格编辑器激活时提示完全不同
    if app.current_page == Page::Grid && app.grid.is_editing() {
        hints.push(("Ctrl+s", texts.hints.commit));
        hints.push(("Enter", texts.hints.newline));
        hints.push(("Esc", texts.common.cancel));
        return hints;
    }

    hints.push(("Tab", texts.hints.switch_panel));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", texts.hints.navigate));
            hints.push(("Enter", texts.hints.open));
        }
        FocusPanel::Content => match &app.current_page {
            Page::Home => {
                hints.push(("Esc", texts.hints.back));
            }
            Page::Lists => match app.lists_pane {
                ListsPane::Master => {
                    hints.push(("↑↓", texts.hints.navigate));
                    hints.push(("Enter", texts.hints.open));
                    hints.push(("Alt+a", texts.common.add));
                    hints.push(("Alt+r", texts.common.rename));
                    hints.push(("Alt+d", texts.common.delete));
                    if !app.records.filter.input.is_empty() {
                        hints.push(("Ctrl+u", texts.hints.clear_filter));
                    }
                }
                ListsPane::Detail => {
                    hints.push(("↑↓", texts.hints.navigate));
                    hints.push(("Enter", texts.common.edit));
                    hints.push(("Alt+a", texts.common.add));
                    hints.push(("Alt+d", texts.common.delete));
                    hints.push(("Alt+s", texts.hints.sync));
                    hints.push(("[ ]", texts.hints.switch_tab));
                    hints.push(("Alt+w", texts.hints.close_tab));
                }
            },
            Page::Grid => {
                hints.push(("↑↓", texts.hints.navigate));
                hints.push(("Enter", texts.common.edit));
            }
            Page::Settings => {
                hints.push(("↑↓", texts.hints.navigate));
                hints.push(("←→", texts.hints.switch_option));
            }
        },
    }

    hints.push(("Alt+h", texts.hints.help));
    hints.push(("Alt+q", texts.common.quit));

    hints
}
