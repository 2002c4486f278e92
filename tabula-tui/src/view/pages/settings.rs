//! 设置页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Theme};

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 14;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let settings = &app.settings;

    let mut lines = vec![Line::from("")];

    // === 语言设置 ===
    lines.push(render_setting_row(
        texts.settings.language,
        settings.language.display_name(),
        settings.selected == 0,
    ));

    // === 主题设置 ===
    let theme_value = match settings.theme {
        Theme::Dark => texts.settings.theme_dark,
        Theme::Light => texts.settings.theme_light,
    };
    lines.push(render_setting_row(
        texts.settings.theme,
        theme_value,
        settings.selected == 1,
    ));

    lines.push(Line::from(""));
    lines.push(Line::from(""));

    // 操作提示
    lines.push(Line::from(vec![
        Span::styled("  ↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {} | ", texts.hints.navigate),
            Style::default().fg(c.muted),
        ),
        Span::styled("←→", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {}", texts.hints.switch_option),
            Style::default().fg(c.muted),
        ),
    ]));

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// 渲染单行设置项
fn render_setting_row<'a>(label: &'a str, value: &'a str, is_selected: bool) -> Line<'a> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let value_style = Style::default()
        .fg(c.highlight)
        .add_modifier(if is_selected {
            Modifier::BOLD
        } else {
            Modifier::empty()
        });

    // 使用 unicode-width 计算显示宽度，中英文标签都能对齐
    let label_padding = LABEL_WIDTH.saturating_sub(label.width());
    let (left_arrow, right_arrow) = if is_selected {
        ("◀ ", " ▶")
    } else {
        ("  ", "  ")
    };

    Line::from(vec![
        Span::styled(format!("{prefix}{label}"), label_style),
        Span::raw(format!("{:width$}", "", width = label_padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(left_arrow, Style::default().fg(Color::Yellow)),
        Span::styled(value, value_style),
        Span::styled(right_arrow, Style::default().fg(Color::Yellow)),
    ])
}
