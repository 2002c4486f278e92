//! 网格页面视图（变高行 + 内嵌多行编辑器）

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use tabula_core::markup;

use crate::i18n::t;
use crate::model::App;
use crate::util::cell_height;
use crate::view::layout;
use crate::view::theme::colors;

/// 名称列宽度（含右侧一列间隔）
pub const NAME_COL_WIDTH: u16 = 16;

/// 值列的可用宽度。
///
/// Update 层在进入编辑前用它来量只读单元格的高度，
/// 必须与这里的渲染布局保持一致。
pub fn value_column_width(terminal_size: (u16, u16)) -> u16 {
    let (width, height) = terminal_size;
    let inner = layout::page_inner(width, height);
    inner.width.saturating_sub(NAME_COL_WIDTH + 1).max(1)
}

/// 渲染网格页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 表头
            Constraint::Min(0),    // 数据行
            Constraint::Length(1), // 标记预览
        ])
        .split(area);

    // 表头
    let header = Line::from(vec![
        Span::styled(
            format!("{:<width$}", texts.grid.name_column, width = NAME_COL_WIDTH as usize),
            Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            texts.grid.value_column,
            Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), sections[0]);

    render_rows(app, frame, sections[1]);

    // 选中单元格的标记编码预览（HTML 转义 + <br/> 换行）
    if let Some(row) = app.grid.selected_row() {
        let preview = Line::from(vec![
            Span::styled(
                format!("{}: ", texts.grid.markup_preview),
                Style::default().fg(c.muted),
            ),
            Span::styled(
                markup::display_value(&row.value),
                Style::default().fg(c.muted),
            ),
        ]);
        frame.render_widget(Paragraph::new(preview), sections[2]);
    }
}

/// 逐行渲染：每行高度随内容（或编辑器）变化
fn render_rows(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let value_width = area.width.saturating_sub(NAME_COL_WIDTH + 1).max(1);
    let mut y = area.y;
    let bottom = area.y + area.height;

    for (i, row) in app.grid.rows.iter().enumerate() {
        if y >= bottom {
            break;
        }
        let remaining = bottom - y;

        let editing = app.grid.editor.as_ref().filter(|editor| editor.row == i);

        let height = match editing {
            Some(editor) => editor.display_height(),
            None => cell_height(&row.value, value_width),
        }
        .min(remaining);

        let is_selected = i == app.grid.selected;

        // 名称单元格
        let name_rect = Rect::new(area.x, y, NAME_COL_WIDTH, height);
        let name_style = if is_selected {
            Style::default()
                .bg(c.selected_bg)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };
        frame.render_widget(
            Paragraph::new(row.name.clone()).style(name_style),
            name_rect,
        );

        // 值单元格
        let value_rect = Rect::new(area.x + NAME_COL_WIDTH + 1, y, value_width, height);
        match editing {
            Some(editor) => {
                frame.render_widget(&editor.textarea, value_rect);
            }
            None => {
                let value_style = if is_selected {
                    Style::default().bg(c.selected_bg).fg(c.selected_fg)
                } else {
                    Style::default().fg(c.fg)
                };
                frame.render_widget(
                    Paragraph::new(row.value.clone())
                        .style(value_style)
                        .wrap(Wrap { trim: false }),
                    value_rect,
                );
            }
        }

        y += height;
    }
}
