//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::state::{DeleteTarget, Modal};
use crate::model::App;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::RenameRecord { name, error, .. } => {
            let texts = t();
            render_input(
                frame,
                texts.modal.rename_title,
                texts.modal.rename_label,
                name,
                error.as_deref(),
            );
        }
        Modal::ValueInput {
            index, text, error, ..
        } => {
            let texts = t();
            let title = if index.is_some() {
                texts.modal.edit_value_title
            } else {
                texts.modal.add_value_title
            };
            render_input(frame, title, texts.modal.value_label, text, error.as_deref());
        }
        Modal::ConfirmDelete { .. } => render_confirm_delete(frame, modal),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染单行文本输入弹窗（重命名 / 值输入通用）
fn render_input(frame: &mut Frame, title: &str, label: &str, value: &str, error: Option<&str>) {
    let texts = t();
    let area = centered_rect(50, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let mut lines = vec![
        Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
        // 输入内容 + 光标
        Line::styled(format!("  {value}▎"), Style::default().fg(Color::Cyan)),
        Line::from(""),
    ];

    if let Some(err) = error {
        lines.push(Line::styled(
            format!("  {err}"),
            Style::default().fg(Color::Red),
        ));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("  {}", texts.modal.input_hint),
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, modal: &Modal) {
    let Modal::ConfirmDelete {
        target,
        name,
        focus,
    } = modal
    else {
        return;
    };

    let texts = t();
    let area = centered_rect(44, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.confirm_delete_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let cancel_style = if *focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let confirm_style = if *focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let question = match target {
        DeleteTarget::Record { .. } => texts.modal.confirm_delete_record,
        DeleteTarget::Value { .. } => texts.modal.confirm_delete_value,
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {question} ?"),
            Style::default().fg(Color::White),
        ),
        Line::styled(format!("  \"{name}\""), Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.delete), confirm_style),
        ]),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let texts = t();
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 2, area.width - 4, area.height - 4);

    let lines = vec![
        Line::styled(message, Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(
            texts.help.close_hint,
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let area = centered_rect(72, 14, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let section_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::styled(texts.help.global_section, section_style),
        Line::styled(
            format!("  {}", texts.help.global_keys),
            Style::default().fg(Color::White),
        ),
        Line::from(""),
        Line::styled(texts.help.lists_section, section_style),
        Line::styled(
            format!("  {}", texts.help.lists_keys),
            Style::default().fg(Color::White),
        ),
        Line::from(""),
        Line::styled(texts.help.grid_section, section_style),
        Line::styled(
            format!("  {}", texts.help.grid_keys),
            Style::default().fg(Color::White),
        ),
        Line::from(""),
        Line::styled(
            texts.help.close_hint,
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
