//! 首页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    // 首页布局：欢迎信息 + 统计信息
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // 欢迎区域
            Constraint::Min(1),    // 统计区域
        ])
        .split(area);

    // 欢迎信息
    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.welcome),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.description),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("  {}", texts.home.hint),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let welcome_widget = Paragraph::new(welcome);
    frame.render_widget(welcome_widget, layout[0]);

    // 统计信息
    let stats_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    // 记录统计
    let records_block = Block::default()
        .title(format!(" {} ", texts.nav.lists))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let records_content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", app.records.store.len()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", texts.lists.master_title),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(records_block);

    frame.render_widget(records_content, stats_layout[0]);

    // 网格统计
    let grid_block = Block::default()
        .title(format!(" {} ", texts.nav.grid))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let grid_content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", app.grid.rows.len()),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", texts.grid.title),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(grid_block);

    frame.render_widget(grid_content, stats_layout[1]);
}
