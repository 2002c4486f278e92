//! 列表页面视图（主列表 + 详情标签页）

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, ListsPane};
use crate::view::theme::colors;

/// 渲染列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30), // 主列表
            Constraint::Min(0),     // 详情标签页
        ])
        .split(area);

    render_master(app, frame, columns[0]);
    render_detail(app, frame, columns[1]);
}

/// 窗格边框样式：内容面板有焦点且焦点落在该窗格时高亮
fn pane_border(app: &App, pane: ListsPane) -> Style {
    let c = colors();
    if app.focus.is_content() && app.lists_pane == pane {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    }
}

/// 渲染主列表窗格（过滤输入框 + 名称列表）
fn render_master(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.lists.master_title))
        .borders(Borders::ALL)
        .border_style(pane_border(app, ListsPane::Master));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 过滤输入框
            Constraint::Min(0),    // 记录列表
        ])
        .split(inner);

    // 过滤输入框：防抖窗口内显示 … 提示输入还没生效
    let pending_marker = if app.records.filter.is_pending() {
        "…"
    } else {
        ""
    };
    let filter_line = Line::from(vec![
        Span::styled(
            format!("{}: ", texts.lists.filter_label),
            Style::default().fg(c.muted),
        ),
        Span::styled(
            app.records.filter.input.clone(),
            Style::default().fg(c.fg),
        ),
        Span::styled(pending_marker, Style::default().fg(c.muted)),
    ]);
    frame.render_widget(Paragraph::new(filter_line), rows[0]);

    // 空状态
    if app.records.visible.is_empty() {
        let message = if app.records.store.is_empty() {
            texts.lists.no_records
        } else {
            texts.lists.no_match
        };
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::styled(format!("  {message}"), Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(empty, rows[1]);
        return;
    }

    // 名称列表
    let items: Vec<ListItem> = app
        .records
        .visible
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let name = app
                .records
                .store
                .get(id)
                .map(|record| record.name.as_str())
                .unwrap_or("?");
            let is_selected = i == app.records.selected;
            let has_tab = app.detail.position_of(id).is_some();
            let marker = if has_tab { "●" } else { " " };

            let style = if is_selected {
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(
                format!(" {marker} {name}"),
                style,
            )))
        })
        .collect();

    let list = List::new(items);
    let mut state = ListState::default();
    state.select(Some(app.records.selected));
    frame.render_stateful_widget(list, rows[1], &mut state);
}

/// 渲染详情窗格（标签页栏 + 当前标签页的值列表）
fn render_detail(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.lists.detail_title))
        .borders(Borders::ALL)
        .border_style(pane_border(app, ListsPane::Detail));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.detail.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::styled(
                format!("  {}", texts.lists.no_tabs),
                Style::default().fg(Color::Gray),
            ),
        ]);
        frame.render_widget(empty, inner);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标签页栏
            Constraint::Length(1), // 间隔
            Constraint::Min(0),    // 值列表
        ])
        .split(inner);

    // 标签页标题从存储里按 ID 实时取，重命名立即反映在标签上
    let titles: Vec<Line> = app
        .detail
        .tabs
        .iter()
        .map(|tab| {
            let name = app
                .records
                .store
                .get(tab.session.record_id())
                .map(|record| record.name.as_str())
                .unwrap_or("?");
            Line::from(name.to_string())
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.detail.active)
        .style(Style::default().fg(c.muted))
        .highlight_style(
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, rows[0]);

    let Some(tab) = app.detail.active_tab() else {
        return;
    };

    if tab.session.is_empty() {
        let empty = Paragraph::new(vec![Line::styled(
            format!("  {}", texts.lists.no_values),
            Style::default().fg(Color::Gray),
        )]);
        frame.render_widget(empty, rows[2]);
        return;
    }

    let items: Vec<ListItem> = tab
        .session
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == tab.selected;
            let style = if is_selected {
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(Span::styled(
                format!(" • {}", item.text),
                style,
            )))
        })
        .collect();

    let list = List::new(items);
    let mut state = ListState::default();
    state.select(Some(tab.selected));
    frame.render_stateful_widget(list, rows[2], &mut state);
}
