//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = split_vertical(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(frame, title_area);

    // 左右分栏布局
    let columns = split_columns(content_area);

    let nav_area = columns[0];
    let page_area = columns[1];

    // 渲染左侧导航
    components::navigation::render(app, frame, nav_area);

    // 渲染右侧内容
    render_page_content(app, frame, page_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 标题栏 / 主内容区 / 状态栏 的纵向切分
fn split_vertical(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(area)
}

/// 导航 / 页面 的横向切分
fn split_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(area)
}

/// 右侧页面区块去掉边框后的内部区域。
///
/// Update 层进入网格编辑前要量只读单元格的高度，
/// 必须和渲染用同一套布局计算，否则量出来的宽度会差一截。
pub fn page_inner(terminal_width: u16, terminal_height: u16) -> Rect {
    let area = Rect::new(0, 0, terminal_width, terminal_height);
    let main_layout = split_vertical(area);
    let columns = split_columns(main_layout[1]);
    Block::default().borders(Borders::ALL).inner(columns[1])
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(" Tabula v0.1.0")
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    // 内容区域的边框
    let is_focused = app.focus.is_content();
    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    // 根据当前页面获取 i18n 标题
    let page_title = match &app.current_page {
        Page::Home => texts.nav.home,
        Page::Lists => texts.nav.lists,
        Page::Grid => texts.grid.title,
        Page::Settings => texts.settings.title,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 根据当前页面渲染具体内容
    match &app.current_page {
        Page::Home => pages::home::render(app, frame, inner_area),
        Page::Lists => pages::lists::render(app, frame, inner_area),
        Page::Grid => pages::grid::render(app, frame, inner_area),
        Page::Settings => pages::settings::render(app, frame, inner_area),
    }
}
