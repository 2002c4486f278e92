//! 单元格高度测量
//!
//! 网格编辑器在进入编辑前需要知道只读单元格当前渲染出来的高度，
//! 以便把编辑器的最小增长高度设置成同一值。只读单元格由
//! `Paragraph::wrap(Wrap { trim: false })` 渲染，这里按同样的
//! 规则折行：在空白处断行，只有单个词超过列宽时才从词中间断开。

use unicode_width::UnicodeWidthStr;

/// 文本在 `width` 列宽下渲染出的显示行数。
///
/// 每个字面换行符开启新的一行；超宽的行按词边界折行。
/// 空文本也占据一行。
pub fn cell_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let width = usize::from(width);
    let mut total: u16 = 0;

    for line in text.split('\n') {
        total = total.saturating_add(wrapped_rows(line, width));
    }

    total.max(1)
}

/// 单个逻辑行按词折行后占的显示行数
fn wrapped_rows(line: &str, width: usize) -> u16 {
    let mut rows: u16 = 1;
    let mut used = 0usize;
    let mut gap = 0usize;
    let mut at_line_start = true;

    let mut rest = line;
    while !rest.is_empty() {
        let is_space = rest.chars().next().is_some_and(char::is_whitespace);
        let end = rest
            .char_indices()
            .find(|(_, ch)| ch.is_whitespace() != is_space)
            .map_or(rest.len(), |(i, _)| i);
        let (run, tail) = rest.split_at(end);
        rest = tail;
        let run_width = run.width();

        if is_space {
            if at_line_start {
                // 行首空白按原样占宽（trim: false）
                used = run_width.min(width);
                at_line_start = false;
            } else {
                // 词间空白跟随前一个词；在断行处被丢弃
                gap += run_width;
            }
            continue;
        }
        at_line_start = false;

        if used + gap + run_width <= width {
            used += gap + run_width;
        } else if run_width <= width {
            rows += 1;
            used = run_width;
        } else {
            // 超过列宽的词从中间断开
            if used > 0 {
                rows += 1;
            }
            let mut remaining = run_width;
            while remaining > width {
                remaining -= width;
                rows += 1;
            }
            used = remaining;
        }
        gap = 0;
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_occupies_one_row() {
        assert_eq!(cell_height("", 20), 1);
    }

    #[test]
    fn literal_newlines_open_new_rows() {
        assert_eq!(cell_height("Initial text\nwith line breaks", 40), 2);
        assert_eq!(cell_height("a\nb\nc", 40), 3);
    }

    #[test]
    fn wrapping_breaks_at_word_boundaries() {
        assert_eq!(cell_height("aaa bbb ccc ddd", 7), 2);
        // 词不跨行拆开，"world" 整体挪到下一行
        assert_eq!(cell_height("hello world", 8), 2);
    }

    #[test]
    fn overlong_words_break_mid_word() {
        // 10 chars in a 4-wide column -> 3 rows
        assert_eq!(cell_height("abcdefghij", 4), 3);
        // exactly filling the width stays on one row
        assert_eq!(cell_height("abcd", 4), 1);
    }

    #[test]
    fn wide_characters_count_their_display_width() {
        // 4 CJK chars are 8 columns wide -> wraps in a 6-wide column
        assert_eq!(cell_height("数据编辑", 6), 2);
        assert_eq!(cell_height("数据编辑", 8), 1);
    }

    #[test]
    fn newline_plus_wrapping_combine() {
        assert_eq!(cell_height("abcdefgh\nxy", 4), 3);
    }

    #[test]
    fn agrees_with_the_rendered_paragraph_height() {
        use ratatui::backend::TestBackend;
        use ratatui::widgets::{Paragraph, Wrap};
        use ratatui::Terminal;

        let width: u16 = 7;
        let height: u16 = 20;

        for text in [
            "aaa bbb ccc ddd",
            "Initial text\nwith line breaks",
            "supercalifragilistic",
            "a bb ccc dddd",
            "word",
        ] {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            terminal
                .draw(|frame| {
                    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
                    frame.render_widget(paragraph, frame.area());
                })
                .unwrap();

            let buffer = terminal.backend().buffer();
            let rendered = (0..height)
                .rev()
                .find(|&y| {
                    (0..width).any(|x| {
                        buffer
                            .cell((x, y))
                            .is_some_and(|cell| cell.symbol() != " ")
                    })
                })
                .map_or(1, |y| y + 1);

            assert_eq!(cell_height(text, width), rendered, "text: {text:?}");
        }
    }
}
