//! 网格页面状态（自动增长的多行文本编辑器）

use crossterm::event::KeyEvent;
use tui_textarea::TextArea;

use tabula_core::GridRow;

/// 编辑器的最大增长高度（行数），与原型的 growMax 对应
pub const GROW_MAX: u16 = 12;

/// 单元格内嵌的多行文本编辑器
pub struct CellEditor {
    /// 文本编辑控件
    pub textarea: TextArea<'static>,
    /// 正在编辑的行索引
    pub row: usize,
    /// 最小增长高度：进入编辑前测得的只读单元格高度
    pub grow_min: u16,
}

impl CellEditor {
    fn new(row: usize, value: &str) -> Self {
        let textarea = TextArea::from(value.lines().map(ToString::to_string));
        Self {
            textarea,
            row,
            grow_min: 1,
        }
    }

    /// 把一个按键交给文本控件处理
    pub fn input(&mut self, key: KeyEvent) {
        self.textarea.input(key);
    }

    /// 编辑器内容（行以字面换行符连接）
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// 编辑器当前应占的显示高度：
    /// 不低于最小增长高度，随内容行数增长，封顶于 [`GROW_MAX`]
    pub fn display_height(&self) -> u16 {
        let lines = u16::try_from(self.textarea.lines().len()).unwrap_or(u16::MAX);
        lines.max(self.grow_min).min(GROW_MAX).max(1)
    }
}

/// 网格页面状态
pub struct GridState {
    /// 数据行
    pub rows: Vec<GridRow>,
    /// 当前选中的行索引
    pub selected: usize,
    /// 打开中的单元格编辑器
    pub editor: Option<CellEditor>,
    /// 待应用的最小增长高度：编辑器尚未挂载（渲染过）时暂存，
    /// 首次渲染之后一次性应用
    pub pending_grow: Option<u16>,
}

impl GridState {
    /// 从数据行创建状态
    pub fn new(rows: Vec<GridRow>) -> Self {
        Self {
            rows,
            selected: 0,
            editor: None,
            pending_grow: None,
        }
    }

    /// 是否正在编辑
    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// 当前选中的行
    pub fn selected_row(&self) -> Option<&GridRow> {
        self.rows.get(self.selected)
    }

    /// 选择上一行
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一行
    pub fn select_next(&mut self) {
        if !self.rows.is_empty() && self.selected < self.rows.len() - 1 {
            self.selected += 1;
        }
    }

    /// 进入编辑：`grow_min` 是编辑前测得的只读单元格高度。
    ///
    /// 控件已经挂载时立即应用高度，换行时重新装入目标单元格的内容；
    /// 否则先创建控件并暂存高度，等首次渲染后应用。
    pub fn begin_edit(&mut self, row: usize, grow_min: u16) {
        let Some(grid_row) = self.rows.get(row) else {
            return;
        };
        if let Some(editor) = &mut self.editor {
            if editor.row != row {
                editor.textarea = TextArea::from(grid_row.value.lines().map(ToString::to_string));
                editor.row = row;
            }
            editor.grow_min = grow_min;
            return;
        }
        self.editor = Some(CellEditor::new(row, &grid_row.value));
        self.pending_grow = Some(grow_min);
    }

    /// 编辑器挂载完成（首次渲染之后调用一次）：
    /// 应用暂存的最小增长高度
    pub fn editor_mounted(&mut self) {
        if let (Some(editor), Some(grow)) = (&mut self.editor, self.pending_grow.take()) {
            editor.grow_min = grow;
        }
    }

    /// 提交编辑：把编辑器内容写回行值。
    /// 空白内容被拒绝，返回 `false` 且保持编辑状态。
    pub fn commit_edit(&mut self) -> bool {
        let Some(editor) = &self.editor else {
            return false;
        };
        let content = editor.content();
        if content.trim().is_empty() {
            return false;
        }
        let row = editor.row;
        if let Some(grid_row) = self.rows.get_mut(row) {
            grid_row.value = content;
        }
        self.editor = None;
        self.pending_grow = None;
        true
    }

    /// 取消编辑，丢弃未提交的内容
    pub fn cancel_edit(&mut self) {
        self.editor = None;
        self.pending_grow = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridState {
        GridState::new(vec![
            GridRow::new("Item 1", "Initial text\nwith line breaks"),
            GridRow::new("Item 2", "single line"),
        ])
    }

    #[test]
    fn begin_edit_defers_grow_until_mounted() {
        let mut g = grid();

        g.begin_edit(0, 4);

        // not yet mounted: the measured height is stashed
        let editor = g.editor.as_ref().unwrap();
        assert_eq!(editor.grow_min, 1);
        assert_eq!(g.pending_grow, Some(4));

        g.editor_mounted();
        let editor = g.editor.as_ref().unwrap();
        assert_eq!(editor.grow_min, 4);
        assert_eq!(g.pending_grow, None);
    }

    #[test]
    fn begin_edit_applies_immediately_when_already_mounted() {
        let mut g = grid();
        g.begin_edit(0, 4);
        g.editor_mounted();

        // retarget while the editor is still up: no deferral
        g.begin_edit(1, 7);

        let editor = g.editor.as_ref().unwrap();
        assert_eq!(editor.grow_min, 7);
        assert_eq!(g.pending_grow, None);
    }

    #[test]
    fn retargeting_the_editor_loads_the_new_cells_content() {
        let mut g = grid();
        g.begin_edit(0, 4);
        g.editor_mounted();

        g.begin_edit(1, 2);

        // the editor now holds row 1's text, not row 0's leftovers
        assert_eq!(g.editor.as_ref().unwrap().content(), "single line");
        assert!(g.commit_edit());
        assert_eq!(g.rows[1].value, "single line");
    }

    #[test]
    fn editor_mounted_applies_only_once() {
        let mut g = grid();
        g.begin_edit(0, 4);
        g.editor_mounted();

        g.editor.as_mut().unwrap().grow_min = 2;
        g.editor_mounted(); // no pending value left

        assert_eq!(g.editor.as_ref().unwrap().grow_min, 2);
    }

    #[test]
    fn display_height_grows_with_content_above_grow_min() {
        let mut g = grid();
        g.begin_edit(0, 3);
        g.editor_mounted();

        // two content lines, grow_min 3 -> stays at 3
        assert_eq!(g.editor.as_ref().unwrap().display_height(), 3);

        // more lines than grow_min -> grows with the content
        let editor = g.editor.as_mut().unwrap();
        editor.textarea = TextArea::from(["a", "b", "c", "d", "e"].map(String::from));
        assert_eq!(editor.display_height(), 5);
    }

    #[test]
    fn commit_writes_back_and_rejects_blank() {
        let mut g = grid();
        g.begin_edit(1, 1);
        g.editor_mounted();

        // blank it out: commit refuses and editing continues
        g.editor.as_mut().unwrap().textarea = TextArea::from(["   ".to_string()]);
        assert!(!g.commit_edit());
        assert!(g.is_editing());

        g.editor.as_mut().unwrap().textarea = TextArea::from(["edited", "text"].map(String::from));
        assert!(g.commit_edit());
        assert!(!g.is_editing());
        assert_eq!(g.rows[1].value, "edited\ntext");
    }

    #[test]
    fn cancel_discards_unsaved_content() {
        let mut g = grid();
        g.begin_edit(0, 2);
        g.editor.as_mut().unwrap().textarea = TextArea::from(["changed".to_string()]);

        g.cancel_edit();

        assert!(!g.is_editing());
        assert_eq!(g.rows[0].value, "Initial text\nwith line breaks");
    }
}
