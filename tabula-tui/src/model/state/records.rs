//! 主列表页面状态（名称列表 + 过滤输入框）

use std::time::{Duration, Instant};

use tabula_core::{Record, RecordStore};

/// 过滤输入的防抖窗口：输入停顿这么久之后才真正应用过滤
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(300);

/// 名称过滤输入框状态
///
/// `input` 随按键即时变化；`applied` 是上一次真正生效的查询串。
/// 每次按键都会重置 `pending_since`，后一次按键隐式取代前一次的
/// 待应用窗口。
#[derive(Debug, Default)]
pub struct FilterState {
    /// 输入框当前内容
    pub input: String,
    /// 已应用到列表的查询串
    pub applied: String,
    /// 最近一次输入的时间；`None` 表示没有待应用的变更
    pub pending_since: Option<Instant>,
}

impl FilterState {
    /// 是否有输入尚未生效
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }
}

/// 主列表页面状态
pub struct RecordsState {
    /// 记录存储（始终按名称升序）
    pub store: RecordStore,
    /// 过滤输入框
    pub filter: FilterState,
    /// 过滤后的可见记录 ID（显示顺序）
    pub visible: Vec<String>,
    /// 当前选中的可见索引
    pub selected: usize,
}

impl RecordsState {
    /// 从记录存储创建状态
    pub fn new(store: RecordStore) -> Self {
        let mut state = Self {
            store,
            filter: FilterState::default(),
            visible: Vec::new(),
            selected: 0,
        };
        state.refresh();
        state
    }

    /// 重新计算可见列表并收敛选中索引
    pub fn refresh(&mut self) {
        self.visible = self.store.filtered_ids(&self.filter.applied);
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }

    /// 当前选中的记录 ID
    pub fn selected_id(&self) -> Option<&str> {
        self.visible.get(self.selected).map(String::as_str)
    }

    /// 当前选中的记录
    pub fn selected_record(&self) -> Option<&Record> {
        self.selected_id().and_then(|id| self.store.get(id))
    }

    /// 按 ID 选中记录（不可见时保持原选中）
    pub fn select_id(&mut self, id: &str) {
        if let Some(pos) = self.visible.iter().position(|v| v == id) {
            self.selected = pos;
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.visible.is_empty() && self.selected < self.visible.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.visible.is_empty() {
            self.selected = self.visible.len() - 1;
        }
    }

    /// 新增空白记录并选中它（若过滤把它挡住则选中不变）
    pub fn add_record(&mut self) -> String {
        let id = self.store.add();
        self.refresh();
        self.select_id(&id);
        id
    }

    /// 追加一个过滤字符
    pub fn push_filter_char(&mut self, ch: char, now: Instant) {
        self.filter.input.push(ch);
        self.filter.pending_since = Some(now);
    }

    /// 删除一个过滤字符
    pub fn pop_filter_char(&mut self, now: Instant) {
        if self.filter.input.pop().is_some() {
            self.filter.pending_since = Some(now);
        }
    }

    /// 清空过滤，立即生效
    pub fn clear_filter(&mut self) {
        self.filter.input.clear();
        self.filter.applied.clear();
        self.filter.pending_since = None;
        self.refresh();
    }

    /// 防抖时钟：输入停顿超过 [`FILTER_DEBOUNCE`] 时应用过滤。
    /// 返回是否发生了应用。
    pub fn tick_filter(&mut self, now: Instant) -> bool {
        let Some(since) = self.filter.pending_since else {
            return false;
        };
        if now.duration_since(since) < FILTER_DEBOUNCE {
            return false;
        }
        self.filter.applied = self.filter.input.clone();
        self.filter.pending_since = None;
        self.refresh();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::Record;

    fn state() -> RecordsState {
        RecordsState::new(RecordStore::from_records(vec![
            Record::new("James", vec![]),
            Record::new("David", vec![]),
            Record::new("Taylor", vec![]),
        ]))
    }

    #[test]
    fn filter_applies_only_after_the_debounce_window() {
        let mut s = state();
        let base = Instant::now();

        s.push_filter_char('d', base);
        assert!(!s.tick_filter(base + Duration::from_millis(100)));
        assert_eq!(s.visible.len(), 3); // not applied yet

        assert!(s.tick_filter(base + Duration::from_millis(301)));
        assert_eq!(s.visible.len(), 1); // only David matches 'd'
    }

    #[test]
    fn later_keystroke_supersedes_the_pending_window() {
        let mut s = state();
        let base = Instant::now();

        s.push_filter_char('d', base);
        // second keystroke 200ms later resets the window
        s.push_filter_char('a', base + Duration::from_millis(200));

        // 301ms after the first keystroke, only 101ms after the second
        assert!(!s.tick_filter(base + Duration::from_millis(301)));
        // 300ms after the second keystroke it fires, with the full input
        assert!(s.tick_filter(base + Duration::from_millis(501)));
        assert_eq!(s.filter.applied, "da");
        assert_eq!(s.visible.len(), 1);
    }

    #[test]
    fn clearing_restores_the_full_list_immediately() {
        let mut s = state();
        let base = Instant::now();

        s.push_filter_char('x', base);
        s.tick_filter(base + Duration::from_millis(301));
        assert!(s.visible.is_empty());

        s.clear_filter();
        assert_eq!(s.visible.len(), 3);
        assert!(!s.filter.is_pending());
    }

    #[test]
    fn add_record_selects_the_new_entry() {
        let mut s = state();
        let id = s.add_record();

        assert_eq!(s.selected_id(), Some(id.as_str()));
        // "New Item" sorts between James and Taylor
        assert_eq!(s.selected, 2);
    }

    #[test]
    fn selection_clamps_when_the_visible_list_shrinks() {
        let mut s = state();
        s.select_last();
        let id = s.visible[2].clone();

        s.store.remove(&id).unwrap();
        s.refresh();

        assert_eq!(s.selected, 1);
    }
}
