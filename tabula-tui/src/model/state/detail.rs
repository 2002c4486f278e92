//! 详情标签页状态（每条记录一个值编辑器）

use tabula_core::{DetailSession, Record};

/// 一个打开的详情标签页
#[derive(Debug)]
pub struct DetailTab {
    /// 值编辑会话（按记录 ID 绑定）
    pub session: DetailSession,
    /// 值列表当前选中的索引
    pub selected: usize,
}

impl DetailTab {
    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.session.is_empty() && self.selected < self.session.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.session.is_empty() {
            self.selected = self.session.len() - 1;
        }
    }

    /// 收敛选中索引（删除行之后调用）
    pub fn clamp_selection(&mut self) {
        if self.selected >= self.session.len() {
            self.selected = self.session.len().saturating_sub(1);
        }
    }
}

/// 详情标签页集合状态
///
/// 标签页按记录 ID 绑定（而不是按名称派生的键），
/// 因此重命名不会让标签页失联。
#[derive(Debug, Default)]
pub struct DetailState {
    /// 已打开的标签页（打开顺序）
    pub tabs: Vec<DetailTab>,
    /// 当前激活的标签页索引
    pub active: usize,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// 打开一条记录的详情标签页。
    ///
    /// 若该记录已有标签页则只激活它（不会重复创建）；
    /// 否则从记录当前的值列表惰性创建会话。
    pub fn open(&mut self, record: &Record) {
        if let Some(pos) = self.position_of(&record.id) {
            self.active = pos;
            return;
        }
        self.tabs.push(DetailTab {
            session: DetailSession::open(record),
            selected: 0,
        });
        self.active = self.tabs.len() - 1;
    }

    /// 某条记录的标签页位置
    pub fn position_of(&self, record_id: &str) -> Option<usize> {
        self.tabs
            .iter()
            .position(|tab| tab.session.record_id() == record_id)
    }

    /// 当前激活的标签页
    pub fn active_tab(&self) -> Option<&DetailTab> {
        self.tabs.get(self.active)
    }

    /// 当前激活的标签页（可变）
    pub fn active_tab_mut(&mut self) -> Option<&mut DetailTab> {
        self.tabs.get_mut(self.active)
    }

    /// 关闭当前激活的标签页，丢弃其会话
    pub fn close_active(&mut self) {
        if self.active < self.tabs.len() {
            self.tabs.remove(self.active);
            self.clamp_active();
        }
    }

    /// 关闭某条记录的标签页（按 ID 查找）。
    /// 记录被删除时调用；没有对应标签页则无副作用。
    pub fn close_for(&mut self, record_id: &str) {
        if let Some(pos) = self.position_of(record_id) {
            self.tabs.remove(pos);
            if self.active > pos {
                self.active -= 1;
            }
            self.clamp_active();
        }
    }

    /// 激活下一个标签页（循环）
    pub fn next_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + 1) % self.tabs.len();
        }
    }

    /// 激活上一个标签页（循环）
    pub fn prev_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
        }
    }

    fn clamp_active(&mut self) {
        if self.active >= self.tabs.len() {
            self.active = self.tabs.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::Record;

    fn records() -> Vec<Record> {
        vec![
            Record::new("David", vec!["rick".into(), "ky".into(), "na".into()]),
            Record::new("James", vec!["ro".into()]),
        ]
    }

    #[test]
    fn opening_twice_activates_the_existing_tab() {
        let rs = records();
        let mut state = DetailState::new();

        state.open(&rs[0]);
        state.open(&rs[1]);
        assert_eq!(state.tabs.len(), 2);
        assert_eq!(state.active, 1);

        // re-open the first record: no new tab, just activation
        state.open(&rs[0]);
        assert_eq!(state.tabs.len(), 2);
        assert_eq!(state.active, 0);
    }

    #[test]
    fn close_for_removes_the_bound_tab() {
        let rs = records();
        let mut state = DetailState::new();
        state.open(&rs[0]);
        state.open(&rs[1]);

        state.close_for(&rs[0].id);

        assert_eq!(state.tabs.len(), 1);
        assert_eq!(state.active, 0);
        assert_eq!(state.active_tab().unwrap().session.record_id(), rs[1].id);
    }

    #[test]
    fn close_for_unknown_record_has_no_tab_side_effect() {
        let rs = records();
        let mut state = DetailState::new();
        state.open(&rs[0]);

        state.close_for("nonexistent");

        assert_eq!(state.tabs.len(), 1);
        assert_eq!(state.active, 0);
    }

    #[test]
    fn session_maps_record_values_on_first_open() {
        let rs = records();
        let mut state = DetailState::new();
        state.open(&rs[0]);

        let tab = state.active_tab().unwrap();
        assert_eq!(tab.session.values(), vec!["rick", "ky", "na"]);
    }

    #[test]
    fn closing_the_active_tab_moves_activation_left() {
        let rs = records();
        let mut state = DetailState::new();
        state.open(&rs[0]);
        state.open(&rs[1]);
        assert_eq!(state.active, 1);

        state.close_active();

        assert_eq!(state.tabs.len(), 1);
        assert_eq!(state.active, 0);
    }
}
