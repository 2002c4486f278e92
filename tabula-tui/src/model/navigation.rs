//! 导航状态定义

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Home,
    Lists,
    Grid,
    Settings,
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Home,
                    icon: "⌂",
                },
                NavItem {
                    id: NavItemId::Lists,
                    icon: "≔",
                },
                NavItem {
                    id: NavItemId::Grid,
                    icon: "▤",
                },
                NavItem {
                    id: NavItemId::Settings,
                    icon: "≡",
                },
            ],
            selected: 0,
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
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.selected = self.items.len() - 1;
        }
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.items.get(self.selected).map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
