//! 表格会话状态：搜索、筛选、排序、列显示、行选择、分页
//!
//! 状态只在缓存中短期保存，不做持久化。

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use ts_rs::TS;

use super::column::ColumnDef;

// 排序状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct SortState {
    pub column: String,
    pub desc: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct TableState {
    pub search: String,
    pub dialog_filters: BTreeMap<String, String>,
    pub sorting: Option<SortState>,
    // 仅记录用户切换过的列，未记录的列按默认可见性处理
    pub column_visibility: BTreeMap<String, bool>,
    pub row_selection: BTreeSet<String>,
    pub page: usize,
    pub page_size: usize,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            dialog_filters: BTreeMap::new(),
            sorting: None,
            column_visibility: BTreeMap::new(),
            row_selection: BTreeSet::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// 更新搜索词，变化时回到第一页
    pub fn set_search(&mut self, search: &str) {
        if self.search != search {
            self.search = search.to_string();
            self.page = 1;
        }
    }

    /// 替换筛选对话框条件，空值视为未设置，变化时回到第一页
    pub fn set_dialog_filters(&mut self, filters: BTreeMap<String, String>) {
        let filters: BTreeMap<String, String> = filters
            .into_iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();
        if self.dialog_filters != filters {
            self.dialog_filters = filters;
            self.page = 1;
        }
    }

    pub fn set_sorting(&mut self, column: Option<String>, desc: bool) {
        self.sorting = column.map(|column| SortState { column, desc });
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, size: usize, max: usize) {
        let size = size.clamp(1, max.max(1));
        if self.page_size != size {
            self.page_size = size;
            self.page = 1;
        }
    }

    pub fn is_visible<T>(&self, column: &ColumnDef<T>) -> bool {
        if !column.can_hide() {
            return true;
        }
        self.column_visibility
            .get(column.id)
            .copied()
            .unwrap_or_else(|| column.visible_by_default())
    }

    pub fn set_visibility(&mut self, column: &str, visible: bool) {
        self.column_visibility.insert(column.to_string(), visible);
    }

    pub fn set_row_selected(&mut self, row_id: &str, selected: bool) {
        if selected {
            self.row_selection.insert(row_id.to_string());
        } else {
            self.row_selection.remove(row_id);
        }
    }

    /// 选中或取消当前页的全部行
    pub fn set_page_rows_selected<'a>(
        &mut self,
        row_ids: impl IntoIterator<Item = &'a str>,
        selected: bool,
    ) {
        for id in row_ids {
            self.set_row_selected(id, selected);
        }
    }

    pub fn is_selected(&self, row_id: &str) -> bool {
        self.row_selection.contains(row_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::CellValue;

    struct Row;

    #[test]
    fn test_search_change_resets_page() {
        let mut state = TableState::new(10);
        state.set_page(3);
        state.set_search("ahmed");
        assert_eq!(state.page, 1);

        state.set_page(2);
        state.set_search("ahmed");
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_dialog_filters_drop_blank_values() {
        let mut state = TableState::new(10);
        let mut filters = BTreeMap::new();
        filters.insert("division_id".to_string(), "A".to_string());
        filters.insert("status".to_string(), "  ".to_string());
        state.set_dialog_filters(filters);
        assert_eq!(state.dialog_filters.len(), 1);
        assert_eq!(state.dialog_filters["division_id"], "A");
    }

    #[test]
    fn test_visibility_defaults_and_overrides() {
        let shown: ColumnDef<Row> = ColumnDef::new("name", "Name", |_| CellValue::Empty);
        let hidden: ColumnDef<Row> = ColumnDef::new("phone", "Phone", |_| CellValue::Empty).hidden();
        let pinned: ColumnDef<Row> = ColumnDef::new("id", "ID", |_| CellValue::Empty).pinned();

        let mut state = TableState::new(10);
        assert!(state.is_visible(&shown));
        assert!(!state.is_visible(&hidden));

        state.set_visibility("phone", true);
        state.set_visibility("name", false);
        state.set_visibility("id", false);
        assert!(state.is_visible(&hidden));
        assert!(!state.is_visible(&shown));
        assert!(state.is_visible(&pinned));
    }

    #[test]
    fn test_page_size_is_clamped() {
        let mut state = TableState::new(10);
        state.set_page(4);
        state.set_page_size(500, 100);
        assert_eq!(state.page_size, 100);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_row_selection() {
        let mut state = TableState::new(10);
        state.set_row_selected("1", true);
        state.set_page_rows_selected(["2", "3"], true);
        assert!(state.is_selected("3"));
        state.set_page_rows_selected(["1", "2"], false);
        assert!(!state.is_selected("1"));
        assert!(state.is_selected("3"));
    }
}
