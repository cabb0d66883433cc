//! 表格视图构建
//!
//! 过滤 → 排序 → 分页，然后按可见列渲染单元格并附上行操作菜单。

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use super::TableConfig;
use super::actions::{RowAction, row_actions};
use super::column::{ColumnDef, find_column};
use super::dialog::FilterDialogView;
use super::state::{SortState, TableState};
use crate::models::{Entity, EntityKind, PaginationInfo};

pub const NO_RESULTS: &str = "No results.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct HeaderCell {
    pub id: String,
    pub label: String,
}

// 列菜单中的显示开关
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct ColumnToggle {
    pub id: String,
    pub label: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct TableRow {
    pub id: String,
    pub selected: bool,
    pub cells: Vec<String>,
    pub actions: Vec<RowAction>,
}

// 无数据时的占位行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct PlaceholderRow {
    pub col_span: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct SearchBox {
    pub field: String,
    pub placeholder: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct TableView {
    pub entity: EntityKind,
    pub search: SearchBox,
    pub headers: Vec<HeaderCell>,
    pub column_toggles: Vec<ColumnToggle>,
    pub rows: Vec<TableRow>,
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlaceholderRow>,
    pub all_page_rows_selected: bool,
    pub selected_count: usize,
    pub show_row_actions: bool,
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_route: Option<String>,
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<SortState>,
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_dialog: Option<FilterDialogView>,
    pub pagination: PaginationInfo,
}

/// 任意实体集合的通用表格
pub struct DataTable<T> {
    kind: EntityKind,
    columns: Vec<ColumnDef<T>>,
    config: TableConfig,
}

impl<T: Entity> DataTable<T> {
    pub fn for_entity() -> Self {
        Self {
            kind: T::KIND,
            columns: T::columns(),
            config: T::table(),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn column(&self, id: &str) -> Option<&ColumnDef<T>> {
        find_column(&self.columns, id)
    }

    /// 按搜索词与筛选条件过滤
    ///
    /// 搜索只作用于配置的过滤列；过滤列不存在时不做搜索过滤。
    pub fn filter<'a>(&self, records: &'a [T], state: &TableState) -> Vec<&'a T> {
        let search = state.search.trim();
        let search_column = if search.is_empty() {
            None
        } else {
            let column = self.column(self.config.filter_field);
            if column.is_none() {
                debug!(
                    "Filter column '{}' not found for {}, search ignored",
                    self.config.filter_field, self.kind
                );
            }
            column
        };

        let dialog_columns: Vec<(&ColumnDef<T>, &str)> = state
            .dialog_filters
            .iter()
            .filter_map(|(field, value)| self.column(field).map(|c| (c, value.trim())))
            .filter(|(_, value)| !value.is_empty())
            .collect();

        records
            .iter()
            .filter(|record| match search_column {
                Some(column) => column.value(record).contains_ignore_case(search),
                None => true,
            })
            .filter(|record| {
                dialog_columns
                    .iter()
                    .all(|(column, value)| column.value(record).contains_ignore_case(value))
            })
            .collect()
    }

    fn sort(&self, rows: &mut [&T], sorting: Option<&SortState>) {
        let Some(sort) = sorting else {
            return;
        };
        let Some(column) = self.column(&sort.column) else {
            return;
        };
        rows.sort_by(|a, b| {
            let ordering = column.value(a).compare(&column.value(b));
            if sort.desc { ordering.reverse() } else { ordering }
        });
    }

    /// 当前页的行（过滤、排序、分页后）
    pub fn page_rows<'a>(&self, records: &'a [T], state: &TableState) -> (Vec<&'a T>, PaginationInfo) {
        let mut rows = self.filter(records, state);
        self.sort(&mut rows, state.sorting.as_ref());
        let pagination = PaginationInfo::compute(rows.len(), state.page, state.page_size);
        let page = rows[pagination.range()].to_vec();
        (page, pagination)
    }

    pub fn render(&self, records: &[T], state: &TableState) -> TableView {
        let visible: Vec<&ColumnDef<T>> = self
            .columns
            .iter()
            .filter(|c| state.is_visible(c))
            .collect();
        let show_row_actions = self.config.actions.any_row_action();

        let (page, pagination) = self.page_rows(records, state);

        let rows: Vec<TableRow> = page
            .iter()
            .map(|record| {
                let id = record.id();
                TableRow {
                    id: id.to_string(),
                    selected: state.is_selected(id),
                    cells: visible.iter().map(|c| c.render(record)).collect(),
                    actions: row_actions(self.kind, &self.config, id),
                }
            })
            .collect();

        // 勾选列 + 可见列 + 操作列
        let placeholder = rows.is_empty().then(|| PlaceholderRow {
            col_span: visible.len() + 1 + usize::from(show_row_actions),
            message: NO_RESULTS.to_string(),
        });

        let all_page_rows_selected = !rows.is_empty() && rows.iter().all(|r| r.selected);

        TableView {
            entity: self.kind,
            search: SearchBox {
                field: self.config.filter_field.to_string(),
                placeholder: format!("Filter {}...", self.config.filter_field),
                value: state.search.clone(),
            },
            headers: visible
                .iter()
                .map(|c| HeaderCell {
                    id: c.id.to_string(),
                    label: c.header.to_string(),
                })
                .collect(),
            column_toggles: self
                .columns
                .iter()
                .filter(|c| c.can_hide())
                .map(|c| ColumnToggle {
                    id: c.id.to_string(),
                    label: c.header.to_string(),
                    visible: state.is_visible(c),
                })
                .collect(),
            rows,
            placeholder,
            all_page_rows_selected,
            selected_count: state.row_selection.len(),
            show_row_actions,
            add_route: self.config.actions.add.then(|| self.kind.add_route()),
            sorting: state.sorting.clone(),
            filter_dialog: self
                .config
                .filter_dialog
                .as_ref()
                .map(|d| d.resolve(&self.columns, records, &state.dialog_filters)),
            pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classrooms::entities::Classroom;
    use crate::models::departments::entities::Department;
    use crate::models::students::entities::Student;
    use crate::models::transactions::entities::Transaction;
    use crate::storage::memory::seed;

    fn departments(names: &[&str]) -> Vec<Department> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Department {
                id: (i + 1).to_string(),
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = departments(&["Quran", "Hadith", "Fiqh", "Quranic Arabic"]);
        let table = DataTable::<Department>::for_entity();
        let mut state = TableState::new(10);
        state.set_search("QURAN");

        let ids: Vec<&str> = table.filter(&records, &state).iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_filter_matches_exact_subset() {
        let records = seed::students();
        let table = DataTable::<Student>::for_entity();
        let mut state = TableState::new(10);
        state.set_search("987");

        let expected: Vec<&str> = records
            .iter()
            .filter(|s| s.phone.to_lowercase().contains("987"))
            .map(|s| s.id.as_str())
            .collect();
        let actual: Vec<&str> = table
            .filter(&records, &state)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_empty_collection_renders_placeholder() {
        let table = DataTable::<Department>::for_entity();
        let view = table.render(&[], &TableState::new(10));
        assert!(view.rows.is_empty());
        let placeholder = view.placeholder.unwrap();
        assert_eq!(placeholder.message, NO_RESULTS);
        // 勾选列 + ID + 名称 + 操作列
        assert_eq!(placeholder.col_span, 4);
        assert!(!view.all_page_rows_selected);
    }

    #[test]
    fn test_no_match_renders_placeholder() {
        let records = departments(&["Quran"]);
        let table = DataTable::<Department>::for_entity();
        let mut state = TableState::new(10);
        state.set_search("zzz");
        let view = table.render(&records, &state);
        assert!(view.rows.is_empty());
        assert!(view.placeholder.is_some());
    }

    #[test]
    fn test_pagination_boundaries() {
        let names: Vec<String> = (1..=23).map(|i| format!("Dept {i}")).collect();
        let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
        let records = departments(&refs);
        let table = DataTable::<Department>::for_entity();

        let mut state = TableState::new(10);
        let first = table.render(&records, &state);
        assert_eq!(first.rows.len(), 10);
        assert!(!first.pagination.can_previous);
        assert!(first.pagination.can_next);

        state.set_page(3);
        let last = table.render(&records, &state);
        assert_eq!(last.rows.len(), 3);
        assert!(last.pagination.can_previous);
        assert!(!last.pagination.can_next);
        assert_eq!(last.rows[0].id, "21");
    }

    #[test]
    fn test_sorting_numbers_by_value() {
        let mut records = seed::classrooms();
        records.reverse();
        let table = DataTable::<Classroom>::for_entity();
        let mut state = TableState::new(10);
        state.set_sorting(Some("grade_id".to_string()), true);
        let view = table.render(&records, &state);
        let grade_index = view.headers.iter().position(|h| h.id == "grade_id").unwrap();
        let grades: Vec<u32> = view
            .rows
            .iter()
            .map(|r| r.cells[grade_index].parse().unwrap())
            .collect();
        let mut sorted = grades.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(grades, sorted);
    }

    #[test]
    fn test_hidden_columns_are_omitted() {
        let records = seed::students();
        let table = DataTable::<Student>::for_entity();
        let mut state = TableState::new(10);

        let view = table.render(&records, &state);
        assert!(view.headers.iter().all(|h| h.id != "phone"));
        let toggle = view.column_toggles.iter().find(|t| t.id == "phone").unwrap();
        assert!(!toggle.visible);

        state.set_visibility("status", false);
        let view = table.render(&records, &state);
        assert!(view.headers.iter().all(|h| h.id != "status"));
        assert_eq!(view.rows[0].cells.len(), view.headers.len());
    }

    #[test]
    fn test_dialog_filters_and_options() {
        let records = seed::classrooms();
        let table = DataTable::<Classroom>::for_entity();
        let mut state = TableState::new(10);
        let mut filters = std::collections::BTreeMap::new();
        filters.insert("division_id".to_string(), "B".to_string());
        state.set_dialog_filters(filters);

        let view = table.render(&records, &state);
        assert!(!view.rows.is_empty());
        assert!(
            table
                .filter(&records, &state)
                .iter()
                .all(|c| c.division_id.as_str() == "B")
        );

        let dialog = view.filter_dialog.unwrap();
        assert_eq!(dialog.heading, "Classrooms Filter");
        let division = dialog.fields.iter().find(|f| f.field == "division_id").unwrap();
        assert!(division.options.contains(&"A".to_string()));
        assert_eq!(division.value, "B");

        let batch = dialog.fields.iter().find(|f| f.field == "class_mode_id").unwrap();
        assert!(batch.options.contains(&"morning".to_string()));
        assert!(!batch.options.contains(&"Morning".to_string()));

        // 选项值直接作为过滤条件可以命中
        let mut filters = std::collections::BTreeMap::new();
        filters.insert("class_mode_id".to_string(), batch.options[0].clone());
        state.set_dialog_filters(filters);
        assert!(!table.filter(&records, &state).is_empty());
    }

    #[test]
    fn test_page_selection_flag() {
        let records = departments(&["Quran", "Hadith"]);
        let table = DataTable::<Department>::for_entity();
        let mut state = TableState::new(10);
        state.set_page_rows_selected(["1", "2"], true);
        let view = table.render(&records, &state);
        assert!(view.all_page_rows_selected);
        assert_eq!(view.selected_count, 2);
    }

    #[test]
    fn test_transactions_hide_add_and_edit() {
        let records = seed::transactions();
        let table = DataTable::<Transaction>::for_entity();
        let view = table.render(&records, &TableState::new(10));
        assert!(view.add_route.is_none());
        assert!(view.show_row_actions);
        assert!(view.rows.iter().all(|r| r.actions.len() == 1));
    }
}
