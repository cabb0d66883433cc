pub mod actions;
pub mod column;
pub mod dialog;
pub mod state;
pub mod view;

pub use actions::{ActionVisibility, RemoveOutcome, RowAction, RowActionKind, confirm_and_remove};
pub use column::{CellValue, ColumnDef, find_column, render};
pub use dialog::{FilterDialog, FilterDialogView, FilterField, FilterFieldKind};
pub use state::{SortState, TableState};
pub use view::{DataTable, TableView};

/// 表格配置：搜索列、操作菜单、筛选对话框
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub filter_field: &'static str,
    pub actions: ActionVisibility,
    // 是否提供删除回调
    pub removable: bool,
    // 是否提供缴费回调
    pub payable: bool,
    pub filter_dialog: Option<FilterDialog>,
}

impl TableConfig {
    pub fn new(filter_field: &'static str) -> Self {
        Self {
            filter_field,
            actions: ActionVisibility::default(),
            removable: true,
            payable: false,
            filter_dialog: None,
        }
    }

    pub fn with_actions(mut self, actions: ActionVisibility) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_payment(mut self) -> Self {
        self.actions.make_payment = true;
        self.payable = true;
        self
    }

    pub fn with_dialog(mut self, dialog: FilterDialog) -> Self {
        self.filter_dialog = Some(dialog);
        self
    }
}
