//! 筛选对话框描述

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use ts_rs::TS;

use super::column::{ColumnDef, find_column};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub enum FilterFieldKind {
    Input,
    Select,
}

/// 对话框中的一个筛选项，`field` 为对应的列 ID
#[derive(Debug, Clone)]
pub struct FilterField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FilterFieldKind,
    pub field: &'static str,
}

#[derive(Debug, Clone)]
pub struct FilterDialog {
    pub title: &'static str,
    pub data: &'static str,
    pub fields: Vec<FilterField>,
}

// 返回给前端的筛选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct FilterFieldView {
    pub label: String,
    pub placeholder: String,
    pub kind: FilterFieldKind,
    pub field: String,
    // 下拉项：该列已有的取值
    pub options: Vec<String>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct FilterDialogView {
    pub title: String,
    pub heading: String,
    pub fields: Vec<FilterFieldView>,
}

impl FilterDialog {
    /// 结合当前数据与已选条件生成对话框视图
    pub fn resolve<T>(
        &self,
        columns: &[ColumnDef<T>],
        records: &[T],
        current: &std::collections::BTreeMap<String, String>,
    ) -> FilterDialogView {
        let fields = self
            .fields
            .iter()
            .map(|f| {
                // 选项取原始值，与过滤时比较的值一致
                let options = match (f.kind, find_column(columns, f.field)) {
                    (FilterFieldKind::Select, Some(column)) => records
                        .iter()
                        .map(|r| column.value(r).to_string())
                        .filter(|v| !v.is_empty())
                        .collect::<BTreeSet<_>>()
                        .into_iter()
                        .collect(),
                    _ => Vec::new(),
                };
                FilterFieldView {
                    label: f.label.to_string(),
                    placeholder: f.placeholder.to_string(),
                    kind: f.kind,
                    field: f.field.to_string(),
                    options,
                    value: current.get(f.field).cloned().unwrap_or_default(),
                }
            })
            .collect();

        FilterDialogView {
            title: self.title.to_string(),
            heading: format!("{} Filter", self.data),
            fields,
        }
    }
}
