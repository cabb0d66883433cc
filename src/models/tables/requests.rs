use serde::Deserialize;
use std::collections::BTreeMap;
use ts_rs::TS;
use uuid::Uuid;

use crate::models::common::PaginationQuery;

// 表格查询参数（来自HTTP请求），缺省的字段沿用会话中的值
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct TableQuery {
    #[ts(optional)]
    pub session: Option<Uuid>,
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[ts(optional)]
    pub search: Option<String>,
    // 排序列，传空字符串取消排序
    #[ts(optional)]
    pub sort: Option<String>,
    #[ts(optional)]
    pub desc: Option<bool>,
    // 筛选对话框条件，格式 field:value;field:value
    #[ts(optional)]
    pub filters: Option<String>,
}

impl TableQuery {
    /// 解析筛选条件，缺少冒号的片段忽略
    pub fn dialog_filters(&self) -> Option<BTreeMap<String, String>> {
        let raw = self.filters.as_deref()?;
        Some(
            raw.split(';')
                .filter_map(|pair| pair.split_once(':'))
                .map(|(field, value)| (field.trim().to_string(), value.trim().to_string()))
                .filter(|(field, _)| !field.is_empty())
                .collect(),
        )
    }
}

// 切换列显示
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct ColumnVisibilityRequest {
    pub visible: bool,
}

// 行选择：指定 row_id 选择单行，all_on_page 为 true 时作用于当前页全部行
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct RowSelectionRequest {
    #[ts(optional)]
    pub row_id: Option<String>,
    #[serde(default)]
    pub all_on_page: bool,
    pub selected: bool,
}

// 删除确认参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct RemoveQuery {
    #[ts(optional)]
    pub confirm: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_filters_parsing() {
        let query = TableQuery {
            filters: Some("division_id:B; status : active;broken;:x".to_string()),
            ..TableQuery::default()
        };
        let filters = query.dialog_filters().unwrap();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters["division_id"], "B");
        assert_eq!(filters["status"], "active");
    }

    #[test]
    fn test_missing_filters_keep_session_value() {
        assert!(TableQuery::default().dialog_filters().is_none());
        let cleared = TableQuery {
            filters: Some(String::new()),
            ..TableQuery::default()
        };
        assert_eq!(cleared.dialog_filters(), Some(BTreeMap::new()));
    }
}
