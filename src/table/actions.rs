//! 行操作菜单与删除确认

use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::{error, info};
use ts_rs::TS;

use super::TableConfig;
use crate::errors::Result;
use crate::models::EntityKind;

/// 各操作是否显示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionVisibility {
    pub add: bool,
    pub view: bool,
    pub edit: bool,
    pub remove: bool,
    pub make_payment: bool,
}

impl Default for ActionVisibility {
    fn default() -> Self {
        Self {
            add: true,
            view: true,
            edit: true,
            remove: true,
            make_payment: false,
        }
    }
}

impl ActionVisibility {
    /// 是否需要渲染行操作菜单
    pub fn any_row_action(&self) -> bool {
        self.view || self.edit || self.remove || self.make_payment
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub enum RowActionKind {
    View,
    Edit,
    Remove,
    MakePayment,
}

// 行操作菜单项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct RowAction {
    pub kind: RowActionKind,
    pub label: String,
    // 前端路由（查看/编辑）或回调接口（删除/缴费）
    pub target: String,
    // 需要用户确认时的提示语
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<String>,
}

pub fn removal_prompt(kind: EntityKind) -> String {
    format!("Are you sure you want to remove this {}?", kind.tag())
}

pub fn payment_target(kind: EntityKind, id: &str) -> String {
    format!("/api/v1/{}/{}/payments", kind.api_segment(), id)
}

/// 生成某一行的操作菜单
pub fn row_actions(kind: EntityKind, config: &TableConfig, id: &str) -> Vec<RowAction> {
    let actions = &config.actions;
    let mut items = Vec::new();

    if !actions.any_row_action() {
        return items;
    }

    if actions.view {
        items.push(RowAction {
            kind: RowActionKind::View,
            label: "View details".to_string(),
            target: kind.view_route(id),
            confirm: None,
        });
    }

    if actions.edit {
        items.push(RowAction {
            kind: RowActionKind::Edit,
            label: format!("Edit {}", kind.tag()),
            target: kind.edit_route(id),
            confirm: None,
        });
    }

    if actions.remove && config.removable {
        items.push(RowAction {
            kind: RowActionKind::Remove,
            label: format!("Remove {}", kind.tag()),
            target: format!("/api/v1/{}/{}", kind.api_segment(), id),
            confirm: Some(removal_prompt(kind)),
        });
    }

    if actions.make_payment && config.payable {
        items.push(RowAction {
            kind: RowActionKind::MakePayment,
            label: "Make Payment".to_string(),
            target: payment_target(kind, id),
            confirm: None,
        });
    }

    items
}

/// 删除操作结果
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    /// 用户取消，未调用删除回调
    Declined,
    Removed,
    /// 回调成功但记录已不存在
    Missing,
    /// 回调失败，表格保持原状
    Failed(String),
}

/// 确认后调用删除回调
///
/// 未确认时不会调用回调；确认后恰好调用一次。回调出错只记录日志并返回 `Failed`。
pub async fn confirm_and_remove<F, Fut>(
    kind: EntityKind,
    id: &str,
    confirmed: bool,
    on_remove: F,
) -> RemoveOutcome
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    if !confirmed {
        info!("Removal of {} {} declined", kind, id);
        return RemoveOutcome::Declined;
    }

    match on_remove(id.to_string()).await {
        Ok(true) => {
            info!("Removed {} {}", kind, id);
            RemoveOutcome::Removed
        }
        Ok(false) => RemoveOutcome::Missing,
        Err(e) => {
            error!("Error removing {} {}: {}", kind, id, e);
            RemoveOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MadrasaError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn config(actions: ActionVisibility, removable: bool, payable: bool) -> TableConfig {
        TableConfig {
            filter_field: "name",
            actions,
            removable,
            payable,
            filter_dialog: None,
        }
    }

    #[test]
    fn test_default_menu() {
        let items = row_actions(
            EntityKind::Student,
            &config(ActionVisibility::default(), true, false),
            "42",
        );
        let kinds: Vec<_> = items.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![RowActionKind::View, RowActionKind::Edit, RowActionKind::Remove]
        );
        assert_eq!(items[0].target, "/students/view-students/42");
        assert_eq!(items[1].target, "/students/edit-students/42");
        assert_eq!(
            items[2].confirm.as_deref(),
            Some("Are you sure you want to remove this student?")
        );
    }

    #[test]
    fn test_remove_requires_callback() {
        let items = row_actions(
            EntityKind::Batch,
            &config(ActionVisibility::default(), false, false),
            "1",
        );
        assert!(items.iter().all(|a| a.kind != RowActionKind::Remove));
    }

    #[test]
    fn test_make_payment_item() {
        let actions = ActionVisibility {
            make_payment: true,
            ..ActionVisibility::default()
        };
        let items = row_actions(EntityKind::Student, &config(actions, true, true), "s1");
        let payment = items
            .iter()
            .find(|a| a.kind == RowActionKind::MakePayment)
            .unwrap();
        assert_eq!(payment.target, "/api/v1/students/s1/payments");
        assert!(payment.confirm.is_none());
    }

    #[test]
    fn test_view_only_menu() {
        let actions = ActionVisibility {
            add: false,
            view: true,
            edit: false,
            remove: false,
            make_payment: false,
        };
        let items = row_actions(EntityKind::Transaction, &config(actions, true, false), "1");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, RowActionKind::View);
    }

    #[test]
    fn test_no_menu_when_all_disabled() {
        let actions = ActionVisibility {
            add: true,
            view: false,
            edit: false,
            remove: false,
            make_payment: false,
        };
        assert!(row_actions(EntityKind::Department, &config(actions, true, true), "1").is_empty());
    }

    #[tokio::test]
    async fn test_declined_removal_never_calls_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let outcome = confirm_and_remove(EntityKind::Student, "1", false, |_| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(true)
            }
        })
        .await;
        assert_eq!(outcome, RemoveOutcome::Declined);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_confirmed_removal_calls_once_with_id() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let outcome = confirm_and_remove(EntityKind::Student, "abc", true, |id| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(id);
                Ok(true)
            }
        })
        .await;
        assert_eq!(outcome, RemoveOutcome::Removed);
        assert_eq!(*seen.lock().unwrap(), vec!["abc".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_removal_is_reported() {
        let outcome = confirm_and_remove(EntityKind::Classroom, "1", true, |_| async {
            Err(MadrasaError::storage_operation("backend down"))
        })
        .await;
        assert!(matches!(outcome, RemoveOutcome::Failed(msg) if msg.contains("backend down")));
    }
}
