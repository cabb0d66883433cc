//! 表单会话状态机
//!
//! ```text
//! ADD:        READY ──submit──▶ SUBMITTING ──ok──▶ NAVIGATED_AWAY
//! EDIT/VIEW:  LOADING ──fetch──▶ READY ...
//! ```
//!
//! 加载失败时会话以默认值进入 READY，并带上错误提示。

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use super::{FieldErrors, FormMode, FormPhase, FormValues, Notification};
use crate::errors::{MadrasaError, Result};
use crate::models::{Entity, EntityKind};
use crate::storage::EntityStorage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct FormSession<F> {
    pub id: Uuid,
    pub kind: EntityKind,
    pub mode: FormMode,
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    pub phase: FormPhase,
    pub values: F,
    pub errors: FieldErrors,
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    pub read_only: bool,
    // 提交成功后跳转的列表路由
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    pub back_route: String,
}

/// 提交结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    Invalid(FieldErrors),
    Saved(T),
    Failed(String),
}

impl<F: FormValues> FormSession<F> {
    pub fn new(kind: EntityKind, mode: FormMode, record_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            mode,
            record_id,
            phase: if mode.needs_record() {
                FormPhase::Loading
            } else {
                FormPhase::Ready
            },
            values: F::default(),
            errors: FieldErrors::new(),
            notification: None,
            read_only: mode == FormMode::View,
            redirect: None,
            back_route: kind.list_route(),
        }
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.read_only {
            return Err(MadrasaError::invalid_state(format!(
                "{} form is read-only",
                self.kind.title()
            )));
        }
        match self.phase {
            FormPhase::Ready => Ok(()),
            FormPhase::NavigatedAway => Err(MadrasaError::invalid_state(
                "Form has already been submitted",
            )),
            phase => Err(MadrasaError::invalid_state(format!(
                "Form is busy ({phase:?})"
            ))),
        }
    }

    /// 合并字段变化并重算派生字段
    ///
    /// `patch` 为字段名到新值的 JSON 对象，未知字段忽略。
    pub fn change(&mut self, patch: serde_json::Value) -> Result<()> {
        self.ensure_editable()?;

        let serde_json::Value::Object(patch) = patch else {
            return Err(MadrasaError::validation("Form changes must be a JSON object"));
        };

        let mut current = serde_json::to_value(&self.values)?;
        if let serde_json::Value::Object(fields) = &mut current {
            for (key, value) in patch {
                if fields.contains_key(&key) {
                    self.errors.0.remove(&key);
                    fields.insert(key, value);
                } else {
                    warn!("Ignoring unknown {} form field '{}'", self.kind, key);
                }
            }
        }

        self.values = serde_json::from_value(current)
            .map_err(|e| MadrasaError::validation(format!("Invalid field value: {e}")))?;
        self.values.derive();
        Ok(())
    }
}

/// 打开表单
///
/// EDIT/VIEW 会按 ID 加载记录；加载失败不会返回错误，而是带错误提示的降级会话。
pub async fn open<T, S>(storage: &S, mode: FormMode, id: Option<String>) -> FormSession<T::Form>
where
    T: Entity,
    S: EntityStorage<T> + ?Sized,
{
    let mut session = FormSession::<T::Form>::new(T::KIND, mode, id.clone());
    if !mode.needs_record() {
        return session;
    }

    let loaded = match id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => storage.fetch_by_id(id).await,
        None => Err(MadrasaError::not_found(format!(
            "No {} id given",
            T::KIND.label()
        ))),
    };

    match loaded {
        Ok(record) => session.values = record.to_form(),
        Err(e) => {
            error!("Failed to load {} {:?}: {}", T::KIND.label(), id, e);
            session.notification = Some(Notification::error(format!(
                "Failed to load {}",
                T::KIND.label()
            )));
        }
    }
    session.phase = FormPhase::Ready;
    session
}

/// 提交表单
///
/// 校验失败停留在 READY；保存成功进入 NAVIGATED_AWAY；保存失败记录日志并回到 READY。
/// 只读会话或已结束的会话返回 `InvalidState`。
pub async fn submit<T, S>(
    session: &mut FormSession<T::Form>,
    storage: &S,
) -> Result<SubmitOutcome<T>>
where
    T: Entity,
    S: EntityStorage<T> + ?Sized,
{
    session.ensure_editable()?;

    session.values.derive();
    let errors = session.values.validate();
    if !errors.is_empty() {
        session.errors = errors.clone();
        return Ok(SubmitOutcome::Invalid(errors));
    }
    session.errors = FieldErrors::new();
    session.notification = None;
    session.phase = FormPhase::Submitting;

    let values = session.values.clone();
    let (result, verb) = match (session.mode, session.record_id.as_deref()) {
        (FormMode::Edit, Some(id)) => (storage.update(id, values).await, "updated"),
        (FormMode::Edit, None) => (
            Err(MadrasaError::not_found(format!(
                "No {} id given",
                T::KIND.label()
            ))),
            "updated",
        ),
        _ => (storage.create(values).await, "created"),
    };

    match result {
        Ok(record) => {
            info!("{} {} {}", T::KIND.title(), record.id(), verb);
            session.record_id = Some(record.id().to_string());
            session.notification = Some(Notification::success(format!(
                "{} {} successfully",
                T::KIND.title(),
                verb
            )));
            session.phase = FormPhase::NavigatedAway;
            session.redirect = Some(T::KIND.list_route());
            Ok(SubmitOutcome::Saved(record))
        }
        Err(e) => {
            error!("Failed to save {}: {}", T::KIND.label(), e);
            session.notification = Some(Notification::error(format!(
                "Failed to save {}",
                T::KIND.label()
            )));
            session.phase = FormPhase::Ready;
            Ok(SubmitOutcome::Failed(e.to_string()))
        }
    }
}
