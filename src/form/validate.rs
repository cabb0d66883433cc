//! 表单字段校验
//!
//! 每个字段只保留第一条错误信息。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid date regex"));

/// 字段错误集合：字段名 → 错误信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct FieldErrors(pub BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|s| s.as_str())
    }

    /// 记录错误；字段已有错误时忽略
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// 合并校验结果
    pub fn check(&mut self, field: &str, result: Result<(), String>) -> &mut Self {
        if let Err(message) = result {
            self.add(field, message);
        }
        self
    }
}

pub fn required(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(message.to_string());
    }
    Ok(())
}

pub fn min_len(value: &str, min: usize, message: &str) -> Result<(), String> {
    if value.chars().count() < min {
        return Err(message.to_string());
    }
    Ok(())
}

pub fn one_of(value: &str, allowed: &[&str]) -> Result<(), String> {
    if !allowed.contains(&value) {
        return Err(format!("Must be one of: {}", allowed.join(", ")));
    }
    Ok(())
}

/// 数值且大于 0
pub fn positive_number(value: &str, required_message: &str, message: &str) -> Result<(), String> {
    required(value, required_message)?;
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(()),
        _ => Err(message.to_string()),
    }
}

/// 数值且不小于 0
pub fn non_negative_number(
    value: &str,
    required_message: &str,
    message: &str,
) -> Result<(), String> {
    required(value, required_message)?;
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(()),
        _ => Err(message.to_string()),
    }
}

/// 可解析为数字时不得超过 max，空值与非数字交给其他校验
pub fn at_most(value: &str, max: f64, message: &str) -> Result<(), String> {
    match value.trim().parse::<f64>() {
        Ok(n) if n > max => Err(message.to_string()),
        _ => Ok(()),
    }
}

pub fn integer_range(value: &str, min: i64, max: i64, message: &str) -> Result<(), String> {
    match value.trim().parse::<i64>() {
        Ok(n) if (min..=max).contains(&n) => Ok(()),
        _ => Err(message.to_string()),
    }
}

/// YYYY-MM-DD 格式的日期
pub fn date(value: &str, required_message: &str) -> Result<(), String> {
    required(value, required_message)?;
    if !DATE_RE.is_match(value.trim())
        || chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_err()
    {
        return Err("Date must be in YYYY-MM-DD format".to_string());
    }
    Ok(())
}
