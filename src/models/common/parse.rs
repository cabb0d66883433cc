//! 表单字符串到记录字段的转换

use std::str::FromStr;

use crate::errors::{MadrasaError, Result};

/// 解析枚举类字段
pub fn parse_choice<E>(field: &str, value: &str) -> Result<E>
where
    E: FromStr<Err = String>,
{
    value
        .trim()
        .parse()
        .map_err(|e| MadrasaError::validation(format!("{field}: {e}")))
}

pub fn parse_number(field: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| MadrasaError::validation(format!("{field}: '{value}' is not a number")))
}

/// 解析整数字段，小数部分截断
pub fn parse_whole(field: &str, value: &str) -> Result<u32> {
    let n = parse_number(field, value)?;
    if n < 0.0 || n > u32::MAX as f64 {
        return Err(MadrasaError::validation(format!(
            "{field}: '{value}' is out of range"
        )));
    }
    Ok(n.trunc() as u32)
}

/// 可选文本：空串视为未填写
pub fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// 今天的日期（YYYY-MM-DD）
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
