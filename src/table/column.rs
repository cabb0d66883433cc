//! 列定义与单元格渲染

use std::cmp::Ordering;
use std::fmt;

/// 列取值结果，排序与搜索都基于它
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn optional_text(value: Option<&str>) -> Self {
        match value {
            Some(v) => CellValue::Text(v.to_string()),
            None => CellValue::Empty,
        }
    }

    /// 不区分大小写的子串匹配
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.to_string()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    /// 排序比较：空值在前，数值按大小，其余按文本
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
            (CellValue::Empty, _) => Ordering::Less,
            (_, CellValue::Empty) => Ordering::Greater,
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (a, b) => a.to_string().cmp(&b.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Empty => Ok(()),
        }
    }
}

pub type Accessor<T> = fn(&T) -> CellValue;
pub type CellRenderer<T> = fn(&T) -> String;

/// 单列定义
pub struct ColumnDef<T> {
    pub id: &'static str,
    pub header: &'static str,
    accessor: Accessor<T>,
    cell: Option<CellRenderer<T>>,
    can_hide: bool,
    visible_by_default: bool,
}

impl<T> ColumnDef<T> {
    pub fn new(id: &'static str, header: &'static str, accessor: Accessor<T>) -> Self {
        Self {
            id,
            header,
            accessor,
            cell: None,
            can_hide: true,
            visible_by_default: true,
        }
    }

    /// 自定义单元格渲染
    pub fn cell(mut self, renderer: CellRenderer<T>) -> Self {
        self.cell = Some(renderer);
        self
    }

    /// 默认隐藏（仍可在列菜单中打开）
    pub fn hidden(mut self) -> Self {
        self.visible_by_default = false;
        self
    }

    /// 固定显示，不出现在列菜单中
    pub fn pinned(mut self) -> Self {
        self.can_hide = false;
        self.visible_by_default = true;
        self
    }

    pub fn can_hide(&self) -> bool {
        self.can_hide
    }

    pub fn visible_by_default(&self) -> bool {
        self.visible_by_default
    }

    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    pub fn render(&self, row: &T) -> String {
        match self.cell {
            Some(renderer) => renderer(row),
            None => self.value(row).to_string(),
        }
    }
}

/// 在列定义中按 ID 查找
pub fn find_column<'a, T>(columns: &'a [ColumnDef<T>], id: &str) -> Option<&'a ColumnDef<T>> {
    columns.iter().find(|c| c.id == id)
}

/// 常用单元格渲染
pub mod render {
    use chrono::{Datelike, NaiveDate};

    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    /// 首字母大写
    pub fn capitalize(value: &str) -> String {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    pub fn money(amount: f64) -> String {
        format!("${amount:.2}")
    }

    pub fn or_dash(value: Option<&str>) -> String {
        match value {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => "-".to_string(),
        }
    }

    /// 学生欠费月份：无则 None，两个以内直接列出，超过两个折叠
    pub fn fees_due(months: &[String]) -> String {
        match months.len() {
            0 => "None".to_string(),
            1 | 2 => months.join(", "),
            n => format!("{}, {} +{} months", months[0], months[1], n - 2),
        }
    }

    /// 由最近缴费日期推出欠费月份名称
    ///
    /// 从缴费月份的下一个月开始计 `due_months` 个月，跨年的月份带上 `'YY` 后缀，
    /// 超过两个时显示为 "Feb, Mar + 1 more"。
    pub fn due_month_names(last_paid_date: Option<&str>, due_months: u32) -> String {
        let Some(date) = last_paid_date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        else {
            return "N/A".to_string();
        };

        // 下一个月，按年 * 12 + 月 计数
        let start = i64::from(date.year()) * 12 + i64::from(date.month0()) + 1;
        let start_year = start.div_euclid(12);

        let name = |offset: u32| {
            let month = start + i64::from(offset);
            let year = month.div_euclid(12);
            let index = month.rem_euclid(12) as usize;
            if year != start_year {
                format!("{} '{:02}", MONTHS[index], year.rem_euclid(100))
            } else {
                MONTHS[index].to_string()
            }
        };

        // 只生成显示的前两个月份
        let shown: Vec<String> = (0..due_months.min(2)).map(name).collect();
        if due_months > 2 {
            format!("{} + {} more", shown.join(", "), due_months - 2)
        } else {
            shown.join(", ")
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_capitalize() {
            assert_eq!(capitalize("active"), "Active");
            assert_eq!(capitalize(""), "");
        }

        #[test]
        fn test_money() {
            assert_eq!(money(100.0), "$100.00");
            assert_eq!(money(175.5), "$175.50");
        }

        #[test]
        fn test_fees_due() {
            assert_eq!(fees_due(&[]), "None");
            let two = vec!["jan".to_string(), "feb".to_string()];
            assert_eq!(fees_due(&two), "jan, feb");
            let four: Vec<String> = ["feb", "mar", "apr", "may"]
                .iter()
                .map(|s| s.to_string())
                .collect();
            assert_eq!(fees_due(&four), "feb, mar +2 months");
        }

        #[test]
        fn test_due_month_names() {
            assert_eq!(due_month_names(Some("2023-10-31"), 2), "Nov, Dec");
            assert_eq!(
                due_month_names(Some("2023-11-30"), 3),
                "Dec, Jan '24 + 1 more"
            );
            assert_eq!(due_month_names(Some("2023-12-15"), 1), "Jan");
            assert_eq!(due_month_names(None, 3), "N/A");
            assert_eq!(due_month_names(Some("garbage"), 3), "N/A");
        }

        #[test]
        fn test_due_month_names_large_counts() {
            assert_eq!(due_month_names(Some("2023-01-31"), 0), "");
            assert_eq!(
                due_month_names(Some("2023-01-31"), 30_000_000),
                "Feb, Mar + 29999998 more"
            );
            assert_eq!(
                due_month_names(Some("2023-01-31"), u32::MAX),
                format!("Feb, Mar + {} more", u32::MAX - 2)
            );
        }
    }
}
