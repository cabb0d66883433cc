use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分页查询参数（均为可选，缺省时沿用表格会话中的值）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(default, deserialize_with = "deserialize_optional_usize")]
    #[ts(optional)]
    pub page: Option<usize>,
    #[serde(default, deserialize_with = "deserialize_optional_usize")]
    #[ts(optional)]
    pub size: Option<usize>,
}

// 分页响应信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    // 上一页/下一页按钮是否可用
    pub can_previous: bool,
    pub can_next: bool,
}

impl PaginationInfo {
    /// 计算分页信息，页码从 1 开始，超出范围时落到最后一页
    pub fn compute(total: usize, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size);
        let page = page.clamp(1, total_pages.max(1));

        Self {
            page,
            page_size,
            total,
            total_pages,
            can_previous: page > 1,
            can_next: page < total_pages,
        }
    }

    /// 当前页在结果集中的切片范围
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }
}

// 自定义反序列化函数，支持字符串到usize的转换
fn deserialize_optional_usize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct UsizeVisitor;

    impl<'de> Visitor<'de> for UsizeVisitor {
        type Value = Option<usize>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or a string containing one")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(None)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            usize::try_from(value)
                .map(Some)
                .map_err(|_| Error::invalid_value(Unexpected::Unsigned(value), &self))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            usize::try_from(value)
                .map(Some)
                .map_err(|_| Error::invalid_value(Unexpected::Signed(value), &self))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value.trim().is_empty() {
                return Ok(None);
            }
            value
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(UsizeVisitor)
}
