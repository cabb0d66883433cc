use serde::Deserialize;
use ts_rs::TS;

// 缴费请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct MakePaymentRequest {
    // 本次缴纳的月份，必须是学生欠费月份的子集
    pub months: Vec<String>,
    // 缺省为今天
    pub payment_date: Option<String>,
    // 缺省为现金
    pub payment_type: Option<String>,
}
