use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::PaymentService;
use crate::errors::{MadrasaError, Result};
use crate::form::validate::{self, FieldErrors};
use crate::models::common::parse::today;
use crate::models::payments::requests::MakePaymentRequest;
use crate::models::payments::responses::PaymentResponse;
use crate::models::students::entities::Student;
use crate::models::transactions::entities::{PaymentType, Transaction};
use crate::models::transactions::requests::TransactionForm;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::EntityStorage;
use crate::storage::memory::MemoryStorage;

/// 选定月份的结算结果
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub months: Vec<String>,
    pub amount: f64,
    // 去掉已缴月份后的欠费列表
    pub remaining: Vec<String>,
}

/// 核对缴费月份并计算金额
///
/// 月份不区分大小写、重复的只计一次，且必须全部在欠费列表中。
pub fn settle(fees_due: &[String], months: &[String], monthly_fee: f64) -> Result<Settlement> {
    if fees_due.is_empty() {
        return Err(MadrasaError::invalid_state("All payments completed"));
    }

    let mut selected: Vec<String> = Vec::new();
    for month in months {
        let month = month.trim().to_lowercase();
        if month.is_empty() || selected.contains(&month) {
            continue;
        }
        if !fees_due.iter().any(|due| due.eq_ignore_ascii_case(&month)) {
            return Err(MadrasaError::validation(format!(
                "Month '{month}' is not due"
            )));
        }
        selected.push(month);
    }
    if selected.is_empty() {
        return Err(MadrasaError::validation("Select at least one month to pay"));
    }

    let remaining = fees_due
        .iter()
        .filter(|due| !selected.iter().any(|m| due.eq_ignore_ascii_case(m)))
        .cloned()
        .collect();

    Ok(Settlement {
        amount: selected.len() as f64 * monthly_fee,
        months: selected,
        remaining,
    })
}

pub async fn make_payment(
    service: &PaymentService,
    request: &HttpRequest,
    student_id: String,
    body: MakePaymentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let settings = service.get_settings(request);

    let date = body.payment_date.unwrap_or_else(today);
    let payment_type = body
        .payment_type
        .unwrap_or_else(|| PaymentType::Cash.as_str().to_string());
    let errors = check_payment_details(&date, &payment_type);
    if !errors.is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error(
            ErrorCode::ValidationFailed,
            errors,
            "Validation failed",
        )));
    }

    // 核对与扣除月份在学生集合的写锁内完成，并发缴费不会重复扣同一个月
    let settled = storage
        .modify::<Student, _, _>(&student_id, |student| {
            let settlement = settle(&student.fees_due, &body.months, settings.monthly_fee)?;
            student.fees_due = settlement.remaining.clone();
            Ok((settlement, student.clone()))
        })
        .await;
    let (settlement, student) = match settled {
        Ok(settled) => settled,
        Err(e) if e.is_not_found() => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EntityNotFound,
                "Student not found",
            )));
        }
        Err(e @ MadrasaError::InvalidState(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::from_error(
                ErrorCode::PaymentNothingDue,
                &e,
            )));
        }
        Err(e @ MadrasaError::Validation(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::from_error(
                ErrorCode::PaymentInvalid,
                &e,
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update student: {}", e.message()),
                )),
            );
        }
    };

    let form = TransactionForm {
        date,
        name: student.full_name(),
        student_id: student.admission_no.clone(),
        amount: settlement.amount.to_string(),
        payment_type,
    };
    let transaction = match EntityStorage::<Transaction>::create(storage.as_ref(), form).await {
        Ok(transaction) => transaction,
        Err(e) => {
            error!("Failed to record payment for student {}: {}", student.id, e);
            restore_months(storage.as_ref(), &student.id, &settlement.months).await;
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::PaymentFailed,
                    "Failed to record payment",
                )),
            );
        }
    };

    info!(
        "Student {} paid {} for {:?}",
        student.id, settlement.amount, settlement.months
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(
        PaymentResponse {
            amount: settlement.amount,
            months: settlement.months,
            transaction,
            student,
        },
        "Payment recorded successfully",
    )))
}

// 与学生无关的缴费字段，在扣除月份之前检查
fn check_payment_details(date: &str, payment_type: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check("date", validate::date(date, "Date is required"));
    if !PaymentType::VALUES.contains(&payment_type) {
        errors.add("payment_type", "Please select a payment type");
    }
    errors
}

// 流水写入失败时把已扣除的月份加回欠费列表
async fn restore_months(storage: &MemoryStorage, student_id: &str, months: &[String]) {
    let restored = storage
        .modify::<Student, _, _>(student_id, |student| {
            for month in months {
                if !student.fees_due.iter().any(|due| due.eq_ignore_ascii_case(month)) {
                    student.fees_due.push(month.clone());
                }
            }
            Ok(())
        })
        .await;
    if let Err(e) = restored {
        error!(
            "Failed to restore due months {:?} for student {}: {}",
            months, student_id, e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due(months: &[&str]) -> Vec<String> {
        months.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_settle_subset() {
        let settlement = settle(&due(&["jan", "feb", "mar"]), &due(&["Feb", "jan", "feb"]), 50.0)
            .unwrap();
        assert_eq!(settlement.months, due(&["feb", "jan"]));
        assert_eq!(settlement.amount, 100.0);
        assert_eq!(settlement.remaining, due(&["mar"]));
    }

    #[test]
    fn test_settle_rejects_months_not_due() {
        let err = settle(&due(&["jan"]), &due(&["apr"]), 50.0).unwrap_err();
        assert!(matches!(err, MadrasaError::Validation(_)));
    }

    #[test]
    fn test_settle_requires_a_month() {
        let err = settle(&due(&["jan"]), &due(&[" "]), 50.0).unwrap_err();
        assert!(matches!(err, MadrasaError::Validation(_)));
    }

    #[test]
    fn test_payment_details() {
        assert!(check_payment_details("2024-05-01", "cash").is_empty());
        let errors = check_payment_details("", "cheque");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_nothing_due() {
        let err = settle(&[], &due(&["jan"]), 50.0).unwrap_err();
        assert_eq!(err.message(), "All payments completed");
    }
}
