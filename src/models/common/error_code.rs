// 业务错误码，写入 ApiResponse.code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    InternalServerError = 1002,

    // 实体记录
    EntityNotFound = 2000,
    EntityCreationFailed = 2001,
    EntityUpdateFailed = 2002,
    EntityRemoveFailed = 2003,
    RemovalConfirmationRequired = 2004,

    // 表格会话
    TableSessionNotFound = 3000,
    TableColumnNotFound = 3001,
    TableColumnNotHidable = 3002,

    // 表单会话
    FormSessionNotFound = 4000,
    FormReadOnly = 4001,
    FormNotEditable = 4002,
    FormSubmitFailed = 4003,

    // 缴费
    PaymentInvalid = 5000,
    PaymentNothingDue = 5001,
    PaymentFailed = 5002,
}
