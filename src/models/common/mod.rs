pub mod error_code;
pub mod pagination;
pub mod parse;
pub mod response;
pub mod status;

pub use error_code::ErrorCode;
pub use pagination::{PaginationInfo, PaginationQuery};
pub use response::ApiResponse;
pub use status::{ActiveStatus, EnrollmentStatus};
