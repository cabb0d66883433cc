pub mod entities;
pub mod payments;
pub mod system;

pub use entities::EntityService;
pub use payments::PaymentService;
pub use system::SystemService;
