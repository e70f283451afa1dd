pub mod form;
pub mod gateway;

pub use form::{
    format_card_number, format_expiry_date, sanitize_cvv, FieldError, PaymentField, PaymentForm,
};
pub use gateway::{
    FixedOutcome, OutcomeSource, PaymentError, PaymentGateway, PaymentStatus, Plan, RandomOutcome,
    Receipt, DEFAULT_PROCESSING_DELAY, DEFAULT_SUCCESS_RATE,
};
