pub mod email_address;
pub mod form;
mod macros;
pub mod rule;
pub mod submission;
pub mod validation;
