pub mod simulated;
pub mod smtp;
