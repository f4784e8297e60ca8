pub mod panic_handler;
pub mod trace;
