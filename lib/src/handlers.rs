pub mod on_message;
pub mod on_ready;
