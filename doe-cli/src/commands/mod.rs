pub mod check_webhook;
pub mod generate;
pub mod list_types;
