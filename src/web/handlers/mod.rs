pub mod chat;
pub mod moderate;
pub mod status;
