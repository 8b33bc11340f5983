pub mod intake;
pub mod mail;
pub mod notification;
pub mod sheets;
