pub mod notification;
pub mod template;
