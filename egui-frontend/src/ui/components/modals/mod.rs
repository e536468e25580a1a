pub mod notification_settings;
pub mod reset_confirm;
