mod inline_alert;
mod notification_service;
mod toast;


pub use inline_alert::InlineAlert;
pub use notification_service::NotificationService;
pub use toast::{Toast, ToastId};
