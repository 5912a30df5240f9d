mod change_notifier;
mod error;
