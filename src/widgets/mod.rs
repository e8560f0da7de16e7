// Reusable UI widgets

pub mod dialog;
pub mod menu;
pub mod toast;

pub use dialog::{Dialog, DialogVariant};
pub use menu::{Menu, MenuItem, MenuState};
pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};
