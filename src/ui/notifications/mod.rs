// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle
//! - [`toast`] - toast rendering
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-approve-failed").with_arg("name", name));
//! let toasts = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Success/info toasts last 3s, warnings 5s, errors until dismissed.
//! At most 3 are visible; others wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
