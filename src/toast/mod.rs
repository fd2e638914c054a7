// SPDX-License-Identifier: MPL-2.0
//! Transient toast notifications.
//!
//! Toasts are fire-and-forget: a dispatch call inserts an entry, the entry
//! is rendered until it is dismissed by the user, removed by its auto-dismiss
//! deadline, or evicted to make room for a newer one. Data flows one way
//! (dispatcher → store → renderer); clicks travel back as [`Message`]s.
//!
//! # Components
//!
//! - [`entry`] - Core `Toast` struct with kinds, durations and actions
//! - [`manager`] - `Manager` for dedup, eviction and lifecycle
//!
//! # Usage
//!
//! ```
//! use iced_herald::toast::{Manager, Toast};
//!
//! let mut manager = Manager::new();
//! manager.dispatch(Toast::success("Payslip generated"));
//! assert_eq!(manager.len(), 1);
//! ```
//!
//! # Design Considerations
//!
//! - Kind defaults: 5s for success/info, 7s for warnings, manual dismiss
//!   for errors
//! - At most `max_toasts` (default 5) concurrent entries; the oldest
//!   non-persistent entry is evicted first
//! - Dispatching a message identical to an active one replaces it

pub mod entry;
pub mod manager;

pub use entry::{ActionStyle, Toast, ToastAction, ToastId, ToastKind};
pub use manager::{ActionInvoked, Manager, Message, ToastPatch};
