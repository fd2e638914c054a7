// SPDX-License-Identifier: MPL-2.0
//! `iced_herald` is a toast and modal dialog notification center for
//! applications built with the Iced GUI framework.
//!
//! Two independent queues share one design: a non-blocking toast queue with
//! duplicate suppression, capacity eviction and auto-dismiss deadlines, and
//! a modal popup stack whose entries resolve a one-shot future when closed.
//! Both live behind an explicit [`NotificationCenter`] instance owned by the
//! host application, so multiple centers (one per window, one per test) can
//! coexist without shared global state.
//!
//! ```no_run
//! use iced_herald::center::NotificationCenter;
//! use iced_herald::popup::ConfirmOptions;
//!
//! let mut center = NotificationCenter::default();
//! center.success("Employee record saved");
//!
//! let decision = center.confirm(ConfirmOptions::new("Delete record?", "This cannot be undone."));
//! // `decision` is a future; hand it to your runtime (e.g. `Task::perform`)
//! // and it resolves exactly once when the dialog closes.
//! # drop(decision);
//! ```

#![doc(html_root_url = "https://docs.rs/iced_herald/0.1.0")]

pub mod app;
pub mod center;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod popup;
pub mod toast;
pub mod ui;

pub use center::NotificationCenter;
