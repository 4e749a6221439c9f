// SPDX-License-Identifier: MPL-2.0
//! Concrete adapters behind the engine's widget boundary.

mod local_widget;

pub use local_widget::LocalWidget;
