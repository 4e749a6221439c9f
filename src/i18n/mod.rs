// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the player.
//!
//! Localization is backed by the Fluent system. Translation files are
//! embedded into the binary, the locale is resolved from CLI, config or
//! OS settings, and performer name display follows the active locale.

pub mod fluent;
