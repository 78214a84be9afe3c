// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Uses the Fluent localization system. Translation files are embedded from
//! `assets/i18n/` and the locale is picked from the CLI, the config file,
//! then the system, falling back to `en-US`.

pub mod fluent;
