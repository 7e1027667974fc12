// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the taqwim-core crate.
//!
//! These tests drive the request boundary the way an HTTP adapter would,
//! through [`taqwim_core::Service::handle`].

mod conversion_api;
mod event_lifecycle;
mod prayer_settings;
