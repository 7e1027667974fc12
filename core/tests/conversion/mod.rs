// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tests of the Gregorian and Hijri conversion engine.

mod known_dates;
mod properties;
