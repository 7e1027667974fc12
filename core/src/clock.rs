// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{Zoned, civil::DateTime};

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    /// The current local wall-clock time.
    fn now(&self) -> DateTime;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime {
        (**self).now()
    }
}

/// The system clock in the system time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        Zoned::now().datetime()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime);

impl Clock for FixedClock {
    fn now(&self) -> DateTime {
        self.0
    }
}
