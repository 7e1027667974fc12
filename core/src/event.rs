// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// An annual Islamic observance anchored to a Hijri month and day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IslamicEvent {
    /// Identifier assigned by the store.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Hijri month, 1..=12.
    pub hijri_month: u8,

    /// Hijri day, 1..=30.
    pub hijri_day: u8,

    /// Optional longer description.
    pub description: Option<String>,

    /// Whether the event repeats every Hijri year.
    pub is_recurring: bool,
}

/// Draft for an event, used for creating new events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// Display name, must not be blank.
    pub name: String,

    /// Hijri month, 1..=12.
    pub hijri_month: u8,

    /// Hijri day, 1..=30.
    pub hijri_day: u8,

    /// Optional longer description.
    pub description: Option<String>,

    /// Whether the event repeats every Hijri year.
    pub is_recurring: bool,
}

impl EventDraft {
    /// Creates a recurring draft without description.
    pub fn new(name: impl Into<String>, hijri_month: u8, hijri_day: u8) -> Self {
        Self {
            name: name.into(),
            hijri_month,
            hijri_day,
            description: None,
            is_recurring: true,
        }
    }

    /// Checks the name and the Hijri anchor.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_anchor(self.hijri_month, self.hijri_day)
    }

    /// Turns the draft into an event with the given id.
    pub(crate) fn into_event(self, id: u32) -> IslamicEvent {
        IslamicEvent {
            id,
            name: self.name,
            hijri_month: self.hijri_month,
            hijri_day: self.hijri_day,
            description: self.description,
            is_recurring: self.is_recurring,
        }
    }
}

/// Patch for an event, allowing partial updates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventPatch {
    /// The name of the event, if set.
    pub name: Option<String>,

    /// The Hijri month, if set.
    pub hijri_month: Option<u8>,

    /// The Hijri day, if set.
    pub hijri_day: Option<u8>,

    /// The description, if set. `Some(None)` removes it.
    pub description: Option<Option<String>>,

    /// The recurrence flag, if set.
    pub is_recurring: Option<bool>,
}

impl EventPatch {
    /// Is this patch empty, meaning no fields are set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.hijri_month.is_none()
            && self.hijri_day.is_none()
            && self.description.is_none()
            && self.is_recurring.is_none()
    }

    /// Checks the fields that are set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        validate_anchor(self.hijri_month.unwrap_or(1), self.hijri_day.unwrap_or(1))
    }

    /// Applies the patch to an event, modifying it in place.
    pub(crate) fn apply_to<'a>(&self, e: &'a mut IslamicEvent) -> &'a mut IslamicEvent {
        if let Some(name) = &self.name {
            e.name.clone_from(name);
        }

        if let Some(month) = self.hijri_month {
            e.hijri_month = month;
        }

        if let Some(day) = self.hijri_day {
            e.hijri_day = day;
        }

        if let Some(description) = &self.description {
            e.description.clone_from(description);
        }

        if let Some(is_recurring) = self.is_recurring {
            e.is_recurring = is_recurring;
        }

        e
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    match name.trim().is_empty() {
        true => Err(ValidationError::MissingField { field: "name" }),
        false => Ok(()),
    }
}

fn validate_anchor(month: u8, day: u8) -> Result<(), ValidationError> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::InvalidField {
            field: "hijriMonth",
            expected: "between 1 and 12",
        });
    }

    if !(1..=30).contains(&day) {
        return Err(ValidationError::InvalidField {
            field: "hijriDay",
            expected: "between 1 and 30",
        });
    }

    Ok(())
}

/// The canonical observances as `(name, month, day, description)`.
const CANONICAL: [(&str, u8, u8, &str); 8] = [
    ("Mawlid an-Nabi", 3, 12, "Birth of the Prophet Muhammad"),
    ("Isra and Mi'raj", 7, 27, "The Night Journey and Ascension"),
    ("Laylat al-Qadr", 9, 27, "The Night of Power, commonly observed on the 27th of Ramadan"),
    ("Eid al-Fitr", 10, 1, "Festival marking the end of Ramadan"),
    ("Day of Arafah", 12, 9, "The day pilgrims stand at Mount Arafat"),
    ("Eid al-Adha", 12, 10, "Festival of Sacrifice"),
    ("Islamic New Year", 1, 1, "First day of Muharram"),
    ("Day of Ashura", 1, 10, "Tenth day of Muharram"),
];

/// Drafts of the eight canonical observances, in seeding order.
pub fn canonical_events() -> Vec<EventDraft> {
    CANONICAL
        .iter()
        .map(|&(name, month, day, description)| EventDraft {
            description: Some(description.to_owned()),
            ..EventDraft::new(name, month, day)
        })
        .collect()
}

/// The name of the canonical observance on the Hijri `(month, day)`, if any.
pub fn holiday_name(hijri_month: u8, hijri_day: u8) -> Option<&'static str> {
    CANONICAL
        .iter()
        .find(|&&(_, m, d, _)| m == hijri_month && d == hijri_day)
        .map(|&(name, ..)| name)
}

/// Whether a canonical observance falls on the Hijri `(month, day)`.
pub fn is_holiday(hijri_month: u8, hijri_day: u8) -> bool {
    holiday_name(hijri_month, hijri_day).is_some()
}
