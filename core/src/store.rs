// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    collections::BTreeMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{
    EventDraft, EventPatch, IslamicEvent, LocationPatch, LocationSetting, StoreError,
    canonical_events,
};

/// Repository of the active location and the event definitions.
pub trait Store: Send + Sync {
    /// The active location, if one has been set.
    fn location(&self) -> Result<Option<LocationSetting>, StoreError>;

    /// Applies a patch to the active location and returns the result.
    ///
    /// Without an active location the patch is applied to the default one.
    fn update_location(&self, patch: &LocationPatch) -> Result<LocationSetting, StoreError>;

    /// All events in id order.
    fn events(&self) -> Result<Vec<IslamicEvent>, StoreError>;

    /// The event with the given id.
    fn event(&self, id: u32) -> Result<Option<IslamicEvent>, StoreError>;

    /// Stores a new event and returns it with its assigned id.
    fn create_event(&self, draft: EventDraft) -> Result<IslamicEvent, StoreError>;

    /// Applies a patch to an event, `None` when the id is unknown.
    fn update_event(
        &self,
        id: u32,
        patch: &EventPatch,
    ) -> Result<Option<IslamicEvent>, StoreError>;
}

/// A [`Store`] kept in memory for the lifetime of the value.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    location: Option<LocationSetting>,
    events: BTreeMap<u32, IslamicEvent>,
    next_id: u32,
}

impl MemoryStore {
    /// Creates a store holding the canonical events and no location.
    pub fn new() -> Self {
        Self::with_events(canonical_events())
    }

    /// Creates a store holding only the given events.
    ///
    /// Drafts are assumed to be valid and are numbered from 1.
    pub fn with_events(drafts: impl IntoIterator<Item = EventDraft>) -> Self {
        let mut inner = Inner {
            next_id: 1,
            ..Default::default()
        };
        for draft in drafts {
            inner.insert(draft);
        }

        tracing::debug!(events = inner.events.len(), "memory store initialized");
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Sets the active location.
    pub fn with_location(self, location: LocationSetting) -> Self {
        let mut inner = self.inner;
        if let Ok(inner) = inner.get_mut() {
            inner.location = Some(location);
        }
        Self { inner }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn insert(&mut self, draft: EventDraft) -> IslamicEvent {
        let id = self.next_id;
        self.next_id += 1;
        let event = draft.into_event(id);
        self.events.insert(id, event.clone());
        event
    }
}

impl Store for MemoryStore {
    fn location(&self) -> Result<Option<LocationSetting>, StoreError> {
        Ok(self.read()?.location.clone())
    }

    #[tracing::instrument(skip(self))]
    fn update_location(&self, patch: &LocationPatch) -> Result<LocationSetting, StoreError> {
        patch.validate()?;
        let mut inner = self.write()?;
        let mut location = inner.location.clone().unwrap_or_default();
        patch.apply_to(&mut location);
        location.validate()?;
        inner.location = Some(location.clone());
        Ok(location)
    }

    fn events(&self) -> Result<Vec<IslamicEvent>, StoreError> {
        Ok(self.read()?.events.values().cloned().collect())
    }

    fn event(&self, id: u32) -> Result<Option<IslamicEvent>, StoreError> {
        Ok(self.read()?.events.get(&id).cloned())
    }

    #[tracing::instrument(skip(self))]
    fn create_event(&self, draft: EventDraft) -> Result<IslamicEvent, StoreError> {
        draft.validate()?;
        let event = self.write()?.insert(draft);
        tracing::debug!(id = event.id, "event created");
        Ok(event)
    }

    #[tracing::instrument(skip(self))]
    fn update_event(
        &self,
        id: u32,
        patch: &EventPatch,
    ) -> Result<Option<IslamicEvent>, StoreError> {
        patch.validate()?;
        let mut inner = self.write()?;
        Ok(inner
            .events
            .get_mut(&id)
            .map(|event| patch.apply_to(event).clone()))
    }
}
