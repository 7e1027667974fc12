// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Request boundary of the HTTP surface, independent of any transport.
//!
//! Request bodies are parsed into typed requests before an engine is invoked:
//! required fields are checked in declaration order and the first one that is
//! absent or null fails the request with a 400. Engines never fail, so the
//! only other outcomes are a 404 for unknown records and a generic 500 when
//! the store breaks.

use std::fmt;

use jiff::{
    ToSpan,
    civil::{Date, DateTime, Time},
};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::{
    ApiError, CalculationMethod, Clock, EventCountdown, EventDraft, EventPatch, FixedSchedule,
    HijriDate, IslamicEvent, LocationPatch, LocationSetting, MonthGrid, NextPrayer,
    PrayerCalculator, PrayerTimes, Store, ValidationError, compute_prayer_times,
    fits_gregorian_range, month_grid, next_prayer, upcoming_events,
};

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PATCH`
    Patch,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        })
    }
}

/// Status code and JSON body of a handled request.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,

    /// JSON body, `{"error": "..."}` for failures.
    pub body: Value,
}

impl Response {
    fn ok<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(body) => Self { status: 200, body },
            Err(err) => {
                tracing::error!(%err, "failed to serialize response");
                Self::error(&ApiError::Internal("Failed to serialize response"))
            }
        }
    }

    fn error(err: &ApiError) -> Self {
        Self {
            status: err.status(),
            body: json!({ "error": err.to_string() }),
        }
    }
}

/// A Gregorian date returned by the Hijri to Gregorian conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GregorianConversion {
    /// Gregorian year.
    pub year: i16,

    /// Gregorian month, 1..=12.
    pub month: i8,

    /// Day of the month.
    pub day: i8,

    /// Long form such as `March 1, 2025`.
    pub formatted: String,
}

impl From<Date> for GregorianConversion {
    fn from(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            formatted: date.strftime("%B %-d, %Y").to_string(),
        }
    }
}

/// Today's prayer times at the active location.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerSchedule {
    /// The active city.
    pub city: String,

    /// The local date, `YYYY-MM-DD`.
    pub date: Date,

    /// The times of the day.
    pub times: PrayerTimes,

    /// The upcoming prayer, e.g. `Dhuhr in 6h 30m`.
    pub next_prayer: NextPrayer,
}

/// The application service behind the HTTP surface.
pub struct Service<S, C> {
    store: S,
    clock: C,
    calculator: Box<dyn PrayerCalculator>,
    hijri_offset: i8,
}

impl<S: Store, C: Clock> Service<S, C> {
    /// Creates a service with the placeholder prayer schedule and no Hijri
    /// day offset.
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            calculator: Box::new(FixedSchedule::default()),
            hijri_offset: 0,
        }
    }

    /// Replaces the prayer time strategy.
    pub fn with_calculator(mut self, calculator: impl PrayerCalculator + 'static) -> Self {
        self.calculator = Box::new(calculator);
        self
    }

    /// Shifts "today" by the given number of days before converting it.
    pub fn with_hijri_offset(mut self, days: i8) -> Self {
        self.hijri_offset = days;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The current local date and time, without the Hijri offset.
    pub fn now(&self) -> DateTime {
        self.clock.now()
    }

    /// The local Gregorian date used as "today", offset included.
    pub fn today(&self) -> Date {
        let date = self.clock.now().date();
        date.saturating_add(i64::from(self.hijri_offset).days())
    }

    /// `GET /api/hijri-date`
    pub fn hijri_today(&self) -> HijriDate {
        crate::gregorian_to_hijri(self.today())
    }

    /// `POST /api/convert/gregorian-to-hijri`
    #[tracing::instrument(skip(self))]
    pub fn gregorian_to_hijri(&self, body: &Value) -> Result<HijriDate, ApiError> {
        let date = GregorianRequest::parse(body)?.0;
        Ok(crate::gregorian_to_hijri(date))
    }

    /// `POST /api/convert/hijri-to-gregorian`
    #[tracing::instrument(skip(self))]
    pub fn hijri_to_gregorian(&self, body: &Value) -> Result<GregorianConversion, ApiError> {
        let hijri = HijriRequest::parse(body)?.0;
        Ok(hijri.to_gregorian().into())
    }

    /// `GET /api/prayer-times`
    pub fn prayer_times(&self) -> Result<PrayerSchedule, ApiError> {
        let location = self
            .store
            .location()
            .map_err(|e| ApiError::from_store(e, "Failed to get prayer times"))?
            .ok_or_else(|| ApiError::NotFound("Prayer time settings not found".to_owned()))?;

        let now = self.clock.now();
        Ok(self.schedule_at(&location, now.date(), now.time()))
    }

    /// Today's prayer times at `location`, counting down from `now`.
    pub fn prayer_times_for(&self, location: &LocationSetting, now: Time) -> PrayerSchedule {
        self.schedule_at(location, self.clock.now().date(), now)
    }

    fn schedule_at(&self, location: &LocationSetting, date: Date, now: Time) -> PrayerSchedule {
        let times = compute_prayer_times(self.calculator.as_ref(), location, date);
        PrayerSchedule {
            city: location.city.clone(),
            date,
            times,
            next_prayer: next_prayer(&times, now),
        }
    }

    /// `POST /api/prayer-settings`
    #[tracing::instrument(skip(self))]
    pub fn update_prayer_settings(&self, body: &Value) -> Result<LocationSetting, ApiError> {
        let patch = parse_location_patch(body)?;
        self.store
            .update_location(&patch)
            .map_err(|e| ApiError::from_store(e, "Failed to update prayer settings"))
    }

    /// `GET /api/islamic-events`
    pub fn islamic_events(&self) -> Result<Vec<EventCountdown>, ApiError> {
        let events = self
            .store
            .events()
            .map_err(|e| ApiError::from_store(e, "Failed to get Islamic events"))?;
        Ok(upcoming_events(events, &self.hijri_today()))
    }

    /// `POST /api/islamic-events`
    #[tracing::instrument(skip(self))]
    pub fn create_islamic_event(&self, body: &Value) -> Result<IslamicEvent, ApiError> {
        let draft = parse_event_draft(body)?;
        self.store
            .create_event(draft)
            .map_err(|e| ApiError::from_store(e, "Failed to create Islamic event"))
    }

    /// `PATCH /api/islamic-events/{id}`
    #[tracing::instrument(skip(self))]
    pub fn update_islamic_event(&self, id: u32, body: &Value) -> Result<IslamicEvent, ApiError> {
        let patch = parse_event_patch(body)?;
        self.store
            .update_event(id, &patch)
            .map_err(|e| ApiError::from_store(e, "Failed to update Islamic event"))?
            .ok_or_else(|| ApiError::NotFound(format!("Islamic event {id} not found")))
    }

    /// The grid of a Hijri month with today and the stored events marked.
    pub fn month(&self, year: i32, month: u8) -> Result<MonthGrid, ApiError> {
        let events = self
            .store
            .events()
            .map_err(|e| ApiError::from_store(e, "Failed to get Islamic events"))?;
        Ok(month_grid(year, month, Some(&self.hijri_today()), &events))
    }

    /// Routes a request to its handler.
    ///
    /// A missing body is treated as JSON `null`. Unknown routes answer 404.
    #[tracing::instrument(skip(self, body))]
    pub fn handle(&self, method: Method, path: &str, body: Option<&Value>) -> Response {
        let body = body.unwrap_or(&Value::Null);
        let path = path.split('?').next().unwrap_or_default();
        let segments: Vec<_> = path.split('/').filter(|s| !s.is_empty()).collect();

        let response = match (method, segments.as_slice()) {
            (Method::Get, ["api", "hijri-date"]) => Response::ok(&self.hijri_today()),
            (Method::Post, ["api", "convert", "gregorian-to-hijri"]) => {
                respond(self.gregorian_to_hijri(body))
            }
            (Method::Post, ["api", "convert", "hijri-to-gregorian"]) => {
                respond(self.hijri_to_gregorian(body))
            }
            (Method::Get, ["api", "prayer-times"]) => respond(self.prayer_times()),
            (Method::Post, ["api", "prayer-settings"]) => {
                respond(self.update_prayer_settings(body))
            }
            (Method::Get, ["api", "islamic-events"]) => respond(self.islamic_events()),
            (Method::Post, ["api", "islamic-events"]) => respond(self.create_islamic_event(body)),
            (Method::Patch, ["api", "islamic-events", id]) => match id.parse::<u32>() {
                Ok(id) => respond(self.update_islamic_event(id, body)),
                Err(_) => Response::error(&ApiError::NotFound(format!(
                    "Islamic event {id} not found"
                ))),
            },
            _ => Response::error(&ApiError::NotFound(format!("No route for {method} {path}"))),
        };

        tracing::debug!(status = response.status, "request handled");
        response
    }
}

fn respond<T: Serialize>(result: Result<T, ApiError>) -> Response {
    match result {
        Ok(value) => Response::ok(&value),
        Err(err) => {
            tracing::debug!(%err, "request rejected");
            Response::error(&err)
        }
    }
}

/// Body `{year, month, day}` naming a Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GregorianRequest(Date);

impl GregorianRequest {
    fn parse(body: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::of(body)?;
        let (year, month, day) = (
            fields.required_int("year")?,
            fields.required_int("month")?,
            fields.required_int("day")?,
        );

        let invalid = ValidationError::InvalidDate { year, month, day };
        let date = match (i16::try_from(year), i8::try_from(month), i8::try_from(day)) {
            (Ok(y), Ok(m), Ok(d)) => Date::new(y, m, d).map_err(|_| invalid)?,
            _ => return Err(invalid),
        };
        Ok(Self(date))
    }
}

/// Body `{year, month, day}` naming a Hijri date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HijriRequest(HijriDate);

impl HijriRequest {
    fn parse(body: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::of(body)?;
        let year = fields.required_int("year")?;
        let month = fields.required_int("month")?;
        let day = fields.required_int("day")?;

        let year = i32::try_from(year).map_err(|_| ValidationError::InvalidField {
            field: "year",
            expected: "at least 1",
        })?;
        let month = u8::try_from(month).unwrap_or(0);
        let day = u8::try_from(day).unwrap_or(0);
        let date = HijriDate::new(year, month, day)?;
        if !fits_gregorian_range(year, month, day) {
            return Err(ValidationError::InvalidField {
                field: "year",
                expected: "a date no later than 2 Rabi' al-Thani 9666",
            });
        }
        Ok(Self(date))
    }
}

fn parse_location_patch(body: &Value) -> Result<LocationPatch, ValidationError> {
    let fields = Fields::of(body)?;
    let calculation_method = fields
        .optional_str("calculationMethod")?
        .map(|s| s.parse::<CalculationMethod>())
        .transpose()?;

    Ok(LocationPatch {
        city: fields.optional_str("city")?.map(str::to_owned),
        latitude: fields.nullable_coordinate("latitude")?,
        longitude: fields.nullable_coordinate("longitude")?,
        timezone: fields.nullable_str("timezone")?,
        calculation_method,
    })
}

fn parse_event_draft(body: &Value) -> Result<EventDraft, ValidationError> {
    let fields = Fields::of(body)?;
    let draft = EventDraft {
        name: fields.required_str("name")?.to_owned(),
        hijri_month: fields.required_u8("hijriMonth", "between 1 and 12")?,
        hijri_day: fields.required_u8("hijriDay", "between 1 and 30")?,
        description: fields.nullable_str("description")?.flatten(),
        is_recurring: fields.optional_bool("isRecurring")?.unwrap_or(true),
    };
    draft.validate()?;
    Ok(draft)
}

fn parse_event_patch(body: &Value) -> Result<EventPatch, ValidationError> {
    let fields = Fields::of(body)?;
    let patch = EventPatch {
        name: fields.optional_str("name")?.map(str::to_owned),
        hijri_month: fields.optional_u8("hijriMonth", "between 1 and 12")?,
        hijri_day: fields.optional_u8("hijriDay", "between 1 and 30")?,
        description: fields.nullable_str("description")?,
        is_recurring: fields.optional_bool("isRecurring")?,
    };

    if patch.is_empty() {
        return Err(ValidationError::InvalidField {
            field: "body",
            expected: "at least one field to update",
        });
    }
    patch.validate()?;
    Ok(patch)
}

/// Typed access to the members of a JSON object body. Null members count as
/// absent.
struct Fields<'a>(&'a Map<String, Value>);

impl<'a> Fields<'a> {
    fn of(body: &'a Value) -> Result<Self, ValidationError> {
        body.as_object()
            .map(Fields)
            .ok_or(ValidationError::InvalidField {
                field: "body",
                expected: "a JSON object",
            })
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    fn required<T>(&self, field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
        value.ok_or(ValidationError::MissingField { field })
    }

    fn optional_int(&self, field: &'static str) -> Result<Option<i64>, ValidationError> {
        self.get(field)
            .map(|v| {
                v.as_i64().ok_or(ValidationError::InvalidField {
                    field,
                    expected: "an integer",
                })
            })
            .transpose()
    }

    fn required_int(&self, field: &'static str) -> Result<i64, ValidationError> {
        let value = self.optional_int(field)?;
        self.required(field, value)
    }

    fn optional_u8(
        &self,
        field: &'static str,
        expected: &'static str,
    ) -> Result<Option<u8>, ValidationError> {
        self.optional_int(field)?
            .map(|v| {
                u8::try_from(v).map_err(|_| ValidationError::InvalidField { field, expected })
            })
            .transpose()
    }

    fn required_u8(
        &self,
        field: &'static str,
        expected: &'static str,
    ) -> Result<u8, ValidationError> {
        let value = self.optional_u8(field, expected)?;
        self.required(field, value)
    }

    fn optional_str(&self, field: &'static str) -> Result<Option<&'a str>, ValidationError> {
        self.get(field)
            .map(|v| {
                v.as_str().ok_or(ValidationError::InvalidField {
                    field,
                    expected: "a string",
                })
            })
            .transpose()
    }

    fn required_str(&self, field: &'static str) -> Result<&'a str, ValidationError> {
        let value = self.optional_str(field)?;
        self.required(field, value)
    }

    fn optional_bool(&self, field: &'static str) -> Result<Option<bool>, ValidationError> {
        self.get(field)
            .map(|v| {
                v.as_bool().ok_or(ValidationError::InvalidField {
                    field,
                    expected: "a boolean",
                })
            })
            .transpose()
    }

    /// Absent is `None`, null is `Some(None)`.
    fn nullable_str(
        &self,
        field: &'static str,
    ) -> Result<Option<Option<String>>, ValidationError> {
        match self.0.get(field) {
            None => Ok(None),
            Some(Value::Null) => Ok(Some(None)),
            Some(Value::String(s)) => Ok(Some(Some(s.clone()))),
            Some(_) => Err(ValidationError::InvalidField {
                field,
                expected: "a string",
            }),
        }
    }

    /// A coordinate given as a number or a numeric string.
    fn nullable_coordinate(
        &self,
        field: &'static str,
    ) -> Result<Option<Option<f64>>, ValidationError> {
        let invalid = ValidationError::InvalidField {
            field,
            expected: "a number",
        };
        match self.0.get(field) {
            None => Ok(None),
            Some(Value::Null) => Ok(Some(None)),
            Some(Value::Number(n)) => n.as_f64().map(|v| Some(Some(v))).ok_or(invalid),
            Some(Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Some(Some(v))),
                _ => Err(invalid),
            },
            Some(_) => Err(invalid),
        }
    }
}
