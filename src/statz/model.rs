use crate::error::{Result, StatzError};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Attribute name to numeric value, as carried by an action.
pub type Payload = BTreeMap<String, f64>;

/// Definition of one tracked attribute (hp, mp, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeType {
    pub name: String,
    pub detail: String,
    pub default: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl AttributeType {
    pub fn new(name: impl Into<String>, detail: impl Into<String>, default: f64) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
            default,
            max: None,
        }
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// A point in time as written in the log.
///
/// The raw text is kept verbatim so documents round-trip untouched; only the
/// calendar date takes part in cutoff filtering. Offset-bearing timestamps
/// are dated in local time, naive ones by their literal date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp {
    raw: String,
    date: NaiveDate,
}

// Offset forms RFC 3339 rejects: minutes-only times, `+hhmm` and `+hh`
// offsets. `%#z` also takes `Z`.
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

impl Timestamp {
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            raw: now.to_rfc3339_opts(SecondsFormat::Secs, false),
            date: now.date_naive(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Timestamp {
    type Err = StatzError;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s.trim();

        let offset_bearing = DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
            OFFSET_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
        });

        let date = if let Some(dt) = offset_bearing {
            dt.with_timezone(&Local).date_naive()
        } else if let Some(dt) = NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        {
            dt.date()
        } else {
            parse_date(raw).map_err(|_| StatzError::InvalidTimestamp(s.to_string()))?
        };

        Ok(Self {
            raw: raw.to_string(),
            date,
        })
    }
}

impl TryFrom<String> for Timestamp {
    type Error = StatzError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.raw
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| StatzError::InvalidDate(s.into()))
}

/// One entry of the append-only action log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub time: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Payload,
}

impl Action {
    pub fn new(time: Timestamp, kind: impl Into<String>, data: Payload) -> Self {
        Self {
            time,
            kind: kind.into(),
            data,
        }
    }
}

/// The whole persisted document: attribute catalog plus action log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub types: Vec<AttributeType>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Snapshot {
    pub fn new(types: Vec<AttributeType>, actions: Vec<Action>) -> Self {
        Self { types, actions }
    }

    pub fn attribute(&self, name: &str) -> Result<&AttributeType> {
        self.types
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| StatzError::UnknownAttribute(name.to_string()))
    }

    /// Rejects documents whose attribute names are not unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for ty in &self.types {
            if !seen.insert(ty.name.as_str()) {
                return Err(StatzError::Store(format!(
                    "Duplicate attribute type '{}'",
                    ty.name
                )));
            }
        }
        Ok(())
    }
}
