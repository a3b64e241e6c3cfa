// crates/ports/src/wire.rs
//! Typed views over the `MRData` envelope returned by the results API.

use std::borrow::Cow;

use f1_results_shared_kernel::{DataShapeError, DataShapeResult};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::results_api::RawPage;

/// Scalar the API encodes as a string but that may arrive as a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Text(String),
    Number(serde_json::Number),
}

impl RawScalar {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(number) => Cow::Owned(number.to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriverDto {
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConstructorDto {
    pub name: String,
}

/// One classified entry of a race.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultDto {
    #[serde(default)]
    pub position: Option<RawScalar>,
    #[serde(default)]
    pub points: Option<RawScalar>,
    #[serde(rename = "Driver")]
    pub driver: DriverDto,
    #[serde(rename = "Constructor")]
    pub constructor: ConstructorDto,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RaceDto {
    pub round: RawScalar,
    #[serde(rename = "raceName")]
    pub race_name: String,
    pub date: String,
    #[serde(rename = "Results")]
    pub results: Vec<ResultDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonDto {
    pub season: RawScalar,
}

/// Races carried by one page of `{year}/results`.
#[derive(Debug, Clone)]
pub struct RacePage {
    pub races: Vec<RaceDto>,
    total: Option<RawScalar>,
}

impl RacePage {
    pub fn decode(raw: &RawPage) -> DataShapeResult<Self> {
        let mr_data = mr_data(raw.body())?;
        let race_table = field(mr_data, "RaceTable", "MRData.RaceTable")?;
        let races = decode_array(race_table, "Races", "MRData.RaceTable.Races")?;
        let total = mr_data.get("total").and_then(|v| serde_json::from_value(v.clone()).ok());
        Ok(Self { races, total })
    }

    /// Declared number of results across all pages.
    pub fn total(&self) -> DataShapeResult<u64> {
        parse_total(self.total.as_ref())
    }
}

/// Seasons carried by one page of `seasons`.
#[derive(Debug, Clone)]
pub struct SeasonPage {
    pub seasons: Vec<SeasonDto>,
}

impl SeasonPage {
    pub fn decode(raw: &RawPage) -> DataShapeResult<Self> {
        let mr_data = mr_data(raw.body())?;
        let season_table = field(mr_data, "SeasonTable", "MRData.SeasonTable")?;
        let seasons = decode_array(season_table, "Seasons", "MRData.SeasonTable.Seasons")?;
        Ok(Self { seasons })
    }
}

fn mr_data(body: &Value) -> DataShapeResult<&Value> {
    field(body, "MRData", "MRData")
}

fn field<'a>(value: &'a Value, name: &str, path: &str) -> DataShapeResult<&'a Value> {
    value.get(name).ok_or_else(|| DataShapeError::MissingField { path: path.to_string() })
}

fn decode_array<T: DeserializeOwned>(parent: &Value, name: &str, path: &str) -> DataShapeResult<Vec<T>> {
    let value = field(parent, name, path)?;
    serde_json::from_value(value.clone()).map_err(|e| DataShapeError::Layout { details: format!("{path}: {e}") })
}

fn parse_total(total: Option<&RawScalar>) -> DataShapeResult<u64> {
    let raw = total.ok_or_else(|| DataShapeError::MissingField { path: "MRData.total".to_string() })?;
    let text = raw.as_text();
    text.trim()
        .parse::<u64>()
        .map_err(|_| DataShapeError::InvalidValue { path: "MRData.total".to_string(), value: text.to_string() })
}
