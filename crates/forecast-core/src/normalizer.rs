//! Normalizer — folds a [`RawLocationForecast`] into a flat [`NormalizedForecast`].
//!
//! The upstream groups values by element (all `PoP` periods, then all `MinT`
//! periods, …). Clients want them grouped by period. The period count and
//! time windows come from the first element; every recognised element is then
//! read at the same index and written into the matching [`ForecastPeriod`]
//! field through the [`ElementKind`] table.

use crate::error::ForecastError;
use crate::types::{ForecastPeriod, NormalizedForecast, RawLocationForecast, WeatherElement};

// ---------------------------------------------------------------------------
// Element table
// ---------------------------------------------------------------------------

/// The closed set of upstream elements that map onto a [`ForecastPeriod`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `Wx`: weather phenomenon text.
    Weather,
    /// `PoP`: probability of precipitation, percent.
    RainChance,
    /// `MinT`: minimum temperature, °C.
    MinTemp,
    /// `MaxT`: maximum temperature, °C.
    MaxTemp,
    /// `CI`: comfort index text.
    Comfort,
    /// `WS`: wind speed description.
    WindSpeed,
}

static ELEMENTS: phf::Map<&'static str, ElementKind> = phf::phf_map! {
    "Wx" => ElementKind::Weather,
    "PoP" => ElementKind::RainChance,
    "MinT" => ElementKind::MinTemp,
    "MaxT" => ElementKind::MaxTemp,
    "CI" => ElementKind::Comfort,
    "WS" => ElementKind::WindSpeed,
};

impl ElementKind {
    /// Look up an upstream `elementName`. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        ELEMENTS.get(name).copied()
    }

    /// Unit appended to the raw parameter value.
    pub fn suffix(self) -> &'static str {
        match self {
            ElementKind::RainChance => "%",
            ElementKind::MinTemp | ElementKind::MaxTemp => "°C",
            ElementKind::Weather | ElementKind::Comfort | ElementKind::WindSpeed => "",
        }
    }

    fn field(self, period: &mut ForecastPeriod) -> &mut String {
        match self {
            ElementKind::Weather => &mut period.weather,
            ElementKind::RainChance => &mut period.rain,
            ElementKind::MinTemp => &mut period.min_temp,
            ElementKind::MaxTemp => &mut period.max_temp,
            ElementKind::Comfort => &mut period.comfort,
            ElementKind::WindSpeed => &mut period.wind_speed,
        }
    }

    /// Write `value` (plus this element's unit) into its field on `period`.
    pub fn apply(self, period: &mut ForecastPeriod, value: &str) {
        *self.field(period) = format!("{value}{}", self.suffix());
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Reshape one upstream location into per-period records.
///
/// `update_time` is echoed as [`NormalizedForecast::update_time`]. Fails with
/// [`ForecastError::NoElements`] when there is nothing to take the period
/// count from, and with an alignment error when a recognised element does not
/// share the first element's time windows.
pub fn normalize(
    location: &RawLocationForecast,
    update_time: &str,
) -> Result<NormalizedForecast, ForecastError> {
    let first = location
        .weather_element
        .first()
        .ok_or_else(|| ForecastError::NoElements {
            location: location.location_name.clone(),
        })?;

    let recognised: Vec<(ElementKind, &WeatherElement)> = location
        .weather_element
        .iter()
        .filter_map(|el| ElementKind::from_name(&el.element_name).map(|kind| (kind, el)))
        .collect();

    for (_, element) in &recognised {
        check_alignment(first, element)?;
    }

    let forecasts = first
        .time
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let mut period = ForecastPeriod::starting(slot);
            for (kind, element) in &recognised {
                kind.apply(&mut period, &element.time[i].parameter.parameter_name);
            }
            period
        })
        .collect();

    Ok(NormalizedForecast {
        city: location.location_name.clone(),
        update_time: update_time.to_string(),
        forecasts,
    })
}

fn check_alignment(first: &WeatherElement, element: &WeatherElement) -> Result<(), ForecastError> {
    if element.time.len() != first.time.len() {
        return Err(ForecastError::SlotCountMismatch {
            element: element.element_name.clone(),
            expected: first.time.len(),
            actual: element.time.len(),
        });
    }

    let misaligned = first
        .time
        .iter()
        .zip(&element.time)
        .position(|(a, b)| a.start_time != b.start_time || a.end_time != b.end_time);

    match misaligned {
        Some(index) => Err(ForecastError::MisalignedElement {
            element: element.element_name.clone(),
            index,
        }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
