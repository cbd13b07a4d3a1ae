//! Test builders — ergonomic constructors for upstream payloads.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use forecast_core::{
    ForecastRecords, ForecastResponse, Parameter, RawLocationForecast, TimeSlot, WeatherElement,
};

// ---------------------------------------------------------------------------
// LocationBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawLocationForecast`] fixtures.
///
/// Every element added gets one slot per value, with time windows taken from
/// [`window`] so that elements line up unless a test deliberately shifts one.
///
/// # Example
///
/// ```rust
/// let loc = LocationBuilder::new("臺北市")
///     .element("Wx", &["Sunny", "Cloudy"])
///     .element("PoP", &["10", "40"])
///     .build();
/// ```
pub struct LocationBuilder {
    name: String,
    elements: Vec<WeatherElement>,
}

impl LocationBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    pub fn element(mut self, element_name: &str, values: &[&str]) -> Self {
        let time = values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let (start_time, end_time) = window(i);
                TimeSlot {
                    start_time,
                    end_time,
                    parameter: Parameter {
                        parameter_name: value.to_string(),
                        ..Parameter::default()
                    },
                }
            })
            .collect();
        self.elements.push(WeatherElement {
            element_name: element_name.to_string(),
            time,
        });
        self
    }

    /// Move the start of slot `index` on the most recently added element.
    pub fn shift_last(mut self, index: usize, start_time: &str) -> Self {
        let last = self.elements.last_mut().expect("shift_last needs an element");
        last.time[index].start_time = start_time.to_string();
        self
    }

    pub fn build(self) -> RawLocationForecast {
        RawLocationForecast {
            location_name: self.name,
            weather_element: self.elements,
        }
    }
}

/// Twelve-hour window number `i`, starting 2026-10-17 18:00 local time.
pub fn window(i: usize) -> (String, String) {
    let start = chrono::NaiveDate::from_ymd_opt(2026, 10, 17)
        .and_then(|d| d.and_hms_opt(18, 0, 0))
        .expect("valid fixture date")
        + chrono::Duration::hours(12 * i as i64);
    let end = start + chrono::Duration::hours(12);
    let fmt = "%Y-%m-%d %H:%M:%S";
    (start.format(fmt).to_string(), end.format(fmt).to_string())
}

// ---------------------------------------------------------------------------
// Envelope helpers
// ---------------------------------------------------------------------------

/// Wrap locations in the upstream envelope.
pub fn response_with(locations: Vec<RawLocationForecast>) -> ForecastResponse {
    ForecastResponse {
        success: Some("true".to_string()),
        records: ForecastRecords {
            dataset_description: DATASET_DESCRIPTION.to_string(),
            location: locations,
        },
    }
}

/// An envelope whose `location` array is empty (unknown city).
pub fn empty_response() -> ForecastResponse {
    response_with(Vec::new())
}

pub const DATASET_DESCRIPTION: &str = "三十六小時天氣預報";

/// The minimal Sunny / 10% location used by several scenarios.
pub fn sunny_location(name: &str) -> RawLocationForecast {
    LocationBuilder::new(name)
        .element("Wx", &["Sunny", "Cloudy", "Showers"])
        .element("PoP", &["10", "30", "70"])
        .build()
}

/// A location with all six recognised elements over three periods.
pub fn full_location(name: &str) -> RawLocationForecast {
    LocationBuilder::new(name)
        .element("Wx", &["多雲", "晴時多雲", "短暫陣雨"])
        .element("PoP", &["10", "0", "60"])
        .element("MinT", &["22", "21", "20"])
        .element("CI", &["舒適", "舒適", "稍有寒意"])
        .element("MaxT", &["27", "29", "24"])
        .element("WS", &["<= 1", "2", "3"])
        .build()
}
