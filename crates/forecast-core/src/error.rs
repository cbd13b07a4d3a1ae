//! Errors raised while reshaping an upstream forecast.

/// Failure to turn a [`RawLocationForecast`](crate::RawLocationForecast) into a
/// [`NormalizedForecast`](crate::NormalizedForecast).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ForecastError {
    /// The location carried no weather elements, so the period count is unknown.
    #[error("location '{location}' has no weather elements")]
    NoElements { location: String },

    /// A recognised element has a different number of periods than the first one.
    #[error("element {element} has {actual} time slots, expected {expected}")]
    SlotCountMismatch {
        element: String,
        expected: usize,
        actual: usize,
    },

    /// A recognised element's time window at `index` disagrees with the first element's.
    #[error("element {element} time slot {index} does not line up with the first element")]
    MisalignedElement { element: String, index: usize },
}
