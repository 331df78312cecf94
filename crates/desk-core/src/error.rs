use thiserror::Error;

/// Rejected component configuration.
///
/// Runtime inputs (pointer positions, zoom deltas, frame times) are clamped
/// or ignored instead; only construction-time settings can fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} range is inverted: min {min} > max {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("{field} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("dissipation height {dissipation} must be above emission height {emission}")]
    EmptyBand { emission: f32, dissipation: f32 },
}

pub(crate) fn finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

pub(crate) fn non_negative(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    let value = finite(field, value)?;
    if value < 0.0 {
        Err(ConfigError::Negative { field, value })
    } else {
        Ok(value)
    }
}

pub(crate) fn ordered(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    finite(field, min)?;
    finite(field, max)?;
    if min > max {
        Err(ConfigError::InvertedRange { field, min, max })
    } else {
        Ok(())
    }
}

pub(crate) fn within(field: &'static str, value: f32, min: f32, max: f32) -> Result<f32, ConfigError> {
    let value = finite(field, value)?;
    if value < min || value > max {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    } else {
        Ok(value)
    }
}
