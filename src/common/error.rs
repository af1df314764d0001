use thiserror::Error;

/// Reasons a body factory refuses to build a body.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BodyError {
    #[error("body area {area} is outside the allowed range [{min}, {max}]")]
    AreaOutOfRange { area: f64, min: f64, max: f64 },
    #[error("body density {density} is outside the allowed range [{min}, {max}]")]
    DensityOutOfRange { density: f64, min: f64, max: f64 },
}
