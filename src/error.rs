use thiserror::Error;

pub type GanttResult<T> = Result<T, GanttError>;

#[derive(Debug, Error)]
pub enum GanttError {
    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("container `{0}` not found in host")]
    ContainerNotFound(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid pixel range: [{min}, {max}]")]
    InvalidPixelRange { min: f64, max: f64 },
}
