use thiserror::Error;

/// Failures surfaced by maze generation.
///
/// Bounds errors are raised before any randomness is consumed. Internal
/// inconsistencies (compacting an obstacle position, probability mass not
/// summing to 1.0) are assertions, not error values.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Grid too small to hold the fixed agent endpoints.
    #[error("rows and columns must both be at least 4 (got {rows}x{cols})")]
    BadDimensions { rows: i32, cols: i32 },

    /// Obstacle count would leave fewer than one free non-endpoint cell.
    #[error("obstacle count must be between 0 and {max} for this grid (got {requested})")]
    TooManyObstacles { requested: i32, max: i32 },

    /// No valid maze found within the attempt budget.
    #[error("no valid maze found after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error("failed to write model file: {0}")]
    Io(#[from] std::io::Error),
}
