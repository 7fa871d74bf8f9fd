use std::sync::Arc;

/// Alias to a scalar floating type used for coordinates and distances.
pub type Float = f64;

/// A logger type which is called with various information regarding tour construction.
pub type InfoLogger = Arc<dyn Fn(&str)>;
