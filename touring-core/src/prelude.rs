//! This module reimports a common used types.

pub use crate::construction::InsertionCost;
pub use crate::construction::InsertionMode;
pub use crate::construction::InsertionPosition;
pub use crate::construction::InsertionResult;
pub use crate::construction::TourBuilder;

pub use crate::models::Point;
pub use crate::models::Tour;
pub use crate::models::distance;

pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::compare_floats;
