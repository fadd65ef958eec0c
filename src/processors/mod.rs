//! Pipeline stages between the routing provider's raw answer and the response
//! payload: alternate-route resolution, feature extraction, comparison.

pub mod alternates;
pub mod comparator;
pub mod features;
