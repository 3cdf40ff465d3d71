//! Company profile shown on the home and about pages.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Company-wide copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Company {
    /// Legal/display name
    name: String,
    /// Home page hero line
    tagline: String,
    /// Year founded
    founded: u16,
    /// City, state
    headquarters: String,
    /// Mission statement for the about page
    mission: String,
}
