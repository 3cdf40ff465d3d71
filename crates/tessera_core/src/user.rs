//! Admin-facing user records.

use chrono::NaiveDate;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Console role of a user account.
///
/// # Examples
///
/// ```
/// use tessera_core::UserRole;
///
/// assert_eq!(UserRole::Editor.to_string(), "editor");
/// assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UserRole {
    /// Full console access
    Admin,
    /// Content management
    Editor,
    /// Customer account
    User,
}

/// Account status of a user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UserStatus {
    /// In good standing
    Active,
    /// Blocked by an administrator
    Suspended,
    /// Awaiting verification
    Pending,
}

/// A user as the admin console sees it.
///
/// # Examples
///
/// ```
/// use tessera_core::{UserBuilder, UserRole, UserStatus};
///
/// let user = UserBuilder::default()
///     .id(7u32)
///     .name("Jordan Blake")
///     .email("jordan@example.com")
///     .role(UserRole::Editor)
///     .status(UserStatus::Active)
///     .build()
///     .unwrap();
///
/// assert_eq!(user.platforms_used, 0);
/// assert!(!user.verified);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct User {
    /// Unique identifier within the catalog
    pub id: u32,
    /// Display name
    pub name: String,
    /// Contact address
    pub email: String,
    /// Console role
    pub role: UserRole,
    /// Account status
    pub status: UserStatus,
    /// Sum invested across all platforms, in dollars
    #[builder(default)]
    #[serde(default)]
    pub investment_total: f64,
    /// Number of Tessera platforms the user is enrolled in
    #[builder(default)]
    #[serde(default)]
    pub platforms_used: u32,
    /// Identity verification completed
    #[builder(default)]
    #[serde(default)]
    pub verified: bool,
    /// Sign-up date
    #[builder(default = "NaiveDate::default()")]
    #[serde(default)]
    pub joined: NaiveDate,
}
