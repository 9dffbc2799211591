use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("cannot apply a {found} update to a {expected} record")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A record held in a collection and managed by the generic CRUD layer.
///
/// Every entity kind pairs with an explicit update struct whose fields are
/// all optional. `apply` merges only the fields that are set; `create`
/// builds a brand-new record from the same struct, filling the gaps with
/// defaults. Neither validates required fields.
pub trait Entity: Clone + std::fmt::Debug {
    type Update: Clone + std::fmt::Debug + Default;

    /// Human label for the kind, used in notifications and logs.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn display_name(&self) -> &str;

    /// Merge `update` into `self`, refreshing `updated_at` when the kind has one.
    fn apply(&mut self, update: Self::Update) -> Result<(), DomainError>;

    /// Build a new record with the given id and default foreign key.
    fn create(id: String, parent_id: &str, update: Self::Update) -> Result<Self, DomainError>;
}

/// Generate a fresh client-side identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A timestamp guaranteed to be strictly later than `previous`.
pub fn touched(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

/// Turn an empty foreign key into `None`.
pub(crate) fn optional_parent(parent_id: &str) -> Option<String> {
    if parent_id.is_empty() {
        None
    } else {
        Some(parent_id.to_string())
    }
}

/// Deserialize a clearable update field: a missing key stays `None`
/// (leave unchanged) while an explicit `null` becomes `Some(None)` (clear).
/// Pair with `#[serde(default)]`.
pub fn clearable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
