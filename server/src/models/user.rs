use serde::{Deserialize, Serialize};

/// A single user record, keyed by `username`.
///
/// Every field defaults to the empty string so partial JSON bodies decode;
/// an empty field means "not supplied" to the partial-update merge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: String,
}
