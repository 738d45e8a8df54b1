use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub uid: String,
  pub full_name: String,
}

impl User {
  pub fn new(uid: impl Into<String>, full_name: impl Into<String>) -> Self {
    Self {
      uid: uid.into(),
      full_name: full_name.into(),
    }
  }
}
