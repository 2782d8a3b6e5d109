use serde::{Deserialize, Serialize};

/// A relation that the backend sends either populated or as a bare id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef<T> {
    Id(String),
    Expanded(T),
}

impl<T> EntityRef<T> {
    pub fn expanded(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Expanded(entity) => Some(entity),
        }
    }
}
