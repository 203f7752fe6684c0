use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Stable identifier of a pipeline or transform (e.g. `basic-echo`).
///
/// Borrows as `str` so catalog maps can be queried with plain string slices.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

/// Which half of the catalog an entry belongs to.
///
/// Serialized as the `type` literal carried by every entry. Unlike the
/// category tags there is no open-ended variant: a document whose `type` is
/// anything else is rejected at load time.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum EntryKind {
    Pipeline,
    Transform,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Pipeline => "pipeline",
            EntryKind::Transform => "transform",
        }
    }

    /// Directory under the package root holding this kind's template files.
    pub fn directory(self) -> &'static str {
        match self {
            EntryKind::Pipeline => "pipelines",
            EntryKind::Transform => "transforms",
        }
    }

    /// Default catalog document name for this kind.
    pub fn document_name(self) -> &'static str {
        match self {
            EntryKind::Pipeline => "pipelines.json",
            EntryKind::Transform => "transforms.json",
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "pipeline" => Some(EntryKind::Pipeline),
            "transform" => Some(EntryKind::Transform),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EntryKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntryKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_str(&value).ok_or_else(|| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&value),
                &"\"pipeline\" or \"transform\"",
            )
        })
    }
}
