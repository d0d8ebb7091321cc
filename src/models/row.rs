use serde::{Deserialize, Serialize};

/// A single record from the source file. Fields are carried through as-is;
/// the schema is not interpreted.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Row(pub Vec<String>);
