//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// LLM models available through the inference provider (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Llama33Versatile,
    Llama31Instant,
    Llama4Maverick,
    Gemma2,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama33Versatile => "llama-3.3-70b-versatile",
            Model::Llama31Instant => "llama-3.1-8b-instant",
            Model::Llama4Maverick => "meta-llama/llama-4-maverick-17b-128e-instruct",
            Model::Gemma2 => "gemma2-9b-it",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Llama33Versatile
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "llama-3.3-70b-versatile" => Model::Llama33Versatile,
            "llama-3.1-8b-instant" => Model::Llama31Instant,
            "meta-llama/llama-4-maverick-17b-128e-instruct" => Model::Llama4Maverick,
            "gemma2-9b-it" => Model::Gemma2,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
