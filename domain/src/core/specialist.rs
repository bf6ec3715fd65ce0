//! Specialist value object: the roles that sit on the panel

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A specialist role on the panel (Value Object)
///
/// The three built-in roles form the default roster. Any other name is
/// accepted as [`Specialist::Custom`] and gets a generic prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Specialist {
    Cardiologist,
    Psychologist,
    Pulmonologist,
    Custom(String),
}

impl Specialist {
    pub fn as_str(&self) -> &str {
        match self {
            Specialist::Cardiologist => "Cardiologist",
            Specialist::Psychologist => "Psychologist",
            Specialist::Pulmonologist => "Pulmonologist",
            Specialist::Custom(s) => s,
        }
    }

    /// The roster used when nothing else is configured
    pub fn default_roster() -> Vec<Specialist> {
        vec![
            Specialist::Cardiologist,
            Specialist::Psychologist,
            Specialist::Pulmonologist,
        ]
    }

    /// Clinical focus areas used when building the specialist's prompt
    pub fn focus(&self) -> &str {
        match self {
            Specialist::Cardiologist => {
                "cardiac issues such as arrhythmias or structural abnormalities, \
                 using any ECG, blood test, Holter monitor or echocardiogram results"
            }
            Specialist::Psychologist => {
                "mental health issues such as anxiety, depression or trauma, \
                 and how they may explain the reported symptoms"
            }
            Specialist::Pulmonologist => {
                "respiratory issues such as asthma, COPD or lung infections \
                 that could explain the reported symptoms"
            }
            Specialist::Custom(_) => "findings relevant to your own specialty",
        }
    }
}

impl std::fmt::Display for Specialist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Specialist {
    type Err = std::convert::Infallible;

    /// Case-insensitive for the built-in roles; anything else is kept verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "cardiologist" => Specialist::Cardiologist,
            "psychologist" => Specialist::Psychologist,
            "pulmonologist" => Specialist::Pulmonologist,
            _ => Specialist::Custom(s.trim().to_string()),
        })
    }
}

impl From<&str> for Specialist {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(specialist) => specialist,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Specialist {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Specialist {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Specialist::from(s.as_str()))
    }
}
