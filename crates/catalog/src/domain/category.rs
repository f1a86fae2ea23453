use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeasonCategory {
    AllSeason,
    Summer,
    Winter,
}

impl SeasonCategory {
    pub const ALL: [SeasonCategory; 3] = [Self::AllSeason, Self::Summer, Self::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonCategory::AllSeason => "ALL_SEASON",
            SeasonCategory::Summer => "SUMMER",
            SeasonCategory::Winter => "WINTER",
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, SeasonCategory::AllSeason)
    }

    /// Parses a `/season/{season}` segment. `all` means no season was chosen.
    pub fn from_path(segment: &str) -> Result<Option<Self>, ServiceError> {
        match segment.to_ascii_lowercase().as_str() {
            "all" => Ok(None),
            "all_season" => Ok(Some(SeasonCategory::AllSeason)),
            "summer" => Ok(Some(SeasonCategory::Summer)),
            "winter" => Ok(Some(SeasonCategory::Winter)),
            _ => Err(ServiceError::InvalidCategory(segment.to_string())),
        }
    }
}

impl FromStr for SeasonCategory {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|season| season.as_str() == s)
            .ok_or_else(|| ServiceError::InvalidCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonCategory {
    AllPerson,
    Men,
    Women,
    Children,
}

impl PersonCategory {
    pub const ALL: [PersonCategory; 4] = [Self::AllPerson, Self::Men, Self::Women, Self::Children];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonCategory::AllPerson => "ALL_PERSON",
            PersonCategory::Men => "MEN",
            PersonCategory::Women => "WOMEN",
            PersonCategory::Children => "CHILDREN",
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, PersonCategory::AllPerson)
    }

    /// Parses a `/product/{person}` segment, accepting the lowercase route names.
    pub fn from_path(segment: &str) -> Result<Self, ServiceError> {
        match segment.to_ascii_lowercase().as_str() {
            "all" | "all_person" => Ok(PersonCategory::AllPerson),
            "men" => Ok(PersonCategory::Men),
            "women" => Ok(PersonCategory::Women),
            "children" => Ok(PersonCategory::Children),
            _ => Err(ServiceError::InvalidCategory(segment.to_string())),
        }
    }
}

impl FromStr for PersonCategory {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|person| person.as_str() == s)
            .ok_or_else(|| ServiceError::InvalidCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Sneakers,
    RunningShoes,
    Boots,
    Slippers,
    Sandals,
    Loafers,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 6] = [
        Self::Sneakers,
        Self::RunningShoes,
        Self::Boots,
        Self::Slippers,
        Self::Sandals,
        Self::Loafers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Sneakers => "SNEAKERS",
            ProductCategory::RunningShoes => "RUNNING_SHOES",
            ProductCategory::Boots => "BOOTS",
            ProductCategory::Slippers => "SLIPPERS",
            ProductCategory::Sandals => "SANDALS",
            ProductCategory::Loafers => "LOAFERS",
        }
    }
}

/// Exact, case-sensitive match against the enum tokens.
impl FromStr for ProductCategory {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ServiceError::InvalidCategory(s.to_string()))
    }
}

macro_rules! token_conversions {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            // columns hold the enum tokens as TEXT
            impl TryFrom<String> for $ty {
                type Error = ServiceError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }
        )+
    };
}

token_conversions!(SeasonCategory, PersonCategory, ProductCategory);
