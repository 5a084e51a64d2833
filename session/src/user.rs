//! Signed-in principal and the closed vocabularies used for authorization.
//!
//! DESIGN
//! ======
//! Roles and divisions are enums rather than free text so allow-lists are
//! checked by the compiler. Decoding stays tolerant: an unknown division or
//! availability entry decodes as absent instead of failing the whole profile,
//! and an unknown role is kept verbatim in [`Role::Other`], which no allow-list
//! can name.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A wire value that does not belong to the target vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized value: {0}")]
pub struct UnknownValue(pub String);

/// Declares a closed vocabulary that travels on the wire as a slug.
///
/// Each variant lists its canonical slug, a display label and any extra
/// spellings accepted on decode.
macro_rules! slug_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $slug:literal, $label:literal $(, $alias:literal)* ; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Every variant in display order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Canonical wire form.
            #[must_use]
            pub fn slug(self) -> &'static str {
                match self {
                    $( Self::$variant => $slug, )+
                }
            }

            /// Human-readable label for forms.
            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw {
                    $( $slug $(| $alias)* => Ok(Self::$variant), )+
                    other => Err(UnknownValue(other.to_owned())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.slug())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.slug())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(D::Error::custom)
            }
        }
    };
}

slug_enum! {
    /// Technical division a member primarily works in.
    TechnicalDivision {
        BackendDevelopment => "backend-dev", "Backend Development", "backend";
        DataScience => "data-science", "Data Science";
        GameDevelopment => "game-development", "Game Development", "game-dev";
        FrontendDevelopment => "frontend-dev", "Frontend Development", "frontend";
        CompetitiveProgramming => "competitive-programming", "Competitive Programming", "cp";
        MobileApps => "mobile-apps", "Mobile Apps", "mobile";
        UiUx => "ui-ux", "UI/UX", "uiux";
    }
}

slug_enum! {
    /// Optional managerial division.
    ManagerialDivision {
        InternalAffairs => "internal-affairs", "Internal Affairs";
        HumanDevelopment => "human-development", "Human Development";
        ResourceManager => "resource-manager", "Resource Manager";
        ExternalAffairs => "external-affairs", "External Affairs";
        InformationTechnology => "information-technology", "Information Technology";
        AssignationManager => "assignation-manager", "Assignation Manager";
        SkillDevelopment => "skill-development", "Skill Development";
        BusinessManagement => "business-management", "Business Management", "bussines-management";
        ResearchAndCompetition => "research-and-competition", "Research and Competition";
        ContentAndDesign => "content-and-design", "Content and Design";
        ProjectManager => "project-manager", "Project Manager";
    }
}

slug_enum! {
    /// A weekly availability slot.
    Availability {
        Monday => "monday", "Monday";
        Tuesday => "tuesday", "Tuesday";
        Wednesday => "wednesday", "Wednesday";
        Thursday => "thursday", "Thursday";
        Friday => "friday", "Friday";
        Weekend => "weekend", "Weekend";
    }
}

/// Organizational role used for coarse authorization.
///
/// Matching is exact and case-sensitive: `"ceo"` is `Other("ceo")`, not `Ceo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    DivisionHead,
    Ceo,
    Cfo,
    InternalAffairs,
    ResourceManager,
    #[default]
    Member,
    /// Any other wire value, kept verbatim (often a division name).
    Other(String),
}

impl Role {
    /// Wire spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::DivisionHead => "Division Head",
            Self::Ceo => "CEO",
            Self::Cfo => "CFO",
            Self::InternalAffairs => "Internal Affairs",
            Self::ResourceManager => "Resource Manager",
            Self::Member => "Member",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        match raw {
            "Division Head" => Self::DivisionHead,
            "CEO" => Self::Ceo,
            "CFO" => Self::Cfo,
            "Internal Affairs" => Self::InternalAffairs,
            "Resource Manager" => Self::ResourceManager,
            "Member" => Self::Member,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user as returned by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier; numeric ids are accepted and kept as text.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Missing, null or non-text roles decode as [`Role::Member`].
    #[serde(default, deserialize_with = "deserialize_role")]
    pub role: Role,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub main_division: Option<TechnicalDivision>,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub managerial_division: Option<ManagerialDivision>,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub available_times: Vec<Availability>,
}

impl User {
    /// First-run onboarding is pending until a technical division is chosen.
    #[must_use]
    pub fn needs_profile_completion(&self) -> bool {
        self.main_division.is_none()
    }

    /// Up to two uppercase initials for avatar fallbacks.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(id) => Ok(id.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(Role::from).unwrap_or_default())
}

fn deserialize_lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| raw.parse().ok()))
}

fn deserialize_lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let Some(items) = value.as_array() else {
        return Ok(Vec::new());
    };
    Ok(items
        .iter()
        .filter_map(serde_json::Value::as_str)
        .filter_map(|raw| raw.trim().parse().ok())
        .collect())
}
