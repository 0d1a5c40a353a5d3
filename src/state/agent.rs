//! Agent entity
//!
//! Defines the agent descriptor, the closed set of agent types, and the
//! validated factory used to build agents from loosely-typed input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for an agent
pub type AgentId = String;

/// Errors raised while building an agent from untrusted input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// Descriptor could not be parsed (unknown field, missing field, wrong type)
    #[error("Malformed agent descriptor: {0}")]
    Malformed(String),

    /// A required text field was present but blank
    #[error("Agent field `{0}` cannot be empty")]
    EmptyField(&'static str),

    /// Agent type string is not one of the known types
    #[error("Unknown agent type: {0}")]
    UnknownType(String),
}

/// Agent type enumeration
/// Represents the specialization area an agent covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    /// Routes requests to the specialized agents
    Orchestrator,
    /// Builds travel itineraries
    Itinerary,
    /// Handles reservations
    Booking,
    /// Personalized recommendations
    Suggestions,
    /// Best-time-to-travel analysis
    Seasonal,
    /// Deals and discounts
    Offers,
}

impl AgentType {
    /// All agent types, in declaration order
    pub const ALL: [AgentType; 6] = [
        AgentType::Orchestrator,
        AgentType::Itinerary,
        AgentType::Booking,
        AgentType::Suggestions,
        AgentType::Seasonal,
        AgentType::Offers,
    ];

    /// Wire representation of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentType::Orchestrator => "orchestrator",
            AgentType::Itinerary => "itinerary",
            AgentType::Booking => "booking",
            AgentType::Suggestions => "suggestions",
            AgentType::Seasonal => "seasonal",
            AgentType::Offers => "offers",
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentType {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AgentError::UnknownType(s.to_string()))
    }
}

/// Agent structure
/// Describes one capability of the travel assistant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Agent {
    /// Unique identifier, immutable once created
    pub id: AgentId,
    /// Display name
    pub name: String,
    /// Specialization area
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    /// Free-text description
    pub description: String,
    /// Specialization tags, matched case-insensitively
    pub specialization: Vec<String>,
    /// Presentation color (opaque)
    pub color: String,
    /// Presentation icon name (opaque)
    pub icon: String,
    /// Whether the agent is currently active
    #[serde(default)]
    pub active: bool,
}

/// Strict input shape for building an agent.
///
/// Unknown fields are rejected; `active` is the only optional field.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentDescriptor {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Agent type, one of the known lowercase names
    #[serde(rename = "type")]
    pub agent_type: String,
    /// Free-text description
    pub description: String,
    /// Specialization tags
    pub specialization: Vec<String>,
    /// Presentation color
    pub color: String,
    /// Presentation icon
    pub icon: String,
    /// Initial activity flag
    #[serde(default)]
    pub active: bool,
}

impl TryFrom<AgentDescriptor> for Agent {
    type Error = AgentError;

    fn try_from(descriptor: AgentDescriptor) -> Result<Self, Self::Error> {
        if descriptor.id.trim().is_empty() {
            return Err(AgentError::EmptyField("id"));
        }
        if descriptor.name.trim().is_empty() {
            return Err(AgentError::EmptyField("name"));
        }
        let agent_type = descriptor.agent_type.parse()?;

        Ok(Self {
            id: descriptor.id,
            name: descriptor.name,
            agent_type,
            description: descriptor.description,
            specialization: descriptor.specialization,
            color: descriptor.color,
            icon: descriptor.icon,
            active: descriptor.active,
        })
    }
}

impl Agent {
    /// Create an inactive agent with the given identity and no metadata
    pub fn new(id: impl Into<AgentId>, name: impl Into<String>, agent_type: AgentType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            agent_type,
            description: String::new(),
            specialization: Vec::new(),
            color: String::new(),
            icon: String::new(),
            active: false,
        }
    }

    /// Build an agent from an arbitrary JSON value
    ///
    /// Rejects unknown fields, missing required fields, blank `id`/`name`
    /// and unrecognized types.
    pub fn from_value(value: serde_json::Value) -> Result<Self, AgentError> {
        let descriptor: AgentDescriptor =
            serde_json::from_value(value).map_err(|e| AgentError::Malformed(e.to_string()))?;
        Self::try_from(descriptor)
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the specialization tags
    pub fn with_specialization<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialization = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set color and icon
    pub fn with_presentation(mut self, color: impl Into<String>, icon: impl Into<String>) -> Self {
        self.color = color.into();
        self.icon = icon.into();
        self
    }

    /// Set the initial activity flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Whether any specialization tag equals `tag`, ignoring case
    pub fn has_specialization(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.specialization
            .iter()
            .any(|spec| spec.to_lowercase() == tag)
    }
}
