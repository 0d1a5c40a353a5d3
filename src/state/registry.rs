//! Agent registry
//!
//! In-memory store of agents keyed by id, with an index of active ids.
//! Lookups for unknown ids report absence through `Option`/`bool`; nothing
//! here returns an error.

use super::agent::{Agent, AgentId, AgentType};
use std::collections::HashMap;
use tracing::debug;

/// Registry of agents with a secondary index of active ids
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    /// id -> Agent
    agents: HashMap<AgentId, Agent>,
    /// Insertion order, for deterministic listing
    order: Vec<AgentId>,
    /// Ids whose `active` flag is set, no duplicates
    active: Vec<AgentId>,
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentRegistry {
    /// Create a registry populated with the built-in agents, all active
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for agent in builtin_agents() {
            registry.add(agent);
        }
        registry
    }

    /// Create a registry with no agents
    pub fn empty() -> Self {
        Self {
            agents: HashMap::new(),
            order: Vec::new(),
            active: Vec::new(),
        }
    }

    /// Get an agent by id
    pub fn get(&self, id: &str) -> Option<&Agent> {
        self.agents.get(id)
    }

    /// Whether an agent with this id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.agents.contains_key(id)
    }

    /// Number of registered agents
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the registry holds no agents
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// All agents, in insertion order
    pub fn list_all(&self) -> Vec<&Agent> {
        self.order
            .iter()
            .filter_map(|id| self.agents.get(id))
            .collect()
    }

    /// Active agents, in activation order
    ///
    /// Walks the active index but re-checks each agent's flag, so a stale
    /// index entry never surfaces an inactive or removed agent.
    pub fn list_active(&self) -> Vec<&Agent> {
        self.active
            .iter()
            .filter_map(|id| self.agents.get(id))
            .filter(|agent| agent.active)
            .collect()
    }

    /// Ids currently tracked as active
    pub fn active_ids(&self) -> &[AgentId] {
        &self.active
    }

    /// Mark an agent active
    /// Returns false if the id is unknown
    pub fn activate(&mut self, id: &str) -> bool {
        let Some(agent) = self.agents.get_mut(id) else {
            return false;
        };
        agent.active = true;
        if !self.active.iter().any(|a| a == id) {
            self.active.push(id.to_string());
        }
        debug!(agent_id = %id, "Agent activated");
        true
    }

    /// Mark an agent inactive
    /// Returns false if the id is unknown
    pub fn deactivate(&mut self, id: &str) -> bool {
        let Some(agent) = self.agents.get_mut(id) else {
            return false;
        };
        agent.active = false;
        self.active.retain(|a| a != id);
        debug!(agent_id = %id, "Agent deactivated");
        true
    }

    /// Add an agent to the registry
    /// Returns false without touching anything if the id already exists
    pub fn add(&mut self, agent: Agent) -> bool {
        if self.contains(&agent.id) {
            return false;
        }
        if agent.active {
            self.active.push(agent.id.clone());
        }
        self.order.push(agent.id.clone());
        debug!(agent_id = %agent.id, active = agent.active, "Agent added");
        self.agents.insert(agent.id.clone(), agent);
        true
    }

    /// Remove an agent from the registry and the active index
    /// Returns false if the id is unknown
    pub fn remove(&mut self, id: &str) -> bool {
        if self.agents.remove(id).is_none() {
            return false;
        }
        self.order.retain(|a| a != id);
        self.active.retain(|a| a != id);
        debug!(agent_id = %id, "Agent removed");
        true
    }

    /// Agents of the given type, in insertion order
    pub fn list_by_type(&self, agent_type: AgentType) -> Vec<&Agent> {
        self.list_all()
            .into_iter()
            .filter(|agent| agent.agent_type == agent_type)
            .collect()
    }

    /// Agents with a specialization tag equal to `tag`, ignoring case
    pub fn list_by_specialization(&self, tag: &str) -> Vec<&Agent> {
        self.list_all()
            .into_iter()
            .filter(|agent| agent.has_specialization(tag))
            .collect()
    }
}

/// The six agents every registry starts with
pub fn builtin_agents() -> Vec<Agent> {
    vec![
        Agent::new("orchestrator", "Orchestrator", AgentType::Orchestrator)
            .with_description("Main coordinator that routes requests to specialized agents")
            .with_specialization(["Coordination", "Routing"])
            .with_presentation("#2563EB", "Bot")
            .with_active(true),
        Agent::new("itinerary-planner", "Trip Planner", AgentType::Itinerary)
            .with_description("Creates detailed travel itineraries and plans")
            .with_specialization(["Itinerary Planning", "Route Optimization"])
            .with_presentation("#059669", "MapPin")
            .with_active(true),
        Agent::new("booking-specialist", "Booking Specialist", AgentType::Booking)
            .with_description("Handles hotel, flight, and activity bookings")
            .with_specialization(["Bookings", "Reservations"])
            .with_presentation("#DC2626", "Calendar")
            .with_active(true),
        Agent::new("suggestion-engine", "Recommendation Engine", AgentType::Suggestions)
            .with_description("Provides personalized travel recommendations")
            .with_specialization(["Recommendations", "Personalization"])
            .with_presentation("#7C3AED", "Lightbulb")
            .with_active(true),
        Agent::new("seasonal-analyst", "Seasonal Analyst", AgentType::Seasonal)
            .with_description("Analyzes best travel times and seasonal factors")
            .with_specialization(["Seasonal Analysis", "Timing"])
            .with_presentation("#EA580C", "Sun")
            .with_active(true),
        Agent::new("offers-manager", "Deals Manager", AgentType::Offers)
            .with_description("Finds and manages travel deals and offers")
            .with_specialization(["Deals", "Offers", "Discounts"])
            .with_presentation("#16A34A", "Tag")
            .with_active(true),
    ]
}
