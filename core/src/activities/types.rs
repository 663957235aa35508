//! Core types for the activity roster.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use thiserror::Error;

/// An extracurricular activity students can sign up for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    /// Human-readable meeting times (e.g. "Fridays, 3:30 PM - 5:00 PM")
    pub schedule: String,
    /// Advertised capacity. Not enforced on signup.
    pub max_participants: u32,
    /// Participant emails in signup order
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper for seeding initial participants
    pub fn with_participants(mut self, emails: &[&str]) -> Self {
        self.participants = emails.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),
}

/// Result of a signup request against an existing activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    Registered,
    AlreadyRegistered,
}

/// All activities, keyed by unique name
#[derive(Debug, Clone, Default)]
pub struct ActivityRoster {
    activities: HashMap<String, Activity>,
    /// Insertion order, used for listing
    order: Vec<String>,
}

impl ActivityRoster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an activity, or replace one with the same name in place
    pub fn insert(&mut self, name: &str, activity: Activity) {
        if self.activities.insert(name.to_string(), activity).is_none() {
            self.order.push(name.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate activities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.order
            .iter()
            .filter_map(|name| self.activities.get(name).map(|a| (name.as_str(), a)))
    }

    /// Register a student email for an activity.
    ///
    /// Registering twice is not an error; the roster is left untouched and
    /// `AlreadyRegistered` is reported.
    pub fn signup(&mut self, name: &str, email: &str) -> Result<SignupOutcome, RosterError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| RosterError::ActivityNotFound(name.to_string()))?;

        if activity.is_registered(email) {
            return Ok(SignupOutcome::AlreadyRegistered);
        }

        activity.participants.push(email.to_string());
        Ok(SignupOutcome::Registered)
    }
}

// Serialized as a JSON object keyed by activity name, in insertion order.
impl Serialize for ActivityRoster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, activity) in self.iter() {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}
