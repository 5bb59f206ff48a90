use serde::{Deserialize, Serialize};

/// Body data of a daily report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPayload {
    /// Things finished today
    pub achievements: Vec<String>,
    /// Open problems or blockers
    pub challenges: Vec<String>,
    /// Planned work for the next day
    pub next_steps: Vec<String>,
    /// Overall mood label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Self-assessed productivity, 0 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub productivity_score: Option<u8>,
}

impl ContentPayload {
    /// Total number of list entries across all sections
    pub fn item_count(&self) -> usize {
        self.achievements.len() + self.challenges.len() + self.next_steps.len()
    }

    /// Check if the payload carries nothing to render
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0 && self.mood.is_none() && self.productivity_score.is_none()
    }
}
