use serde::{Deserialize, Serialize};

use super::EventId;

/// A race day at a circuit. The date is kept as the string it was entered as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    date: String,
    location: String,
}

impl Event {
    pub fn new(date: &str, location: &str) -> Self {
        Event {
            id: EventId::new(),
            date: date.to_string(),
            location: location.to_string(),
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn set_date(&mut self, date: &str) {
        self.date = date.to_string();
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: &str) {
        self.location = location.to_string();
    }
}
