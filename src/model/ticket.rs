use serde::{Deserialize, Serialize};

use super::TicketId;

/// Which preset a ticket was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketKind {
    SingleRace,
    WeekendPass,
    Group { group_size: u32 },
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketDefinition {
    id: TicketId,
    name: String,
    price: f64,
    valid_days: u32,
    features: Vec<String>,
    kind: TicketKind,
}

impl TicketDefinition {
    pub fn new(name: &str, price: f64, valid_days: u32, features: &[&str]) -> Self {
        Self::build(name.to_string(), price, valid_days, features, TicketKind::Custom)
    }

    fn build(
        name: String,
        price: f64,
        valid_days: u32,
        features: &[&str],
        kind: TicketKind,
    ) -> Self {
        TicketDefinition {
            id: TicketId::new(),
            name,
            price,
            valid_days,
            features: features.iter().map(|f| f.to_string()).collect(),
            kind,
        }
    }

    pub fn single_race() -> Self {
        Self::build(
            "Single Race Ticket".to_string(),
            300.0,
            1,
            &["Access to one race", "Standard seating"],
            TicketKind::SingleRace,
        )
    }

    pub fn weekend_pass() -> Self {
        Self::build(
            "Weekend Pass".to_string(),
            750.0,
            3,
            &["All weekend races", "Premium seating"],
            TicketKind::WeekendPass,
        )
    }

    /// Group pricing: each seat costs `max(250, 300 - 5 * size)`.
    pub fn group(group_size: u32) -> Self {
        Self::build(
            format!("Group Ticket ({})", group_size),
            group_price(group_size),
            1,
            &["Group seating", "Discounted rate"],
            TicketKind::Group { group_size },
        )
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn valid_days(&self) -> u32 {
        self.valid_days
    }

    pub fn set_valid_days(&mut self, days: u32) {
        self.valid_days = days;
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn set_features(&mut self, features: Vec<String>) {
        self.features = features;
    }

    pub fn kind(&self) -> TicketKind {
        self.kind
    }

    pub fn group_size(&self) -> Option<u32> {
        match self.kind {
            TicketKind::Group { group_size } => Some(group_size),
            _ => None,
        }
    }

    /// Changes the recorded group size. Price and name are left as built.
    pub fn set_group_size(&mut self, size: u32) {
        if let TicketKind::Group { group_size } = &mut self.kind {
            *group_size = size;
        }
    }
}

pub fn group_unit_price(group_size: u32) -> f64 {
    (300.0 - 5.0 * f64::from(group_size)).max(250.0)
}

pub fn group_price(group_size: u32) -> f64 {
    group_unit_price(group_size) * f64::from(group_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let single = TicketDefinition::single_race();
        assert_eq!(single.name(), "Single Race Ticket");
        assert_eq!(single.price(), 300.0);
        assert_eq!(single.valid_days(), 1);
        assert_eq!(single.kind(), TicketKind::SingleRace);

        let weekend = TicketDefinition::weekend_pass();
        assert_eq!(weekend.name(), "Weekend Pass");
        assert_eq!(weekend.price(), 750.0);
        assert_eq!(weekend.valid_days(), 3);
        assert_eq!(
            weekend.features(),
            &["All weekend races".to_string(), "Premium seating".to_string()]
        );
        assert_eq!(weekend.group_size(), None);
    }

    #[test]
    fn test_group_pricing() {
        let four = TicketDefinition::group(4);
        assert_eq!(four.name(), "Group Ticket (4)");
        assert_eq!(four.price(), 1120.0);
        assert_eq!(four.group_size(), Some(4));

        // 300 - 50 hits the 250 floor exactly
        assert_eq!(TicketDefinition::group(10).price(), 2500.0);
        assert_eq!(TicketDefinition::group(20).price(), 5000.0);
        assert_eq!(group_unit_price(1), 295.0);
        assert_eq!(group_price(0), 0.0);
    }

    #[test]
    fn test_set_group_size_ignored_for_presets() {
        let mut single = TicketDefinition::single_race();
        single.set_group_size(5);
        assert_eq!(single.group_size(), None);

        let mut group = TicketDefinition::group(4);
        group.set_group_size(6);
        assert_eq!(group.group_size(), Some(6));
        assert_eq!(group.price(), 1120.0);
    }
}
