use serde::{Deserialize, Serialize};

use super::round_cents;

/// A percentage reduction on one ticket type, matched by exact ticket name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    name: String,
    percentage: i32,
    ticket_type: String,
    active: bool,
}

impl Discount {
    /// New discounts start out active.
    pub fn new(name: &str, percentage: i32, ticket_type: &str) -> Self {
        Discount {
            name: name.to_string(),
            percentage,
            ticket_type: ticket_type.to_string(),
            active: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn percentage(&self) -> i32 {
        self.percentage
    }

    pub fn set_percentage(&mut self, pct: i32) {
        self.percentage = pct;
    }

    pub fn ticket_type(&self) -> &str {
        &self.ticket_type
    }

    pub fn set_ticket_type(&mut self, ticket_type: &str) {
        self.ticket_type = ticket_type.to_string();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Flips the active flag and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn applies_to(&self, ticket_name: &str) -> bool {
        self.active && self.ticket_type == ticket_name
    }

    pub fn apply(&self, price: f64) -> f64 {
        if self.active {
            round_cents(price * (1.0 - f64::from(self.percentage) / 100.0))
        } else {
            price
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_active_and_inactive() {
        let mut disc = Discount::new("Weekend Promo", 20, "Weekend Pass");
        assert!(disc.is_active());
        assert_eq!(disc.apply(750.0), 600.0);

        disc.deactivate();
        assert!(!disc.is_active());
        assert_eq!(disc.apply(750.0), 750.0);

        assert!(disc.toggle());
        assert_eq!(disc.apply(750.0), 600.0);
    }

    #[test]
    fn test_apply_rounds_to_cents() {
        let disc = Discount::new("Odd", 15, "Single Race Ticket");
        assert_eq!(disc.apply(99.99), 84.99);
        let third = Discount::new("Third", 33, "Single Race Ticket");
        assert_eq!(third.apply(10.0), 6.7);
    }

    #[test]
    fn test_out_of_range_percentage_accepted() {
        let disc = Discount::new("Bogus", 150, "Weekend Pass");
        assert_eq!(disc.apply(100.0), -50.0);
    }
}
