use tracing::debug;

use crate::model::{Discount, SalesLog, TicketDefinition};

/// In-memory catalog of ticket types and discount rules, plus the running
/// sales counter. Built at startup and handed to whoever needs it.
#[derive(Debug, Clone, Default)]
pub struct TicketRegistry {
    tickets: Vec<TicketDefinition>,
    discounts: Vec<Discount>,
    sales: SalesLog,
}

impl TicketRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the ticket types sold at the circuit.
    pub fn with_default_catalog() -> Self {
        let mut registry = Self::new();
        registry.register_ticket(TicketDefinition::single_race());
        registry.register_ticket(TicketDefinition::weekend_pass());
        registry.register_ticket(TicketDefinition::group(4));
        registry.register_ticket(TicketDefinition::group(10));
        registry
    }

    pub fn register_ticket(&mut self, ticket: TicketDefinition) {
        debug!("Registering ticket type '{}'", ticket.name());
        self.tickets.push(ticket);
    }

    pub fn lookup_ticket_by_name(&self, name: &str) -> Option<&TicketDefinition> {
        self.tickets.iter().find(|t| t.name() == name)
    }

    pub fn list_ticket_names(&self) -> Vec<String> {
        self.tickets.iter().map(|t| t.name().to_string()).collect()
    }

    pub fn tickets(&self) -> &[TicketDefinition] {
        &self.tickets
    }

    pub fn add_discount(&mut self, discount: Discount) {
        self.discounts.push(discount);
    }

    pub fn set_discounts(&mut self, discounts: Vec<Discount>) {
        self.discounts = discounts;
    }

    pub fn list_active_discounts(&self) -> Vec<&Discount> {
        self.discounts.iter().filter(|d| d.is_active()).collect()
    }

    /// Every discount, active or not, in the order they were added.
    pub fn list_all_discounts(&self) -> &[Discount] {
        &self.discounts
    }

    pub fn discount_by_name_mut(&mut self, name: &str) -> Option<&mut Discount> {
        self.discounts.iter_mut().find(|d| d.name() == name)
    }

    /// Price after the first active discount aimed at this ticket's name.
    /// Later matching discounts are ignored even if they are larger.
    pub fn price_for(&self, ticket: &TicketDefinition) -> f64 {
        self.discounts
            .iter()
            .find(|d| d.applies_to(ticket.name()))
            .map_or(ticket.price(), |d| d.apply(ticket.price()))
    }

    /// Adds `quantity` to today's counter.
    pub fn record_sale(&mut self, quantity: i64) {
        self.record_sale_on(&SalesLog::today(), quantity);
    }

    pub fn record_sale_on(&mut self, date: &str, quantity: i64) {
        self.sales.record(date, quantity);
    }

    pub fn set_sales(&mut self, sales: SalesLog) {
        self.sales = sales;
    }

    pub fn sales_report(&self) -> SalesLog {
        self.sales.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let registry = TicketRegistry::with_default_catalog();
        assert_eq!(
            registry.list_ticket_names(),
            vec![
                "Single Race Ticket",
                "Weekend Pass",
                "Group Ticket (4)",
                "Group Ticket (10)"
            ]
        );
    }

    #[test]
    fn test_lookup_returns_first_match() {
        let mut registry = TicketRegistry::new();
        let mut cheap = TicketDefinition::new("Paddock", 100.0, 1, &[]);
        cheap.set_features(vec!["first".to_string()]);
        registry.register_ticket(cheap);
        registry.register_ticket(TicketDefinition::new("Paddock", 200.0, 1, &[]));

        let found = registry.lookup_ticket_by_name("Paddock");
        assert_eq!(found.map(|t| t.price()), Some(100.0));
        assert!(registry.lookup_ticket_by_name("paddock").is_none());
    }
}
