use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccountId, Event, ReservationId, TicketDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    Active,
    Cancelled,
}

/// A booking of one or more tickets for a single event.
///
/// Tickets and the event are stored by value, so later catalog changes do not
/// alter what was sold. `total_cost` is kept equal to the sum of ticket prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    customer_id: AccountId,
    tickets: Vec<TicketDefinition>,
    event: Event,
    payment_method: String,
    total_cost: f64,
    reserved_at: DateTime<Utc>,
    status: ReservationStatus,
}

impl Reservation {
    pub fn new(
        customer_id: AccountId,
        tickets: Vec<TicketDefinition>,
        event: Event,
        payment_method: &str,
    ) -> Self {
        let total_cost = sum_prices(&tickets);
        Reservation {
            id: ReservationId::new(),
            customer_id,
            tickets,
            event,
            payment_method: payment_method.to_string(),
            total_cost,
            reserved_at: Utc::now(),
            status: ReservationStatus::Active,
        }
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn customer_id(&self) -> AccountId {
        self.customer_id
    }

    pub fn tickets(&self) -> &[TicketDefinition] {
        &self.tickets
    }

    pub fn set_tickets(&mut self, tickets: Vec<TicketDefinition>) {
        self.total_cost = sum_prices(&tickets);
        self.tickets = tickets;
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn set_event(&mut self, event: Event) {
        self.event = event;
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn set_payment_method(&mut self, method: &str) {
        self.payment_method = method.to_string();
    }

    pub fn reserved_at(&self) -> DateTime<Utc> {
        self.reserved_at
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == ReservationStatus::Cancelled
    }

    pub fn cancel(&mut self) {
        self.status = ReservationStatus::Cancelled;
    }
}

fn sum_prices(tickets: &[TicketDefinition]) -> f64 {
    tickets.iter().map(TicketDefinition::price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yas_marina() -> Event {
        Event::new("2025-05-10", "Yas Marina Circuit")
    }

    #[test]
    fn test_total_cost_tracks_tickets() {
        let mut res = Reservation::new(
            AccountId::new(),
            vec![TicketDefinition::single_race(), TicketDefinition::weekend_pass()],
            yas_marina(),
            "Credit Card",
        );
        assert_eq!(res.total_cost(), 1050.0);
        assert_eq!(res.status(), ReservationStatus::Active);

        res.set_tickets(vec![TicketDefinition::group(4)]);
        assert_eq!(res.total_cost(), 1120.0);

        res.set_tickets(Vec::new());
        assert_eq!(res.total_cost(), 0.0);
    }

    #[test]
    fn test_cancel_keeps_record() {
        let mut res = Reservation::new(
            AccountId::new(),
            vec![TicketDefinition::weekend_pass()],
            yas_marina(),
            "Debit Card",
        );
        res.cancel();
        assert!(res.is_cancelled());
        assert_eq!(res.tickets().len(), 1);
        assert_eq!(res.total_cost(), 750.0);
    }
}
