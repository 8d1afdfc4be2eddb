use grandprix_tickets::model::{Discount, SalesLog, TicketDefinition};
use grandprix_tickets::TicketRegistry;

fn registry_with_promo() -> TicketRegistry {
    let mut registry = TicketRegistry::with_default_catalog();
    registry.add_discount(Discount::new("Weekend Promo", 20, "Weekend Pass"));
    registry
}

#[test]
fn test_price_for_active_discount() {
    let registry = registry_with_promo();
    let weekend = registry.lookup_ticket_by_name("Weekend Pass").unwrap();
    assert_eq!(registry.price_for(weekend), 600.0);
}

#[test]
fn test_price_for_inactive_discount_is_base_price() {
    let mut registry = registry_with_promo();
    registry
        .discount_by_name_mut("Weekend Promo")
        .unwrap()
        .deactivate();
    let weekend = registry.lookup_ticket_by_name("Weekend Pass").unwrap();
    assert_eq!(registry.price_for(weekend), 750.0);
}

#[test]
fn test_price_for_without_matching_discount() {
    let registry = registry_with_promo();
    let single = registry.lookup_ticket_by_name("Single Race Ticket").unwrap();
    assert_eq!(registry.price_for(single), 300.0);

    // Target names must match exactly
    let mut registry = TicketRegistry::with_default_catalog();
    registry.add_discount(Discount::new("Typo", 50, "weekend pass"));
    let weekend = registry.lookup_ticket_by_name("Weekend Pass").unwrap();
    assert_eq!(registry.price_for(weekend), 750.0);
}

#[test]
fn test_price_for_uses_first_active_match() {
    let mut registry = TicketRegistry::with_default_catalog();
    let mut dormant = Discount::new("Dormant", 90, "Group Ticket (4)");
    dormant.deactivate();
    registry.add_discount(dormant);
    registry.add_discount(Discount::new("Small", 10, "Group Ticket (4)"));
    registry.add_discount(Discount::new("Big", 50, "Group Ticket (4)"));

    let group = registry.lookup_ticket_by_name("Group Ticket (4)").unwrap();
    assert_eq!(registry.price_for(group), 1008.0);
}

#[test]
fn test_active_and_all_discounts_keep_insertion_order() {
    let mut registry = TicketRegistry::new();
    registry.add_discount(Discount::new("A", 10, "Weekend Pass"));
    let mut b = Discount::new("B", 20, "Weekend Pass");
    b.deactivate();
    registry.add_discount(b);
    registry.add_discount(Discount::new("C", 30, "Single Race Ticket"));

    let active: Vec<&str> = registry
        .list_active_discounts()
        .into_iter()
        .map(|d| d.name())
        .collect();
    assert_eq!(active, vec!["A", "C"]);

    let all: Vec<&str> = registry
        .list_all_discounts()
        .iter()
        .map(|d| d.name())
        .collect();
    assert_eq!(all, vec!["A", "B", "C"]);
}

#[test]
fn test_register_ticket_allows_duplicates() {
    let mut registry = TicketRegistry::new();
    registry.register_ticket(TicketDefinition::weekend_pass());
    registry.register_ticket(TicketDefinition::weekend_pass());
    registry.register_ticket(TicketDefinition::group(6));
    assert_eq!(
        registry.list_ticket_names(),
        vec!["Weekend Pass", "Weekend Pass", "Group Ticket (6)"]
    );
    assert!(registry.lookup_ticket_by_name("VIP").is_none());
}

#[test]
fn test_record_sale_accumulates_for_today() {
    let mut registry = TicketRegistry::new();
    registry.record_sale(2);
    registry.record_sale(3);
    let report = registry.sales_report();
    assert_eq!(report.get(&SalesLog::today()), 5);
}

#[test]
fn test_record_sale_accepts_zero_and_negative() {
    let mut registry = TicketRegistry::new();
    registry.record_sale_on("2025-05-10", 4);
    registry.record_sale_on("2025-05-10", 0);
    registry.record_sale_on("2025-05-10", -1);
    assert_eq!(registry.sales_report().get("2025-05-10"), 3);
}

#[test]
fn test_sales_report_is_a_snapshot() {
    let mut registry = TicketRegistry::new();
    registry.record_sale_on("2025-05-10", 1);
    let snapshot = registry.sales_report();
    registry.record_sale_on("2025-05-10", 1);

    assert_eq!(snapshot.get("2025-05-10"), 1);
    assert_eq!(registry.sales_report().get("2025-05-10"), 2);
}
