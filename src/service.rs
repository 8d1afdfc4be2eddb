use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::model::{
    Account, AccountId, Discount, Event, EventId, Reservation, ReservationId, SalesLog,
};
use crate::registry::TicketRegistry;
use crate::store::Store;

/// Everything the front end talks to: the flat-file store, the ticket
/// registry and the list of race events on sale.
///
/// Mutations follow the store's load, splice, save pattern so the files stay
/// the source of truth for accounts and reservations.
#[derive(Debug)]
pub struct Ticketing {
    store: Store,
    registry: TicketRegistry,
    events: Vec<Event>,
}

impl Ticketing {
    pub fn new(store: Store, registry: TicketRegistry, events: Vec<Event>) -> Self {
        Ticketing {
            store,
            registry,
            events,
        }
    }

    /// Builds the context from configuration, pulling discounts and sales
    /// from disk and seeding defaults where nothing has been stored yet.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let store = Store::new(&config.data_dir);
        let mut registry = TicketRegistry::with_default_catalog();

        let mut discounts: Vec<Discount> = store.load()?;
        if discounts.is_empty() && config.seed_defaults {
            discounts = default_discounts();
            store.save(&discounts)?;
            info!("Seeded {} default discounts", discounts.len());
        }
        registry.set_discounts(discounts);
        registry.set_sales(store.load()?);

        let events = config
            .events
            .iter()
            .map(|e| Event::new(&e.date, &e.location))
            .collect();

        let ticketing = Ticketing::new(store, registry, events);

        if config.seed_defaults {
            let seed = &config.default_admin;
            ticketing.store.update(|accounts: &mut Vec<Account>| {
                if !accounts.iter().any(Account::is_admin) {
                    accounts.push(Account::admin(
                        &seed.name,
                        &seed.email,
                        &seed.password,
                        &seed.admin_code,
                    ));
                    info!("Created default admin account {}", seed.email);
                }
                Ok(())
            })?;
        }

        Ok(ticketing)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn registry(&self) -> &TicketRegistry {
        &self.registry
    }

    pub fn authenticate(&self, email: &str, password: &str) -> Result<Account> {
        let accounts: Vec<Account> = self.store.load()?;
        match accounts
            .into_iter()
            .find(|a| a.email() == email && a.check_password(password))
        {
            Some(account) => {
                debug!("Authenticated {}", email);
                Ok(account)
            }
            None => {
                warn!("Failed login for {}", email);
                Err(Error::InvalidCredentials)
            }
        }
    }

    pub fn require_admin(&self, email: &str, password: &str) -> Result<Account> {
        let account = self.authenticate(email, password)?;
        if account.is_admin() {
            Ok(account)
        } else {
            Err(Error::PermissionDenied)
        }
    }

    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<Account> {
        self.store.update(|accounts: &mut Vec<Account>| {
            if accounts.iter().any(|a| a.email() == email) {
                return Err(Error::DuplicateEmail(email.to_string()));
            }
            let customer = Account::customer(name, email, password);
            accounts.push(customer.clone());
            info!("Registered customer {} ({})", customer.email(), customer.id());
            Ok(customer)
        })
    }

    /// Edits name, email and optionally password. Email uniqueness is only
    /// checked at registration.
    pub fn update_account(
        &self,
        id: AccountId,
        name: &str,
        email: &str,
        password: Option<&str>,
    ) -> Result<Account> {
        self.store.update(|accounts: &mut Vec<Account>| {
            let account = find_account_mut(accounts, id)?;
            account.set_name(name);
            account.set_email(email);
            if let Some(pw) = password.filter(|pw| !pw.is_empty()) {
                account.set_password(pw);
            }
            info!("Updated account {}", id);
            Ok(account.clone())
        })
    }

    pub fn list_ticket_types(&self) -> Vec<String> {
        self.registry.list_ticket_names()
    }

    pub fn price_for(&self, ticket_name: &str) -> Result<f64> {
        let ticket = self
            .registry
            .lookup_ticket_by_name(ticket_name)
            .ok_or_else(|| Error::TicketNotFound(ticket_name.to_string()))?;
        Ok(self.registry.price_for(ticket))
    }

    pub fn list_events(&self) -> &[Event] {
        &self.events
    }

    pub fn find_event(&self, id: EventId) -> Result<&Event> {
        self.events
            .iter()
            .find(|e| e.id() == id)
            .ok_or(Error::EventNotFound(id))
    }

    /// Books one ticket of `ticket_name` for the customer. The stored ticket
    /// carries the discounted price, so the reservation total is what was
    /// charged. Counts one sale for today.
    pub fn create_reservation(
        &mut self,
        customer_id: AccountId,
        ticket_name: &str,
        event_id: EventId,
        payment_method: &str,
    ) -> Result<Reservation> {
        let event = self.find_event(event_id)?.clone();
        let ticket = self
            .registry
            .lookup_ticket_by_name(ticket_name)
            .ok_or_else(|| Error::TicketNotFound(ticket_name.to_string()))?;
        let price = self.registry.price_for(ticket);
        let mut sold = ticket.clone();
        sold.set_price(price);

        let mut accounts: Vec<Account> = self.store.load()?;
        let customer = find_account_mut(&mut accounts, customer_id)?;
        let reservation = Reservation::new(customer_id, vec![sold], event, payment_method);
        if !customer.add_reservation(reservation.clone()) {
            return Err(Error::NotACustomer(customer_id));
        }

        self.store.save(&accounts)?;
        self.store.update(|all: &mut Vec<Reservation>| {
            all.push(reservation.clone());
            Ok(())
        })?;
        self.store.update(|sales: &mut SalesLog| {
            sales.record(&SalesLog::today(), 1);
            Ok(())
        })?;
        // Only count the sale in memory once it is on disk
        self.registry.record_sale(1);

        info!(
            "Reserved '{}' on {} for customer {} at {:.2}",
            ticket_name,
            reservation.event().date(),
            customer_id,
            price
        );
        Ok(reservation)
    }

    pub fn customer_reservations(&self, customer_id: AccountId) -> Result<Vec<Reservation>> {
        let accounts: Vec<Account> = self.store.load()?;
        let customer = accounts
            .iter()
            .find(|a| a.id() == customer_id)
            .ok_or(Error::AccountNotFound(customer_id))?;
        if !customer.is_customer() {
            return Err(Error::NotACustomer(customer_id));
        }
        Ok(customer.reservations().to_vec())
    }

    /// Marks a reservation cancelled on the customer and in the reservation
    /// file. Nothing is deleted and sales counts are left alone.
    pub fn cancel_reservation(
        &self,
        customer_id: AccountId,
        reservation_id: ReservationId,
    ) -> Result<Reservation> {
        let cancelled = self.store.update(|accounts: &mut Vec<Account>| {
            let customer = find_account_mut(accounts, customer_id)?;
            let reservation = customer
                .reservation_mut(reservation_id)
                .ok_or(Error::ReservationNotFound(reservation_id))?;
            reservation.cancel();
            Ok(reservation.clone())
        })?;

        self.store.update(|all: &mut Vec<Reservation>| {
            match all.iter().position(|r| r.id() == reservation_id) {
                Some(pos) => all[pos].cancel(),
                None => {
                    warn!(
                        "Reservation {} missing from reservation file, appending it",
                        reservation_id
                    );
                    all.push(cancelled.clone());
                }
            }
            Ok(())
        })?;

        info!("Cancelled reservation {}", reservation_id);
        Ok(cancelled)
    }

    pub fn list_discounts(&self) -> &[Discount] {
        self.registry.list_all_discounts()
    }

    pub fn list_active_discounts(&self) -> Vec<&Discount> {
        self.registry.list_active_discounts()
    }

    pub fn add_discount(&mut self, discount: Discount) -> Result<()> {
        info!(
            "Adding discount '{}' ({}% off {})",
            discount.name(),
            discount.percentage(),
            discount.ticket_type()
        );
        self.registry.add_discount(discount);
        self.store.save(&self.registry.list_all_discounts().to_vec())
    }

    /// Flips the first discount named `name` and persists all discounts.
    pub fn toggle_discount(&mut self, name: &str) -> Result<Discount> {
        let discount = self
            .registry
            .discount_by_name_mut(name)
            .ok_or_else(|| Error::DiscountNotFound(name.to_string()))?;
        let active = discount.toggle();
        let updated = discount.clone();
        self.store.save(&self.registry.list_all_discounts().to_vec())?;
        info!(
            "Discount '{}' is now {}",
            name,
            if active { "active" } else { "inactive" }
        );
        Ok(updated)
    }

    pub fn sales_report(&self) -> Result<SalesLog> {
        let report = self.registry.sales_report();
        if report.is_empty() {
            return Err(Error::NoSalesData);
        }
        Ok(report)
    }
}

fn find_account_mut(accounts: &mut [Account], id: AccountId) -> Result<&mut Account> {
    accounts
        .iter_mut()
        .find(|a| a.id() == id)
        .ok_or(Error::AccountNotFound(id))
}

pub fn default_discounts() -> Vec<Discount> {
    vec![
        Discount::new("Weekend Promo", 20, "Weekend Pass"),
        Discount::new("Group Saver", 15, "Group Ticket (4)"),
    ]
}
