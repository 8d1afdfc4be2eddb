use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccountId, Reservation, ReservationId};

/// What an account is allowed to do, plus the data that only that role carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Customer { reservations: Vec<Reservation> },
    Admin { admin_code: String },
}

/// A registered user. Email is the login key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    name: String,
    email: String,
    password: String,
    created_at: DateTime<Utc>,
    role: Role,
}

impl Account {
    pub fn customer(name: &str, email: &str, password: &str) -> Self {
        Self::with_role(
            name,
            email,
            password,
            Role::Customer {
                reservations: Vec::new(),
            },
        )
    }

    pub fn admin(name: &str, email: &str, password: &str, admin_code: &str) -> Self {
        Self::with_role(
            name,
            email,
            password,
            Role::Admin {
                admin_code: admin_code.to_string(),
            },
        )
    }

    fn with_role(name: &str, email: &str, password: &str, role: Role) -> Self {
        Account {
            id: AccountId::new(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
            role,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn set_password(&mut self, password: &str) {
        self.password = password.to_string();
    }

    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn is_customer(&self) -> bool {
        matches!(self.role, Role::Customer { .. })
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin { .. })
    }

    pub fn admin_code(&self) -> Option<&str> {
        match &self.role {
            Role::Admin { admin_code } => Some(admin_code),
            Role::Customer { .. } => None,
        }
    }

    pub fn set_admin_code(&mut self, code: &str) {
        if let Role::Admin { admin_code } = &mut self.role {
            *admin_code = code.to_string();
        }
    }

    /// Reservations owned by a customer, in booking order. Empty for admins.
    pub fn reservations(&self) -> &[Reservation] {
        match &self.role {
            Role::Customer { reservations } => reservations,
            Role::Admin { .. } => &[],
        }
    }

    pub fn reservation_mut(&mut self, id: ReservationId) -> Option<&mut Reservation> {
        match &mut self.role {
            Role::Customer { reservations } => reservations.iter_mut().find(|r| r.id() == id),
            Role::Admin { .. } => None,
        }
    }

    /// Appends a reservation. Returns `false` when the account is not a customer.
    pub fn add_reservation(&mut self, reservation: Reservation) -> bool {
        match &mut self.role {
            Role::Customer { reservations } => {
                reservations.push(reservation);
                true
            }
            Role::Admin { .. } => false,
        }
    }

    /// Drops a reservation from this customer's own list only.
    pub fn remove_reservation(&mut self, id: ReservationId) -> Option<Reservation> {
        match &mut self.role {
            Role::Customer { reservations } => {
                let pos = reservations.iter().position(|r| r.id() == id)?;
                Some(reservations.remove(pos))
            }
            Role::Admin { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Event, TicketDefinition};

    #[test]
    fn test_setters_and_password_check() {
        let mut cust = Account::customer("Ahmad", "ahmad@example.com", "Ahmadpass");
        cust.set_name("Ahmed Mahmood");
        cust.set_email("Ahmed.Mahmood@example.com");
        cust.set_password("newpass");

        assert_eq!(cust.name(), "Ahmed Mahmood");
        assert_eq!(cust.email(), "Ahmed.Mahmood@example.com");
        assert!(cust.check_password("newpass"));
        assert!(!cust.check_password("Ahmadpass"));
    }

    #[test]
    fn test_admin_code() {
        let mut admin = Account::admin("Yousif", "yousif@example.com", "pw", "ADM001");
        assert!(admin.is_admin());
        assert_eq!(admin.admin_code(), Some("ADM001"));
        admin.set_admin_code("ADM002");
        assert_eq!(admin.admin_code(), Some("ADM002"));
        assert!(admin.reservations().is_empty());
    }

    #[test]
    fn test_add_and_remove_reservation() {
        let mut cust = Account::customer("Ahmad", "ahmad@example.com", "pw");
        let event = Event::new("2025-05-10", "Yas Marina Circuit");
        let res = Reservation::new(
            cust.id(),
            vec![TicketDefinition::single_race()],
            event,
            "Credit Card",
        );
        let res_id = res.id();

        assert!(cust.add_reservation(res));
        assert_eq!(cust.reservations().len(), 1);

        let removed = cust.remove_reservation(res_id);
        assert_eq!(removed.map(|r| r.id()), Some(res_id));
        assert!(cust.reservations().is_empty());
        assert!(cust.remove_reservation(res_id).is_none());
    }

    #[test]
    fn test_admin_rejects_reservations() {
        let mut admin = Account::admin("Admin", "admin@example.com", "pw", "ADMIN001");
        let res = Reservation::new(
            admin.id(),
            vec![TicketDefinition::weekend_pass()],
            Event::new("2025-05-11", "Yas Marina Circuit"),
            "Apple Pay",
        );
        assert!(!admin.add_reservation(res));
    }
}
