mod cli;
mod logging;

use std::fs::File;
use std::process;

use anyhow::{bail, Context};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, Credentials};
use colored::*;
use dotenv::dotenv;
use grandprix_tickets::model::{Account, Discount, EventId, ReservationId};
use grandprix_tickets::{report, AppConfig, Ticketing};
use tracing::error;

fn main() {
    dotenv().ok();

    // Logging settings live in the configuration, so it is read first
    let config = match grandprix_tickets::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let _guard = logging::init_logger(&config);

    let args = Cli::parse();

    let Some(command) = args.command else {
        let _ = Cli::command().print_long_help();
        return;
    };

    if let Commands::PrintConfig = command {
        println!("Configuration: {:?}", config);
        return;
    }

    if let Err(err) = run(&config, command) {
        error!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(config: &AppConfig, command: Commands) -> anyhow::Result<()> {
    let mut ticketing = Ticketing::open(config)
        .with_context(|| format!("opening data folder '{}'", config.data_dir))?;

    match command {
        Commands::Register {
            name,
            email,
            password,
        } => {
            let account = ticketing.register(&name, &email, &password)?;
            println!("Registered {} - you can now log in.", account.email().green());
        }
        Commands::Login(creds) => {
            let account = login(&ticketing, &creds)?;
            let role = if account.is_admin() { "admin" } else { "customer" };
            println!("Hello, {} ({})", account.name().green(), role);
        }
        Commands::UpdateDetails {
            credentials,
            new_name,
            new_email,
            new_password,
        } => {
            let account = login(&ticketing, &credentials)?;
            let name = new_name.unwrap_or_else(|| account.name().to_string());
            let email = new_email.unwrap_or_else(|| account.email().to_string());
            let updated =
                ticketing.update_account(account.id(), &name, &email, new_password.as_deref())?;
            println!(
                "Your account details were updated: {} <{}>",
                updated.name(),
                updated.email()
            );
        }
        Commands::Tickets => {
            for ticket in ticketing.registry().tickets() {
                let price = ticketing.registry().price_for(ticket);
                let price_text = if price < ticket.price() {
                    format!("AED {:.2} (was {:.2})", price, ticket.price()).green()
                } else {
                    format!("AED {:.2}", price).normal()
                };
                println!(
                    "{} - {} - {} day(s): {}",
                    ticket.name().bold(),
                    price_text,
                    ticket.valid_days(),
                    ticket.features().join(", ")
                );
            }
        }
        Commands::Price { ticket } => {
            let price = ticketing.price_for(&ticket)?;
            println!("{}: AED {:.2}", ticket, price);
        }
        Commands::Events => {
            for event in ticketing.list_events() {
                println!("{} | {} at {}", event.id(), event.date(), event.location());
            }
        }
        Commands::Reserve {
            credentials,
            ticket,
            event,
            payment,
        } => {
            let customer = login(&ticketing, &credentials)?;
            let event_id = resolve_event(&ticketing, &event)?;
            let reservation = ticketing.create_reservation(
                customer.id(),
                &ticket,
                event_id,
                &payment.to_string(),
            )?;
            println!(
                "Reserved {} on {} for AED {:.2} (reservation {})",
                ticket,
                reservation.event().date(),
                reservation.total_cost(),
                reservation.id().to_string().cyan()
            );
        }
        Commands::Reservations(creds) => {
            let customer = login(&ticketing, &creds)?;
            let reservations = ticketing.customer_reservations(customer.id())?;
            if reservations.is_empty() {
                println!("No reservations found.");
            }
            for res in reservations {
                let tickets: Vec<&str> = res.tickets().iter().map(|t| t.name()).collect();
                let status = if res.is_cancelled() {
                    "cancelled".red()
                } else {
                    "active".green()
                };
                println!(
                    "ID: {} | Event: {} at {} | Tickets: {} | Total: AED {:.2} | {}",
                    res.id(),
                    res.event().date(),
                    res.event().location(),
                    tickets.join(", "),
                    res.total_cost(),
                    status
                );
            }
        }
        Commands::Cancel {
            credentials,
            reservation,
        } => {
            let customer = login(&ticketing, &credentials)?;
            let id: ReservationId = reservation
                .parse()
                .with_context(|| format!("'{}' is not a reservation id", reservation))?;
            ticketing.cancel_reservation(customer.id(), id)?;
            println!("Reservation {} cancelled.", id);
        }
        Commands::Discounts(creds) => {
            ticketing.require_admin(&creds.email, &creds.password)?;
            for discount in ticketing.list_discounts() {
                print_discount(discount);
            }
        }
        Commands::AddDiscount {
            credentials,
            name,
            percentage,
            ticket_type,
        } => {
            ticketing.require_admin(&credentials.email, &credentials.password)?;
            let discount = Discount::new(&name, percentage, &ticket_type);
            print_discount(&discount);
            ticketing.add_discount(discount)?;
        }
        Commands::ToggleDiscount { credentials, name } => {
            ticketing.require_admin(&credentials.email, &credentials.password)?;
            let discount = ticketing.toggle_discount(&name)?;
            print_discount(&discount);
        }
        Commands::SalesReport { credentials, csv } => {
            ticketing.require_admin(&credentials.email, &credentials.password)?;
            let sales = ticketing.sales_report()?;
            println!("{}", report::render_sales_report(&sales));
            println!(
                "Total: {} tickets",
                report::total_tickets(&sales).to_string().cyan()
            );
            if let Some(path) = csv {
                let file = File::create(&path)
                    .with_context(|| format!("creating {}", path.display()))?;
                report::write_sales_csv(&sales, file)?;
                println!("CSV written to {}", path.display());
            }
        }
        Commands::PrintConfig => {
            println!("Configuration: {:?}", config);
        }
    }

    Ok(())
}

fn login(ticketing: &Ticketing, creds: &Credentials) -> anyhow::Result<Account> {
    Ok(ticketing.authenticate(&creds.email, &creds.password)?)
}

/// Accepts either an event id or an event date.
fn resolve_event(ticketing: &Ticketing, key: &str) -> anyhow::Result<EventId> {
    if let Ok(id) = key.parse::<EventId>() {
        return Ok(ticketing.find_event(id)?.id());
    }
    match ticketing.list_events().iter().find(|e| e.date() == key) {
        Some(event) => Ok(event.id()),
        None => bail!("Invalid event selected: {}", key),
    }
}

fn print_discount(discount: &Discount) {
    let status = if discount.is_active() {
        "Active".green()
    } else {
        "Inactive".red()
    };
    println!(
        "{} ({}% off on {}) - {}",
        discount.name(),
        discount.percentage(),
        discount.ticket_type(),
        status
    );
}
