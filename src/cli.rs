use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "grandprix-tickets")]
#[command(about = "Race weekend ticket sales and reservations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Args)]
pub struct Credentials {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a customer account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Check credentials and show the account
    Login(Credentials),
    /// Change your name, email or password
    UpdateDetails {
        #[command(flatten)]
        credentials: Credentials,
        #[arg(long)]
        new_name: Option<String>,
        #[arg(long)]
        new_email: Option<String>,
        #[arg(long)]
        new_password: Option<String>,
    },
    /// List ticket types with current prices
    Tickets,
    /// Show the price of one ticket type after discounts
    Price {
        #[arg(long)]
        ticket: String,
    },
    /// List race events on sale
    Events,
    /// Reserve a ticket for an event (event id or date)
    Reserve {
        #[command(flatten)]
        credentials: Credentials,
        #[arg(long)]
        ticket: String,
        #[arg(long)]
        event: String,
        #[arg(long, value_enum, default_value_t = PaymentMethod::CreditCard)]
        payment: PaymentMethod,
    },
    /// List your reservations
    Reservations(Credentials),
    /// Cancel one of your reservations
    Cancel {
        #[command(flatten)]
        credentials: Credentials,
        #[arg(long)]
        reservation: String,
    },
    /// List all discounts (admin)
    Discounts(Credentials),
    /// Create a discount (admin)
    AddDiscount {
        #[command(flatten)]
        credentials: Credentials,
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        percentage: i32,
        #[arg(long)]
        ticket_type: String,
    },
    /// Activate or deactivate a discount (admin)
    ToggleDiscount {
        #[command(flatten)]
        credentials: Credentials,
        #[arg(long)]
        name: String,
    },
    /// Tickets sold per day (admin)
    SalesReport {
        #[command(flatten)]
        credentials: Credentials,
        /// Also write the report as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    ApplePay,
    GooglePay,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::GooglePay => "Google Pay",
        };
        f.write_str(label)
    }
}
