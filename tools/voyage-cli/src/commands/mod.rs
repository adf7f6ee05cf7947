//! CLI command implementations.

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod contact;
pub mod tours;
pub mod vehicles;

use clap::{Args, Subcommand};

/// Arguments for the tours command.
#[derive(Args)]
pub struct ToursArgs {
    #[command(subcommand)]
    pub command: ToursCommand,
}

#[derive(Subcommand)]
pub enum ToursCommand {
    /// List tours.
    List {
        /// Category (adventure, cultural, wildlife, beach, mountain).
        #[arg(long)]
        category: Option<String>,

        /// Lowest price per person.
        #[arg(long)]
        min_price: Option<i64>,

        /// Highest price per person.
        #[arg(long)]
        max_price: Option<i64>,

        /// Search title, location and description.
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order (featured, price-low, price-high, rating).
        #[arg(long, default_value = "featured")]
        sort: String,
    },
    /// Show one tour with its reviews.
    Show {
        /// Tour ID.
        id: String,
    },
}

/// Arguments for the vehicles command.
#[derive(Args)]
pub struct VehiclesArgs {
    #[command(subcommand)]
    pub command: VehiclesCommand,
}

#[derive(Subcommand)]
pub enum VehiclesCommand {
    /// List vehicles.
    List {
        /// Vehicle type (economy, suv, luxury, motorcycle, minibus).
        #[arg(long = "type")]
        vehicle_type: Option<String>,

        /// Lowest daily rate.
        #[arg(long)]
        min_price: Option<i64>,

        /// Highest daily rate.
        #[arg(long)]
        max_price: Option<i64>,

        /// Search vehicle names.
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one vehicle and similar ones.
    Show {
        /// Vehicle ID.
        id: String,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart and its totals.
    Show,
    /// Add travellers for a tour.
    AddTour {
        /// Tour ID.
        id: String,

        /// Number of travellers.
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        travelers: i64,
    },
    /// Rent a vehicle.
    AddVehicle {
        /// Vehicle ID.
        id: String,

        /// Rental length in days.
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        days: i64,

        /// Pickup date (YYYY-MM-DD).
        #[arg(long)]
        pickup: Option<String>,

        /// Dropoff date (YYYY-MM-DD).
        #[arg(long)]
        dropoff: Option<String>,
    },
    /// Set the traveller count of a tour line. Zero or less removes it.
    Set {
        /// Item ID.
        id: String,

        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        /// Item type (tour or vehicle).
        #[arg(long = "type", default_value = "tour")]
        item_type: String,
    },
    /// Remove a line from the cart.
    Remove {
        /// Item ID.
        id: String,

        /// Item type (tour or vehicle).
        #[arg(long = "type", default_value = "tour")]
        item_type: String,
    },
    /// Empty the cart.
    Clear,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// First name.
    #[arg(long, default_value = "")]
    pub first_name: String,

    /// Last name.
    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Email address.
    #[arg(long, default_value = "")]
    pub email: String,

    /// Phone number.
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Street address.
    #[arg(long, default_value = "")]
    pub address: String,

    /// City.
    #[arg(long, default_value = "")]
    pub city: String,

    /// ZIP or postal code.
    #[arg(long, default_value = "")]
    pub zip_code: String,

    /// Country.
    #[arg(long, default_value = "")]
    pub country: String,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    /// Your name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Email address.
    #[arg(long, default_value = "")]
    pub email: String,

    /// Phone number.
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Subject line.
    #[arg(long, default_value = "")]
    pub subject: String,

    /// Message body.
    #[arg(short, long, default_value = "")]
    pub message: String,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// List bookings.
    Bookings,
    /// List inquiries.
    Inquiries,
    /// Delete a booking.
    DeleteBooking {
        /// Booking ID.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete an inquiry.
    DeleteInquiry {
        /// Inquiry ID.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}
