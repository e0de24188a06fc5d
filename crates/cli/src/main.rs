//! Saffron CLI - storefront and back office over a local snapshot directory.
//!
//! # Usage
//!
//! ```bash
//! # Browse the shop
//! saffron products list --category gift-sets --sort price-asc
//! saffron products search tea
//!
//! # Shop
//! saffron cart add premium-saffron-threads
//! saffron cart show
//! saffron support ask "Do you ship to Canada?"
//! saffron checkout --first-name Ada --last-name Lovelace --email ada@example.com \
//!     --address "12 Crocus Lane" --city London --state LDN --zip "N1 9GU"
//!
//! # Back office
//! saffron admin login --username admin --password admin@123
//! saffron orders status 3FA85F6457B2 shipped
//! saffron admin stats
//! ```
//!
//! # Commands
//!
//! - `products` - Browse the catalog; add, update and delete products (admin)
//! - `cart` - Show and edit the cart
//! - `wishlist` - Save products for later
//! - `checkout` - Place an order for the cart
//! - `orders` - Order history; update status (admin)
//! - `messages` - Contact form; inbox management (admin)
//! - `admin` - Back-office sign-in and dashboard stats
//! - `account` - Demo customer sign-in
//! - `support` - Ask the support chat a question

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use saffron_core::{
    Category, Email, EmailError, MessageId, MessageStatus, OrderId, OrderStatus, Price, ProductId,
};
use saffron_store::models::{Product, ProductPatch, ShippingAddress};
use saffron_store::{FileStore, SortOrder, Store, StoreConfig};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "saffron")]
#[command(author, version, about = "Saffron storefront and back office")]
struct Cli {
    /// Snapshot directory (overrides `SAFFRON_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage the catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Show and edit the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Save products for later
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Place an order for everything in the cart
    Checkout(ShippingArgs),
    /// Order history and fulfilment
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Contact form and inbox
    Messages {
        #[command(subcommand)]
        action: MessagesAction,
    },
    /// Back-office sign-in and dashboard
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Demo customer account
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Support chat
    Support {
        #[command(subcommand)]
        action: SupportAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products, optionally filtered and sorted
    List {
        /// Category label or slug (e.g. `gift-sets`)
        #[arg(short, long)]
        category: Option<Category>,

        #[arg(short, long, value_enum, default_value_t = SortArg::Featured)]
        sort: SortArg,
    },
    /// Show one product in full
    Show { id: ProductId },
    /// Search name, category and description
    Search { query: String },
    /// Add a product (admin)
    Add(NewProductArgs),
    /// Update fields of a product (admin)
    Update(UpdateProductArgs),
    /// Delete a product (admin)
    Delete { id: ProductId },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Featured,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl From<SortArg> for SortOrder {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Featured => Self::Featured,
            SortArg::PriceAsc => Self::PriceLowToHigh,
            SortArg::PriceDesc => Self::PriceHighToLow,
            SortArg::Rating => Self::Rating,
        }
    }
}

#[derive(Args)]
struct NewProductArgs {
    /// Unique product id (e.g. `saffron-honey`)
    #[arg(long)]
    id: ProductId,

    #[arg(long)]
    name: String,

    #[arg(long)]
    price: Price,

    /// Pre-sale price, shown struck through
    #[arg(long)]
    original_price: Option<Price>,

    #[arg(long)]
    category: Category,

    #[arg(long)]
    description: String,

    /// Primary image path
    #[arg(long, default_value = "")]
    image: String,

    /// Bullet point (repeatable)
    #[arg(long = "detail")]
    details: Vec<String>,

    #[arg(long)]
    badge: Option<String>,

    #[arg(long, default_value = "")]
    weight: String,

    /// List the product as out of stock
    #[arg(long)]
    out_of_stock: bool,
}

#[derive(Args)]
struct UpdateProductArgs {
    id: ProductId,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    price: Option<Price>,

    #[arg(long, conflicts_with = "clear_original_price")]
    original_price: Option<Price>,

    /// Remove the pre-sale price
    #[arg(long)]
    clear_original_price: bool,

    #[arg(long)]
    category: Option<Category>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long, conflicts_with = "clear_badge")]
    badge: Option<String>,

    /// Remove the badge
    #[arg(long)]
    clear_badge: bool,

    #[arg(long)]
    in_stock: Option<bool>,

    #[arg(long)]
    weight: Option<String>,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show lines and totals
    Show,
    /// Add one unit of a product
    Add { id: ProductId },
    /// Set the quantity of a line; zero or below removes it
    Set {
        id: ProductId,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a line
    Remove { id: ProductId },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show saved products
    Show,
    /// Save a product, or unsave it if already saved
    Toggle { id: ProductId },
    /// Unsave a product
    Remove { id: ProductId },
}

#[derive(Args)]
struct ShippingArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    /// Street address
    #[arg(long)]
    address: String,
    #[arg(long)]
    city: String,
    #[arg(long)]
    state: String,
    #[arg(long)]
    zip: String,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders, most recent first
    List,
    /// Search by order id or customer name
    Search { query: String },
    /// Set the status of an order (admin)
    Status { id: OrderId, status: OrderStatus },
}

#[derive(Subcommand)]
enum MessagesAction {
    /// List the inbox (admin)
    List,
    /// Send a message through the contact form
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    /// Search sender, subject and body (admin)
    Search { query: String },
    /// Mark a message new, read or replied (admin)
    Status {
        id: MessageId,
        status: MessageStatus,
    },
    /// Delete a message (admin)
    Delete { id: MessageId },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Sign in to the back office
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Sign out of the back office
    Logout,
    /// Revenue and order counts
    Stats,
}

#[derive(Subcommand)]
enum AccountAction {
    /// Sign in as any email address
    Login { email: String },
    /// Sign out
    Logout,
    /// Show the signed-in customer
    Whoami,
}

#[derive(Subcommand)]
enum SupportAction {
    /// Ask a question and get a canned reply
    Ask { question: String },
}

impl From<NewProductArgs> for Product {
    fn from(args: NewProductArgs) -> Self {
        let images = if args.image.is_empty() {
            Vec::new()
        } else {
            vec![args.image.clone()]
        };
        Self {
            id: args.id,
            name: args.name,
            price: args.price,
            original_price: args.original_price,
            image: args.image,
            images,
            category: args.category,
            description: args.description,
            details: args.details,
            rating: 0.0,
            reviews: 0,
            badge: args.badge,
            in_stock: !args.out_of_stock,
            weight: args.weight,
        }
    }
}

impl From<UpdateProductArgs> for ProductPatch {
    fn from(args: UpdateProductArgs) -> Self {
        let original_price = if args.clear_original_price {
            Some(None)
        } else {
            args.original_price.map(Some)
        };
        let badge = if args.clear_badge {
            Some(None)
        } else {
            args.badge.map(Some)
        };
        Self {
            name: args.name,
            price: args.price,
            original_price,
            category: args.category,
            description: args.description,
            badge,
            in_stock: args.in_stock,
            weight: args.weight,
            ..Self::default()
        }
    }
}

impl ShippingArgs {
    fn into_address(self) -> Result<ShippingAddress, EmailError> {
        Ok(ShippingAddress {
            first_name: self.first_name,
            last_name: self.last_name,
            email: Email::parse(&self.email)?,
            address: self.address,
            city: self.city,
            state: self.state,
            zip: self.zip,
        })
    }
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("saffron_store=info,saffron=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = StoreConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let storage = Arc::new(FileStore::open(&config.data_dir)?);
    let mut store = Store::open(storage, &config)?;

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List { category, sort } => {
                commands::products::list(&store, category, sort.into());
            }
            ProductsAction::Show { id } => commands::products::show(&store, &id)?,
            ProductsAction::Search { query } => commands::products::search(&store, &query),
            ProductsAction::Add(args) => commands::products::add(&mut store, args.into())?,
            ProductsAction::Update(args) => {
                let id = args.id.clone();
                commands::products::update(&mut store, &id, args.into())?;
            }
            ProductsAction::Delete { id } => commands::products::delete(&mut store, &id)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&store),
            CartAction::Add { id } => commands::cart::add(&mut store, &id)?,
            CartAction::Set { id, quantity } => commands::cart::set(&mut store, &id, quantity)?,
            CartAction::Remove { id } => commands::cart::remove(&mut store, &id)?,
            CartAction::Clear => commands::cart::clear(&mut store)?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::wishlist::show(&store),
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&mut store, &id)?,
            WishlistAction::Remove { id } => commands::wishlist::remove(&mut store, &id)?,
        },
        Commands::Checkout(args) => {
            let shipping = args.into_address()?;
            commands::checkout::run(&mut store, shipping, config.checkout_delay).await?;
        }
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list(&store),
            OrdersAction::Search { query } => commands::orders::search(&store, &query),
            OrdersAction::Status { id, status } => {
                commands::orders::set_status(&mut store, &id, status)?;
            }
        },
        Commands::Messages { action } => match action {
            MessagesAction::List => commands::messages::list(&store)?,
            MessagesAction::Send {
                name,
                email,
                subject,
                message,
            } => commands::messages::send(&mut store, name, email, subject, message)?,
            MessagesAction::Search { query } => commands::messages::search(&store, &query)?,
            MessagesAction::Status { id, status } => {
                commands::messages::set_status(&mut store, &id, status)?;
            }
            MessagesAction::Delete { id } => commands::messages::delete(&mut store, &id)?,
        },
        Commands::Admin { action } => match action {
            AdminAction::Login { username, password } => {
                commands::admin::login(&mut store, &username, password)?;
            }
            AdminAction::Logout => commands::admin::logout(&mut store)?,
            AdminAction::Stats => commands::admin::stats(&store)?,
        },
        Commands::Account { action } => match action {
            AccountAction::Login { email } => commands::account::login(&mut store, &email)?,
            AccountAction::Logout => commands::account::logout(&mut store)?,
            AccountAction::Whoami => commands::account::whoami(&store),
        },
        Commands::Support { action } => match action {
            SupportAction::Ask { question } => {
                commands::support::ask(&question, config.reply_delay).await?;
            }
        },
    }
    Ok(())
}
