use anyhow::Result;
use checkout::{
    config::Settings,
    discount::DiscountRegistry,
    handlers::checkout::Checkout,
    models::summary::OrderSummary,
    utils::price::{format_amount, format_deduction},
};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_items<'a>(items: impl Iterator<Item = (&'a str, f64)>, currency_symbol: &str) {
    for (name, price) in items {
        println!("{:<16}{:>12}", name, format_amount(price, currency_symbol));
    }
}

fn print_discounts(registry: &DiscountRegistry, selected: &str) {
    for key in registry.keys() {
        let marker = if key == selected { "*" } else { " " };
        println!("{marker} {key}");
    }
}

fn print_summary(summary: &OrderSummary, currency_symbol: &str) {
    println!(
        "{:<16}{:>12}",
        "Subtotal:",
        format_amount(summary.subtotal, currency_symbol)
    );
    println!(
        "{:<16}{:>12}",
        "Discount:",
        format_deduction(summary.discount, currency_symbol)
    );
    println!(
        "{:<16}{:>12}",
        "Total:",
        format_amount(summary.total, currency_symbol)
    );
}

#[derive(Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(long, help = "(Optional) Sets the configuration file path.")]
    pub config: Option<String>,

    #[arg(
        long,
        help = "(Optional) Selects the discount by key. Unknown keys apply no discount."
    )]
    pub discount: Option<String>,

    #[arg(long, help = "(Optional) Prints the summary as JSON.")]
    pub json: bool,

    #[arg(long, help = "(Optional) Lists the catalog and the discount keys.")]
    pub list: bool,
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let settings = Settings::load(&args.config)?;
    let registry = settings.discount_registry()?;
    let symbol = settings.currency_symbol.as_str();

    info!(
        "Loaded {} products and {} discounts",
        settings.catalog.products().len(),
        registry.keys().len()
    );

    if settings.catalog.is_empty() {
        warn!("Catalog is empty, the order total will be zero");
    }

    let key = args
        .discount
        .as_deref()
        .unwrap_or(settings.default_discount.as_str());

    let checkout = Checkout::new(settings.catalog.products()).select_discount(&registry, key);

    if args.list {
        let products = settings.catalog.products();
        print_items(products.iter().map(|p| (p.name.as_str(), p.price)), symbol);
        println!();
        print_discounts(&registry, checkout.strategy().key());
        return Ok(());
    }

    let summary = checkout.summary();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let items = checkout.order().items();
        print_items(items.iter().map(|i| (i.name.as_str(), i.price)), symbol);
        println!();
        print_summary(&summary, symbol);
    }

    Ok(())
}
