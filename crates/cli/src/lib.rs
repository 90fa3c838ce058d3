pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Debug, Parser)]
#[command(
    name = "stayquote",
    about = "Stayquote operator CLI",
    long_about = "Parse guest inquiries, price bookings against the tariff catalog, and inspect seeded tariffs.",
    after_help = "Examples:\n  stayquote parse --text \"Hi, I am Priya. 2 rooms from 12/5 to 15/5\" --reference-date 2024-03-01\n  stayquote quote --request booking.toml --discount 10 --message\n  stayquote tariffs"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Parse a free-text inquiry into a structured booking draft")]
    Parse {
        #[arg(long, help = "Inquiry text; reads stdin when omitted")]
        text: Option<String>,
        #[arg(
            long,
            help = "Reference date (YYYY-MM-DD) for year-less date mentions; defaults to today"
        )]
        reference_date: Option<NaiveDate>,
    },
    #[command(about = "Price a TOML booking request and emit totals or the guest message")]
    Quote {
        #[arg(long, help = "Path to a TOML booking request")]
        request: PathBuf,
        #[arg(long, default_value = "0", help = "Overall discount percent applied before tax")]
        discount: Decimal,
        #[arg(long, help = "Emit the rendered guest message instead of totals JSON")]
        message: bool,
    },
    #[command(about = "List the seeded tariff catalog after season-rate normalization")]
    Tariffs,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse { text, reference_date } => commands::parse::run(text, reference_date),
        Command::Quote { request, discount, message } => {
            commands::quote::run(&request, discount, message)
        }
        Command::Tariffs => commands::tariffs::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
