//! ipcodec CLI entry point.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use ipcodec::{format, from_decimal, parse, split_host_port, Address, FormatStyle};

/// Output style for rendered addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Style {
    /// Dotted IPv4, compressed IPv6
    Default,
    /// IPv4 as full IPv4-mapped IPv6 text
    Mapped,
    /// IPv6 with all eight groups
    Expanded,
}

impl From<Style> for FormatStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Default => FormatStyle::Default,
            Style::Mapped => FormatStyle::Mapped,
            Style::Expanded => FormatStyle::Expanded,
        }
    }
}

/// Parse, inspect and reformat IPv4/IPv6 addresses.
#[derive(Parser, Debug)]
#[command(name = "ipcodec")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an address and print it in the chosen style
    Parse {
        /// Address text, optionally bracketed and with a %zone
        address: String,

        /// Output style
        #[arg(long, value_enum, default_value = "default")]
        style: Style,
    },
    /// Print the numeric value of an address
    Decimal {
        /// Address text
        address: String,
    },
    /// Build an address from its numeric value
    FromDecimal {
        /// Unsigned decimal value, up to 128 bits
        value: String,

        /// Keep values below 2^32 in IPv6 space
        #[arg(long)]
        force_v6: bool,

        /// Output style
        #[arg(long, value_enum, default_value = "default")]
        style: Style,
    },
    /// Split host:port into its parts
    Split {
        /// host:port text
        host_port: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Parse { address, style } => {
            let addr = parse(&address)
                .with_context(|| format!("Failed to parse address: {}", address))?;
            print_address(&addr, style.into());
        }
        Command::Decimal { address } => {
            let addr = parse(&address)
                .with_context(|| format!("Failed to parse address: {}", address))?;
            println!("{}", addr.to_decimal());
        }
        Command::FromDecimal { value, force_v6, style } => {
            let addr = from_decimal(value.as_str(), force_v6)
                .with_context(|| format!("Failed to convert decimal value: {}", value))?;
            print_address(&addr, style.into());
        }
        Command::Split { host_port } => {
            let (host, port) = split_host_port(&host_port)
                .with_context(|| format!("Failed to split host and port: {}", host_port))?;
            println!("host: {}", host);
            println!("port: {}", port);
        }
    }

    Ok(())
}

fn print_address(addr: &Address, style: FormatStyle) {
    println!("{}", format(addr, style));
    println!("  family:  {}", if addr.is_v4() { "IPv4" } else { "IPv6" });
    if let Some(zone) = addr.zone() {
        println!("  zone:    {}", zone);
    }
    println!("  bytes:   {}", ipcodec::bytes_to_hex(addr.bytes()));
    println!("  decimal: {}", addr.to_decimal());
}
