use clap::error::ErrorKind;
use clap::{ColorChoice, CommandFactory, Parser, Subcommand, ValueEnum};
use colored::*;
use regex::Regex;
use std::net::IpAddr;
use tracing::{debug, trace};

use flowfmt::{addr, flags, l7, logging, proto};
use flowfmt::{FieldFormatter, FwEventTaxonomy};

const HELP_VERBOSE: &str = "Increase log verbosity (repeatable)";
const HELP_PROTO: &str = "IP protocol number or name to look up";
const HELP_L7: &str = "Application protocol id or name to look up";
const HELP_FLAGS: &str = "TCP flags byte, decimal or 0x prefixed hex";
const HELP_ADDR: &str = "IPv4 or IPv6 address to format";
const HELP_LONG: &str = "Print IPv6 addresses in full";
const HELP_CODE: &str = "Event code to translate";
const HELP_KIND: &str = "Which event field the code comes from";
const HELP_TAXONOMY: &str = "Firewall event numbering: standard or junos";
const HELP_LIST_L7: &str = "List application protocols instead of IP protocols";
const HELP_RGX_EXPRESSION: &str = "Regular expression to match names against";

/// Printed by name lookups that find nothing.
const NOT_FOUND: i32 = -1;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about, color = ColorChoice::Auto)]
struct Cli {
    #[clap(short, long, action = clap::ArgAction::Count, global = true, help = HELP_VERBOSE)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate between IP protocol numbers and names
    Proto {
        #[clap(value_parser, help = HELP_PROTO)]
        value: String,
    },

    /// Translate between application protocol ids and names
    L7 {
        #[clap(value_parser, help = HELP_L7)]
        value: String,
    },

    /// Render a TCP flags byte
    Flags {
        #[clap(value_parser = parse_byte, help = HELP_FLAGS)]
        flags: u8,
    },

    /// Render an IP address the way flow listings show it
    Addr {
        #[clap(value_parser, help = HELP_ADDR)]
        addr: IpAddr,

        #[clap(short, long, value_parser, default_value_t = false, help = HELP_LONG)]
        long: bool,
    },

    /// Translate an event code into its label
    Event {
        #[clap(value_parser, help = HELP_CODE)]
        code: u32,

        #[clap(short, long, value_enum, default_value_t = EventKind::Nsel, help = HELP_KIND)]
        kind: EventKind,

        #[clap(short, long, value_parser, help = HELP_TAXONOMY)]
        taxonomy: Option<FwEventTaxonomy>,
    },

    /// Print a protocol table
    List {
        #[clap(long = "l7", value_parser, default_value_t = false, help = HELP_LIST_L7)]
        app: bool,

        #[clap(short, long, value_parser, help = HELP_RGX_EXPRESSION)]
        search_expression: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum EventKind {
    /// NAT/flow event
    Nsel,
    /// Firewall event
    Fw,
    /// Extended firewall event
    X,
}

/// Parses a byte given in decimal or `0x` hex.
fn parse_byte(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|err| format!("invalid flags byte {s:?}: {err}"))
}

fn lookup_proto(value: &str) {
    match value.parse::<proto::IpProto>() {
        Ok(num) => println!("{}", proto::proto_string(num)),
        Err(_) => match proto::proto_num(value) {
            Some(num) => println!("{num}"),
            None => println!("{NOT_FOUND}"),
        },
    }
}

fn lookup_l7(value: &str, cmd: &mut clap::Command) {
    match value.parse::<usize>() {
        Ok(id) => match l7::l7_proto_string(id) {
            Ok(name) => println!("{name}"),
            Err(err) => cmd.error(ErrorKind::InvalidValue, err).exit(),
        },
        Err(_) => match l7::l7_proto_num(value) {
            Some(id) => println!("{id}"),
            None => println!("{NOT_FOUND}"),
        },
    }
}

fn format_event(code: u32, kind: EventKind, taxonomy: Option<FwEventTaxonomy>) {
    let formatter = FieldFormatter::new(taxonomy.unwrap_or_default());
    debug!(code, ?kind, taxonomy = %formatter.taxonomy, "formatting event");
    match kind {
        EventKind::Nsel => println!("{}", formatter.event(code)),
        EventKind::Fw => println!("{}", formatter.fw_event(code)),
        EventKind::X => println!("{}", formatter.event_x(code)),
    }
}

/// Print `(index, name)` pairs, skipping names `regex` does not match.
fn list_table<I>(entries: I, regex: &Option<Regex>)
where
    I: Iterator<Item = (usize, &'static str)>,
{
    for (idx, name) in entries {
        if let Some(regex) = regex {
            if !regex.is_match(name) {
                continue;
            }
        }
        let idx = format!("{idx:>3}").blue();
        println!("{idx}  {}", name.green());
    }
}

fn main() -> Result<(), clap::Error> {
    let cli = Cli::parse();
    let mut cmd = Cli::command();

    logging::init_logging(logging::level_from_verbosity(cli.verbose));
    trace!(command = ?cli.command, "dispatching");

    match cli.command {
        Command::Proto { value } => lookup_proto(&value),
        Command::L7 { value } => lookup_l7(&value, &mut cmd),
        Command::Flags { flags } => println!("{}", flags::flags_string(flags)),
        Command::Addr { addr, long } => println!("{}", addr::ip_string(addr, long)),
        Command::Event {
            code,
            kind,
            taxonomy,
        } => format_event(code, kind, taxonomy),
        Command::List {
            app,
            search_expression,
        } => {
            let mut regex: Option<Regex> = None;
            if let Some(re) = search_expression {
                regex = match Regex::new(&re) {
                    Ok(expr) => Some(expr),
                    Err(err) => cmd.error(ErrorKind::InvalidValue, err).exit(),
                }
            }

            if app {
                list_table(l7::l7_protocols(), &regex);
            } else {
                let entries = proto::protocols().map(|(num, name)| (num as usize, name));
                list_table(entries, &regex);
            }
        }
    }

    Ok(())
}
