// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! Command-line console for the Muster visit-request system.
//!
//! This binary is the thin driver standing in for the out-of-scope view
//! layer: each invocation opens the store (rehydrating the persisted
//! state), dispatches exactly one action, and prints the result.
//! Form-level validation runs here, before anything reaches the store.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use time::Date;
use time::macros::format_description;
use tracing::info;

use muster::{CredentialStore, RequestFilter, Store};
use muster_client::HttpRemote;
use muster_domain::{
    Gender, NewSoldier, Request, RequestDetail, RequestStatus, ServiceType, Soldier, SoldierPatch,
    validate_new_soldier, validate_request,
};
use muster_messaging::{Clipboard, MessagingError, request_summary, soldier_summary, whatsapp_link};
use muster_persistence::FileStore;

/// Muster - administrative console for soldiers and base-visit requests
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the console's state blob
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Base URL of the remote API (e.g. `http://localhost:3000`).
    /// The console runs detached when this is absent.
    #[arg(short, long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a session
    Login {
        /// The operator's username
        username: String,
        /// The operator's password
        password: String,
    },
    /// Close the current session
    Logout,
    /// Refresh the soldier and request collections from the remote API
    Sync,
    /// Manage the soldier roster
    Soldier {
        #[command(subcommand)]
        action: SoldierCommand,
    },
    /// Submit and review visit requests
    Request {
        #[command(subcommand)]
        action: RequestCommand,
    },
    /// Show recorded errors
    Errors {
        /// Acknowledge all recorded errors after showing them
        #[arg(long)]
        acknowledge: bool,
    },
}

#[derive(Subcommand, Debug)]
enum SoldierCommand {
    /// Add a soldier to the roster
    Add {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        military_id: String,
        #[arg(long)]
        national_id: String,
        #[arg(long)]
        phone: String,
        #[arg(long, value_parser = Gender::parse)]
        gender: Gender,
        #[arg(long)]
        rank: String,
        #[arg(long, value_parser = ServiceType::parse)]
        service_type: ServiceType,
        #[arg(long)]
        center: String,
        #[arg(long)]
        branch: String,
        #[arg(long)]
        department: String,
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        role: String,
        #[arg(long)]
        requires_entry_approval: bool,
        #[arg(long)]
        has_unit_guard: bool,
        #[arg(long, default_value = "")]
        security_clearance: String,
        #[arg(long, default_value = "")]
        allergies: String,
    },
    /// Update fields of an existing soldier (shallow merge)
    Update {
        /// The soldier's id
        id: String,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        military_id: Option<String>,
        #[arg(long)]
        national_id: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long, value_parser = Gender::parse)]
        gender: Option<Gender>,
        #[arg(long)]
        rank: Option<String>,
        #[arg(long, value_parser = ServiceType::parse)]
        service_type: Option<ServiceType>,
        #[arg(long)]
        center: Option<String>,
        #[arg(long)]
        branch: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        requires_entry_approval: Option<bool>,
        #[arg(long)]
        has_unit_guard: Option<bool>,
        #[arg(long)]
        security_clearance: Option<String>,
        #[arg(long)]
        allergies: Option<String>,
    },
    /// Remove a soldier from the roster
    Delete {
        /// The soldier's id
        id: String,
    },
    /// List the full roster
    List,
    /// Search the roster by name or identifier
    Search {
        /// The query string
        query: String,
    },
    /// Show one soldier in full
    Show {
        /// The soldier's id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum RequestCommand {
    /// Submit a single-day visit request
    Day {
        #[arg(long)]
        soldier_id: String,
        #[arg(long, value_parser = parse_date)]
        arrival: Date,
        #[arg(long)]
        base: String,
        #[arg(long)]
        requires_base_approval: bool,
        #[arg(long)]
        has_visited_base: bool,
    },
    /// Submit a multi-day stay request
    Stay {
        #[arg(long)]
        soldier_id: String,
        #[arg(long, value_parser = parse_date)]
        arrival: Date,
        #[arg(long, value_parser = parse_date)]
        departure: Date,
        #[arg(long)]
        base: String,
        #[arg(long)]
        requires_base_approval: bool,
        #[arg(long)]
        has_visited_base: bool,
    },
    /// Submit a soldier exchange request
    Exchange {
        #[arg(long)]
        incoming_id: String,
        #[arg(long)]
        outgoing_id: String,
        #[arg(long, value_parser = parse_date)]
        arrival: Date,
        #[arg(long, value_parser = parse_date)]
        departure: Date,
        #[arg(long, value_parser = parse_date)]
        exit: Date,
        #[arg(long)]
        base: String,
    },
    /// Submit a base departure request
    Departure {
        #[arg(long)]
        soldier_id: String,
        #[arg(long, value_parser = parse_date)]
        exit: Date,
        #[arg(long)]
        base: String,
    },
    /// Transition a request's approval status
    SetStatus {
        /// The request's id
        id: String,
        /// The new status (pending, approved, rejected)
        #[arg(value_parser = RequestStatus::parse)]
        status: RequestStatus,
    },
    /// List requests, optionally filtered
    List {
        #[arg(long, value_parser = RequestStatus::parse)]
        status: Option<RequestStatus>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        soldier_name: Option<String>,
    },
    /// Render a request's message summary
    Message {
        /// The request's id
        id: String,
        /// Also print the WhatsApp deep link for the soldier's phone
        #[arg(long)]
        whatsapp: bool,
    },
}

/// Parses a `YYYY-MM-DD` date argument.
fn parse_date(s: &str) -> Result<Date, String> {
    let description = format_description!("[year]-[month]-[day]");
    Date::parse(s, &description).map_err(|e| format!("invalid date '{s}': {e}"))
}

/// Clipboard seam implementation: hands the text to the terminal, where
/// the operator's own tooling takes over.
struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn copy(&mut self, text: &str) -> Result<(), MessagingError> {
        println!("{text}");
        Ok(())
    }
}

type ConsoleStore = Store<HttpRemote, FileStore>;

/// Pulls the most recent error message off the store for reporting.
fn last_error_message(store: &ConsoleStore) -> String {
    store.state().errors.last().map_or_else(
        || String::from("unknown error"),
        |event| event.message.clone(),
    )
}

fn print_soldier_line(soldier: &Soldier) {
    println!(
        "{}  {}  {}  {}",
        soldier.id, soldier.military_id, soldier.full_name, soldier.department
    );
}

fn print_request_line(request: &Request) {
    let names: Vec<&str> = request
        .detail
        .soldiers()
        .iter()
        .map(|soldier| soldier.full_name.as_str())
        .collect();
    println!(
        "{}  {}  {}  {}  {}",
        request.id,
        request.detail.submitting_type(),
        request.status,
        request.detail.base(),
        names.join(" / ")
    );
}

/// Looks up the soldier a request form references, by id.
fn required_soldier(store: &ConsoleStore, id: &str) -> Result<Soldier, String> {
    store
        .soldier_by_id(id)
        .cloned()
        .ok_or_else(|| format!("no soldier with id '{id}'"))
}

/// Validates a request payload at the form boundary and submits it.
async fn submit_request(store: &mut ConsoleStore, detail: RequestDetail) -> Result<(), String> {
    validate_request(&detail).map_err(|e| e.to_string())?;
    let added: Option<Request> = store.add_request(detail).await.cloned();
    match added {
        Some(request) => {
            println!("Request {} submitted ({})", request.id, request.status);
            Ok(())
        }
        None => Err(last_error_message(store)),
    }
}

#[allow(clippy::too_many_lines)]
async fn run(store: &mut ConsoleStore, command: Command) -> Result<(), String> {
    match command {
        Command::Login { username, password } => {
            if store.login(&username, &password) {
                println!("Logged in as {username}");
                Ok(())
            } else {
                Err(last_error_message(store))
            }
        }
        Command::Logout => {
            store.logout();
            println!("Logged out");
            Ok(())
        }
        Command::Sync => {
            let soldiers_ok: bool = store.load_soldiers().await;
            let requests_ok: bool = store.load_requests().await;
            if soldiers_ok && requests_ok {
                println!(
                    "Synced {} soldiers, {} requests",
                    store.state().soldiers.len(),
                    store.state().requests.len()
                );
                Ok(())
            } else {
                Err(last_error_message(store))
            }
        }
        Command::Soldier { action } => match action {
            SoldierCommand::Add {
                full_name,
                military_id,
                national_id,
                phone,
                gender,
                rank,
                service_type,
                center,
                branch,
                department,
                team,
                role,
                requires_entry_approval,
                has_unit_guard,
                security_clearance,
                allergies,
            } => {
                let payload = NewSoldier {
                    full_name,
                    military_id,
                    national_id,
                    phone,
                    gender,
                    rank,
                    service_type,
                    center,
                    branch,
                    department,
                    team,
                    role,
                    requires_entry_approval,
                    has_unit_guard,
                    security_clearance,
                    allergies,
                };
                validate_new_soldier(&payload).map_err(|e| e.to_string())?;
                let id: String = store.add_soldier(payload).id.clone();
                println!("Soldier {id} added");
                Ok(())
            }
            SoldierCommand::Update {
                id,
                full_name,
                military_id,
                national_id,
                phone,
                gender,
                rank,
                service_type,
                center,
                branch,
                department,
                team,
                role,
                requires_entry_approval,
                has_unit_guard,
                security_clearance,
                allergies,
            } => {
                let patch = SoldierPatch {
                    full_name,
                    military_id,
                    national_id,
                    phone,
                    gender,
                    rank,
                    service_type,
                    center,
                    branch,
                    department,
                    team,
                    role,
                    requires_entry_approval,
                    has_unit_guard,
                    security_clearance,
                    allergies,
                };
                if patch.is_empty() {
                    return Err(String::from("nothing to update"));
                }
                if store.update_soldier(&id, patch).await {
                    println!("Soldier {id} updated");
                    Ok(())
                } else if store.soldier_by_id(&id).is_none() {
                    Err(format!("no soldier with id '{id}'"))
                } else {
                    Err(last_error_message(store))
                }
            }
            SoldierCommand::Delete { id } => {
                if store.delete_soldier(&id) {
                    println!("Soldier {id} deleted");
                } else {
                    println!("No soldier with id '{id}' (nothing to do)");
                }
                Ok(())
            }
            SoldierCommand::List => {
                for soldier in &store.state().soldiers {
                    print_soldier_line(soldier);
                }
                Ok(())
            }
            SoldierCommand::Search { query } => {
                for soldier in store.search_soldiers(&query) {
                    print_soldier_line(&soldier);
                }
                Ok(())
            }
            SoldierCommand::Show { id } => {
                let soldier: Soldier = required_soldier(store, &id)?;
                println!("{}", soldier_summary(&soldier));
                Ok(())
            }
        },
        Command::Request { action } => match action {
            RequestCommand::Day {
                soldier_id,
                arrival,
                base,
                requires_base_approval,
                has_visited_base,
            } => {
                let soldier: Soldier = required_soldier(store, &soldier_id)?;
                submit_request(
                    store,
                    RequestDetail::DayVisit {
                        soldier,
                        arrival_date: arrival,
                        base,
                        requires_base_approval,
                        has_visited_base,
                    },
                )
                .await
            }
            RequestCommand::Stay {
                soldier_id,
                arrival,
                departure,
                base,
                requires_base_approval,
                has_visited_base,
            } => {
                let soldier: Soldier = required_soldier(store, &soldier_id)?;
                submit_request(
                    store,
                    RequestDetail::Stay {
                        soldier,
                        arrival_date: arrival,
                        departure_date: departure,
                        base,
                        requires_base_approval,
                        has_visited_base,
                    },
                )
                .await
            }
            RequestCommand::Exchange {
                incoming_id,
                outgoing_id,
                arrival,
                departure,
                exit,
                base,
            } => {
                let incoming: Soldier = required_soldier(store, &incoming_id)?;
                let outgoing: Soldier = required_soldier(store, &outgoing_id)?;
                submit_request(
                    store,
                    RequestDetail::Exchange {
                        incoming,
                        outgoing,
                        arrival_date: arrival,
                        departure_date: departure,
                        exit_date: exit,
                        base,
                    },
                )
                .await
            }
            RequestCommand::Departure {
                soldier_id,
                exit,
                base,
            } => {
                let soldier: Soldier = required_soldier(store, &soldier_id)?;
                submit_request(
                    store,
                    RequestDetail::Departure {
                        soldier,
                        exit_date: exit,
                        base,
                    },
                )
                .await
            }
            RequestCommand::SetStatus { id, status } => {
                if store.update_request_status(&id, status).await {
                    println!("Request {id} is now {status}");
                    Ok(())
                } else if store.request_by_id(&id).is_none() {
                    Err(format!("no request with id '{id}'"))
                } else {
                    Err(last_error_message(store))
                }
            }
            RequestCommand::List {
                status,
                department,
                soldier_name,
            } => {
                let filter = RequestFilter {
                    status,
                    department,
                    soldier_name,
                };
                for request in store.requests_by_filter(&filter) {
                    print_request_line(&request);
                }
                Ok(())
            }
            RequestCommand::Message { id, whatsapp } => {
                let request: Request = store
                    .request_by_id(&id)
                    .cloned()
                    .ok_or_else(|| format!("no request with id '{id}'"))?;
                let summary: String = request_summary(&request);

                let mut clipboard = TerminalClipboard;
                clipboard.copy(&summary).map_err(|e| e.to_string())?;

                if whatsapp {
                    let phone: String = request
                        .detail
                        .soldiers()
                        .first()
                        .map(|soldier| soldier.phone.clone())
                        .ok_or_else(|| String::from("request carries no soldier"))?;
                    let link = whatsapp_link(&phone, &summary).map_err(|e| e.to_string())?;
                    println!("\n{link}");
                }
                Ok(())
            }
        },
        Command::Errors { acknowledge } => {
            for event in store.state().errors.events() {
                println!("{}  {}  {}", event.at, event.context, event.message);
            }
            if acknowledge {
                store.acknowledge_errors();
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Initializing Muster console");

    let credentials: CredentialStore = match CredentialStore::with_defaults() {
        Ok(credentials) => credentials,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let remote: Option<HttpRemote> = args.api_url.as_deref().map(HttpRemote::new);
    let storage: FileStore = FileStore::new(&args.data_dir);
    let mut store: ConsoleStore = Store::open(remote, storage, credentials);

    if let Err(message) = run(&mut store, args.command).await {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}
