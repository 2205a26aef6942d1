use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use crate::application::{RentalError, RentalLedger};
use crate::domain::{parse_datetime, Rental};

/// Rentio - Car Rental Desk
#[derive(Parser)]
#[command(name = "rentio")]
#[command(about = "An in-memory car rental desk for the command line")]
#[command(version)]
pub struct Cli {
    /// Echo each ledger mutation to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line of shell input. `multicall` makes the first word the command
/// name, so `rent CAM123 ...` parses without a leading program name.
#[derive(Parser)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// List the fleet with current availability
    Fleet {
        /// Output as JSON instead of display lines
        #[arg(long)]
        json: bool,
    },

    /// Rent a car to a customer
    Rent {
        /// Car id (e.g. CAM123)
        car_id: String,

        /// Pickup date-time (YYYY-MM-DDTHH:MM)
        pickup: String,

        /// Return date-time (YYYY-MM-DDTHH:MM)
        #[arg(value_name = "RETURN")]
        return_time: String,

        /// Customer name (remaining words are joined)
        #[arg(required = true, num_args = 1..)]
        customer: Vec<String>,
    },

    /// Return a rented car
    Return {
        /// Car id
        car_id: String,
    },

    /// Cancel a rental (allowed only within 24h before pickup)
    Cancel {
        /// Car id
        car_id: String,
    },

    /// List active rentals
    Rentals {
        /// Output as JSON instead of summary lines
        #[arg(long)]
        json: bool,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut ledger = RentalLedger::with_demo_fleet();

        println!("Rentio - car rental desk");
        println!("Type 'help' for commands, 'quit' to leave.");
        println!();
        for car in ledger.fleet() {
            println!("{car}");
        }

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut line = String::new();
        loop {
            print!("rentio> ");
            io::stdout().flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // EOF ends the session (piped input).
                break;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }

            match ShellLine::try_parse_from(tokens) {
                Ok(shell) => match self.execute(&mut ledger, shell.command) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(err) => println!("Error: {err}"),
                },
                Err(err) => print!("{err}"),
            }
        }

        Ok(())
    }

    /// Run one shell command. Returns false when the session should end.
    fn execute(&self, ledger: &mut RentalLedger, command: ShellCommand) -> Result<bool> {
        match command {
            ShellCommand::Fleet { json } => {
                if json {
                    println!("{}", serde_json::to_string_pretty(ledger.fleet())?);
                } else {
                    for car in ledger.fleet() {
                        println!("{car}");
                    }
                }
            }

            ShellCommand::Rent {
                car_id,
                pickup,
                return_time,
                customer,
            } => {
                let pickup_time = parse_datetime(&pickup)
                    .map_err(|e| RentalError::InvalidInput(e.to_string()))?;
                let return_time = parse_datetime(&return_time)
                    .map_err(|e| RentalError::InvalidInput(e.to_string()))?;
                let customer_name = customer.join(" ");

                let rental = ledger.rent(&car_id, &customer_name, pickup_time, return_time)?;
                println!("Rented successfully!");
                println!("{}", rental.summary());
                if self.verbose {
                    eprintln!("[ledger] {} rented to {}", car_id, customer_name);
                }
            }

            ShellCommand::Return { car_id } => {
                ledger.return_car(&car_id)?;
                println!("Car returned successfully.");
                if self.verbose {
                    eprintln!("[ledger] {} returned", car_id);
                }
            }

            ShellCommand::Cancel { car_id } => {
                ledger.cancel(&car_id, Local::now().naive_local())?;
                println!("Rental cancelled successfully.");
                if self.verbose {
                    eprintln!("[ledger] rental for {} cancelled", car_id);
                }
            }

            ShellCommand::Rentals { json } => {
                if json {
                    let rentals: Vec<&Rental> = ledger.active_rentals().collect();
                    println!("{}", serde_json::to_string_pretty(&rentals)?);
                } else {
                    let mut count = 0;
                    for rental in ledger.active_rentals() {
                        println!("{}", rental.summary());
                        count += 1;
                    }
                    if count == 0 {
                        println!("No active rentals.");
                    }
                }
            }

            ShellCommand::Quit => return Ok(false),
        }

        Ok(true)
    }
}
