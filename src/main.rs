// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Console driver for the Detective Quest mansion game.
//!
//! All rendering and input live here; the library never prints. The driver
//! builds the mansion (which seeds the suspect registry), runs the command
//! loop until the session finishes, then reports the suspects, the verdict
//! and the session summary.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use detective_quest::{
    Arrival, ClueIndex, Command, Counters, Exploration, Mansion, Statistics, Step, SuspectRegistry,
};

fn main() -> Result<()> {
    let mut registry = SuspectRegistry::new();
    let mut mansion = Mansion::build(&mut registry);

    println!("--- Detective Quest: The Mystery at the Mansion ---");
    println!("Welcome! Your mission is to explore the mansion starting from the Hall de Entrada.");

    let stdin = io::stdin();
    explore(&mut mansion, &mut stdin.lock())?;

    report_suspects(&registry);
    report_verdict(&registry);
    Ok(())
}

/// Run the command loop until the player quits or hits a dead end.
fn explore(mansion: &mut Mansion, input: &mut impl BufRead) -> Result<()> {
    let mut session = Exploration::begin(mansion, ClueIndex::new());

    println!("\n--- MANSION EXPLORATION ---");
    render_arrival(&session, session.first_arrival());

    while !session.is_finished() {
        render_prompt(&session)?;
        let choice = match read_command(input)? {
            Some(ch) => ch,
            None => {
                // End of input plays as quitting.
                session.apply(Command::Quit);
                println!("\nLeaving the mansion...");
                break;
            }
        };
        match session.apply_char(choice) {
            Step::Moved(arrival) => render_arrival(&session, &arrival),
            Step::Blocked(direction) => {
                println!("[WARNING] No path to the {}. Try another direction.", direction)
            }
            Step::ViewRequested => render_clues(session.clues()),
            Step::Quit => println!("\nLeaving the mansion..."),
            Step::Invalid(_) => println!("[WARNING] Invalid choice. Use 'e', 'd', 's' or 'v'."),
            Step::Finished => {}
        }
    }

    render_summary(session.statistics());
    Ok(())
}

fn render_arrival(session: &Exploration, arrival: &Arrival) {
    println!("\nYou arrive at: {}", session.current_room_name());
    if let Some(clue) = arrival.clue.as_deref() {
        println!("[CLUE] You found a piece of evidence in this room!");
        println!("[CLUE COLLECTED] '{}'", clue);
    }
    if arrival.dead_end {
        println!("\n[END OF THE LINE] This room has no more paths. The exploration is over.");
    }
}

fn render_prompt(session: &Exploration) -> io::Result<()> {
    let mut options: Vec<String> = Vec::new();
    if let Some(name) = session.left_room_name() {
        options.push(format!("(e) for {}", name));
    }
    if let Some(name) = session.right_room_name() {
        options.push(format!("(d) for {}", name));
    }
    options.push("(s) to leave the mansion".to_string());
    options.push("(v) to view clues".to_string());
    print!("\nChoose the next path: {}: ", options.join(" | "));
    io::stdout().flush()
}

/// Read one command character, skipping blank lines. `None` means the input
/// ended, which the caller treats as quitting.
fn read_command(input: &mut impl BufRead) -> Result<Option<char>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(ch) = line.trim().chars().next() {
            return Ok(Some(ch));
        }
    }
}

fn render_clues(clues: &ClueIndex) {
    println!("\n--- COLLECTED CLUES (IN ORDER) ---");
    if clues.is_empty() {
        println!("No clues collected so far.");
    } else {
        for clue in clues {
            println!("- {}", clue);
        }
    }
}

fn render_summary(statistics: &Statistics) {
    println!("\n--- SESSION SUMMARY ---");
    println!("Rooms visited:    {}", statistics.get(Counters::RoomsVisited));
    println!("Clues collected:  {}", statistics.get(Counters::CluesCollected));
    println!("Blocked moves:    {}", statistics.get(Counters::BlockedMoves));
    println!("Invalid commands: {}", statistics.get(Counters::InvalidCommands));
    println!("Clue views:       {}", statistics.get(Counters::ClueViews));
}

fn report_suspects(registry: &SuspectRegistry) {
    println!("\n--- SUSPECTS AND ASSOCIATED CLUES ---");
    if registry.is_empty() {
        println!("No suspects registered.");
        return;
    }
    for suspect in registry.iter() {
        println!("\nSuspect: {} (Citations: {})", suspect.name(), suspect.citations());
        println!("  Clues:");
        let mut listed = false;
        for clue in suspect.clues() {
            println!("    - {}", clue);
            listed = true;
        }
        if !listed {
            println!("    - No clues associated.");
        }
    }
}

fn report_verdict(registry: &SuspectRegistry) {
    println!("\n--- VERDICT ---");
    match registry.most_likely() {
        Some(suspect) => {
            println!("The most likely suspect is: {}", suspect.name());
            println!("Based on {} clue citations.", suspect.citations());
        }
        None => println!("Not enough clues, or the crime was perfect."),
    }
}
