//! The interactive game session.
//!
//! `GameSession` owns the universe, the ship, and the flight log, and turns
//! each line of player input into a response string. There is no hidden
//! global state: construct a session, feed it lines, read the answers. All
//! randomness happens at construction, so one seed always replays the same
//! run.

use rand::SeedableRng;
use rand::rngs::StdRng;

use rigel_core::{
    Body, BodyId, BodyKind, FUEL_PER_DISTANCE, RigelError, Ship, Universe,
};

use crate::command::{Command, parse_command};
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::log::{FlightLog, LogEntry};

/// How many flight log entries the `log` command shows.
const RECENT_LOG_LINES: usize = 10;

/// An interactive prospecting run.
pub struct GameSession {
    universe: Universe,
    ship: Ship,
    log: FlightLog,
    pending_travel: Option<Vec<BodyId>>,
    menu_size: usize,
    turn: u64,
    finished: bool,
}

impl GameSession {
    /// Roll a universe from the config seed and dock a fresh ship in it.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let universe = Universe::generate(&config.universe, &mut rng)?;
        Self::with_universe(universe, &config)
    }

    /// Run a session in a pre-built universe.
    ///
    /// The ship docks at the first station, or at the first body when the
    /// universe has no stations. An empty universe is unplayable.
    pub fn with_universe(universe: Universe, config: &GameConfig) -> GameResult<Self> {
        let dock = universe
            .first_station()
            .or_else(|| universe.bodies().next())
            .ok_or(RigelError::EmptyUniverse)?;
        let ship = Ship::new(config.ship_name.clone(), dock, config.starting_fuel);

        Ok(Self {
            universe,
            ship,
            log: FlightLog::new(config.log_cap),
            pending_travel: None,
            menu_size: config.menu_size,
            turn: 0,
            finished: false,
        })
    }

    /// The universe this session plays in.
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// The player's ship.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// The flight log.
    pub fn log(&self) -> &FlightLog {
        &self.log
    }

    /// Completed turns so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// True once the player has quit.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// True while the departure menu is waiting for a choice.
    pub fn awaiting_choice(&self) -> bool {
        self.pending_travel.is_some()
    }

    /// Process a line of player input and return a response.
    ///
    /// Errors are recoverable by design: the caller reports them and keeps
    /// reading input.
    pub fn process(&mut self, input: &str) -> GameResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        // An armed departure menu captures the next line as a choice.
        if self.pending_travel.is_some() {
            return self.do_travel_choice(trimmed);
        }

        match parse_command(trimmed) {
            Command::Travel => self.do_travel_menu(),
            Command::Mine => self.do_mine(),
            Command::Refuel => self.do_refuel(),
            Command::Status => Ok(self.status()),
            Command::Log => Ok(self.do_log()),
            Command::Help { topic } => Ok(self.do_help(topic.as_deref().unwrap_or(""))),
            Command::Quit => {
                self.finished = true;
                Ok("Course logged. Safe travels, captain.".to_string())
            }
            Command::Unknown { input } => Err(GameError::UnknownCommand(input)),
        }
    }

    /// The ship status block appended to every action's output.
    pub fn status(&self) -> String {
        let dock = match self.universe.get(self.ship.docked_at()) {
            Some(body) => format!("{} ({})", body.display_name(), describe_body(body)),
            None => "adrift".to_string(),
        };
        format!(
            "{}\n  Docked at: {}\n  Fuel:      {:.1}\n  Cargo:     {} metal",
            self.ship.name(),
            dock,
            self.ship.fuel(),
            self.ship.cargo(),
        )
    }

    fn do_travel_menu(&mut self) -> GameResult<String> {
        let nearest = self
            .universe
            .nearest(self.ship.docked_at(), self.menu_size)?;
        if nearest.is_empty() {
            return Ok("Nothing else out there. The ship stays put.".to_string());
        }

        let mut out = String::from("Nearest destinations:\n");
        for (i, (body, distance)) in nearest.iter().enumerate() {
            let kind = body.kind().to_string();
            out.push_str(&format!(
                "  {}. {:<24} {kind:<8} {distance:>8.1} units {:>7.1} fuel\n",
                i + 1,
                body.display_name(),
                distance * FUEL_PER_DISTANCE,
            ));
        }
        out.push_str(&format!(
            "Enter 1-{} to set course, anything else to stay docked.",
            nearest.len()
        ));

        self.pending_travel = Some(nearest.into_iter().map(|(body, _)| body.id()).collect());
        Ok(out)
    }

    fn do_travel_choice(&mut self, input: &str) -> GameResult<String> {
        let Ok(choice) = input.parse::<usize>() else {
            self.pending_travel = None;
            return Ok("Departure cancelled.".to_string());
        };

        // Out-of-range numbers keep the menu armed for another try.
        let count = self.pending_travel.as_ref().map_or(0, Vec::len);
        if choice == 0 || choice > count {
            return Err(GameError::InvalidChoice(format!(
                "pick a destination between 1 and {count}"
            )));
        }

        let options = self.pending_travel.take().unwrap_or_default();
        let dest_id = options[choice - 1];

        let from = match self.universe.get(self.ship.docked_at()) {
            Some(body) => body.display_name().to_string(),
            None => "deep space".to_string(),
        };
        let dest = self.universe.body(dest_id)?;
        let to = dest.display_name().to_string();
        let quote = self.ship.travel(dest)?;

        self.turn += 1;
        self.log.push(LogEntry::Departure {
            turn: self.turn,
            from,
            to: to.clone(),
            distance: quote.distance,
            fuel_spent: quote.fuel,
        });

        Ok(format!(
            "Course set. {:.1} units later the ship docks at {to}.\n\n{}",
            quote.distance,
            self.status()
        ))
    }

    fn do_mine(&mut self) -> GameResult<String> {
        let body = self.universe.body_mut(self.ship.docked_at())?;
        let name = body.display_name().to_string();
        let BodyKind::Planet(planet) = body.kind_mut() else {
            return Err(GameError::NotAtPlanet(name));
        };

        let mined = planet.mine();
        let remaining = planet.metal_resources();
        self.ship.load_metal(mined);

        self.turn += 1;
        self.log.push(LogEntry::Mined {
            turn: self.turn,
            body: name.clone(),
            amount: mined,
            remaining,
        });

        let report = if mined == 0 {
            format!("The seams of {name} are exhausted. Nothing left to extract.")
        } else {
            format!("Extracted {mined} metal from {name} ({remaining} left in the crust).")
        };
        Ok(format!("{report}\n\n{}", self.status()))
    }

    fn do_refuel(&mut self) -> GameResult<String> {
        let body = self.universe.body(self.ship.docked_at())?;
        let name = body.display_name().to_string();
        let BodyKind::Station(station) = body.kind() else {
            return Err(GameError::NotAtStation(name));
        };

        // Quote first, then move cargo and fuel in one committed step.
        let fuel = station.exchange_metal_for_fuel(self.ship.cargo())?;
        let metal = self.ship.unload_metal();
        self.ship.refuel(fuel)?;

        self.turn += 1;
        self.log.push(LogEntry::Exchanged {
            turn: self.turn,
            station: name.clone(),
            metal,
            fuel_gained: fuel,
        });

        Ok(format!(
            "{name} takes {metal} metal and pumps {fuel:.1} fuel aboard.\n\n{}",
            self.status()
        ))
    }

    fn do_log(&self) -> String {
        if self.log.is_empty() {
            return "The flight log is empty.".to_string();
        }
        let shown = self.log.len().min(RECENT_LOG_LINES);
        format!(
            "Flight log ({} entries, last {shown}):\n{}",
            self.log.len(),
            self.log.render_recent(RECENT_LOG_LINES)
        )
    }

    fn do_help(&self, topic: &str) -> String {
        match topic.to_lowercase().as_str() {
            "travel" | "t" => "\
Travel:
  t             List the nearest destinations with distance and fuel cost
  <number>      Set course for that entry; anything else stays docked

Fuel burns at 0.1 per unit of distance. A trip either happens in full or
not at all - if the tank falls short nothing moves."
                .to_string(),
            "mine" | "m" | "mining" => "\
Mining:
  m             Extract metal from the planet the ship is docked at

Each planet yields its exploitation rate per turn until the deposit runs
out; a depleted planet yields nothing, forever."
                .to_string(),
            "trade" | "r" | "refuel" | "sell" => "\
Trading:
  r             Sell the whole hold at the docked station

The station pays its posted price in fuel per unit of metal. An empty
hold buys nothing."
                .to_string(),
            "log" => "\
Flight log:
  log           Show the most recent flight log entries

Every completed action - trips, extractions, trades - is recorded with
its turn number."
                .to_string(),
            _ => "\
Commands:
  t             List nearby destinations and set course
  m             Mine metal from the docked planet
  r             Trade the metal hold for fuel (stations only)
  s             Show ship status
  log           Show recent flight log entries
  help [topic]  Show help (travel, mine, trade, log)
  q             Quit

One action per turn. Travel costs fuel, planets yield metal, stations
buy the hold and pay in fuel."
                .to_string(),
        }
    }
}

/// Kind-specific detail shown next to a body's name.
fn describe_body(body: &Body) -> String {
    match body.kind() {
        BodyKind::Planet(planet) => {
            format!("planet, {} metal in the crust", planet.metal_resources())
        }
        BodyKind::Station(station) => {
            format!("station, pays {:.2} fuel per metal", station.metal_price())
        }
    }
}
