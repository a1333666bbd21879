//! Shell commands and the session state they act on

use std::collections::BTreeMap;
use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::client::{Client, FetchError};
use crate::data::Pokemon;

/// Catch ratio below which the pokemon escapes
const ESCAPE_THRESHOLD: f64 = 0.4;

/// Errors a command can report without ending the session
#[derive(Debug, Error)]
pub enum CommandError {
    /// Fetching from the API failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The command needs an argument that was not given
    #[error("{0}")]
    MissingArgument(&'static str),

    /// `mapb` before any page or on the first page
    #[error("you're on the first page")]
    FirstPage,

    /// `mapf` past the last page
    #[error("you're on the last page")]
    LastPage,

    /// `inspect` on a pokemon that is not in the pokedex
    #[error("you have not caught {0}")]
    NotCaught(String),

    /// `pokedex` with nothing caught yet
    #[error("your pokedex is empty, go catch some pokemon with the catch command")]
    EmptyPokedex,

    /// Writing to the output failed
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Commands understood by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Mapf,
    Mapb,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    Exit,
}

impl Command {
    /// Every command, in the order `help` lists them
    pub const ALL: [Command; 8] = [
        Command::Catch,
        Command::Exit,
        Command::Explore,
        Command::Help,
        Command::Inspect,
        Command::Mapb,
        Command::Mapf,
        Command::Pokedex,
    ];

    /// Looks up a command by its (already lower-cased) name
    pub fn parse(name: &str) -> Option<Command> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Mapf => "mapf",
            Command::Mapb => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
            Command::Exit => "exit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Mapf => "Get the next page of locations",
            Command::Mapb => "Get the previous page of locations",
            Command::Explore => "Explore a location area, like \"explore <area-name>\"",
            Command::Catch => "Catch a pokemon, like \"catch <pokemon-name>\"",
            Command::Inspect => "Inspect a caught pokemon",
            Command::Pokedex => "List all caught pokemon",
            Command::Exit => "Exit the PokeFetch",
        }
    }
}

/// State carried between commands
///
/// Holds the client, the page cursor for `mapf`/`mapb` and the pokemon caught
/// so far.
pub struct Session {
    client: Client,
    next_page: Option<String>,
    previous_page: Option<String>,
    page_loaded: bool,
    pokedex: BTreeMap<String, Pokemon>,
    rng: StdRng,
}

impl Session {
    pub fn new(client: Client) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Creates a session with a fixed random source, for reproducible catches
    pub fn with_rng(client: Client, rng: StdRng) -> Self {
        Self {
            client,
            next_page: None,
            previous_page: None,
            page_loaded: false,
            pokedex: BTreeMap::new(),
            rng,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Names of caught pokemon, sorted
    pub fn caught(&self) -> impl Iterator<Item = &str> {
        self.pokedex.keys().map(String::as_str)
    }

    /// Runs a single command, writing its output to `out`
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        arg: Option<&str>,
        out: &mut W,
    ) -> Result<Flow, CommandError> {
        match command {
            Command::Help => self.help(out)?,
            Command::Mapf => self.map_forward(out).await?,
            Command::Mapb => self.map_back(out).await?,
            Command::Explore => self.explore(arg, out).await?,
            Command::Catch => self.catch(arg, out).await?,
            Command::Inspect => self.inspect(arg, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
            Command::Exit => {
                writeln!(out, "Closing the PokeFetch... Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        writeln!(out)?;
        writeln!(out, "Welcome to the PokeFetch!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "API responses are cached for {} seconds.",
            self.client.cache_ttl().as_secs()
        )?;
        Ok(())
    }

    async fn map_forward<W: Write>(&mut self, out: &mut W) -> Result<(), CommandError> {
        if self.page_loaded && self.next_page.is_none() {
            return Err(CommandError::LastPage);
        }
        let locator = self.next_page.clone();
        self.show_page(locator.as_deref(), out).await
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<(), CommandError> {
        let Some(locator) = self.previous_page.clone() else {
            return Err(CommandError::FirstPage);
        };
        self.show_page(Some(locator.as_str()), out).await
    }

    async fn show_page<W: Write>(
        &mut self,
        locator: Option<&str>,
        out: &mut W,
    ) -> Result<(), CommandError> {
        let page = self.client.location_areas(locator).await?;

        self.next_page = page.next;
        self.previous_page = page.previous;
        self.page_loaded = true;

        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&self, arg: Option<&str>, out: &mut W) -> Result<(), CommandError> {
        let name = arg.ok_or(CommandError::MissingArgument(
            "can't explore an empty area name, please provide a valid area name",
        ))?;
        let area = self.client.location_area(name).await?;

        writeln!(out, "Exploring {}...", area.name)?;
        writeln!(out, "Found Pokemon:")?;
        for encounter in &area.pokemon_encounters {
            writeln!(out, " - {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, arg: Option<&str>, out: &mut W) -> Result<(), CommandError> {
        let name = arg.ok_or(CommandError::MissingArgument(
            "can't catch a pokemon with no name, please provide one",
        ))?;
        if self.pokedex.contains_key(name) {
            writeln!(out, "You already caught {name}")?;
            return Ok(());
        }

        let pokemon = self.client.pokemon(name).await?;
        writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;

        if catch_succeeds(&mut self.rng, pokemon.base_experience.unwrap_or(0)) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.pokedex.insert(pokemon.name.clone(), pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, arg: Option<&str>, out: &mut W) -> Result<(), CommandError> {
        let name = arg.ok_or(CommandError::MissingArgument(
            "can't inspect a pokemon with no name, please provide one",
        ))?;
        let pokemon = self
            .pokedex
            .get(name)
            .ok_or_else(|| CommandError::NotCaught(name.to_string()))?;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  - {}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.type_.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        if self.pokedex.is_empty() {
            return Err(CommandError::EmptyPokedex);
        }
        writeln!(out, "Your Pokedex:")?;
        for name in self.caught() {
            writeln!(out, " - {name}")?;
        }
        Ok(())
    }
}

/// Decides whether a thrown ball catches a pokemon
///
/// Draws uniformly from `[0, base_experience)`; the pokemon escapes when the
/// draw is below 40% of its base experience. A pokemon without base
/// experience is always caught.
pub fn catch_succeeds<R: Rng + ?Sized>(rng: &mut R, base_experience: u32) -> bool {
    if base_experience == 0 {
        return true;
    }
    let draw = rng.gen_range(0..base_experience);
    f64::from(draw) / f64::from(base_experience) >= ESCAPE_THRESHOLD
}
