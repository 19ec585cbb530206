//! Muster: recruit a roster, then let every hero act in order

use serde::Serialize;
use std::io::{BufWriter, Write};
use std::str::FromStr;

use crate::core::error::Result;
use crate::core::types::{Faction, Role};
use crate::entity::Hero;
use crate::roster::Roster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// JSON line emitted per hero
#[derive(Serialize)]
struct ActionReport<'a> {
    name: &'a str,
    faction: Faction,
    role: Role,
    health: u32,
    line: String,
}

impl<'a> From<&'a Hero> for ActionReport<'a> {
    fn from(hero: &'a Hero) -> Self {
        Self {
            name: hero.name(),
            faction: hero.faction(),
            role: hero.role(),
            health: hero.health(),
            line: hero.action_line(),
        }
    }
}

/// Recruit the whole roster, then write each hero's action line
///
/// Nothing is written if any hero fails to recruit. Returns how many heroes acted.
pub fn muster<W: Write>(roster: &Roster, format: OutputFormat, out: W) -> Result<usize> {
    if roster.is_empty() {
        tracing::warn!("Roster is empty - nobody to muster");
    }

    let heroes = roster.recruit()?;
    tracing::info!("Mustering {} heroes", heroes.len());

    let mut out = BufWriter::new(out);
    for hero in &heroes {
        match format {
            OutputFormat::Text => hero.act(&mut out)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, &ActionReport::from(hero))?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;

    tracing::info!("Muster complete");
    Ok(heroes.len())
}
