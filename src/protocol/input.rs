//! Line-protocol reader
//!
//! Handshake: `base_x base_y`, then the hero count.
//! Each turn: two `health mana` lines (own base first), the entity count,
//! then one line per entity:
//! `id type x y shield_life is_controlled health vx vy near_base threat_for`.
//! Only creatures need the trailing five fields.

use std::io::BufRead;

use crate::core::types::EntityId;
use crate::entity::{EntityRecord, EntityType, ThreatFor, Velocity};
use crate::protocol::ProtocolError;
use crate::simulation::snapshot::{BaseStatus, TurnSnapshot};
use crate::spatial::RawCoords;

const ENTITY_FIELDS: [&str; 11] = [
    "id",
    "type",
    "x",
    "y",
    "shield_life",
    "is_controlled",
    "health",
    "vx",
    "vy",
    "near_base",
    "threat_for",
];

/// Match setup sent once before the first turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handshake {
    pub base: RawCoords,
    pub heroes_per_player: usize,
}

/// Pulls handshake and snapshots off a line-based reader
pub struct SnapshotReader<R> {
    reader: R,
    line_no: usize,
}

impl<R: BufRead> SnapshotReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }

    pub fn read_handshake(&mut self) -> Result<Handshake, ProtocolError> {
        let line = self.expect_line("base position")?;
        let base = parse_ints(&line, self.line_no)?;
        let x = field(&base, 0, "base_x", self.line_no)?;
        let y = field(&base, 1, "base_y", self.line_no)?;

        let line = self.expect_line("hero count")?;
        let count = parse_ints(&line, self.line_no)?;
        let heroes = field(&count, 0, "heroes_per_player", self.line_no)?;

        Ok(Handshake {
            base: RawCoords::new(x, y),
            heroes_per_player: heroes.max(0) as usize,
        })
    }

    /// Next snapshot, or `None` when the input ends between turns
    pub fn read_turn(&mut self) -> Result<Option<TurnSnapshot>, ProtocolError> {
        let Some(first) = self.next_line()? else {
            return Ok(None);
        };
        let own = self.parse_base_status(&first)?;
        let line = self.expect_line("opponent base status")?;
        let opponent = self.parse_base_status(&line)?;

        let line = self.expect_line("entity count")?;
        let count = parse_ints(&line, self.line_no)?;
        let count = field(&count, 0, "entity_count", self.line_no)?.max(0) as usize;

        let mut entities = Vec::with_capacity(count);
        for _ in 0..count {
            let line = self.expect_line("entity")?;
            entities.push(parse_entity_line(&line, self.line_no)?);
        }

        Ok(Some(TurnSnapshot::new(own, opponent, entities)))
    }

    fn parse_base_status(&self, line: &str) -> Result<BaseStatus, ProtocolError> {
        let values = parse_ints(line, self.line_no)?;
        Ok(BaseStatus::new(
            field(&values, 0, "health", self.line_no)?,
            field(&values, 1, "mana", self.line_no)?,
        ))
    }

    /// Next non-empty line, `None` at end of input
    fn next_line(&mut self) -> Result<Option<String>, ProtocolError> {
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<String, ProtocolError> {
        self.next_line()?
            .ok_or(ProtocolError::UnexpectedEof { expected })
    }
}

/// Parse one entity line
pub fn parse_entity_line(line: &str, line_no: usize) -> Result<EntityRecord, ProtocolError> {
    let values = parse_ints(line, line_no)?;
    let get = |idx: usize| field(&values, idx, ENTITY_FIELDS[idx], line_no);

    let tag = get(1)?;
    let kind = EntityType::from_code(tag).ok_or(ProtocolError::UnknownEntityType { tag, line: line_no })?;

    let mut record = EntityRecord {
        id: EntityId(get(0)?),
        kind,
        x: get(2)?,
        y: get(3)?,
        shield_life: get(4)?,
        is_controlled: get(5)? == 1,
        health: 0,
        velocity: Velocity::default(),
        near_base: false,
        threat_for: ThreatFor::Neither,
    };

    if kind == EntityType::Creature {
        record.health = get(6)?;
        record.velocity = Velocity::new(get(7)?, get(8)?);
        record.near_base = get(9)? == 1;
        record.threat_for = ThreatFor::from_code(get(10)?);
    }

    Ok(record)
}

fn parse_ints(line: &str, line_no: usize) -> Result<Vec<i32>, ProtocolError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i32>().map_err(|_| ProtocolError::InvalidInteger {
                token: token.to_string(),
                line: line_no,
            })
        })
        .collect()
}

fn field(values: &[i32], idx: usize, name: &'static str, line_no: usize) -> Result<i32, ProtocolError> {
    values.get(idx).copied().ok_or(ProtocolError::MissingField {
        field: name,
        line: line_no,
    })
}
