//! Read access to the persisted fact dataset.

use std::path::Path;

use rusqlite::{params, Connection, OpenFlags, Row};

use crate::error::StoreError;

pub type StoreResult<T> = Result<T, StoreError>;

/// One quizzable keyword/value pair scoped to a topic (class).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fact {
    pub class_name: String,
    pub keyword: String,
    pub value: String,
    pub description: Option<String>,
}

#[cfg(test)]
impl Fact {
    pub fn new(
        class_name: impl Into<String>,
        keyword: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            keyword: keyword.into(),
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    pub name: String,
    pub facts: usize,
}

pub trait FactStore {
    /// Every fact recorded under `topic`, in no particular order.
    fn facts_for_topic(&self, topic: &str) -> StoreResult<Vec<Fact>>;

    fn topics(&self) -> StoreResult<Vec<TopicSummary>>;
}

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens an existing fact database. The file is never created or written.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Err(StoreError::Missing(path.to_path_buf()));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        log::debug!("opened fact database at {}", path.display());
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub(crate) fn seeded(facts: &[Fact]) -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        tests::create_schema(&conn)?;
        for fact in facts {
            tests::insert_fact(&conn, fact)?;
        }
        Ok(Self { conn })
    }
}

impl FactStore for Database {
    fn facts_for_topic(&self, topic: &str) -> StoreResult<Vec<Fact>> {
        let mut stmt = self.conn.prepare(
            "SELECT class_name, keyword, value, description FROM facts WHERE class_name = ?1",
        )?;
        let facts = stmt
            .query_map(params![topic], parse_fact_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("read {} facts for topic {:?}", facts.len(), topic);
        Ok(facts)
    }

    fn topics(&self) -> StoreResult<Vec<TopicSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT class_name, COUNT(*) FROM facts GROUP BY class_name ORDER BY class_name",
        )?;
        let topics = stmt
            .query_map([], |row| {
                Ok(TopicSummary {
                    name: row.get(0)?,
                    facts: row.get::<_, i64>(1)? as usize,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(topics)
    }
}

fn parse_fact_row(row: &Row) -> rusqlite::Result<Fact> {
    Ok(Fact {
        class_name: row.get(0)?,
        keyword: row.get(1)?,
        value: row.get(2)?,
        description: row.get(3)?,
    })
}
