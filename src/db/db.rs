use super::migrations::init_with_migrations;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "todox.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens a database file, applying pending migrations.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens a connection without touching the schema.
    pub fn open_without_migrations(path: &Path) -> Result<Connection> {
        Ok(Connection::open(path)?)
    }
}
