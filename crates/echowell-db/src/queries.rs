use crate::Database;
use crate::models::{NewUser, UserRow};
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use echowell_types::models::Message;
use rusqlite::{Connection, OptionalExtension};
use uuid::Uuid;

/// Upper bound on a single message listing.
pub const MAX_RECENT_MESSAGES: u32 = 100;

impl Database {
    // -- Users --

    /// Insert a user unless the email is already registered.
    ///
    /// Returns `false` when another user owns the email. The unique index on
    /// `email` decides this inside the insert itself, so two concurrent
    /// registrations for one address cannot both succeed.
    pub fn create_user(&self, user: &NewUser<'_>) -> Result<bool> {
        self.with_conn(|conn| {
            let inserted = conn.execute(
                "INSERT INTO users (id, name, email, password, age, college_name, grades)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT(email) DO NOTHING",
                rusqlite::params![
                    user.id,
                    user.name,
                    user.email,
                    user.password_hash,
                    user.age,
                    user.college_name,
                    user.grades,
                ],
            )?;
            Ok(inserted == 1)
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_email(conn, email))
    }

    // -- Messages --

    /// Store a new message with a server-assigned id and timestamp and
    /// return it as it will later be listed.
    pub fn insert_message(&self, text: &str) -> Result<Message> {
        let message = Message {
            id: Uuid::new_v4(),
            text: text.to_string(),
            // Stored precision is microseconds; match it in the return value.
            timestamp: Utc::now().trunc_subsecs(6),
        };

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (id, text, timestamp) VALUES (?1, ?2, ?3)",
                (
                    message.id.to_string(),
                    &message.text,
                    format_timestamp(&message.timestamp),
                ),
            )?;
            Ok(())
        })?;

        Ok(message)
    }

    /// Newest messages first, at most [`MAX_RECENT_MESSAGES`].
    pub fn get_recent_messages(&self, limit: u32) -> Result<Vec<Message>> {
        self.with_conn(|conn| query_recent_messages(conn, limit.min(MAX_RECENT_MESSAGES)))
    }
}

fn query_user_by_email(conn: &Connection, email: &str) -> Result<Option<UserRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, password, age, college_name, grades, created_at
         FROM users WHERE email = ?1",
    )?;

    let row = stmt
        .query_row([email], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                password: row.get(3)?,
                age: row.get(4)?,
                college_name: row.get(5)?,
                grades: row.get(6)?,
                created_at: row.get(7)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_recent_messages(conn: &Connection, limit: u32) -> Result<Vec<Message>> {
    // Fixed-width RFC 3339 text sorts chronologically; seq breaks ties.
    let mut stmt = conn.prepare(
        "SELECT id, text, timestamp FROM messages
         ORDER BY timestamp DESC, seq DESC
         LIMIT ?1",
    )?;

    let rows = stmt
        .query_map([limit], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id, text, timestamp)| {
            Ok(Message {
                id: id.parse().with_context(|| format!("Corrupt message id '{}'", id))?,
                timestamp: parse_timestamp(&timestamp)
                    .with_context(|| format!("Corrupt timestamp '{}' on message '{}'", timestamp, id))?,
                text,
            })
        })
        .collect()
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}
