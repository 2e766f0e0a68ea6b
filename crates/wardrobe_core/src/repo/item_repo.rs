//! Wardrobe item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over canonical `wardrobe_items` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `WardrobeItem::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - `uuid` and `date_added` are never touched by UPDATE statements.

use crate::db::DbError;
use crate::model::item::{ItemAction, ItemId, ItemStatus, ItemValidationError, WardrobeItem};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ITEM_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    category,
    style,
    description,
    colors,
    image_paths,
    status,
    last_action,
    last_action_date,
    last_used,
    date_added
FROM wardrobe_items";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for item persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ItemValidationError),
    Db(DbError),
    NotFound(ItemId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "wardrobe item not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted item data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ItemValidationError> for RepoError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing items.
#[derive(Debug, Clone, Default)]
pub struct ItemListQuery {
    pub status: Option<ItemStatus>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for wardrobe item CRUD operations.
///
/// Each operation is atomic with respect to a single item; no cross-item
/// transactions are offered.
pub trait ItemRepository {
    fn create_item(&self, item: &WardrobeItem) -> RepoResult<ItemId>;
    fn update_item(&self, item: &WardrobeItem) -> RepoResult<()>;
    fn get_item(&self, id: ItemId) -> RepoResult<Option<WardrobeItem>>;
    fn list_items(&self, query: &ItemListQuery) -> RepoResult<Vec<WardrobeItem>>;
    fn delete_item(&self, id: ItemId) -> RepoResult<()>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, item: &WardrobeItem) -> RepoResult<ItemId> {
        item.validate()?;

        self.conn.execute(
            "INSERT INTO wardrobe_items (
                uuid,
                name,
                category,
                style,
                description,
                colors,
                image_paths,
                status,
                last_action,
                last_action_date,
                last_used,
                date_added
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12);",
            params![
                item.id.to_string(),
                item.name.as_str(),
                item.category.as_str(),
                item.style.as_str(),
                item.description.as_str(),
                encode_string_list(&item.colors, "colors")?,
                encode_string_list(&item.image_paths, "image_paths")?,
                status_to_db(item.status),
                item.last_action.map(action_to_db),
                item.last_action_date,
                item.last_used,
                item.date_added,
            ],
        )?;

        Ok(item.id)
    }

    fn update_item(&self, item: &WardrobeItem) -> RepoResult<()> {
        item.validate()?;

        let changed = self.conn.execute(
            "UPDATE wardrobe_items
             SET
                name = ?1,
                category = ?2,
                style = ?3,
                description = ?4,
                colors = ?5,
                image_paths = ?6,
                status = ?7,
                last_action = ?8,
                last_action_date = ?9,
                last_used = ?10,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?11;",
            params![
                item.name.as_str(),
                item.category.as_str(),
                item.style.as_str(),
                item.description.as_str(),
                encode_string_list(&item.colors, "colors")?,
                encode_string_list(&item.image_paths, "image_paths")?,
                status_to_db(item.status),
                item.last_action.map(action_to_db),
                item.last_action_date,
                item.last_used,
                item.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(item.id));
        }

        Ok(())
    }

    fn get_item(&self, id: ItemId) -> RepoResult<Option<WardrobeItem>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_item_row(row)?));
        }

        Ok(None)
    }

    fn list_items(&self, query: &ItemListQuery) -> RepoResult<Vec<WardrobeItem>> {
        let mut sql = format!("{ITEM_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(status) = query.status {
            sql.push_str(" AND status = ?");
            bind_values.push(Value::Text(status_to_db(status).to_string()));
        }

        sql.push_str(" ORDER BY date_added ASC, uuid ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }

    fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM wardrobe_items WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<WardrobeItem> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in wardrobe_items.uuid"))
    })?;

    let status_text: String = row.get("status")?;
    let status = parse_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid status `{status_text}` in wardrobe_items.status"
        ))
    })?;

    let last_action = match row.get::<_, Option<String>>("last_action")? {
        Some(value) => Some(parse_action(&value).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid action `{value}` in wardrobe_items.last_action"
            ))
        })?),
        None => None,
    };

    let colors_raw: String = row.get("colors")?;
    let image_paths_raw: String = row.get("image_paths")?;

    let item = WardrobeItem {
        id,
        name: row.get("name")?,
        category: row.get("category")?,
        style: row.get("style")?,
        description: row.get("description")?,
        colors: decode_string_list(&colors_raw, "colors")?,
        image_paths: decode_string_list(&image_paths_raw, "image_paths")?,
        date_added: row.get("date_added")?,
        status,
        last_action,
        last_action_date: row.get("last_action_date")?,
        last_used: row.get("last_used")?,
    };
    item.validate()?;
    Ok(item)
}

fn encode_string_list(values: &[String], column: &str) -> RepoResult<String> {
    serde_json::to_string(values)
        .map_err(|err| RepoError::InvalidData(format!("failed to encode {column}: {err}")))
}

fn decode_string_list(raw: &str, column: &str) -> RepoResult<Vec<String>> {
    serde_json::from_str(raw).map_err(|err| {
        RepoError::InvalidData(format!("invalid {column} value `{raw}`: {err}"))
    })
}

fn status_to_db(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Available => "available",
        ItemStatus::Unavailable => "unavailable",
        ItemStatus::RarelyUsed => "rarely_used",
    }
}

fn parse_status(value: &str) -> Option<ItemStatus> {
    match value {
        "available" => Some(ItemStatus::Available),
        "unavailable" => Some(ItemStatus::Unavailable),
        "rarely_used" => Some(ItemStatus::RarelyUsed),
        _ => None,
    }
}

fn action_to_db(action: ItemAction) -> &'static str {
    match action {
        ItemAction::Use => "use",
        ItemAction::Laundry => "laundry",
        ItemAction::Repair => "repair",
        ItemAction::Available => "available",
    }
}

fn parse_action(value: &str) -> Option<ItemAction> {
    match value {
        "use" => Some(ItemAction::Use),
        "laundry" => Some(ItemAction::Laundry),
        "repair" => Some(ItemAction::Repair),
        "available" => Some(ItemAction::Available),
        _ => None,
    }
}
