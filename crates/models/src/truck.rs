use sea_orm::{
    entity::prelude::*, ActiveValue::{NotSet, Set, Unchanged}, DatabaseConnection, QueryFilter, QueryOrder, SqlErr,
    TransactionError, TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const TRUCK_NUMBER_MAX_LEN: usize = 64;
pub const DRIVER_NAME_MAX_LEN: usize = 128;
pub const OPTIONAL_TEXT_MAX_LEN: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "truck")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub truck_number: String,
    pub driver_name: String,
    pub driver_contact: Option<String>,
    pub truck_type: Option<String>,
    pub capacity: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Column values of a row, everything but the id.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Fields {
    pub truck_number: String,
    pub driver_name: String,
    pub driver_contact: Option<String>,
    pub truck_type: Option<String>,
    pub capacity: Option<i32>,
}

pub fn validate_truck_number(n: &str) -> Result<(), errors::ModelError> {
    if n.trim().is_empty() {
        return Err(errors::ModelError::Validation("truck_number required".into()));
    }
    if n.chars().count() > TRUCK_NUMBER_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("truck_number longer than {TRUCK_NUMBER_MAX_LEN}")));
    }
    Ok(())
}

pub fn validate_driver_name(n: &str) -> Result<(), errors::ModelError> {
    if n.trim().is_empty() {
        return Err(errors::ModelError::Validation("driver_name required".into()));
    }
    if n.chars().count() > DRIVER_NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("driver_name longer than {DRIVER_NAME_MAX_LEN}")));
    }
    Ok(())
}

fn validate_optional_text(field: &str, v: Option<&str>) -> Result<(), errors::ModelError> {
    match v {
        Some(s) if s.chars().count() > OPTIONAL_TEXT_MAX_LEN => {
            Err(errors::ModelError::Validation(format!("{field} longer than {OPTIONAL_TEXT_MAX_LEN}")))
        }
        _ => Ok(()),
    }
}

pub fn validate_capacity(c: Option<i32>) -> Result<(), errors::ModelError> {
    if matches!(c, Some(v) if v < 0) {
        return Err(errors::ModelError::Validation("capacity must be >= 0".into()));
    }
    Ok(())
}

pub fn validate(f: &Fields) -> Result<(), errors::ModelError> {
    validate_truck_number(&f.truck_number)?;
    validate_driver_name(&f.driver_name)?;
    validate_optional_text("driver_contact", f.driver_contact.as_deref())?;
    validate_optional_text("truck_type", f.truck_type.as_deref())?;
    validate_capacity(f.capacity)
}

fn db_err(e: DbErr) -> errors::ModelError { errors::ModelError::Db(e.to_string()) }

/// Writes map a unique index hit to `ConstraintViolation`; the index is the final word on duplicates.
fn write_err(e: DbErr) -> errors::ModelError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => errors::ModelError::ConstraintViolation(msg),
        _ => db_err(e),
    }
}

fn txn_err(e: TransactionError<errors::ModelError>) -> errors::ModelError {
    match e {
        TransactionError::Connection(e) => write_err(e),
        TransactionError::Transaction(e) => e,
    }
}

fn duplicate(truck_number: &str) -> errors::ModelError {
    errors::ModelError::ConstraintViolation(format!("truck_number {truck_number} already in use"))
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(db_err)
}

pub async fn find_by_truck_number<C: ConnectionTrait>(db: &C, truck_number: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::TruckNumber.eq(truck_number))
        .one(db)
        .await
        .map_err(db_err)
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find().order_by_asc(Column::Id).all(db).await.map_err(db_err)
}

/// Insert a new row; the database assigns the id.
/// The duplicate check and the insert share one transaction.
pub async fn create(db: &DatabaseConnection, fields: Fields) -> Result<Model, errors::ModelError> {
    validate(&fields)?;
    let number = fields.truck_number.clone();
    let am = ActiveModel {
        id: NotSet,
        truck_number: Set(fields.truck_number),
        driver_name: Set(fields.driver_name),
        driver_contact: Set(fields.driver_contact),
        truck_type: Set(fields.truck_type),
        capacity: Set(fields.capacity),
    };
    db.transaction::<_, Model, errors::ModelError>(|txn| {
        Box::pin(async move {
            if find_by_truck_number(txn, &number).await?.is_some() {
                return Err(duplicate(&number));
            }
            am.insert(txn).await.map_err(write_err)
        })
    })
    .await
    .map_err(txn_err)
}

/// Replace every column of an existing row. Fails with `NotFound` if the row is gone.
pub async fn replace(db: &DatabaseConnection, id: i64, fields: Fields) -> Result<Model, errors::ModelError> {
    validate(&fields)?;
    let number = fields.truck_number.clone();
    let am = ActiveModel {
        id: Unchanged(id),
        truck_number: Set(fields.truck_number),
        driver_name: Set(fields.driver_name),
        driver_contact: Set(fields.driver_contact),
        truck_type: Set(fields.truck_type),
        capacity: Set(fields.capacity),
    };
    db.transaction::<_, Model, errors::ModelError>(|txn| {
        Box::pin(async move {
            if find_by_id(txn, id).await?.is_none() {
                return Err(errors::ModelError::NotFound(format!("truck {id}")));
            }
            if let Some(other) = find_by_truck_number(txn, &number).await? {
                if other.id != id {
                    return Err(duplicate(&number));
                }
            }
            am.update(txn).await.map_err(write_err)
        })
    })
    .await
    .map_err(txn_err)
}

/// Hard delete. Returns `false` when no row had this id.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    Ok(res.rows_affected > 0)
}
