use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "terms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, indexed)]
    pub term: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields of a term about to be created.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewTerm {
    pub term: String,
    pub description: String,
}

impl NewTerm {
    pub fn new(term: impl Into<String>, description: impl Into<String>) -> Self {
        Self { term: term.into(), description: description.into() }
    }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_term(&self.term)?;
        validate_description(&self.description)
    }
}

/// Merge-patch for a stored term: `None` leaves the stored value alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TermPatch {
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TermPatch {
    pub fn is_empty(&self) -> bool {
        self.term.is_none() && self.description.is_none()
    }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if let Some(t) = &self.term {
            validate_term(t)?;
        }
        if let Some(d) = &self.description {
            validate_description(d)?;
        }
        Ok(())
    }

    /// Overwrite only the supplied fields.
    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(t) = self.term {
            am.term = Set(t);
        }
        if let Some(d) = self.description {
            am.description = Set(d);
        }
    }
}

/// Terms are matched exactly, so only emptiness is rejected.
pub fn validate_term(term: &str) -> Result<(), errors::ModelError> {
    if term.is_empty() {
        return Err(errors::ModelError::Validation("term must not be empty".into()));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), errors::ModelError> {
    if description.is_empty() {
        return Err(errors::ModelError::Validation("description must not be empty".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewTerm) -> Result<Model, errors::ModelError> {
    new.validate()?;
    let am = ActiveModel {
        term: Set(new.term),
        description: Set(new.description),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_term<C: ConnectionTrait>(db: &C, term: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::Term.eq(term)).one(db).await?)
}

/// Page through terms in insertion (`id`) order.
pub async fn list<C: ConnectionTrait>(db: &C, offset: u64, limit: u64) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find()
        .order_by_asc(Column::Id)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await?)
}

/// Apply `patch` to an already loaded term and persist it.
pub async fn update<C: ConnectionTrait>(db: &C, existing: Model, patch: TermPatch) -> Result<Model, errors::ModelError> {
    patch.validate()?;
    if patch.is_empty() {
        return Ok(existing);
    }
    let mut am: ActiveModel = existing.into();
    patch.apply(&mut am);
    Ok(am.update(db).await?)
}

/// Hard delete by primary key; returns whether a row was removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
