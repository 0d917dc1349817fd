use crate::domain::entity::{Entity, EntityId, EntityUpdate};
use crate::utils::error::{Result, UniversityError};
use crate::utils::validation::validate_positive_id;
use serde::{Deserialize, Serialize};

/// Insertion-ordered list of one entity type with id-checked CRUD operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Appends without any validation. Used when loading files and for
    /// seeding collections that are not managed through `create`.
    pub fn push(&mut self, entity: T) {
        self.items.push(entity);
    }
}

impl<T: Entity> Collection<T> {
    fn position(&self, id: EntityId) -> Option<usize> {
        self.items.iter().position(|entity| entity.id() == id)
    }

    fn not_found(id: EntityId) -> UniversityError {
        UniversityError::NotFound { entity: T::KIND, id }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.position(id).is_some()
    }

    /// Runs `Entity::validate` on every entity, including pushed ones.
    pub fn validate_all(&self) -> Result<()> {
        self.items.iter().try_for_each(Entity::validate)
    }

    pub fn create(&mut self, entity: T) -> Result<&T> {
        let id = entity.id();
        validate_positive_id(T::KIND, id)?;
        entity.validate()?;
        if self.contains(id) {
            return Err(UniversityError::DuplicateId { entity: T::KIND, id });
        }

        let index = self.items.len();
        self.items.push(entity);
        tracing::debug!("{} {} created", T::KIND, id);
        Ok(&self.items[index])
    }

    pub fn find(&self, id: EntityId) -> Result<&T> {
        validate_positive_id(T::KIND, id)?;
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        Ok(&self.items[index])
    }

    pub fn find_mut(&mut self, id: EntityId) -> Result<&mut T> {
        validate_positive_id(T::KIND, id)?;
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        Ok(&mut self.items[index])
    }

    /// Applies `update` to the entity with `id`. The result is checked before it
    /// replaces the stored entity, so a rejected update changes nothing.
    pub fn update(&mut self, id: EntityId, update: T::Update) -> Result<&T> {
        validate_positive_id(T::KIND, id)?;
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;

        if let Some(new_id) = update.new_id() {
            validate_positive_id(T::KIND, new_id)?;
            let taken = self
                .items
                .iter()
                .enumerate()
                .any(|(i, entity)| i != index && entity.id() == new_id);
            if taken {
                return Err(UniversityError::DuplicateId {
                    entity: T::KIND,
                    id: new_id,
                });
            }
        }

        let mut updated = self.items[index].clone();
        updated.apply(update);
        updated.validate()?;
        self.items[index] = updated;
        tracing::debug!("{} {} updated", T::KIND, id);
        Ok(&self.items[index])
    }

    /// Removes the first entity with `id`, keeping the order of the others.
    pub fn delete(&mut self, id: EntityId) -> Result<T> {
        validate_positive_id(T::KIND, id)?;
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        let removed = self.items.remove(index);
        tracing::debug!("{} {} deleted", T::KIND, id);
        Ok(removed)
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
