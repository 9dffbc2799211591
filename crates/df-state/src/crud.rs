use std::marker::PhantomData;

use df_core::config::BoardConfig;
use df_core::entity::{new_id, Entity};
use df_core::repository::Repository;
use tracing::{debug, info, warn};

use crate::notifications::Notifier;
use crate::StateError;

/// Create/update/delete state for one entity collection, plus the
/// open/closed state of the form that edits it.
///
/// `add` and `edit` open the same form; `save` decides between update and
/// create based on whether an entity is selected.
pub struct CrudState<E, R, N>
where
    E: Entity,
    R: Repository<E>,
    N: Notifier,
{
    repo: R,
    notifier: N,
    default_parent: String,
    selected: Option<String>,
    form_open: bool,
    _entity: PhantomData<E>,
}

impl<E, R, N> CrudState<E, R, N>
where
    E: Entity,
    R: Repository<E>,
    N: Notifier,
{
    /// `default_parent` is the foreign key given to entities created
    /// without one (a stage id for deals and agents, a deal id for assets).
    pub fn new(repo: R, notifier: N, default_parent: impl Into<String>) -> Self {
        Self {
            repo,
            notifier,
            default_parent: default_parent.into(),
            selected: None,
            form_open: false,
            _entity: PhantomData,
        }
    }

    /// Stage-parented collections (deals, agents): new entities land in
    /// `board.default_stage_id`.
    pub fn from_config(repo: R, notifier: N, board: &BoardConfig) -> Self {
        Self::new(repo, notifier, board.default_stage_id.clone())
    }

    pub fn items(&self) -> Vec<E> {
        self.repo.list()
    }

    pub fn get(&self, id: &str) -> Option<E> {
        self.repo.get(id)
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// The entity currently loaded in the form, if any.
    pub fn selected(&self) -> Option<E> {
        self.selected.as_deref().and_then(|id| self.repo.get(id))
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Open the form for a new entity.
    pub fn add(&mut self) {
        debug!(kind = E::KIND, "opening create form");
        self.selected = None;
        self.form_open = true;
    }

    /// Open the form pre-populated with an existing entity.
    pub fn edit(&mut self, id: &str) -> Result<E, StateError> {
        let entity = self.repo.get(id).ok_or_else(|| {
            warn!(kind = E::KIND, id, "edit requested for unknown entity");
            StateError::NotFound {
                kind: E::KIND,
                id: id.to_string(),
            }
        })?;
        debug!(kind = E::KIND, id, "opening edit form");
        self.selected = Some(id.to_string());
        self.form_open = true;
        Ok(entity)
    }

    /// Close the form without saving.
    pub fn close(&mut self) {
        self.selected = None;
        self.form_open = false;
    }

    /// Update the selected entity, or create a new one when nothing is
    /// selected. On error the form stays open with its selection.
    pub fn save(&mut self, update: E::Update) -> Result<E, StateError> {
        let saved = match self.selected.as_deref() {
            Some(id) => {
                let mut entity = self.repo.get(id).ok_or_else(|| StateError::NotFound {
                    kind: E::KIND,
                    id: id.to_string(),
                })?;
                entity.apply(update)?;
                self.repo.replace(entity.clone())?;
                info!(kind = E::KIND, id = entity.id(), "entity updated");
                self.notifier.success(
                    &format!("{} updated", E::KIND),
                    &format!("{} was updated successfully.", entity.display_name()),
                );
                entity
            }
            None => {
                let entity = E::create(new_id(), &self.default_parent, update)?;
                self.repo.insert(entity.clone())?;
                info!(kind = E::KIND, id = entity.id(), "entity created");
                self.notifier.success(
                    &format!("{} created", E::KIND),
                    &format!("{} was created successfully.", entity.display_name()),
                );
                entity
            }
        };
        self.close();
        Ok(saved)
    }

    /// Remove the entity with `id`. Absent ids are a silent no-op.
    pub fn delete(&mut self, id: &str) -> Option<E> {
        let Some(removed) = self.repo.remove(id) else {
            debug!(kind = E::KIND, id, "delete ignored, entity not present");
            return None;
        };
        if self.selected.as_deref() == Some(id) {
            self.close();
        }
        info!(kind = E::KIND, id, "entity deleted");
        self.notifier.success(
            &format!("{} deleted", E::KIND),
            &format!("{} was removed.", removed.display_name()),
        );
        Some(removed)
    }
}
