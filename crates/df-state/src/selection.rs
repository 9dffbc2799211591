use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    Department,
    Pipeline,
    Stage,
    Agent,
    Asset,
    Deal,
}

/// At most one selected id per entity kind, for master-detail navigation.
///
/// Kinds are independent: selecting a pipeline leaves the selected
/// department alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    department: Option<String>,
    pipeline: Option<String>,
    stage: Option<String>,
    agent: Option<String>,
    asset: Option<String>,
    deal: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: SelectionKind) -> &Option<String> {
        match kind {
            SelectionKind::Department => &self.department,
            SelectionKind::Pipeline => &self.pipeline,
            SelectionKind::Stage => &self.stage,
            SelectionKind::Agent => &self.agent,
            SelectionKind::Asset => &self.asset,
            SelectionKind::Deal => &self.deal,
        }
    }

    fn slot_mut(&mut self, kind: SelectionKind) -> &mut Option<String> {
        match kind {
            SelectionKind::Department => &mut self.department,
            SelectionKind::Pipeline => &mut self.pipeline,
            SelectionKind::Stage => &mut self.stage,
            SelectionKind::Agent => &mut self.agent,
            SelectionKind::Asset => &mut self.asset,
            SelectionKind::Deal => &mut self.deal,
        }
    }

    /// Select `id`, returning the previously selected id of that kind.
    pub fn select(&mut self, kind: SelectionKind, id: impl Into<String>) -> Option<String> {
        let id = id.into();
        tracing::debug!(?kind, id = %id, "selected");
        self.slot_mut(kind).replace(id)
    }

    pub fn get(&self, kind: SelectionKind) -> Option<&str> {
        self.slot(kind).as_deref()
    }

    pub fn is_selected(&self, kind: SelectionKind, id: &str) -> bool {
        self.get(kind) == Some(id)
    }

    pub fn clear(&mut self, kind: SelectionKind) -> Option<String> {
        self.slot_mut(kind).take()
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn department(&self) -> Option<&str> {
        self.get(SelectionKind::Department)
    }

    pub fn pipeline(&self) -> Option<&str> {
        self.get(SelectionKind::Pipeline)
    }

    pub fn stage(&self) -> Option<&str> {
        self.get(SelectionKind::Stage)
    }

    pub fn agent(&self) -> Option<&str> {
        self.get(SelectionKind::Agent)
    }

    pub fn asset(&self) -> Option<&str> {
        self.get(SelectionKind::Asset)
    }

    pub fn deal(&self) -> Option<&str> {
        self.get(SelectionKind::Deal)
    }
}
