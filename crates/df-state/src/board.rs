use df_core::config::BoardConfig;
use df_core::repository::Repository;
use df_core::types::{Deal, Pipeline, Stage};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::notifications::Notifier;
use crate::StateError;

/// A position inside a board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropLocation {
    pub container_id: String,
    pub index: usize,
}

impl DropLocation {
    pub fn new(container_id: impl Into<String>, index: usize) -> Self {
        Self {
            container_id: container_id.into(),
            index,
        }
    }
}

/// End of a drag gesture. `destination` is `None` when the card was
/// released outside any column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEvent {
    pub item_id: String,
    pub source: DropLocation,
    pub destination: Option<DropLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DropOutcome {
    /// Released outside any column.
    Cancelled,
    /// Dropped back where it started.
    Unchanged,
    /// Same column, different slot. Deals carry no intra-stage order, so
    /// nothing is stored.
    ReorderIgnored,
    Moved {
        deal_id: String,
        from_stage: String,
        to_stage: String,
        stage_title: String,
    },
}

/// One kanban column: a stage and the deals currently in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardColumn {
    pub stage: Stage,
    pub deals: Vec<Deal>,
}

/// Kanban board for the deals of one pipeline.
pub struct DealBoard<R, N>
where
    R: Repository<Deal>,
    N: Notifier,
{
    deals: R,
    stages: Vec<Stage>,
    notifier: N,
    fallback_label: String,
}

impl<R, N> DealBoard<R, N>
where
    R: Repository<Deal>,
    N: Notifier,
{
    pub fn new(deals: R, stages: Vec<Stage>, notifier: N, config: &BoardConfig) -> Self {
        let mut stages = stages;
        stages.sort_by_key(|s| s.order);
        Self {
            deals,
            stages,
            notifier,
            fallback_label: config.fallback_stage_label.clone(),
        }
    }

    pub fn for_pipeline(pipeline: &Pipeline, deals: R, notifier: N, config: &BoardConfig) -> Self {
        Self::new(deals, pipeline.stages.clone(), notifier, config)
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn stage_title(&self, stage_id: &str) -> Option<&str> {
        self.stages
            .iter()
            .find(|s| s.id == stage_id)
            .map(|s| s.title.as_str())
    }

    pub fn deals(&self) -> Vec<Deal> {
        self.deals.list()
    }

    pub fn deal(&self, id: &str) -> Option<Deal> {
        self.deals.get(id)
    }

    /// Stages in display order, each with its deals in stored order.
    pub fn columns(&self) -> Vec<BoardColumn> {
        let deals = self.deals.list();
        self.stages
            .iter()
            .map(|stage| BoardColumn {
                stage: stage.clone(),
                deals: deals
                    .iter()
                    .filter(|d| d.stage_id == stage.id)
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    pub fn handle_drop(&mut self, event: &DropEvent) -> Result<DropOutcome, StateError> {
        let Some(destination) = &event.destination else {
            debug!(deal_id = %event.item_id, "drag cancelled");
            return Ok(DropOutcome::Cancelled);
        };

        if destination.container_id == event.source.container_id {
            if destination.index == event.source.index {
                return Ok(DropOutcome::Unchanged);
            }
            debug!(deal_id = %event.item_id, stage_id = %destination.container_id, "reorder within stage ignored");
            return Ok(DropOutcome::ReorderIgnored);
        }

        let mut deal = self.deals.get(&event.item_id).ok_or_else(|| {
            warn!(deal_id = %event.item_id, "dropped deal not found");
            StateError::NotFound {
                kind: "Deal",
                id: event.item_id.clone(),
            }
        })?;

        let from_stage = deal.stage_id.clone();
        deal.move_to(destination.container_id.clone());
        self.deals.replace(deal)?;

        let stage_title = self
            .stage_title(&destination.container_id)
            .map(str::to_string)
            .unwrap_or_else(|| self.fallback_label.clone());

        info!(
            deal_id = %event.item_id,
            from = %from_stage,
            to = %destination.container_id,
            "deal moved"
        );
        self.notifier
            .success("Deal moved", &format!("Deal moved to {stage_title}."));

        Ok(DropOutcome::Moved {
            deal_id: event.item_id.clone(),
            from_stage,
            to_stage: destination.container_id.clone(),
            stage_title,
        })
    }
}
