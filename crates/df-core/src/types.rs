use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{clearable, optional_parent, touched, DomainError, Entity};

// ---------------------------------------------------------------------------
// Department
// ---------------------------------------------------------------------------

pub const DEFAULT_DEPARTMENT_COLOR: &str = "#6366f1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub title: String,
    pub description: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl Entity for Department {
    type Update = DepartmentUpdate;
    const KIND: &'static str = "Department";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn apply(&mut self, update: DepartmentUpdate) -> Result<(), DomainError> {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        Ok(())
    }

    // Departments are top-level; the parent id is ignored.
    fn create(id: String, _parent_id: &str, update: DepartmentUpdate) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            title: update.title.unwrap_or_default(),
            description: update.description.unwrap_or_default(),
            color: update
                .color
                .unwrap_or_else(|| DEFAULT_DEPARTMENT_COLOR.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// Pipeline / Stage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: String,
    pub department_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub stages: Vec<Stage>,
}

impl Pipeline {
    /// Stages in display sequence. Ties keep their stored order.
    pub fn ordered_stages(&self) -> Vec<&Stage> {
        let mut stages: Vec<&Stage> = self.stages.iter().collect();
        stages.sort_by_key(|s| s.order);
        stages
    }

    pub fn stage(&self, stage_id: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id == stage_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineUpdate {
    pub department_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Entity for Pipeline {
    type Update = PipelineUpdate;
    const KIND: &'static str = "Pipeline";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn apply(&mut self, update: PipelineUpdate) -> Result<(), DomainError> {
        if let Some(department_id) = update.department_id {
            self.department_id = department_id;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    fn create(id: String, parent_id: &str, update: PipelineUpdate) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            department_id: update
                .department_id
                .unwrap_or_else(|| parent_id.to_string()),
            title: update.title.unwrap_or_default(),
            description: update.description.unwrap_or_default(),
            stages: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    pub pipeline_id: String,
    pub title: String,
    pub description: String,
    pub order: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub order: Option<u32>,
}

impl Entity for Stage {
    type Update = StageUpdate;
    const KIND: &'static str = "Stage";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn apply(&mut self, update: StageUpdate) -> Result<(), DomainError> {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(order) = update.order {
            self.order = order;
        }
        Ok(())
    }

    fn create(id: String, parent_id: &str, update: StageUpdate) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            pipeline_id: parent_id.to_string(),
            title: update.title.unwrap_or_default(),
            description: update.description.unwrap_or_default(),
            order: update.order.unwrap_or_default(),
        })
    }
}

// ---------------------------------------------------------------------------
// Deal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStatus {
    #[default]
    Open,
    InProgress,
    Won,
    Lost,
}

impl DealStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealStatus::Open => "open",
            DealStatus::InProgress => "in_progress",
            DealStatus::Won => "won",
            DealStatus::Lost => "lost",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DealStatus::Open => "Open",
            DealStatus::InProgress => "In progress",
            DealStatus::Won => "Won",
            DealStatus::Lost => "Lost",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealType {
    #[default]
    NewBusiness,
    Renewal,
    Upsell,
}

impl DealType {
    pub fn label(&self) -> &'static str {
        match self {
            DealType::NewBusiness => "New business",
            DealType::Renewal => "Renewal",
            DealType::Upsell => "Upsell",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub stage_id: String,
    pub title: String,
    pub description: String,
    pub status: DealStatus,
    #[serde(rename = "type")]
    pub kind: DealType,
    pub amount: Option<f64>,
    pub customer_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deal {
    pub fn new(stage_id: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: crate::entity::new_id(),
            stage_id: stage_id.into(),
            title: title.into(),
            description: String::new(),
            status: DealStatus::default(),
            kind: DealType::default(),
            amount: None,
            customer_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reassign the deal to another stage.
    pub fn move_to(&mut self, stage_id: impl Into<String>) {
        self.stage_id = stage_id.into();
        self.updated_at = touched(self.updated_at);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealUpdate {
    pub stage_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<DealStatus>,
    pub kind: Option<DealType>,
    /// `Some(None)` clears the amount.
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub amount: Option<Option<f64>>,
    /// `Some(None)` detaches the customer.
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Option<String>>,
}

impl Entity for Deal {
    type Update = DealUpdate;
    const KIND: &'static str = "Deal";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn apply(&mut self, update: DealUpdate) -> Result<(), DomainError> {
        if let Some(stage_id) = update.stage_id {
            self.stage_id = stage_id;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(customer_id) = update.customer_id {
            self.customer_id = customer_id;
        }
        self.updated_at = touched(self.updated_at);
        Ok(())
    }

    fn create(id: String, parent_id: &str, update: DealUpdate) -> Result<Self, DomainError> {
        let now = Utc::now();
        Ok(Self {
            id,
            stage_id: update.stage_id.unwrap_or_else(|| parent_id.to_string()),
            title: update.title.unwrap_or_default(),
            description: update.description.unwrap_or_default(),
            status: update.status.unwrap_or_default(),
            kind: update.kind.unwrap_or_default(),
            amount: update.amount.flatten(),
            customer_id: update.customer_id.flatten(),
            created_at: now,
            updated_at: now,
        })
    }
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    #[default]
    Open,
    Processing,
    Completed,
    Cancelled,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Open => "open",
            AssetStatus::Processing => "processing",
            AssetStatus::Completed => "completed",
            AssetStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Open => "Open",
            AssetStatus::Processing => "Processing",
            AssetStatus::Completed => "Completed",
            AssetStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    #[default]
    Document,
    Contract,
    Invoice,
    Proposal,
    Receipt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub deal_id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: AssetType,
    pub status: AssetStatus,
    pub amount: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetUpdate {
    /// `Some(None)` detaches the asset from its deal.
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<Option<String>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<AssetType>,
    pub status: Option<AssetStatus>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub amount: Option<Option<f64>>,
}

impl Entity for Asset {
    type Update = AssetUpdate;
    const KIND: &'static str = "Asset";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn apply(&mut self, update: AssetUpdate) -> Result<(), DomainError> {
        if let Some(deal_id) = update.deal_id {
            self.deal_id = deal_id;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        Ok(())
    }

    fn create(id: String, parent_id: &str, update: AssetUpdate) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            deal_id: update.deal_id.unwrap_or_else(|| optional_parent(parent_id)),
            title: update.title.unwrap_or_default(),
            description: update.description.unwrap_or_default(),
            kind: update.kind.unwrap_or_default(),
            status: update.status.unwrap_or_default(),
            amount: update.amount.flatten(),
            created_at: Utc::now(),
        })
    }
}

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    #[default]
    Active,
    Inactive,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgentStatus::Active => "Active",
            AgentStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub name: String,
    pub role: String,
    pub agent_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEnvironment {
    pub department_title: String,
}

/// An AI-assistant configuration attached to a stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub stage_id: String,
    pub profile: AgentProfile,
    pub work_environment: WorkEnvironment,
    pub status: AgentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfileUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub agent_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentUpdate {
    pub stage_id: Option<String>,
    pub profile: Option<AgentProfileUpdate>,
    pub department_title: Option<String>,
    pub status: Option<AgentStatus>,
}

impl Entity for Agent {
    type Update = AgentUpdate;
    const KIND: &'static str = "Agent";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.profile.name
    }

    fn apply(&mut self, update: AgentUpdate) -> Result<(), DomainError> {
        if let Some(stage_id) = update.stage_id {
            self.stage_id = stage_id;
        }
        if let Some(profile) = update.profile {
            if let Some(name) = profile.name {
                self.profile.name = name;
            }
            if let Some(role) = profile.role {
                self.profile.role = role;
            }
            if let Some(agent_name) = profile.agent_name {
                self.profile.agent_name = agent_name;
            }
        }
        if let Some(department_title) = update.department_title {
            self.work_environment.department_title = department_title;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_at = touched(self.updated_at);
        Ok(())
    }

    fn create(id: String, parent_id: &str, update: AgentUpdate) -> Result<Self, DomainError> {
        let now = Utc::now();
        let profile = update.profile.unwrap_or_default();
        Ok(Self {
            id,
            stage_id: update.stage_id.unwrap_or_else(|| parent_id.to_string()),
            profile: AgentProfile {
                name: profile.name.unwrap_or_default(),
                role: profile.role.unwrap_or_default(),
                agent_name: profile.agent_name.unwrap_or_default(),
            },
            work_environment: WorkEnvironment {
                department_title: update.department_title.unwrap_or_default(),
            },
            status: update.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }
}
