//! Reference checks across the workflow structure.
//!
//! Nothing here rejects data; callers get a list of dangling references and
//! decide what to do with it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::entity::Entity;
use crate::types::{Agent, Asset, Deal, Department, Pipeline};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum IntegrityIssue {
    /// Pipeline points at a department that does not exist.
    MissingDepartment {
        pipeline_id: String,
        department_id: String,
    },
    /// Stage is nested under a pipeline other than the one it names.
    StagePipelineMismatch {
        stage_id: String,
        pipeline_id: String,
        declared_pipeline_id: String,
    },
    /// Deal points at a stage that does not exist.
    MissingStage { deal_id: String, stage_id: String },
    /// Deal names a customer that does not exist.
    MissingCustomer { deal_id: String, customer_id: String },
    /// Agent is assigned to a stage that does not exist.
    AgentMissingStage { agent_id: String, stage_id: String },
    /// Asset is attached to a deal that does not exist.
    MissingDeal { asset_id: String, deal_id: String },
    /// Person belongs to an id that is not an organization.
    MissingOrganization {
        person_id: String,
        organization_id: String,
    },
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrityIssue::MissingDepartment {
                pipeline_id,
                department_id,
            } => write!(f, "pipeline {pipeline_id} references missing department {department_id}"),
            IntegrityIssue::StagePipelineMismatch {
                stage_id,
                pipeline_id,
                declared_pipeline_id,
            } => write!(
                f,
                "stage {stage_id} lives in pipeline {pipeline_id} but declares {declared_pipeline_id}"
            ),
            IntegrityIssue::MissingStage { deal_id, stage_id } => {
                write!(f, "deal {deal_id} references missing stage {stage_id}")
            }
            IntegrityIssue::MissingCustomer { deal_id, customer_id } => {
                write!(f, "deal {deal_id} references missing customer {customer_id}")
            }
            IntegrityIssue::AgentMissingStage { agent_id, stage_id } => {
                write!(f, "agent {agent_id} references missing stage {stage_id}")
            }
            IntegrityIssue::MissingDeal { asset_id, deal_id } => {
                write!(f, "asset {asset_id} references missing deal {deal_id}")
            }
            IntegrityIssue::MissingOrganization {
                person_id,
                organization_id,
            } => write!(f, "person {person_id} references missing organization {organization_id}"),
        }
    }
}

/// Borrowed view over every collection of a workspace.
#[derive(Debug, Clone, Copy)]
pub struct Collections<'a> {
    pub departments: &'a [Department],
    pub pipelines: &'a [Pipeline],
    pub deals: &'a [Deal],
    pub agents: &'a [Agent],
    pub assets: &'a [Asset],
    pub customers: &'a [Customer],
}

/// Structural checks only: pipeline to department, stage to pipeline and
/// deal to stage.
pub fn check(departments: &[Department], pipelines: &[Pipeline], deals: &[Deal]) -> Vec<IntegrityIssue> {
    let department_ids: HashSet<&str> = departments.iter().map(|d| d.id.as_str()).collect();
    let mut stage_ids: HashSet<&str> = HashSet::new();
    let mut issues = Vec::new();

    for pipeline in pipelines {
        if !department_ids.contains(pipeline.department_id.as_str()) {
            issues.push(IntegrityIssue::MissingDepartment {
                pipeline_id: pipeline.id.clone(),
                department_id: pipeline.department_id.clone(),
            });
        }
        for stage in &pipeline.stages {
            stage_ids.insert(stage.id.as_str());
            if stage.pipeline_id != pipeline.id {
                issues.push(IntegrityIssue::StagePipelineMismatch {
                    stage_id: stage.id.clone(),
                    pipeline_id: pipeline.id.clone(),
                    declared_pipeline_id: stage.pipeline_id.clone(),
                });
            }
        }
    }

    for deal in deals {
        if !stage_ids.contains(deal.stage_id.as_str()) {
            issues.push(IntegrityIssue::MissingStage {
                deal_id: deal.id.clone(),
                stage_id: deal.stage_id.clone(),
            });
        }
    }

    issues
}

/// Everything `check` reports, followed by the cross-collection links:
/// deal to customer, agent to stage, asset to deal and person to
/// organization. Unset optional links are never reported.
pub fn check_all(collections: &Collections<'_>) -> Vec<IntegrityIssue> {
    let mut issues = check(collections.departments, collections.pipelines, collections.deals);

    let stage_ids: HashSet<&str> = collections
        .pipelines
        .iter()
        .flat_map(|p| p.stages.iter().map(|s| s.id.as_str()))
        .collect();
    let deal_ids: HashSet<&str> = collections.deals.iter().map(|d| d.id.as_str()).collect();
    let customer_ids: HashSet<&str> = collections.customers.iter().map(|c| c.id()).collect();
    let organization_ids: HashSet<&str> = collections
        .customers
        .iter()
        .filter_map(Customer::as_organization)
        .map(|o| o.id.as_str())
        .collect();

    for deal in collections.deals {
        if let Some(customer_id) = deal.customer_id.as_deref() {
            if !customer_ids.contains(customer_id) {
                issues.push(IntegrityIssue::MissingCustomer {
                    deal_id: deal.id.clone(),
                    customer_id: customer_id.to_string(),
                });
            }
        }
    }

    for agent in collections.agents {
        if !stage_ids.contains(agent.stage_id.as_str()) {
            issues.push(IntegrityIssue::AgentMissingStage {
                agent_id: agent.id.clone(),
                stage_id: agent.stage_id.clone(),
            });
        }
    }

    for asset in collections.assets {
        if let Some(deal_id) = asset.deal_id.as_deref() {
            if !deal_ids.contains(deal_id) {
                issues.push(IntegrityIssue::MissingDeal {
                    asset_id: asset.id.clone(),
                    deal_id: deal_id.to_string(),
                });
            }
        }
    }

    for person in collections.customers.iter().filter_map(Customer::as_person) {
        if let Some(organization_id) = person.organization_id.as_deref() {
            if !organization_ids.contains(organization_id) {
                issues.push(IntegrityIssue::MissingOrganization {
                    person_id: person.id.clone(),
                    organization_id: organization_id.to_string(),
                });
            }
        }
    }

    issues
}
