use std::collections::HashSet;

use df_core::customer::{employees_of, Customer};
use df_core::entity::Entity;
use df_core::integrity::{self, Collections, IntegrityIssue};
use df_core::mock_data::{MockWorkflowData, WorkflowSource};
use df_core::types::{Asset, AssetUpdate, Deal, Pipeline};

#[test]
fn mock_data_is_stable_between_calls() {
    let data = MockWorkflowData;
    assert_eq!(data.departments(), data.departments());
    assert_eq!(data.pipelines(), data.pipelines());
    assert_eq!(data.stages(), data.stages());
    assert_eq!(data.departments().len(), 3);
    assert_eq!(data.pipelines().len(), 3);
    assert_eq!(data.stages().len(), 11);
}

#[test]
fn mock_ids_are_unique() {
    let data = MockWorkflowData;
    let stage_ids: HashSet<String> = data.stages().into_iter().map(|s| s.id).collect();
    assert_eq!(stage_ids.len(), data.stages().len());
    let dept_ids: HashSet<String> = data.departments().into_iter().map(|d| d.id).collect();
    assert_eq!(dept_ids.len(), 3);
}

#[test]
fn mock_data_has_no_dangling_references() {
    let data = MockWorkflowData;
    let issues = integrity::check(&data.departments(), &data.pipelines(), &data.deals());
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");

    let (departments, pipelines, deals) = (data.departments(), data.pipelines(), data.deals());
    let (agents, assets, customers) = (data.agents(), data.assets(), data.customers());
    let all = integrity::check_all(&Collections {
        departments: &departments,
        pipelines: &pipelines,
        deals: &deals,
        agents: &agents,
        assets: &assets,
        customers: &customers,
    });
    assert!(all.is_empty(), "unexpected issues: {all:?}");
}

#[test]
fn cross_collection_links_are_checked() {
    let data = MockWorkflowData;
    let (departments, pipelines) = (data.departments(), data.pipelines());

    let mut deals = data.deals();
    deals[0].customer_id = Some("org-ghost".into());

    let mut agents = data.agents();
    let mut stray = agents[0].clone();
    stray.id = "agent-stray".into();
    stray.stage_id = "stage-ghost".into();
    agents.push(stray);

    let mut assets = data.assets();
    assets.push(
        Asset::create("asset-stray".into(), "deal-ghost", AssetUpdate::default()).expect("create"),
    );

    // A person pointing at another person is not an employee of anything.
    let mut customers = data.customers();
    if let Some(Customer::Person(p)) = customers.iter_mut().find(|c| c.id() == "person-marina") {
        p.organization_id = Some("person-joao".into());
    }

    let issues = integrity::check_all(&Collections {
        departments: &departments,
        pipelines: &pipelines,
        deals: &deals,
        agents: &agents,
        assets: &assets,
        customers: &customers,
    });
    assert_eq!(issues.len(), 4, "issues: {issues:?}");
    assert!(matches!(&issues[0], IntegrityIssue::MissingCustomer { customer_id, .. } if customer_id == "org-ghost"));
    assert!(matches!(&issues[1], IntegrityIssue::AgentMissingStage { agent_id, .. } if agent_id == "agent-stray"));
    assert!(matches!(&issues[2], IntegrityIssue::MissingDeal { deal_id, .. } if deal_id == "deal-ghost"));
    assert!(matches!(
        &issues[3],
        IntegrityIssue::MissingOrganization { person_id, .. } if person_id == "person-marina"
    ));
    assert!(issues[3].to_string().contains("person-joao"));
}

#[test]
fn integrity_reports_every_kind_of_issue() {
    let data = MockWorkflowData;
    let mut pipelines = data.pipelines();
    pipelines.push(Pipeline {
        id: "pipe-orphan".into(),
        department_id: "dep-ghost".into(),
        title: "Orphan".into(),
        description: String::new(),
        stages: vec![df_core::types::Stage {
            id: "stage-orphan".into(),
            pipeline_id: "pipe-elsewhere".into(),
            title: "Orphan stage".into(),
            description: String::new(),
            order: 1,
        }],
    });
    let mut deals = data.deals();
    deals.push(Deal::new("stage-ghost", "Lost deal"));

    let issues = integrity::check(&data.departments(), &pipelines, &deals);
    assert_eq!(issues.len(), 3);
    assert!(matches!(issues[0], IntegrityIssue::MissingDepartment { .. }));
    assert!(matches!(issues[1], IntegrityIssue::StagePipelineMismatch { .. }));
    assert!(matches!(issues[2], IntegrityIssue::MissingStage { .. }));
    assert!(issues[2].to_string().contains("stage-ghost"));
}

#[test]
fn organization_employees() {
    let customers = MockWorkflowData.customers();
    let employees = employees_of(&customers, "org-acme");
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].name, "João Silva");
    assert!(employees_of(&customers, "org-none").is_empty());
}
