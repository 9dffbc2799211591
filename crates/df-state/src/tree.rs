//! Department → pipeline → stage navigation tree.

use df_core::mock_data::WorkflowSource;
use df_core::types::{Department, Pipeline, Stage};
use serde::{Deserialize, Serialize};

use crate::expansion::ExpansionState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineNode {
    pub pipeline: Pipeline,
    pub stages: Vec<Stage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentNode {
    pub department: Department,
    pub pipelines: Vec<PipelineNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Department,
    Pipeline,
    Stage,
}

/// A flattened, currently visible tree row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRow {
    pub id: String,
    pub title: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub expanded: bool,
}

/// Nest the source's pipelines under their departments, stages in display
/// order. Pipelines whose department is unknown are left out.
pub fn build<S: WorkflowSource>(source: &S) -> Vec<DepartmentNode> {
    let pipelines = source.pipelines();
    source
        .departments()
        .into_iter()
        .map(|department| {
            let pipelines = pipelines
                .iter()
                .filter(|p| p.department_id == department.id)
                .map(|p| PipelineNode {
                    stages: p.ordered_stages().into_iter().cloned().collect(),
                    pipeline: p.clone(),
                })
                .collect();
            DepartmentNode {
                department,
                pipelines,
            }
        })
        .collect()
}

/// Rows a navigation panel should show: children appear only under
/// expanded parents.
pub fn visible_rows(tree: &[DepartmentNode], expansion: &ExpansionState) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    for dept in tree {
        let dept_open = expansion.is_expanded(&dept.department.id);
        rows.push(TreeRow {
            id: dept.department.id.clone(),
            title: dept.department.title.clone(),
            kind: NodeKind::Department,
            depth: 0,
            expanded: dept_open,
        });
        if !dept_open {
            continue;
        }
        for node in &dept.pipelines {
            let pipe_open = expansion.is_expanded(&node.pipeline.id);
            rows.push(TreeRow {
                id: node.pipeline.id.clone(),
                title: node.pipeline.title.clone(),
                kind: NodeKind::Pipeline,
                depth: 1,
                expanded: pipe_open,
            });
            if !pipe_open {
                continue;
            }
            rows.extend(node.stages.iter().map(|stage| TreeRow {
                id: stage.id.clone(),
                title: stage.title.clone(),
                kind: NodeKind::Stage,
                depth: 2,
                expanded: expansion.is_expanded(&stage.id),
            }));
        }
    }
    rows
}
