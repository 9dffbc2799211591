use chrono::{DateTime, Utc};

use crate::customer::{Customer, CustomerStatus, Organization, Person};
use crate::types::{
    Agent, AgentProfile, AgentStatus, Asset, AssetStatus, AssetType, Deal, DealStatus, DealType,
    Department, Pipeline, Stage, WorkEnvironment,
};

/// Source of the department / pipeline / stage structure.
///
/// The only implementation today is [`MockWorkflowData`]; a remote source
/// would implement the same trait.
pub trait WorkflowSource {
    fn departments(&self) -> Vec<Department>;
    fn pipelines(&self) -> Vec<Pipeline>;

    /// Every stage of every pipeline, flattened.
    fn stages(&self) -> Vec<Stage> {
        self.pipelines()
            .into_iter()
            .flat_map(|p| p.stages)
            .collect()
    }
}

/// Fixed, hardcoded demo collections. Every call returns a fresh copy of the
/// same data; nothing is cached or mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockWorkflowData;

// 2024-01-15 09:00:00 UTC
const SEED_EPOCH: i64 = 1_705_309_200;

fn seeded_at(offset_hours: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(SEED_EPOCH + offset_hours * 3_600, 0).unwrap_or_default()
}

fn department(id: &str, title: &str, description: &str, color: &str) -> Department {
    Department {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        color: color.into(),
    }
}

fn stage(id: &str, pipeline_id: &str, title: &str, description: &str, order: u32) -> Stage {
    Stage {
        id: id.into(),
        pipeline_id: pipeline_id.into(),
        title: title.into(),
        description: description.into(),
        order,
    }
}

impl WorkflowSource for MockWorkflowData {
    fn departments(&self) -> Vec<Department> {
        vec![
            department("dep-vendas", "Vendas", "Equipe comercial e negociações", "#22c55e"),
            department("dep-marketing", "Marketing", "Geração e nutrição de leads", "#f97316"),
            department("dep-suporte", "Suporte", "Atendimento pós-venda", "#3b82f6"),
        ]
    }

    fn pipelines(&self) -> Vec<Pipeline> {
        vec![
            Pipeline {
                id: "pipe-vendas-b2b".into(),
                department_id: "dep-vendas".into(),
                title: "Vendas B2B".into(),
                description: "Funil de vendas para empresas".into(),
                stages: vec![
                    stage("stage-prospeccao", "pipe-vendas-b2b", "Prospecção", "Primeiro contato", 1),
                    stage("stage-qualificacao", "pipe-vendas-b2b", "Qualificação", "Entendimento da necessidade", 2),
                    stage("stage-proposta", "pipe-vendas-b2b", "Proposta", "Proposta comercial enviada", 3),
                    stage("stage-negociacao", "pipe-vendas-b2b", "Negociação", "Ajuste de condições", 4),
                    stage("stage-fechamento", "pipe-vendas-b2b", "Fechamento", "Contrato assinado", 5),
                ],
            },
            Pipeline {
                id: "pipe-marketing-leads".into(),
                department_id: "dep-marketing".into(),
                title: "Leads".into(),
                description: "Captação e qualificação de leads".into(),
                stages: vec![
                    stage("stage-captacao", "pipe-marketing-leads", "Captação", "Lead recém chegado", 1),
                    stage("stage-nutricao", "pipe-marketing-leads", "Nutrição", "Campanhas de relacionamento", 2),
                    stage("stage-mql", "pipe-marketing-leads", "MQL", "Lead qualificado pelo marketing", 3),
                ],
            },
            Pipeline {
                id: "pipe-suporte-chamados".into(),
                department_id: "dep-suporte".into(),
                title: "Chamados".into(),
                description: "Fila de atendimento".into(),
                stages: vec![
                    stage("stage-triagem", "pipe-suporte-chamados", "Triagem", "Classificação do chamado", 1),
                    stage("stage-atendimento", "pipe-suporte-chamados", "Em atendimento", "Chamado em andamento", 2),
                    stage("stage-resolvido", "pipe-suporte-chamados", "Resolvido", "Chamado encerrado", 3),
                ],
            },
        ]
    }
}

impl MockWorkflowData {
    pub fn agents(&self) -> Vec<Agent> {
        let agent = |id: &str, stage_id: &str, name: &str, role: &str, agent_name: &str, dept: &str, status, hours| Agent {
            id: id.into(),
            stage_id: stage_id.into(),
            profile: AgentProfile {
                name: name.into(),
                role: role.into(),
                agent_name: agent_name.into(),
            },
            work_environment: WorkEnvironment {
                department_title: dept.into(),
            },
            status,
            created_at: seeded_at(hours),
            updated_at: seeded_at(hours),
        };
        vec![
            agent("agent-ana", "stage-prospeccao", "Ana", "Vendas", "Assistente Comercial", "Vendas", AgentStatus::Active, 0),
            agent("agent-bruno", "stage-captacao", "Bruno", "Marketing", "Redator", "Marketing", AgentStatus::Inactive, 2),
            agent("agent-carla", "stage-triagem", "Carla", "Suporte", "Atendente Virtual", "Suporte", AgentStatus::Active, 4),
        ]
    }

    pub fn deals(&self) -> Vec<Deal> {
        let deal = |id: &str, stage_id: &str, title: &str, description: &str, status, kind, amount, customer: Option<&str>, hours| Deal {
            id: id.into(),
            stage_id: stage_id.into(),
            title: title.into(),
            description: description.into(),
            status,
            kind,
            amount,
            customer_id: customer.map(str::to_string),
            created_at: seeded_at(hours),
            updated_at: seeded_at(hours),
        };
        vec![
            deal("deal-erp", "stage-prospeccao", "Implantação ERP", "Licenças e implantação", DealStatus::Open, DealType::NewBusiness, Some(48_000.0), Some("org-acme"), 1),
            deal("deal-suporte", "stage-proposta", "Contrato de suporte", "Renovação anual", DealStatus::InProgress, DealType::Renewal, Some(12_500.0), Some("org-acme"), 3),
            deal("deal-modulo", "stage-negociacao", "Módulo fiscal", "Expansão do contrato", DealStatus::InProgress, DealType::Upsell, Some(7_800.5), Some("person-joao"), 5),
            deal("deal-webinar", "stage-captacao", "Leads do webinar", "Lista de inscritos", DealStatus::Open, DealType::NewBusiness, None, None, 6),
        ]
    }

    pub fn assets(&self) -> Vec<Asset> {
        vec![
            Asset {
                id: "asset-proposta-erp".into(),
                deal_id: Some("deal-erp".into()),
                title: "Proposta ERP".into(),
                description: "Proposta comercial v2".into(),
                kind: AssetType::Proposal,
                status: AssetStatus::Processing,
                amount: Some(48_000.0),
                created_at: seeded_at(2),
            },
            Asset {
                id: "asset-contrato-suporte".into(),
                deal_id: Some("deal-suporte".into()),
                title: "Contrato de suporte".into(),
                description: "Minuta para assinatura".into(),
                kind: AssetType::Contract,
                status: AssetStatus::Open,
                amount: None,
                created_at: seeded_at(4),
            },
        ]
    }

    pub fn customers(&self) -> Vec<Customer> {
        vec![
            Customer::Organization(Organization {
                id: "org-acme".into(),
                name: "Acme Indústria Ltda".into(),
                trade_name: Some("Acme".into()),
                email: "contato@acme.com.br".into(),
                phone: "+55 11 4000-0000".into(),
                tax_id: Some("12.345.678/0001-90".into()),
                website: Some("https://acme.com.br".into()),
                status: CustomerStatus::Active,
                created_at: seeded_at(0),
                updated_at: seeded_at(0),
            }),
            Customer::Person(Person {
                id: "person-joao".into(),
                name: "João Silva".into(),
                email: "joao@acme.com.br".into(),
                phone: "+55 11 98888-0000".into(),
                document: None,
                organization_id: Some("org-acme".into()),
                status: CustomerStatus::Active,
                created_at: seeded_at(1),
                updated_at: seeded_at(1),
            }),
            Customer::Person(Person {
                id: "person-marina".into(),
                name: "Marina Costa".into(),
                email: "marina@example.com".into(),
                phone: "+55 21 97777-0000".into(),
                document: Some("123.456.789-00".into()),
                organization_id: None,
                status: CustomerStatus::Lead,
                created_at: seeded_at(3),
                updated_at: seeded_at(3),
            }),
        ]
    }
}
