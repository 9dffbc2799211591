use df_core::customer::Customer;
use df_core::types::{Agent, Deal};
use serde::{Deserialize, Serialize};

/// Exact-match criterion. `All` is the `"all"` sentinel from the UI selects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    #[default]
    All,
    Only(String),
}

impl Criterion {
    pub const ALL: &'static str = "all";

    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            Criterion::All
        } else {
            Criterion::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Criterion::All => Self::ALL,
            Criterion::Only(v) => v,
        }
    }

    /// `All` passes everything, including records without a value.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Criterion::All => true,
            Criterion::Only(expected) => value == Some(expected.as_str()),
        }
    }
}

impl From<&str> for Criterion {
    fn from(value: &str) -> Self {
        Criterion::parse(value)
    }
}

/// Fields a record exposes to [`FilterState`].
pub trait Filterable {
    /// Name-like and role-like text matched by the search box.
    fn search_fields(&self) -> Vec<&str>;

    fn status_key(&self) -> &str;

    fn department_key(&self) -> Option<&str> {
        None
    }
}

impl Filterable for Agent {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.profile.name.as_str(),
            self.profile.role.as_str(),
            self.profile.agent_name.as_str(),
        ]
    }

    fn status_key(&self) -> &str {
        self.status.as_str()
    }

    fn department_key(&self) -> Option<&str> {
        Some(self.work_environment.department_title.as_str())
    }
}

impl Filterable for Deal {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn status_key(&self) -> &str {
        self.status.as_str()
    }
}

impl Filterable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name(), self.email()]
    }

    fn status_key(&self) -> &str {
        self.status().as_str()
    }
}

/// Search text plus status and department criteria.
///
/// `apply` recomputes from scratch on every call and keeps base order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub status: Criterion,
    pub department: Criterion,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = Criterion::parse(status);
    }

    pub fn set_department(&mut self, department: &str) {
        self.department = Criterion::parse(department);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.status != Criterion::All || self.department != Criterion::All
    }

    pub fn matches<E: Filterable>(&self, record: &E) -> bool {
        self.matches_search(record)
            && self.status.matches(Some(record.status_key()))
            && self.department.matches(record.department_key())
    }

    pub fn apply<E: Filterable + Clone>(&self, base: &[E]) -> Vec<E> {
        let filtered: Vec<E> = base.iter().filter(|r| self.matches(*r)).cloned().collect();
        tracing::debug!(
            search = %self.search,
            status = self.status.as_str(),
            department = self.department.as_str(),
            total = base.len(),
            visible = filtered.len(),
            "filter applied"
        );
        filtered
    }

    fn matches_search<E: Filterable>(&self, record: &E) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
