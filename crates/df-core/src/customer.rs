use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{optional_parent, touched, DomainError, Entity};

// ---------------------------------------------------------------------------
// CustomerStatus / CustomerKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
    Lead,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
            CustomerStatus::Lead => "lead",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Inactive => "Inactive",
            CustomerStatus::Lead => "Lead",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerKind {
    Person,
    Organization,
}

impl CustomerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerKind::Person => "person",
            CustomerKind::Organization => "organization",
        }
    }
}

// ---------------------------------------------------------------------------
// Person / Organization
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// National document number (e.g. CPF).
    pub document: Option<String>,
    /// Owning organization, if the person is an employee of one.
    pub organization_id: Option<String>,
    pub status: CustomerStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub trade_name: Option<String>,
    pub email: String,
    pub phone: String,
    /// Company registration number (e.g. CNPJ).
    pub tax_id: Option<String>,
    pub website: Option<String>,
    pub status: CustomerStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub document: Option<String>,
    pub organization_id: Option<String>,
    pub status: Option<CustomerStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationUpdate {
    pub name: Option<String>,
    pub trade_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tax_id: Option<String>,
    pub website: Option<String>,
    pub status: Option<CustomerStatus>,
}

// ---------------------------------------------------------------------------
// Customer
// ---------------------------------------------------------------------------

/// A customer is either a person or an organization. The variant is fixed
/// at creation; updates for the other variant are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Customer {
    Person(Person),
    Organization(Organization),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CustomerUpdate {
    Person(PersonUpdate),
    Organization(OrganizationUpdate),
}

impl Default for CustomerUpdate {
    fn default() -> Self {
        CustomerUpdate::Person(PersonUpdate::default())
    }
}

impl CustomerUpdate {
    pub fn kind(&self) -> CustomerKind {
        match self {
            CustomerUpdate::Person(_) => CustomerKind::Person,
            CustomerUpdate::Organization(_) => CustomerKind::Organization,
        }
    }
}

impl Customer {
    pub fn kind(&self) -> CustomerKind {
        match self {
            Customer::Person(_) => CustomerKind::Person,
            Customer::Organization(_) => CustomerKind::Organization,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Customer::Person(p) => &p.name,
            Customer::Organization(o) => &o.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Customer::Person(p) => &p.email,
            Customer::Organization(o) => &o.email,
        }
    }

    pub fn status(&self) -> CustomerStatus {
        match self {
            Customer::Person(p) => p.status,
            Customer::Organization(o) => o.status,
        }
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        match self {
            Customer::Person(p) => p.updated_at,
            Customer::Organization(o) => o.updated_at,
        }
    }

    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Customer::Person(p) => Some(p),
            Customer::Organization(_) => None,
        }
    }

    pub fn as_organization(&self) -> Option<&Organization> {
        match self {
            Customer::Organization(o) => Some(o),
            Customer::Person(_) => None,
        }
    }
}

impl Entity for Customer {
    type Update = CustomerUpdate;
    const KIND: &'static str = "Customer";

    fn id(&self) -> &str {
        match self {
            Customer::Person(p) => &p.id,
            Customer::Organization(o) => &o.id,
        }
    }

    fn display_name(&self) -> &str {
        self.name()
    }

    fn apply(&mut self, update: CustomerUpdate) -> Result<(), DomainError> {
        match (self, update) {
            (Customer::Person(p), CustomerUpdate::Person(u)) => {
                if let Some(name) = u.name {
                    p.name = name;
                }
                if let Some(email) = u.email {
                    p.email = email;
                }
                if let Some(phone) = u.phone {
                    p.phone = phone;
                }
                if let Some(document) = u.document {
                    p.document = Some(document);
                }
                if let Some(organization_id) = u.organization_id {
                    p.organization_id = optional_parent(&organization_id);
                }
                if let Some(status) = u.status {
                    p.status = status;
                }
                p.updated_at = touched(p.updated_at);
                Ok(())
            }
            (Customer::Organization(o), CustomerUpdate::Organization(u)) => {
                if let Some(name) = u.name {
                    o.name = name;
                }
                if let Some(trade_name) = u.trade_name {
                    o.trade_name = Some(trade_name);
                }
                if let Some(email) = u.email {
                    o.email = email;
                }
                if let Some(phone) = u.phone {
                    o.phone = phone;
                }
                if let Some(tax_id) = u.tax_id {
                    o.tax_id = Some(tax_id);
                }
                if let Some(website) = u.website {
                    o.website = Some(website);
                }
                if let Some(status) = u.status {
                    o.status = status;
                }
                o.updated_at = touched(o.updated_at);
                Ok(())
            }
            (current, update) => Err(DomainError::KindMismatch {
                expected: current.kind().as_str(),
                found: update.kind().as_str(),
            }),
        }
    }

    /// For persons, a non-empty `parent_id` becomes the owning organization.
    fn create(id: String, parent_id: &str, update: CustomerUpdate) -> Result<Self, DomainError> {
        let now = Utc::now();
        let customer = match update {
            CustomerUpdate::Person(u) => Customer::Person(Person {
                id,
                name: u.name.unwrap_or_default(),
                email: u.email.unwrap_or_default(),
                phone: u.phone.unwrap_or_default(),
                document: u.document,
                organization_id: u
                    .organization_id
                    .and_then(|org| optional_parent(&org))
                    .or_else(|| optional_parent(parent_id)),
                status: u.status.unwrap_or_default(),
                created_at: now,
                updated_at: now,
            }),
            CustomerUpdate::Organization(u) => Customer::Organization(Organization {
                id,
                name: u.name.unwrap_or_default(),
                trade_name: u.trade_name,
                email: u.email.unwrap_or_default(),
                phone: u.phone.unwrap_or_default(),
                tax_id: u.tax_id,
                website: u.website,
                status: u.status.unwrap_or_default(),
                created_at: now,
                updated_at: now,
            }),
        };
        Ok(customer)
    }
}

/// Persons whose owning organization is `organization_id`.
pub fn employees_of<'a>(customers: &'a [Customer], organization_id: &str) -> Vec<&'a Person> {
    customers
        .iter()
        .filter_map(Customer::as_person)
        .filter(|p| p.organization_id.as_deref() == Some(organization_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str) -> Customer {
        Customer::create(
            crate::entity::new_id(),
            "",
            CustomerUpdate::Person(PersonUpdate {
                name: Some(name.into()),
                ..Default::default()
            }),
        )
        .expect("create person")
    }

    #[test]
    fn person_update_merges_fields() {
        let mut customer = person("Maria");
        customer
            .apply(CustomerUpdate::Person(PersonUpdate {
                email: Some("maria@example.com".into()),
                ..Default::default()
            }))
            .expect("apply");
        assert_eq!(customer.name(), "Maria");
        assert_eq!(customer.email(), "maria@example.com");
    }

    #[test]
    fn kind_is_immutable() {
        let mut customer = person("Maria");
        let err = customer
            .apply(CustomerUpdate::Organization(OrganizationUpdate {
                name: Some("Acme".into()),
                ..Default::default()
            }))
            .expect_err("kind mismatch");
        assert_eq!(
            err,
            DomainError::KindMismatch {
                expected: "person",
                found: "organization",
            }
        );
        assert_eq!(customer.kind(), CustomerKind::Person);
        assert_eq!(customer.name(), "Maria");
    }

    #[test]
    fn empty_organization_id_detaches_person() {
        let mut customer = Customer::create(
            "p1".into(),
            "org-1",
            CustomerUpdate::Person(PersonUpdate::default()),
        )
        .expect("create");
        assert_eq!(
            customer.as_person().and_then(|p| p.organization_id.as_deref()),
            Some("org-1")
        );

        customer
            .apply(CustomerUpdate::Person(PersonUpdate {
                organization_id: Some(String::new()),
                ..Default::default()
            }))
            .expect("apply");
        assert_eq!(customer.as_person().and_then(|p| p.organization_id.clone()), None);
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(person("Maria")).expect("serialize");
        assert_eq!(json["type"], "person");
        assert_eq!(json["name"], "Maria");
    }
}
