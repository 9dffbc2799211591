use df_core::entity::Entity;
use df_core::repository::{InMemoryRepository, Repository, SharedRepository, StoreError};
use df_core::types::{Department, DepartmentUpdate};

fn department(id: &str, title: &str) -> Department {
    Department::create(
        id.to_string(),
        "",
        DepartmentUpdate {
            title: Some(title.into()),
            ..Default::default()
        },
    )
    .expect("create")
}

#[test]
fn insert_preserves_order() {
    let mut repo = InMemoryRepository::new();
    repo.insert(department("d1", "Vendas")).expect("insert");
    repo.insert(department("d2", "Marketing")).expect("insert");
    let titles: Vec<String> = repo.list().into_iter().map(|d| d.title).collect();
    assert_eq!(titles, vec!["Vendas", "Marketing"]);
    assert_eq!(repo.len(), 2);
    assert!(!repo.is_empty());
}

#[test]
fn duplicate_insert_is_rejected() {
    let mut repo = InMemoryRepository::new();
    repo.insert(department("d1", "Vendas")).expect("insert");
    let err = repo.insert(department("d1", "Outro")).expect_err("duplicate");
    assert_eq!(
        err,
        StoreError::Duplicate {
            kind: "Department",
            id: "d1".into()
        }
    );
    assert_eq!(repo.len(), 1);
}

#[test]
fn replace_keeps_position() {
    let mut repo = InMemoryRepository::seeded(vec![
        department("d1", "Vendas"),
        department("d2", "Marketing"),
        department("d3", "Suporte"),
    ]);
    repo.replace(department("d2", "Growth")).expect("replace");
    assert_eq!(repo.as_slice()[1].title, "Growth");
    assert_eq!(repo.len(), 3);
}

#[test]
fn replace_missing_is_not_found() {
    let mut repo: InMemoryRepository<Department> = InMemoryRepository::new();
    let err = repo.replace(department("ghost", "x")).expect_err("not found");
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn remove_present_and_absent() {
    let mut repo = InMemoryRepository::seeded(vec![department("d1", "Vendas")]);
    assert!(repo.remove("nope").is_none());
    assert_eq!(repo.len(), 1);
    let removed = repo.remove("d1").expect("removed");
    assert_eq!(removed.title, "Vendas");
    assert!(repo.is_empty());
    assert!(!repo.contains("d1"));
}

#[test]
fn seeding_drops_duplicate_ids() {
    let repo = InMemoryRepository::seeded(vec![
        department("d1", "first"),
        department("d1", "second"),
    ]);
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.get("d1").map(|d| d.title), Some("first".to_string()));
}

#[test]
fn shared_handles_see_each_others_writes() {
    let mut form = SharedRepository::seeded(vec![department("d1", "Vendas")]);
    let mut board = form.clone();

    form.insert(department("d2", "Marketing")).expect("insert");
    assert_eq!(board.len(), 2);
    assert!(board.contains("d2"));

    let mut renamed = department("d1", "Comercial");
    renamed.color = "#000000".into();
    board.replace(renamed).expect("replace");
    assert_eq!(form.get("d1").map(|d| d.title), Some("Comercial".to_string()));

    assert!(form.remove("d2").is_some());
    assert!(board.get("d2").is_none());
    assert!(matches!(
        board.insert(department("d1", "again")),
        Err(StoreError::Duplicate { .. })
    ));
}
