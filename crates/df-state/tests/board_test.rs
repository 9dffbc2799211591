use df_core::config::BoardConfig;
use df_core::mock_data::{MockWorkflowData, WorkflowSource};
use df_core::repository::InMemoryRepository;
use df_core::types::{Deal, Stage};
use df_state::board::{DealBoard, DropEvent, DropLocation, DropOutcome};
use df_state::notifications::NotificationCenter;
use df_state::StateError;

fn stage(id: &str, title: &str, order: u32) -> Stage {
    Stage {
        id: id.into(),
        pipeline_id: "p1".into(),
        title: title.into(),
        description: String::new(),
        order,
    }
}

fn board() -> (DealBoard<InMemoryRepository<Deal>, NotificationCenter>, NotificationCenter) {
    let mut d1 = Deal::new("s1", "Website");
    d1.id = "d1".into();
    let mut d2 = Deal::new("s1", "Hosting");
    d2.id = "d2".into();
    let center = NotificationCenter::new(10);
    let board = DealBoard::new(
        InMemoryRepository::seeded(vec![d1, d2]),
        vec![stage("s2", "Proposal", 2), stage("s1", "Lead", 1)],
        center.clone(),
        &BoardConfig::default(),
    );
    (board, center)
}

fn drop_event(item: &str, from: (&str, usize), to: Option<(&str, usize)>) -> DropEvent {
    DropEvent {
        item_id: item.into(),
        source: DropLocation::new(from.0, from.1),
        destination: to.map(|(c, i)| DropLocation::new(c, i)),
    }
}

#[test]
fn moving_to_another_stage_reassigns_and_notifies() {
    let (mut board, center) = board();
    let before = board.deal("d1").expect("d1");

    let outcome = board
        .handle_drop(&drop_event("d1", ("s1", 0), Some(("s2", 0))))
        .expect("drop");

    assert_eq!(
        outcome,
        DropOutcome::Moved {
            deal_id: "d1".into(),
            from_stage: "s1".into(),
            to_stage: "s2".into(),
            stage_title: "Proposal".into(),
        }
    );
    let moved = board.deal("d1").expect("d1");
    assert_eq!(moved.stage_id, "s2");
    assert!(moved.updated_at > before.updated_at);
    assert_eq!(board.deal("d2").map(|d| d.stage_id), Some("s1".to_string()));

    let note = center.latest().expect("notification");
    assert_eq!(note.title, "Deal moved");
    assert!(note.message.contains("Proposal"));
}

#[test]
fn dropping_back_in_place_is_a_no_op() {
    let (mut board, center) = board();
    board
        .handle_drop(&drop_event("d1", ("s1", 0), Some(("s2", 0))))
        .expect("drop");
    let notes = center.snapshot().len();
    let snapshot = board.deals();

    let outcome = board
        .handle_drop(&drop_event("d1", ("s2", 0), Some(("s2", 0))))
        .expect("drop");
    assert_eq!(outcome, DropOutcome::Unchanged);
    assert_eq!(board.deals(), snapshot);
    assert_eq!(center.snapshot().len(), notes);
}

#[test]
fn drop_without_destination_changes_nothing() {
    let (mut board, center) = board();
    let snapshot = board.deals();
    let outcome = board
        .handle_drop(&drop_event("d1", ("s1", 0), None))
        .expect("drop");
    assert_eq!(outcome, DropOutcome::Cancelled);
    assert_eq!(board.deals(), snapshot);
    assert!(center.snapshot().is_empty());
}

#[test]
fn reordering_within_a_stage_is_ignored() {
    let (mut board, center) = board();
    let snapshot = board.deals();
    let outcome = board
        .handle_drop(&drop_event("d2", ("s1", 1), Some(("s1", 0))))
        .expect("drop");
    assert_eq!(outcome, DropOutcome::ReorderIgnored);
    assert_eq!(board.deals(), snapshot);
    assert!(center.snapshot().is_empty());
}

#[test]
fn unknown_destination_uses_fallback_label() {
    let (mut board, center) = board();
    let outcome = board
        .handle_drop(&drop_event("d1", ("s1", 0), Some(("s-archived", 0))))
        .expect("drop");
    match outcome {
        DropOutcome::Moved { stage_title, .. } => assert_eq!(stage_title, "another stage"),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(board.deal("d1").map(|d| d.stage_id), Some("s-archived".to_string()));
    assert!(center
        .latest()
        .map(|n| n.message.contains("another stage"))
        .unwrap_or(false));
}

#[test]
fn unknown_deal_is_not_found() {
    let (mut board, center) = board();
    let err = board
        .handle_drop(&drop_event("ghost", ("s1", 0), Some(("s2", 0))))
        .expect_err("not found");
    assert!(matches!(err, StateError::NotFound { kind: "Deal", .. }));
    assert!(center.snapshot().is_empty());
}

#[test]
fn columns_follow_stage_order() {
    let (mut board, _center) = board();
    let titles: Vec<String> = board.columns().into_iter().map(|c| c.stage.title).collect();
    assert_eq!(titles, vec!["Lead", "Proposal"]);

    board
        .handle_drop(&drop_event("d2", ("s1", 1), Some(("s2", 0))))
        .expect("drop");
    let columns = board.columns();
    assert_eq!(columns[0].deals.len(), 1);
    assert_eq!(columns[1].deals.len(), 1);
    assert_eq!(columns[1].deals[0].id, "d2");
}

#[test]
fn board_over_mock_pipeline() {
    let data = MockWorkflowData;
    let pipeline = data
        .pipelines()
        .into_iter()
        .find(|p| p.id == "pipe-vendas-b2b")
        .expect("sales pipeline");
    let deals = InMemoryRepository::seeded(data.deals());
    let mut board = DealBoard::for_pipeline(
        &pipeline,
        deals,
        NotificationCenter::new(5),
        &BoardConfig::default(),
    );
    assert_eq!(board.stages().len(), 5);
    assert_eq!(board.stage_title("stage-fechamento"), Some("Fechamento"));

    board
        .handle_drop(&drop_event("deal-erp", ("stage-prospeccao", 0), Some(("stage-fechamento", 0))))
        .expect("drop");
    let closing = board
        .columns()
        .into_iter()
        .find(|c| c.stage.id == "stage-fechamento")
        .expect("column");
    assert_eq!(closing.deals.len(), 1);
    assert_eq!(closing.deals[0].title, "Implantação ERP");
}

#[test]
fn outcome_serializes_with_tag() {
    let json = serde_json::to_value(DropOutcome::Cancelled).expect("serialize");
    assert_eq!(json["outcome"], "cancelled");

    let (mut board, _center) = board();
    let moved = board
        .handle_drop(&drop_event("d1", ("s1", 0), Some(("s2", 0))))
        .expect("drop");
    let json = serde_json::to_value(&moved).expect("serialize");
    assert_eq!(json["outcome"], "moved");
    assert_eq!(json["to_stage"], "s2");
}
