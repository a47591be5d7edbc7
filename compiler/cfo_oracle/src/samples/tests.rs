use super::*;
use cfo_ir::StmtKind;
use pretty_assertions::assert_eq;

#[test]
fn all_samples_pass_validation() {
    let interner = StringInterner::new();
    assert!(sample_switch(&interner).is_ok());
    assert!(sample_if(&interner).is_ok());
    assert!(sample_loop(&interner).is_ok());
}

#[test]
fn sample_names_and_parameter() {
    let interner = StringInterner::new();
    let (construct, _) = sample_loop(&interner).unwrap();
    assert_eq!(&*interner.lookup(construct.name), LOOP_NAME);
    assert_eq!(&*interner.lookup(construct.param), "in");
}

#[test]
fn switch_table_keeps_source_order_without_default() {
    let interner = StringInterner::new();
    let (construct, arena) = sample_switch(&interner).unwrap();

    let switch = arena
        .stmt_list(construct.body)
        .iter()
        .find_map(|&stmt| match arena.stmt_kind(stmt) {
            StmtKind::Switch { arms, .. } => Some(arms),
            _ => None,
        })
        .unwrap();
    let labels: Vec<CaseLabel> = arena.case_arms(switch).iter().map(|arm| arm.label).collect();
    assert_eq!(
        labels,
        vec![
            CaseLabel::Value(1),
            CaseLabel::Value(2),
            CaseLabel::Value(10),
            CaseLabel::Value(11),
            CaseLabel::Value(12),
        ]
    );
}

#[test]
fn loop_sample_has_three_top_level_loops() {
    let interner = StringInterner::new();
    let (construct, arena) = sample_loop(&interner).unwrap();
    let kinds: Vec<&str> = arena
        .stmt_list(construct.body)
        .iter()
        .map(|&stmt| match arena.stmt_kind(stmt) {
            StmtKind::For { .. } => "for",
            StmtKind::DoWhile { .. } => "do-while",
            StmtKind::While { .. } => "while",
            StmtKind::Let { .. } => "let",
            StmtKind::Return(_) => "return",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["for", "let", "do-while", "while", "return"]);
}
