use super::*;

#[test]
fn display_round_trips_through_from_str() {
    for kind in ConstructKind::ALL {
        assert_eq!(kind.to_string().parse::<ConstructKind>(), Ok(kind));
    }
}

#[test]
fn accepts_keywords_and_sample_names() {
    assert_eq!("switch".parse(), Ok(ConstructKind::Branch));
    assert_eq!("if".parse(), Ok(ConstructKind::Conditional));
    assert_eq!("sample_loop".parse(), Ok(ConstructKind::Loop));
}

#[test]
fn rejects_unknown_kind() {
    let err = "goto".parse::<ConstructKind>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown construct `goto` (expected branch, conditional or loop)"
    );
}
