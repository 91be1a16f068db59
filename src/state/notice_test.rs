use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Info, "a");
    let b = state.push(NoticeKind::Error, "b");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn push_keeps_only_newest_visible() {
    let mut state = NoticeState::default();
    for i in 0..5 {
        state.push(NoticeKind::Info, format!("n{i}"));
    }
    let texts: Vec<_> = state.items.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, vec!["n2", "n3", "n4"]);
}

#[test]
fn dismiss_removes_by_id_only() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "a");
    state.push(NoticeKind::Success, "b");
    state.dismiss(a);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].text, "b");
}
