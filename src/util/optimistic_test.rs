use super::*;
use futures::executor::block_on;

fn drop_value(x: i32) -> impl FnOnce(&mut Vec<i32>) {
    move |v| v.retain(|y| *y != x)
}

fn push_value(x: i32) -> impl FnOnce(&mut Vec<i32>) {
    move |v| {
        if !v.contains(&x) {
            v.push(x);
        }
    }
}

#[test]
fn success_keeps_mutation() {
    let slot = Mutex::new(vec![1, 2, 3]);
    let result = block_on(optimistic(&slot, drop_value(2), push_value(2), async {
        Ok::<_, DomainRequestError>("ok")
    }));
    assert_eq!(result, Ok("ok"));
    assert_eq!(slot.load(), vec![1, 3]);
}

#[test]
fn failure_reverts_edit_and_returns_error() {
    let slot = Mutex::new(vec![1, 2, 3]);
    let result: Result<(), _> = block_on(optimistic(&slot, drop_value(3), push_value(3), async {
        Err(DomainRequestError::Conflict("locked".to_owned()))
    }));
    assert_eq!(result, Err(DomainRequestError::Conflict("locked".to_owned())));
    assert_eq!(slot.load(), vec![1, 2, 3]);
}

#[test]
fn mutation_is_visible_while_request_is_pending() {
    let slot = Mutex::new(0);
    let result = block_on(optimistic(&slot, |v: &mut i32| *v = 5, |v: &mut i32| *v = 0, async {
        assert_eq!(slot.load(), 5);
        Ok::<_, DomainRequestError>(())
    }));
    assert!(result.is_ok());
}

#[test]
fn rollback_keeps_edits_made_while_request_was_pending() {
    let slot = Mutex::new(vec![1, 2, 3]);
    let result: Result<(), _> = block_on(optimistic(&slot, drop_value(2), push_value(2), async {
        // Another edit lands before this request fails.
        let mut current = slot.load();
        current.retain(|x| *x != 3);
        slot.store(current);
        Err(DomainRequestError::Network("offline".to_owned()))
    }));
    assert!(result.is_err());
    assert_eq!(slot.load(), vec![1, 2]);
}
