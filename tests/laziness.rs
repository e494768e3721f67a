use std::cell::Cell;
use std::rc::Rc;

use koseq::Seq;

fn counted_identity(counter: &Rc<Cell<usize>>) -> impl FnMut(u64) -> u64 + 'static {
    let counter = Rc::clone(counter);
    move |n| {
        counter.set(counter.get() + 1);
        n
    }
}

#[test]
fn nothing_is_pulled_before_a_terminal_runs() -> anyhow::Result<()> {
    let calls = Rc::new(Cell::new(0));
    let chain = Seq::new(0u64..)
        .map(counted_identity(&calls))
        .filter(|&n| n % 2 == 0)
        .take(3);
    assert_eq!(calls.get(), 0);

    let out = chain.to_list();
    assert_eq!(out, vec![0, 2, 4]);
    Ok(())
}

#[test]
fn take_pulls_exactly_n_elements() -> anyhow::Result<()> {
    let calls = Rc::new(Cell::new(0));
    let out = Seq::new(0u64..).map(counted_identity(&calls)).take(5).to_list();
    assert_eq!(out.len(), 5);
    assert_eq!(calls.get(), 5);
    Ok(())
}

#[test]
fn first_pulls_exactly_one_element() -> anyhow::Result<()> {
    let calls = Rc::new(Cell::new(0));
    let first = Seq::new(10u64..).map(counted_identity(&calls)).first()?;
    assert_eq!(first, 10);
    assert_eq!(calls.get(), 1);
    Ok(())
}

#[test]
fn take_while_pulls_one_past_the_cut() -> anyhow::Result<()> {
    let calls = Rc::new(Cell::new(0));
    let out = Seq::new([1u64, 2, 9, 3, 4].to_vec())
        .map(counted_identity(&calls))
        .take_while(|&n| n < 5)
        .to_list();
    assert_eq!(out, vec![1, 2]);
    // The failing element (9) had to be observed; nothing after it was.
    assert_eq!(calls.get(), 3);
    Ok(())
}

#[test]
fn any_stops_at_the_first_witness() -> anyhow::Result<()> {
    let calls = Rc::new(Cell::new(0));
    assert!(Seq::new(0u64..).map(counted_identity(&calls)).any(|&n| n == 4));
    assert_eq!(calls.get(), 5);
    Ok(())
}
