use std::any::Any;

use koseq::{Pipe, Seq, SeqError, funcs};

fn mixed_elements() -> Vec<Box<dyn Any>> {
    vec![
        Box::new(1i64),
        Box::new("two"),
        Box::new(3i64),
        Box::new(4.5f64),
        Box::new(5i64),
    ]
}

#[test]
fn filter_is_instance_narrows_to_the_requested_type() -> anyhow::Result<()> {
    let ints = Seq::new(mixed_elements()).filter_is_instance::<i64>().to_list();
    assert_eq!(ints, vec![1, 3, 5]);

    let strs = Seq::new(mixed_elements()).filter_is_instance::<&str>().to_list();
    assert_eq!(strs, vec!["two"]);
    Ok(())
}

#[test]
fn filter_is_instance_with_no_matches_is_empty() -> anyhow::Result<()> {
    let bools = Seq::new(mixed_elements()).filter_is_instance::<bool>().to_list();
    assert!(bools.is_empty());
    Ok(())
}

#[test]
fn narrowed_sequences_keep_composing() -> anyhow::Result<()> {
    let total = Seq::new(mixed_elements())
        .filter_is_instance::<i64>()
        .map(|n| n * 10)
        .sum()?;
    assert_eq!(total, 90);
    Ok(())
}

#[test]
fn cast_accepts_homogeneous_elements() -> anyhow::Result<()> {
    let elements: Vec<Box<dyn Any>> = vec![Box::new(1u32), Box::new(2u32)];
    let out = Seq::new(elements).cast::<u32>()?.to_list();
    assert_eq!(out, vec![1, 2]);
    Ok(())
}

#[test]
fn cast_fails_on_the_first_foreign_element() {
    let result = Seq::new(mixed_elements()).cast::<i64>();
    assert!(matches!(result, Err(SeqError::TypeMismatch { .. })));
}

#[test]
fn free_function_form_matches_the_method_form() -> anyhow::Result<()> {
    let piped = Seq::new(mixed_elements())
        .pipe(funcs::filter_is_instance::<i64>())
        .pipe(funcs::to_list());
    let methods = Seq::new(mixed_elements()).filter_is_instance::<i64>().to_list();
    assert_eq!(piped, methods);
    Ok(())
}
