// crates/shared-kernel/tests/frequency_eq.rs
use freq_count_shared_kernel::Frequency;

#[test]
fn eq_with_usize_both_sides() {
    let freq = Frequency::from(7);
    assert!(freq == 7usize);
    assert!(7usize == freq);
}

#[test]
fn display_is_plain_number() {
    assert_eq!(Frequency::from(42).to_string(), "42");
}
