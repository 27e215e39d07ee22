use mmrag_kernel::SAFE_ALPHABET;
use mmrag_kernel::session_id;

#[test]
fn generates_expected_length_and_charset() {
    let id = session_id!();
    assert_eq!(id.len(), 12);

    for ch in id.chars() {
        assert!(SAFE_ALPHABET.contains(&ch), "unexpected character in session id: {ch}");
    }
}

#[test]
fn custom_length_and_uniqueness() {
    assert_eq!(session_id!(20).len(), 20);
    assert_ne!(session_id!(), session_id!());
}
