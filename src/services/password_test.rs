use super::*;

// =============================================================================
// hash
// =============================================================================

#[test]
fn hash_output_is_not_the_plaintext() {
    let hashed = hash("p1").unwrap();
    assert_ne!(hashed, "p1");
    assert!(hashed.starts_with("$2"));
}

#[test]
fn hash_same_input_twice_differs() {
    let a = hash("hunter2").unwrap();
    let b = hash("hunter2").unwrap();
    assert_ne!(a, b);
}

// =============================================================================
// verify
// =============================================================================

#[test]
fn verify_accepts_correct_password() {
    let hashed = hash("correct horse").unwrap();
    assert!(verify("correct horse", &hashed).unwrap());
}

#[test]
fn verify_rejects_wrong_password() {
    let hashed = hash("correct horse").unwrap();
    assert!(!verify("battery staple", &hashed).unwrap());
}

#[test]
fn verify_malformed_hash_is_an_error() {
    assert!(verify("anything", "not-a-bcrypt-hash").is_err());
}
