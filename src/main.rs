// This binary crate is intentionally minimal.
// All classifier logic lives in the library (src/lib.rs and its modules).
fn main() {
    println!("digit-nn: a from-scratch fully-connected digit classifier in Rust.");
    println!("Use the library API: Network, train, test, and the persist module.");
}
