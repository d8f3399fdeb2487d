// This binary crate is intentionally minimal.
// All neural network logic lives in the library (src/lib.rs and its modules).
// Run the demos with:
//   cargo run --example xor
fn main() {
    println!("ember-nn: a minimal three-layer feedforward neural network in Rust.");
    println!("Run `cargo run --example xor` to see the XOR demo,");
    println!("or `cargo run --example mnist --release` for digit recognition.");
}
