//! Linesheet CLI (for testing purposes only)
//! The main interface is through WASM bindings.

fn main() {
    println!("Linesheet Catalog Core");
    println!("======================");
    println!();
    println!("This is a library crate. To use it:");
    println!();
    println!("  1. Build WASM: wasm-pack build --target web");
    println!("  2. Load the module from the catalog web app");
    println!();
    println!("For testing the core library:");
    println!("  cargo test");
}
