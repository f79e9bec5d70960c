//! Parse a small config and read typed values back out.
//!
//! Run with: `cargo run --example simple`

use ini_doc::{from_str, Value};

fn main() {
    let text = "name = mytool\nretries = 3\n\n[server]\nhost = localhost\nport = 8080\ntimeout = 1.5";

    let root = from_str(text);

    if let Some(Value::Str(name)) = root.get("name").and_then(|e| e.as_scalar()) {
        println!("tool name: {}", name);
    }

    let server = root
        .get("[server]")
        .and_then(|e| e.as_section())
        .expect("[server] section present");

    println!("host: {:?}", server.get("host"));
    println!("port: {:?}", server.get("port").and_then(|v| v.as_i64()));
    println!("timeout: {:?}", server.get("timeout").and_then(|v| v.as_f64()));
}
