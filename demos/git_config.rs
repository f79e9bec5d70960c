//! Render the same document in both layouts.
//!
//! Run with: `cargo run --example git_config`

use ini_doc::{from_str, to_git_string, to_string};

fn main() {
    let text = "[core]\neditor = vim\nautocrlf = input\n\n[remote origin]\nurl = https://example.com/repo.git";

    let root = from_str(text);

    println!("--- plain ---");
    println!("{}", to_string(&root));
    println!("--- git ---");
    println!("{}", to_git_string(&root));
}
