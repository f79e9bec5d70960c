//! Build a document in memory, tweak it, and write it to a writer.
//!
//! Run with: `cargo run --example build_and_write`

use ini_doc::{ini, to_writer, Format, IniDocument};

fn main() {
    let root = ini!({
        "updated": 1,
        "[auth]": {
            "token": "abc123",
            "expires": 3600
        }
    });

    let mut doc = IniDocument::from(root);
    doc.set_in("[auth]", "token", "rotated");

    let mut out = Vec::new();
    doc.to_writer(&mut out, Format::Plain).unwrap();
    println!("{}", String::from_utf8(out).unwrap());

    // The crate-level writer helpers work on the bare mapping too.
    let mut git_out = Vec::new();
    to_writer(&mut git_out, doc.root()).unwrap();
    println!("{}", String::from_utf8(git_out).unwrap());
}
