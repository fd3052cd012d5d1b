#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpt() -> Command {
    cargo_bin_cmd!("rprettytable")
}

/// Write `content` to a unique file inside the system temp dir and return its path
pub fn temp_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rprettytable.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write test input");
    p
}

/// Path inside tempdir that is guaranteed not to exist
pub fn missing_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_missing_rprettytable.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const PEOPLE_CSV: &str = "name,age,city\nJohn,25,New York\nMary,30,Chicago\nBob,22,Boston\n";

pub const PEOPLE_JSON: &str = r#"[
  {"name": "John", "age": 25, "city": "New York"},
  {"name": "Mary", "age": 30, "city": "Chicago"},
  {"name": "Bob", "age": 22, "city": "Boston"}
]"#;
