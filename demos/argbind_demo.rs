//! # argbind demo application
//!
//! A sample CLI tool that showcases how to wire
//! [argbind](https://docs.rs/argbind) into a real binary. This is **not**
//! a real app — it exists purely to demonstrate and manually verify
//! argbind's features.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example argbind_demo -- --host 0.0.0.0 --port=8080 --verbose
//! cargo run --example argbind_demo -- --tags a b c --db-pool-size 0x20
//! cargo run --example argbind_demo -- --started "2019-10-30 19:25:36.765-07:00"
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature              | How to exercise it                                 |
//! |----------------------|-----------------------------------------------------|
//! | Inline values        | `--port=8080`                                       |
//! | Spaced values        | `--port 8080`                                       |
//! | Hex integers         | `--db-pool-size 0x20`                               |
//! | Bool flags           | `--verbose` (no operand)                            |
//! | Greedy lists         | `--tags a b c`                                      |
//! | Negative list values | `--offsets -5 10`                                   |
//! | Nested flags         | `--db-url ...` (the `db` sub-record)                |
//! | Timestamps           | `--started "10/30/19"` or any supported layout      |
//! | Unknown flag errors  | `--typo 1`                                          |

use chrono::{DateTime, Local};

use argbind::{Binder, DecodeError, Schema};

#[derive(Debug, Default)]
struct DbConfig {
    url: String,
    pool_size: u32,
}

impl Schema for DbConfig {
    fn bind<'a>(&'a mut self, binder: &mut Binder<'a>) {
        binder.field("url", &mut self.url);
        binder.field("pool-size", &mut self.pool_size);
    }
}

#[derive(Debug)]
struct DemoConfig {
    host: String,
    port: u16,
    verbose: bool,
    tags: Vec<String>,
    offsets: Vec<i32>,
    started: DateTime<Local>,
    db: DbConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            host: "localhost".into(),
            port: 3000,
            verbose: false,
            tags: Vec::new(),
            offsets: Vec::new(),
            started: Local::now(),
            db: DbConfig::default(),
        }
    }
}

impl Schema for DemoConfig {
    fn bind<'a>(&'a mut self, binder: &mut Binder<'a>) {
        binder.field("host", &mut self.host);
        binder.field("port", &mut self.port);
        binder.field("verbose", &mut self.verbose);
        binder.field("tags", &mut self.tags);
        binder.field("offsets", &mut self.offsets);
        binder.field("started", &mut self.started);
        binder.nested("db", &mut self.db);
    }
}

fn main() {
    let mut config = DemoConfig::default();
    if let Err(err) = argbind::decode_env(&mut config) {
        match &err {
            DecodeError::UnknownFlag(flag) => {
                eprintln!("{err}");
                eprintln!("hint: run with --verbose --host ... (unknown: {flag})");
            }
            _ => eprintln!("{err}"),
        }
        std::process::exit(1);
    }

    println!("host      = {}", config.host);
    println!("port      = {}", config.port);
    println!("verbose   = {}", config.verbose);
    println!("tags      = {:?}", config.tags);
    println!("offsets   = {:?}", config.offsets);
    println!("started   = {}", config.started);
    println!("db.url    = {:?}", config.db.url);
    println!("db.pool   = {}", config.db.pool_size);
}
