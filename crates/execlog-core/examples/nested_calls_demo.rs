//! Nested calls demo
//!
//! Demonstrates:
//! - Passing one logger down a call chain explicitly
//! - Named and unnamed steps with elapsed/delta timing
//! - Scope guards closing methods on early return
//! - Mirroring every line into `tracing`
//!
//! Run with: `cargo run -p execlog-core --example nested_calls_demo`

use std::thread;
use std::time::Duration;

use execlog_core::logging_facility::{init, Profile};
use execlog_core::{ExecutionLogger, LoggerConfig, Result};

fn main() -> Result<()> {
    init(Profile::Development);

    let mut logger = ExecutionLogger::new("demo");
    process_order(&mut logger, 3)?;

    println!("=== default formatting ===");
    print!("{}", logger.get_log());

    let compact = LoggerConfig::from_toml_str(
        r#"
        tabulation_prefix = "  "
        enable_logger_name = false
        timestamp_format = "%H:%M:%S%.3f"
        "#,
    )?;
    let mut compact_logger = ExecutionLogger::with_config("compact", compact)?;
    process_order(&mut compact_logger, 1)?;
    let _ = validate(&mut compact_logger, 0);

    println!();
    println!("=== compact formatting ===");
    print!("{}", compact_logger.get_log());

    Ok(())
}

fn process_order(logger: &mut ExecutionLogger, items: u32) -> Result<()> {
    let mut scope = logger.scope("process_order");
    scope.log_method_step(format!("received order with {items} items"))?;

    for item in 0..items {
        reserve_item(&mut scope, item)?;
    }

    scope.log_named_method_step("payment", "charging card")?;
    thread::sleep(Duration::from_millis(5));
    scope.finish();
    Ok(())
}

fn reserve_item(logger: &mut ExecutionLogger, item: u32) -> Result<()> {
    let mut scope = logger.scope("reserve_item");
    thread::sleep(Duration::from_millis(2));
    scope.log_named_method_step("stock", format!("item {item} reserved"))?;
    Ok(())
}

fn validate(logger: &mut ExecutionLogger, items: u32) -> std::result::Result<(), String> {
    let mut scope = logger.scope("validate");
    if items == 0 {
        // The guard still writes the "ended" line on this early return
        return Err("empty order".to_string());
    }
    scope
        .log_method_step("order is valid")
        .map_err(|e| e.to_string())
}
