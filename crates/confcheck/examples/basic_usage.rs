//! Basic usage example for nebula-confcheck

use nebula_confcheck::prelude::*;
use serde_json::json;

fn main() {
    // Declare the shape of the configuration
    let config = object(schema! {
        "watch" => anymatch(),
        "port" => int().default(8080),
        "mode" => one_of(["fast", "safe"]).default("safe"),
        "polling" => deprecated(bool(), Some("use `mode`")),
    });

    // A valid document with a typo and a deprecated key
    let mut value = Value::from(json!({"watch": ["src/"], "polling": true, "prot": 80}));
    let outcome = config.validate(&mut value);
    println!("valid: {}", outcome.is_ok());
    println!("{}", Report::collect(&outcome, "config"));
    println!("with defaults: {}", value.to_json());

    // An invalid document
    let mut value = Value::from(json!({"watch": 42, "mode": "turbo"}));
    let outcome = config.validate(&mut value);
    if let Some(report) = format_report(&outcome, "config") {
        println!("\n{report}");
    }
}
