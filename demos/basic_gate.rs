//! Basic license gate example.
//!
//! Validates the deployment license from environment configuration and
//! prints the gate decision a server would apply.
//!
//! # Running
//!
//! ```bash
//! export SITEWARDEN_LICENSE_KEY="your-license-key"
//! export SITEWARDEN_DOMAIN="example.com"
//! cargo run --example basic_gate
//! ```
//!
//! Without a key the gate blocks; with `SITEWARDEN_DEV_MODE=1` it always
//! forwards.

use sitewarden::{gate_request, GateDecision, LicenseManager, SitewardenConfig};

fn main() {
    let config = SitewardenConfig::from_env();

    let manager = match LicenseManager::new(config) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // One validation per request in a real server; the cache keeps this
    // to one remote call per hour.
    let outcome = manager.validate();

    println!("valid: {}", outcome.valid);
    if let Some(message) = &outcome.message {
        println!("message: {}", message);
    }
    if let (Some(count), Some(max)) = (outcome.deployment_count, outcome.max_deployments) {
        println!("deployments: {}/{}", count, max);
    }

    match gate_request(&outcome) {
        GateDecision::Forward => println!("gate: forward request"),
        GateDecision::Block(page) => {
            println!("gate: block with status {}", page.status);
            std::process::exit(1);
        }
    }
}
