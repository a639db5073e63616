//! Insurance agent API server.
//! Run with: cargo run --bin insurance-agent-server

use std::process::ExitCode;

use insurance_agent::start_insurance_agent;

fn main() -> ExitCode {
    start_insurance_agent::run()
}
