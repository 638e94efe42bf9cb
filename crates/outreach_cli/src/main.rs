//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `outreach_core` linkage without any presentation layer.
//! - Walk the default seed through one scheduling round with fixed time so
//!   the output stays deterministic.

use outreach_core::{FixedClock, NewCommunication, NewCompany, TrackerConfig, TrackerService};

const DEMO_START_MS: i64 = 1_700_000_000_000;

fn main() {
    println!("outreach_core ping={}", outreach_core::ping());
    println!("outreach_core version={}", outreach_core::core_version());

    let mut service = TrackerService::new(&TrackerConfig::default(), FixedClock::new(DEMO_START_MS));
    for method in service.communication_methods() {
        println!("method sequence={} name={}", method.sequence, method.name);
    }

    let company_id = service.add_company(NewCompany::named("Demo Co"));
    print_next(&service, company_id);

    match service.add_communication(NewCommunication::new(company_id, "Email", DEMO_START_MS)) {
        Ok(logged) => println!("logged type={} sequence={}", logged.kind, logged.sequence),
        Err(err) => println!("log failed error={err}"),
    }
    print_next(&service, company_id);
}

fn print_next(service: &TrackerService<FixedClock>, company_id: outreach_core::CompanyId) {
    match service.next_scheduled(company_id) {
        Some(next) => println!(
            "next type={} sequence={} due_ms={}",
            next.kind, next.sequence, next.date
        ),
        None => println!("next none"),
    }
}
