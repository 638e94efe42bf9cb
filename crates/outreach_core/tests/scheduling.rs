use outreach_core::{
    CommunicationMethod, CompanyId, FixedClock, NewCommunication, NewCommunicationMethod,
    NewCompany, TrackerConfig, TrackerService, DAY_MS,
};
use uuid::Uuid;

const T0: i64 = 1_700_000_000_000;

fn empty_config() -> TrackerConfig {
    TrackerConfig {
        seed_methods: Vec::new(),
        ..TrackerConfig::default()
    }
}

fn add_method(service: &mut TrackerService<FixedClock>, name: &str, sequence: u32) {
    service.add_communication_method(NewCommunicationMethod {
        name: name.to_string(),
        sequence: Some(sequence),
        ..NewCommunicationMethod::default()
    });
}

/// Smallest sequence strictly above `current`, else the last of the highest.
fn expected_method(methods: &[CommunicationMethod], current: u32) -> (String, u32) {
    let above = methods
        .iter()
        .filter(|method| method.sequence > current)
        .min_by_key(|method| method.sequence);
    let chosen = above.unwrap_or_else(|| {
        let max = methods.iter().map(|m| m.sequence).max().unwrap();
        methods.iter().filter(|m| m.sequence == max).last().unwrap()
    });
    (chosen.name.clone(), chosen.sequence)
}

fn log(service: &mut TrackerService<FixedClock>, company_id: CompanyId, timestamp: i64) -> u32 {
    service
        .add_communication(NewCommunication::new(company_id, "Email", timestamp))
        .unwrap()
        .sequence
}

#[test]
fn fresh_company_skips_first_method() {
    let mut service = TrackerService::new(&TrackerConfig::default(), FixedClock::new(T0));
    let company_id = service.add_company(NewCompany::named("Acme"));

    let next = service.next_scheduled(company_id).unwrap();

    assert_eq!(next.kind, "LinkedIn Message");
    assert_eq!(next.sequence, 2);
    assert_eq!(next.date, T0 + 14 * DAY_MS);
}

#[test]
fn next_scheduled_follows_logged_sequence() {
    let mut service = TrackerService::new(&TrackerConfig::default(), FixedClock::new(T0));
    let mut input = NewCompany::named("Acme");
    input.communication_periodicity = Some(10);
    let company_id = service.add_company(input);

    let expectations = [
        (1, "LinkedIn Message", 2),
        (2, "Email", 3),
        (3, "Phone Call", 4),
        (4, "Other", 5),
        (5, "Other", 5),
    ];
    for (day, (logged, name, sequence)) in expectations.into_iter().enumerate() {
        let timestamp = T0 + i64::try_from(day).unwrap() * DAY_MS;
        assert_eq!(log(&mut service, company_id, timestamp), logged);

        let next = service.next_scheduled(company_id).unwrap();
        assert_eq!(next.kind, name);
        assert_eq!(next.sequence, sequence);
        assert_eq!(next.date, timestamp + 10 * DAY_MS);
    }
}

#[test]
fn next_scheduled_matches_smallest_greater_sequence() {
    let mut service = TrackerService::new(&empty_config(), FixedClock::new(T0));
    add_method(&mut service, "nine", 9);
    add_method(&mut service, "two", 2);
    add_method(&mut service, "four-a", 4);
    add_method(&mut service, "four-b", 4);
    let company_id = service.add_company(NewCompany::named("Acme"));

    for round in 0..6 {
        log(&mut service, company_id, T0 + round * DAY_MS);
        let company = service.get_company_by_id(company_id).unwrap();
        let current = company.last_communication_sequence.max(1);
        let (name, sequence) = expected_method(service.communication_methods(), current);

        let next = service.next_scheduled(company_id).unwrap();
        assert_eq!((next.kind, next.sequence), (name, sequence), "round {round}");
    }
}

#[test]
fn next_scheduled_picks_first_of_tied_sequences() {
    let mut service = TrackerService::new(&empty_config(), FixedClock::new(T0));
    add_method(&mut service, "one", 1);
    add_method(&mut service, "tie-first", 3);
    add_method(&mut service, "tie-second", 3);
    let company_id = service.add_company(NewCompany::named("Acme"));

    let next = service.next_scheduled(company_id).unwrap();
    assert_eq!(next.kind, "tie-first");
}

#[test]
fn next_scheduled_is_none_for_unknown_company_or_no_methods() {
    let mut service = TrackerService::new(&empty_config(), FixedClock::new(T0));
    let company_id = service.add_company(NewCompany::named("Acme"));

    assert!(service.next_scheduled(Uuid::new_v4()).is_none());
    assert!(service.next_scheduled(company_id).is_none());
}

#[test]
fn next_scheduled_does_not_reorder_stored_methods() {
    let mut service = TrackerService::new(&empty_config(), FixedClock::new(T0));
    add_method(&mut service, "late", 5);
    add_method(&mut service, "early", 1);
    let company_id = service.add_company(NewCompany::named("Acme"));

    service.next_scheduled(company_id);
    log(&mut service, company_id, T0);

    let names: Vec<_> = service
        .communication_methods()
        .iter()
        .map(|method| method.name.as_str())
        .collect();
    assert_eq!(names, vec!["late", "early"]);
}
