use outreach_core::{
    CompanyPatch, FixedClock, MethodPatch, NewCommunicationMethod, NewCompany, TrackerConfig,
    TrackerService,
};
use uuid::Uuid;

const T0: i64 = 1_700_000_000_000;

#[test]
fn add_company_assigns_identity_and_defaults() {
    let clock = FixedClock::new(T0);
    let mut service = TrackerService::new(&TrackerConfig::default(), &clock);

    let id = service.add_company(NewCompany::named("Acme"));
    let company = service.get_company_by_id(id).unwrap();

    assert!(!company.id.is_nil());
    assert_eq!(company.name, "Acme");
    assert_eq!(company.emails, vec![String::new()]);
    assert_eq!(company.phone_numbers, vec![String::new()]);
    assert_eq!(company.communication_periodicity, 14);
    assert_eq!(company.created_at, T0);
    assert_eq!(company.last_communication_date, Some(T0));
    assert_eq!(company.last_communication_sequence, 0);
}

#[test]
fn add_company_keeps_supplied_fields() {
    let clock = FixedClock::new(T0);
    let mut service = TrackerService::new(&TrackerConfig::default(), &clock);

    let id = service.add_company(NewCompany {
        name: "Globex".to_string(),
        location: "Springfield".to_string(),
        linkedin_profile: "https://linkedin.example/globex".to_string(),
        emails: Some(vec!["a@globex.test".to_string(), "b@globex.test".to_string()]),
        phone_numbers: Some(Vec::new()),
        comments: "warm lead".to_string(),
        communication_periodicity: Some(30),
    });
    let company = service.get_company_by_id(id).unwrap();

    assert_eq!(company.location, "Springfield");
    assert_eq!(company.emails.len(), 2);
    assert!(company.phone_numbers.is_empty());
    assert_eq!(company.communication_periodicity, 30);
}

#[test]
fn add_company_uses_configured_default_periodicity() {
    let config = TrackerConfig {
        default_periodicity_days: 21,
        ..TrackerConfig::default()
    };
    let mut service = TrackerService::new(&config, FixedClock::new(T0));

    let id = service.add_company(NewCompany::named("Initech"));
    assert_eq!(
        service.get_company_by_id(id).unwrap().communication_periodicity,
        21
    );
}

#[test]
fn update_company_merges_only_supplied_fields() {
    let clock = FixedClock::new(T0);
    let mut service = TrackerService::new(&TrackerConfig::default(), &clock);
    let id = service.add_company(NewCompany::named("Acme"));

    let mut patch = CompanyPatch::for_company(id);
    patch.location = Some("Berlin".to_string());
    patch.communication_periodicity = Some(7);
    assert!(service.update_company(patch));

    let company = service.get_company_by_id(id).unwrap();
    assert_eq!(company.name, "Acme");
    assert_eq!(company.location, "Berlin");
    assert_eq!(company.communication_periodicity, 7);
    assert_eq!(company.created_at, T0);
}

#[test]
fn update_company_twice_is_idempotent() {
    let clock = FixedClock::new(T0);
    let mut service = TrackerService::new(&TrackerConfig::default(), &clock);
    let id = service.add_company(NewCompany::named("Acme"));

    let mut patch = CompanyPatch::for_company(id);
    patch.name = Some("Acme Corp".to_string());
    patch.emails = Some(vec!["hello@acme.test".to_string()]);

    service.update_company(patch.clone());
    let first = service.get_company_by_id(id).unwrap().clone();
    clock.advance(1_000);
    service.update_company(patch);
    let second = service.get_company_by_id(id).unwrap().clone();

    assert_eq!(first, second);
}

#[test]
fn update_and_delete_unknown_company_are_noops() {
    let mut service = TrackerService::new(&TrackerConfig::default(), FixedClock::new(T0));
    service.add_company(NewCompany::named("Acme"));
    let before = service.state().clone();

    let mut patch = CompanyPatch::for_company(Uuid::new_v4());
    patch.name = Some("ghost".to_string());
    assert!(!service.update_company(patch));
    assert!(!service.delete_company(Uuid::new_v4()));

    assert_eq!(service.state(), &before);
}

#[test]
fn delete_company_removes_only_that_company() {
    let mut service = TrackerService::new(&TrackerConfig::default(), FixedClock::new(T0));
    let keep = service.add_company(NewCompany::named("Keep"));
    let removed = service.add_company(NewCompany::named("Drop"));

    assert!(service.delete_company(removed));
    assert!(service.get_company_by_id(removed).is_none());
    assert!(service.get_company_by_id(keep).is_some());
    assert!(!service.delete_company(removed));
}

#[test]
fn communication_methods_can_be_added_updated_and_deleted() {
    let mut service = TrackerService::new(&TrackerConfig::default(), FixedClock::new(T0));
    assert_eq!(service.communication_methods().len(), 5);

    let visit = service.add_communication_method(NewCommunicationMethod {
        name: "Site Visit".to_string(),
        description: "Visit the office".to_string(),
        ..NewCommunicationMethod::default()
    });
    let added = service.state().method(visit).unwrap();
    assert_eq!(added.sequence, 6);
    assert!(!added.is_mandatory);

    let mut patch = MethodPatch::for_method(visit);
    patch.is_mandatory = Some(true);
    patch.sequence = Some(10);
    assert!(service.update_communication_method(patch));
    let updated = service.state().method(visit).unwrap();
    assert!(updated.is_mandatory);
    assert_eq!(updated.sequence, 10);
    assert_eq!(updated.name, "Site Visit");

    assert!(service.delete_communication_method(visit));
    assert!(service.state().method(visit).is_none());
    assert!(!service.delete_communication_method(visit));
    assert!(!service.update_communication_method(MethodPatch::for_method(visit)));
}
