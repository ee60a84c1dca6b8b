use super::common::*;
use crate::domain::EmploymentRecord;
use crate::lookup::LookupError;
use crate::probe::ObservationKind;
use crate::registry::FaultKind;

#[test]
fn freelance_records_come_before_employee_records() {
    let employment = StubEmploymentRegistry::with_records(vec![
        employment(1, organization("889640782")),
        employment(2, organization("995298775")),
    ])
    .history(1, vec![agreement("KOKK", "2018-01-01", None)])
    .history(2, vec![agreement("SNEKKER", "2018-01-01", None)]);
    let income = StubIncomeRegistry::with_records(vec![
        freelance(organization("974513277"), "BARNEPASSER"),
        freelance(organization("123456785"), "MUSIKER"),
    ]);
    let (service, _, _, _) = build_history_service(employment, income);

    let records = service
        .find_employment_history("12345678911", date(2019, 1, 15), date(2019, 6, 20))
        .expect("lookup succeeds");

    let summary: Vec<(&str, &str)> = records
        .iter()
        .map(|record| (record.kind(), record.employer().identifier()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Freelancer", "974513277"),
            ("Freelancer", "123456785"),
            ("Employee", "889640782"),
            ("Employee", "995298775"),
        ]
    );
}

#[test]
fn freelance_is_queried_by_month_and_employment_by_date() {
    let (service, employment, income, _) = build_history_service(
        StubEmploymentRegistry::default(),
        StubIncomeRegistry::default(),
    );

    let records = service
        .find_employment_history("12345678911", date(2019, 1, 15), date(2019, 6, 20))
        .expect("lookup succeeds");

    assert!(records.is_empty());
    assert_eq!(
        income.calls(),
        vec![("12345678911".to_string(), month(2019, 1), month(2019, 6))]
    );
    assert_eq!(
        employment.period_calls(),
        vec![(
            "12345678911".to_string(),
            date(2019, 1, 15),
            date(2019, 6, 20)
        )]
    );
}

#[test]
fn freelance_failure_short_circuits() {
    let (service, employment, _, _) = build_history_service(
        StubEmploymentRegistry::with_records(vec![employment(1, organization("889640782"))])
            .history(1, vec![agreement("KOKK", "2018-01-01", None)]),
        StubIncomeRegistry::failing(fault(FaultKind::FilterAccessDenied)),
    );

    let result = service.find_employment_history("12345678911", date(2019, 1, 1), date(2019, 2, 1));

    assert_eq!(
        result,
        Err(LookupError::UpstreamRejected(fault(
            FaultKind::FilterAccessDenied
        )))
    );
    assert!(employment.period_calls().is_empty());
    assert!(employment.history_calls().is_empty());
}

#[test]
fn employee_failure_discards_freelance_results() {
    let (service, _, income, sink) = build_history_service(
        StubEmploymentRegistry::with_records(vec![
            employment(1, organization("889640782")),
            employment(2, organization("995298775")),
        ])
        .history(1, vec![agreement("KOKK", "2018-01-01", None)])
        .history_fault(2, fault(FaultKind::Unexpected)),
        StubIncomeRegistry::with_records(vec![freelance(organization("974513277"), "KOKK")]),
    );

    let result = service.find_employment_history("12345678911", date(2019, 1, 1), date(2019, 2, 1));

    assert_eq!(
        result,
        Err(LookupError::UpstreamUnknown(fault(FaultKind::Unexpected)))
    );
    assert_eq!(income.calls().len(), 1);
    assert!(sink.histories().is_empty());
}

#[test]
fn combined_history_is_inspected_once() {
    let shared = organization("889640782");
    let (service, _, _, sink) = build_history_service(
        StubEmploymentRegistry::with_records(vec![employment(1, shared.clone())])
            .history(1, vec![agreement("KOKK", "2018-01-01", None)]),
        StubIncomeRegistry::with_records(vec![freelance(shared, "KOKK")]),
    );

    let records = service
        .find_employment_history("12345678911", date(2019, 1, 1), date(2019, 6, 30))
        .expect("lookup succeeds");

    assert_eq!(records.len(), 2);
    assert!(matches!(records[0], EmploymentRecord::Freelancer(_)));
    assert_eq!(sink.histories(), vec![2]);
    let kinds: Vec<ObservationKind> = sink
        .observations()
        .into_iter()
        .filter(|observation| observation.subject == "EmploymentHistory")
        .map(|observation| observation.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ObservationKind::RecordsAtSameEmployer,
            ObservationKind::SameEmployerSameOccupation,
        ]
    );
}
