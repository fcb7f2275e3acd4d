use chrono::NaiveDate;
use washbook_core::{Money, NewAppointment, ServiceStatus, ValidationError};
use washbook_query::{dates_with_appointments, filter_by_date, summarize_by_status, DailySummary};
use washbook_store::{AppointmentStore, PersistenceError, StoreError};

fn make_test_store() -> (tempfile::TempDir, AppointmentStore) {
    let tmp = tempfile::tempdir().unwrap();
    let store = AppointmentStore::init(tmp.path()).unwrap();
    (tmp, store)
}

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

fn booking(client: &str, price: &str, date: NaiveDate) -> NewAppointment {
    NewAppointment {
        client_name: client.to_string(),
        vehicle_model: "HB20".to_string(),
        plate: "QWE4R56".to_string(),
        contact: Some("(21) 98888-7777".to_string()),
        service_description: "Lavagem completa".to_string(),
        price: Money::from_input(price).unwrap(),
        entry_date: date,
    }
}

fn summary(to_receive: u64, received: u64, denied: u64) -> DailySummary {
    DailySummary {
        to_receive: Money::from_minor(to_receive),
        received: Money::from_minor(received),
        denied: Money::from_minor(denied),
    }
}

// === R$ 50,00 booking walked through to cancelled ===
#[test]
fn test_single_booking_lifecycle() {
    let (_tmp, mut store) = make_test_store();

    let a = store.create(booking("Ana", "5000", june(1))).unwrap();
    assert_eq!(a.price.format_brl(), "R$ 50,00");
    assert_eq!(a.status, ServiceStatus::ToDo);

    let day = filter_by_date(store.appointments(), june(1));
    assert_eq!(day, vec![&a]);
    assert_eq!(summarize_by_status(day), summary(5000, 0, 0));

    for _ in 0..3 {
        store.advance_status(&a.id).unwrap();
    }
    assert_eq!(store.get(&a.id).unwrap().status, ServiceStatus::Cancelled);
    let day = filter_by_date(store.appointments(), june(1));
    assert_eq!(summarize_by_status(day), summary(0, 0, 5000));

    // The cycle wraps: one more advance un-cancels.
    let back = store.advance_status(&a.id).unwrap();
    assert_eq!(back.status, ServiceStatus::ToDo);
}

// === Empty store ===
#[test]
fn test_empty_store_loads_empty() {
    let (_tmp, store) = make_test_store();
    let report = store.load_all();
    assert!(report.appointments.is_empty());
    assert!(report.error.is_none());
}

// === Rejected booking leaves the book untouched ===
#[test]
fn test_empty_client_name_is_rejected() {
    let (tmp, mut store) = make_test_store();
    store.create(booking("Ana", "5000", june(1))).unwrap();

    let err = store.create(booking("", "3000", june(1))).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::EmptyField("client_name"))
    ));
    assert_eq!(store.len(), 1);

    let reopened = AppointmentStore::open(tmp.path()).unwrap();
    assert_eq!(reopened.len(), 1);
}

// === Everything written is read back by a new process ===
#[test]
fn test_persistence_roundtrip_across_reopen() {
    let (tmp, mut store) = make_test_store();
    let a = store.create(booking("Ana", "5000", june(1))).unwrap();
    let b = store.create(booking("Bia", "80,00", june(1))).unwrap();
    let c = store.create(booking("Caio", "R$ 120,00", june(3))).unwrap();
    store.advance_status(&b.id).unwrap();
    store.advance_status(&c.id).unwrap();
    store.advance_status(&c.id).unwrap();

    let reopened = AppointmentStore::open(tmp.path()).unwrap();
    let mut expected = store.snapshot();
    let mut actual = reopened.load_all().appointments;
    expected.sort_by_key(|x| x.id);
    actual.sort_by_key(|x| x.id);
    assert_eq!(actual, expected);
    assert_eq!(reopened.get(&a.id).unwrap().status, ServiceStatus::ToDo);
    assert_eq!(reopened.get(&b.id).unwrap().status, ServiceStatus::Done);
    assert_eq!(reopened.get(&c.id).unwrap().status, ServiceStatus::ToBill);
}

// === A day with every status ===
#[test]
fn test_daily_summary_and_calendar() {
    let (_tmp, mut store) = make_test_store();
    let todo = store.create(booking("Ana", "5000", june(1))).unwrap();
    let done = store.create(booking("Bia", "3000", june(1))).unwrap();
    let bill = store.create(booking("Caio", "2000", june(1))).unwrap();
    let cancelled = store.create(booking("Duda", "1000", june(1))).unwrap();
    store.create(booking("Edu", "9900", june(2))).unwrap();

    store.advance_status(&done.id).unwrap();
    for _ in 0..2 {
        store.advance_status(&bill.id).unwrap();
    }
    for _ in 0..3 {
        store.advance_status(&cancelled.id).unwrap();
    }
    assert_eq!(store.get(&todo.id).unwrap().status, ServiceStatus::ToDo);

    let day = filter_by_date(store.appointments(), june(1));
    assert_eq!(day.len(), 4);
    let totals = summarize_by_status(day);
    assert_eq!(totals, summary(7000, 3000, 1000));
    assert_eq!(totals.total(), Money::from_minor(11000));

    let marks = dates_with_appointments(store.appointments(), june(2));
    assert_eq!(marks.len(), 2);
    assert!(marks[&june(2)].selected);
    assert!(!marks[&june(1)].selected);
    assert!(marks.values().all(|m| m.marked));
}

// === A damaged blob never takes the store down ===
#[test]
fn test_corrupted_blob_recovery() {
    let (tmp, mut store) = make_test_store();
    store.create(booking("Ana", "5000", june(1))).unwrap();
    let blob = tmp.path().join(".washbook/kv/clientes.json");
    std::fs::write(&blob, b"{\"schema_version\": 1, \"appointments\": [").unwrap();

    let mut reopened = AppointmentStore::open(tmp.path()).unwrap();
    assert!(reopened.is_empty());
    let report = reopened.load_all();
    assert!(report.appointments.is_empty());
    assert!(matches!(report.error, Some(PersistenceError::Corrupt(_))));

    reopened.create(booking("Bia", "3000", june(1))).unwrap();
    assert!(tmp.path().join(".washbook/kv/clientes.corrupt.json").exists());
    assert_eq!(reopened.load_all().appointments.len(), 1);
}

// === Blob is versioned JSON with integer centavos ===
#[test]
fn test_blob_layout() {
    let (tmp, mut store) = make_test_store();
    store.create(booking("Ana", "50,00", june(1))).unwrap();

    let raw = std::fs::read(tmp.path().join(".washbook/kv/clientes.json")).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(value["schema_version"], 1);
    let record = &value["appointments"][0];
    assert_eq!(record["price"], 5000);
    assert_eq!(record["entry_date"], "2024-06-01");
    assert_eq!(record["status"], "toDo");
    assert_eq!(record["client_name"], "Ana");
}

// === Unknown id ===
#[test]
fn test_advance_unknown_id() {
    let (_tmp, mut store) = make_test_store();
    let a = store.create(booking("Ana", "5000", june(1))).unwrap();
    let other = washbook_core::AppointmentId::new();
    assert!(matches!(
        store.advance_status(&other),
        Err(StoreError::NotFound(_))
    ));
    assert_eq!(store.get(&a.id).unwrap().status, ServiceStatus::ToDo);
}

// === Bookings made in the same millisecond keep their order ===
#[test]
fn test_back_to_back_bookings_keep_creation_order() {
    let (tmp, mut store) = make_test_store();
    let names: Vec<String> = (0..30).map(|i| format!("Cliente {i:02}")).collect();
    for name in &names {
        store.create(booking(name, "1000", june(3))).unwrap();
    }

    let listed: Vec<_> = filter_by_date(store.appointments(), june(3))
        .iter()
        .map(|a| a.client_name.clone())
        .collect();
    assert_eq!(listed, names);

    let reopened = AppointmentStore::open(tmp.path()).unwrap();
    let listed: Vec<_> = filter_by_date(reopened.appointments(), june(3))
        .iter()
        .map(|a| a.client_name.clone())
        .collect();
    assert_eq!(listed, names);
}

// === Two handles on one book do not lose each other's writes ===
#[test]
fn test_two_handles_share_one_book() {
    let (tmp, mut first) = make_test_store();
    let mut second = AppointmentStore::open(tmp.path()).unwrap();

    first.create(booking("Ana", "5000", june(1))).unwrap();
    second.create(booking("Bia", "3000", june(1))).unwrap();
    first.create(booking("Caio", "2000", june(1))).unwrap();

    let reopened = AppointmentStore::open(tmp.path()).unwrap();
    let names: Vec<_> = reopened
        .appointments()
        .iter()
        .map(|a| a.client_name.as_str())
        .collect();
    assert_eq!(names, ["Ana", "Bia", "Caio"]);
    assert_eq!(
        summarize_by_status(filter_by_date(reopened.appointments(), june(1))),
        summary(10000, 0, 0)
    );
}

// === A book written by a newer version is left alone ===
#[test]
fn test_newer_schema_is_not_overwritten() {
    let (tmp, store) = make_test_store();
    drop(store);
    let blob = tmp.path().join(".washbook/kv/clientes.json");
    let newer = br#"{"schema_version": 7, "appointments": []}"#;
    std::fs::write(&blob, newer).unwrap();

    let mut reopened = AppointmentStore::open(tmp.path()).unwrap();
    assert!(matches!(
        reopened.load_error(),
        Some(PersistenceError::UnsupportedVersion { found: 7, .. })
    ));
    assert!(matches!(
        reopened.create(booking("Ana", "5000", june(1))),
        Err(StoreError::Persistence(PersistenceError::UnsupportedVersion { .. }))
    ));
    assert_eq!(std::fs::read(&blob).unwrap(), newer.to_vec());
    assert!(!tmp.path().join(".washbook/kv/clientes.corrupt.json").exists());
}

// === Prices are bounded so a day's totals never overflow ===
#[test]
fn test_price_ceiling() {
    let (_tmp, mut store) = make_test_store();
    assert!(matches!(
        Money::from_input("18446744073709551615"),
        Err(ValidationError::InvalidPrice(_))
    ));

    store.create(booking("Ana", "99999999999", june(1))).unwrap();
    store.create(booking("Bia", "99999999999", june(1))).unwrap();
    let day = summarize_by_status(filter_by_date(store.appointments(), june(1)));
    assert_eq!(day.to_receive, Money::from_minor(2 * 99_999_999_999));
}
