use std::path::Path;

use balance_chart::ChartError;
use balance_chart::dashboard::{
    BankData, HomeScreenModel, Navigation, RecipientSlot, Screen, TransactionIcon,
    format_currency,
};

fn fixture() -> BankData {
    BankData::from_json_path(Path::new("tests/fixtures/sample_data.json")).expect("fixture")
}

#[test]
fn fixture_decodes_with_optional_recipient_fields() {
    let data = fixture();

    assert_eq!(data.recipients.len(), 7);
    assert_eq!(data.transactions.len(), 4);
    assert!(!data.recipients[5].is_online);
    assert!(data.recipients[6].image_url.is_empty());
}

#[test]
fn home_model_formats_balance_and_amounts() {
    let home = HomeScreenModel::from_bank_data(&fixture()).expect("home model");

    assert_eq!(home.balance_text, "$24,562.75");
    let amounts: Vec<_> = home
        .transactions
        .iter()
        .map(|row| row.amount_text.as_str())
        .collect();
    assert_eq!(amounts, vec!["-$64.30", "+$4,200.00", "-$128.45", "+$89.99"]);
}

#[test]
fn home_model_maps_icons_with_cart_fallback() {
    let home = HomeScreenModel::from_bank_data(&fixture()).expect("home model");
    let icons: Vec<_> = home.transactions.iter().map(|row| row.icon).collect();

    assert_eq!(
        icons,
        vec![
            TransactionIcon::Restaurant,
            TransactionIcon::AccountBalance,
            TransactionIcon::ShoppingCart,
            TransactionIcon::ShoppingCart,
        ]
    );
    assert_eq!(home.transactions[1].title, "Salary");
}

#[test]
fn recipient_strip_collapses_overflow_into_fifth_slot() {
    let home = HomeScreenModel::from_bank_data(&fixture()).expect("home model");
    let strip = &home.recipients;

    assert_eq!(strip.slots.len(), 5);
    assert!(strip.has_overflow());
    match &strip.slots[4] {
        RecipientSlot::Overflow {
            name, remaining, ..
        } => {
            assert_eq!(name, "Casey");
            assert_eq!(*remaining, 3);
        }
        other => panic!("expected overflow slot, got {other:?}"),
    }
    assert_eq!(strip.slots[4].badge_text().as_deref(), Some("3+"));
    assert_eq!(strip.all.len(), 7);
}

#[test]
fn exactly_five_recipients_still_use_overflow_slot() {
    let mut data = fixture();
    data.recipients.truncate(5);
    let home = HomeScreenModel::from_bank_data(&data).expect("home model");

    assert_eq!(home.recipients.slots[4].badge_text().as_deref(), Some("1+"));
}

#[test]
fn missing_field_is_a_json_error() {
    let err = BankData::from_json_str(r#"{ "balance": 1.0, "recipients": [] }"#)
        .expect_err("transactions missing");

    assert!(matches!(err, ChartError::Json(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = BankData::from_json_path(Path::new("tests/fixtures/does_not_exist.json"))
        .expect_err("missing file");

    assert!(matches!(err, ChartError::Io(_)));
}

#[test]
fn currency_rounds_half_cents_to_even() {
    assert_eq!(format_currency(0.125).expect("format"), "$0.12");
    assert_eq!(format_currency(1_000.0).expect("format"), "$1,000.00");
}

#[test]
fn navigation_switches_between_screens() {
    let mut navigation = Navigation::default();
    assert_eq!(navigation.selected(), Screen::Home);

    assert!(navigation.select(Screen::Profile));
    let labels: Vec<_> = navigation
        .nav_items()
        .iter()
        .filter(|item| item.selected)
        .map(|item| item.label)
        .collect();
    assert_eq!(labels, vec!["Profile"]);
}
