//! Snapshot tests for the text of compiled expressions.

mod common;

use common::{date, Customer, Tags, Tier};
use insta::assert_snapshot;
use standout_criteria::{CriteriaBuilder, CriteriaExpression};

fn render(expression: &CriteriaExpression) -> String {
    CriteriaBuilder::new()
        .build::<Customer>(expression)
        .unwrap()
        .to_string()
}

#[test]
fn nullable_equal() {
    let expression = CriteriaExpression::new().equal("Name", "value").unwrap();
    assert_snapshot!(render(&expression), @r#"((x.Name != null) && (x.Name == "value"))"#);
}

#[test]
fn non_nullable_equal() {
    let expression = CriteriaExpression::new().equal("Age", 1u8).unwrap();
    assert_snapshot!(render(&expression), @"(x.Age == 1)");
}

#[test]
fn plain_string_equal_is_unguarded() {
    let expression = CriteriaExpression::new()
        .equal("Email", "ada@example.com")
        .unwrap();
    assert_snapshot!(render(&expression), @r#"(x.Email == "ada@example.com")"#);
}

#[test]
fn nullable_not_equal() {
    let expression = CriteriaExpression::new().not_equal("Name", "value").unwrap();
    assert_snapshot!(render(&expression), @r#"((x.Name == null) || (x.Name != "value"))"#);
}

#[test]
fn nullable_between() {
    let expression = CriteriaExpression::new()
        .between("CreditLimit", 1000u32, 5000u32)
        .unwrap();
    assert_snapshot!(
        render(&expression),
        @"((x.CreditLimit != null) && ((x.CreditLimit >= 1000) && (x.CreditLimit <= 5000)))"
    );
}

#[test]
fn nullable_greater_than() {
    let expression = CriteriaExpression::new()
        .greater_than("CreditLimit", 250u32)
        .unwrap();
    assert_snapshot!(
        render(&expression),
        @"((x.CreditLimit != null) && (x.CreditLimit > 250))"
    );
}

#[test]
fn nullable_not_contains() {
    let expression = CriteriaExpression::new().not_contains("Name", "o").unwrap();
    assert_snapshot!(
        render(&expression),
        @r#"((x.Name != null) && !x.Name.contains("o"))"#
    );
}

#[test]
fn white_space_checks() {
    let expression = CriteriaExpression::new()
        .is_null_or_white_space("Name")
        .unwrap()
        .is_not_empty("Email")
        .unwrap();
    assert_snapshot!(
        render(&expression),
        @r#"(((x.Name == null) || (x.Name.trim() == "")) && (x.Email != ""))"#
    );
}

#[test]
fn collection_any_over_nested_path() {
    let expression = CriteriaExpression::new()
        .equal("Orders[Payment.Method]", "card")
        .unwrap();
    assert_snapshot!(
        render(&expression),
        @r#"x.Orders.any(|i| ((i.Payment.Method != null) && (i.Payment.Method == "card")))"#
    );
}

#[test]
fn collection_between_dates() {
    let expression = CriteriaExpression::new()
        .between("Orders[PlacedOn]", date(2024, 1, 1), date(2024, 2, 28))
        .unwrap();
    assert_snapshot!(
        render(&expression),
        @"x.Orders.any(|i| ((i.PlacedOn >= 2024-01-01) && (i.PlacedOn <= 2024-02-28)))"
    );
}

#[test]
fn flags_and_enum_lists() {
    let expression = CriteriaExpression::new()
        .contains("Tags", Tags::VIP)
        .unwrap()
        .or()
        .not_in("Tier", vec![Tier::Bronze])
        .unwrap();
    assert_snapshot!(
        render(&expression),
        @"(((bits(x.Tags) | bits(1)) == bits(1)) || ![0].contains(x.Tier))"
    );
}

#[test]
fn text_list_membership() {
    let expression = CriteriaExpression::new()
        .is_in("Email", ["a@example.com", "b@example.com"])
        .unwrap();
    assert_snapshot!(
        render(&expression),
        @r#"["a@example.com", "b@example.com"].contains(x.Email)"#
    );
}

#[test]
fn connectors_fold_left() {
    let expression = CriteriaExpression::new()
        .less_than("Age", 18u8)
        .unwrap()
        .or()
        .greater_than("Age", 65u8)
        .unwrap()
        .starts_with("Email", "j")
        .unwrap();
    assert_snapshot!(
        render(&expression),
        @r#"(((x.Age < 18) || (x.Age > 65)) && ((x.Email != null) && x.Email.starts_with("j")))"#
    );
}
