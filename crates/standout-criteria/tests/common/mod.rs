//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use geo_types::{point, Point};
use standout_criteria::{CriteriaEnum, Model};
use uuid::Uuid;

/// Bit flags describing a customer.
#[derive(Debug, Clone, Copy, PartialEq, CriteriaEnum)]
pub struct Tags(pub u8);

impl Tags {
    pub const VIP: Tags = Tags(1);
    pub const WHOLESALE: Tags = Tags(2);
    pub const EXPORT: Tags = Tags(4);
}

#[derive(Debug, Clone, Copy, PartialEq, CriteriaEnum)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
}

#[derive(Debug, Clone, Model)]
#[criteria(rename_all = "PascalCase")]
pub struct Payment {
    pub method: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Model)]
#[criteria(rename_all = "PascalCase")]
pub struct Order {
    pub id: u32,
    pub total: f64,
    pub placed_on: NaiveDate,
    #[criteria(nested)]
    pub payment: Option<Payment>,
}

#[derive(Debug, Clone, Model)]
#[criteria(rename_all = "PascalCase")]
pub struct Customer {
    pub id: u32,
    pub name: Option<String>,
    pub email: String,
    pub age: u8,
    pub external_id: Option<Uuid>,
    pub credit_limit: Option<u32>,
    pub tier: Tier,
    pub tags: Tags,
    pub location: Option<Point<f64>>,
    #[criteria(collection)]
    pub orders: Vec<Order>,
    #[criteria(skip)]
    pub notes: String,
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn order(id: u32, total: f64, placed_on: NaiveDate, method: Option<&str>) -> Order {
    Order {
        id,
        total,
        placed_on,
        payment: method.map(|method| Payment {
            method: method.to_string(),
            amount: total,
        }),
    }
}

/// Five customers covering nulls, flags, locations and orders.
pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: 1,
            name: Some("John Smith".into()),
            email: "john@example.com".into(),
            age: 41,
            external_id: Some(Uuid::from_u128(0x1)),
            credit_limit: Some(5000),
            tier: Tier::Gold,
            tags: Tags(Tags::VIP.0 | Tags::EXPORT.0),
            location: Some(point!(x: 2.0, y: 2.0)),
            orders: vec![
                order(10, 120.0, date(2024, 1, 15), Some("card")),
                order(11, 35.5, date(2024, 3, 2), None),
            ],
            notes: "prefers email".into(),
        },
        Customer {
            id: 2,
            name: Some("Joanna Reyes".into()),
            email: "joanna@example.org".into(),
            age: 17,
            external_id: None,
            credit_limit: None,
            tier: Tier::Bronze,
            tags: Tags(0),
            location: Some(point!(x: 8.0, y: 9.0)),
            orders: vec![],
            notes: String::new(),
        },
        Customer {
            id: 3,
            name: None,
            email: "anonymous@example.com".into(),
            age: 35,
            external_id: Some(Uuid::from_u128(0x3)),
            credit_limit: Some(1500),
            tier: Tier::Silver,
            tags: Tags::WHOLESALE,
            location: None,
            orders: vec![order(12, 980.0, date(2023, 11, 30), Some("wire"))],
            notes: String::new(),
        },
        Customer {
            id: 4,
            name: Some("   ".into()),
            email: "blank@example.com".into(),
            age: 29,
            external_id: None,
            credit_limit: Some(250),
            tier: Tier::Silver,
            tags: Tags::VIP,
            location: Some(point!(x: 25.0, y: 1.0)),
            orders: vec![order(13, 15.0, date(2024, 6, 1), Some("card"))],
            notes: String::new(),
        },
        Customer {
            id: 5,
            name: Some("Ada Lovelace".into()),
            email: "ada@example.com".into(),
            age: 36,
            external_id: Some(Uuid::from_u128(0x5)),
            credit_limit: None,
            tier: Tier::Gold,
            tags: Tags(Tags::VIP.0 | Tags::WHOLESALE.0),
            location: Some(point!(x: 5.0, y: 5.0)),
            orders: vec![order(14, 60.0, date(2024, 2, 20), Some("cash"))],
            notes: String::new(),
        },
    ]
}

pub fn ids(customers: &[&Customer]) -> Vec<u32> {
    customers.iter().map(|customer| customer.id).collect()
}
