#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;

use newtype_uuid::{GenericUuid, TypedUuid, TypedUuidKind, TypedUuidTag, impl_typed_uuid_kinds};
use serde::{Deserialize, Serialize};

impl_typed_uuid_kinds! {
    kinds = {
        Customer = {},
        Order = { tag = "order" },
    },
}

/// A kind declared with the derive macro instead.
#[derive(TypedUuidKind)]
#[typed_uuid_tag("line-item")]
enum LineItemKind {}

type LineItemUuid = TypedUuid<LineItemKind>;

#[derive(Debug, Serialize, Deserialize)]
struct Order {
    id: OrderUuid,
    customer: CustomerUuid,
    items: Vec<LineItemUuid>,
}

fn lookup_customer(customers: &BTreeMap<CustomerUuid, String>, id: CustomerUuid) -> &str {
    customers.get(&id).map_or("<unknown>", String::as_str)
}

/// Demonstrates typed UUIDs.
///
/// This example shows how to:
/// 1. Declare kinds with the macros
/// 2. Generate, print and parse typed UUIDs
/// 3. Convert between typed and untyped UUIDs
/// 4. Serialize typed UUIDs with serde
fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    println!("=== newtype_uuid Basic Usage Example ===\n");

    // 1. Kinds and tags
    println!("1. Kinds:");
    for (name, tag) in [
        ("CustomerKind", CustomerKind::tag()),
        ("OrderKind", OrderKind::tag()),
        ("LineItemKind", LineItemKind::tag()),
    ] {
        println!("   {name}: tag = {tag}");
    }
    println!(
        "   checked tag: {:?}",
        TypedUuidTag::try_new("9lives").map_err(|e| e.to_string())
    );

    // 2. Generating and parsing
    println!("\n2. Generating and parsing:");
    let customer = CustomerUuid::new_v4();
    let order = OrderUuid::new_v7();
    println!("   customer = {customer}");
    println!("   order (debug) = {order:?}");

    let parsed: CustomerUuid = customer.to_string().parse()?;
    println!("   parsed back equal: {}", parsed == customer);

    match "not-a-uuid".parse::<OrderUuid>() {
        Ok(id) => println!("   unexpectedly parsed {id}"),
        Err(e) => println!("   parse error: {e}"),
    }

    // 3. Typed and untyped
    println!("\n3. Typed and untyped:");
    let untyped = customer.into_untyped_uuid();
    log::debug!("untyped customer UUID: {untyped}");
    let retyped = CustomerUuid::from_untyped_uuid(untyped);
    println!("   round trip through Uuid keeps the value: {}", retyped == customer);

    let mut customers = BTreeMap::new();
    customers.insert(customer, "Ada".to_string());
    println!("   customer name: {}", lookup_customer(&customers, customer));
    println!("   nil customer: {}", lookup_customer(&customers, CustomerUuid::nil()));

    // 4. Serde
    println!("\n4. Serde:");
    let order = Order {
        id: order,
        customer,
        items: vec![LineItemUuid::new_v4(), LineItemUuid::new_v4()],
    };
    let json = serde_json::to_string_pretty(&order)?;
    println!("{json}");

    let back: Order = serde_json::from_str(&json)?;
    println!("   deserialized {} line items", back.items.len());

    Ok(())
}
