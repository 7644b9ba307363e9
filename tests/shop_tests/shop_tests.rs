//! Tests for Shop
//!
//! These tests verify:
//! - Seeding (starter devices, empty, JSON file)
//! - Command routing to the inventory
//! - Report export to the configured path

use std::fs;

use stockroom::config::{Config, NamePolicy, Seed};
use stockroom::device::Device;
use stockroom::inventory::{DetailsUpdate, StockAction};
use stockroom::protocol::{Command, Reply, Response, NO_DEVICES};
use stockroom::report::ReportSummary;
use stockroom::{InventoryError, Shop};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_shop() -> (TempDir, Shop) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .report_path(temp_dir.path().join("inventory.txt"))
        .build();
    let shop = Shop::open(config).unwrap();
    (temp_dir, shop)
}

fn names(shop: &Shop) -> Vec<String> {
    shop.inventory()
        .devices()
        .map(|d| d.name().to_string())
        .collect()
}

// =============================================================================
// Seeding Tests
// =============================================================================

#[test]
fn test_open_with_starter_devices() {
    let (_temp, shop) = setup_temp_shop();

    assert_eq!(
        names(&shop),
        vec![
            "LG Oled",
            "Iphone 15",
            "Sony WH-CH520",
            "Dell G3 15",
            "Huawei Watch GT"
        ]
    );
    assert_eq!(shop.inventory().total_value(), 45500.0);
}

#[test]
fn test_open_empty() {
    let config = Config::builder().seed(Seed::Empty).build();
    let shop = Shop::open(config).unwrap();

    assert!(shop.inventory().is_empty());
    assert!(Shop::empty().inventory().is_empty());
}

#[test]
fn test_open_from_seed_file_skips_rejected_devices() {
    let temp_dir = TempDir::new().unwrap();
    let seed_path = temp_dir.path().join("seed.json");
    fs::write(
        &seed_path,
        r#"[
            {"category": "Laptop", "name": "ThinkPad", "price": 1100.0, "quantity": 2},
            {"category": "Tablet", "name": "iPad", "price": 500.0, "quantity": 1},
            {"category": "TV", "name": "thinkpad", "price": 10.0, "quantity": 1},
            {"category": "TV", "name": "Bravia", "price": 900.0, "quantity": 3}
        ]"#,
    )
    .unwrap();

    let config = Config::builder().seed(Seed::File(seed_path)).build();
    let shop = Shop::open(config).unwrap();

    assert_eq!(names(&shop), vec!["ThinkPad", "Bravia"]);
}

#[test]
fn test_open_from_seed_file_allowing_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    let seed_path = temp_dir.path().join("seed.json");
    fs::write(
        &seed_path,
        r#"[
            {"category": "Laptop", "name": "Twin", "price": 1.0, "quantity": 1},
            {"category": "TV", "name": "Twin", "price": 2.0, "quantity": 1}
        ]"#,
    )
    .unwrap();

    let config = Config::builder()
        .seed(Seed::File(seed_path))
        .name_policy(NamePolicy::AllowDuplicates)
        .build();
    let shop = Shop::open(config).unwrap();

    assert_eq!(shop.inventory().len(), 2);
}

#[test]
fn test_open_from_malformed_seed_file() {
    let temp_dir = TempDir::new().unwrap();
    let seed_path = temp_dir.path().join("seed.json");
    fs::write(&seed_path, "not json").unwrap();

    let config = Config::builder().seed(Seed::File(seed_path)).build();
    let result = Shop::open(config);

    assert!(matches!(result, Err(InventoryError::Seed(_))));
}

#[test]
fn test_open_from_missing_seed_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .seed(Seed::File(temp_dir.path().join("missing.json")))
        .build();

    assert!(matches!(Shop::open(config), Err(InventoryError::Io(_))));
}

#[test]
fn test_open_rejects_empty_report_path() {
    let config = Config::builder().report_path("").build();
    assert!(matches!(Shop::open(config), Err(InventoryError::Config(_))));
}

// =============================================================================
// Command Execution Tests
// =============================================================================

#[test]
fn test_execute_add_and_remove() {
    let (_temp, mut shop) = setup_temp_shop();

    let reply = shop
        .execute(Command::Add {
            device: Device::new("Headphones", "AirPods Max", 549.0, 4),
        })
        .unwrap();
    assert!(matches!(reply, Reply::Added(ref d) if d.name() == "AirPods Max"));
    assert_eq!(shop.inventory().len(), 6);

    let reply = shop
        .execute(Command::Remove {
            name: "airpods max".into(),
        })
        .unwrap();
    assert!(matches!(reply, Reply::Removed(ref d) if d.name() == "AirPods Max"));
    assert_eq!(shop.inventory().len(), 5);
}

#[test]
fn test_execute_add_rejected() {
    let (_temp, mut shop) = setup_temp_shop();

    let result = shop.execute(Command::Add {
        device: Device::new("Tablet", "iPad", 500.0, 1),
    });

    assert!(matches!(result, Err(InventoryError::CategoryRejected(_))));
    assert_eq!(shop.inventory().len(), 5);
}

#[test]
fn test_execute_update_and_restock() {
    let (_temp, mut shop) = setup_temp_shop();

    let reply = shop
        .execute(Command::Update {
            name: "Iphone 15".into(),
            update: DetailsUpdate::new(Some(750.0), None),
        })
        .unwrap();
    assert!(matches!(reply, Reply::Updated(ref d) if d.price() == 750.0 && d.quantity() == 5));

    let reply = shop
        .execute(Command::Restock {
            name: "Iphone 15".into(),
            delta: 5,
            action: StockAction::Remove,
        })
        .unwrap();
    assert!(matches!(reply, Reply::Restocked { quantity: 0, .. }));

    let result = shop.execute(Command::Restock {
        name: "Iphone 15".into(),
        delta: 1,
        action: StockAction::Remove,
    });
    assert!(matches!(result, Err(InventoryError::InsufficientStock { .. })));
}

#[test]
fn test_execute_queries() {
    let (_temp, mut shop) = setup_temp_shop();

    match shop.execute(Command::FindCheapest).unwrap() {
        Reply::Cheapest(Some(d)) => assert_eq!(d.name(), "Sony WH-CH520"),
        other => panic!("unexpected reply {:?}", other),
    }

    match shop.execute(Command::TotalValue).unwrap() {
        Reply::TotalValue(v) => assert_eq!(v, 45500.0),
        other => panic!("unexpected reply {:?}", other),
    }

    match shop.execute(Command::SortByPrice).unwrap() {
        Reply::Sorted(rows) => {
            let first = rows.lines().next().unwrap();
            assert_eq!(
                first,
                "1. Category: Headphones, Name: Sony WH-CH520, Price: 200.00$, Quantity: 20"
            );
        }
        other => panic!("unexpected reply {:?}", other),
    }

    match shop.execute(Command::List).unwrap() {
        Reply::Listing(rows) => {
            assert_eq!(rows.lines().count(), 5);
            assert!(rows.starts_with("1. Category: TV, Name: LG Oled"));
        }
        other => panic!("unexpected reply {:?}", other),
    }

    assert!(matches!(shop.execute(Command::Exit).unwrap(), Reply::Exit));
}

#[test]
fn test_queries_on_empty_shop() {
    let mut shop = Shop::empty();

    assert!(shop.inventory().list().is_empty());
    assert_eq!(shop.inventory().list().to_string(), "");

    let reply = shop.execute(Command::FindCheapest).unwrap();
    assert_eq!(Response::from(reply).message, NO_DEVICES);
}

// =============================================================================
// Export Tests
// =============================================================================

#[test]
fn test_export_writes_configured_path() {
    let (temp, mut shop) = setup_temp_shop();
    let report_path = temp.path().join("inventory.txt");

    let reply = shop.execute(Command::Export).unwrap();

    match reply {
        Reply::Exported { path, summary } => {
            assert_eq!(path, report_path);
            assert_eq!(summary.device_count, 5);
        }
        other => panic!("unexpected reply {:?}", other),
    }

    let text = fs::read_to_string(&report_path).unwrap();
    let parsed = ReportSummary::parse(&text).unwrap();
    assert_eq!(parsed.device_count, shop.inventory().len());
    assert_eq!(parsed.total_value, shop.inventory().total_value());
    assert!(text.contains("- Total Inventory Value: $45,500.00"));
}

#[test]
fn test_export_failure_leaves_inventory() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .report_path(temp_dir.path().join("no_such_dir").join("inventory.txt"))
        .build();
    let mut shop = Shop::open(config).unwrap();
    let before = shop.inventory().list().to_string();

    let result = shop.execute(Command::Export);

    assert!(matches!(result, Err(InventoryError::Io(_))));
    assert_eq!(shop.inventory().list().to_string(), before);
}
