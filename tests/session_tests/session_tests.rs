//! Tests for the interactive session
//!
//! These tests verify:
//! - Menu rendering and choice dispatch
//! - Prompt sequences and pre-checks (category, duplicate, existence)
//! - Invalid input returns to the menu without touching the store
//! - End of input ends the session cleanly

use std::io::Cursor;

use stockroom::config::{Config, Seed};
use stockroom::console::{render_menu, Session};
use stockroom::Shop;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

/// Run a scripted session against the starter inventory
fn run_script(script: &str) -> (Shop, String) {
    let config = Config::builder()
        .report_path(std::env::temp_dir().join("stockroom-session-unused.txt"))
        .build();
    run_with(Shop::open(config).unwrap(), script)
}

fn run_with(shop: Shop, script: &str) -> (Shop, String) {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut session = Session::new(shop, input, Vec::new());
    session.run().unwrap();
    let (shop, output) = session.into_parts();
    (shop, String::from_utf8(output).unwrap())
}

// =============================================================================
// Menu Tests
// =============================================================================

#[test]
fn test_menu_text() {
    let menu = render_menu();

    assert!(menu.starts_with("Welcome to the Electronics Inventory Management System!\n"));
    assert!(menu.contains("1. Add a new device\n"));
    assert!(menu.contains("7. Calculate total inventory value\n"));
    assert!(menu.ends_with("9. Export inventory report\n0. Exit\n"));
}

#[test]
fn test_exit_immediately() {
    let (shop, output) = run_script("0\n");

    assert!(output.contains("Enter your choice: "));
    assert!(output.contains("Exiting..."));
    assert_eq!(shop.inventory().len(), 5);
}

#[test]
fn test_end_of_input_ends_session() {
    let (_shop, output) = run_script("");
    assert!(output.ends_with("Enter your choice: "));
}

#[test]
fn test_end_of_input_mid_prompt() {
    let (shop, output) = run_script("1\nLaptop\n");

    assert!(output.ends_with("Enter device name: "));
    assert_eq!(shop.inventory().len(), 5);
}

#[test]
fn test_invalid_choice_returns_to_menu() {
    let (_shop, output) = run_script("42\n0\n");

    assert!(output.contains("Invalid choice. Please enter a number between 0 and 9."));
    assert!(output.contains("Exiting..."));
    assert_eq!(output.matches("Please select an option:").count(), 2);
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_device() {
    let (shop, output) = run_script("1\nHeadphones\nAirPods Max\n549$\n4\n0\n");

    assert!(output.contains("Headphones, AirPods Max, 549.00$, 4 amount added..."));
    let added = shop.inventory().get("AirPods Max").unwrap();
    assert_eq!(added.category(), "Headphones");
    assert_eq!(added.price(), 549.0);
    assert_eq!(added.quantity(), 4);
}

#[test]
fn test_add_rejects_category_before_asking_name() {
    let (shop, output) = run_script("1\nTablet\n0\n");

    assert!(output.contains("Category 'Tablet' is not allowed."));
    assert!(output.contains("Allowed categories: [Headphones, TV, Smart Phone, Laptop, Smart Watch]"));
    assert!(!output.contains("Enter device name: "));
    assert_eq!(shop.inventory().len(), 5);
}

#[test]
fn test_add_rejects_existing_name_before_asking_price() {
    let (shop, output) = run_script("1\nTV\nlg oled\n0\n");

    assert!(output.contains("A device with name 'lg oled' already exists."));
    assert!(!output.contains("Enter price"));
    assert_eq!(shop.inventory().len(), 5);
}

#[test]
fn test_add_invalid_price() {
    let (shop, output) = run_script("1\nTV\nBravia\nfree\n0\n");

    assert!(output.contains("Invalid price format."));
    assert!(!shop.inventory().exists("Bravia"));
}

#[test]
fn test_add_invalid_quantity() {
    let (shop, output) = run_script("1\nTV\nBravia\n900\nsome\n0\n");

    assert!(output.contains("Invalid quantity format. Please enter a numeric quantity."));
    assert!(!shop.inventory().exists("Bravia"));
}

// =============================================================================
// Remove / Update Tests
// =============================================================================

#[test]
fn test_remove_device() {
    let (shop, output) = run_script("2\nDELL G3 15\n2\nDell G3 15\n0\n");

    // Confirmation uses the stored name, not the typed one
    assert!(output.contains("Device Dell G3 15 removed."));
    assert!(output.contains("Device Dell G3 15 not found."));
    assert_eq!(shop.inventory().len(), 4);
}

#[test]
fn test_remove_ignores_surrounding_whitespace() {
    let (shop, output) = run_script("2\n  LG Oled \t\n0\n");

    assert!(output.contains("Device LG Oled removed."));
    assert!(!shop.inventory().exists("LG Oled"));
}

#[test]
fn test_update_keeps_blank_fields() {
    let (shop, output) = run_script("3\nIphone 15\n\n7\n0\n");

    assert!(output.contains("Iphone 15 details updated: Price - 800.00$, Quantity - 7"));
    let phone = shop.inventory().get("Iphone 15").unwrap();
    assert_eq!(phone.price(), 800.0);
    assert_eq!(phone.quantity(), 7);
}

#[test]
fn test_update_unknown_device_skips_prompts() {
    let (_shop, output) = run_script("3\nGhost\n0\n");

    assert!(output.contains("Device Ghost not found."));
    assert!(!output.contains("Enter new price"));
}

// =============================================================================
// Query Tests
// =============================================================================

#[test]
fn test_list_cheapest_sort_total() {
    let (_shop, output) = run_script("4\n5\n6\n7\n0\n");

    assert!(output.contains(
        "Device List:\n1. Category: TV, Name: LG Oled, Price: 1200.00$, Quantity: 10\n"
    ));
    assert!(output.contains(
        "The cheapest device is:\nCategory: Headphones, Name: Sony WH-CH520, Price: 200.00$, Quantity: 20\n"
    ));
    assert!(output.contains(
        "Devices sorted by price:\n1. Category: Headphones, Name: Sony WH-CH520"
    ));
    assert!(output.contains("5. Category: Laptop, Name: Dell G3 15, Price: 1500.00$, Quantity: 15\n"));
    assert!(output.contains("The total inventory value is: 45500.00$"));
}

#[test]
fn test_cheapest_on_empty_inventory() {
    let shop = Shop::open(Config::builder().seed(Seed::Empty).build()).unwrap();
    let (_shop, output) = run_with(shop, "5\n0\n");

    assert!(output.contains("No devices found in the inventory."));
}

// =============================================================================
// Restock Tests
// =============================================================================

#[test]
fn test_restock_add_and_remove() {
    let (shop, output) = run_script("8\nIphone 15\nadd\n10\n8\nIphone 15\nRemove\n3\n0\n");

    assert!(output.contains("Iphone 15 restocked. New quantity: 15"));
    assert!(output.contains("Iphone 15 stock reduced. New quantity: 12"));
    assert_eq!(shop.inventory().get("Iphone 15").unwrap().quantity(), 12);
}

#[test]
fn test_restock_remove_too_much() {
    let (shop, output) = run_script("8\nIphone 15\nRemove\n6\n0\n");

    assert!(output.contains("Error: Attempt to remove more stock than available."));
    assert_eq!(shop.inventory().get("Iphone 15").unwrap().quantity(), 5);
}

#[test]
fn test_restock_invalid_action() {
    let (_shop, output) = run_script("8\nIphone 15\nsteal\n0\n");

    assert!(output.contains("Invalid action. Please enter 'Add' or 'Remove'."));
    assert!(!output.contains("Enter the quantity"));
}

// =============================================================================
// Export Tests
// =============================================================================

#[test]
fn test_export_from_menu() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("inventory.txt");
    let config = Config::builder().report_path(&report_path).build();

    let (_shop, output) = run_with(Shop::open(config).unwrap(), "9\n0\n");

    assert!(output.contains(&format!(
        "Inventory report exported to {}",
        report_path.display()
    )));
    assert!(report_path.exists());
}

#[test]
fn test_export_failure_keeps_session_alive() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .report_path(temp_dir.path().join("missing").join("inventory.txt"))
        .build();

    let (shop, output) = run_with(Shop::open(config).unwrap(), "9\n7\n0\n");

    assert!(output.contains("An error occurred while writing to the file: "));
    assert!(output.contains("The total inventory value is: 45500.00$"));
    assert_eq!(shop.inventory().len(), 5);
}
