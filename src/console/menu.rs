//! Menu text

use crate::protocol::CommandType;

/// Line printed above and below every response
pub const SEPARATOR: &str = "-------------------------------------------------------";

/// Banner, numbered options, in display order
pub fn render_menu() -> String {
    let mut menu = String::from(
        "Welcome to the Electronics Inventory Management System!\nPlease select an option:\n",
    );
    for command in CommandType::MENU {
        menu.push_str(&format!("{}. {}\n", command as u8, command.label()));
    }
    menu
}
