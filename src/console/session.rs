//! Interactive session
//!
//! Prompts for a menu choice, gathers the arguments that choice needs,
//! runs it against the shop, and prints the response.

use std::io::{BufRead, Write};

use crate::device::Device;
use crate::error::{InventoryError, Result};
use crate::inventory::{DetailsUpdate, StockAction};
use crate::protocol::{
    parse_category, parse_menu_choice, parse_optional_price, parse_optional_quantity,
    parse_price, parse_quantity, parse_stock_action, Command, CommandType, Response,
};
use crate::shop::Shop;

use super::menu::{render_menu, SEPARATOR};

/// Drives the menu over a reader/writer pair
pub struct Session<R, W> {
    /// Line source (stdin in the binary)
    reader: R,

    /// Output sink (stdout in the binary)
    writer: W,

    /// The shop commands are executed against
    shop: Shop,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a new session
    pub fn new(shop: Shop, reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            shop,
        }
    }

    /// Run the menu loop until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.writer.write_all(render_menu().as_bytes())?;

            let Some(line) = self.prompt("Enter your choice: ")? else {
                tracing::debug!("Input closed at menu");
                return Ok(());
            };

            let command_type = match parse_menu_choice(&line) {
                Ok(t) => t,
                Err(e) => {
                    self.send_response(Response::from(&e))?;
                    continue;
                }
            };

            let command = match self.read_command(command_type) {
                Ok(Some(command)) => command,
                Ok(None) => {
                    tracing::debug!("Input closed while reading {:?}", command_type);
                    return Ok(());
                }
                Err(InventoryError::Io(e)) => return Err(InventoryError::Io(e)),
                Err(e) => {
                    self.send_response(Response::from(&e))?;
                    continue;
                }
            };

            let is_exit = command_type == CommandType::Exit;
            let response = self.execute_command(command);
            self.send_response(response)?;

            if is_exit {
                return Ok(());
            }
        }
    }

    /// Collect the arguments for `command_type`
    ///
    /// Returns `Ok(None)` if input ends part way through.
    fn read_command(&mut self, command_type: CommandType) -> Result<Option<Command>> {
        let command = match command_type {
            CommandType::Add => {
                let Some(category) = self.prompt("Enter category name: ")? else {
                    return Ok(None);
                };
                let category = parse_category(&category)?;

                let Some(name) = self.prompt("Enter device name: ")? else {
                    return Ok(None);
                };
                let name = name.trim().to_string();
                if self.shop.inventory().exists(&name) {
                    return Err(InventoryError::DuplicateName(name));
                }

                let Some(price) = self.prompt("Enter price (e.g., 1000$): ")? else {
                    return Ok(None);
                };
                let price = parse_price(&price)?;

                let Some(quantity) = self.prompt("Enter quantity: ")? else {
                    return Ok(None);
                };
                let quantity = parse_quantity(&quantity)?;

                Command::Add {
                    device: Device::new(category.as_str(), name, price, quantity),
                }
            }
            CommandType::Remove => {
                let Some(name) = self.prompt("Enter the name of the device to remove: ")? else {
                    return Ok(None);
                };
                Command::Remove {
                    name: name.trim().to_string(),
                }
            }
            CommandType::Update => {
                let Some(name) = self.prompt_existing("Enter the name of the device to update: ")?
                else {
                    return Ok(None);
                };

                let Some(price) =
                    self.prompt("Enter new price (leave blank to keep current price): ")?
                else {
                    return Ok(None);
                };
                let price = parse_optional_price(&price)?;

                let Some(quantity) =
                    self.prompt("Enter new quantity (leave blank to keep current quantity): ")?
                else {
                    return Ok(None);
                };
                let quantity = parse_optional_quantity(&quantity)?;

                Command::Update {
                    name,
                    update: DetailsUpdate::new(price, quantity),
                }
            }
            CommandType::Restock => {
                let Some(name) = self.prompt_existing("Enter the name of the device to restock: ")?
                else {
                    return Ok(None);
                };

                let Some(action) =
                    self.prompt("Do you want to add or remove stock? (Add/Remove): ")?
                else {
                    return Ok(None);
                };
                let action = parse_stock_action(&action)?;

                let label = match action {
                    StockAction::Add => "Enter the quantity to add: ",
                    StockAction::Remove => "Enter the quantity to remove: ",
                };
                let Some(delta) = self.prompt(label)? else {
                    return Ok(None);
                };
                let delta = parse_quantity(&delta)?;

                Command::Restock {
                    name,
                    delta,
                    action,
                }
            }
            CommandType::List => Command::List,
            CommandType::FindCheapest => Command::FindCheapest,
            CommandType::SortByPrice => Command::SortByPrice,
            CommandType::TotalValue => Command::TotalValue,
            CommandType::Export => Command::Export,
            CommandType::Exit => Command::Exit,
        };

        Ok(Some(command))
    }

    /// Execute a command and return a response
    fn execute_command(&mut self, command: Command) -> Response {
        match self.shop.execute(command) {
            Ok(reply) => Response::from(reply),
            Err(e) => Response::from(&e),
        }
    }

    /// Send a response to the user
    fn send_response(&mut self, response: Response) -> Result<()> {
        tracing::trace!("Response {:?}", response.status);
        writeln!(self.writer, "{}", SEPARATOR)?;
        writeln!(self.writer, "{}", response.message)?;
        writeln!(self.writer, "{}", SEPARATOR)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Print `label` and read one line, without its line terminator
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        self.writer.write_all(label.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Prompt for a device name that must already be in the inventory
    fn prompt_existing(&mut self, label: &str) -> Result<Option<String>> {
        let Some(name) = self.prompt(label)? else {
            return Ok(None);
        };
        let name = name.trim().to_string();

        if !self.shop.inventory().exists(&name) {
            return Err(InventoryError::NotFound(name));
        }
        Ok(Some(name))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    /// Tear down the session, returning the shop and the output sink
    pub fn into_parts(self) -> (Shop, W) {
        (self.shop, self.writer)
    }
}
