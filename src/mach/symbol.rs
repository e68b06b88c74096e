use super::{Address, BASE_ADDRESS, MAX_NAME_LEN, MAX_SYMBOLS};
use crate::error;
use crate::lang::Error;
use log::trace;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    name: Rc<str>,
    address: Address,
    size: u16,
    is_array: bool,
}

impl Symbol {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn address(&self) -> Address {
        self.address
    }
    pub fn size(&self) -> u16 {
        self.size
    }
    pub fn is_array(&self) -> bool {
        self.is_array
    }
}

/// ## Variable memory
///
/// Symbols are allocated on first reference and never move. The first
/// reference also fixes the size and kind for the rest of the run.

#[derive(Debug)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    next_address: u32,
}

impl Default for SymbolTable {
    fn default() -> SymbolTable {
        SymbolTable {
            symbols: vec![],
            next_address: BASE_ADDRESS as u32,
        }
    }
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn resolve(&mut self, name: &str, size: u16, is_array: bool) -> Result<Address> {
        if let Some(symbol) = self.get(name) {
            return Ok(symbol.address);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(error!(NameTooLong; name));
        }
        if self.symbols.len() >= MAX_SYMBOLS {
            return Err(error!(OutOfMemory; "SYMBOL TABLE FULL"));
        }
        let size = size.max(1);
        let end = self.next_address + size as u32;
        if end > 0x1_0000 {
            return Err(error!(OutOfMemory; "ADDRESS SPACE EXHAUSTED"));
        }
        let address = self.next_address as Address;
        trace!(
            "allocate {} at ${:04X}, {} byte(s){}",
            name,
            address,
            size,
            if is_array { ", array" } else { "" }
        );
        self.symbols.push(Symbol {
            name: name.into(),
            address,
            size,
            is_array,
        });
        self.next_address = end;
        Ok(address)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| &*s.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// The memory map report, in first-use order.
impl std::fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Kokoro Variable Memory Map:")?;
        for s in &self.symbols {
            writeln!(
                f,
                "  {:<16} @ ${:04X} ({}, {} byte{})",
                s.name,
                s.address,
                if s.is_array { "array" } else { "scalar" },
                s.size,
                if s.size > 1 { "s" } else { "" }
            )?;
        }
        Ok(())
    }
}
