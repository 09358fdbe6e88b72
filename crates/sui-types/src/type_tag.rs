//! Move type tags.
//!
//! Parses Move type strings such as `u64`, `vector<u8>` or
//! `0x2::coin::Coin<0x2::sui::SUI>` into a `TypeTag`, renders them in
//! canonical form (full-length addresses), and encodes them as BCS.

use std::fmt;
use std::str::FromStr;

use crate::address::SuiAddress;
use crate::bcs::BcsWriter;
use crate::TypesError;

/// A Move type.
///
/// Variant order does not match the wire order; see [`TypeTag::write_to`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(Box<StructTag>),
}

/// A fully-qualified Move struct type with its type parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructTag {
    /// Package address that defines the module.
    pub address: SuiAddress,
    /// Module name.
    pub module: String,
    /// Struct name.
    pub name: String,
    /// Instantiated type parameters, in declaration order.
    pub type_params: Vec<TypeTag>,
}

impl TypeTag {
    /// Parse a Move type string.
    ///
    /// Whitespace between tokens is ignored. Short addresses are accepted
    /// and padded (`0x2::sui::SUI`).
    ///
    /// # Arguments
    /// * `input` - The type string.
    ///
    /// # Returns
    /// `Ok(TypeTag)` on success, or `TypesError::InvalidTypeTag` naming the
    /// problem.
    pub fn parse(input: &str) -> Result<Self, TypesError> {
        let mut parser = Parser::new(input);
        let tag = parser.parse_type()?;
        parser.skip_ws();
        if !parser.at_end() {
            return Err(parser.error("unexpected trailing characters"));
        }
        Ok(tag)
    }

    /// Whether this is `vector<u8>` (the BCS form of strings and raw bytes).
    pub fn is_byte_vector(&self) -> bool {
        matches!(self, TypeTag::Vector(inner) if **inner == TypeTag::U8)
    }

    /// Append the BCS form of this type tag.
    ///
    /// Wire variant indices follow the order types were added to Move:
    /// bool, u8, u64, u128, address, signer, vector, struct, u16, u32, u256.
    pub fn write_to(&self, writer: &mut BcsWriter) {
        match self {
            TypeTag::Bool => writer.write_uleb128(0),
            TypeTag::U8 => writer.write_uleb128(1),
            TypeTag::U64 => writer.write_uleb128(2),
            TypeTag::U128 => writer.write_uleb128(3),
            TypeTag::Address => writer.write_uleb128(4),
            TypeTag::Signer => writer.write_uleb128(5),
            TypeTag::Vector(inner) => {
                writer.write_uleb128(6);
                inner.write_to(writer);
            }
            TypeTag::Struct(tag) => {
                writer.write_uleb128(7);
                tag.write_to(writer);
            }
            TypeTag::U16 => writer.write_uleb128(8),
            TypeTag::U32 => writer.write_uleb128(9),
            TypeTag::U256 => writer.write_uleb128(10),
        }
    }
}

impl StructTag {
    /// Whether this struct is `module::name` defined at `address`.
    pub fn is(&self, address: &SuiAddress, module: &str, name: &str) -> bool {
        self.address == *address && self.module == module && self.name == name
    }

    /// Append the BCS form: address, module, name, type parameters.
    pub fn write_to(&self, writer: &mut BcsWriter) {
        self.address.write_to(writer);
        writer.write_str(&self.module);
        writer.write_str(&self.name);
        writer.write_len(self.type_params.len());
        for param in &self.type_params {
            param.write_to(writer);
        }
    }
}

/// Check a Move identifier: `[A-Za-z_][A-Za-z0-9_]*`, and not `_` alone.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let first_ok = match chars.next() {
        Some(c) => c.is_ascii_alphabetic() || c == '_',
        None => false,
    };
    first_ok && s != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::U8 => write!(f, "u8"),
            TypeTag::U16 => write!(f, "u16"),
            TypeTag::U32 => write!(f, "u32"),
            TypeTag::U64 => write!(f, "u64"),
            TypeTag::U128 => write!(f, "u128"),
            TypeTag::U256 => write!(f, "u256"),
            TypeTag::Address => write!(f, "address"),
            TypeTag::Signer => write!(f, "signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{}>", inner),
            TypeTag::Struct(tag) => write!(f, "{}", tag),
        }
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address, self.module, self.name)?;
        if !self.type_params.is_empty() {
            write!(f, "<")?;
            for (i, param) in self.type_params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", param)?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

impl FromStr for TypeTag {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::parse(s)
    }
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Deepest nesting of `vector<..>` and struct type parameters accepted.
pub const MAX_TYPE_DEPTH: usize = 128;

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser { input, bytes: input.as_bytes(), pos: 0, depth: 0 }
    }

    fn error(&self, reason: &str) -> TypesError {
        TypesError::InvalidTypeTag {
            input: self.input.to_string(),
            reason: format!("{} at offset {}", reason, self.pos),
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, token: &str) -> Result<(), TypesError> {
        self.skip_ws();
        if self.bytes[self.pos..].starts_with(token.as_bytes()) {
            self.pos += token.len();
            Ok(())
        } else {
            Err(self.error(&format!("expected {:?}", token)))
        }
    }

    /// Read a run of `[A-Za-z0-9_]`. Addresses lex as words too.
    fn word(&mut self) -> &'a str {
        self.skip_ws();
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric() || b == b'_') {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn identifier(&mut self) -> Result<String, TypesError> {
        let ident = self.word();
        if !is_valid_identifier(ident) {
            return Err(self.error(&format!("invalid identifier {:?}", ident)));
        }
        Ok(ident.to_string())
    }

    fn parse_type(&mut self) -> Result<TypeTag, TypesError> {
        self.depth += 1;
        if self.depth > MAX_TYPE_DEPTH {
            return Err(self.error("type nesting too deep"));
        }

        let word = self.word();
        let tag = match word {
            "" => return Err(self.error("expected a type")),
            "bool" => TypeTag::Bool,
            "u8" => TypeTag::U8,
            "u16" => TypeTag::U16,
            "u32" => TypeTag::U32,
            "u64" => TypeTag::U64,
            "u128" => TypeTag::U128,
            "u256" => TypeTag::U256,
            "address" => TypeTag::Address,
            "signer" => TypeTag::Signer,
            "vector" => {
                self.expect("<")?;
                let inner = self.parse_type()?;
                self.expect(">")?;
                TypeTag::Vector(Box::new(inner))
            }
            addr => TypeTag::Struct(Box::new(self.parse_struct(addr)?)),
        };
        self.depth -= 1;
        Ok(tag)
    }

    fn parse_struct(&mut self, addr: &str) -> Result<StructTag, TypesError> {
        let address = SuiAddress::from_hex(addr)
            .map_err(|e| self.error(&format!("bad address {:?}: {}", addr, e)))?;
        self.expect("::")?;
        let module = self.identifier()?;
        self.expect("::")?;
        let name = self.identifier()?;

        let mut type_params = Vec::new();
        self.skip_ws();
        if self.peek() == Some(b'<') {
            self.pos += 1;
            loop {
                type_params.push(self.parse_type()?);
                self.skip_ws();
                match self.peek() {
                    Some(b',') => self.pos += 1,
                    Some(b'>') => {
                        self.pos += 1;
                        break;
                    }
                    _ => return Err(self.error("expected ',' or '>'")),
                }
            }
        }

        Ok(StructTag { address, module, name, type_params })
    }
}
