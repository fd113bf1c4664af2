use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::features::entity_building::domain::{
    Function, Import, Interface, Method, Struct, Variable,
};

/// Entity categories the query surface distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Struct,
    Interface,
    Function,
    Method,
    Variable,
    Constant,
    Import,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Struct,
        EntityKind::Interface,
        EntityKind::Function,
        EntityKind::Method,
        EntityKind::Variable,
        EntityKind::Constant,
        EntityKind::Import,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Struct => "struct",
            EntityKind::Interface => "interface",
            EntityKind::Function => "function",
            EntityKind::Method => "method",
            EntityKind::Variable => "variable",
            EntityKind::Constant => "constant",
            EntityKind::Import => "import",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "struct" | "structs" => Ok(EntityKind::Struct),
            "interface" | "interfaces" => Ok(EntityKind::Interface),
            "function" | "functions" | "func" => Ok(EntityKind::Function),
            "method" | "methods" => Ok(EntityKind::Method),
            "variable" | "variables" | "var" => Ok(EntityKind::Variable),
            "constant" | "constants" | "const" => Ok(EntityKind::Constant),
            "import" | "imports" => Ok(EntityKind::Import),
            other => Err(format!("unknown entity kind: {}", other)),
        }
    }
}

/// Borrowed view of one entity in the graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityRef<'a> {
    Struct(&'a Struct),
    Interface(&'a Interface),
    Function(&'a Function),
    Method(&'a Method),
    /// Both variables and constants
    Variable(&'a Variable),
    Import(&'a Import),
}

impl<'a> EntityRef<'a> {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Struct(_) => EntityKind::Struct,
            EntityRef::Interface(_) => EntityKind::Interface,
            EntityRef::Function(_) => EntityKind::Function,
            EntityRef::Method(_) => EntityKind::Method,
            EntityRef::Variable(v) if v.is_constant() => EntityKind::Constant,
            EntityRef::Variable(_) => EntityKind::Variable,
            EntityRef::Import(_) => EntityKind::Import,
        }
    }

    /// Declared name; an import's alias or unquoted path
    pub fn name(&self) -> &'a str {
        match *self {
            EntityRef::Struct(s) => &s.name,
            EntityRef::Interface(i) => &i.name,
            EntityRef::Function(f) => &f.name,
            EntityRef::Method(m) => &m.name,
            EntityRef::Variable(v) => &v.name,
            EntityRef::Import(i) => i.alias.as_deref().unwrap_or_else(|| i.unquoted_path()),
        }
    }

    pub fn package(&self) -> &'a str {
        match *self {
            EntityRef::Struct(s) => &s.package,
            EntityRef::Interface(i) => &i.package,
            EntityRef::Function(f) => &f.package,
            EntityRef::Method(m) => &m.package,
            EntityRef::Variable(v) => &v.package,
            EntityRef::Import(i) => &i.package,
        }
    }

    pub fn file_path(&self) -> &'a str {
        match *self {
            EntityRef::Struct(s) => &s.file_path,
            EntityRef::Interface(i) => &i.file_path,
            EntityRef::Function(f) => &f.file_path,
            EntityRef::Method(m) => &m.file_path,
            EntityRef::Variable(v) => &v.file_path,
            EntityRef::Import(i) => &i.file_path,
        }
    }
}
