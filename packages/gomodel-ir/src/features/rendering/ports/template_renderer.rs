use std::fmt;
use std::str::FromStr;

use crate::features::query::domain::{EntityKind, EntityRef};
use crate::shared::models::Result;

/// Templates a renderer must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    Struct,
    Interface,
    Function,
    Method,
    /// Variables and constants
    Variable,
    Import,
}

impl TemplateName {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::Struct => "struct",
            TemplateName::Interface => "interface",
            TemplateName::Function => "function",
            TemplateName::Method => "method",
            TemplateName::Variable => "variable",
            TemplateName::Import => "import",
        }
    }

    /// Template that renders entities of `kind`
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Struct => TemplateName::Struct,
            EntityKind::Interface => TemplateName::Interface,
            EntityKind::Function => TemplateName::Function,
            EntityKind::Method => TemplateName::Method,
            EntityKind::Variable | EntityKind::Constant => TemplateName::Variable,
            EntityKind::Import => TemplateName::Import,
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<EntityKind>().map(TemplateName::for_kind)
    }
}

/// Re-emits entities as source text
pub trait TemplateRenderer: Send + Sync {
    /// Fails with a render error when `entity` does not fit `template`
    fn render(&self, template: TemplateName, entity: EntityRef<'_>) -> Result<String>;

    /// Render with the template matching the entity kind
    fn render_entity(&self, entity: EntityRef<'_>) -> Result<String> {
        self.render(TemplateName::for_kind(entity.kind()), entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_from_entity_kind_name() {
        assert_eq!("struct".parse::<TemplateName>(), Ok(TemplateName::Struct));
        assert_eq!("constant".parse::<TemplateName>(), Ok(TemplateName::Variable));
        assert_eq!("func".parse::<TemplateName>(), Ok(TemplateName::Function));
        assert!("channel".parse::<TemplateName>().is_err());
    }
}
