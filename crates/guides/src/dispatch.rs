use crate::arguments::Arguments;
use crate::catalog::{list_operations, OperationDescriptor};
use crate::error::{GuideError, Result};
use std::collections::HashMap;

/// Routes an operation name to its catalog entry.
///
/// The lookup table is built from the catalog, so every dispatchable name is also a listed one.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    operations: HashMap<&'static str, &'static OperationDescriptor>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        let operations = list_operations().iter().map(|op| (op.name, op)).collect();
        Self { operations }
    }

    /// Renders `name` with `args`. The result always holds exactly one text block.
    pub fn invoke(&self, name: &str, args: &Arguments) -> Result<Vec<String>> {
        let Some(op) = self.operations.get(name) else {
            log::warn!("unknown operation requested: {name}");
            return Err(GuideError::UnknownOperation(name.to_string()));
        };
        log::debug!("rendering {name}");
        Ok(vec![op.render(args)])
    }
}
