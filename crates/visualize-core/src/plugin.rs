// File: crates/visualize-core/src/plugin.rs
// Summary: Chart-type extension trait and the registry resolving type names to renderers.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::debug;

use crate::config::ConfigOverrides;
use crate::context::DrawContext;
use crate::error::{Result, VisualizeError};
use crate::table::CellParser;

/// A chart type (bar, pie, ...). Invoked exactly once per render request.
pub trait ChartRenderer {
    /// Options merged beneath the user's options.
    fn defaults(&self) -> ConfigOverrides {
        ConfigOverrides::default()
    }

    /// Cell parser replacing the configured one, if the chart type needs its own.
    fn parser(&self) -> Option<CellParser> {
        None
    }

    /// Draw into `ctx`: series, axes (`draw_x_axis`/`draw_y_axis`/`draw_date_range`) and legend keys (`set_keys`).
    fn render(&self, ctx: &mut DrawContext<'_>) -> Result<()>;
}

/// Registers the chart types of one family (`bar` for `bar`, `bar-stacked`, ...).
pub type FamilyLoader = Box<dyn FnOnce(&mut ChartRegistry)>;

/// Type name -> renderer lookup.
///
/// Types are registered up front with [`ChartRegistry::register`] or lazily
/// through a family loader, which runs at most once, the first time a type of
/// its family is requested.
#[derive(Default)]
pub struct ChartRegistry {
    renderers: HashMap<String, Arc<dyn ChartRenderer>>,
    loaders: BTreeMap<String, FamilyLoader>,
}

/// Family key of a chart type: the part before the first `-` or `_`.
pub fn family_of(type_key: &str) -> &str {
    type_key.split(|c| c == '-' || c == '_').next().unwrap_or(type_key)
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, type_key: impl Into<String>, renderer: impl ChartRenderer + 'static) {
        self.renderers.insert(type_key.into(), Arc::new(renderer));
    }

    pub fn register_loader(&mut self, family: impl Into<String>, loader: impl FnOnce(&mut ChartRegistry) + 'static) {
        self.loaders.insert(family.into(), Box::new(loader));
    }

    pub fn contains(&self, type_key: &str) -> bool {
        self.renderers.contains_key(type_key)
    }

    /// Registered type names, sorted.
    pub fn types(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    /// Find the renderer for `type_key`, running its family loader if needed.
    pub fn resolve(&mut self, type_key: &str) -> Result<Arc<dyn ChartRenderer>> {
        if let Some(r) = self.renderers.get(type_key) {
            return Ok(Arc::clone(r));
        }

        let family = family_of(type_key);
        let Some(loader) = self.loaders.remove(family) else {
            return Err(VisualizeError::ExtensionLoad {
                type_key: type_key.to_string(),
                reason: format!("no chart type registered and no loader for family `{family}`"),
            });
        };
        debug!(family, type_key, "running chart family loader");
        loader(self);

        self.renderers.get(type_key).cloned().ok_or_else(|| VisualizeError::ExtensionLoad {
            type_key: type_key.to_string(),
            reason: format!("loader for family `{family}` did not register it"),
        })
    }
}
