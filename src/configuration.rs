use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;

use crate::alias::aliastable::{
    AliasGroup,
    AliasTable
};
use crate::layout::curvestyle::CurveStyle;
use crate::layout::layoutconfig::LayoutConfig;
use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    curve_styles: Vec<serde_json::Value>,
    #[serde(default)]
    aliases: Vec<serde_json::Value>,
    #[serde(default)]
    layouts: Vec<serde_json::Value>
}

fn curve_style_from_json(json_value: serde_json::Value) -> Result<CurveStyle, ManagerError> {
    ManagerError::from_json_or_json_parse_error(json_value)
}

fn alias_group_from_json(json_value: serde_json::Value) -> Result<AliasGroup, ManagerError> {
    ManagerError::from_json_or_json_parse_error(json_value)
}

fn layout_from_json(json_value: serde_json::Value) -> Result<LayoutConfig, ManagerError> {
    ManagerError::from_json_or_json_parse_error(json_value)
}

/// Named curve styles, alias groups and layout presets loaded from JSON.
///
/// ```json
/// {
///   "curve_styles": [{ "name": "GR", "color": "#276b02", "thickness": 2.0 }],
///   "aliases": [{ "name": "gr", "mnemonics": ["GR", "SGR"] }],
///   "layouts": [{ "name": "quicklook", "tracks": [{ "curves": ["GR"] }] }]
/// }
/// ```
pub struct Configuration {
    curve_style_manager: Manager<CurveStyle>,
    alias_manager: Manager<AliasGroup>,
    layout_manager: Manager<LayoutConfig>
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            curve_style_manager: Manager::new(curve_style_from_json),
            alias_manager: Manager::new(alias_group_from_json),
            layout_manager: Manager::new(layout_from_json)
        }
    }

    pub fn curve_style_manager(&self) -> &Manager<CurveStyle> {
        &self.curve_style_manager
    }

    pub fn alias_manager(&self) -> &Manager<AliasGroup> {
        &self.alias_manager
    }

    pub fn layout_manager(&self) -> &Manager<LayoutConfig> {
        &self.layout_manager
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.from_json_value(json_value)
    }

    pub fn from_json_value(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        self.curve_style_manager.insert_obj_from_json_vec(&json_prop.curve_styles)?;
        self.alias_manager.insert_obj_from_json_vec(&json_prop.aliases)?;
        self.layout_manager.insert_obj_from_json_vec(&json_prop.layouts)?;
        log::debug!(
            "loaded {} curve styles, {} alias groups, {} layouts",
            json_prop.curve_styles.len(),
            json_prop.aliases.len(),
            json_prop.layouts.len()
        );
        Ok(())
    }

    /// Built-in alias groups, with configured groups replacing same-named ones.
    pub fn alias_table(&self) -> AliasTable {
        self.alias_manager
            .entries()
            .into_iter()
            .fold(AliasTable::default(), |table, (_, group)| table.with_group(group))
    }

    pub fn curve_styles(&self) -> BTreeMap<String, CurveStyle> {
        self.curve_style_manager.entries().into_iter().collect()
    }

    /// A named layout, with registry curve styles filling in the curves the
    /// layout leaves unstyled.
    pub fn layout(&self, name: &str) -> Result<LayoutConfig, ManagerError> {
        let layout = self.layout_manager.get(name)?;
        Ok(layout.with_base_styles(&self.curve_styles()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::curvestyle::LineStyle;

    fn sample() -> serde_json::Value {
        serde_json::json!({
            "curve_styles": [
                { "name": "GR", "color": "#276b02", "thickness": 2.0 },
                { "name": "RT", "logarithmic": true, "line_style": "dash" }
            ],
            "aliases": [
                { "name": "gr", "mnemonics": ["SGR"] }
            ],
            "layouts": [
                {
                    "name": "quicklook",
                    "tracks": [{ "curves": ["GR"] }, { "curves": ["RT"] }],
                    "styles": { "GR": { "color": "#000000" } }
                }
            ]
        })
    }

    #[test]
    fn test_load_managers_from_json() {
        let config = Configuration::new();
        config.from_json_value(sample()).unwrap();
        assert_eq!(config.curve_style_manager().names(), vec!["GR".to_owned(), "RT".to_owned()]);
        assert_eq!(config.curve_style_manager().get("RT").unwrap().line_style(), LineStyle::Dash);
        assert!(config.layout_manager().contains("quicklook"));
    }

    #[test]
    fn test_layout_merges_registry_styles() {
        let config = Configuration::new();
        config.from_json_value(sample()).unwrap();
        let layout = config.layout("quicklook").unwrap();
        assert_eq!(layout.style("GR").unwrap().color(), "#000000");
        assert!(layout.style("RT").unwrap().logarithmic());
        assert!(matches!(config.layout("missing"), Err(ManagerError::NameNotFoundError(_))));
    }

    #[test]
    fn test_configured_alias_groups_replace_defaults() {
        let config = Configuration::new();
        config.from_json_value(sample()).unwrap();
        assert_eq!(config.alias_manager().names(), vec!["gr".to_owned()]);
        let table = config.alias_table();
        assert_eq!(table.mnemonics("gr").unwrap(), &["SGR".to_owned()]);
        assert!(table.mnemonics("resdeep").is_some());
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let config = Configuration::new();
        config.from_json_value(serde_json::json!({})).unwrap();
        assert!(config.layout_manager().is_empty());
        assert_eq!(config.alias_table(), AliasTable::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let config = Configuration::new();
        let err = config.from_reader("/nonexistent/welllog/config.json").unwrap_err();
        assert!(matches!(err, ManagerError::IOError(_)));
    }
}
