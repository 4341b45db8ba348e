use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize
};

use crate::welldata::wellframe::WellFrame;

/// Placeholder entry meaning "no curve assigned"; never matches a column.
pub const UNASSIGNED: &str = "none";

/// One named alias group as it appears in configuration files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AliasGroup {
    name: String,
    mnemonics: Vec<String>
}

impl AliasGroup {
    pub fn new<S: Into<String>>(name: &str, mnemonics: impl IntoIterator<Item = S>) -> AliasGroup {
        AliasGroup {
            name: name.to_owned(),
            mnemonics: mnemonics.into_iter().map(Into::into).collect()
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn mnemonics(&self) -> &[String] {
        &self.mnemonics
    }
}

/// Maps a logical curve kind (`gr`, `resdeep`, ...) to the vendor mnemonics
/// that may carry it, in order of preference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    groups: BTreeMap<String, Vec<String>>
}

impl Default for AliasTable {
    fn default() -> Self {
        let defaults: [(&str, &[&str]); 15] = [
            ("sonic", &["DTC", "DT24", "DTCO", "DT", "AC", "AAC", "DTHM"]),
            ("shearsonic", &["DTSM"]),
            ("gr", &["GR", "GRD", "CGR", "GRR", "GRCFM"]),
            ("resdeep", &["HDRS", "LLD", "M2RX", "MLR4C", "RD", "RT90", "RLA1", "RDEP", "RLLD", "RILD", "ILD", "RT_HRLT", "RACELM"]),
            ("resshal", &["LLS", "HMRS", "M2R1", "RS", "RFOC", "ILM", "RSFL", "RMED", "RACEHM"]),
            ("density", &["ZDEN", "RHOB", "RHOZ", "RHO", "DEN", "RHO8", "BDCFM"]),
            ("neutron", &["CNCF", "NPHI", "NEU"]),
            ("pe", &["PE"]),
            ("ROP", &["ROPAVG"]),
            ("RPM", &["SURFRPM"]),
            ("WOB", &["WOBAVG"]),
            ("ECD", &["ACTECDM"]),
            ("BIT", &["BIT"]),
            ("TORQUE", &["TORQUE", "TORQUEAV"]),
            ("FLOWRATE", &["FLOWRATE", "FLOWIN"])
        ];
        AliasTable::new(
            defaults
                .iter()
                .map(|(name, mnemonics)| AliasGroup::new(name, mnemonics.iter().copied()))
        )
    }
}

impl AliasTable {
    pub fn new(groups: impl IntoIterator<Item = AliasGroup>) -> AliasTable {
        let mut table = AliasTable { groups: BTreeMap::new() };
        for group in groups {
            table.insert(group);
        }
        table
    }

    /// Add or replace a group.
    pub fn insert(&mut self, group: AliasGroup) {
        self.groups.insert(group.name, group.mnemonics);
    }

    pub fn with_group(mut self, group: AliasGroup) -> AliasTable {
        self.insert(group);
        self
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    pub fn mnemonics(&self, group: &str) -> Option<&[String]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// First mnemonic of `group` that is a column of `frame`.
    pub fn resolve_group(&self, group: &str, frame: &WellFrame) -> Option<&str> {
        self.groups
            .get(group)?
            .iter()
            .filter(|m| !m.eq_ignore_ascii_case(UNASSIGNED))
            .find(|m| frame.contains(m))
            .map(String::as_str)
    }

    /// `group → column` for every group that resolves.
    pub fn resolve(&self, frame: &WellFrame) -> BTreeMap<String, String> {
        self.groups
            .keys()
            .filter_map(|g| Some((g.clone(), self.resolve_group(g, frame)?.to_owned())))
            .collect()
    }

    /// Groups with no column in `frame`.
    pub fn missing(&self, frame: &WellFrame) -> Vec<&str> {
        self.groups
            .keys()
            .filter(|g| self.resolve_group(g, frame).is_none())
            .map(String::as_str)
            .collect()
    }
}
