//! Named optimization passes and the preset that selects them.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// An optimization pass, listed in the order the optimizer runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pass {
    RemoveDoctype,
    RemoveXmlProcInst,
    RemoveComments,
    RemoveMetadata,
    RemoveEditorsNsData,
    MinifyStyles,
    ConvertColors,
    RemoveUnknownsAndDefaults,
    /// Drops elements that do not render. Sprite sheets depend on some of
    /// these (zero-size symbols, `display="none"` wrappers).
    RemoveHiddenElems,
    CollapseGroups,
    ConvertPathData,
    RemoveEmptyContainers,
    RemoveUnusedNs,
    SortAttrs,
}

impl Pass {
    pub const ALL: [Pass; 14] = [
        Pass::RemoveDoctype,
        Pass::RemoveXmlProcInst,
        Pass::RemoveComments,
        Pass::RemoveMetadata,
        Pass::RemoveEditorsNsData,
        Pass::MinifyStyles,
        Pass::ConvertColors,
        Pass::RemoveUnknownsAndDefaults,
        Pass::RemoveHiddenElems,
        Pass::CollapseGroups,
        Pass::ConvertPathData,
        Pass::RemoveEmptyContainers,
        Pass::RemoveUnusedNs,
        Pass::SortAttrs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pass::RemoveDoctype => "removeDoctype",
            Pass::RemoveXmlProcInst => "removeXMLProcInst",
            Pass::RemoveComments => "removeComments",
            Pass::RemoveMetadata => "removeMetadata",
            Pass::RemoveEditorsNsData => "removeEditorsNSData",
            Pass::MinifyStyles => "minifyStyles",
            Pass::ConvertColors => "convertColors",
            Pass::RemoveUnknownsAndDefaults => "removeUnknownsAndDefaults",
            Pass::RemoveHiddenElems => "removeHiddenElems",
            Pass::CollapseGroups => "collapseGroups",
            Pass::ConvertPathData => "convertPathData",
            Pass::RemoveEmptyContainers => "removeEmptyContainers",
            Pass::RemoveUnusedNs => "removeUnusedNS",
            Pass::SortAttrs => "sortAttrs",
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pass::ALL
            .into_iter()
            .find(|pass| pass.name() == s)
            .ok_or_else(|| format!("unknown optimization pass: {}", s))
    }
}

/// Default number of decimal places kept in numeric data.
pub const DEFAULT_PRECISION: u8 = 3;

/// The set of passes to run, plus numeric precision.
///
/// `Preset::default()` enables every pass; overrides switch single passes
/// off or back on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    disabled: BTreeSet<Pass>,
    /// Decimal places kept in path data
    pub precision: u8,
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            disabled: BTreeSet::new(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Preset {
    /// Enable or disable a single pass.
    pub fn with_override(mut self, pass: Pass, enabled: bool) -> Self {
        if enabled {
            self.disabled.remove(&pass);
        } else {
            self.disabled.insert(pass);
        }
        self
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    pub fn is_enabled(&self, pass: Pass) -> bool {
        !self.disabled.contains(&pass)
    }

    /// Enabled passes in execution order.
    pub fn passes(&self) -> impl Iterator<Item = Pass> + '_ {
        Pass::ALL.into_iter().filter(|p| self.is_enabled(*p))
    }
}
