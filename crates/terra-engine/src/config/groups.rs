use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::map::{TileGroups, TileRef};

/// Tile group file: which tile graphics belong to which terrain group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TileGroupsDesc {
    pub groups: Vec<TileGroupDesc>,
}

/// Describes one terrain group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileGroupDesc {
    pub name: String,
    pub tiles: Vec<TileRangeDesc>,
}

/// Consecutive tile numbers of one sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileRangeDesc {
    pub sheet: u32,
    pub start: u32,
    /// Last number, inclusive (default: `start`).
    #[serde(default)]
    pub end: Option<u32>,
}

impl TileGroupsDesc {
    /// Parse tile groups from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_groups(self) -> TileGroups {
        let mut groups = TileGroups::new();
        for group in &self.groups {
            for range in &group.tiles {
                let end = range.end.unwrap_or(range.start);
                groups.insert_range(range.sheet, range.start..=end, &group.name);
            }
        }
        groups
    }

    /// Describe existing groups, one single-tile range per member.
    pub fn from_groups(groups: &TileGroups) -> Self {
        let groups = groups
            .names()
            .map(|name| TileGroupDesc {
                name: name.to_string(),
                tiles: groups
                    .members(name)
                    .into_iter()
                    .map(|TileRef { sheet, number }| TileRangeDesc {
                        sheet,
                        start: number,
                        end: None,
                    })
                    .collect(),
            })
            .collect();
        Self { groups }
    }
}
