use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::map::TileRef;
use crate::transition::{GroupTransition, TileTransition, TransitionTable};

/// Transition file: replacement tiles per transition shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionsDesc {
    pub transitions: Vec<TransitionDesc>,
}

/// Candidates for one shape, optionally restricted to a pair of groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionDesc {
    pub transition: TileTransition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<GroupTransition>,
    pub tiles: Vec<TileRef>,
}

impl TransitionsDesc {
    /// Parse transitions from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn into_table(self) -> TransitionTable {
        let mut table = TransitionTable::new();
        for desc in self.transitions {
            for tile_ref in desc.tiles {
                match &desc.groups {
                    Some(groups) => table.insert_for(groups.clone(), desc.transition, tile_ref),
                    None => table.insert(desc.transition, tile_ref),
                }
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_transitions() {
        let json = r#"{
            "transitions": [
                { "transition": "CENTER", "tiles": [ { "sheet": 0, "number": 0 } ] },
                {
                    "transition": "TOP",
                    "groups": { "group_in": "grass", "group_out": "water" },
                    "tiles": [ { "sheet": 0, "number": 4 }, { "sheet": 0, "number": 5 } ]
                }
            ]
        }"#;
        let table = TransitionsDesc::from_json(json).unwrap().into_table();
        assert_eq!(table.candidates(None, TileTransition::Center), &[TileRef::new(0, 0)]);
        let groups = GroupTransition::new("grass", "water");
        assert_eq!(table.candidates(Some(&groups), TileTransition::Top).len(), 2);
        assert!(table.candidates(None, TileTransition::Top).is_empty());
    }

    #[test]
    fn unknown_shape_is_rejected() {
        let json = r#"{ "transitions": [ { "transition": "SPIRAL", "tiles": [] } ] }"#;
        assert!(TransitionsDesc::from_json(json).is_err());
    }
}
