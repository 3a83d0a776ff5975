use super::EquipmentType;
use serde::{Deserialize, Serialize};

/// A schedulable piece of equipment or area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EquipmentType,
    pub is_active: bool,
}

impl Equipment {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: EquipmentType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            is_active: true,
        }
    }
}

/// Equipment that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEquipment {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EquipmentType,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NewEquipment {
    pub fn into_equipment(self, id: impl Into<String>) -> Equipment {
        Equipment {
            id: id.into(),
            name: self.name,
            kind: self.kind,
            is_active: self.is_active,
        }
    }
}

/// Inventory a fresh local cache starts with. The ids can never collide with
/// the integer keys of the remote database.
pub fn seed_equipment() -> Vec<Equipment> {
    vec![
        Equipment::new("seed-1", "Vehicle Lift 1", EquipmentType::Machine),
        Equipment::new("seed-2", "Vehicle Lift 2", EquipmentType::Machine),
        Equipment::new("seed-3", "Diagnostic Scanner", EquipmentType::Tool),
        Equipment::new("seed-4", "MIG/MAG Welder", EquipmentType::Tool),
        Equipment::new("seed-5", "Hydraulic Jack", EquipmentType::Tool),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_equipment_defaults_to_active() {
        let draft: NewEquipment =
            serde_json::from_str(r#"{"name":"Lathe","type":"machine"}"#).unwrap();
        assert!(draft.is_active);

        let equipment = draft.into_equipment("42");
        assert_eq!(equipment.id, "42");
        assert_eq!(equipment.kind, EquipmentType::Machine);
    }

    #[test]
    fn test_seed_is_active() {
        let seed = seed_equipment();
        assert_eq!(seed.len(), 5);
        assert!(seed.iter().all(|e| e.is_active));
    }
}
