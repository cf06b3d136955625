use crate::config::EquipmentFileConfig;
use crate::types::{Armor, Weapon};
use crate::{CatalogError, InvalidEntry};
use std::path::Path;

/// All weapons and armors available for selection, in file order
#[derive(Debug, Clone, Default)]
pub struct EquipmentCatalog {
    weapons: Vec<Weapon>,
    armors: Vec<Armor>,
}

impl EquipmentCatalog {
    /// Build a catalog directly from already validated items
    pub fn new(weapons: Vec<Weapon>, armors: Vec<Armor>) -> Self {
        EquipmentCatalog { weapons, armors }
    }

    /// Load the catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            error: e,
            path: path.to_path_buf(),
        })?;

        let catalog = Self::parse(&content, Some(path))?;
        tracing::info!(
            path = %path.display(),
            weapons = catalog.weapons.len(),
            armors = catalog.armors.len(),
            "loaded equipment catalog"
        );
        Ok(catalog)
    }

    /// Load the catalog from an in-memory JSON document
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::parse(json, None)
    }

    fn parse(json: &str, path: Option<&Path>) -> Result<Self, CatalogError> {
        let config: EquipmentFileConfig =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse {
                error: e,
                path: path.map(Path::to_path_buf),
            })?;

        let validation = |e: InvalidEntry| CatalogError::Validation {
            error: e,
            path: path.map(Path::to_path_buf),
        };

        let weapons = config
            .weapons
            .into_iter()
            .map(Weapon::from_config)
            .collect::<Result<Vec<_>, _>>()
            .map_err(validation)?;
        let armors = config
            .armors
            .into_iter()
            .map(Armor::from_config)
            .collect::<Result<Vec<_>, _>>()
            .map_err(validation)?;

        Ok(EquipmentCatalog { weapons, armors })
    }

    /// Find a weapon by exact name; the first match wins
    pub fn find_weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name == name)
    }

    /// Find an armor by exact name; the first match wins
    pub fn find_armor(&self, name: &str) -> Option<&Armor> {
        self.armors.iter().find(|a| a.name == name)
    }

    pub fn weapon_names(&self) -> Vec<&str> {
        self.weapons.iter().map(|w| w.name.as_str()).collect()
    }

    pub fn armor_names(&self) -> Vec<&str> {
        self.armors.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn armors(&self) -> &[Armor] {
        &self.armors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
{
  "weapons": [
    {"id": 1, "name": "Knife", "min_damage": 1.0, "max_damage": 2.5, "stamina_per_hit": 2.5},
    {"id": 2, "name": "Axe", "min_damage": 3.0, "max_damage": 5.0, "stamina_per_hit": 4},
    {"id": 3, "name": "Knife", "min_damage": 9.0, "max_damage": 9.0, "stamina_per_hit": 1.0}
  ],
  "armors": [
    {"id": 1, "name": "Shirt", "defence": 0, "stamina_per_turn": 0},
    {"id": 2, "name": "Chainmail", "defence": 3.0, "stamina_per_turn": 1.5}
  ]
}
"#;

    fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "equipment.json", SAMPLE);

        let catalog = EquipmentCatalog::load(&path).unwrap();
        assert_eq!(catalog.weapons().len(), 3);
        assert_eq!(catalog.armors().len(), 2);
    }

    #[test]
    fn test_names_preserve_load_order() {
        let catalog = EquipmentCatalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.weapon_names(), vec!["Knife", "Axe", "Knife"]);
        assert_eq!(catalog.armor_names(), vec!["Shirt", "Chainmail"]);
    }

    #[test]
    fn test_find_first_match_wins() {
        let catalog = EquipmentCatalog::from_json_str(SAMPLE).unwrap();
        let knife = catalog.find_weapon("Knife").unwrap();
        assert_eq!(knife.id, 1);
        assert_eq!(catalog.find_armor("Chainmail").unwrap().defence, 3.0);
    }

    #[test]
    fn test_find_is_exact() {
        let catalog = EquipmentCatalog::from_json_str(SAMPLE).unwrap();
        assert!(catalog.find_weapon("knife").is_none());
        assert!(catalog.find_weapon("Sword").is_none());
        assert!(catalog.find_armor("Chain").is_none());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = EquipmentCatalog::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "broken.json", "{ \"weapons\": [");
        let result = EquipmentCatalog::load(&path);
        assert!(matches!(result, Err(CatalogError::Parse { path: Some(_), .. })));
    }

    #[test]
    fn test_wrong_field_type() {
        let json = r#"{"weapons": [{"id": 1, "name": "Axe", "min_damage": "big",
            "max_damage": 5.0, "stamina_per_hit": 1.0}], "armors": []}"#;
        let result = EquipmentCatalog::from_json_str(json);
        assert!(matches!(result, Err(CatalogError::Parse { path: None, .. })));
    }

    #[test]
    fn test_missing_required_field() {
        let json = r#"{"weapons": [], "armors": [{"id": 1, "name": "Shirt", "defence": 1.0}]}"#;
        assert!(matches!(
            EquipmentCatalog::from_json_str(json),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_section() {
        let json = r#"{"weapons": []}"#;
        assert!(matches!(
            EquipmentCatalog::from_json_str(json),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_invalid_entry_reported() {
        let json = r#"{"weapons": [{"id": 4, "name": "Bent", "min_damage": 6.0,
            "max_damage": 1.0, "stamina_per_hit": 1.0}], "armors": []}"#;
        match EquipmentCatalog::from_json_str(json) {
            Err(CatalogError::Validation { error, .. }) => {
                assert!(matches!(error, InvalidEntry::DamageRange { .. }));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }
}
