use super::Weapon;
use crate::Result;
use camino::Utf8Path;
use ohno::{EnrichableExt, IntoAppError, bail};
use std::fs;

const LOG_TARGET: &str = "   weapons";

/// Format of a weapon list file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeaponFormat {
    Json,
    Yaml,
}

impl WeaponFormat {
    fn from_path(path: &Utf8Path) -> Result<Self> {
        match path.extension() {
            None | Some("json") => Ok(Self::Json),
            Some("yml" | "yaml") => Ok(Self::Yaml),
            Some(other) => bail!("unsupported weapon file extension '{other}' for '{path}' (expected json, yaml or yml)"),
        }
    }
}

/// Load a list of weapons from a JSON or YAML file, picking the format from the extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension, or does not parse
pub fn load_weapons(path: &Utf8Path) -> Result<Vec<Weapon>> {
    let format = WeaponFormat::from_path(path)?;
    let text = fs::read_to_string(path).into_app_err_with(|| format!("reading weapon file '{path}'"))?;
    let weapons = parse(&text, format).map_err(|e| e.enrich_with(|| format!("parsing weapon file '{path}'")))?;

    log::debug!(target: LOG_TARGET, "Loaded {} weapons from '{path}'", weapons.len());
    Ok(weapons)
}

/// Parse a JSON list of weapons.
///
/// # Errors
///
/// Returns an error if the text is not a valid weapon list
pub fn parse_weapons(json: &str) -> Result<Vec<Weapon>> {
    parse(json, WeaponFormat::Json)
}

fn parse(text: &str, format: WeaponFormat) -> Result<Vec<Weapon>> {
    let mut weapons: Vec<Weapon> = match format {
        WeaponFormat::Json => serde_json::from_str(text).into_app_err("invalid weapon JSON")?,
        WeaponFormat::Yaml => serde_yaml::from_str(text).into_app_err("invalid weapon YAML")?,
    };
    weapons.iter_mut().for_each(Weapon::ensure_id);
    Ok(weapons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weapons::DamageType;
    use camino::Utf8PathBuf;

    const ONE_WEAPON_JSON: &str = r#"[{
        "name": "Messer",
        "damageType": "Cut",
        "attacks": {
            "average": { "range": 70, "altRange": 65,
                "light": { "damage": 40, "windup": 425, "release": 250, "recovery": 550, "combo": 400 },
                "heavy": { "damage": 65, "windup": 775, "release": 250, "recovery": 650, "combo": 600 } },
            "slash": { "range": 70, "altRange": 65,
                "light": { "damage": 40, "windup": 425, "release": 250, "recovery": 550 },
                "heavy": { "damage": 65, "windup": 775, "release": 250, "recovery": 650 } },
            "overhead": { "range": 72, "altRange": 67,
                "light": { "damage": 45, "windup": 475, "release": 250, "recovery": 550 },
                "heavy": { "damage": 70, "windup": 825, "release": 250, "recovery": 650 } },
            "stab": { "range": 68, "altRange": 63,
                "light": { "damage": 35, "windup": 400, "release": 200, "recovery": 550, "cleaveOverride": false },
                "heavy": { "damage": 60, "windup": 725, "release": 200, "recovery": 650 } },
            "special": { "damage": 50, "windup": 500 }
        }
    }]"#;

    #[test]
    fn test_parse_weapons_json() {
        let weapons = parse_weapons(ONE_WEAPON_JSON).unwrap();
        assert_eq!(weapons.len(), 1);

        let messer = &weapons[0];
        assert_eq!(messer.name, "Messer");
        assert_eq!(messer.id, "messer");
        assert_eq!(messer.damage_type, DamageType::Cut);
        assert!((messer.attacks.average.alt_range - 65.0).abs() < f64::EPSILON);
        assert_eq!(messer.attacks.stab.light.cleave_override, Some(false));
        assert!((messer.attacks.special.windup - 500.0).abs() < f64::EPSILON);
        assert!((messer.attacks.throw.damage - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_weapons_rejects_garbage() {
        assert!(parse_weapons("{not json").is_err());
        assert!(parse_weapons(r#"[{"name": "x"}]"#).is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(WeaponFormat::from_path(Utf8Path::new("w.json")).unwrap(), WeaponFormat::Json);
        assert_eq!(WeaponFormat::from_path(Utf8Path::new("w.yml")).unwrap(), WeaponFormat::Yaml);
        assert_eq!(WeaponFormat::from_path(Utf8Path::new("w.yaml")).unwrap(), WeaponFormat::Yaml);
        assert!(WeaponFormat::from_path(Utf8Path::new("w.toml")).is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_weapons_from_yaml_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("weapons.yaml")).unwrap();

        let weapons = parse_weapons(ONE_WEAPON_JSON).unwrap();
        fs::write(&path, serde_yaml::to_string(&weapons).unwrap()).unwrap();

        let loaded = load_weapons(&path).unwrap();
        assert_eq!(loaded, weapons);
    }

    #[test]
    fn test_load_weapons_missing_file() {
        assert!(load_weapons(Utf8Path::new("definitely/not/here.json")).is_err());
    }
}
