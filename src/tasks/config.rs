/* ************************************************************************ **
** This file is part of rspace, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#![allow(non_snake_case)]

// NOTE: Please make sure to use the YamlRead trait when deserializing these types!
//       It is what reports unknown keys.

use crate::FailResult;

use std::io::Read;

use rspace_symmetry::{catalog, GroupOps, InvalidArgumentError, Symmetry};
use serde_yaml::Value;

/// Provides an alternative to serde_yaml::from_reader that warns about
/// config keys that were not recognized.
pub trait YamlRead: for <'de> serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, serde_yaml::Error>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, serde_yaml::Error> {
        // serde_ignored needs a Deserializer, which serde_yaml only provides
        // through Value.
        Self::from_value(value_from_dyn_reader(r)?)
    }

    fn from_value(value: Value) -> Result<Self, serde_yaml::Error>;
}

macro_rules! derive_yaml_read {
    ($Type:ty) => {
        impl YamlRead for $Type {
            fn from_value(value: Value) -> Result<$Type, serde_yaml::Error> {
                serde_ignored::deserialize(
                    value,
                    |path| warn!("Unused config item (possible typo?): {}", path),
                )
            }
        }
    };
}

fn value_from_dyn_reader(r: &mut dyn Read) -> Result<Value, serde_yaml::Error>
{ serde_yaml::from_reader(r) }

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// A space group number, a Hermann-Mauguin symbol, or a list of
    /// `x,y,z` operations.  Resolved with [`resolve_symmetry`].
    #[serde(default)]
    pub spacegroup: Option<Value>,

    /// Drop systematically absent reflections instead of only flagging them.
    #[serde(default)]
    pub remove_absences: bool,

    #[serde(default="_settings__label_centrics")]
    pub label_centrics: bool,

    #[serde(default="_settings__compute_multiplicity")]
    pub compute_multiplicity: bool,

    /// `[a, b, c, alpha, beta, gamma]`
    #[serde(default)]
    pub cell: Option<[f64; 6]>,
}
fn _settings__label_centrics() -> bool { true }
fn _settings__compute_multiplicity() -> bool { true }
derive_yaml_read!{Settings}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            spacegroup: None,
            remove_absences: false,
            label_centrics: _settings__label_centrics(),
            compute_multiplicity: _settings__compute_multiplicity(),
            cell: None,
        }
    }
}

const SPACEGROUP_EXPECTED: &str = "space group number, symbol, or list of symmetry operations";

/// Turn the dynamically-typed `spacegroup` setting into symmetry.
///
/// A list of operations resolves to a full space group when it matches one
/// in the catalog, and to bare operations otherwise.
pub fn resolve_symmetry(value: &Value) -> FailResult<Symmetry>
{Ok({
    let wrong_type = |received: &str| InvalidArgumentError {
        parameter: "spacegroup".to_string(),
        expected: SPACEGROUP_EXPECTED.to_string(),
        received: received.to_string(),
    };

    match value {
        Value::Number(n) => match n.as_i64() {
            Some(number) => Symmetry::from(catalog::find_spacegroup_by_number(number)?),
            None => throw!(wrong_type("float")),
        },
        Value::String(s) => Symmetry::from(catalog::find_spacegroup(s)?),
        Value::Sequence(items) => {
            let mut triplets = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => triplets.push(s.as_str()),
                    other => throw!(wrong_type(&format!("list containing {}", type_name(other)))),
                }
            }
            let ops = GroupOps::from_triplets(&triplets)?;
            match catalog::find_spacegroup_by_ops(&ops)? {
                Some(sg) => Symmetry::from(sg),
                None => {
                    debug!("Operations do not match any cataloged space group");
                    Symmetry::from(ops)
                },
            }
        },
        other => throw!(wrong_type(type_name(other))),
    }
})}

fn type_name(value: &Value) -> &'static str
{
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
    }
}

impl Settings {
    pub fn symmetry(&self) -> FailResult<Option<Symmetry>>
    {
        match &self.spacegroup {
            Some(value) => resolve_symmetry(value).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use rspace_symmetry::SymmetrySource;

    fn parse(text: &str) -> Settings
    { Settings::from_reader(text.as_bytes()).unwrap() }

    #[test]
    fn defaults() {
        let settings = parse("{}");
        assert_eq!(settings, Settings::default());
        assert!(settings.label_centrics);
        assert!(!settings.remove_absences);
        assert!(settings.symmetry().unwrap().is_none());
    }

    #[test]
    fn full() {
        let settings = parse("
spacegroup: P 21 21 21
remove-absences: true
compute-multiplicity: false
cell: [10, 20, 30, 90, 90, 90]
");
        assert!(settings.remove_absences);
        assert!(!settings.compute_multiplicity);
        assert_eq!(settings.cell, Some([10.0, 20.0, 30.0, 90.0, 90.0, 90.0]));
        let symmetry = settings.symmetry().unwrap().unwrap();
        assert_eq!(symmetry.spacegroup().map(|sg| sg.number()), Some(19));
    }

    #[test]
    fn spacegroup_forms() {
        let resolve = |text: &str| resolve_symmetry(&serde_yaml::from_str(text).unwrap());

        let by_number = resolve("4").unwrap();
        assert_eq!(by_number.spacegroup().map(|sg| sg.number()), Some(4));

        let by_ops = resolve("['x,y,z', '-x,y+1/2,-z']").unwrap();
        assert_eq!(by_ops, by_number);

        // a valid group that is not a standard setting in the catalog
        let bare = resolve("['x,y,z', '-x,-y,z+1/2']").unwrap();
        assert!(bare.spacegroup().is_none());
        assert_eq!(bare.group_ops().order(), 2);
    }

    #[test]
    fn spacegroup_wrong_types() {
        for &(text, received) in &[
            ("true", "boolean"),
            ("2.5", "float"),
            ("{a: 1}", "mapping"),
            ("~", "null"),
            ("[1, 2]", "list containing integer"),
        ] {
            let err = resolve_symmetry(&serde_yaml::from_str(text).unwrap()).unwrap_err();
            let err = err.downcast::<InvalidArgumentError>().unwrap();
            assert_eq!(err.parameter, "spacegroup");
            assert_eq!(err.received, received);
            assert!(err.to_string().contains(SPACEGROUP_EXPECTED));
        }
    }

    #[test]
    fn out_of_range_number() {
        let err = resolve_symmetry(&serde_yaml::from_str("231").unwrap()).unwrap_err();
        assert!(err.downcast_ref::<rspace_symmetry::ConfigurationError>().is_some());
    }
}
