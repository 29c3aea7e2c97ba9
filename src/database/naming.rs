use crate::error::BeanTableError;
use std::fmt::Display;
use std::str::FromStr;

/// Conventions for resolving column names from property names.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Naming {
    /// No change, `catLeg` -> `catLeg`
    #[default]
    Raw,
    /// Camel case to snake case, `catLeg` -> `cat_leg`
    CamelToSnake,
    /// Camel case to screaming snake case, `catLeg` -> `CAT_LEG`
    CamelToScreamingSnake,
}

impl Naming {
    /// Returns the column name for a property name.
    ///
    /// Every uppercase letter starts a new word, so a name that already begins
    /// with an uppercase letter gets a leading underscore (`Leg` -> `_leg`).
    pub fn resolve(&self, name: &str) -> String {
        match self {
            Naming::Raw => name.to_owned(),
            Naming::CamelToSnake => camel_to_snake(name),
            Naming::CamelToScreamingSnake => camel_to_screaming_snake(name),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Naming::Raw => "raw",
            Naming::CamelToSnake => "camel_to_snake",
            Naming::CamelToScreamingSnake => "camel_to_screaming_snake",
        }
    }
}

impl FromStr for Naming {
    type Err = BeanTableError;

    /// Parses a naming convention, ignoring case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_uppercase().as_str() {
            "RAW" | "IDENTITY" => Ok(Self::Raw),
            "CAMEL_TO_SNAKE" | "SNAKE" => Ok(Self::CamelToSnake),
            "CAMEL_TO_SCREAMING_SNAKE" | "SCREAMING_SNAKE" => Ok(Self::CamelToScreamingSnake),
            _ => Err(BeanTableError::invalid_argument(
                "naming",
                &format!("'{}' is not supported", name),
            )),
        }
    }
}

impl Display for Naming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn camel_to_snake(name: &str) -> String {
    let mut resolved = String::with_capacity(name.len() << 1);
    for char in name.chars() {
        if char.is_uppercase() {
            resolved.push('_');
            resolved.extend(char.to_lowercase());
        } else {
            resolved.push(char);
        }
    }
    resolved
}

fn camel_to_screaming_snake(name: &str) -> String {
    let mut resolved = String::with_capacity(name.len() << 1);
    for char in name.chars() {
        if char.is_uppercase() {
            resolved.push('_');
            resolved.push(char);
        } else {
            resolved.extend(char.to_uppercase());
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw() {
        assert_eq!(Naming::Raw.resolve("catLeg"), "catLeg");
        assert_eq!(Naming::Raw.resolve(""), "");
        assert_eq!(Naming::default(), Naming::Raw);
    }

    #[test]
    fn camel_to_snake() {
        assert_eq!(Naming::CamelToSnake.resolve("catLeg"), "cat_leg");
        assert_eq!(Naming::CamelToSnake.resolve("pBoolean"), "p_boolean");
        assert_eq!(Naming::CamelToSnake.resolve("cat_leg"), "cat_leg");
        assert_eq!(Naming::CamelToSnake.resolve("catLegX"), "cat_leg_x");
        assert_eq!(Naming::CamelToSnake.resolve("cat2Leg"), "cat2_leg");
        assert_eq!(Naming::CamelToSnake.resolve(""), "");
    }

    #[test]
    fn camel_to_screaming_snake() {
        assert_eq!(Naming::CamelToScreamingSnake.resolve("catLeg"), "CAT_LEG");
        assert_eq!(Naming::CamelToScreamingSnake.resolve("pBoolean"), "P_BOOLEAN");
        assert_eq!(Naming::CamelToScreamingSnake.resolve("cat2Leg"), "CAT2_LEG");
        assert_eq!(Naming::CamelToScreamingSnake.resolve(""), "");
    }

    #[test]
    fn leading_uppercase_gets_separator() {
        assert_eq!(Naming::CamelToSnake.resolve("Leg"), "_leg");
        assert_eq!(Naming::CamelToScreamingSnake.resolve("Leg"), "_LEG");
    }

    #[test]
    fn reapplying_is_not_idempotent() {
        let once = Naming::CamelToSnake.resolve("catLeg");
        assert_eq!(Naming::CamelToSnake.resolve(&once), once);

        let once = Naming::CamelToScreamingSnake.resolve("catLeg");
        assert_eq!(once, "CAT_LEG");
        assert_eq!(Naming::CamelToScreamingSnake.resolve(&once), "_C_A_T__L_E_G");
    }

    #[test]
    fn parse() {
        assert_eq!("raw".parse::<Naming>().unwrap(), Naming::Raw);
        assert_eq!("Camel_To_Snake".parse::<Naming>().unwrap(), Naming::CamelToSnake);
        assert_eq!(
            "camel_to_screaming_snake".parse::<Naming>().unwrap(),
            Naming::CamelToScreamingSnake
        );
        assert!(matches!(
            "kebab".parse::<Naming>(),
            Err(BeanTableError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for naming in [Naming::Raw, Naming::CamelToSnake, Naming::CamelToScreamingSnake] {
            assert_eq!(naming.to_string().parse::<Naming>().unwrap(), naming);
        }
    }
}
