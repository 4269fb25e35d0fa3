use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire-level identifier of one quiz question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    SnapRecipient,
    Age,
    Children,
    Exemptions,
}

impl QuestionId {
    pub const ALL: [QuestionId; 4] = [
        QuestionId::SnapRecipient,
        QuestionId::Age,
        QuestionId::Children,
        QuestionId::Exemptions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionId::SnapRecipient => "snap_recipient",
            QuestionId::Age => "age",
            QuestionId::Children => "children",
            QuestionId::Exemptions => "exemptions",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.as_str() == key)
    }

    /// Accepted option values, in catalog order.
    pub fn values(self) -> &'static [&'static str] {
        match self {
            QuestionId::SnapRecipient => SnapRecipient::VALUES,
            QuestionId::Age => AgeBracket::VALUES,
            QuestionId::Children => ChildrenBracket::VALUES,
            QuestionId::Exemptions => Exemption::VALUES,
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue(pub String);

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option value: {}", self.0)
    }
}

impl std::error::Error for UnknownValue {}

// Each option enum maps 1:1 onto the values the quiz emits. The clap ValueEnum
// names are pinned to the same strings so flags and answer files agree.
macro_rules! answer_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                #[value(name = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(UnknownValue(other.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

answer_enum! {
    SnapRecipient {
        Yes => "yes",
        No => "no",
    }
}

answer_enum! {
    AgeBracket {
        Under18 => "under_18",
        From18To54 => "18_to_54",
        From55To64 => "55_to_64",
        Over64 => "over_64",
    }
}

answer_enum! {
    /// Age of the youngest dependent child, if any.
    ChildrenBracket {
        NoChildren => "no_children",
        Under14 => "under_14",
        From14To17 => "14_to_17",
        Over18 => "over_18",
    }
}

answer_enum! {
    Exemption {
        Disabled => "disabled",
        Pregnant => "pregnant",
        MedicallyUnable => "medically_unable",
        Caregiver => "caregiver",
        Veteran => "veteran",
        Homeless => "homeless",
        FosterYouth => "foster_youth",
        NoExemption => "none",
    }
}

impl Exemption {
    /// Exemptions that survived HR1.
    pub fn is_retained(self) -> bool {
        matches!(
            self,
            Exemption::Disabled
                | Exemption::Pregnant
                | Exemption::MedicallyUnable
                | Exemption::Caregiver
        )
    }

    /// Exemptions that HR1 removed.
    pub fn is_removed(self) -> bool {
        matches!(
            self,
            Exemption::Veteran | Exemption::Homeless | Exemption::FosterYouth
        )
    }
}

/// A complete, in-domain set of quiz answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerSet {
    pub snap_recipient: SnapRecipient,
    pub age: AgeBracket,
    pub children: ChildrenBracket,
    pub exemptions: Exemption,
}

impl AnswerSet {
    pub fn new(
        snap_recipient: SnapRecipient,
        age: AgeBracket,
        children: ChildrenBracket,
        exemptions: Exemption,
    ) -> Self {
        Self {
            snap_recipient,
            age,
            children,
            exemptions,
        }
    }

    /// Every valid answer set, 256 in total.
    #[cfg(test)]
    pub fn all() -> Vec<AnswerSet> {
        fn parsed<T: FromStr>(values: &[&str]) -> Vec<T> {
            values.iter().filter_map(|v| v.parse().ok()).collect()
        }
        let mut out = Vec::new();
        for s in parsed::<SnapRecipient>(SnapRecipient::VALUES) {
            for a in parsed::<AgeBracket>(AgeBracket::VALUES) {
                for c in parsed::<ChildrenBracket>(ChildrenBracket::VALUES) {
                    for e in parsed::<Exemption>(Exemption::VALUES) {
                        out.push(AnswerSet::new(s, a, c, e));
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_round_trip_through_from_str() {
        for v in AgeBracket::VALUES {
            assert_eq!(v.parse::<AgeBracket>().map(|a| a.as_str()), Ok(*v));
        }
        for v in Exemption::VALUES {
            assert_eq!(v.parse::<Exemption>().map(|e| e.as_str()), Ok(*v));
        }
        assert_eq!("18_to_54".parse::<AgeBracket>(), Ok(AgeBracket::From18To54));
        assert_eq!(
            "foster_youth".parse::<Exemption>(),
            Ok(Exemption::FosterYouth)
        );
        assert!("18-54".parse::<AgeBracket>().is_err());
        assert!("Yes".parse::<SnapRecipient>().is_err());
    }

    #[test]
    fn question_ids_parse_wire_keys() {
        assert_eq!(QuestionId::parse("children"), Some(QuestionId::Children));
        assert_eq!(QuestionId::parse("income"), None);
    }

    #[test]
    fn domain_has_256_answer_sets() {
        let all = AnswerSet::all();
        assert_eq!(all.len(), 256);
        assert_eq!(all.iter().collect::<std::collections::HashSet<_>>().len(), 256);
    }

    #[test]
    fn serde_uses_wire_values() {
        let a = AnswerSet::new(
            SnapRecipient::Yes,
            AgeBracket::From55To64,
            ChildrenBracket::From14To17,
            Exemption::NoExemption,
        );
        let v = serde_json::to_value(a).unwrap();
        assert_eq!(v["age"], "55_to_64");
        assert_eq!(v["children"], "14_to_17");
        assert_eq!(v["exemptions"], "none");
    }

    #[test]
    fn exemption_groups_are_disjoint() {
        for e in Exemption::VALUES.iter().map(|v| v.parse::<Exemption>().unwrap()) {
            assert!(!(e.is_retained() && e.is_removed()));
        }
        assert!(!Exemption::NoExemption.is_retained());
        assert!(!Exemption::NoExemption.is_removed());
    }
}
