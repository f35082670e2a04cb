//! Multi-select option sets.
//!
//! Sets are stored as bitflags, which makes membership checks cheap and removes
//! duplicates. On the wire they are an ordered list of labels, always in domain order,
//! so two equal sets serialize identically regardless of selection order.

use bitflags::{Flags, bitflags};
use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A bitflags set whose members have display labels.
pub trait LabelledSet: Flags + Copy + 'static {
    /// Every member with its label, in domain order.
    const MEMBERS: &'static [(Self, &'static str)];

    #[must_use]
    fn from_label(label: &str) -> Option<Self> {
        Self::MEMBERS.iter().find(|(_, l)| *l == label).map(|(flag, _)| *flag)
    }

    /// Labels of the contained members, in domain order.
    fn labels(&self) -> Vec<&'static str> {
        Self::MEMBERS.iter().filter(|(flag, _)| self.contains(*flag)).map(|(_, l)| *l).collect()
    }

    /// Every allowed label, in domain order.
    #[must_use]
    fn domain() -> Vec<&'static str> {
        Self::MEMBERS.iter().map(|(_, l)| *l).collect()
    }

    /// Builds a set from labels, returning the first label that is not a member.
    ///
    /// # Errors
    /// Returns the offending label when it is outside the domain.
    fn try_from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Result<Self, &'a str> {
        labels.into_iter().try_fold(Self::empty(), |set, label| {
            Self::from_label(label).map(|flag| set.union(flag)).ok_or(label)
        })
    }
}

bitflags! {
    /// Training corpora.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DataSources: u8 {
        const BOOKS = 1 << 0;
        const WIKIPEDIA = 1 << 1;
        const RESEARCH_PAPERS = 1 << 2;
        const CODE_REPOSITORIES = 1 << 3;
        const WEB_CRAWLS = 1 << 4;
    }
}

impl LabelledSet for DataSources {
    const MEMBERS: &'static [(Self, &'static str)] = &[
        (Self::BOOKS, "Books"),
        (Self::WIKIPEDIA, "Wikipedia"),
        (Self::RESEARCH_PAPERS, "Research Papers"),
        (Self::CODE_REPOSITORIES, "Code Repositories"),
        (Self::WEB_CRAWLS, "Web Crawls"),
    ];
}

bitflags! {
    /// Corpus preparation steps.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PreprocessingSteps: u8 {
        const REMOVE_DUPLICATES = 1 << 0;
        const TOKENIZATION = 1 << 1;
        const NORMALIZATION = 1 << 2;
        const SPLIT = 1 << 3;
    }
}

impl LabelledSet for PreprocessingSteps {
    const MEMBERS: &'static [(Self, &'static str)] = &[
        (Self::REMOVE_DUPLICATES, "Remove Duplicates"),
        (Self::TOKENIZATION, "Tokenization"),
        (Self::NORMALIZATION, "Normalization"),
        (Self::SPLIT, "Train/Test/Validation Split"),
    ];
}

fn serialize_labels<T: LabelledSet, S: Serializer>(set: &T, serializer: S) -> Result<S::Ok, S::Error> {
    let labels = set.labels();
    let mut seq = serializer.serialize_seq(Some(labels.len()))?;
    for label in labels {
        seq.serialize_element(label)?;
    }
    seq.end()
}

fn deserialize_labels<'de, T: LabelledSet, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
    let labels = Vec::<String>::deserialize(deserializer)?;
    T::try_from_labels(labels.iter().map(String::as_str))
        .map_err(|label| D::Error::custom(format!("unknown option '{label}'")))
}

impl Serialize for DataSources {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_labels(self, serializer)
    }
}

impl<'de> Deserialize<'de> for DataSources {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_labels(deserializer)
    }
}

impl Serialize for PreprocessingSteps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_labels(self, serializer)
    }
}

impl<'de> Deserialize<'de> for PreprocessingSteps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_labels(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_come_out_in_domain_order() {
        let set = DataSources::try_from_labels(["Web Crawls", "Books", "Books"]).unwrap();
        assert_eq!(set, DataSources::BOOKS | DataSources::WEB_CRAWLS);
        assert_eq!(set.labels(), vec!["Books", "Web Crawls"]);
    }

    #[test]
    fn unknown_label_is_reported() {
        let err = PreprocessingSteps::try_from_labels(["Tokenization", "Stemming"]).unwrap_err();
        assert_eq!(err, "Stemming");
    }

    #[test]
    fn domain_lists_every_member() {
        assert_eq!(
            PreprocessingSteps::domain(),
            vec!["Remove Duplicates", "Tokenization", "Normalization", "Train/Test/Validation Split"]
        );
        assert_eq!(DataSources::MEMBERS.len(), DataSources::all().iter().count());
    }
}
