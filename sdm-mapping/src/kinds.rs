//! Closed enumerations read from string columns
//!
//! Parsing trims surrounding whitespace and ignores case. Anything outside the
//! closed set is an [`UnknownKind`], which the mappers report with row context.

use std::str::FromStr;

use sdm_vocab::sdm::{class, prop};
use thiserror::Error;

use crate::resource::EntityKind;

/// A string outside an enumeration's closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {domain} '{value}'")]
pub struct UnknownKind {
    pub domain: &'static str,
    pub value: String,
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

fn unknown(domain: &'static str, value: &str) -> UnknownKind {
    UnknownKind {
        domain,
        value: value.to_string(),
    }
}

/// Paper subtype (`paper.type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaperKind {
    Demo,
    Full,
    Short,
    Poster,
}

impl PaperKind {
    pub const DOMAIN: &'static str = "paper type";

    pub fn class(self) -> &'static str {
        match self {
            PaperKind::Demo => class::DEMO_PAPER,
            PaperKind::Full => class::FULL_PAPER,
            PaperKind::Short => class::SHORT_PAPER,
            PaperKind::Poster => class::POSTER,
        }
    }
}

impl FromStr for PaperKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "demo" => Ok(PaperKind::Demo),
            "full" => Ok(PaperKind::Full),
            "short" => Ok(PaperKind::Short),
            "poster" => Ok(PaperKind::Poster),
            _ => Err(unknown(Self::DOMAIN, s)),
        }
    }
}

/// Conference subtype (`conference.type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConferenceKind {
    Workshop,
    Symposium,
    ExpertGroup,
    Regular,
}

impl ConferenceKind {
    pub const DOMAIN: &'static str = "conference type";

    pub fn class(self) -> &'static str {
        match self {
            ConferenceKind::Workshop => class::WORKSHOP,
            ConferenceKind::Symposium => class::SYMPOSIUM,
            ConferenceKind::ExpertGroup => class::EXPERT_GROUP,
            ConferenceKind::Regular => class::REGULAR_CONFERENCE,
        }
    }
}

impl FromStr for ConferenceKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "workshop" => Ok(ConferenceKind::Workshop),
            "symposium" => Ok(ConferenceKind::Symposium),
            "expert group" | "expert_group" | "expertgroup" => Ok(ConferenceKind::ExpertGroup),
            "regular" | "regular conference" | "regularconference" => {
                Ok(ConferenceKind::Regular)
            }
            _ => Err(unknown(Self::DOMAIN, s)),
        }
    }
}

/// Kind of venue a paper is submitted to (`paper.venue_type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VenueKind {
    Conference,
    Journal,
}

impl VenueKind {
    pub const DOMAIN: &'static str = "venue type";

    /// Kind of the venue resource itself
    pub fn entity(self) -> EntityKind {
        match self {
            VenueKind::Conference => EntityKind::Conference,
            VenueKind::Journal => EntityKind::Journal,
        }
    }

    /// Kind of publication the venue issues
    pub fn publication(self) -> EntityKind {
        match self {
            VenueKind::Conference => EntityKind::Proceeding,
            VenueKind::Journal => EntityKind::Volume,
        }
    }
}

impl FromStr for VenueKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "conference" => Ok(VenueKind::Conference),
            "journal" => Ok(VenueKind::Journal),
            _ => Err(unknown(Self::DOMAIN, s)),
        }
    }
}

/// Kind of resource a topic row attaches to (`has_topic.target`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicTarget {
    Paper,
    Conference,
    Journal,
    Proceeding,
    Volume,
}

impl TopicTarget {
    pub const DOMAIN: &'static str = "topic target";

    pub fn entity(self) -> EntityKind {
        match self {
            TopicTarget::Paper => EntityKind::Paper,
            TopicTarget::Conference => EntityKind::Conference,
            TopicTarget::Journal => EntityKind::Journal,
            TopicTarget::Proceeding => EntityKind::Proceeding,
            TopicTarget::Volume => EntityKind::Volume,
        }
    }

    /// The `relatedTo` subproperty for this target
    pub fn predicate(self) -> &'static str {
        match self {
            TopicTarget::Paper => prop::PAPER_RELATED_TO,
            TopicTarget::Conference | TopicTarget::Journal => prop::VENUE_RELATED_TO,
            TopicTarget::Proceeding | TopicTarget::Volume => prop::PUBLICATION_RELATED_TO,
        }
    }
}

impl FromStr for TopicTarget {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "paper" => Ok(TopicTarget::Paper),
            "conference" => Ok(TopicTarget::Conference),
            "journal" => Ok(TopicTarget::Journal),
            "proceeding" => Ok(TopicTarget::Proceeding),
            "volume" => Ok(TopicTarget::Volume),
            _ => Err(unknown(Self::DOMAIN, s)),
        }
    }
}
