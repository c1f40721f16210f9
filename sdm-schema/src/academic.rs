//! The fixed academic publishing vocabulary

use sdm_graph_ir::Datatype;
use sdm_vocab::sdm::{class as c, prop as p};

use crate::{Schema, SchemaBuilder, SchemaResult};

impl Schema {
    /// Build the academic publishing vocabulary under `namespace`.
    ///
    /// Fails only if the namespace is malformed.
    pub fn academic(namespace: &str) -> SchemaResult<Schema> {
        let string = Datatype::xsd_string;
        let date = Datatype::xsd_date;

        SchemaBuilder::new(namespace)
            // People
            .class(c::PERSON)
            .subclass(c::AUTHOR, c::PERSON)
            .subclass(c::ORGANIZER, c::AUTHOR)
            .subclass(c::CHAIR, c::ORGANIZER)
            .subclass(c::EDITOR, c::ORGANIZER)
            // Papers
            .class(c::PAPER)
            .subclass(c::DEMO_PAPER, c::PAPER)
            .subclass(c::FULL_PAPER, c::PAPER)
            .subclass(c::SHORT_PAPER, c::PAPER)
            .subclass(c::POSTER, c::PAPER)
            // Publications
            .class(c::PUBLICATION)
            .subclass(c::PROCEEDING, c::PUBLICATION)
            .subclass(c::VOLUME, c::PUBLICATION)
            // Venues
            .class(c::VENUE)
            .subclass(c::JOURNAL, c::VENUE)
            .subclass(c::CONFERENCE, c::VENUE)
            .subclass(c::WORKSHOP, c::CONFERENCE)
            .subclass(c::REGULAR_CONFERENCE, c::CONFERENCE)
            .subclass(c::SYMPOSIUM, c::CONFERENCE)
            .subclass(c::EXPERT_GROUP, c::CONFERENCE)
            // Roots without subclasses
            .class(c::SUBMISSION)
            .class(c::REVIEW)
            .class(c::AREA)
            // Object properties
            .object_property(p::HAS_AUTHOR, c::PAPER, c::AUTHOR)
            .object_property(p::HAS_REVIEWER, c::REVIEW, c::AUTHOR)
            .object_property(p::ASSIGNED_BY, c::SUBMISSION, c::ORGANIZER)
            .object_property(p::HAS_ORGANIZER, c::VENUE, c::ORGANIZER)
            .object_property(p::HAS_REVIEW, c::SUBMISSION, c::REVIEW)
            .object_property(p::INCLUDED_IN, c::PAPER, c::SUBMISSION)
            .object_property_any_domain(p::RELATED_TO, c::AREA)
            .object_property(p::PAPER_RELATED_TO, c::PAPER, c::AREA)
            .object_property(p::VENUE_RELATED_TO, c::VENUE, c::AREA)
            .object_property(p::PUBLICATION_RELATED_TO, c::PUBLICATION, c::AREA)
            .sub_property_of(p::PAPER_RELATED_TO, p::RELATED_TO)
            .sub_property_of(p::VENUE_RELATED_TO, p::RELATED_TO)
            .sub_property_of(p::PUBLICATION_RELATED_TO, p::RELATED_TO)
            .object_property(p::SUBMITTED_TO, c::SUBMISSION, c::VENUE)
            .object_property(p::PUBLISHED_IN, c::PAPER, c::PUBLICATION)
            .object_property(p::POSTER_PUBLISHED_IN, c::POSTER, c::PROCEEDING)
            .sub_property_of(p::POSTER_PUBLISHED_IN, p::PUBLISHED_IN)
            .object_property(p::HAS_PUBLISHED, c::VENUE, c::PUBLICATION)
            // Person / Author
            .data_property(p::HAS_PERSON_NAME, c::PERSON, string())
            .data_property(p::HAS_BIRTH_DATE, c::PERSON, date())
            .data_property(p::HAS_SEX, c::PERSON, string())
            .data_property(p::ORIGIN_COUNTRY, c::PERSON, string())
            .data_property(p::HAS_H_INDEX, c::AUTHOR, Datatype::xsd_float())
            .data_property(p::URL, c::AUTHOR, string())
            .data_property(p::AFFILIATED_WITH_INSTITUTION, c::AUTHOR, string())
            // Review / Submission
            .data_property(p::DECISION, c::REVIEW, Datatype::xsd_boolean())
            .data_property(p::CONTENT, c::REVIEW, string())
            .data_property(p::REVIEW_DATE, c::REVIEW, date())
            .data_property(p::SUBMISSION_DATE, c::SUBMISSION, date())
            // Venue / Conference
            .data_property(p::HAS_VENUE_TITLE, c::VENUE, string())
            .data_property(p::CONFERENCE_SERIES, c::CONFERENCE, string())
            .data_property(p::START_DATE, c::CONFERENCE, date())
            .data_property(p::END_DATE, c::CONFERENCE, date())
            .data_property(p::HELD_IN, c::CONFERENCE, string())
            .data_property(p::HELD_IN_YEAR, c::CONFERENCE, Datatype::xsd_integer())
            // Publication
            .data_property(p::PUBLICATION_ISSN, c::PUBLICATION, string())
            .data_property(p::PUBLISHER, c::PUBLICATION, string())
            .data_property(p::PUBLISHED_DATE, c::PUBLICATION, date())
            // Paper
            .data_property(p::PAPER_TITLE, c::PAPER, string())
            .data_property(p::PAPER_WORD_COUNT, c::PAPER, Datatype::xsd_integer())
            .data_property(p::PAPER_ABSTRACT, c::PAPER, string())
            .data_property(p::PAPER_DOI, c::PAPER, string())
            // Area
            .data_property(p::HAS_TOPIC_NAME, c::AREA, string())
            .build()
    }
}
