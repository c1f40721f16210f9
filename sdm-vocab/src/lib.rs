//! RDF vocabulary constants for the scholarly data model
//!
//! This crate is the single place where IRIs are spelled out. Everything else
//! in the workspace refers to these constants.
//!
//! # Organization
//!
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `sdm` - local names of the academic publishing vocabulary
//! - `prefixes` - conventional prefix labels for serialization

/// RDF vocabulary constants
pub mod rdf {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:subClassOf IRI
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

    /// rdfs:subPropertyOf IRI
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";

    /// rdfs:domain IRI
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";

    /// rdfs:range IRI
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
}

/// XSD vocabulary constants
pub mod xsd {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:float IRI
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
}

/// Conventional prefix labels used by the Turtle writer and the TBox graph
pub mod prefixes {
    pub const RDF: &str = "rdf";
    pub const RDFS: &str = "rdfs";
    pub const XSD: &str = "xsd";
    pub const SDM: &str = "sdm";
}

/// Academic publishing vocabulary (local names, resolved against a namespace)
///
/// The namespace itself is a run-time value owned by the schema, so only
/// local names live here.
///
/// # Example
/// ```
/// use sdm_vocab::sdm;
///
/// let iri = format!("{}{}", sdm::DEFAULT_NS, sdm::class::PAPER);
/// assert_eq!(iri, "http://example.org/sdm#Paper");
/// ```
pub mod sdm {
    /// Namespace used when none is configured
    pub const DEFAULT_NS: &str = "http://example.org/sdm#";

    /// Class local names
    pub mod class {
        pub const PERSON: &str = "Person";
        pub const AUTHOR: &str = "Author";
        pub const ORGANIZER: &str = "Organizer";
        pub const CHAIR: &str = "Chair";
        pub const EDITOR: &str = "Editor";

        pub const VENUE: &str = "Venue";
        pub const CONFERENCE: &str = "Conference";
        pub const WORKSHOP: &str = "Workshop";
        pub const SYMPOSIUM: &str = "Symposium";
        pub const EXPERT_GROUP: &str = "ExpertGroup";
        pub const REGULAR_CONFERENCE: &str = "RegularConference";
        pub const JOURNAL: &str = "Journal";

        pub const PUBLICATION: &str = "Publication";
        pub const PROCEEDING: &str = "Proceeding";
        pub const VOLUME: &str = "Volume";

        pub const PAPER: &str = "Paper";
        pub const DEMO_PAPER: &str = "DemoPaper";
        pub const FULL_PAPER: &str = "FullPaper";
        pub const SHORT_PAPER: &str = "ShortPaper";
        pub const POSTER: &str = "Poster";

        pub const SUBMISSION: &str = "Submission";
        pub const REVIEW: &str = "Review";
        pub const AREA: &str = "Area";
    }

    /// Property local names
    pub mod prop {
        // Object properties
        pub const HAS_AUTHOR: &str = "hasAuthor";
        pub const HAS_REVIEWER: &str = "hasReviewer";
        pub const ASSIGNED_BY: &str = "assignedBy";
        pub const HAS_ORGANIZER: &str = "hasOrganizer";
        pub const HAS_REVIEW: &str = "hasReview";
        pub const INCLUDED_IN: &str = "includedIn";
        pub const RELATED_TO: &str = "relatedTo";
        pub const PAPER_RELATED_TO: &str = "paperRelatedTo";
        pub const VENUE_RELATED_TO: &str = "venueRelatedTo";
        pub const PUBLICATION_RELATED_TO: &str = "publicationRelatedTo";
        pub const SUBMITTED_TO: &str = "submittedTo";
        pub const PUBLISHED_IN: &str = "publishedIn";
        pub const POSTER_PUBLISHED_IN: &str = "posterPublishedIn";
        pub const HAS_PUBLISHED: &str = "hasPublished";

        // Person / Author
        pub const HAS_PERSON_NAME: &str = "hasPersonName";
        pub const HAS_BIRTH_DATE: &str = "hasBirthDate";
        pub const HAS_SEX: &str = "hasSex";
        pub const ORIGIN_COUNTRY: &str = "originCountry";
        pub const HAS_H_INDEX: &str = "hasHIndex";
        pub const URL: &str = "url";
        pub const AFFILIATED_WITH_INSTITUTION: &str = "affiliatedWithInstitution";

        // Review / Submission
        pub const DECISION: &str = "decision";
        pub const CONTENT: &str = "content";
        pub const REVIEW_DATE: &str = "reviewDate";
        pub const SUBMISSION_DATE: &str = "submissionDate";

        // Venue / Conference
        pub const HAS_VENUE_TITLE: &str = "hasVenueTitle";
        pub const CONFERENCE_SERIES: &str = "conferenceSeries";
        pub const START_DATE: &str = "startDate";
        pub const END_DATE: &str = "endDate";
        pub const HELD_IN: &str = "heldIn";
        pub const HELD_IN_YEAR: &str = "heldInYear";

        // Publication
        pub const PUBLICATION_ISSN: &str = "publicationIssn";
        pub const PUBLISHER: &str = "publisher";
        pub const PUBLISHED_DATE: &str = "publishedDate";

        // Paper
        pub const PAPER_TITLE: &str = "paperTitle";
        pub const PAPER_WORD_COUNT: &str = "paperWordCount";
        pub const PAPER_ABSTRACT: &str = "paperAbstract";
        pub const PAPER_DOI: &str = "paperDOI";

        // Area
        pub const HAS_TOPIC_NAME: &str = "hasTopicName";
    }
}
