pub mod credentials;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::model::{
    Constituent, CourseAttribute, IdType, IdentifierKind, ProfileAttribute, SectionAttribute,
    Semester, TemporalPosition,
};

#[derive(Debug, Parser)]
#[command(name = "sis")]
#[command(about = "Query a campus student information system")]
pub struct Cli {
    /// Credentials file (default: ~/.sis.json)
    #[arg(short = 'f', long)]
    pub credentials: Option<PathBuf>,

    /// Set info log level
    #[arg(short, long)]
    pub verbose: bool,

    /// Set debug log level
    #[arg(short, long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get lists of people associated with a class section
    People {
        /// SIS term id or temporal position, e.g. 2192 or current
        #[arg(short, long)]
        term: Option<String>,

        /// Course year, e.g. 2019
        #[arg(short, long)]
        year: Option<u16>,

        #[arg(short, long, value_enum)]
        semester: Option<Semester>,

        /// Class section number, e.g. 14720
        #[arg(short = 'n', long)]
        section: u32,

        #[arg(short, long, value_enum, default_value = "enrolled")]
        constituents: Constituent,

        #[arg(short, long, value_enum, default_value = "campus-uid")]
        identifier: IdentifierKind,

        /// Exclude sibling sections that merely share subject and catalog number
        #[arg(long)]
        exact: bool,
    },

    /// Get information about a section
    Section {
        /// SIS term id or temporal position, e.g. 2192 or current
        #[arg(short, long)]
        term: Option<String>,

        /// Course year, e.g. 2019
        #[arg(short, long)]
        year: Option<u16>,

        #[arg(short, long, value_enum)]
        semester: Option<Semester>,

        /// Class section number, e.g. 14720
        #[arg(short = 'n', long)]
        section: u32,

        #[arg(short, long, value_enum)]
        attribute: SectionAttribute,
    },

    /// Get information about a student
    Student {
        /// Id of the student
        #[arg(short, long)]
        id: String,

        #[arg(short = 't', long = "type", value_enum, default_value = "campus-uid")]
        id_type: IdType,

        #[arg(short, long, value_enum)]
        attribute: ProfileAttribute,
    },

    /// Get a student's courses for a term
    Courses {
        /// Id of the student
        #[arg(short, long)]
        id: String,

        #[arg(short = 't', long = "type", value_enum, default_value = "campus-uid")]
        id_type: IdType,

        /// Term year, e.g. 2019
        #[arg(short, long)]
        year: u16,

        #[arg(short, long, value_enum)]
        semester: Semester,

        #[arg(short, long, value_enum, default_value = "course-id")]
        attribute: CourseAttribute,

        /// Include waitlisted courses
        #[arg(short = 'w', long)]
        include_waitlisted: bool,
    },

    /// Get a term identifier
    Term {
        #[arg(short, long, value_enum)]
        position: Option<TemporalPosition>,

        /// Term year, e.g. 2019
        #[arg(short, long)]
        year: Option<u16>,

        #[arg(short, long, value_enum)]
        semester: Option<Semester>,
    },
}
