//! # gdpr-report — Registry of Processing Activities as PDF
//!
//! Renders one organization's part of the registry as a paginated PDF
//! document with a cover page, a table of contents and numbered sections.
//!
//! ## Architecture
//!
//! - **Fields** (`fields.rs`): per-kind static descriptor lists naming the
//!   fields a table shows and how to extract each value.
//! - **Format** (`format.rs`): the closed [`FieldValue`] enum and the
//!   [`FormatContext`] that renders it (yes/no labels, empty marker, date
//!   formats, UTC offset).
//! - **Report** (`report.rs`): walks the record graph in report order and
//!   emits layout blocks, with placeholders for missing links.
//! - **Layout** (`layout.rs`): flows blocks onto A4 pages, draws headers and
//!   footers, and resolves TOC page numbers by repeated passes.
//! - **PDF** (`pdf.rs`, `font.rs`): writes the pages as PDF 1.4 using the
//!   standard Helvetica fonts.
//!
//! ## Crate Policy
//!
//! - Read-only: the store is only queried, never mutated.
//! - No global formatting state; everything comes from [`ReportOptions`].
//! - The only error is an unknown root organization.

pub mod error;
pub mod fields;
pub mod font;
pub mod format;
pub mod headings;
pub mod layout;
pub mod pdf;
pub mod report;

pub use error::ReportError;
pub use fields::{field_rows, Describe, FieldDescriptor};
pub use format::{FieldValue, FormatContext};
pub use headings::SectionCounter;
pub use layout::{Block, Layout, TocEntry};
pub use report::{generate_report, render_report, RenderedReport, ReportOptions, REPORT_TITLE};
