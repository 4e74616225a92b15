//! # Organization Report
//!
//! Walks one organization's record graph in a fixed order and turns it into
//! layout blocks: the organization, its DPO, then every business process
//! with its activities and data audits. Missing links become placeholder
//! paragraphs; nothing in the graph can make rendering fail once the root
//! organization exists.

use gdpr_core::{OrganizationId, Timestamp};
use gdpr_model::{DataAudit, Organization, RecordStore};

use crate::error::ReportError;
use crate::fields::{field_rows, Describe};
use crate::format::FormatContext;
use crate::headings::SectionCounter;
use crate::layout::{paginate, Block, Decorations, Layout};
use crate::pdf::{write_pdf, DocumentInfo};

/// Title of the cover page, the TOC and the PDF metadata.
pub const REPORT_TITLE: &str = "GDPR Registry of Processing Activities";

pub const NO_DPO: &str = "DPO has not been set.";
pub const NONE_AVAILABLE: &str = "None available.";
pub const NO_SUBJECT_CATEGORIES: &str = "There are no data subject categories for the data (!)";
pub const NO_MANAGEMENT_POLICY: &str = "No Management Policy for the data (!)";
pub const NO_TRANSFERS: &str = "Sounds Good. No data transfers.";
pub const NO_BREACH_DETECTION: &str = "No Data Breach Detection method found (!)";
pub const NO_BREACH_RESPONSE: &str = "No Data Breach Response plan found (!)";
pub const NO_DPIA: &str = "No Data Protection Impact Assessment found (!)";

/// Settings for one report run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub format: FormatContext,
    /// Text of the branding mark on the cover and in page headers.
    pub branding: String,
    /// Stamped in every page header.
    pub generated_at: Timestamp,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: FormatContext::default(),
            branding: "GDPR Registry".into(),
            generated_at: Timestamp::now(),
        }
    }
}

/// A report laid out and ready to serialize.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub blocks: Vec<Block>,
    pub layout: Layout,
    info: DocumentInfo,
}

impl RenderedReport {
    /// Serialize as PDF.
    pub fn to_pdf(&self) -> Vec<u8> {
        write_pdf(&self.layout.pages, &self.info)
    }
}

/// Render the report of one organization as PDF bytes.
///
/// # Errors
///
/// [`ReportError::OrganizationNotFound`] when `organization` is not in the
/// store. No output is produced in that case.
pub fn generate_report(
    store: &dyn RecordStore,
    organization: OrganizationId,
    options: &ReportOptions,
) -> Result<Vec<u8>, ReportError> {
    Ok(render_report(store, organization, options)?.to_pdf())
}

/// Build and lay out the report of one organization.
pub fn render_report(
    store: &dyn RecordStore,
    organization: OrganizationId,
    options: &ReportOptions,
) -> Result<RenderedReport, ReportError> {
    let org = store
        .organization(organization)
        .ok_or(ReportError::OrganizationNotFound(organization))?;
    tracing::debug!(organization = %organization, "building report");

    let blocks = ReportBuilder::new(store, &options.format).build(org);
    let decor = Decorations {
        title: REPORT_TITLE.to_string(),
        branding: options.branding.clone(),
        organization: org.named.name.clone(),
        generated_on: options.format.datetime(&options.generated_at),
    };
    let layout = paginate(&blocks, &decor);
    tracing::info!(
        organization = %organization,
        pages = layout.pages.len(),
        toc_entries = layout.toc.len(),
        passes = layout.passes,
        "rendered report"
    );
    Ok(RenderedReport {
        blocks,
        layout,
        info: DocumentInfo {
            title: REPORT_TITLE.to_string(),
            producer: "gdpr-registry".to_string(),
            created: options.generated_at,
        },
    })
}

// ─── Block construction ──────────────────────────────────────────────

struct ReportBuilder<'a> {
    store: &'a dyn RecordStore,
    ctx: &'a FormatContext,
    counter: SectionCounter,
    blocks: Vec<Block>,
}

impl<'a> ReportBuilder<'a> {
    fn new(store: &'a dyn RecordStore, ctx: &'a FormatContext) -> Self {
        Self {
            store,
            ctx,
            counter: SectionCounter::new(),
            blocks: Vec::new(),
        }
    }

    fn heading(&mut self, level: usize, text: String, toc_text: String) {
        let number = self.counter.next(level);
        self.blocks.push(Block::Heading {
            level,
            number,
            text,
            toc_text,
        });
    }

    fn table<T: Describe>(&mut self, record: &T, exclude: &[&str]) {
        let rows = field_rows(record, self.store, self.ctx, exclude);
        if !rows.is_empty() {
            self.blocks.push(Block::Table(rows));
        }
    }

    fn placeholder(&mut self, text: &str) {
        self.blocks.push(Block::Paragraph {
            text: text.to_string(),
            italic: true,
        });
    }

    fn caption(&mut self, text: &str) {
        self.blocks.push(Block::Caption(text.to_string()));
    }

    fn build(mut self, org: &Organization) -> Vec<Block> {
        let store = self.store;
        self.blocks.push(Block::Title(REPORT_TITLE.to_string()));
        self.blocks.push(Block::Toc);
        self.blocks.push(Block::PageBreak);

        let title = format!("Organization: {}", org.named.name);
        self.heading(1, title.clone(), title);
        self.table(org, &["business", "officer"]);

        let dpo = "Data Protection Officer".to_string();
        self.heading(1, dpo.clone(), dpo);
        match org.officer.and_then(|id| store.officer(id)) {
            Some(officer) => {
                let mut rows = field_rows(officer, store, self.ctx, &["user"]);
                rows.extend(field_rows(
                    &officer.user,
                    store,
                    self.ctx,
                    &["password", "username", "is_staff", "is_active", "date_joined"],
                ));
                self.blocks.push(Block::Table(rows));
            }
            None => self.placeholder(NO_DPO),
        }

        let processes: Vec<_> = org
            .business
            .iter()
            .filter_map(|&id| store.business_process(id))
            .collect();
        let title = format!("Business Processes ({})", processes.len());
        self.heading(1, title.clone(), title);
        if processes.is_empty() {
            self.placeholder(NONE_AVAILABLE);
        }

        for process in processes {
            let activities: Vec<_> = process
                .activities
                .iter()
                .filter_map(|&id| store.activity(id))
                .collect();
            let title = format!(
                "Process: {} (activities: {})",
                process.named.name,
                activities.len()
            );
            self.heading(2, title.clone(), title);
            self.table(process, &["activities", "name"]);

            for activity in activities {
                let data: Vec<_> = activity
                    .data_audit
                    .iter()
                    .filter_map(|&id| store.data_audit(id))
                    .collect();
                let own = format!("{} (data audits: {})", activity.named.name, data.len());
                self.heading(3, format!("{} > {own}", process.named.name), own);
                self.table(activity, &["name", "data_audit"]);

                for audit in data {
                    self.heading(
                        4,
                        format!(
                            "{} > {} > {}",
                            process.named.name, activity.named.name, audit.named.name
                        ),
                        audit.named.name.clone(),
                    );
                    self.data_audit(audit);
                }
            }
        }
        self.blocks
    }

    fn data_audit(&mut self, audit: &DataAudit) {
        let store = self.store;
        self.table(
            audit,
            &[
                "name",
                "subject_category",
                "management",
                "breach_detection",
                "breach_response",
                "dpia",
            ],
        );

        self.caption("Data Subject Categories");
        let subjects: Vec<_> = audit
            .subject_category
            .iter()
            .filter_map(|&id| store.list_entry(id))
            .collect();
        if subjects.is_empty() {
            self.placeholder(NO_SUBJECT_CATEGORIES);
        }
        for subject in subjects {
            self.table(subject, &[]);
        }

        self.caption("Data Management Policy");
        match audit.management.and_then(|id| store.management_policy(id)) {
            Some(policy) => {
                self.table(policy, &["processor_contracts"]);
                self.caption("Data Transfers (to third parties)");
                let contracts: Vec<_> = policy
                    .processor_contracts
                    .iter()
                    .filter_map(|&id| store.processor_contract(id))
                    .collect();
                if contracts.is_empty() {
                    self.placeholder(NO_TRANSFERS);
                }
                for contract in contracts {
                    self.table(contract, &["processor"]);
                    if let Some(processor) = store.third_party(contract.processor) {
                        self.table(processor, &[]);
                    }
                }
            }
            None => self.placeholder(NO_MANAGEMENT_POLICY),
        }

        self.caption("Data Breach Detection");
        match audit.breach_detection.and_then(|id| store.breach_detection(id)) {
            Some(detection) => self.table(detection, &[]),
            None => self.placeholder(NO_BREACH_DETECTION),
        }

        self.caption("Data Breach Response");
        match audit.breach_response.and_then(|id| store.breach_response(id)) {
            Some(response) => self.table(response, &[]),
            None => self.placeholder(NO_BREACH_RESPONSE),
        }

        self.caption("Data Protection Impact Assessment");
        match audit.dpia.and_then(|id| store.dpia(id)) {
            Some(dpia) => self.table(dpia, &[]),
            None => self.placeholder(NO_DPIA),
        }
    }
}
